//! Email inbox: bulk confirmation of parsed incomes and PDF statement upload.

use leptos::prelude::*;

use crate::components::upload_zone::UploadZone;
use crate::net::api;

#[component]
pub fn InboxPage() -> impl IntoView {
    let busy = RwSignal::new(false);

    let on_confirm_all = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::{dom, navigation};

            let result = api::confirm_all(&navigation::current_href()).await;
            let feedback = api::confirm_all_feedback(&result);
            dom::alert(&feedback.message);
            if feedback.reload {
                navigation::reload();
            } else {
                busy.set(false);
            }
        });
    };

    view! {
        <div class="inbox-page p-6">
            <div class="flex justify-between items-center mb-4">
                <h1 class="text-2xl font-bold">"Email Inbox"</h1>
                <button class="btn btn-primary" disabled=move || busy.get() on:click=on_confirm_all>
                    <i class="fas fa-check-double mr-2"></i>
                    "Potvrdi sve"
                </button>
            </div>
            <h2 class="text-lg font-semibold mb-2">"Bankovni izvodi"</h2>
            <UploadZone endpoint=api::DOCUMENT_UPLOAD_ENDPOINT />
        </div>
    }
}
