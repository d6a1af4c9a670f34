//! Admin panel actions for failed background requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The failed-request table is rendered by the server; each row mounts
//! [`FailedRequestActions`] for its id. [`AdminPage`] offers the same actions
//! for an id typed in by hand.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::api;

/// Parse a request id typed by an administrator.
pub fn parse_request_id(raw: &str) -> Option<u64> {
    raw.trim().trim_start_matches('#').parse().ok().filter(|id| *id > 0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminAction {
    Retry,
    Skip,
}

fn run_action(action: AdminAction, request_id: u64, busy: RwSignal<bool>) {
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::{dom, navigation};

        let feedback = match action {
            AdminAction::Retry => Some(api::retry_feedback(&api::retry_request(request_id).await)),
            AdminAction::Skip => api::skip_feedback(&api::skip_request(request_id).await),
        };
        let Some(feedback) = feedback else {
            busy.set(false);
            return;
        };
        dom::alert(&feedback.message);
        if feedback.reload {
            navigation::reload();
        } else {
            busy.set(false);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (action, request_id);
}

/// Retry and skip buttons for one failed request.
#[component]
pub fn FailedRequestActions(request_id: u64) -> impl IntoView {
    let busy = RwSignal::new(false);

    view! {
        <div class="flex gap-2">
            <button
                class="btn btn-sm btn-primary"
                title=move || api::retry_endpoint(request_id)
                disabled=move || busy.get()
                on:click=move |_| run_action(AdminAction::Retry, request_id, busy)
            >
                <i class="fas fa-redo"></i>
                " Retry"
            </button>
            <button
                class="btn btn-sm btn-secondary"
                title=move || api::skip_endpoint(request_id)
                disabled=move || busy.get()
                on:click=move |_| run_action(AdminAction::Skip, request_id, busy)
            >
                <i class="fas fa-forward"></i>
                " Skip"
            </button>
        </div>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let raw_id = RwSignal::new(String::new());
    let request_id = Memo::new(move |_| parse_request_id(&raw_id.get()));

    view! {
        <div class="admin-page p-6">
            <h1 class="text-2xl font-bold mb-4">"Neuspjeli zahtjevi"</h1>
            <input
                type="text"
                id="requestId"
                placeholder="ID zahtjeva"
                class="px-4 py-2 border rounded-lg"
                prop:value=move || raw_id.get()
                on:input=move |ev| raw_id.set(event_target_value(&ev))
            />
            {move || match request_id.get() {
                Some(id) => view! { <FailedRequestActions request_id=id /> }.into_any(),
                None => view! { <p class="text-xs text-gray-500">"Unesite ID zahtjeva"</p> }.into_any(),
            }}
        </div>
    }
}
