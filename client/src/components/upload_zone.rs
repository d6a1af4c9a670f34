//! Drag-and-drop zone for bank statement PDFs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking the zone opens a hidden file input; dropping files onto it or
//! picking them from the input both run through `util::upload::select_uploads`.
//! Accepted PDFs are posted to `endpoint` as repeated `documents` fields and
//! the page reloads once the server confirms the import.
//!
//! ERROR HANDLING
//! ==============
//! Rejected files and failed uploads surface as notifications; nothing is
//! retried automatically.

use leptos::html;
use leptos::prelude::*;

use crate::state::notifications::NotificationsState;
use crate::util::upload;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::notifications::{NotificationKind, notify};
#[cfg(feature = "hydrate")]
use crate::util::{dom, navigation};

const ZONE_CLASS: &str = "border-2 border-dashed rounded-lg p-8 text-center cursor-pointer";

#[component]
pub fn UploadZone(#[prop(into)] endpoint: String) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let hovering = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let file_input = NodeRef::<html::Input>::new();
    let endpoint = StoredValue::new(endpoint);

    #[cfg(feature = "hydrate")]
    let handle_files = move |list: Option<web_sys::FileList>| {
        let files = list.map(|l| (0..l.length()).filter_map(|i| l.get(i)).collect::<Vec<_>>());
        let selection = upload::select_uploads(files.unwrap_or_default(), |f: &web_sys::File| f.type_());
        if let Some(message) = selection.feedback() {
            let kind = if selection.accepted.is_empty() { NotificationKind::Error } else { NotificationKind::Info };
            notify(notifications, message, kind);
        }
        if selection.accepted.is_empty() {
            return;
        }
        uploading.set(true);
        dom::set_loading_overlay(true);
        let url = endpoint.get_value();
        leptos::task::spawn_local(async move {
            let result = api::upload_documents(&url, &selection.accepted).await;
            dom::set_loading_overlay(false);
            uploading.set(false);
            match result {
                Ok(response) => {
                    let count = response
                        .count
                        .and_then(|c| usize::try_from(c).ok())
                        .unwrap_or(response.results.len());
                    notify(notifications, upload::uploaded_message(count), NotificationKind::Success);
                    navigation::reload();
                }
                Err(err) => {
                    leptos::logging::warn!("document upload failed: {err}");
                    notify(notifications, err.user_message(), NotificationKind::Error);
                }
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = (notifications, endpoint);

    view! {
        <div
            id="dropZone"
            class=move || upload::zone_class(ZONE_CLASS, hovering.get())
            on:click=move |_| {
                if let Some(input) = file_input.get() {
                    input.click();
                }
            }
            on:dragover=move |ev| {
                ev.prevent_default();
                hovering.set(true);
            }
            on:dragleave=move |_| hovering.set(false)
            on:drop=move |ev| {
                ev.prevent_default();
                hovering.set(false);
                #[cfg(feature = "hydrate")]
                handle_files(ev.data_transfer().and_then(|dt| dt.files()));
            }
        >
            <i class="fas fa-file-pdf text-4xl mb-2"></i>
            <p>
                {move || {
                    if uploading.get() { "Učitavanje..." } else { "Prevucite PDF izvode ovdje ili kliknite" }
                }}
            </p>
            <input
                type="file"
                id="fileInput"
                accept=upload::ACCEPTED_TYPE
                multiple
                class="hidden"
                node_ref=file_input
                on:click=|ev| ev.stop_propagation()
                on:change=move |_| {
                    #[cfg(feature = "hydrate")]
                    {
                        if let Some(input) = file_input.get() {
                            handle_files(input.files());
                            input.set_value("");
                        }
                    }
                }
            />
        </div>
    }
}
