//! Renders queued toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<NotificationsState>` from context; entries remove
//! themselves via the timer scheduled in `state::notifications::notify`.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = n.class();
                    let icon = n.kind.icon_class();
                    view! {
                        <div class=class on:click=move |_| notifications.update(|s| s.dismiss(id))>
                            <i class=icon></i>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
