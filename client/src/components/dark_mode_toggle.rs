//! Header button switching between light and dark theme.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="dark-mode-toggle"
            title="Tamni režim"
            on:click=move |_| {
                let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                ui.update(|u| u.dark_mode = next);
            }
        >
            <i class=move || dark_mode::icon_class(ui.get().dark_mode)></i>
        </button>
    }
}
