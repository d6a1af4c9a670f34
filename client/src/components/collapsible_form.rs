//! Expandable panel wrapping an entry form.

use leptos::prelude::*;

use crate::state::ui::{FormPanel, UiState, panel_class};

/// Button toggling `panel` open/closed.
#[component]
pub fn PanelToggle(panel: FormPanel, #[prop(into)] label: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button class="btn btn-primary" on:click=move |_| ui.update(|u| u.toggle_form(panel))>
            {label}
        </button>
    }
}

/// Panel that is hidden until toggled open.
#[component]
pub fn CollapsibleForm(panel: FormPanel, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div id=panel.element_id() class=move || panel_class("form-panel", ui.get().is_open(panel))>
            {children()}
        </div>
    }
}
