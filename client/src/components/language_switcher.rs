//! Language buttons; choosing a language hands the switch to the server.
//!
//! Every language stays clickable, the active one included, so the switch
//! never depends on a `change` event firing.

#[cfg(test)]
#[path = "language_switcher_test.rs"]
mod language_switcher_test;

use leptos::prelude::*;

use crate::util::navigation::{self, Language};

/// Button classes; the active language is highlighted.
pub fn button_class(lang: Language, active: Language) -> &'static str {
    if lang == active { "px-2 py-1 rounded font-semibold underline" } else { "px-2 py-1 rounded" }
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let active = RwSignal::new(Language::default());

    Effect::new(move || active.set(navigation::current_language()));

    view! {
        <div class="language-switcher flex gap-1">
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            type="button"
                            title=lang.label()
                            class=move || button_class(lang, active.get())
                            on:click=move |_| navigation::change_language(lang)
                        >
                            {lang.code().to_ascii_uppercase()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
