//! Live hint under the password confirmation field.

use leptos::prelude::*;

use crate::util::validation::PasswordMatch;

#[component]
pub fn PasswordMatchHint(password: RwSignal<String>, confirm: RwSignal<String>) -> impl IntoView {
    let status = move || PasswordMatch::check(&password.get(), &confirm.get());

    view! {
        <p id="passwordMatch" class=move || status().class()>
            {move || status().message()}
        </p>
    }
}
