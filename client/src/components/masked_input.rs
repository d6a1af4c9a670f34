//! Inputs that reformat themselves while the user types.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each input owns a `RwSignal<String>` supplied by the page. On every
//! `input` event the raw text runs through a mask from `util::mask` and the
//! formatted value is written back, so the signal only ever holds masked text.
//! The border color follows the mask's [`FieldState`].

#[cfg(test)]
#[path = "masked_input_test.rs"]
mod masked_input_test;

use leptos::prelude::*;

use crate::util::card_brand::CardBrand;
use crate::util::mask::{self, FieldState, Masked};

const INPUT_CLASS: &str = "w-full px-4 py-2 border rounded-lg";

/// Input classes for a field in `state`.
pub fn input_class(state: FieldState) -> String {
    match state.border_class() {
        "" => INPUT_CLASS.to_owned(),
        border => format!("{INPUT_CLASS} {border}"),
    }
}

/// Counter text shown next to the JIB field.
pub fn digit_counter(digits: usize, total: usize) -> String {
    format!("{digits}/{total}")
}

#[component]
fn MaskedField(
    id: &'static str,
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    mask: fn(&str) -> Masked,
    #[prop(optional)] inputmode: Option<&'static str>,
) -> impl IntoView {
    let state = move || mask(&value.get()).state;

    view! {
        <input
            type="text"
            id=id
            name=name
            placeholder=placeholder
            inputmode=inputmode
            autocomplete="off"
            class=move || input_class(state())
            prop:value=move || value.get()
            on:input=move |ev| value.set(mask(&event_target_value(&ev)).value)
        />
    }
}

/// 13-digit JIB with a live digit counter.
#[component]
pub fn JibInput(value: RwSignal<String>) -> impl IntoView {
    let count = move || mask::mask_jib(&value.get()).digits.len();

    view! {
        <label for="jib">"JIB *"</label>
        <MaskedField
            id="jib"
            name="jib"
            placeholder="4400000000000"
            value=value
            mask=mask::mask_jib
            inputmode="numeric"
        />
        <span id="jibCount" class="text-xs text-gray-500">
            {move || digit_counter(count(), mask::JIB.len())}
        </span>
    }
}

/// Bank account number, grouped `XXX-XXX-XXXXXXXXXXX-X`.
#[component]
pub fn RacunInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for="racun">"Broj računa *"</label>
        <MaskedField
            id="racun"
            name="racun"
            placeholder="555-000-00000000000-0"
            value=value
            mask=mask::mask_racun
            inputmode="numeric"
        />
    }
}

/// Card number with a brand badge in the label.
#[component]
pub fn CardNumberInput(value: RwSignal<String>) -> impl IntoView {
    let brand = move || CardBrand::detect(&value.get());

    view! {
        <label for="card_number">
            "Broj kartice *"
            {move || brand().map(|b| view! { <span class=b.badge_class()>{b.label()}</span> })}
        </label>
        <MaskedField
            id="card_number"
            name="card_number"
            placeholder="1234 5678 9012 3456"
            value=value
            mask=mask::mask_card_number
            inputmode="numeric"
        />
    }
}

#[component]
pub fn ExpiryInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for="card_expiry">"Datum isteka *"</label>
        <MaskedField
            id="card_expiry"
            name="card_expiry"
            placeholder="MM/YY"
            value=value
            mask=mask::mask_expiry
            inputmode="numeric"
        />
    }
}

#[component]
pub fn CvvInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for="card_cvv">"CVV *"</label>
        <MaskedField
            id="card_cvv"
            name="card_cvv"
            placeholder="123"
            value=value
            mask=mask::mask_cvv
            inputmode="numeric"
        />
    }
}

/// Card holder name, forced to capitals.
#[component]
pub fn CardNameInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for="card_name">"Ime na kartici *"</label>
        <input
            type="text"
            id="card_name"
            name="card_name"
            placeholder="IME PREZIME"
            autocomplete="cc-name"
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:input=move |ev| value.set(mask::uppercase_card_name(&event_target_value(&ev)))
        />
    }
}
