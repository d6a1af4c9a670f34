//! Registration and checkout page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `/register/?plan=..&period=..`; this page binds every
//! field to a signal, masks the fixed-shape inputs, shows the live price and
//! keeps a draft of the form in `localStorage` until it is submitted.
//!
//! DESIGN
//! ======
//! Submission runs client validation first. A failure blocks the native submit,
//! alerts the message and focuses the offending field. On success the combined
//! `full_name` is appended as a hidden field, the simulated payment runs behind
//! the loading overlay and the form is then submitted natively.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::masked_input::{CardNameInput, CardNumberInput, CvvInput, ExpiryInput, JibInput, RacunInput};
use crate::components::password_match::PasswordMatchHint;
use crate::components::pricing_summary::PricingSummary;
use crate::state::checkout::CheckoutState;
use crate::util::pricing::{self, BillingPeriod};
use crate::util::validation::{self, RegistrationForm};
use crate::util::{autosave, dom};

pub const FORM_ID: &str = "registerForm";
pub const DRAFT_KEY: &str = "epausa_register_draft";

/// Initial checkout selection from the `plan` and `period` query parameters.
pub fn checkout_from_query(plan: Option<&str>, period: Option<&str>) -> CheckoutState {
    let mut checkout = CheckoutState::for_plan(plan.unwrap_or(pricing::DEFAULT_PLAN));
    if let Some(period) = period.and_then(BillingPeriod::parse) {
        checkout.period = period;
    }
    checkout
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Procesiranje..." } else { "Registruj se i plati" }
}

#[derive(Clone, Copy)]
struct FormSignals {
    ime: RwSignal<String>,
    prezime: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    password_confirm: RwSignal<String>,
    jib: RwSignal<String>,
    racun: RwSignal<String>,
    card_number: RwSignal<String>,
    card_expiry: RwSignal<String>,
    card_cvv: RwSignal<String>,
    card_name: RwSignal<String>,
}

impl FormSignals {
    fn new() -> Self {
        Self {
            ime: RwSignal::new(String::new()),
            prezime: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            password_confirm: RwSignal::new(String::new()),
            jib: RwSignal::new(String::new()),
            racun: RwSignal::new(String::new()),
            card_number: RwSignal::new(String::new()),
            card_expiry: RwSignal::new(String::new()),
            card_cvv: RwSignal::new(String::new()),
            card_name: RwSignal::new(String::new()),
        }
    }

    fn snapshot(self) -> RegistrationForm {
        RegistrationForm {
            ime: self.ime.get_untracked(),
            prezime: self.prezime.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            password_confirm: self.password_confirm.get_untracked(),
            jib: self.jib.get_untracked(),
            racun: self.racun.get_untracked(),
            card_number: self.card_number.get_untracked(),
            card_expiry: self.card_expiry.get_untracked(),
            card_cvv: self.card_cvv.get_untracked(),
            card_name: self.card_name.get_untracked(),
        }
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            type=kind
            id=id
            name=id
            class="w-full px-4 py-2 border rounded-lg"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let query = use_query_map();
    let checkout = RwSignal::new(query.with_untracked(|q| {
        checkout_from_query(q.get("plan").as_deref(), q.get("period").as_deref())
    }));
    let fields = FormSignals::new();
    let submitting = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let notifications = expect_context::<RwSignal<crate::state::notifications::NotificationsState>>();

    Effect::new(move || {
        let restored = autosave::restore(FORM_ID, DRAFT_KEY);
        if restored > 0 {
            leptos::logging::log!("register: restored draft with {restored} field(s)");
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let accepted = match validation::validate_registration(&fields.snapshot()) {
            Ok(accepted) => accepted,
            Err(err) => {
                dom::alert(err.message);
                dom::focus_element(err.field.element_id());
                return;
            }
        };
        if let Some(name) = accepted.full_name.as_deref() {
            dom::append_hidden_input(FORM_ID, "full_name", name);
        }
        submitting.set(true);
        autosave::clear(DRAFT_KEY);

        #[cfg(feature = "hydrate")]
        {
            let (plan, amount) = checkout.with_untracked(|c| (c.plan.name, c.price()));
            leptos::task::spawn_local(async move {
                let outcome = crate::net::payment::process_payment(plan, amount).await;
                if outcome.success {
                    crate::state::notifications::notify(
                        notifications,
                        outcome.message,
                        crate::state::notifications::NotificationKind::Success,
                    );
                    dom::submit_form(FORM_ID);
                } else {
                    dom::alert(&outcome.message);
                    submitting.set(false);
                }
            });
        }
    };

    view! {
        <div class="register-page max-w-2xl mx-auto p-6">
            <h1 class="text-2xl font-bold mb-4">"Registracija"</h1>
            <form
                id=FORM_ID
                method="post"
                on:submit=on_submit
                on:input=move |_| autosave::save(FORM_ID, DRAFT_KEY)
            >
                <section class="grid grid-cols-2 gap-4">
                    <div><TextField id="ime" label="Ime *" value=fields.ime /></div>
                    <div><TextField id="prezime" label="Prezime *" value=fields.prezime /></div>
                    <div class="col-span-2"><TextField id="email" label="Email *" kind="email" value=fields.email /></div>
                    <div><TextField id="password" label="Lozinka *" kind="password" value=fields.password /></div>
                    <div>
                        <TextField id="password_confirm" label="Potvrda lozinke *" kind="password" value=fields.password_confirm />
                        <PasswordMatchHint password=fields.password confirm=fields.password_confirm />
                    </div>
                </section>
                <section class="grid grid-cols-2 gap-4 mt-6">
                    <div><JibInput value=fields.jib /></div>
                    <div><RacunInput value=fields.racun /></div>
                </section>
                <section class="mt-6">
                    <PricingSummary checkout=checkout />
                </section>
                <section class="grid grid-cols-2 gap-4 mt-6">
                    <div class="col-span-2"><CardNumberInput value=fields.card_number /></div>
                    <div><ExpiryInput value=fields.card_expiry /></div>
                    <div><CvvInput value=fields.card_cvv /></div>
                    <div class="col-span-2"><CardNameInput value=fields.card_name /></div>
                </section>
                <button type="submit" class="btn btn-primary w-full mt-6" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get())}
                </button>
            </form>
        </div>
    }
}
