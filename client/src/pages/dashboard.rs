//! Dashboard with the new invoice and new payment slip panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both panels are plain forms posted with `net::api::submit_form`. The
//! server answers with the URL of the generated document, which is downloaded
//! straight away. Drafts of both forms survive reloads through `util::autosave`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::collapsible_form::{CollapsibleForm, PanelToggle};
use crate::state::notifications::NotificationsState;
use crate::state::ui::FormPanel;
use crate::util::autosave;
use crate::util::format::{format_currency, format_date};

pub const INVOICE_FORM_ID: &str = "invoiceForm";
pub const PAYMENT_FORM_ID: &str = "paymentForm";
pub const INVOICE_DRAFT_KEY: &str = "epausa_invoice_draft";
pub const PAYMENT_DRAFT_KEY: &str = "epausa_payment_draft";
const DEFAULT_PAYMENT_PURPOSE: &str = "Porez na dohodak";

/// Parse a user-entered amount; accepts `,` or `.` as the decimal mark.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let amount = raw.trim().replace(',', ".").parse::<f64>().ok()?;
    amount.is_finite().then_some(amount)
}

/// Formatted preview of an amount field, empty until it parses.
pub fn amount_preview(raw: &str) -> String {
    parse_amount(raw).map(format_currency).unwrap_or_default()
}

/// Last path segment of a download URL, used as the saved file name.
pub fn file_name_from_url(url: &str) -> String {
    url.split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').find(|s| !s.is_empty()))
        .unwrap_or("dokument")
        .to_owned()
}

#[derive(Clone, Copy)]
struct DocumentForm {
    form_id: &'static str,
    draft_key: &'static str,
    endpoint: &'static str,
    panel: FormPanel,
    success: &'static str,
}

const INVOICE: DocumentForm = DocumentForm {
    form_id: INVOICE_FORM_ID,
    draft_key: INVOICE_DRAFT_KEY,
    endpoint: crate::net::api::INVOICE_ENDPOINT,
    panel: FormPanel::NewInvoice,
    success: "✅ Faktura kreirana",
};

const PAYMENT: DocumentForm = DocumentForm {
    form_id: PAYMENT_FORM_ID,
    draft_key: PAYMENT_DRAFT_KEY,
    endpoint: crate::net::api::PAYMENT_SLIP_ENDPOINT,
    panel: FormPanel::NewPayment,
    success: "✅ Uplatnica kreirana",
};

/// Submit handler shared by both panels.
fn submit_document(form: DocumentForm, busy: RwSignal<bool>) -> impl Fn(leptos::ev::SubmitEvent) + Copy {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    move |ev| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notifications::{NotificationKind, notify};
            use crate::util::dom;

            match crate::net::api::submit_form(form.form_id, form.endpoint).await {
                Ok(response) => {
                    notify(notifications, form.success, NotificationKind::Success);
                    if let Some(url) = response.file_url.as_deref() {
                        dom::download_file(url, &file_name_from_url(url));
                    }
                    autosave::clear(form.draft_key);
                    ui.update(|u| u.toggle_form(form.panel));
                }
                Err(err) => notify(notifications, err.user_message(), NotificationKind::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (notifications, ui, form.endpoint, form.panel, form.success, form.draft_key);
    }
}

#[component]
fn InvoicePanel() -> impl IntoView {
    let busy = RwSignal::new(false);
    let datum = RwSignal::new(String::new());
    let iznos = RwSignal::new(String::new());
    let on_submit = submit_document(INVOICE, busy);

    view! {
        <CollapsibleForm panel=FormPanel::NewInvoice>
            <form
                id=INVOICE.form_id
                class="grid grid-cols-2 gap-4"
                on:submit=on_submit
                on:input=move |_| autosave::save(INVOICE.form_id, INVOICE.draft_key)
            >
                <input type="text" name="broj" placeholder="Broj fakture" required />
                <input type="text" name="klijent" placeholder="Klijent" required />
                <div>
                    <input
                        type="date"
                        name="datum"
                        required
                        prop:value=move || datum.get()
                        on:input=move |ev| datum.set(event_target_value(&ev))
                    />
                    <span class="text-xs text-gray-500">{move || format_date(&datum.get()).unwrap_or_default()}</span>
                </div>
                <div>
                    <input
                        type="text"
                        name="iznos"
                        inputmode="decimal"
                        placeholder="Iznos"
                        required
                        prop:value=move || iznos.get()
                        on:input=move |ev| iznos.set(event_target_value(&ev))
                    />
                    <span class="text-xs text-gray-500">{move || amount_preview(&iznos.get())}</span>
                </div>
                <textarea name="opis" class="col-span-2" placeholder="Opis"></textarea>
                <button type="submit" class="btn btn-primary col-span-2" disabled=move || busy.get()>
                    "Kreiraj fakturu"
                </button>
            </form>
        </CollapsibleForm>
    }
}

#[component]
fn PaymentPanel() -> impl IntoView {
    let busy = RwSignal::new(false);
    let iznos = RwSignal::new(String::new());
    let on_submit = submit_document(PAYMENT, busy);

    view! {
        <CollapsibleForm panel=FormPanel::NewPayment>
            <form
                id=PAYMENT.form_id
                class="grid grid-cols-2 gap-4"
                on:submit=on_submit
                on:input=move |_| autosave::save(PAYMENT.form_id, PAYMENT.draft_key)
            >
                <input type="text" name="primalac" placeholder="Primalac" required />
                <div>
                    <input
                        type="text"
                        name="iznos"
                        inputmode="decimal"
                        placeholder="Iznos"
                        required
                        prop:value=move || iznos.get()
                        on:input=move |ev| iznos.set(event_target_value(&ev))
                    />
                    <span class="text-xs text-gray-500">{move || amount_preview(&iznos.get())}</span>
                </div>
                <input type="text" name="svrha" value=DEFAULT_PAYMENT_PURPOSE />
                <input type="text" name="poziv" placeholder="Poziv na broj" />
                <button type="submit" class="btn btn-primary col-span-2" disabled=move || busy.get()>
                    "Kreiraj uplatnicu"
                </button>
            </form>
        </CollapsibleForm>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    Effect::new(move || {
        for form in [INVOICE, PAYMENT] {
            autosave::restore(form.form_id, form.draft_key);
        }
    });

    view! {
        <div class="dashboard-page p-6">
            <div class="flex gap-2 mb-4">
                <PanelToggle panel=FormPanel::NewInvoice label="Nova faktura" />
                <PanelToggle panel=FormPanel::NewPayment label="Nova uplatnica" />
            </div>
            <InvoicePanel />
            <PaymentPanel />
        </div>
    }
}
