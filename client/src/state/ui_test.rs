use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_panels_closed() {
    let state = UiState::default();
    assert!(!state.is_open(FormPanel::NewInvoice));
    assert!(!state.is_open(FormPanel::NewPayment));
}

// =============================================================
// toggle_form
// =============================================================

#[test]
fn toggle_form_flips_only_target_panel() {
    let mut state = UiState::default();
    state.toggle_form(FormPanel::NewInvoice);
    assert!(state.new_invoice_open);
    assert!(!state.new_payment_open);
    state.toggle_form(FormPanel::NewInvoice);
    assert!(!state.new_invoice_open);
}

#[test]
fn panel_ids_match_markup() {
    assert_eq!(FormPanel::NewInvoice.element_id(), "newInvoiceForm");
    assert_eq!(FormPanel::NewPayment.element_id(), "newPaymentForm");
}

#[test]
fn closed_panel_class_adds_hidden() {
    assert_eq!(panel_class("card", true), "card");
    assert_eq!(panel_class("card", false), "card hidden");
}
