//! Local UI chrome state (theme, collapsible entry forms).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page data so controls can
//! toggle panels without knowing which page renders them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Entry forms that can be expanded/collapsed in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPanel {
    NewInvoice,
    NewPayment,
}

impl FormPanel {
    /// DOM id of the panel element.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::NewInvoice => "newInvoiceForm",
            Self::NewPayment => "newPaymentForm",
        }
    }
}

/// UI state for theme and panel visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub new_invoice_open: bool,
    pub new_payment_open: bool,
}

impl UiState {
    pub fn is_open(&self, panel: FormPanel) -> bool {
        match panel {
            FormPanel::NewInvoice => self.new_invoice_open,
            FormPanel::NewPayment => self.new_payment_open,
        }
    }

    /// Flip a panel between shown and hidden.
    pub fn toggle_form(&mut self, panel: FormPanel) {
        let open = match panel {
            FormPanel::NewInvoice => &mut self.new_invoice_open,
            FormPanel::NewPayment => &mut self.new_payment_open,
        };
        *open = !*open;
    }
}

/// Panel classes; closed panels carry `hidden`.
pub fn panel_class(base: &str, open: bool) -> String {
    if open { base.to_owned() } else { format!("{base} hidden") }
}
