//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `RwSignal<UiState>` and `RwSignal<NotificationsState>`;
//! pages own their `CheckoutState` locally.

pub mod checkout;
pub mod notifications;
pub mod ui;
