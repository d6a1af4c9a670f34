//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and page chrome while reading/writing
//! shared state from Leptos context providers.

pub mod collapsible_form;
pub mod dark_mode_toggle;
pub mod language_switcher;
pub mod masked_input;
pub mod notification_stack;
pub mod password_match;
pub mod pricing_summary;
pub mod upload_zone;
