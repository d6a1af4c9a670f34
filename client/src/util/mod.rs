//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure field logic
//! (masks, validation, pricing, formatting) from page and component code so
//! the rules are unit-testable without a browser.

pub mod autosave;
pub mod card_brand;
pub mod dark_mode;
pub mod dom;
pub mod format;
pub mod mask;
pub mod navigation;
pub mod pricing;
pub mod ui_persistence;
pub mod upload;
pub mod validation;
