//! Networking modules for the server's JSON action endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts form-encoded requests, `types` defines the response envelope
//! and error type, and `payment` drives the checkout payment step.

pub mod api;
pub mod payment;
pub mod types;
