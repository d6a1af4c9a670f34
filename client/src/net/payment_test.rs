#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::test_support::block_on_ready;

#[test]
fn simulated_payment_always_succeeds() {
    let outcome = block_on_ready(process_payment("Professional", 29));
    assert!(outcome.success);
    assert_eq!(outcome.message, "Plaćanje uspješno!");
}

#[test]
fn processing_delay_is_two_seconds() {
    assert_eq!(PROCESSING_DELAY.as_millis(), 2000);
}
