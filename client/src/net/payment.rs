//! Checkout payment step.
//!
//! Card processing is simulated: the loading overlay is shown for
//! [`PROCESSING_DELAY`] and the payment always succeeds. The card form is
//! still validated and submitted to the server afterwards.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use std::time::Duration;

use crate::util::dom;

pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub success: bool,
    pub message: String,
}

/// Process a payment of `amount` BAM for `plan`.
pub async fn process_payment(plan: &str, amount: u32) -> PaymentOutcome {
    dom::set_loading_overlay(true);
    #[cfg(feature = "hydrate")]
    {
        log::debug!("processing payment: plan={plan} amount={amount}");
        gloo_timers::future::sleep(PROCESSING_DELAY).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (plan, amount);
    }
    dom::set_loading_overlay(false);

    PaymentOutcome {
        success: true,
        message: "Plaćanje uspješno!".to_owned(),
    }
}
