//! Checkout selection: plan, billing period and promo code.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::util::pricing::{self, BillingPeriod, Plan, PromoCode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutState {
    pub plan: &'static Plan,
    pub period: BillingPeriod,
    pub promo_code: String,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::for_plan(pricing::DEFAULT_PLAN)
    }
}

impl CheckoutState {
    /// Start checkout for the named plan (unknown names fall back to the default plan).
    pub fn for_plan(name: &str) -> Self {
        Self {
            plan: pricing::plan_by_name(name),
            period: BillingPeriod::Monthly,
            promo_code: String::new(),
        }
    }

    /// Matched promo, if the entered code is known.
    pub fn promo(&self) -> Option<&'static PromoCode> {
        pricing::lookup_promo(&self.promo_code)
    }

    /// Amount due for the selected period after any promo.
    pub fn price(&self) -> u32 {
        pricing::calculate_price(self.plan.monthly_price, self.period, Some(&self.promo_code))
    }

    /// Amount before the promo is applied.
    pub fn list_price(&self) -> u32 {
        pricing::calculate_price(self.plan.monthly_price, self.period, None)
    }

    /// Text next to the promo field: the promo description, or a hint
    /// when a non-empty code is not recognized.
    pub fn promo_status(&self) -> Option<String> {
        if self.promo_code.trim().is_empty() {
            return None;
        }
        Some(match self.promo() {
            Some(promo) => format!("✓ {}", promo.description),
            None => "✗ Nepoznat promo kod".to_owned(),
        })
    }
}
