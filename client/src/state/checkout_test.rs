use super::*;

#[test]
fn default_checkout_is_professional_monthly() {
    let state = CheckoutState::default();
    assert_eq!(state.plan.name, "Professional");
    assert_eq!(state.period, BillingPeriod::Monthly);
    assert_eq!(state.price(), 29);
}

#[test]
fn yearly_period_multiplies_by_ten() {
    let mut state = CheckoutState::for_plan("Business");
    state.period = BillingPeriod::Yearly;
    assert_eq!(state.list_price(), 490);
    assert_eq!(state.price(), 490);
}

#[test]
fn promo_code_discounts_price() {
    let mut state = CheckoutState::for_plan("Enterprise");
    state.promo_code = "launch2026".to_owned();
    assert_eq!(state.promo().map(|p| p.code), Some("LAUNCH2026"));
    assert_eq!(state.price(), 69);
    assert_eq!(state.list_price(), 99);
}

#[test]
fn promo_status_reports_match_or_unknown() {
    let mut state = CheckoutState::default();
    assert_eq!(state.promo_status(), None);
    state.promo_code = "FRIEND50".to_owned();
    assert_eq!(state.promo_status().as_deref(), Some("✓ 50% OFF 3 mjeseca"));
    state.promo_code = "NOPE".to_owned();
    assert_eq!(state.promo_status().as_deref(), Some("✗ Nepoznat promo kod"));
}

#[test]
fn unknown_plan_falls_back_to_default() {
    assert_eq!(CheckoutState::for_plan("Gold").plan.name, "Professional");
}
