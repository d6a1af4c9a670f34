use super::*;

#[test]
fn monthly_without_promo_is_base_price() {
    assert_eq!(calculate_price(100, BillingPeriod::Monthly, None), 100);
}

#[test]
fn yearly_charges_ten_months() {
    assert_eq!(calculate_price(100, BillingPeriod::Yearly, None), 1000);
    assert_eq!(calculate_price(29, BillingPeriod::Yearly, None), 290);
}

#[test]
fn referral_takes_twenty_percent() {
    assert_eq!(calculate_price(100, BillingPeriod::Monthly, Some("REFERRAL20")), 80);
}

#[test]
fn promo_lookup_is_case_insensitive() {
    assert_eq!(calculate_price(100, BillingPeriod::Monthly, Some("referral20")), 80);
    assert_eq!(calculate_price(100, BillingPeriod::Monthly, Some(" Friend50 ")), 50);
}

#[test]
fn unknown_promo_has_no_effect() {
    assert_eq!(calculate_price(100, BillingPeriod::Monthly, Some("BOGUS")), 100);
    assert_eq!(calculate_price(100, BillingPeriod::Monthly, Some("")), 100);
}

#[test]
fn earlybird_is_free() {
    assert_eq!(calculate_price(49, BillingPeriod::Yearly, Some("EARLYBIRD100")), 0);
}

#[test]
fn discounts_round_half_up() {
    // 15 * 0.5 = 7.5
    assert_eq!(calculate_price(15, BillingPeriod::Monthly, Some("FRIEND50")), 8);
    // 29 * 0.7 = 20.3
    assert_eq!(calculate_price(29, BillingPeriod::Monthly, Some("LAUNCH2026")), 20);
    // 49 * 0.8 = 39.2
    assert_eq!(calculate_price(49, BillingPeriod::Monthly, Some("REFERRAL20")), 39);
}

#[test]
fn promo_table_durations() {
    assert_eq!(lookup_promo("EARLYBIRD100").and_then(|p| p.duration_months), Some(6));
    assert_eq!(lookup_promo("REFERRAL20").map(|p| p.duration_months), Some(None));
    assert_eq!(lookup_promo("friend50").map(|p| p.code), Some("FRIEND50"));
}

#[test]
fn billing_period_parses_wire_names() {
    assert_eq!(BillingPeriod::parse("yearly"), Some(BillingPeriod::Yearly));
    assert_eq!(BillingPeriod::parse("monthly"), Some(BillingPeriod::Monthly));
    assert_eq!(BillingPeriod::parse("weekly"), None);
    assert_eq!(BillingPeriod::Yearly.as_str(), "yearly");
}

#[test]
fn plan_lookup_falls_back_to_professional() {
    assert_eq!(plan_by_name("Business").monthly_price, 49);
    assert_eq!(plan_by_name("Unknown").name, "Professional");
    assert_eq!(plan_by_name("").monthly_price, 29);
}
