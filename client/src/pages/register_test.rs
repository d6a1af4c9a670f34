use super::*;

#[test]
fn query_selects_plan_and_period() {
    let checkout = checkout_from_query(Some("Business"), Some("yearly"));
    assert_eq!(checkout.plan.name, "Business");
    assert_eq!(checkout.period, BillingPeriod::Yearly);
    assert_eq!(checkout.price(), 490);
}

#[test]
fn missing_or_unknown_query_uses_defaults() {
    let checkout = checkout_from_query(None, Some("weekly"));
    assert_eq!(checkout.plan.name, "Professional");
    assert_eq!(checkout.period, BillingPeriod::Monthly);
}

#[test]
fn submit_label_reflects_processing() {
    assert_eq!(submit_label(true), "Procesiranje...");
    assert_ne!(submit_label(false), submit_label(true));
}
