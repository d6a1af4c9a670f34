use super::*;

#[test]
fn yearly_label_mentions_free_months() {
    assert_eq!(period_label(BillingPeriod::Monthly), "Mjesečno");
    assert!(period_label(BillingPeriod::Yearly).contains("gratis"));
}

#[test]
fn unchecked_radio_change_keeps_period() {
    assert_eq!(
        selected_period(BillingPeriod::Monthly, BillingPeriod::Yearly, false),
        BillingPeriod::Monthly
    );
    assert_eq!(
        selected_period(BillingPeriod::Monthly, BillingPeriod::Yearly, true),
        BillingPeriod::Yearly
    );
}
