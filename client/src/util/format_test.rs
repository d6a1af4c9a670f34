use super::*;

#[test]
fn currency_uses_dot_grouping_and_comma_decimals() {
    assert_eq!(format_currency(1234.56), "1.234,56 KM");
    assert_eq!(format_currency(1_234_567.0), "1.234.567,00 KM");
}

#[test]
fn currency_small_amounts() {
    assert_eq!(format_currency(0.0), "0,00 KM");
    assert_eq!(format_currency(5.5), "5,50 KM");
    assert_eq!(format_currency(999.999), "1.000,00 KM");
}

#[test]
fn currency_negative_amounts_keep_sign() {
    assert_eq!(format_currency(-29.9), "-29,90 KM");
}

#[test]
fn currency_non_finite_renders_zero() {
    assert_eq!(format_currency(f64::NAN), "0,00 KM");
}

#[test]
fn date_uses_day_month_year() {
    assert_eq!(format_date("2026-10-19").as_deref(), Some("19. 10. 2026."));
    assert_eq!(format_date("2026-01-05").as_deref(), Some("5. 1. 2026."));
}

#[test]
fn date_ignores_time_part() {
    assert_eq!(format_date("2026-03-01T08:30:00Z").as_deref(), Some("1. 3. 2026."));
}

#[test]
fn invalid_dates_are_none() {
    assert_eq!(format_date("2026-13-01"), None);
    assert_eq!(format_date("19.10.2026"), None);
    assert_eq!(format_date(""), None);
}
