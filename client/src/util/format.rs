//! `sr-RS` display formatting for money and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

/// Currency suffix for convertible marks (BAM) in `sr-RS`.
pub const CURRENCY_SUFFIX: &str = "KM";

/// Format an amount as `1.234,56 KM`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("0,00 {CURRENCY_SUFFIX}");
    }
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);
    format!("{sign}{whole},{:02} {CURRENCY_SUFFIX}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format an ISO date (`YYYY-MM-DD`, optionally followed by a time part)
/// as `D. M. YYYY.`. Returns `None` when the date cannot be parsed.
pub fn format_date(iso: &str) -> Option<String> {
    let date = parse_iso_date(iso)?;
    Some(format!("{}. {}. {}.", date.day(), u8::from(date.month()), date.year()))
}

fn parse_iso_date(iso: &str) -> Option<Date> {
    let head = iso.trim().get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}
