use super::*;

#[test]
fn amount_accepts_comma_decimal_mark() {
    assert_eq!(parse_amount("1234,5"), Some(1234.5));
    assert_eq!(parse_amount(" 10.25 "), Some(10.25));
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("NaN"), None);
}

#[test]
fn amount_preview_formats_currency() {
    assert_eq!(amount_preview("1234,56"), "1.234,56 KM");
    assert_eq!(amount_preview(""), "");
}

#[test]
fn download_name_is_last_path_segment() {
    assert_eq!(file_name_from_url("/media/fakture/F-12.docx"), "F-12.docx");
    assert_eq!(file_name_from_url("/media/uplatnice/u7.png?v=2"), "u7.png");
    assert_eq!(file_name_from_url(""), "dokument");
}

#[test]
fn panels_post_to_their_own_endpoints() {
    assert_eq!(INVOICE.endpoint, "/fakture/");
    assert_eq!(INVOICE.panel, FormPanel::NewInvoice);
    assert_eq!(PAYMENT.endpoint, "/uplatnice/");
    assert_eq!(PAYMENT.panel, FormPanel::NewPayment);
    assert_ne!(INVOICE.draft_key, PAYMENT.draft_key);
    assert!(INVOICE.success.starts_with('✅') && PAYMENT.success.starts_with('✅'));
}
