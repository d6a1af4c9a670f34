use super::*;

#[test]
fn active_language_is_highlighted() {
    assert!(button_class(Language::En, Language::En).contains("font-semibold"));
    assert!(!button_class(Language::Sr, Language::En).contains("font-semibold"));
}
