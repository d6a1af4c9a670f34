use super::*;

#[test]
fn leading_four_is_visa() {
    assert_eq!(CardBrand::detect("4111 1111"), Some(CardBrand::Visa));
}

#[test]
fn leading_five_is_mastercard() {
    assert_eq!(CardBrand::detect("5500"), Some(CardBrand::Mastercard));
}

#[test]
fn other_leading_digits_have_no_brand() {
    for number in ["3782", "6011", "0", "9"] {
        assert_eq!(CardBrand::detect(number), None, "{number}");
    }
}

#[test]
fn empty_number_has_no_brand() {
    assert_eq!(CardBrand::detect(""), None);
    assert_eq!(CardBrand::detect("  "), None);
}

#[test]
fn labels_and_badges_differ_per_brand() {
    assert_eq!(CardBrand::Visa.label(), "Visa");
    assert_eq!(CardBrand::Mastercard.label(), "Mastercard");
    assert!(CardBrand::Visa.badge_class().contains("text-blue-600"));
    assert!(CardBrand::Mastercard.badge_class().contains("text-orange-600"));
}
