//! Card brand hint shown next to the card number label.
//!
//! Only the leading digit is inspected; there is no Luhn check.

#[cfg(test)]
#[path = "card_brand_test.rs"]
mod card_brand_test;

/// Brands recognized from the first digit of the card number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
}

impl CardBrand {
    /// Detect the brand from a card number (separators are ignored).
    pub fn detect(card_number: &str) -> Option<Self> {
        match card_number.chars().find(char::is_ascii_digit)? {
            '4' => Some(Self::Visa),
            '5' => Some(Self::Mastercard),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
        }
    }

    /// Text color class of the brand badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Visa => "text-blue-600 text-xs ml-2",
            Self::Mastercard => "text-orange-600 text-xs ml-2",
        }
    }
}
