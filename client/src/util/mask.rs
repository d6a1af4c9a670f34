//! Live input masks for fixed-shape numeric fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! Masked inputs re-run a pattern on every `input` event: strip non-digits,
//! truncate to the pattern length, then re-insert separators. The resulting
//! [`FieldState`] drives the border color of the field.
//!
//! Applying a mask to its own output returns the same output.

#[cfg(test)]
#[path = "mask_test.rs"]
mod mask_test;

/// Visual validity of a masked field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Empty,
    Partial,
    Complete,
    Invalid,
}

impl FieldState {
    /// Classify a stripped digit count against the pattern length.
    pub fn from_len(len: usize, target: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else if len == target {
            Self::Complete
        } else {
            Self::Partial
        }
    }

    /// Border utility class applied to the input.
    pub fn border_class(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Partial => "border-yellow-500",
            Self::Complete => "border-green-500",
            Self::Invalid => "border-red-500",
        }
    }
}

/// Digit groups and the separator placed between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskPattern {
    pub groups: &'static [usize],
    pub separator: Option<char>,
}

/// JIB: 13 digits, no separators.
pub const JIB: MaskPattern = MaskPattern { groups: &[13], separator: None };
/// Bank account: 18 digits as `XXX-XXX-XXXXXXXXXXX-X`.
pub const RACUN: MaskPattern = MaskPattern { groups: &[3, 3, 11, 1], separator: Some('-') };
/// Card number: four groups of four.
pub const CARD_NUMBER: MaskPattern = MaskPattern { groups: &[4, 4, 4, 4], separator: Some(' ') };
/// Card expiry: `MM/YY`.
pub const EXPIRY: MaskPattern = MaskPattern { groups: &[2, 2], separator: Some('/') };
/// Card verification value.
pub const CVV: MaskPattern = MaskPattern { groups: &[3], separator: None };

/// Output of a mask pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Masked {
    /// Formatted text written back into the input.
    pub value: String,
    /// Digits kept after stripping and truncation.
    pub digits: String,
    pub state: FieldState,
}

impl MaskPattern {
    /// Total number of digits the pattern holds.
    pub fn len(self) -> usize {
        self.groups.iter().sum()
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Strip, truncate and re-group `raw`.
    pub fn apply(self, raw: &str) -> Masked {
        let digits: String = digits_only(raw).chars().take(self.len()).collect();
        let value = self.group(&digits);
        let state = FieldState::from_len(digits.len(), self.len());
        Masked { value, digits, state }
    }

    fn group(self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + self.groups.len());
        let mut rest = digits;
        for (i, size) in self.groups.iter().enumerate() {
            if rest.is_empty() {
                break;
            }
            if i > 0 {
                if let Some(sep) = self.separator {
                    out.push(sep);
                }
            }
            let take = (*size).min(rest.len());
            out.push_str(&rest[..take]);
            rest = &rest[take..];
        }
        out
    }
}

/// Remove every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn mask_jib(raw: &str) -> Masked {
    JIB.apply(raw)
}

pub fn mask_racun(raw: &str) -> Masked {
    RACUN.apply(raw)
}

pub fn mask_card_number(raw: &str) -> Masked {
    CARD_NUMBER.apply(raw)
}

pub fn mask_cvv(raw: &str) -> Masked {
    CVV.apply(raw)
}

/// Expiry mask. Once two digits are present the month must be 01..=12,
/// otherwise the field is flagged [`FieldState::Invalid`].
pub fn mask_expiry(raw: &str) -> Masked {
    let mut masked = EXPIRY.apply(raw);
    if let Some(month) = leading_month(&masked.digits) {
        if !(1..=12).contains(&month) {
            masked.state = FieldState::Invalid;
        }
    }
    masked
}

fn leading_month(digits: &str) -> Option<u8> {
    digits.get(..2)?.parse().ok()
}

/// Card holder names are entered in capitals, as embossed on the card.
pub fn uppercase_card_name(raw: &str) -> String {
    raw.to_uppercase()
}
