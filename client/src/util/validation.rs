//! Client-side validation mirroring the registration/payment server rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RegisterPage` runs [`validate_registration`] on submit. The first failing
//! rule aborts submission; the page alerts the message and focuses the field
//! named by [`Field::element_id`]. Empty fields are skipped here and left to
//! the `required` attributes and the server.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::util::mask::{self, digits_only};

static JIB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("valid regex"));
static RACUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{18}$").expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static EXPIRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("valid regex"));

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_CARD_NAME_LEN: usize = 3;

/// JIB as typed; separators are ignored, the ASCII digits must number 13.
pub fn is_valid_jib(jib: &str) -> bool {
    JIB_RE.is_match(&digits_only(jib))
}

/// Bank account as typed (masked or not); 18 ASCII digits.
pub fn is_valid_racun(racun: &str) -> bool {
    RACUN_RE.is_match(&digits_only(racun))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `MM/YY` with a month in 01..=12.
pub fn is_valid_expiry(expiry: &str) -> bool {
    EXPIRY_RE.is_match(expiry) && expiry_month(expiry).is_some_and(|m| (1..=12).contains(&m))
}

fn expiry_month(expiry: &str) -> Option<u8> {
    expiry.split('/').next()?.parse().ok()
}

/// Live comparison of the password and its confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordMatch {
    Empty,
    Match,
    Mismatch,
}

impl PasswordMatch {
    pub fn check(password: &str, confirm: &str) -> Self {
        if confirm.is_empty() {
            Self::Empty
        } else if password == confirm {
            Self::Match
        } else {
            Self::Mismatch
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Match => "✓ Lozinke se poklapaju",
            Self::Mismatch => "✗ Lozinke se ne poklapaju",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Empty => "text-xs mt-1",
            Self::Match => "text-xs mt-1 text-green-600",
            Self::Mismatch => "text-xs mt-1 text-red-600",
        }
    }
}

/// Form fields that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Password,
    PasswordConfirm,
    Email,
    Jib,
    Racun,
    CardNumber,
    CardExpiry,
    CardCvv,
    CardName,
}

impl Field {
    /// DOM id of the input, used to move focus after a failure.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::PasswordConfirm => "password_confirm",
            Self::Email => "email",
            Self::Jib => "jib",
            Self::Racun => "racun",
            Self::CardNumber => "card_number",
            Self::CardExpiry => "card_expiry",
            Self::CardCvv => "card_cvv",
            Self::CardName => "card_name",
        }
    }
}

/// First rule that rejected the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Raw input values of the registration and checkout form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub ime: String,
    pub prezime: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub jib: String,
    pub racun: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub card_name: String,
}

/// Values derived from a form that passed validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptedRegistration {
    /// `"{ime} {prezime}"` when both parts are present.
    pub full_name: Option<String>,
}

/// Validate the registration form, stopping at the first failure.
///
/// # Errors
///
/// Returns the failing [`Field`] and the message to show the user.
pub fn validate_registration(form: &RegistrationForm) -> Result<AcceptedRegistration, ValidationError> {
    let password = form.password.as_str();
    let confirm = form.password_confirm.as_str();
    if !password.is_empty() && !confirm.is_empty() && password != confirm {
        return Err(ValidationError::new(Field::PasswordConfirm, "❌ Lozinke se ne poklapaju"));
    }
    if !password.is_empty() && password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            Field::Password,
            "❌ Lozinka mora imati najmanje 8 karaktera",
        ));
    }

    let email = form.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        return Err(ValidationError::new(Field::Email, "❌ Unesite ispravnu email adresu"));
    }

    if !digits_only(&form.jib).is_empty() && !is_valid_jib(&form.jib) {
        return Err(ValidationError::new(Field::Jib, "❌ JIB mora imati tačno 13 cifara"));
    }

    if !digits_only(&form.racun).is_empty() && !is_valid_racun(&form.racun) {
        return Err(ValidationError::new(Field::Racun, "❌ Broj računa mora imati 18 cifara"));
    }

    let card_number = digits_only(&form.card_number);
    if !card_number.is_empty() && card_number.len() != mask::CARD_NUMBER.len() {
        return Err(ValidationError::new(
            Field::CardNumber,
            "❌ Broj kartice mora imati 16 cifara",
        ));
    }

    let expiry = form.card_expiry.as_str();
    if !expiry.is_empty() {
        if !EXPIRY_RE.is_match(expiry) {
            return Err(ValidationError::new(
                Field::CardExpiry,
                "❌ Datum isteka mora biti u formatu MM/YY",
            ));
        }
        if !is_valid_expiry(expiry) {
            return Err(ValidationError::new(
                Field::CardExpiry,
                "❌ Mjesec mora biti između 01 i 12",
            ));
        }
    }

    let cvv = form.card_cvv.as_str();
    if !cvv.is_empty() && cvv.chars().count() != mask::CVV.len() {
        return Err(ValidationError::new(Field::CardCvv, "❌ CVV mora imati 3 cifre"));
    }

    let card_name = form.card_name.trim();
    if !card_name.is_empty() && card_name.chars().count() < MIN_CARD_NAME_LEN {
        return Err(ValidationError::new(
            Field::CardName,
            "❌ Unesite ime i prezime sa kartice",
        ));
    }

    Ok(AcceptedRegistration {
        full_name: full_name(&form.ime, &form.prezime),
    })
}

/// Combine first and last name; `None` unless both are present.
pub fn full_name(ime: &str, prezime: &str) -> Option<String> {
    let (ime, prezime) = (ime.trim(), prezime.trim());
    if ime.is_empty() || prezime.is_empty() {
        return None;
    }
    Some(format!("{ime} {prezime}"))
}
