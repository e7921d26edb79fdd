//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// Area code `02`..`08` followed by an eight digit local number. `\d` is any
// Unicode decimal digit; one trailing newline is tolerated.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[2-8]\d{8}\n?$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for local-format phone numbers.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// assert!(PhoneNumber::new("0212345678").is_ok());
/// assert!(PhoneNumber::new("0112345678").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - First digit `0`, second digit between `2` and `8`
    /// - Then exactly eight decimal digits, no separators
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check a phone string without constructing a value.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
