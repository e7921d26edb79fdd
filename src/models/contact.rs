//! Contact model representing one address book entry.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of a contact row, in file order.
pub const CONTACT_FIELDS: [&str; 3] = ["name", "phone", "email"];

/// A single address book entry.
///
/// Fields are plain strings: contacts read back from a file are trusted
/// as-is, so the type itself does not enforce the phone/email formats.
/// Use [`Contact::validated`] to build one from user input.
///
/// Field declaration order matches [`CONTACT_FIELDS`] and is the CSV column
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Display name
    pub name: String,

    /// Local-format phone number
    pub phone: String,

    /// Email address
    pub email: String,
}

impl Contact {
    /// Create a contact without validating any field.
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Create a contact, checking the email first and then the phone.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a `ValidationError`.
    pub fn validated(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = EmailAddress::new(email)?;
        let phone = PhoneNumber::new(phone)?;
        Ok(Self {
            name: name.into(),
            phone: phone.into_inner(),
            email: email.into_inner(),
        })
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        write!(f, "Email: {}", self.email)
    }
}
