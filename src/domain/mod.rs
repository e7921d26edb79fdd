//! Domain value objects and types.
//!
//! Type-safe wrappers for the two validated contact fields. Construction
//! runs the format check, so a held `EmailAddress` or `PhoneNumber` is
//! always well-formed.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
