//! Address Book - an ordered contact store with validated entries and CSV persistence.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for email addresses and phone numbers
//! - **models**: The `Contact` record
//! - **store**: The in-memory `ContactStore` and its CSV codec
//! - **cli**: Interactive numbered-menu session over a store
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use cli::{MenuChoice, Session};
pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::Contact;
pub use store::{ContactStore, LoadOutcome};
