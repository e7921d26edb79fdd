//! Contact storage.
//!
//! The in-memory ordered store and the tabular text codec it persists with.

pub mod contact_store;
pub mod csv_codec;

pub use contact_store::{ContactStore, LoadOutcome};
pub use csv_codec::{read_contacts, write_contacts};
