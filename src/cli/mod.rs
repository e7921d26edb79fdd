//! Interactive menu front end.
//!
//! Reads choices and fields line by line, drives a `ContactStore`, and prints
//! results. Generic over the input and output streams so it can be scripted.

pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::Session;
