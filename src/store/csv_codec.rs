//! Comma-delimited encoding of a contact list.
//!
//! Layout is a fixed `name,phone,email` header followed by one row per
//! contact. Quoting is minimal: only fields containing a delimiter, quote or
//! line break are quoted. Rows end in CRLF.

use crate::error::StoreResult;
use crate::models::{Contact, CONTACT_FIELDS};
use std::io::{Read, Write};

/// Write `contacts` as CSV, header first.
///
/// The header is written even when `contacts` is empty.
pub fn write_contacts<W: Write>(writer: W, contacts: &[Contact]) -> StoreResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(CONTACT_FIELDS)?;
    for contact in contacts {
        wtr.serialize(contact)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a CSV contact list.
///
/// Columns are matched by header name, so their order in the file does not
/// matter. Values are taken verbatim. Empty input yields an empty list.
///
/// # Errors
///
/// Any malformed row (missing column, wrong field count, invalid UTF-8) fails
/// the whole read.
pub fn read_contacts<R: Read>(reader: R) -> StoreResult<Vec<Contact>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut contacts = Vec::new();
    for record in rdr.deserialize::<Contact>() {
        contacts.push(record?);
    }
    Ok(contacts)
}
