//! Ordered in-memory contact store with file persistence.

use super::csv_codec::{read_contacts, write_contacts};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of [`ContactStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and replaced the collection with this many contacts.
    Loaded(usize),
    /// No file at the path; the collection was left as it was.
    Missing,
}

/// An insertion-ordered address book.
///
/// Entries are addressed by 1-based position. Positions are not stable:
/// removing entry 2 makes the old entry 3 the new entry 2.
///
/// # Example
///
/// ```
/// use address_book::ContactStore;
///
/// let mut store = ContactStore::new();
/// store.add("Ada Lovelace", "0298765432", "ada@x.co").unwrap();
/// assert_eq!(store.show(1).unwrap().name, "Ada Lovelace");
/// assert!(store.add("Bad", "123", "bad@@x").is_err());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-trusted contacts, keeping their order.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All entries in order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Validate and append a contact.
    ///
    /// The email is checked before the phone. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// `InvalidEmail` or `InvalidPhone`; the store is unchanged on error.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> StoreResult<()> {
        let contact = Contact::validated(name, phone, email)?;
        debug!(name = %contact.name, position = self.contacts.len() + 1, "Contact added");
        self.contacts.push(contact);
        Ok(())
    }

    /// Remove the entry at 1-based `index` and return it.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is 0 or greater than `len()`.
    pub fn remove(&mut self, index: usize) -> StoreResult<Contact> {
        let position = self.position(index)?;
        let contact = self.contacts.remove(position);
        debug!(name = %contact.name, index, "Contact removed");
        Ok(contact)
    }

    /// Lazily list `(entry number, name)` pairs in current order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.contacts
            .iter()
            .enumerate()
            .map(|(i, contact)| (i + 1, contact.name.as_str()))
    }

    /// Look up the entry at 1-based `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is 0 or greater than `len()`.
    pub fn show(&self, index: usize) -> StoreResult<&Contact> {
        let position = self.position(index)?;
        Ok(&self.contacts[position])
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        debug!(removed = self.contacts.len(), "Address book cleared");
        self.contacts.clear();
    }

    /// Overwrite `path` with the whole collection.
    ///
    /// The write is not atomic: a failure part way through can leave a
    /// truncated file. The in-memory collection is never touched.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_contacts(&mut writer, &self.contacts)?;
        writer.flush()?;
        info!(path = %path.display(), count = self.contacts.len(), "Address book saved");
        Ok(())
    }

    /// Replace the collection with the contents of `path`.
    ///
    /// A missing file is not an error and leaves the collection as it was.
    /// The file is parsed fully before anything is replaced, so a parse
    /// failure also leaves the collection unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<LoadOutcome> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No address book file, starting fresh");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let contacts = read_contacts(BufReader::new(file)).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to parse address book");
            e
        })?;

        let count = contacts.len();
        self.contacts = contacts;
        info!(path = %path.display(), count, "Address book loaded");
        Ok(LoadOutcome::Loaded(count))
    }

    fn position(&self, index: usize) -> StoreResult<usize> {
        if index == 0 || index > self.contacts.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(index - 1)
    }
}
