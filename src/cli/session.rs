//! Menu loop over a `ContactStore`.

use super::menu::MenuChoice;
use crate::error::{StoreError, StoreResult};
use crate::store::{ContactStore, LoadOutcome};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

enum Flow {
    Continue,
    Exit,
}

/// A single interactive session.
///
/// With a backing file set, the file is loaded when [`Session::run`] starts
/// and saved on exit. Without one the session is ephemeral. End of input is
/// treated as choosing Exit.
pub struct Session<'a, R, W> {
    store: &'a mut ContactStore,
    input: R,
    output: W,
    file: Option<PathBuf>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create an ephemeral session.
    pub fn new(store: &'a mut ContactStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            file: None,
        }
    }

    /// Persist to `file`: load at start, save on exit.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Run the menu until Exit or end of input.
    ///
    /// # Errors
    ///
    /// Fails on load/save errors or when the output stream cannot be written.
    pub fn run(mut self) -> StoreResult<()> {
        if let Some(file) = &self.file {
            if let LoadOutcome::Loaded(count) = self.store.load(file)? {
                debug!(count, "Session starting with saved entries");
            }
        }

        loop {
            self.print_menu()?;
            let choice = match self.read_number("Enter your choice: ")? {
                Some(n) => n,
                None => break,
            };

            let flow = match MenuChoice::from_number(choice) {
                Some(choice) => self.handle(choice)?,
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 6."
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.finish()
    }

    fn handle(&mut self, choice: MenuChoice) -> StoreResult<Flow> {
        match choice {
            MenuChoice::Add => self.add_entry(),
            MenuChoice::Remove => self.remove_entry(),
            MenuChoice::List => self.list_entries(),
            MenuChoice::Show => self.show_entry(),
            MenuChoice::Clear => {
                self.store.clear();
                writeln!(self.output, "All entries successfully cleared.")?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add_entry(&mut self) -> StoreResult<Flow> {
        let name = loop {
            match self.read_line("Enter name: ")? {
                Some(name) if name.trim().is_empty() => {
                    writeln!(self.output, "Name cannot be empty.")?;
                }
                Some(name) => break name,
                None => return Ok(Flow::Exit),
            }
        };
        let Some(phone) = self.read_line("Enter phone number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.read_line("Enter email address: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.add(name, phone, email) {
            Ok(()) => writeln!(self.output, "Entry successfully added.")?,
            Err(StoreError::InvalidEmail(_)) => {
                writeln!(self.output, "Invalid email format. Entry not added.")?
            }
            Err(StoreError::InvalidPhone(_)) => {
                writeln!(self.output, "Invalid phone format. Entry not added.")?
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn remove_entry(&mut self) -> StoreResult<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No entries to remove.")?;
            return Ok(Flow::Continue);
        }
        let Some(index) = self.read_index("Enter entry number to remove: ")? else {
            return Ok(Flow::Exit);
        };

        match index.map(|i| self.store.remove(i)) {
            Some(Ok(contact)) => {
                writeln!(self.output, "{} successfully removed.", contact.name)?
            }
            Some(Err(StoreError::OutOfRange { .. })) | None => {
                writeln!(self.output, "Invalid entry number.")?
            }
            Some(Err(e)) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn list_entries(&mut self) -> StoreResult<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "Address book is empty.")?;
            return Ok(Flow::Continue);
        }
        for (number, name) in self.store.list() {
            writeln!(self.output, "{} - {}", number, name)?;
        }
        Ok(Flow::Continue)
    }

    fn show_entry(&mut self) -> StoreResult<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No entries to show.")?;
            return Ok(Flow::Continue);
        }
        let Some(index) = self.read_index("Enter entry number to show: ")? else {
            return Ok(Flow::Exit);
        };

        match index.map(|i| self.store.show(i)) {
            Some(Ok(contact)) => writeln!(self.output, "{}", contact)?,
            Some(Err(StoreError::OutOfRange { .. })) | None => {
                writeln!(self.output, "Invalid entry number.")?
            }
            Some(Err(e)) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn finish(&mut self) -> StoreResult<()> {
        match &self.file {
            Some(file) => {
                self.store.save(file)?;
                writeln!(self.output, "Address book saved. Exiting program.")?;
                info!(path = %file.display(), "Session ended, address book saved");
            }
            None => info!("Session ended"),
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> StoreResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompt for an entry number. `Some(None)` means the number was
    /// negative and can never name an entry.
    fn read_index(&mut self, prompt: &str) -> StoreResult<Option<Option<usize>>> {
        Ok(self
            .read_number(prompt)?
            .map(|n| usize::try_from(n).ok()))
    }

    /// Prompt until an integer is entered. `None` at end of input.
    /// Integers beyond `i64` saturate, so they still read as out of range.
    fn read_number(&mut self, prompt: &str) -> StoreResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_int(&line) {
                Some(n) => return Ok(Some(n)),
                None => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Prompt and read one line without its terminator. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> StoreResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

/// Parse a signed integer, saturating on overflow. `None` if not an integer.
fn parse_int(line: &str) -> Option<i64> {
    match line.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(store: &mut ContactStore, script: &str) -> String {
        let mut output = Vec::new();
        Session::new(store, Cursor::new(script.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let mut store = ContactStore::new();
        let out = run_script(
            &mut store,
            "1\nAda Lovelace\n0298765432\nada@x.co\n3\n6\n",
        );
        assert!(out.contains("Entry successfully added."));
        assert!(out.contains("1 - Ada Lovelace"));
        assert!(out.ends_with("Enter your choice: "));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejections() {
        let mut store = ContactStore::new();
        let out = run_script(
            &mut store,
            "1\nBad\n123\nbad@@x\n1\nBad\n123\nbad@x.co\n6\n",
        );
        assert!(out.contains("Invalid email format. Entry not added."));
        assert!(out.contains("Invalid phone format. Entry not added."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_blank_name_reprompts() {
        let mut store = ContactStore::new();
        let out = run_script(&mut store, "1\n  \nAda\n0298765432\nada@x.co\n6\n");
        assert!(out.contains("Name cannot be empty."));
        assert_eq!(store.show(1).unwrap().name, "Ada");
    }

    #[test]
    fn test_empty_book_messages() {
        let mut store = ContactStore::new();
        let out = run_script(&mut store, "2\n3\n4\n6\n");
        assert!(out.contains("No entries to remove."));
        assert!(out.contains("Address book is empty."));
        assert!(out.contains("No entries to show."));
    }

    #[test]
    fn test_remove_and_show_by_number() {
        let mut store = ContactStore::new();
        store.add("Ada", "0298765432", "ada@x.co").unwrap();
        store.add("Alan", "0212345678", "alan@example.com").unwrap();

        let out = run_script(&mut store, "4\n2\n2\n1\n4\n5\n4\n-1\n6\n");
        assert!(out.contains("Name: Alan\nPhone: 0212345678\nEmail: alan@example.com\n"));
        assert!(out.contains("Ada successfully removed."));
        assert_eq!(out.matches("Invalid entry number.").count(), 2);
        assert_eq!(store.show(1).unwrap().name, "Alan");
    }

    #[test]
    fn test_invalid_input_handling() {
        let mut store = ContactStore::new();
        let out = run_script(&mut store, "abc\n9\n6\n");
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Invalid choice. Please enter a number between 1 and 6."));
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        let mut store = ContactStore::new();
        store.add("Ada", "0298765432", "ada@x.co").unwrap();

        let out = run_script(
            &mut store,
            "99999999999999999999\n2\n99999999999999999999\n4\n-99999999999999999999\n6\n",
        );
        assert!(out.contains("Invalid choice. Please enter a number between 1 and 6."));
        assert_eq!(out.matches("Invalid entry number.").count(), 2);
        assert!(!out.contains("Please enter a valid number."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("1.5"), None);
    }

    #[test]
    fn test_ephemeral_exit_prints_nothing_extra() {
        let mut store = ContactStore::new();
        let out = run_script(&mut store, "6\n");
        assert!(out.ends_with("6 - Exit\n\nEnter your choice: "));
    }

    #[test]
    fn test_clear() {
        let mut store = ContactStore::new();
        store.add("Ada", "0298765432", "ada@x.co").unwrap();
        let out = run_script(&mut store, "5\n6\n");
        assert!(out.contains("All entries successfully cleared."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut store = ContactStore::new();
        let out = run_script(&mut store, "1\nAda\n");
        assert!(out.ends_with("Enter phone number: "));
        assert!(store.is_empty());
    }

    #[test]
    fn test_menu_printed() {
        let mut store = ContactStore::new();
        let out = run_script(&mut store, "6\n");
        assert!(out.starts_with(
            "\nMenu:\n1 - Add entry\n2 - Remove entry\n3 - List entries\n4 - Show entry\n5 - Clear entries\n6 - Exit\n\n"
        ));
    }

    #[test]
    fn test_crlf_input() {
        let mut store = ContactStore::new();
        run_script(&mut store, "1\r\nAda\r\n0298765432\r\nada@x.co\r\n6\r\n");
        assert_eq!(store.show(1).unwrap().email, "ada@x.co");
    }
}
