//! Menu options.

use std::fmt;

/// One entry of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Show,
    Clear,
    Exit,
}

impl MenuChoice {
    /// All choices in display order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::List,
        MenuChoice::Show,
        MenuChoice::Clear,
        MenuChoice::Exit,
    ];

    /// Map a typed number to a choice.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::Remove),
            3 => Some(Self::List),
            4 => Some(Self::Show),
            5 => Some(Self::Clear),
            6 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The number the user types for this choice.
    pub fn number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Remove => 2,
            Self::List => 3,
            Self::Show => 4,
            Self::Clear => 5,
            Self::Exit => 6,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Add => "Add entry",
            Self::Remove => "Remove entry",
            Self::List => "List entries",
            Self::Show => "Show entry",
            Self::Clear => "Clear entries",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.number(), self.label())
    }
}
