//! Rule codes such as `W101` and `E102`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::severity::Severity;

/// Whether a code names a hard problem (`E`) or a suspicious construct (`W`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// `E` codes. Output generated from such a machine is wrong.
    Error,
    /// `W` codes. Output is generated but probably not what was meant.
    Warning,
}

impl Category {
    /// The letter that starts every code in this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }

    /// The severity a finding in this category is reported at unless overridden.
    pub fn default_severity(self) -> Severity {
        match self {
            Category::Error => Severity::Error,
            Category::Warning => Severity::Warning,
        }
    }
}

/// A lint code: a category letter and a three-digit number.
///
/// Codes are written as text in `fsmgen.toml`, on the command line, and in JSON
/// reports, so they serialize as `"W101"` rather than as a struct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DiagnosticCode {
    /// The category letter.
    pub category: Category,
    /// The number within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// Text that is not a category letter followed by a number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a diagnostic code; expected a form like `W101`")]
pub struct ParseCodeError(pub String);

impl FromStr for DiagnosticCode {
    type Err = ParseCodeError;

    /// Parses `W101` or `e102`; the letter is case-insensitive.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCodeError(text.to_string());
        let mut chars = text.chars();
        let category = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('E') => Category::Error,
            Some('W') => Category::Warning,
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(category, number))
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DiagnosticCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
