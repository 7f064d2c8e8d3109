//! How serious a finding about a machine description is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding, least serious first.
///
/// Only [`Severity::Error`] stops `fsmgen verilog` and `fsmgen dot` from
/// writing output. JSON reports use the same lowercase words as the terminal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A suggestion attached to a run.
    Help,
    /// Extra context attached to a run.
    Note,
    /// Output is generated but may not match the author's intent.
    Warning,
    /// Output would be wrong; generation is refused.
    Error,
}

impl Severity {
    /// Returns `true` for findings that block generation.
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// The ANSI SGR parameters used for this severity's header.
    pub fn ansi_style(self) -> &'static str {
        match self {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
            Severity::Note => "1;36",
            Severity::Help => "1;32",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Help => "help",
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}
