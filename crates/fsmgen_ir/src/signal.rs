//! User-declared wires, registers, and local parameters.

use serde::Serialize;

/// A combinational wire declared alongside the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wire {
    /// The wire name.
    pub name: String,
    /// The bit width; `None` means a scalar wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// The continuous-assignment expression, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
}

/// A register written by action blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Register {
    /// The register name.
    pub name: String,
    /// The bit width; `None` means a scalar register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// The value assigned on reset, `0` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
}

impl Register {
    /// Returns the value the register takes on reset.
    pub fn reset_value(&self) -> &str {
        self.init.as_deref().unwrap_or("0")
    }
}

/// A named constant expression scoped to the generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalParam {
    /// The parameter name.
    pub name: String,
    /// The constant expression.
    pub expr: String,
}

/// Formats the `[msb:0] ` range prefix for a declaration, or nothing for scalars.
pub fn range_prefix(width: Option<u32>) -> String {
    match width {
        Some(w) if w > 1 => format!("[{}:0] ", w - 1),
        _ => String::new(),
    }
}
