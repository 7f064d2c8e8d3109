//! Action sets attached to transitions and to state entry, exit, and self-loops.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A set of actions executed on the clock edge when its guard holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Actions {
    /// Expression statements emitted verbatim, one per line.
    Statements(Vec<String>),
    /// Register name to assigned expression, emitted as non-blocking assignments.
    Assignments(IndexMap<String, String>),
}

impl Actions {
    /// Returns `true` if this set contributes no statement.
    pub fn is_empty(&self) -> bool {
        match self {
            Actions::Statements(stmts) => stmts.is_empty(),
            Actions::Assignments(assigns) => assigns.is_empty(),
        }
    }

    /// Renders the set as Verilog statements, each terminated by `;`.
    pub fn statements(&self) -> Vec<String> {
        match self {
            Actions::Statements(stmts) => stmts
                .iter()
                .map(|stmt| {
                    let stmt = stmt.trim();
                    if stmt.ends_with(';') {
                        stmt.to_string()
                    } else {
                        format!("{stmt};")
                    }
                })
                .collect(),
            Actions::Assignments(assigns) => assigns
                .iter()
                .map(|(reg, expr)| format!("{reg} <= {expr};"))
                .collect(),
        }
    }

    /// Renders the set as attribute text.
    ///
    /// A lone statement is its own text; anything else renders as JSON.
    pub fn to_text(&self) -> String {
        match self {
            Actions::Statements(stmts) if stmts.len() == 1 => stmts[0].clone(),
            Actions::Statements(stmts) => {
                Value::Array(stmts.iter().cloned().map(Value::String).collect()).to_string()
            }
            Actions::Assignments(assigns) => Value::Object(
                assigns
                    .iter()
                    .map(|(reg, expr)| (reg.clone(), Value::String(expr.clone())))
                    .collect(),
            )
            .to_string(),
        }
    }

    /// Returns the register names written by an assignment map.
    ///
    /// Free-form statements are opaque and report nothing.
    pub fn assigned_registers(&self) -> Vec<&str> {
        match self {
            Actions::Statements(_) => Vec::new(),
            Actions::Assignments(assigns) => assigns.keys().map(String::as_str).collect(),
        }
    }
}
