//! Lint rules and engine for checking canonical state machine models.
//!
//! Rules run after normalization and report problems that the emitters accept
//! silently: transitions to undeclared states, states unreachable from the
//! initial state, actions writing undeclared registers, and so on.
//!
//! # Rule Categories
//!
//! - **W-series (warnings):** undeclared targets, unreachable states, undeclared registers
//! - **E-series (errors):** unknown initial state, duplicate transitions

#![warn(missing_docs)]

mod engine;
mod helpers;
mod rules;

pub use engine::LintEngine;
pub use helpers::{declared_states, report, state_subject, transition_subject};
pub use rules::register_builtin_rules;
pub use rules::{
    DuplicateTransition, UndeclaredRegister, UndeclaredTarget, UnknownInitialState,
    UnreachableState,
};

use fsmgen_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use fsmgen_ir::CanonicalFsm;

/// A single lint rule that checks a canonical model.
///
/// Each rule has a unique diagnostic code, a kebab-case name, and a default
/// severity. `check` emits diagnostics via the provided sink, usually starting
/// each one with [`report`] so it carries the rule's code and severity.
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., W101, E102).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "undeclared-target").
    fn name(&self) -> &str;

    /// Returns the severity this rule reports at, by default the one its
    /// code's category implies.
    fn default_severity(&self) -> Severity {
        self.code().category.default_severity()
    }

    /// Checks the model and emits diagnostics to the sink.
    fn check(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink);
}
