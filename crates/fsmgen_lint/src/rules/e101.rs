//! E101: Unknown initial state, `initialState` names no declared state.

use fsmgen_diagnostics::{Category, DiagnosticCode, DiagnosticSink};
use fsmgen_ir::CanonicalFsm;

use crate::helpers::report;
use crate::LintRule;

/// Detects an initial state that is not among the declared states.
///
/// The reset branch of the state register would load an undeclared constant.
pub struct UnknownInitialState;

impl LintRule for UnknownInitialState {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 101)
    }

    fn name(&self) -> &str {
        "unknown-initial-state"
    }

    fn check(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink) {
        let Some(initial) = fsm.initial_state.as_deref() else {
            return;
        };
        if fsm.state(initial).is_some() {
            return;
        }
        let mut diag = report(
            self,
            format!("initial state `{initial}` is not declared"),
        )
        .with_subject("initialState");
        if let Some(first) = fsm.states.first() {
            diag = diag.with_help(format!("did you mean `{}`?", first.name));
        }
        sink.emit(diag);
    }
}
