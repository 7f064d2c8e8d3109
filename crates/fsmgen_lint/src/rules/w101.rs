//! W101: Undeclared target, a transition names a state that is not declared.

use fsmgen_diagnostics::{Category, DiagnosticCode, DiagnosticSink};
use fsmgen_ir::CanonicalFsm;

use crate::helpers::{declared_states, report, transition_subject};
use crate::LintRule;

/// Detects transitions whose target is not a declared state.
///
/// Such transitions are still emitted; the generated Verilog then references
/// an undeclared state constant.
pub struct UndeclaredTarget;

impl LintRule for UndeclaredTarget {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "undeclared-target"
    }

    fn check(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink) {
        let declared = declared_states(fsm);
        for state in &fsm.states {
            for (index, transition) in state.next.iter().enumerate() {
                if declared.contains(transition.target.as_str()) {
                    continue;
                }
                sink.emit(
                    report(
                        self,
                        format!(
                            "transition targets undeclared state `{}`",
                            transition.target
                        ),
                    )
                    .with_subject(transition_subject(&state.name, index))
                    .with_help(format!("declare `{}` under `states`", transition.target)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsmgen_diagnostics::Diagnostic;
    use serde_json::json;

    fn check(raw: serde_json::Value) -> Vec<Diagnostic> {
        let fsm = fsmgen_normalize::normalize(&raw).unwrap().unwrap();
        let sink = DiagnosticSink::new();
        UndeclaredTarget.check(&fsm, &sink);
        sink.take_all()
    }

    #[test]
    fn declared_targets_are_clean() {
        let diags = check(json!({"states": {"a": {"b": 1}, "b": {"a": 1}}}));
        assert!(diags.is_empty());
    }

    #[test]
    fn reports_each_dangling_transition() {
        let diags = check(json!({
            "states": {"a": ["b", "ghost"], "b": {"phantom": "go"}}
        }));
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].code.to_string(), "W101");
        assert_eq!(diags[0].message, "transition targets undeclared state `ghost`");
        assert_eq!(diags[0].subject.as_deref(), Some("states[a].next[1]"));
        assert_eq!(diags[1].subject.as_deref(), Some("states[b].next[0]"));
    }
}
