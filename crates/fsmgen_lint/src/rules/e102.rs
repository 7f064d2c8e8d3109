//! E102: Duplicate transition, a state has two transitions to the same target.

use std::collections::HashMap;

use fsmgen_diagnostics::{Category, DiagnosticCode, DiagnosticSink};
use fsmgen_ir::CanonicalFsm;

use crate::helpers::{report, transition_subject};
use crate::LintRule;

/// Detects repeated `(source, target)` pairs.
///
/// Each pair names one transition wire, so a repeat declares the same wire twice.
pub struct DuplicateTransition;

impl LintRule for DuplicateTransition {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 102)
    }

    fn name(&self) -> &str {
        "duplicate-transition"
    }

    fn check(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink) {
        for state in &fsm.states {
            let mut first_seen: HashMap<&str, usize> = HashMap::new();
            for (index, transition) in state.next.iter().enumerate() {
                let target = transition.target.as_str();
                match first_seen.get(target) {
                    Some(&first) => sink.emit(
                        report(
                            self,
                            format!(
                                "duplicate transition from `{}` to `{target}`",
                                state.name
                            ),
                        )
                        .with_subject(transition_subject(&state.name, index))
                        .with_note(format!(
                            "first transition is {}",
                            transition_subject(&state.name, first)
                        ))
                        .with_help("combine the conditions with `|`"),
                    ),
                    None => {
                        first_seen.insert(target, index);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsmgen_diagnostics::{Diagnostic, Severity};
    use serde_json::json;

    fn check(raw: serde_json::Value) -> Vec<Diagnostic> {
        let fsm = fsmgen_normalize::normalize(&raw).unwrap().unwrap();
        let sink = DiagnosticSink::new();
        DuplicateTransition.check(&fsm, &sink);
        sink.take_all()
    }

    #[test]
    fn same_target_from_different_sources_is_clean() {
        let diags = check(json!({
            "states": {"a": {"c": 1}, "b": {"c": 1}, "c": {}}
        }));
        assert!(diags.is_empty());
    }

    #[test]
    fn reports_repeated_pair() {
        let diags = check(json!({
            "states": {
                "a": [
                    {"name": "b", "condition": "x"},
                    {"name": "b", "condition": "y"}
                ],
                "b": {}
            }
        }));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].message, "duplicate transition from `a` to `b`");
        assert_eq!(diags[0].subject.as_deref(), Some("states[a].next[1]"));
        assert_eq!(diags[0].notes, ["first transition is states[a].next[0]"]);
    }
}
