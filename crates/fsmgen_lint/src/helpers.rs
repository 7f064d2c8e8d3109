//! Shared lookups used by several lint rules.

use std::collections::HashSet;

use fsmgen_diagnostics::Diagnostic;
use fsmgen_ir::CanonicalFsm;

use crate::LintRule;

/// Starts a diagnostic for `rule` at the rule's default severity.
pub fn report(rule: &dyn LintRule, message: impl Into<String>) -> Diagnostic {
    Diagnostic::with_severity(rule.default_severity(), rule.code(), message)
}

/// Names of all declared states.
pub fn declared_states(fsm: &CanonicalFsm) -> HashSet<&str> {
    fsm.states.iter().map(|s| s.name.as_str()).collect()
}

/// Subject text for a state, e.g. `states[idle]`.
pub fn state_subject(state: &str) -> String {
    format!("states[{state}]")
}

/// Subject text for the `index`-th transition of `source`, e.g. `states[idle].next[0]`.
pub fn transition_subject(source: &str, index: usize) -> String {
    format!("states[{source}].next[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subjects() {
        assert_eq!(state_subject("idle"), "states[idle]");
        assert_eq!(transition_subject("idle", 2), "states[idle].next[2]");
    }

    #[test]
    fn report_uses_rule_defaults() {
        let diag = report(&crate::UnknownInitialState, "boom");
        assert_eq!(diag.code.to_string(), "E101");
        assert_eq!(diag.severity, fsmgen_diagnostics::Severity::Error);
        let diag = report(&crate::UnreachableState, "orphan");
        assert_eq!(diag.severity, fsmgen_diagnostics::Severity::Warning);
        assert_eq!(diag.message, "orphan");
    }

    #[test]
    fn declared_state_names() {
        let fsm = fsmgen_normalize::normalize(&json!({"states": ["a", "b"]}))
            .unwrap()
            .unwrap();
        let names = declared_states(&fsm);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
        assert!(!names.contains("c"));
    }
}
