//! W103: Undeclared register, an assignment action writes a name that is not a register.

use fsmgen_diagnostics::{Category, DiagnosticCode, DiagnosticSink};
use fsmgen_ir::{Actions, CanonicalFsm};

use crate::helpers::{report, state_subject, transition_subject};
use crate::LintRule;

/// Detects assignment-map actions that write registers missing from `registers`.
///
/// Free-form statement lists are not inspected.
pub struct UndeclaredRegister;

impl UndeclaredRegister {
    fn check_actions(
        &self,
        fsm: &CanonicalFsm,
        actions: Option<&Actions>,
        subject: impl Fn() -> String,
        sink: &DiagnosticSink,
    ) {
        let Some(actions) = actions else {
            return;
        };
        for name in actions.assigned_registers() {
            if fsm.register(name).is_some() {
                continue;
            }
            sink.emit(
                report(
                    self,
                    format!("action assigns undeclared register `{name}`"),
                )
                .with_subject(subject())
                .with_help(format!("declare `{name}` under `registers`")),
            );
        }
    }
}

impl LintRule for UndeclaredRegister {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 103)
    }

    fn name(&self) -> &str {
        "undeclared-register"
    }

    fn check(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink) {
        for state in &fsm.states {
            for (index, transition) in state.next.iter().enumerate() {
                self.check_actions(
                    fsm,
                    transition.actions.as_ref(),
                    || transition_subject(&state.name, index),
                    sink,
                );
            }
            for (key, actions) in [
                ("onEntry", &state.on_entry),
                ("onExit", &state.on_exit),
                ("onSelf", &state.on_self),
            ] {
                self.check_actions(
                    fsm,
                    actions.as_ref(),
                    || format!("{}.{key}", state_subject(&state.name)),
                    sink,
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
        UndeclaredRegister.check(&fsm, &sink);
        sink.take_all()
    }

    #[test]
    fn declared_registers_are_clean() {
        let diags = check(json!({
            "registers": {"count": 4},
            "states": [{"name": "a", "onEntry": {"count": "0"}, "onSelf": {"count": "count + 1"}}]
        }));
        assert!(diags.is_empty());
    }

    #[test]
    fn statements_are_not_inspected() {
        let diags = check(json!({
            "states": [{"name": "a", "onEntry": ["anything <= 1"]}]
        }));
        assert!(diags.is_empty());
    }

    #[test]
    fn reports_state_and_transition_actions() {
        let diags = check(json!({
            "registers": ["done"],
            "states": [
                {
                    "name": "a",
                    "next": [{"name": "b", "actions": {"ghost": "1", "done": "0"}}],
                    "onExit": {"phantom": "0"}
                },
                "b"
            ]
        }));
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "action assigns undeclared register `ghost`");
        assert_eq!(diags[0].subject.as_deref(), Some("states[a].next[0]"));
        assert_eq!(diags[1].subject.as_deref(), Some("states[a].onExit"));
    }
}
