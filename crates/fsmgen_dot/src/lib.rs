//! Graphviz `dot` generation for normalized finite-state machines.
//!
//! Each state becomes a node carrying its attributes verbatim followed by its
//! action keys, and each transition becomes an edge labelled with its guard.

#![warn(missing_docs)]

use fsmgen_ir::{CanonicalFsm, State};
use fsmgen_normalize::{normalize, NormalizeError};

/// Default node styling applied to the whole graph.
pub const NODE_DEFAULTS: &str = "node [ style=rounded; shape=rect ]";

/// Renders `fsm` as a directed graph.
pub fn emit_dot(fsm: &CanonicalFsm) -> String {
    let mut lines = vec!["digraph g {".to_string(), NODE_DEFAULTS.to_string()];
    lines.extend(fsm.states.iter().map(node));
    lines.extend(fsm.transitions().map(|(state, t)| {
        format!(
            "{} -> {} [label=\"{}\"]",
            state.name,
            t.target,
            escape(&t.condition)
        )
    }));
    lines.push("}".to_string());
    lines.join("\n")
}

/// Normalizes a raw description and renders it as a directed graph.
///
/// Returns `Ok(None)` when `raw` is not a record.
pub fn emit(raw: &serde_json::Value) -> Result<Option<String>, NormalizeError> {
    Ok(normalize(raw)?.map(|fsm| emit_dot(&fsm)))
}

fn node(state: &State) -> String {
    let actions = [
        ("onEntry", &state.on_entry),
        ("onExit", &state.on_exit),
        ("onSelf", &state.on_self),
    ]
    .into_iter()
    .filter_map(|(key, actions)| actions.as_ref().map(|a| (key.to_string(), a.to_text())));
    let attrs: Vec<String> = state
        .attributes
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .chain(actions)
        .map(|(key, value)| format!("{key}=\"{}\"", escape(&value)))
        .collect();
    format!("{} [ {} ]", state.name, attrs.join("; "))
}

/// Escapes double quotes for a quoted dot string.
fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_graph() {
        let text = emit(&json!({
            "asyncReset": "~reset_n",
            "states": {"foo": {"bar": 1}, "bar": {"foo": 1}}
        }))
        .unwrap()
        .unwrap();
        assert_eq!(
            text,
            "digraph g {\n\
             node [ style=rounded; shape=rect ]\n\
             foo [  ]\n\
             bar [  ]\n\
             foo -> bar [label=\"1\"]\n\
             bar -> foo [label=\"1\"]\n\
             }"
        );
    }

    #[test]
    fn empty_graph() {
        assert_eq!(
            emit(&json!({})).unwrap().as_deref(),
            Some("digraph g {\nnode [ style=rounded; shape=rect ]\n}")
        );
    }

    #[test]
    fn non_record_is_absent() {
        assert!(emit(&json!("graph")).unwrap().is_none());
    }

    #[test]
    fn attributes_pass_through() {
        let text = emit(&json!({
            "states": [
                {"name": "idle", "color": "red", "penwidth": 2, "onSelf": "x <= 1", "next": {"idle": "1"}}
            ]
        }))
        .unwrap()
        .unwrap();
        assert!(text.contains("\nidle [ color=\"red\"; penwidth=\"2\"; onSelf=\"x <= 1\" ]\n"));
        assert!(text.contains("\nidle -> idle [label=\"1\"]\n"));
    }

    #[test]
    fn action_keys_follow_attributes() {
        let text = emit(&json!({
            "states": [
                {"name": "a", "onExit": "x <= 1", "color": "red"},
                {"name": "b", "onEntry": {"done": "1"}, "onSelf": []}
            ]
        }))
        .unwrap()
        .unwrap();
        assert!(text.contains("\na [ color=\"red\"; onExit=\"x <= 1\" ]\n"));
        assert!(text.contains(r#"b [ onEntry="{\"done\":\"1\"}" ]"#));
    }

    #[test]
    fn labels_escape_quotes() {
        let text = emit(&json!({"states": {"a": {"b": "cmd == \"go\""}, "b": {}}}))
            .unwrap()
            .unwrap();
        assert!(text.contains(r#"a -> b [label="cmd == \"go\""]"#));
    }
}
