//! The canonical machine description consumed by the emitters.

use std::borrow::Cow;

use fsmgen_common::NamePart;
use serde::Serialize;

use crate::signal::{LocalParam, Register, Wire};
use crate::state::{State, Transition};

/// A fully normalized finite-state machine.
///
/// Every collection is an ordered list, every default is applied, and state
/// names are unique. Emitters only read this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalFsm {
    /// The machine name, used as the prefix of every generated identifier.
    pub name: String,
    /// The clock signal name.
    pub clock: String,
    /// The synchronous reset term.
    pub reset: String,
    /// The asynchronous reset term; a leading `~` or `!` marks it active-low.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_reset: Option<String>,
    /// A shared expression every transition condition is compared against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// The width of the state register in bits.
    pub width: u32,
    /// Whether to emit the ASCII state-name debug register.
    pub ascii: bool,
    /// The state entered on reset; `None` only when there are no states.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<String>,
    /// States in first-declared order.
    pub states: Vec<State>,
    /// Additional wires.
    pub wires: Vec<Wire>,
    /// Registers written by action blocks.
    pub registers: Vec<Register>,
    /// Local parameters.
    pub localparams: Vec<LocalParam>,
}

impl CanonicalFsm {
    /// Returns `true` if the machine declares no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Looks up a declared state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Iterates over every `(source, transition)` pair in priority order:
    /// source declaration order, then transition order within the source.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Transition)> {
        self.states
            .iter()
            .flat_map(|state| state.next.iter().map(move |t| (state, t)))
    }

    /// Returns `true` if any action set anywhere in the machine is non-empty.
    pub fn has_actions(&self) -> bool {
        self.states.iter().any(State::has_actions)
    }

    /// Returns the declared register with the given name.
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.registers.iter().find(|r| r.name == name)
    }

    /// Renders the model back into the raw record shape accepted by normalization.
    ///
    /// Normalizing the returned value yields a model equal to `self`.
    pub fn to_raw(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl NamePart for CanonicalFsm {
    fn name_part(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Actions;

    fn toggle() -> CanonicalFsm {
        let mut foo = State::new("foo");
        foo.next.push(Transition {
            target: "bar".to_string(),
            condition: "1".to_string(),
            actions: None,
        });
        let mut bar = State::new("bar");
        bar.next.push(Transition {
            target: "foo".to_string(),
            condition: "1".to_string(),
            actions: None,
        });
        CanonicalFsm {
            name: "FSM".to_string(),
            clock: "clock".to_string(),
            reset: "reset".to_string(),
            async_reset: None,
            condition: None,
            width: 1,
            ascii: false,
            initial_state: Some("foo".to_string()),
            states: vec![foo, bar],
            wires: Vec::new(),
            registers: Vec::new(),
            localparams: Vec::new(),
        }
    }

    #[test]
    fn transitions_in_priority_order() {
        let fsm = toggle();
        let pairs: Vec<_> = fsm
            .transitions()
            .map(|(s, t)| (s.name.as_str(), t.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("foo", "bar"), ("bar", "foo")]);
    }

    #[test]
    fn lookup_by_name() {
        let fsm = toggle();
        assert_eq!(fsm.state("bar").map(|s| s.next.len()), Some(1));
        assert!(fsm.state("baz").is_none());
        assert!(!fsm.is_empty());
    }

    #[test]
    fn has_actions_scans_all_states() {
        let mut fsm = toggle();
        assert!(!fsm.has_actions());
        fsm.states[1].on_self = Some(Actions::Statements(vec!["idle <= 1".to_string()]));
        assert!(fsm.has_actions());
    }

    #[test]
    fn raw_uses_description_keys() {
        let mut fsm = toggle();
        fsm.async_reset = Some("~reset_n".to_string());
        let raw = fsm.to_raw().unwrap();
        assert_eq!(raw["asyncReset"], "~reset_n");
        assert_eq!(raw["initialState"], "foo");
        assert_eq!(raw["states"][0]["next"][0]["name"], "bar");
        assert_eq!(raw["states"][0]["next"][0]["condition"], "1");
        assert!(raw.get("condition").is_none());
    }
}
