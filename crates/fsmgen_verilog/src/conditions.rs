//! Condition wires: per-transition guards and the derived entry, exit, and
//! self conditions of each state.

use fsmgen_common::pad_end;
use fsmgen_ir::CanonicalFsm;
use indexmap::IndexMap;

use crate::layout::{
    enter_wire, exit_wire, in_state, pair_column, prefixed, self_wire, state_column, state_const,
    transition_wire,
};

/// Width of the `<state>_onEnter` / `_onExit` / `_onSelf` suffix column.
const SUFFIX_EXTRA: usize = 8;

/// One wire per `(source, transition)` pair: in the source state and the guard holds.
///
/// With a shared machine condition the guard text is compared against it;
/// otherwise the guard text is used as the boolean term itself.
pub(crate) fn transitions(fsm: &CanonicalFsm) -> Vec<String> {
    let state_col = state_column(fsm);
    let wire_col = prefixed(fsm, pair_column(fsm) + 1);

    let mut lines = vec![format!("// {} transition conditions", fsm.name)];
    for (state, transition) in fsm.transitions() {
        let term = match &fsm.condition {
            Some(shared) => format!("{} == {}", transition.condition, shared),
            None => transition.condition.clone(),
        };
        lines.push(format!(
            "wire {} = ({} & ({}));",
            pad_end(&transition_wire(fsm, state, transition), wire_col),
            in_state(fsm, state, state_col),
            term
        ));
    }
    lines.push(String::new());
    lines
}

/// Transition wires grouped by target, targets in first-reference order.
pub(crate) fn entering(fsm: &CanonicalFsm) -> IndexMap<&str, Vec<String>> {
    let mut by_target: IndexMap<&str, Vec<String>> = IndexMap::new();
    for (state, transition) in fsm.transitions() {
        let wire = transition_wire(fsm, state, transition);
        let wires = by_target.entry(transition.target.as_str()).or_default();
        if !wires.contains(&wire) {
            wires.push(wire);
        }
    }
    by_target
}

/// One wire per transition target: the OR of every transition wire entering it.
pub(crate) fn entries(fsm: &CanonicalFsm) -> Vec<String> {
    let col = prefixed(fsm, state_column(fsm) + SUFFIX_EXTRA);
    let mut lines = vec![format!("// {} state enter conditions", fsm.name)];
    lines.extend(entering(fsm).into_iter().map(|(target, wires)| {
        format!(
            "wire {} = ({});",
            pad_end(&enter_wire(fsm, target), col),
            wires.join(" | ")
        )
    }));
    lines
}

/// One wire per state with outgoing transitions: the OR of its transition wires.
///
/// A state without transitions gets an explanatory comment instead.
pub(crate) fn exits(fsm: &CanonicalFsm) -> Vec<String> {
    let col = prefixed(fsm, state_column(fsm) + SUFFIX_EXTRA);
    let mut lines = vec![format!("// {} state exit conditions", fsm.name)];
    for state in &fsm.states {
        if state.next.is_empty() {
            lines.push(format!(
                "// {} state has no exit",
                state_const(fsm, &state.name)
            ));
            continue;
        }
        let wires: Vec<String> = state
            .next
            .iter()
            .map(|t| transition_wire(fsm, state, t))
            .collect();
        lines.push(format!(
            "wire {} = ({});",
            pad_end(&exit_wire(fsm, state), col),
            wires.join(" | ")
        ));
    }
    lines.push(String::new());
    lines
}

/// One wire per state: in the state and not leaving it this cycle.
pub(crate) fn selfs(fsm: &CanonicalFsm) -> Vec<String> {
    let state_col = state_column(fsm);
    let col = prefixed(fsm, state_col + SUFFIX_EXTRA);
    let mut lines = vec![format!("// {} state self conditions", fsm.name)];
    for state in &fsm.states {
        let here = in_state(fsm, state, state_col);
        let value = if state.next.is_empty() {
            here
        } else {
            format!("({} & ~{})", here, exit_wire(fsm, state))
        };
        lines.push(format!(
            "wire {} = {};",
            pad_end(&self_wire(fsm, state), col),
            value
        ));
    }
    lines.push(String::new());
    lines
}
