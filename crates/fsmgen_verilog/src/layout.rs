//! Generated identifiers and column widths shared by the emission blocks.

use fsmgen_common::{column_width, compose_name, pad_end, MIN_COLUMN};
use fsmgen_ir::{CanonicalFsm, State, Transition};

/// Width of the state-name column: the longest state name, at least [`MIN_COLUMN`].
pub(crate) fn state_column(fsm: &CanonicalFsm) -> usize {
    column_width(fsm.states.iter().map(|s| s.name.as_str()), MIN_COLUMN)
}

/// Width of the `<source>_<target>` column.
///
/// For each state this is its name length plus the longest target name
/// (at least [`MIN_COLUMN`]); the column is the maximum over all states.
pub(crate) fn pair_column(fsm: &CanonicalFsm) -> usize {
    fsm.states
        .iter()
        .map(|s| {
            s.name.chars().count()
                + column_width(s.next.iter().map(|t| t.target.as_str()), MIN_COLUMN)
        })
        .fold(MIN_COLUMN, usize::max)
}

/// Width of a machine-prefixed identifier whose suffix occupies `inner` columns.
pub(crate) fn prefixed(fsm: &CanonicalFsm, inner: usize) -> usize {
    fsm.name.chars().count() + 1 + inner
}

pub(crate) fn state_reg(fsm: &CanonicalFsm) -> String {
    compose_name(&[fsm, &"state"])
}

pub(crate) fn next_reg(fsm: &CanonicalFsm) -> String {
    compose_name(&[fsm, &"next"])
}

/// The enumeration constant of a state (declared or not).
pub(crate) fn state_const(fsm: &CanonicalFsm, state: &str) -> String {
    compose_name(&[fsm, &state])
}

pub(crate) fn transition_wire(fsm: &CanonicalFsm, state: &State, transition: &Transition) -> String {
    compose_name(&[fsm, state, transition])
}

pub(crate) fn enter_wire(fsm: &CanonicalFsm, state: &str) -> String {
    compose_name(&[fsm, &state, &"onEnter"])
}

pub(crate) fn exit_wire(fsm: &CanonicalFsm, state: &State) -> String {
    compose_name(&[fsm, state, &"onExit"])
}

pub(crate) fn self_wire(fsm: &CanonicalFsm, state: &State) -> String {
    compose_name(&[fsm, state, &"onSelf"])
}

/// `(<N>_state == <N>_<state>)` with the constant padded to the state column.
pub(crate) fn in_state(fsm: &CanonicalFsm, state: &State, state_col: usize) -> String {
    format!(
        "({} == {})",
        state_reg(fsm),
        pad_end(&state_const(fsm, &state.name), prefixed(fsm, state_col))
    )
}
