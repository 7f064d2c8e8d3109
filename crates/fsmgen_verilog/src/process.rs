//! The next-state priority select and the state register process.

use fsmgen_common::{compose_name, pad_end};
use fsmgen_ir::CanonicalFsm;

use crate::layout::{next_reg, pair_column, prefixed, state_const, state_reg, transition_wire};

/// Event list of every clocked process: the clock's rising edge, plus the
/// asynchronous reset edge when one is configured.
///
/// A reset term written with a leading `~` or `!` is active-low and is
/// sampled on its falling edge.
pub(crate) fn sensitivity(fsm: &CanonicalFsm) -> String {
    let mut events = format!("posedge {}", fsm.clock);
    if let Some(reset) = &fsm.async_reset {
        match reset.strip_prefix(|c: char| c == '~' || c == '!') {
            Some(signal) => events.push_str(&format!(" or negedge {}", signal.trim())),
            None => events.push_str(&format!(" or posedge {reset}")),
        }
    }
    events
}

/// The literal term guarding the reset branch of every clocked process.
pub(crate) fn reset_guard(fsm: &CanonicalFsm) -> &str {
    fsm.async_reset.as_deref().unwrap_or(&fsm.reset)
}

/// Priority case over every transition wire; the first asserted wire selects
/// its target, and the default arm holds the current state.
pub(crate) fn next_select(fsm: &CanonicalFsm) -> Vec<String> {
    let label_col = prefixed(fsm, pair_column(fsm) + 2);
    let next = next_reg(fsm);

    let mut lines = vec![
        format!("// {} next state select", fsm.name),
        format!(
            "always @(*) begin : {}",
            compose_name(&[fsm, &"next", &"select"])
        ),
        "  case (1'b1)".to_string(),
    ];
    for (state, transition) in fsm.transitions() {
        lines.push(format!(
            "    {}: {} = {};",
            pad_end(&transition_wire(fsm, state, transition), label_col),
            next,
            state_const(fsm, &transition.target)
        ));
    }
    lines.push(format!(
        "    {}: {} = {};",
        pad_end("default", label_col),
        next,
        state_reg(fsm)
    ));
    lines.extend(["  endcase".to_string(), "end".to_string(), String::new()]);
    lines
}

/// The clocked state register: the initial state on reset, otherwise the selected next state.
pub(crate) fn state_register(fsm: &CanonicalFsm) -> Vec<String> {
    let guard = reset_guard(fsm);
    let state = state_reg(fsm);
    let initial = fsm
        .initial_state
        .as_deref()
        .or_else(|| fsm.states.first().map(|s| s.name.as_str()))
        .unwrap_or_default();
    vec![
        format!("always @({})", sensitivity(fsm)),
        format!(
            "  if ({}) {} <= {};",
            guard,
            state,
            state_const(fsm, initial)
        ),
        format!(
            "  else  {}{} <= {};",
            " ".repeat(guard.chars().count()),
            state,
            next_reg(fsm)
        ),
        String::new(),
    ]
}
