//! The action process: register resets plus transition, entry, exit, and
//! self actions, each group a priority case over its condition wires.

use fsmgen_common::{column_width, pad_end, MIN_COLUMN};
use fsmgen_ir::{Actions, CanonicalFsm};

use crate::conditions::entering;
use crate::layout::{enter_wire, exit_wire, self_wire, transition_wire};
use crate::process::{reset_guard, sensitivity};

/// A case arm: the condition wire and the statements it enables.
struct Arm {
    label: String,
    body: Vec<String>,
}

/// Builds an arm for a non-empty action set.
fn arm(label: String, actions: Option<&Actions>) -> Option<Arm> {
    let actions = actions.filter(|a| !a.is_empty())?;
    Some(Arm {
        label,
        body: actions.statements(),
    })
}

/// Renders a priority case, or nothing when no arm is present.
fn case_group(arms: Vec<Arm>) -> Vec<String> {
    if arms.is_empty() {
        return Vec::new();
    }
    let col = column_width(arms.iter().map(|a| a.label.as_str()), MIN_COLUMN);
    let mut lines = vec!["    case (1'b1)".to_string()];
    for arm in arms {
        lines.push(format!("      {} : begin", pad_end(&arm.label, col)));
        lines.extend(arm.body.into_iter().map(|stmt| format!("        {stmt}")));
        lines.push("      end".to_string());
    }
    lines.push("    endcase".to_string());
    lines
}

pub(crate) fn action_block(fsm: &CanonicalFsm) -> Vec<String> {
    let guard = reset_guard(fsm);
    let mut lines = vec![
        format!("// {} actions", fsm.name),
        format!("always @({})", sensitivity(fsm)),
        format!("  if ({guard}) begin"),
    ];
    lines.extend(
        fsm.registers
            .iter()
            .map(|reg| format!("    {} <= {};", reg.name, reg.reset_value())),
    );
    lines.push("  end else begin".to_string());

    let transition_arms: Vec<Arm> = fsm
        .transitions()
        .filter_map(|(state, t)| arm(transition_wire(fsm, state, t), t.actions.as_ref()))
        .collect();

    // Only states that some transition enters have an entry wire.
    let entered = entering(fsm);
    let entry_arms: Vec<Arm> = fsm
        .states
        .iter()
        .filter(|state| entered.contains_key(state.name.as_str()))
        .filter_map(|state| arm(enter_wire(fsm, &state.name), state.on_entry.as_ref()))
        .collect();

    let mut leave_arms = Vec::new();
    for state in &fsm.states {
        if !state.next.is_empty() {
            leave_arms.extend(arm(exit_wire(fsm, state), state.on_exit.as_ref()));
        }
        leave_arms.extend(arm(self_wire(fsm, state), state.on_self.as_ref()));
    }

    for group in [transition_arms, entry_arms, leave_arms] {
        lines.extend(case_group(group));
    }
    lines.push("  end".to_string());
    lines.push(String::new());
    lines
}
