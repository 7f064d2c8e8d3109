//! Declaration blocks: registers, local parameters, wires, and state enums.

use fsmgen_common::pad_end;
use fsmgen_ir::signal::range_prefix;
use fsmgen_ir::CanonicalFsm;

use crate::layout::{next_reg, prefixed, state_column, state_const, state_reg};

/// Most significant bit of the state register. A hand-built model may carry
/// `width: 0`, which is emitted as a single bit.
fn state_msb(fsm: &CanonicalFsm) -> u32 {
    fsm.width.max(1) - 1
}

/// The paired state/next register followed by every declared register.
pub(crate) fn registers(fsm: &CanonicalFsm) -> Vec<String> {
    let mut lines = vec![format!(
        "reg [{}:0] {}, {};",
        state_msb(fsm),
        state_reg(fsm),
        next_reg(fsm)
    )];
    lines.extend(
        fsm.registers
            .iter()
            .map(|reg| format!("reg {}{};", range_prefix(reg.width), reg.name)),
    );
    lines.push(String::new());
    lines
}

pub(crate) fn localparams(fsm: &CanonicalFsm) -> Vec<String> {
    let mut lines: Vec<String> = fsm
        .localparams
        .iter()
        .map(|p| format!("localparam {} = {};", p.name, p.expr))
        .collect();
    lines.push(String::new());
    lines
}

pub(crate) fn wires(fsm: &CanonicalFsm) -> Vec<String> {
    let mut lines: Vec<String> = fsm
        .wires
        .iter()
        .map(|w| match &w.init {
            Some(init) => format!("wire {}{} = {};", range_prefix(w.width), w.name, init),
            None => format!("wire {}{};", range_prefix(w.width), w.name),
        })
        .collect();
    lines.push(String::new());
    lines
}

/// One constant per state holding its ordinal, names aligned to the longest state.
pub(crate) fn state_enums(fsm: &CanonicalFsm) -> Vec<String> {
    let col = prefixed(fsm, state_column(fsm));
    let mut lines = vec![format!("// {} state enums", fsm.name)];
    lines.extend(fsm.states.iter().enumerate().map(|(idx, state)| {
        format!(
            "wire [{}:0] {} = {};",
            state_msb(fsm),
            pad_end(&state_const(fsm, &state.name), col),
            idx
        )
    }));
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsmgen_normalize::normalize;
    use serde_json::json;

    fn fsm(raw: serde_json::Value) -> CanonicalFsm {
        normalize(&raw).unwrap().unwrap()
    }

    #[test]
    fn register_declarations() {
        let m = fsm(json!({
            "states": ["a", "b", "c"],
            "registers": {"count": 8, "flag": 1, "done": {}}
        }));
        assert_eq!(
            registers(&m),
            vec![
                "reg [1:0] FSM_state, FSM_next;",
                "reg [7:0] count;",
                "reg flag;",
                "reg done;",
                "",
            ]
        );
    }

    #[test]
    fn localparam_declarations() {
        let m = fsm(json!({"states": ["a"], "localparams": {"LIMIT": "8'd200"}}));
        assert_eq!(localparams(&m), vec!["localparam LIMIT = 8'd200;", ""]);
    }

    #[test]
    fn wire_declarations() {
        let m = fsm(json!({
            "states": ["a"],
            "wires": [
                {"name": "go", "init": "start & ready"},
                {"name": "bus", "width": 4, "init": "data[3:0]"},
                {"name": "spare"}
            ]
        }));
        assert_eq!(
            wires(&m),
            vec![
                "wire go = start & ready;",
                "wire [3:0] bus = data[3:0];",
                "wire spare;",
                "",
            ]
        );
    }

    #[test]
    fn enums_are_aligned() {
        let m = fsm(json!({"name": "ctl", "states": ["idle", "run", "x"]}));
        assert_eq!(
            state_enums(&m),
            vec![
                "// ctl state enums",
                "wire [1:0] ctl_idle = 0;",
                "wire [1:0] ctl_run  = 1;",
                "wire [1:0] ctl_x    = 2;",
                "",
            ]
        );
    }

    #[test]
    fn zero_width_model_emits_single_bit() {
        let mut m = fsm(json!({"states": ["only"]}));
        m.width = 0;
        assert_eq!(registers(&m)[0], "reg [0:0] FSM_state, FSM_next;");
        assert_eq!(state_enums(&m)[1], "wire [0:0] FSM_only = 0;");
    }
}
