//! ASCII debug register holding the current state's name as text.

use fsmgen_common::{column_width, compose_name, pad, pad_end};
use fsmgen_ir::CanonicalFsm;

use crate::layout::{prefixed, state_column, state_const, state_reg};

/// Text shown when the state register holds no declared state.
const ERROR_MARKER: &str = "%Error";

pub(crate) fn ascii_register(fsm: &CanonicalFsm) -> Vec<String> {
    let chars = column_width(fsm.states.iter().map(|s| s.name.as_str()), 1);
    let text = pad(chars);
    let label_col = prefixed(fsm, state_column(fsm)).max("default".len());
    let ascii = compose_name(&[fsm, &"state", &"ascii"]);

    let mut lines = vec![
        format!("reg [{}:0] {};", chars * 8 - 1, ascii),
        "always @(*)".to_string(),
        format!("  case ({{{}}})", state_reg(fsm)),
    ];
    for state in &fsm.states {
        lines.push(format!(
            "    {} : {} = \"{}\";",
            pad_end(&state_const(fsm, &state.name), label_col),
            ascii,
            text(&state.name)
        ));
    }
    lines.push(format!(
        "    {} : {} = \"{}\";",
        pad_end("default", label_col),
        ascii,
        text(ERROR_MARKER)
    ));
    lines.extend(["  endcase".to_string(), String::new()]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsmgen_normalize::normalize;
    use serde_json::json;

    #[test]
    fn ascii_case_pads_names() {
        let fsm = normalize(&json!({"ascii": true, "states": ["idle", "go"]}))
            .unwrap()
            .unwrap();
        assert_eq!(
            ascii_register(&fsm),
            vec![
                "reg [31:0] FSM_state_ascii;",
                "always @(*)",
                "  case ({FSM_state})",
                "    FSM_idle : FSM_state_ascii = \"idle\";",
                "    FSM_go   : FSM_state_ascii = \"go  \";",
                "    default  : FSM_state_ascii = \"%Err\";",
                "  endcase",
                "",
            ]
        );
    }

    #[test]
    fn error_marker_padded_for_long_names() {
        let fsm = normalize(&json!({"name": "m", "ascii": true, "states": ["a", "waiting"]}))
            .unwrap()
            .unwrap();
        let lines = ascii_register(&fsm);
        assert_eq!(lines[0], "reg [55:0] m_state_ascii;");
        assert_eq!(lines[3], "    m_a       : m_state_ascii = \"a      \";");
        assert_eq!(lines[5], "    default   : m_state_ascii = \"%Error \";");
    }

    #[test]
    fn single_character_names() {
        let fsm = normalize(&json!({"name": "m", "ascii": true, "states": ["a", "b"]}))
            .unwrap()
            .unwrap();
        let lines = ascii_register(&fsm);
        assert_eq!(lines[0], "reg [7:0] m_state_ascii;");
        assert_eq!(lines[3], "    m_a     : m_state_ascii = \"a\";");
        assert_eq!(lines[5], "    default : m_state_ascii = \"%\";");
    }
}
