//! Verilog generation for normalized finite-state machines.
//!
//! The emitter renders a [`CanonicalFsm`] as a fixed sequence of independent
//! text blocks: register, parameter, and wire declarations; state enumeration
//! constants; transition, entry, exit, and self condition wires; the
//! next-state priority select; the state register process; an optional
//! action process; and an optional ASCII debug register.
//!
//! Every column width is part of the output contract. Identical models always
//! produce byte-identical text.

#![warn(missing_docs)]

mod actions;
mod ascii;
mod conditions;
mod decls;
mod layout;
mod process;

use fsmgen_ir::CanonicalFsm;
use fsmgen_normalize::{normalize, NormalizeError};

/// The complete output for a machine without states.
pub const EMPTY_OUTPUT: &str = "// empty";

/// First line of the optional generated-text banner.
pub const BANNER_BEGIN: &str = "// ***** THIS TEXT IS AUTOMATICALY GENERATED, DO NOT EDIT *****";

/// Last line of the optional generated-text banner.
pub const BANNER_END: &str = "// ***** END OF AUTOMATICALY GENERATED TEXT, DO NOT EDIT *****";

/// Options controlling Verilog emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerilogOptions {
    /// Wrap the output between [`BANNER_BEGIN`] and [`BANNER_END`].
    pub banner: bool,
}

/// Renders canonical machines as Verilog module-body fragments.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerilogEmitter {
    options: VerilogOptions,
}

impl VerilogEmitter {
    /// Creates an emitter with the given options.
    pub fn new(options: VerilogOptions) -> Self {
        Self { options }
    }

    /// Renders `fsm` as Verilog text.
    ///
    /// A machine without states renders as [`EMPTY_OUTPUT`].
    pub fn emit(&self, fsm: &CanonicalFsm) -> String {
        if fsm.is_empty() {
            return EMPTY_OUTPUT.to_string();
        }

        let mut lines = Vec::new();
        if self.options.banner {
            lines.push(BANNER_BEGIN.to_string());
        }
        lines.extend(decls::registers(fsm));
        lines.extend(decls::localparams(fsm));
        lines.extend(decls::wires(fsm));
        lines.extend(decls::state_enums(fsm));
        lines.extend(conditions::transitions(fsm));
        lines.extend(conditions::entries(fsm));
        lines.extend(conditions::exits(fsm));
        lines.extend(conditions::selfs(fsm));
        lines.extend(process::next_select(fsm));
        lines.extend(process::state_register(fsm));
        if fsm.has_actions() {
            lines.extend(actions::action_block(fsm));
        }
        if fsm.ascii {
            lines.extend(ascii::ascii_register(fsm));
        }
        if self.options.banner {
            lines.push(BANNER_END.to_string());
        }
        lines.join("\n")
    }
}

/// Renders `fsm` as Verilog text with default options.
pub fn emit_verilog(fsm: &CanonicalFsm) -> String {
    VerilogEmitter::default().emit(fsm)
}

/// Normalizes a raw description and renders it as Verilog text.
///
/// Returns `Ok(None)` when `raw` is not a record.
pub fn emit(raw: &serde_json::Value) -> Result<Option<String>, NormalizeError> {
    Ok(normalize(raw)?.map(|fsm| emit_verilog(&fsm)))
}
