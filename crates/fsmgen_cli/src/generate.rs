//! `fsmgen verilog`, `fsmgen dot`, and `fsmgen normalize`.
//!
//! Each command loads and normalizes the description, lints it, and writes the
//! rendered text. Lint errors stop generation; warnings are reported and
//! generation continues.

use fsmgen_ir::CanonicalFsm;
use fsmgen_verilog::{VerilogEmitter, VerilogOptions};

use crate::pipeline::{lint_model, load_model, render_diagnostics, resolve_config, write_output};
use crate::{DotArgs, GlobalArgs, VerilogArgs};

/// Runs the `fsmgen verilog` command.
pub fn run_verilog(
    args: &VerilogArgs,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let fsm = load_model(&args.input, global)?;
    if !checked(&fsm, &config.lint, global) {
        return Ok(1);
    }

    let options = VerilogOptions {
        banner: args.banner || config.verilog.banner,
    };
    let text = VerilogEmitter::new(options).emit(&fsm);
    write_output(&text, args.output.as_deref())?;
    report_written("Verilog", &fsm, args.output.as_deref(), global);
    Ok(0)
}

/// Runs the `fsmgen dot` command.
pub fn run_dot(args: &DotArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let fsm = load_model(&args.input, global)?;
    if !checked(&fsm, &config.lint, global) {
        return Ok(1);
    }

    let text = fsmgen_dot::emit_dot(&fsm);
    write_output(&text, args.output.as_deref())?;
    report_written("Graphviz", &fsm, args.output.as_deref(), global);
    Ok(0)
}

/// Runs the `fsmgen normalize` command, printing the canonical model as JSON.
pub fn run_normalize(input: &str, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let fsm = load_model(input, global)?;
    let json = serde_json::to_string_pretty(&fsm.to_raw()?)?;
    write_output(&json, None)?;
    Ok(0)
}

/// Lints the model and renders findings unless quiet; returns `false` on lint errors.
fn checked(fsm: &CanonicalFsm, lint: &fsmgen_config::LintConfig, global: &GlobalArgs) -> bool {
    let report = lint_model(fsm, lint);
    if !global.quiet {
        render_diagnostics(&report, global.color);
    }
    report.errors == 0
}

fn report_written(kind: &str, fsm: &CanonicalFsm, output: Option<&str>, global: &GlobalArgs) {
    if global.quiet {
        return;
    }
    if let Some(path) = output {
        eprintln!("   Generated {kind} for {} in {path}", fsm.name);
    }
}
