//! `fsmgen check`, the lint pipeline.
//!
//! Loads and normalizes the description, runs the lint engine with the
//! configuration's rule overrides merged with the command line, and reports
//! the findings as text on stderr or as JSON on stdout.

use fsmgen_config::LintConfig;

use crate::pipeline::{lint_model, load_model, render_diagnostics, resolve_config};
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `fsmgen check` command.
///
/// Returns exit code 0 if no errors, 1 if there are errors.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let fsm = load_model(&args.input, global)?;

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Checking {} ({})", fsm.name, args.input);
    }

    let lint = merge_lint_config(&config.lint, args);
    let report = lint_model(&fsm, &lint);

    match args.format {
        ReportFormat::Text if global.quiet => {}
        ReportFormat::Text => render_diagnostics(&report, global.color),
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.diagnostics)?);
        }
    }

    Ok(if report.errors > 0 { 1 } else { 0 })
}

/// Merges CLI `--allow`/`--deny` flags with the config file's lint section.
///
/// CLI flags take precedence: a rule named on the command line is removed from
/// the opposite configured list.
fn merge_lint_config(config: &LintConfig, args: &CheckArgs) -> LintConfig {
    let mut deny = config.deny.clone();
    let mut allow = config.allow.clone();

    for rule in &args.deny {
        allow.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    LintConfig { deny, allow }
}
