//! Conformance test helpers for fsmgen.
//!
//! Provides shared pipeline functions that run a raw description through the
//! full pipeline (normalize → lint → emit) and return structured results for
//! assertion in integration tests.

#![warn(missing_docs)]

use fsmgen_config::{DescriptionFormat, LintConfig};
use fsmgen_diagnostics::{Diagnostic, DiagnosticSink, Severity};
use fsmgen_ir::CanonicalFsm;
use fsmgen_lint::LintEngine;
use fsmgen_normalize::NormalizeError;
use fsmgen_verilog::{VerilogEmitter, VerilogOptions};
use serde_json::Value;

/// Result of running the full normalize → lint → emit pipeline.
pub struct PipelineResult {
    /// The canonical model.
    pub fsm: CanonicalFsm,
    /// The Verilog fragment.
    pub verilog: String,
    /// The Graphviz digraph.
    pub dot: String,
    /// All diagnostics emitted by the lint pass.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl PipelineResult {
    /// Returns `true` if a diagnostic with the given code (e.g. `"W101"`) was emitted.
    pub fn has_code(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code.to_string() == code)
    }

    /// Returns the diagnostics with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.code.to_string() == code)
            .collect()
    }
}

/// Builds a `LintConfig` with deny/allow overrides, parsed the way `fsmgen.toml` is.
pub fn make_lint_config(deny: &[&str], allow: &[&str]) -> LintConfig {
    let quoted = |rules: &[&str]| {
        rules
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let toml_str = format!(
        "[lint]\ndeny = [{}]\nallow = [{}]\n",
        quoted(deny),
        quoted(allow)
    );
    match fsmgen_config::load_config_from_str(&toml_str) {
        Ok(config) => config.lint,
        Err(e) => panic!("invalid lint overrides: {e}"),
    }
}

/// Runs the full pipeline on a raw description with default lint settings.
///
/// Returns `Ok(None)` when the description is not a record.
pub fn full_pipeline(raw: &Value) -> Result<Option<PipelineResult>, NormalizeError> {
    run_pipeline(raw, &LintConfig::default(), VerilogOptions::default())
}

/// Runs the full pipeline with lint deny/allow overrides.
pub fn full_pipeline_with_lint(
    raw: &Value,
    deny: &[&str],
    allow: &[&str],
) -> Result<Option<PipelineResult>, NormalizeError> {
    run_pipeline(raw, &make_lint_config(deny, allow), VerilogOptions::default())
}

/// Runs the full pipeline with explicit Verilog options.
pub fn full_pipeline_with_options(
    raw: &Value,
    options: VerilogOptions,
) -> Result<Option<PipelineResult>, NormalizeError> {
    run_pipeline(raw, &LintConfig::default(), options)
}

/// Parses description text in the given format and runs the full pipeline on it.
///
/// Panics if the text does not parse.
pub fn full_pipeline_text(
    text: &str,
    format: DescriptionFormat,
) -> Result<Option<PipelineResult>, NormalizeError> {
    let raw = match fsmgen_config::load_description_from_str(text, format) {
        Ok(raw) => raw,
        Err(e) => panic!("description did not parse: {e}"),
    };
    full_pipeline(&raw)
}

fn run_pipeline(
    raw: &Value,
    lint: &LintConfig,
    options: VerilogOptions,
) -> Result<Option<PipelineResult>, NormalizeError> {
    let Some(fsm) = fsmgen_normalize::normalize(raw)? else {
        return Ok(None);
    };

    let sink = DiagnosticSink::new();
    LintEngine::new(lint).run(&fsm, &sink);
    let has_errors = sink.has_errors();
    let error_count = sink.error_count();
    let diagnostics = sink.take_all();

    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    Ok(Some(PipelineResult {
        verilog: VerilogEmitter::new(options).emit(&fsm),
        dot: fsmgen_dot::emit_dot(&fsm),
        fsm,
        diagnostics,
        has_errors,
        error_count,
        warning_count,
    }))
}
