//! Shared pipeline helpers for CLI commands.
//!
//! Configuration lookup, description loading and normalization, the lint
//! pass, diagnostic rendering, and output writing.

use std::path::{Path, PathBuf};

use fsmgen_config::{GeneratorConfig, LintConfig, CONFIG_FILE_NAME};
use fsmgen_diagnostics::{Diagnostic, DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};
use fsmgen_ir::CanonicalFsm;
use fsmgen_lint::LintEngine;

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest `fsmgen.toml`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads the generator configuration.
///
/// `--config` must name an existing file. Without it, the nearest `fsmgen.toml`
/// above the current directory is used, or the defaults when there is none.
pub fn resolve_config(global: &GlobalArgs) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let path = match global.config {
        Some(ref config_path) => Some(PathBuf::from(config_path)),
        None => find_config_file(&std::env::current_dir()?),
    };
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    if global.verbose {
        eprintln!("    Config {}", path.display());
    }
    Ok(fsmgen_config::load_config(&path)?)
}

/// Reads and normalizes a description file.
pub fn load_model(
    input: &str,
    global: &GlobalArgs,
) -> Result<CanonicalFsm, Box<dyn std::error::Error>> {
    let path = Path::new(input);
    let raw = fsmgen_config::load_description(path)?;
    let fsm = fsmgen_normalize::normalize(&raw)?
        .ok_or_else(|| format!("description in {} is not a record", path.display()))?;
    if global.verbose {
        eprintln!(
            "    Loaded {} ({} states, {} transitions)",
            fsm.name,
            fsm.states.len(),
            fsm.transitions().count()
        );
    }
    Ok(fsm)
}

/// Findings of one lint pass.
pub struct LintReport {
    /// Diagnostics in rule registration order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of error-severity diagnostics.
    pub errors: usize,
}

impl LintReport {
    /// Number of warning-severity diagnostics.
    pub fn warnings(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

/// Runs every enabled lint rule over the model.
pub fn lint_model(fsm: &CanonicalFsm, config: &LintConfig) -> LintReport {
    let sink = DiagnosticSink::new();
    LintEngine::new(config).run(fsm, &sink);
    LintReport {
        errors: sink.error_count(),
        diagnostics: sink.take_all(),
    }
}

/// Renders diagnostics and their summary to stderr using the terminal renderer.
pub fn render_diagnostics(report: &LintReport, color: bool) {
    let renderer = TerminalRenderer::new(color, 100);
    for diag in &report.diagnostics {
        eprintln!("{}", renderer.render(diag));
    }
    if let Some(summary) = renderer.summary(report.errors, report.warnings()) {
        eprintln!("{summary}");
    }
}

/// Writes generated text to `output`, or to stdout when absent, ending with a newline.
pub fn write_output(text: &str, output: Option<&str>) -> std::io::Result<()> {
    let mut text = text.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    match output {
        Some(path) => std::fs::write(path, text),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
