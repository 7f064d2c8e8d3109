//! Lint engine that manages rule registration, configuration, and execution.
//!
//! The `LintEngine` accepts a `LintConfig` to control which rules are denied or
//! allowed, then runs each enabled rule over the model.

use fsmgen_config::LintConfig;
use fsmgen_diagnostics::{DiagnosticSink, Severity};
use fsmgen_ir::CanonicalFsm;

use crate::rules::register_builtin_rules;
use crate::LintRule;

/// The lint engine that orchestrates running lint rules on a model.
///
/// Rules listed in the configuration by code or by name are suppressed
/// (allow) or promoted to errors (deny); the rest keep their default severity.
pub struct LintEngine {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl LintEngine {
    /// Creates a new lint engine configured by the given `LintConfig`.
    ///
    /// All builtin rules are registered automatically.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            config: config.clone(),
        };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Registers a lint rule with the engine.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Runs all enabled lint rules on the model.
    ///
    /// Each rule reports into a scratch sink so that denied rules can have their
    /// diagnostics promoted to [`Severity::Error`] before reaching `sink`.
    pub fn run(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink) {
        for rule in &self.rules {
            let code = rule.code().to_string();
            if self.config.is_allowed(&code, rule.name()) {
                continue;
            }

            let scratch = DiagnosticSink::new();
            rule.check(fsm, &scratch);

            let denied = self.config.is_denied(&code, rule.name());
            for mut diag in scratch.take_all() {
                if denied {
                    diag.severity = Severity::Error;
                }
                sink.emit(diag);
            }
        }
    }
}
