//! Diagnostic rendering backends.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;

    /// Renders a summary line for a whole run, or `None` when nothing was reported.
    fn summary(&self, errors: usize, warnings: usize) -> Option<String> {
        if errors == 0 && warnings == 0 {
            return None;
        }
        Some(format!(
            "{} error{}, {} warning{} emitted",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ))
    }
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W101]: transition targets an undeclared state `busy`
///   --> states[idle].next[0]
///    = note: ...
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The terminal width; longer messages are not wrapped but notes are truncated to fit.
    pub width: u16,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, width: u16) -> Self {
        Self { color, width }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let tag = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return tag;
        }
        format!("\x1b[{}m{tag}\x1b[0m", diag.severity.ansi_style())
    }

    fn footnote(&self, kind: &str, text: &str) -> String {
        let line = format!("   = {kind}: {text}");
        let width = usize::from(self.width);
        if width == 0 || line.chars().count() <= width {
            return line;
        }
        let kept: String = line.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = format!("{}: {}\n", self.header(diag), diag.message);

        if let Some(subject) = &diag.subject {
            out.push_str(&format!("  --> {subject}\n"));
        }
        for note in &diag.notes {
            out.push_str(&self.footnote("note", note));
            out.push('\n');
        }
        for help in &diag.help {
            out.push_str(&self.footnote("help", help));
            out.push('\n');
        }

        out
    }
}
