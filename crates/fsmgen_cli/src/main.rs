//! fsmgen CLI, the command-line front end of the state machine generator.
//!
//! Provides `fsmgen verilog` and `fsmgen dot` to render a description,
//! `fsmgen check` to lint it, and `fsmgen normalize` to print its canonical form.

#![warn(missing_docs)]

mod check;
mod generate;
mod pipeline;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// fsmgen, a finite state machine to Verilog and Graphviz generator.
#[derive(Parser, Debug)]
#[command(name = "fsmgen", version, about = "Finite State Machine Generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `fsmgen.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a description as a Verilog module-body fragment.
    Verilog(VerilogArgs),
    /// Render a description as a Graphviz digraph.
    Dot(DotArgs),
    /// Run lint checks on a description.
    Check(CheckArgs),
    /// Print the canonical form of a description as JSON.
    Normalize {
        /// Description file (`.json` or `.toml`).
        input: String,
    },
}

/// Arguments for the `fsmgen verilog` subcommand.
#[derive(Parser, Debug)]
pub struct VerilogArgs {
    /// Description file (`.json` or `.toml`).
    pub input: String,

    /// Output path (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Wrap the output in generated-text banner lines.
    #[arg(long)]
    pub banner: bool,
}

/// Arguments for the `fsmgen dot` subcommand.
#[derive(Parser, Debug)]
pub struct DotArgs {
    /// Description file (`.json` or `.toml`).
    pub input: String,

    /// Output path (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `fsmgen check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Description file (`.json` or `.toml`).
    pub input: String,

    /// Rules to suppress, by code or name (e.g., `--allow unreachable-state`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rules to promote to errors, by code or name (e.g., `--deny W101`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Verilog(ref args) => generate::run_verilog(args, &global),
        Command::Dot(ref args) => generate::run_dot(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Normalize { ref input } => generate::run_normalize(input, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_verilog_default() {
        let cli = Cli::parse_from(["fsmgen", "verilog", "fsm.json"]);
        match cli.command {
            Command::Verilog(ref args) => {
                assert_eq!(args.input, "fsm.json");
                assert!(args.output.is_none());
                assert!(!args.banner);
            }
            _ => panic!("expected Verilog command"),
        }
    }

    #[test]
    fn parse_verilog_with_args() {
        let cli = Cli::parse_from(["fsmgen", "verilog", "fsm.toml", "-o", "fsm.v", "--banner"]);
        match cli.command {
            Command::Verilog(ref args) => {
                assert_eq!(args.input, "fsm.toml");
                assert_eq!(args.output.as_deref(), Some("fsm.v"));
                assert!(args.banner);
            }
            _ => panic!("expected Verilog command"),
        }
    }

    #[test]
    fn parse_dot_with_output() {
        let cli = Cli::parse_from(["fsmgen", "dot", "fsm.json", "--output", "fsm.dot"]);
        match cli.command {
            Command::Dot(ref args) => {
                assert_eq!(args.input, "fsm.json");
                assert_eq!(args.output.as_deref(), Some("fsm.dot"));
            }
            _ => panic!("expected Dot command"),
        }
    }

    #[test]
    fn parse_check_default() {
        let cli = Cli::parse_from(["fsmgen", "check", "fsm.json"]);
        match cli.command {
            Command::Check(ref args) => {
                assert!(args.allow.is_empty());
                assert!(args.deny.is_empty());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_check_with_args() {
        let cli = Cli::parse_from([
            "fsmgen",
            "check",
            "fsm.json",
            "--allow",
            "unreachable-state",
            "W103",
            "--deny",
            "W101",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.allow, vec!["unreachable-state", "W103"]);
                assert_eq!(args.deny, vec!["W101"]);
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_normalize() {
        let cli = Cli::parse_from(["fsmgen", "normalize", "fsm.json"]);
        match cli.command {
            Command::Normalize { ref input } => assert_eq!(input, "fsm.json"),
            _ => panic!("expected Normalize command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["fsmgen", "--quiet", "--color", "never", "dot", "fsm.json"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["fsmgen", "check", "fsm.json", "--verbose", "--color", "always"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["fsmgen", "--config", "/path/to/fsmgen.toml", "check", "a.json"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/fsmgen.toml"));
    }

    #[test]
    fn missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["fsmgen", "verilog"]).is_err());
    }
}
