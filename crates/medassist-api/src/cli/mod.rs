//! CLI command definitions for the `medassist` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the REST API;
//! `ask` answers a quick-action topic once and exits.

pub mod ask;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Medical information assistant: REST API and quick health answers.
#[derive(Parser)]
#[command(name = "medassist", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML config file. Missing file means built-in defaults.
    #[arg(long, global = true, env = "MEDASSIST_CONFIG", default_value = "medassist.toml")]
    pub config: PathBuf,

    /// Export tracing spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask a quick-action question (symptoms, medications, wellness, emergency).
    Ask {
        /// Quick-action key. Unknown keys are answered as `symptoms`.
        action: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["medassist", "serve"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("medassist.toml"));
        match cli.command {
            Commands::Serve { port, host } => {
                assert!(port.is_none());
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["medassist", "ask", "wellness", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Ask { action } => assert_eq!(action, "wellness"),
            _ => panic!("expected ask"),
        }
    }
}
