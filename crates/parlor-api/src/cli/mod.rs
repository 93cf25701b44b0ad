//! CLI command definitions for the `parlor` binary.
//!
//! Uses clap derive macros for argument parsing. Running `parlor` with no
//! subcommand starts the server with configuration from file and environment.

pub mod history;
pub mod serve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use parlor_types::config::{LogFormat, ServerConfig};

/// Minimal chat backend with canned bot replies.
#[derive(Parser)]
#[command(name = "parlor", version, about, long_about = None)]
#[command(propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to a TOML config file (missing file means defaults).
    #[arg(long, global = true, env = "PARLOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Server flags, used when no subcommand is given.
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (the default).
    Serve(ServeArgs),

    /// Print stored messages, oldest first.
    History {
        /// Maximum messages to display.
        #[arg(long, default_value = "50")]
        limit: u32,

        /// Skip this many of the newest messages.
        #[arg(long, default_value = "0")]
        offset: u32,

        /// SQLite database file (overrides config).
        #[arg(long, env = "PARLOR_DATABASE")]
        database: Option<String>,

        /// Output machine-readable JSON instead of styled text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Server flags. Each one, when given, overrides the config file.
#[derive(Args, Default)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "PARLOR_HOST")]
    pub host: Option<String>,

    /// TCP port to listen on.
    #[arg(short, long, env = "PARLOR_PORT")]
    pub port: Option<u16>,

    /// SQLite database file, created on first run.
    #[arg(long, env = "PARLOR_DATABASE")]
    pub database: Option<String>,

    /// Delay before the bot replies, in milliseconds.
    #[arg(long, env = "PARLOR_TYPING_DELAY_MS")]
    pub typing_delay_ms: Option<u64>,

    /// Log output format (text or json).
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long)]
    pub otel: bool,
}

impl ServeArgs {
    /// Layer these flags over a loaded config.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = &self.database {
            config.database_path = database.clone();
        }
        if let Some(delay) = self.typing_delay_ms {
            config.typing_delay_ms = delay;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if self.otel {
            config.otel = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["parlor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_top_level_serve_flags() {
        let cli = Cli::try_parse_from(["parlor", "--port", "8081"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.serve.port, Some(8081));
    }

    #[test]
    fn test_history_args() {
        let cli = Cli::try_parse_from(["parlor", "history", "--limit", "5", "--json"]).unwrap();
        let Some(Commands::History { limit, offset, json, .. }) = cli.command else {
            panic!("expected history");
        };
        assert_eq!((limit, offset, json), (5, 0, true));
    }

    #[test]
    fn test_serve_flags_override_config() {
        let cli = Cli::try_parse_from([
            "parlor",
            "serve",
            "--port",
            "9000",
            "--database",
            "/tmp/x.db",
            "--typing-delay-ms",
            "0",
            "--log-format",
            "json",
        ])
        .unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };

        let mut config = ServerConfig::default();
        args.apply(&mut config);

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database_path, "/tmp/x.db");
        assert_eq!(config.typing_delay_ms, 0);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_default_serve_args_change_nothing() {
        let mut config = ServerConfig::default();
        ServeArgs::default().apply(&mut config);
        assert_eq!(config, ServerConfig::default());
    }
}
