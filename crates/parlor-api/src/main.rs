//! Parlor chat backend entry point.
//!
//! Binary name: `parlor`
//!
//! Parses CLI arguments, loads configuration, initializes logging, then
//! starts the HTTP API server or runs a one-off command.

mod cli;
mod http;
mod state;

use anyhow::anyhow;
use clap::Parser;
use clap_complete::generate;

use parlor_infra::config::load_server_config;
use parlor_observe::tracing_setup::{
    TracingOptions, filter_for_verbosity, init_tracing, shutdown_tracing,
};
use parlor_types::config::LogFormat;
use parlor_types::message::Page;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or state
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "parlor", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = load_server_config(cli.config.as_deref()).await?;
    let command = cli.command.unwrap_or(Commands::Serve(cli.serve));

    match &command {
        Commands::Serve(args) => args.apply(&mut config),
        Commands::History {
            database: Some(database),
            ..
        } => config.database_path = database.clone(),
        _ => {}
    }

    init_tracing(&TracingOptions {
        default_filter: filter_for_verbosity(cli.verbose, cli.quiet).to_string(),
        json: config.log_format == LogFormat::Json,
        otel: config.otel,
    })
    .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let result = match command {
        Commands::Serve(_) => cli::serve::run(config).await,
        Commands::History {
            limit,
            offset,
            json,
            ..
        } => {
            async {
                let state = AppState::init(&config).await?;
                cli::history::show_history(&state, Page::new(limit, offset), json).await
            }
            .await
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}
