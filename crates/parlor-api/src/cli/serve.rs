//! `parlor serve`: bind the socket and run the HTTP API until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;

use console::style;
use tracing::info;

use parlor_types::config::ServerConfig;

use crate::http::router::build_router;
use crate::state::AppState;

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::init(&config).await?;

    let db_path = std::path::absolute(&config.database_path)
        .unwrap_or_else(|_| PathBuf::from(&config.database_path));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    let base = format!("http://localhost:{}", addr.port());

    info!(
        addr = %addr,
        database = %db_path.display(),
        typing_delay_ms = config.typing_delay_ms,
        "Chat backend initialized"
    );

    println!();
    println!("  {} {}", style("Database:").bold(), db_path.display());
    println!(
        "  {} Server running at {}",
        style("⚡").bold(),
        style(&base).cyan()
    );
    println!();
    println!("  Endpoints:");
    println!("    POST {base}/api/message");
    println!("         Body: {{\"message\": \"string\"}}");
    println!("    GET  {base}/api/messages");
    println!("         Query params: ?limit=50&offset=0 (optional)");
    println!();
    println!("  {}", style("Press Ctrl+C to stop the server").dim());

    let router = build_router(state.clone());

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    state.db_pool.close().await;
    println!("  Server stopped.");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("\n\n  Shutting down server...");
}
