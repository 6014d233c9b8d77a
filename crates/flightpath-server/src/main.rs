//! Flightpath Server - REST API resolving itinerary endpoints.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flightpath_server::{build_router, ServerConfig};

/// Flightpath Server - resolves the origin and destination of an itinerary
#[derive(Parser, Debug)]
#[command(name = "flightpath-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding `main_port` from the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!(error = %format!("{e:#}"), "Server stopped with errors");
        std::process::exit(1);
    }

    tracing::info!("Server stopped without errors");
}

async fn run(args: Args) -> anyhow::Result<()> {
    tracing::info!("Starting Flightpath server...");

    let mut config = ServerConfig::load(args.config.as_deref()).context("can't init config")?;
    if let Some(port) = args.port {
        config.set_port(port);
    }

    let opts = &config.server_opts;
    tracing::info!(
        read_timeout_secs = opts.read_timeout,
        write_timeout_secs = opts.write_timeout,
        body_limit_bytes = opts.body_limit_bytes(),
        "HTTP server options"
    );
    if opts.idle_timeout().is_some() {
        // Reason: axum::serve does not expose a keep-alive idle timeout.
        tracing::warn!(
            idle_timeout_secs = opts.idle_timeout,
            "idle_timeout is not enforced by this server"
        );
    }

    let app = build_router(&config);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("can't listen tcp port {addr}"))?;
    tracing::info!("Flightpath server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("main router listen")?;

    Ok(())
}

/// Resolves on SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down Flightpath server");
}
