//! quadra-server binary
//!
//! Hosts the quadrant chart engine as a plain HTTP service: one action per
//! request in, one complete render payload out.

use anyhow::Result;
use clap::Parser;
use quadra_core::{ChartSession, HttpLogoResolver};
use quadra_server::{shutdown_signal, ChartServer, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Command line arguments for the chart server.
#[derive(Parser, Debug)]
#[command(name = "quadra-server")]
#[command(about = "An HTTP server hosting a 2x2 quadrant positioning chart")]
#[command(version)]
struct Args {
    /// Server bind address
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Initial chart title
    #[arg(long, default_value = "Magic Quadrant")]
    title: String,

    /// Enable CORS
    #[arg(long, default_value = "true")]
    cors: bool,

    /// CORS allowed origins (comma-separated)
    #[arg(long)]
    cors_origins: Option<String>,

    /// Enable request logging
    #[arg(long, default_value = "true")]
    logging: bool,

    /// Logo fetch timeout in seconds
    #[arg(long, default_value = "30")]
    logo_timeout: u64,

    /// Maximum accepted logo body size in bytes
    #[arg(long, default_value = "5242880")] // 5MB
    logo_max_bytes: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    // Parse bind address
    let bind_addr: SocketAddr = args
        .bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", args.bind, e))?;

    // Parse CORS origins
    let cors_origins: Option<Vec<String>> = args
        .cors_origins
        .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

    let mut config = ServerConfig::new()
        .with_bind_addr(bind_addr)
        .with_cors(args.cors)
        .with_logging(args.logging);
    if let Some(origins) = cors_origins {
        config = config.with_cors_origins(origins);
    }

    let resolver = HttpLogoResolver::with_limits(
        Duration::from_secs(args.logo_timeout),
        args.logo_max_bytes,
    );
    let session = ChartSession::with_title(Arc::new(resolver), args.title);

    let server = ChartServer::with_config(session, config);
    server.serve_with_shutdown(shutdown_signal()).await?;

    Ok(())
}
