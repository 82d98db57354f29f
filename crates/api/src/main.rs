//! Voicehelm API server binary.
//!
//! Usage:
//!   voicehelm-api --config config.toml
//!   voicehelm-api --port 8002
//!   voicehelm-api --port 8002 --bind 0.0.0.0
//!
//! # Environment Variables
//!
//! - `VOICEHELM_BIND_ADDR` - Server bind address (default: 127.0.0.1)
//! - `RUST_LOG` - Log filter (tracing EnvFilter syntax)

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicehelm_api::{serve, AppState};
use voicehelm_resolver::ResolverConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,voicehelm_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments (simple for now)
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 8002;
    let mut config_path: Option<String> = None;
    let mut bind_addr: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().expect("Invalid port number");
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    bind_addr = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Voicehelm API Server");
                println!();
                println!("Usage: voicehelm-api [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>    Port to listen on (default: 8002)");
                println!("  -b, --bind <ADDR>    Bind address (default: 127.0.0.1, env: VOICEHELM_BIND_ADDR)");
                println!("  -c, --config <FILE>  Path to config.toml file");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Bind address priority: CLI flag > env var > loopback default
    let host = bind_addr
        .or_else(|| std::env::var("VOICEHELM_BIND_ADDR").ok())
        .unwrap_or_else(|| "127.0.0.1".to_string());

    if host == "0.0.0.0" {
        tracing::warn!(
            "Server binding to 0.0.0.0 — this exposes the API to all network interfaces."
        );
    }

    // Load resolver configuration
    let config = if let Some(path) = config_path {
        tracing::info!(path = %path, "Loading configuration");
        ResolverConfig::from_file(&path)?
    } else {
        tracing::info!("Using default configuration");
        ResolverConfig::default()
    };

    tracing::info!(
        agent = %config.agent.command,
        timeout_ms = config.agent.timeout_ms,
        "Resolver configured"
    );

    let state = AppState::new(config);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    serve(Arc::new(state), addr).await?;

    Ok(())
}
