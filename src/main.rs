// src/main.rs
//! NFT Gallery Server Entry Point
//! This binary is responsible for starting the gallery API server.
use anyhow::Result;
use clap::{Parser, Subcommand};
use nft_gallery::api::server::GalleryServer;
use nft_gallery::core::config::{resolve_alchemy_api_key, GalleryConfig};
use std::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "gallery_server")]
#[command(about = "NFT Gallery Server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gallery server
    Server {
        /// Port to bind the server to
        #[arg(long, default_value = "8888")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    info!("Starting NFT Gallery v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from config.toml or use defaults
    let mut config = load_gallery_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config.toml: {}. Using default configuration", e);
        GalleryConfig::default()
    });

    // The upstream credential is injected via config or environment
    if config.upstream.base_url.is_none() && config.upstream.api_key.is_none() {
        config.upstream.api_key = resolve_alchemy_api_key(&config.upstream.network);
    }

    let server = GalleryServer::new(config)?;

    match args.command {
        Some(Commands::Server { port }) => {
            info!("Starting server on port {}", port);
            let server_with_port = GalleryServer { port, ..server };
            server_with_port.start().await?;
        }
        None => {
            info!("No command specified, starting server on default port {}", server.port);
            server.start().await?;
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,h2=info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Load gallery configuration from config.toml
fn load_gallery_config() -> Result<GalleryConfig> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config_content = fs::read_to_string(&config_path)?;
    let config: GalleryConfig = toml::from_str(&config_content)?;
    Ok(config)
}
