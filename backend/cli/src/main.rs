mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use stridesplit_core::PaceAnalyzer;
use stridesplit_gateway::{start_server, AppState};
use stridesplit_vision::GeminiAnalyzer;

use config::Config;

#[derive(Parser)]
#[command(name = "stridesplit")]
#[command(about = "Stridesplit — run/walk analysis gateway for pace graphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the analysis HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current server health
    Status,
    /// Send a pace-graph screenshot to a running server for analysis
    Analyze {
        /// Path to the image file
        file: PathBuf,
        /// Base URL of the running server
        #[arg(long, default_value = "http://localhost:8080")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("stridesplit is not running on port {}", config.port);
                }
            }
        }
        Commands::Analyze { file, server } => {
            run_analyze(&file, &server).await?;
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        model = %config.gemini_model,
        "Starting stridesplit gateway"
    );

    let analyzer: Option<Arc<dyn PaceAnalyzer>> = config.gemini_api_key.as_deref().map(|key| {
        Arc::new(GeminiAnalyzer::new(key).with_model(config.gemini_model.clone()))
            as Arc<dyn PaceAnalyzer>
    });

    match &analyzer {
        Some(a) => info!(provider = a.name(), "Registered vision provider"),
        None => warn!("GEMINI_API_KEY is not set; analysis requests will be rejected"),
    }

    let state = Arc::new(AppState { analyzer });

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;

    start_server(addr, state).await
}

async fn run_analyze(file: &PathBuf, server: &str) -> Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let image = STANDARD.encode(&bytes);

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{server}/api/analyze"))
        .json(&serde_json::json!({ "image": image }))
        .send()
        .await
        .context("analyze request failed")?;

    let status = resp.status();
    let body: serde_json::Value = resp.json().await?;

    if !status.is_success() {
        anyhow::bail!(
            "analysis failed ({}): {}",
            status,
            body["error"].as_str().unwrap_or("unknown error")
        );
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
