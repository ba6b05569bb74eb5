//! FinSee server binary - composition root.
//!
//! Ties the crates together into the advisor proxy service:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Build the advisor client from the GROQ_API_KEY environment variable
//! 4. Start the axum API server
//!
//! The speech, intent, and dialogue crates are consumed by the voice UI
//! shell; this binary serves only the HTTP side.

mod cli;

use std::sync::Arc;

use clap::Parser;

use finsee_advisor::{AdvisorError, CompletionClient, GroqClient};
use finsee_api::{routes, AppState};
use finsee_core::config::{FinseeConfig, API_KEY_ENV};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = FinseeConfig::load_or_default(&config_file);
    config.general.port = args.resolve_port(config.general.port);

    // Tracing.
    let log_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting FinSee v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Advisor client. A missing key is not fatal at startup; the chat
    // endpoint reports it per request.
    let advisor: Option<Arc<dyn CompletionClient>> =
        match GroqClient::from_env(config.advisor.clone()) {
            Ok(client) => {
                tracing::info!(model = %config.advisor.model, "Advisor client ready");
                Some(Arc::new(client))
            }
            Err(AdvisorError::MissingApiKey) => {
                tracing::warn!(
                    "{} not set; /api/chat will answer with a configuration error",
                    API_KEY_ENV
                );
                None
            }
            Err(err) => return Err(err.into()),
        };

    let state = AppState::new(config.clone(), advisor);
    routes::start_server(&config, state).await?;

    Ok(())
}
