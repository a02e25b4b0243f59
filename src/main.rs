// src/main.rs
use models::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod check;
mod config;
mod feed;
mod lightbox;
mod models;
mod posts;
mod server;

use config::{load_config, Config};

#[rocket::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let (config, config_error) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("maharaja_site={},rocket=warn", config.logging.level))
        }))
        .init();

    if let Some(e) = config_error {
        warn!("Failed to load config.yml: {}. Using defaults.", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("check") => check::run(&config, args.get(1).map(String::as_str)).await,
        Some(other) => Err(format!("Unknown command: {}", other).into()),
        None => serve(config).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    info!(
        "🍛 Serving Maharaja site on {}:{}",
        config.server.address, config.server.port
    );
    server::build_rocket(config).launch().await?;
    Ok(())
}
