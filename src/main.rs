use std::{error::Error, path::PathBuf};

mod bridges;
mod server;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::server::{AppState, ServerConfig};

#[derive(Parser)]
struct ServerOptions {
    #[arg(long, env, default_value_t = 8080)]
    port: u16,
    /// Serve diagnostic endpoints such as the connectivity checker
    #[arg(long, env)]
    debug: bool,
    /// Path to a JSON file holding the bridge and whitelist configuration
    #[arg(long, env)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = ServerOptions::parse();

    let mut config = match &options.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    config.debug = config.debug || options.debug;

    let state = AppState::new(config)?;
    let router = server::router(state);

    let address = format!("0.0.0.0:{}", options.port).parse()?;

    println!("Starting server on {}", address);

    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
