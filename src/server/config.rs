use std::{error::Error, fs, path::Path, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::bridges::BridgeRegistry;

use super::client;

/// Runtime configuration, loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Serve diagnostic endpoints. Off by default.
    #[serde(default)]
    pub debug: bool,
    /// Bridge names that may be used. The entry "*" allows every configured bridge.
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,
    /// The configured content bridges
    #[serde(default)]
    pub bridges: Vec<BridgeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// The bridge name
    pub name: String,
    /// The url of the source site this bridge integrates
    pub uri: String,
}

fn default_whitelist() -> Vec<String> {
    vec!["*".to_owned()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            whitelist: default_whitelist(),
            bridges: vec![],
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registry: Arc<BridgeRegistry>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let registry = BridgeRegistry::from_config(&config);
        Ok(Self {
            http: client::build_probe_client()?,
            config: Arc::new(config),
            registry: Arc::new(registry),
        })
    }
}
