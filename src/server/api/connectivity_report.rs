use serde::{Deserialize, Serialize};

/// Reachability report for a single bridge's source site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    /// Name of the probed bridge
    pub bridge: String,
    /// Whether the source site answered the probe with HTTP 200
    pub successful: bool,
    /// 301 when a permanent redirect was observed during the exchange, 200 otherwise
    pub http_code: u16,
}
