use indexmap::IndexMap;

use crate::server::ServerConfig;

/// A content bridge: one source site integration, declaring the url to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    /// The bridge name, as configured
    pub name: String,
    /// The url of the source site this bridge integrates
    pub uri: String,
}

/// Lookup table of configured bridges plus the whitelist gating them.
///
/// Bridges are keyed by their lowercased name so lookups are case-insensitive,
/// and kept in configuration order.
#[derive(Debug, Default)]
pub struct BridgeRegistry {
    bridges: IndexMap<String, Bridge>,
    whitelist: Vec<String>,
}

impl BridgeRegistry {
    pub fn from_config(config: &ServerConfig) -> Self {
        let bridges = config
            .bridges
            .iter()
            .map(|bridge| {
                (
                    bridge.name.to_lowercase(),
                    Bridge {
                        name: bridge.name.clone(),
                        uri: bridge.uri.clone(),
                    },
                )
            })
            .collect();
        let whitelist = config
            .whitelist
            .iter()
            .map(|entry| entry.to_lowercase())
            .collect();

        Self { bridges, whitelist }
    }

    /// Case-insensitive lookup of a bridge by name
    pub fn resolve(&self, name: &str) -> Option<&Bridge> {
        self.bridges.get(&name.to_lowercase())
    }

    /// Whether the whitelist allows this bridge. The entry `"*"` allows every
    /// configured bridge.
    pub fn is_enabled(&self, bridge: &Bridge) -> bool {
        let name = bridge.name.to_lowercase();
        self.whitelist
            .iter()
            .any(|entry| entry == "*" || *entry == name)
    }

    /// Whitelisted bridges, in configuration order
    pub fn enabled(&self) -> impl Iterator<Item = &Bridge> {
        self.bridges
            .values()
            .filter(|bridge| self.is_enabled(bridge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{BridgeConfig, ServerConfig};

    fn config(whitelist: Vec<&str>) -> ServerConfig {
        ServerConfig {
            debug: false,
            whitelist: whitelist.into_iter().map(str::to_owned).collect(),
            bridges: vec![
                BridgeConfig {
                    name: "ExampleFeed".to_owned(),
                    uri: "http://feeds.example.com/".to_owned(),
                },
                BridgeConfig {
                    name: "OtherFeed".to_owned(),
                    uri: "http://other.example.com/".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let registry = BridgeRegistry::from_config(&config(vec!["*"]));

        let bridge = registry.resolve("examplefeed").unwrap();
        assert_eq!(bridge.name, "ExampleFeed");
        assert_eq!(bridge.uri, "http://feeds.example.com/");

        assert!(registry.resolve("EXAMPLEFEED").is_some());
        assert!(registry.resolve("ExampleFeed").is_some());
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        let registry = BridgeRegistry::from_config(&config(vec!["*"]));
        assert!(registry.resolve("MissingFeed").is_none());
    }

    #[test]
    fn wildcard_whitelist_enables_every_bridge() {
        let registry = BridgeRegistry::from_config(&config(vec!["*"]));
        let enabled: Vec<&str> = registry.enabled().map(|bridge| bridge.name.as_str()).collect();
        assert_eq!(enabled, vec!["ExampleFeed", "OtherFeed"]);
    }

    #[test]
    fn explicit_whitelist_limits_the_enabled_set() {
        let registry = BridgeRegistry::from_config(&config(vec!["examplefeed"]));

        let example = registry.resolve("ExampleFeed").unwrap();
        let other = registry.resolve("OtherFeed").unwrap();
        assert!(registry.is_enabled(example));
        assert!(!registry.is_enabled(other));

        let enabled: Vec<&str> = registry.enabled().map(|bridge| bridge.name.as_str()).collect();
        assert_eq!(enabled, vec!["ExampleFeed"]);
    }

    #[test]
    fn whitelist_entries_match_case_insensitively() {
        let registry = BridgeRegistry::from_config(&config(vec!["EXAMPLEFEED"]));
        let example = registry.resolve("ExampleFeed").unwrap();
        assert!(registry.is_enabled(example));
    }

    #[test]
    fn empty_whitelist_enables_nothing() {
        let registry = BridgeRegistry::from_config(&config(vec![]));
        assert_eq!(registry.enabled().count(), 0);
    }
}
