use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use courier_optimizer::solver::route_search::SearchStrategy;
use tracing::Level;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Catalog JSON file, the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub request_timeout: Duration,
    pub log_level: Level,
    pub search_strategy: SearchStrategy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            catalog_path: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_level: Level::INFO,
            search_strategy: SearchStrategy::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let mut config = ApiConfig::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid PORT '{port}'"))?;
        }

        config.catalog_path = lookup("COURIER_CATALOG").map(PathBuf::from);

        if let Some(timeout) = lookup("COURIER_REQUEST_TIMEOUT_SECS") {
            let seconds: u64 = timeout
                .parse()
                .with_context(|| format!("Invalid COURIER_REQUEST_TIMEOUT_SECS '{timeout}'"))?;
            config.request_timeout = Duration::from_secs(seconds);
        }

        if let Some(level) = lookup("COURIER_LOG_LEVEL") {
            config.log_level = level
                .parse()
                .with_context(|| format!("Invalid COURIER_LOG_LEVEL '{level}'"))?;
        }

        if let Some(strategy) = lookup("COURIER_SEARCH_STRATEGY") {
            config.search_strategy = strategy.parse().map_err(anyhow::Error::msg)?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::PathBuf, time::Duration};

    use courier_optimizer::solver::route_search::SearchStrategy;
    use tracing::Level;

    use super::ApiConfig;

    fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, anyhow::Error> {
        let vars = vars
            .iter()
            .map(|&(key, value)| (key.to_owned(), value.to_owned()))
            .collect::<HashMap<_, _>>();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:10000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("COURIER_CATALOG", "/etc/courier/catalog.json"),
            ("COURIER_REQUEST_TIMEOUT_SECS", "3"),
            ("COURIER_LOG_LEVEL", "debug"),
            ("COURIER_SEARCH_STRATEGY", "linear_start"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/courier/catalog.json"))
        );
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.search_strategy, SearchStrategy::LinearStart);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("COURIER_LOG_LEVEL", "loud")]).is_err());
        assert!(config_from(&[("COURIER_SEARCH_STRATEGY", "greedy")]).is_err());
    }
}
