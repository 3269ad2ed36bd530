use std::env;

/// Public endpoint used when neither `--rpc` nor `ETH_RPC_URL` is given.
pub const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Log filter directive
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Call dotenvy::dotenv() before calling this.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("ETH_RPC_URL").ok(), env::var("RUST_LOG").ok())
    }

    fn from_vars(rpc_url: Option<String>, log_level: Option<String>) -> Self {
        let rpc_url = rpc_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let log_level = log_level.unwrap_or_else(|| "warn".to_string());

        Config { rpc_url, log_level }
    }

    /// Apply the `--rpc` command-line override, which wins over the
    /// environment.
    pub fn with_rpc_override(mut self, rpc: Option<String>) -> Self {
        if let Some(url) = rpc {
            self.rpc_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_vars(
            Some("http://localhost:8545".into()),
            Some("eth_query=debug".into()),
        );
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.log_level, "eth_query=debug");
    }

    #[test]
    fn test_blank_env_url_falls_back_to_default() {
        let config = Config::from_vars(Some("  ".into()), None);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::from_vars(Some("http://from-env:8545".into()), None)
            .with_rpc_override(Some("http://from-cli:8545".into()));
        assert_eq!(config.rpc_url, "http://from-cli:8545");

        let config = Config::from_vars(Some("http://from-env:8545".into()), None)
            .with_rpc_override(None);
        assert_eq!(config.rpc_url, "http://from-env:8545");
    }
}
