//! Configuration for the Lighter SDK

use crate::error::{LighterError, Result};
use crate::types::{
    chain_ids::{MAINNET_CHAIN_ID, TESTNET_CHAIN_ID},
    endpoints::TESTNET_API_URL,
};
use std::{env, path::PathBuf, str::FromStr};
use url::Url;

/// Network type for Lighter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Mainnet (production)
    Mainnet,
    /// Testnet
    Testnet,
}

impl Network {
    /// Infer the network from an API URL: any URL mentioning "mainnet" is mainnet
    pub fn from_url(url: &str) -> Self {
        if url.contains("mainnet") {
            Network::Mainnet
        } else {
            Network::Testnet
        }
    }

    /// Chain ID the signer should use on this network
    pub fn chain_id(&self) -> i32 {
        match self {
            Network::Mainnet => MAINNET_CHAIN_ID,
            Network::Testnet => TESTNET_CHAIN_ID,
        }
    }
}

impl FromStr for Network {
    type Err = LighterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(LighterError::config(
                "Invalid network. Use 'mainnet' or 'testnet'",
            )),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Configuration for a Lighter client
#[derive(Clone)]
pub struct Config {
    /// API base URL, exactly as given (the signer receives it verbatim)
    pub url: String,

    /// Parsed API base URL
    pub api_url: Url,

    /// Network inferred from the URL
    pub network: Network,

    /// Chain ID handed to the signer
    pub chain_id: i32,

    /// API private key (hex, without 0x prefix)
    pub private_key: String,

    /// API key index
    pub api_key_index: i32,

    /// Account index
    pub account_index: i64,

    /// Explicit path to the signer library
    pub signer_path: Option<PathBuf>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("network", &self.network)
            .field("chain_id", &self.chain_id)
            .field("private_key", &"<redacted>")
            .field("api_key_index", &self.api_key_index)
            .field("account_index", &self.account_index)
            .field("signer_path", &self.signer_path)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Create a new configuration
    ///
    /// # Arguments
    ///
    /// * `url` - The API base URL (e.g., "https://testnet.zklighter.elliot.ai")
    /// * `private_key` - API private key, hex with or without 0x prefix
    /// * `api_key_index` - Index of the API key on the account
    /// * `account_index` - Account index
    pub fn new(
        url: &str,
        private_key: &str,
        api_key_index: i32,
        account_index: i64,
    ) -> Result<Self> {
        let api_url = Url::parse(url).map_err(|_| LighterError::config("Invalid API URL"))?;
        match api_url.scheme() {
            "https" | "http" => {}
            _ => return Err(LighterError::config("Unsupported URL scheme")),
        }

        let private_key = normalize_private_key(private_key)?;
        let network = Network::from_url(url);

        Ok(Self {
            url: url.to_string(),
            api_url,
            network,
            chain_id: network.chain_id(),
            private_key,
            api_key_index,
            account_index,
            signer_path: None,
            timeout_secs: 30,
        })
    }

    /// Build a configuration from `LIGHTER_*` environment variables.
    ///
    /// `LIGHTER_PRIVATE_KEY` and `LIGHTER_ACCOUNT_INDEX` are required;
    /// `LIGHTER_API_URL` defaults to testnet, `LIGHTER_API_KEY_INDEX` to 0.
    /// `LIGHTER_SIGNER_PATH` is honored when the signer is loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = var("LIGHTER_API_URL").unwrap_or_else(|| TESTNET_API_URL.to_string());
        let private_key = var("LIGHTER_PRIVATE_KEY").ok_or_else(|| {
            LighterError::config("LIGHTER_PRIVATE_KEY environment variable is required")
        })?;
        let api_key_index = match var("LIGHTER_API_KEY_INDEX") {
            Some(value) => value.parse::<i32>().map_err(|e| {
                LighterError::config(format!("Invalid LIGHTER_API_KEY_INDEX: {}", e))
            })?,
            None => 0,
        };
        let account_index = var("LIGHTER_ACCOUNT_INDEX")
            .ok_or_else(|| {
                LighterError::config("LIGHTER_ACCOUNT_INDEX environment variable is required")
            })?
            .parse::<i64>()
            .map_err(|e| LighterError::config(format!("Invalid LIGHTER_ACCOUNT_INDEX: {}", e)))?;

        Self::new(&url, &private_key, api_key_index, account_index)
    }

    /// Set the chain ID
    pub fn with_chain_id(mut self, chain_id: i32) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set the signer library path
    pub fn with_signer_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.signer_path = Some(path.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check if this is mainnet
    pub fn is_mainnet(&self) -> bool {
        self.network == Network::Mainnet
    }
}

/// Strip an optional 0x prefix and check the key is hex
fn normalize_private_key(private_key: &str) -> Result<String> {
    let key = private_key.trim();
    let key = key
        .strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key);

    if key.is_empty() {
        return Err(LighterError::config("Private key is empty"));
    }
    hex::decode(key)
        .map_err(|e| LighterError::config(format!("Private key is not valid hex: {}", e)))?;

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "0xabcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789";

    #[test]
    fn test_chain_id_from_url() {
        let config = Config::new("https://testnet.zklighter.elliot.ai", KEY, 0, 1).unwrap();
        assert_eq!(config.chain_id, 300);
        assert_eq!(config.network, Network::Testnet);

        let config = Config::new("https://mainnet.zklighter.elliot.ai", KEY, 0, 1).unwrap();
        assert_eq!(config.chain_id, 304);
        assert!(config.is_mainnet());

        let config = config.with_chain_id(1);
        assert_eq!(config.chain_id, 1);
    }

    #[test]
    fn test_private_key_prefix_is_stripped() {
        let with_prefix = Config::new("https://testnet.zklighter.elliot.ai", KEY, 0, 1).unwrap();
        let without_prefix =
            Config::new("https://testnet.zklighter.elliot.ai", &KEY[2..], 0, 1).unwrap();
        assert_eq!(with_prefix.private_key, without_prefix.private_key);
        assert!(!with_prefix.private_key.starts_with("0x"));
    }

    #[test]
    fn test_placeholder_key_from_docs_is_accepted() {
        let key = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        let config = Config::new("https://testnet.zklighter.elliot.ai", key, 0, 12345).unwrap();
        assert_eq!(config.private_key, &key[2..]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(Config::new("not a url", KEY, 0, 1).is_err());
        assert!(Config::new("ftp://testnet.zklighter.elliot.ai", KEY, 0, 1).is_err());
        assert!(Config::new("https://testnet.zklighter.elliot.ai", "0x", 0, 1).is_err());
        assert!(Config::new("https://testnet.zklighter.elliot.ai", "xyz", 0, 1).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("https://testnet.zklighter.elliot.ai", KEY, 0, 1).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("abcdef0123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert!("kairos".parse::<Network>().is_err());
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        move |name: &str| vars.get(name).map(|value| value.to_string())
    }

    #[test]
    fn test_from_env_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("LIGHTER_PRIVATE_KEY", KEY),
            ("LIGHTER_ACCOUNT_INDEX", "42"),
        ]))
        .unwrap();

        assert_eq!(config.url, TESTNET_API_URL);
        assert_eq!(config.api_key_index, 0);
        assert_eq!(config.account_index, 42);
        assert_eq!(config.chain_id, 300);
    }

    #[test]
    fn test_from_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LIGHTER_API_URL", "https://mainnet.zklighter.elliot.ai"),
            ("LIGHTER_PRIVATE_KEY", KEY),
            ("LIGHTER_API_KEY_INDEX", "3"),
            ("LIGHTER_ACCOUNT_INDEX", "7"),
        ]))
        .unwrap();

        assert_eq!(config.api_key_index, 3);
        assert_eq!(config.account_index, 7);
        assert!(config.is_mainnet());
    }

    #[test]
    fn test_from_env_missing_required() {
        let missing_key = Config::from_lookup(lookup(&[("LIGHTER_ACCOUNT_INDEX", "42")]));
        match missing_key {
            Err(LighterError::Config(message)) => assert!(message.contains("LIGHTER_PRIVATE_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }

        let missing_account = Config::from_lookup(lookup(&[("LIGHTER_PRIVATE_KEY", KEY)]));
        match missing_account {
            Err(LighterError::Config(message)) => {
                assert!(message.contains("LIGHTER_ACCOUNT_INDEX"))
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_rejects_non_numeric_indexes() {
        let bad_api_key = Config::from_lookup(lookup(&[
            ("LIGHTER_PRIVATE_KEY", KEY),
            ("LIGHTER_API_KEY_INDEX", "first"),
            ("LIGHTER_ACCOUNT_INDEX", "42"),
        ]));
        assert!(matches!(
            bad_api_key,
            Err(LighterError::Config(message))
                if message.starts_with("Invalid LIGHTER_API_KEY_INDEX")
        ));

        let bad_account = Config::from_lookup(lookup(&[
            ("LIGHTER_PRIVATE_KEY", KEY),
            ("LIGHTER_ACCOUNT_INDEX", "0x2a"),
        ]));
        assert!(matches!(
            bad_account,
            Err(LighterError::Config(message))
                if message.starts_with("Invalid LIGHTER_ACCOUNT_INDEX")
        ));
    }
}
