// src/config.rs
// where the checker points and what it asks about

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";
pub const TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // API
    pub api: ApiConfig,

    // What to check
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `/info` is appended per request
    pub base_url: String,

    /// Per-request timeout (in seconds)
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub wallet: String,
    pub token: String,

    /// Minimum share of total supply (0-100) to count as a whale
    pub threshold_pct: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            wallet: "0xa2ce501d9c0c5e23d34272f84402cfb7835b3126".to_string(),
            token: "HFUN".to_string(),
            threshold_pct: 1.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // .env is optional
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_defaults = ApiConfig::default();
        let check_defaults = CheckConfig::default();

        let testnet = match lookup("HYPERLIQUID_TESTNET") {
            Some(v) => v
                .parse::<bool>()
                .with_context(|| format!("HYPERLIQUID_TESTNET must be true or false, got {:?}", v))?,
            None => false,
        };

        let base_url = lookup("HYPERLIQUID_API_URL").unwrap_or_else(|| {
            if testnet {
                TESTNET_API_URL.to_string()
            } else {
                api_defaults.base_url.clone()
            }
        });

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| format!("HTTP_TIMEOUT_SECS must be a positive whole number, got {:?}", v))?,
            None => api_defaults.timeout_secs,
        };

        let threshold_pct = match lookup("WHALE_THRESHOLD_PCT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("WHALE_THRESHOLD_PCT must be a number, got {:?}", v))?,
            None => check_defaults.threshold_pct,
        };

        Ok(Config {
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout_secs,
            },
            check: CheckConfig {
                wallet: lookup("WHALE_WALLET").unwrap_or(check_defaults.wallet),
                token: lookup("WHALE_TOKEN").unwrap_or(check_defaults.token),
                threshold_pct,
            },
        })
    }
}
