use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between asking "is this a whale?" and getting an answer.
///
/// Lookups return these internally; only the public boundary
/// (`resolve_supply` / `is_whale`) flattens them into `None` / `false`.
#[derive(Debug, Error)]
pub enum WhaleError {
    #[error("could not find token ID for {symbol}")]
    TokenNotFound { symbol: String },

    #[error("wallet {wallet} does not hold any {symbol} tokens")]
    HoldingNotFound { wallet: String, symbol: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed {context} response: {source}")]
    Malformed {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("total supply of {symbol} is zero")]
    ZeroSupply { symbol: String },

    #[error("threshold {0} is outside 0-100")]
    InvalidThreshold(f64),

    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("holding percentage overflowed")]
    Overflow,
}

impl WhaleError {
    /// True for the "nothing to find" outcomes, as opposed to API or input failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WhaleError::TokenNotFound { .. } | WhaleError::HoldingNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WhaleError>;
