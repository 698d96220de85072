// Hyperliquid public info API.
//
// Every read is a POST of a small JSON body to `{base}/info`; the `type`
// field picks the query. Amounts come back as decimal strings.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ExchangeInfo;
use crate::config::ApiConfig;
use crate::error::{Result, WhaleError};
use crate::models::{TokenDescriptor, TokenSupplyInfo, WalletHolding};

pub struct HyperliquidClient {
    client: Client,
    info_url: String,
}

impl HyperliquidClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("WhaleChecker/1.0")
            .build()?;

        Ok(Self {
            client,
            info_url: format!("{}/info", config.base_url.trim_end_matches('/')),
        })
    }

    async fn post_info<T: DeserializeOwned>(
        &self,
        request: &InfoRequest<'_>,
        context: &'static str,
    ) -> Result<T> {
        debug!("🌐 POST {} ({})", self.info_url, context);

        let response = self.client.post(&self.info_url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Hyperliquid API error on {}: {}", context, status);
            return Err(WhaleError::Status { status, body });
        }

        parse_response(&body, context)
    }
}

/// Decode a body into its typed form; a missing required field is `Malformed`
pub(crate) fn parse_response<T: DeserializeOwned>(body: &str, context: &'static str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| WhaleError::Malformed { context, source })
}

#[async_trait]
impl ExchangeInfo for HyperliquidClient {
    async fn spot_meta(&self) -> Result<SpotMeta> {
        self.post_info(&InfoRequest::SpotMeta, "spotMeta").await
    }

    async fn token_details(&self, token_id: &str) -> Result<TokenDetails> {
        self.post_info(&InfoRequest::TokenDetails { token_id }, "tokenDetails")
            .await
    }

    async fn spot_user_state(&self, user: &str) -> Result<SpotUserState> {
        self.post_info(
            &InfoRequest::SpotClearinghouseState { user },
            "spotClearinghouseState",
        )
        .await
    }
}

// Request bodies
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum InfoRequest<'a> {
    SpotMeta,
    TokenDetails {
        #[serde(rename = "tokenId")]
        token_id: &'a str,
    },
    SpotClearinghouseState {
        user: &'a str,
    },
}

// Response types
#[derive(Debug, Clone, Deserialize)]
pub struct SpotMeta {
    pub tokens: Vec<SpotToken>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotToken {
    pub name: String,
    pub token_id: String,
    pub index: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub name: String,
    pub total_supply: Decimal,
    pub circulating_supply: Decimal,
    #[serde(default)]
    pub max_supply: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotUserState {
    pub balances: Vec<SpotBalance>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotBalance {
    pub coin: String,
    #[serde(default)]
    pub hold: Decimal,
    pub total: Decimal,
}

impl From<&SpotToken> for TokenDescriptor {
    fn from(token: &SpotToken) -> Self {
        Self {
            symbol: token.name.clone(),
            identifier: token.token_id.clone(),
            index: token.index,
        }
    }
}

impl From<TokenDetails> for TokenSupplyInfo {
    fn from(details: TokenDetails) -> Self {
        Self {
            total_supply: details.total_supply,
            circulating_supply: details.circulating_supply,
            max_supply: details.max_supply,
        }
    }
}

impl From<&SpotBalance> for WalletHolding {
    fn from(balance: &SpotBalance) -> Self {
        Self {
            coin: balance.coin.clone(),
            total_amount: balance.total,
            hold: balance.hold,
        }
    }
}
