// In-memory exchange for analyzer tests
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ExchangeInfo, SpotBalance, SpotMeta, SpotToken, SpotUserState, TokenDetails};
use crate::error::{Result, WhaleError};

#[derive(Default)]
pub struct MockExchange {
    tokens: Vec<SpotToken>,
    details: HashMap<String, TokenDetails>,
    balances: HashMap<String, Vec<SpotBalance>>,
    balance_failure: Mutex<Option<WhaleError>>,
    pub meta_calls: AtomicUsize,
    pub details_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
}

impl MockExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// List a token and give it supply figures
    pub fn with_token(mut self, symbol: &str, total_supply: Decimal) -> Self {
        let token_id = format!("0x{:032x}", self.tokens.len() + 1);
        self.tokens.push(SpotToken {
            name: symbol.to_string(),
            token_id: token_id.clone(),
            index: self.tokens.len() as u32,
        });
        self.details.insert(
            token_id,
            TokenDetails {
                name: symbol.to_string(),
                total_supply,
                circulating_supply: total_supply,
                max_supply: None,
            },
        );
        self
    }

    /// List a token the details endpoint has nothing for
    pub fn with_unpriced_token(mut self, symbol: &str) -> Self {
        let token_id = format!("0x{:032x}", self.tokens.len() + 1);
        self.tokens.push(SpotToken {
            name: symbol.to_string(),
            token_id,
            index: self.tokens.len() as u32,
        });
        self
    }

    pub fn with_balance(mut self, wallet: &str, coin: &str, total: Decimal) -> Self {
        self.balances
            .entry(wallet.to_string())
            .or_default()
            .push(SpotBalance {
                coin: coin.to_string(),
                hold: Decimal::ZERO,
                total,
            });
        self
    }

    /// The next balance lookup fails with `err`
    pub fn failing_balances(self, err: WhaleError) -> Self {
        *self.balance_failure.lock().unwrap() = Some(err);
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExchangeInfo for MockExchange {
    async fn spot_meta(&self) -> Result<SpotMeta> {
        self.meta_calls.fetch_add(1, Ordering::SeqCst);
        Ok(SpotMeta {
            tokens: self.tokens.clone(),
        })
    }

    async fn token_details(&self, token_id: &str) -> Result<TokenDetails> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        match self.details.get(token_id) {
            Some(details) => Ok(details.clone()),
            None => Err(WhaleError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "null".to_string(),
            }),
        }
    }

    async fn spot_user_state(&self, user: &str) -> Result<SpotUserState> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.balance_failure.lock().unwrap().take() {
            return Err(err);
        }
        Ok(SpotUserState {
            balances: self.balances.get(user).cloned().unwrap_or_default(),
        })
    }
}

/// A genuine reqwest transport error: connection refused on a closed port
pub async fn transport_error() -> WhaleError {
    reqwest::Client::new()
        .post("http://127.0.0.1:1/info")
        .send()
        .await
        .unwrap_err()
        .into()
}
