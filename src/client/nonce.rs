//! Local nonce bookkeeping

use crate::{api::ApiClient, error::Result};
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

/// Hands out strictly increasing nonces.
///
/// Clones share the same counter.
#[derive(Debug, Clone)]
pub struct NonceManager {
    next: Arc<AtomicI64>,
}

impl NonceManager {
    /// Start counting at `first`
    pub fn new(first: i64) -> Self {
        Self {
            next: Arc::new(AtomicI64::new(first)),
        }
    }

    /// Start counting at the current unix time in milliseconds
    pub fn from_time() -> Self {
        Self::new(chrono::Utc::now().timestamp_millis())
    }

    /// Start counting at the nonce the API expects next
    pub async fn from_api(api: &ApiClient, account_index: i64, api_key_index: i32) -> Result<Self> {
        Ok(Self::new(api.next_nonce(account_index, api_key_index).await?))
    }

    /// Take the next nonce
    pub fn next(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Look at the next nonce without taking it
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Restart counting at `next`
    pub fn reset(&self, next: i64) {
        self.next.store(next, Ordering::SeqCst);
    }
}
