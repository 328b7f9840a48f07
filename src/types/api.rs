//! Signer results and API response types

use crate::error::{LighterError, Result};
use crate::types::constants::tx_types;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Key pair produced by the native key generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    /// Generated private key
    pub private_key: Option<String>,
    /// Matching public key
    pub public_key: Option<String>,
    /// Error reported by the native library
    pub error: Option<String>,
}

impl ApiKeyResponse {
    /// Build a response carrying only an error
    pub fn from_error(error: impl Into<String>) -> Self {
        Self {
            private_key: None,
            public_key: None,
            error: Some(error.into()),
        }
    }
}

/// Raw outcome of a native signing call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignResult {
    /// Signed transaction payload
    pub signature: Option<String>,
    /// Error reported by the native library
    pub error: Option<String>,
}

impl SignResult {
    /// Build a successful result
    pub fn ok(signature: impl Into<String>) -> Self {
        Self {
            signature: Some(signature.into()),
            error: None,
        }
    }

    /// Build a failed result
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            signature: None,
            error: Some(error.into()),
        }
    }

    /// Convert into a `SignedTx`, tagging failures with `operation`
    pub fn into_signed(self, operation: &str) -> Result<SignedTx> {
        if let Some(error) = self.error {
            return Err(LighterError::signer(operation, error));
        }
        self.signature
            .map(SignedTx::new)
            .ok_or_else(|| LighterError::signer(operation, "empty result"))
    }
}

/// A signed transaction as returned by the native signer.
///
/// The signer returns the transaction info as a JSON document; the raw text is
/// what the API expects as `tx_info`, so it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedTx(String);

impl SignedTx {
    /// Wrap a raw signer payload
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw payload
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw payload
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse the payload as JSON
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.0)?)
    }

    /// The `Sig` field of the payload, if present
    pub fn sig(&self) -> Result<Option<String>> {
        Ok(self
            .json()?
            .get("Sig")
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}

impl fmt::Display for SignedTx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignedTx {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Transaction type accompanying a signed payload on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TxType {
    /// Change API public key
    ChangePubKey,
    /// Create sub account
    CreateSubAccount,
    /// Create public pool
    CreatePublicPool,
    /// Update public pool
    UpdatePublicPool,
    /// Transfer
    Transfer,
    /// Withdraw
    Withdraw,
    /// Create order
    CreateOrder,
    /// Cancel order
    CancelOrder,
    /// Cancel all orders
    CancelAllOrders,
    /// Modify order
    ModifyOrder,
    /// Mint pool shares
    MintShares,
    /// Burn pool shares
    BurnShares,
    /// Update leverage
    UpdateLeverage,
}

impl TryFrom<i32> for TxType {
    type Error = LighterError;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            tx_types::CHANGE_PUB_KEY => Ok(TxType::ChangePubKey),
            tx_types::CREATE_SUB_ACCOUNT => Ok(TxType::CreateSubAccount),
            tx_types::CREATE_PUBLIC_POOL => Ok(TxType::CreatePublicPool),
            tx_types::UPDATE_PUBLIC_POOL => Ok(TxType::UpdatePublicPool),
            tx_types::TRANSFER => Ok(TxType::Transfer),
            tx_types::WITHDRAW => Ok(TxType::Withdraw),
            tx_types::CREATE_ORDER => Ok(TxType::CreateOrder),
            tx_types::CANCEL_ORDER => Ok(TxType::CancelOrder),
            tx_types::CANCEL_ALL_ORDERS => Ok(TxType::CancelAllOrders),
            tx_types::MODIFY_ORDER => Ok(TxType::ModifyOrder),
            tx_types::MINT_SHARES => Ok(TxType::MintShares),
            tx_types::BURN_SHARES => Ok(TxType::BurnShares),
            tx_types::UPDATE_LEVERAGE => Ok(TxType::UpdateLeverage),
            other => Err(LighterError::invalid_parameter(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

impl From<TxType> for i32 {
    fn from(tx_type: TxType) -> Self {
        match tx_type {
            TxType::ChangePubKey => tx_types::CHANGE_PUB_KEY,
            TxType::CreateSubAccount => tx_types::CREATE_SUB_ACCOUNT,
            TxType::CreatePublicPool => tx_types::CREATE_PUBLIC_POOL,
            TxType::UpdatePublicPool => tx_types::UPDATE_PUBLIC_POOL,
            TxType::Transfer => tx_types::TRANSFER,
            TxType::Withdraw => tx_types::WITHDRAW,
            TxType::CreateOrder => tx_types::CREATE_ORDER,
            TxType::CancelOrder => tx_types::CANCEL_ORDER,
            TxType::CancelAllOrders => tx_types::CANCEL_ALL_ORDERS,
            TxType::ModifyOrder => tx_types::MODIFY_ORDER,
            TxType::MintShares => tx_types::MINT_SHARES,
            TxType::BurnShares => tx_types::BURN_SHARES,
            TxType::UpdateLeverage => tx_types::UPDATE_LEVERAGE,
        }
    }
}

/// Response of the next-nonce endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextNonceResponse {
    /// Status code (200 on success)
    pub code: i32,
    /// Optional message
    #[serde(default)]
    pub message: Option<String>,
    /// Next usable nonce for the API key
    #[serde(default)]
    pub nonce: i64,
}

/// Response of the send-transaction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendTxResponse {
    /// Status code (200 on success)
    pub code: i32,
    /// Optional message
    #[serde(default)]
    pub message: Option<String>,
    /// Hash of the accepted transaction
    #[serde(default)]
    pub tx_hash: Option<String>,
    /// Expected execution latency reported by the sequencer
    #[serde(default)]
    pub predicted_execution_time_ms: Option<i64>,
}
