//! Public pool types

use serde::{Deserialize, Serialize};

/// Parameters for signing a public pool creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublicPoolParams {
    /// Operator fee
    pub operator_fee: i64,
    /// Shares minted at creation
    pub initial_total_shares: i64,
    /// Minimum share rate the operator must keep
    pub min_operator_share_rate: i64,
    /// Transaction nonce
    pub nonce: i64,
}

/// Parameters for signing a public pool update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicPoolParams {
    /// Pool index
    pub public_pool_index: i32,
    /// Operator fee
    pub operator_fee: i64,
    /// Minimum share rate the operator must keep
    pub min_operator_share_rate: i64,
    /// Maximum operator share rate
    pub operator_share_rate_max: i64,
    /// Transaction nonce
    pub nonce: i64,
}

/// Parameters for minting or burning pool shares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharesParams {
    /// Pool index
    pub public_pool_index: i32,
    /// Number of shares
    pub share_amount: i64,
    /// Transaction nonce
    pub nonce: i64,
}
