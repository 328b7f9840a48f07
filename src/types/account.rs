//! Account-related types: withdrawals, transfers, leverage

use crate::error::LighterError;
use crate::types::constants::margin_modes;
use serde::{Deserialize, Serialize};

/// Margin mode for a market position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum MarginMode {
    /// Cross margin (0)
    Cross,
    /// Isolated margin (1)
    Isolated,
}

impl std::fmt::Display for MarginMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarginMode::Cross => write!(f, "cross"),
            MarginMode::Isolated => write!(f, "isolated"),
        }
    }
}

impl TryFrom<i32> for MarginMode {
    type Error = LighterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            margin_modes::CROSS => Ok(MarginMode::Cross),
            margin_modes::ISOLATED => Ok(MarginMode::Isolated),
            other => Err(LighterError::invalid_parameter(format!(
                "Unknown margin mode: {}",
                other
            ))),
        }
    }
}

impl From<MarginMode> for i32 {
    fn from(mode: MarginMode) -> Self {
        match mode {
            MarginMode::Cross => margin_modes::CROSS,
            MarginMode::Isolated => margin_modes::ISOLATED,
        }
    }
}

/// Parameters for signing a withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawParams {
    /// Amount in USDC base units
    pub amount: i64,
    /// Transaction nonce
    pub nonce: i64,
}

/// Parameters for signing a transfer between accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
    /// Receiving account index
    pub to_account_index: i64,
    /// Amount in USDC base units
    pub amount: i64,
    /// Fee in USDC base units
    pub fee: i64,
    /// Free-form memo forwarded to the signer
    pub memo: String,
    /// Transaction nonce
    pub nonce: i64,
}

/// Parameters for signing a leverage update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeverageParams {
    /// Market index
    pub market_index: i32,
    /// Initial margin fraction
    pub fraction: i64,
    /// Margin mode
    pub margin_mode: MarginMode,
    /// Transaction nonce
    pub nonce: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_mode_codes() {
        assert_eq!(i32::from(MarginMode::Isolated), 1);
        assert_eq!(MarginMode::try_from(0).unwrap(), MarginMode::Cross);
        assert!(MarginMode::try_from(2).is_err());
    }

    #[test]
    fn test_transfer_params_serde() {
        let params = TransferParams {
            to_account_index: 42,
            amount: 1_000_000,
            fee: 0,
            memo: "rent".to_string(),
            nonce: 3,
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["toAccountIndex"], 42);
        assert_eq!(value["memo"], "rent");

        let leverage: UpdateLeverageParams = serde_json::from_str(
            r#"{"marketIndex": 1, "fraction": 500, "marginMode": 1, "nonce": 4}"#,
        )
        .unwrap();
        assert_eq!(leverage.margin_mode, MarginMode::Isolated);
    }
}
