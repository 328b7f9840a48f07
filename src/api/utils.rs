//! Utility functions for API operations

use crate::{
    error::{LighterError, Result},
    types::{NextNonceResponse, SendTxResponse},
};

/// Status code the API puts in successful JSON bodies
pub const API_OK: i32 = 200;

/// Join a base URL and a path without doubling or dropping the slash
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else if !base_url.ends_with('/') && !path.starts_with('/') {
        format!("{}/{}", base_url, path)
    } else {
        format!("{}{}", base_url, path)
    }
}

/// Reject next-nonce bodies whose `code` is not 200
pub fn check_next_nonce(response: NextNonceResponse) -> Result<i64> {
    if response.code != API_OK {
        return Err(LighterError::api(
            response.code,
            response.message.unwrap_or_default(),
        ));
    }
    Ok(response.nonce)
}

/// Reject send-tx bodies whose `code` is not 200
pub fn check_send_tx(response: SendTxResponse) -> Result<SendTxResponse> {
    if response.code != API_OK {
        return Err(LighterError::api(
            response.code,
            response.message.clone().unwrap_or_default(),
        ));
    }
    Ok(response)
}
