//! API client for the Lighter REST API

use crate::{
    api::utils::{check_next_nonce, check_send_tx, join_url},
    error::{LighterError, Result},
    signer::Config,
    types::{
        endpoints::{NEXT_NONCE_PATH, SEND_TX_PATH},
        NextNonceResponse, SendTxResponse, SignedTx, TxType,
    },
};
use reqwest::{Client as HttpClient, Request};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Lighter API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    http_client: HttpClient,
    /// Base API URL
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LighterError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let status_code = response.status().as_u16() as i32;
            let error_text = response.text().await.unwrap_or_default();
            Err(LighterError::api(status_code, error_text))
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        debug!("{} {}", request.method(), request.url());
        let response = self.http_client.execute(request).await?;
        Self::parse_response(response).await
    }

    fn next_nonce_request(&self, account_index: i64, api_key_index: i32) -> Result<Request> {
        let url = join_url(&self.base_url, NEXT_NONCE_PATH);
        let params = [
            ("account_index", account_index.to_string()),
            ("api_key_index", api_key_index.to_string()),
        ];
        Ok(self.http_client.get(&url).query(&params).build()?)
    }

    fn send_tx_request(&self, tx_type: TxType, tx_info: &SignedTx) -> Result<Request> {
        let url = join_url(&self.base_url, SEND_TX_PATH);
        let tx_type_code = i32::from(tx_type).to_string();
        let form = [
            ("tx_type", tx_type_code.as_str()),
            ("tx_info", tx_info.as_str()),
        ];
        Ok(self.http_client.post(&url).form(&form).build()?)
    }

    /// Next nonce the sequencer expects for an API key
    pub async fn next_nonce(&self, account_index: i64, api_key_index: i32) -> Result<i64> {
        let request = self.next_nonce_request(account_index, api_key_index)?;
        let response: NextNonceResponse = self.execute(request).await?;
        check_next_nonce(response)
    }

    /// Submit a signed transaction
    pub async fn send_tx(&self, tx_type: TxType, tx_info: &SignedTx) -> Result<SendTxResponse> {
        let request = self.send_tx_request(tx_type, tx_info)?;
        let response: SendTxResponse = self.execute(request).await?;
        let response = check_send_tx(response)?;
        info!(
            "📤 Transaction accepted: {:?} ({})",
            tx_type,
            response.tx_hash.as_deref().unwrap_or("no hash")
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_base_url() {
        let config =
            Config::new("https://testnet.zklighter.elliot.ai", "0xdeadbeef", 0, 1).unwrap();
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.base_url(), "https://testnet.zklighter.elliot.ai/");
    }

    #[test]
    fn test_next_nonce_request_query() {
        let config =
            Config::new("https://testnet.zklighter.elliot.ai", "0xdeadbeef", 0, 1).unwrap();
        let api = ApiClient::new(&config).unwrap();

        let request = api.next_nonce_request(12, 3).unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://testnet.zklighter.elliot.ai/api/v1/nextNonce?account_index=12&api_key_index=3"
        );
    }

    #[test]
    fn test_send_tx_request_is_form_encoded() {
        let config =
            Config::new("https://testnet.zklighter.elliot.ai", "0xdeadbeef", 0, 1).unwrap();
        let api = ApiClient::new(&config).unwrap();
        let tx_info = SignedTx::new(r#"{"Sig":"a+b"}"#);

        let request = api.send_tx_request(TxType::CreateOrder, &tx_info).unwrap();
        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://testnet.zklighter.elliot.ai/api/v1/sendTx"
        );
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );

        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        assert_eq!(body, b"tx_type=14&tx_info=%7B%22Sig%22%3A%22a%2Bb%22%7D");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let config = Config::new("http://127.0.0.1:9", "0xdeadbeef", 0, 1)
            .unwrap()
            .with_timeout(2);
        let api = ApiClient::new(&config).unwrap();

        let result = api.next_nonce(1, 0).await;
        assert!(matches!(result, Err(LighterError::Http(_))));
    }
}
