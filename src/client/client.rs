//! Main client for the Lighter SDK
//!
//! Turns typed parameters into positional signer calls, fills defaults, and
//! turns the signer's error strings into [`LighterError`]s.

use crate::{
    api::ApiClient,
    client::nonce::NonceManager,
    error::{LighterError, Result},
    signer::{Config, LighterSigner, SignerBackend},
    types::{
        ApiKeyResponse, CancelAllOrdersParams, CancelOrderParams, CreateOrderParams,
        CreatePublicPoolParams, ModifyOrderParams, SendTxResponse, SharesParams, SignedTx,
        TransferParams, TxType, UpdateLeverageParams, UpdatePublicPoolParams, WithdrawParams,
        DEFAULT_AUTH_TOKEN_TTL_SECS, DEFAULT_IOC_EXPIRY, NIL_TRIGGER_PRICE,
    },
};
use std::sync::Arc;
use tracing::info;

/// Main client for Lighter operations
///
/// Combines the native signer, the REST API client and a nonce counter.
///
/// # Examples
///
/// ```rust,no_run
/// use lighter_rust_sdk::{LighterClient, CancelOrderParams};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LighterClient::new(
///         "https://testnet.zklighter.elliot.ai",
///         "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
///         0,     // API key index
///         12345, // account index
///     )?;
///     client.initialize()?;
///
///     let tx = client.cancel_order(&CancelOrderParams {
///         market_index: 0,
///         order_index: 281474976710656,
///         nonce: client.next_nonce(),
///     })?;
///     println!("{}", tx);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LighterClient {
    /// Signing backend
    signer: Arc<dyn SignerBackend>,
    /// API client for submitting transactions
    api: ApiClient,
    /// Nonce counter
    nonces: NonceManager,
    /// Configuration
    config: Config,
}

impl std::fmt::Debug for LighterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LighterClient")
            .field("config", &self.config)
            .field("api", &self.api)
            .field("nonces", &self.nonces)
            .finish_non_exhaustive()
    }
}

impl LighterClient {
    /// Create a client and load the native signer for this platform
    ///
    /// The chain ID is 304 when `url` contains "mainnet" and 300 otherwise.
    /// A leading `0x` on `private_key` is ignored.
    pub fn new(
        url: &str,
        private_key: &str,
        api_key_index: i32,
        account_index: i64,
    ) -> Result<Self> {
        Self::with_config(Config::new(url, private_key, api_key_index, account_index)?)
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let signer = LighterSigner::load(&config)?;
        Self::with_backend(config, Arc::new(signer))
    }

    /// Create a client that signs through `signer`
    pub fn with_backend(config: Config, signer: Arc<dyn SignerBackend>) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self {
            signer,
            api,
            nonces: NonceManager::from_time(),
            config,
        })
    }

    /// Register this account and API key with the native signer.
    ///
    /// The signer library holds one current client per process, so the most
    /// recent `initialize` or `switch_api_key` from any client wins.
    pub fn initialize(&self) -> Result<()> {
        if let Some(error) = self.signer.create_client(
            &self.config.url,
            &self.config.private_key,
            self.config.chain_id,
            self.config.api_key_index,
            self.config.account_index,
        ) {
            return Err(LighterError::client(format!(
                "Failed to initialize client: {}",
                error
            )));
        }

        info!(
            "✅ Lighter client initialized for account {} on {} (chain {})",
            self.config.account_index, self.config.network, self.config.chain_id
        );
        Ok(())
    }

    /// Verify the registered client against the account
    pub fn check_client(&self) -> Result<()> {
        if let Some(error) = self
            .signer
            .check_client(&self.config.private_key, self.config.account_index)
        {
            return Err(LighterError::client(format!("Client check failed: {}", error)));
        }
        info!("Client check passed");
        Ok(())
    }

    /// Make another registered API key the active signing key
    pub fn switch_api_key(&mut self, api_key_index: i32) -> Result<()> {
        if let Some(error) = self.signer.switch_api_key(api_key_index) {
            return Err(LighterError::client(format!(
                "Failed to switch API key: {}",
                error
            )));
        }
        self.config.api_key_index = api_key_index;
        info!("🔑 Switched to API key {}", api_key_index);
        Ok(())
    }

    // === Orders ===

    /// Sign a new order
    ///
    /// Absent `trigger_price` is sent as `NIL_TRIGGER_PRICE`, absent
    /// `order_expiry` as `DEFAULT_IOC_EXPIRY`.
    pub fn create_order(&self, params: &CreateOrderParams) -> Result<SignedTx> {
        self.signer
            .sign_create_order(
                params.market_index,
                params.client_order_index,
                params.base_amount,
                params.price,
                i32::from(params.is_ask),
                params.order_type.into(),
                params.time_in_force.into(),
                i32::from(params.reduce_only),
                params.trigger_price.unwrap_or(NIL_TRIGGER_PRICE),
                params.order_expiry.unwrap_or(DEFAULT_IOC_EXPIRY),
                params.nonce,
            )
            .into_signed("Failed to sign order")
    }

    /// Sign an order cancellation
    pub fn cancel_order(&self, params: &CancelOrderParams) -> Result<SignedTx> {
        self.signer
            .sign_cancel_order(params.market_index, params.order_index, params.nonce)
            .into_signed("Failed to sign cancel order")
    }

    /// Sign an order modification
    pub fn modify_order(&self, params: &ModifyOrderParams) -> Result<SignedTx> {
        self.signer
            .sign_modify_order(
                params.market_index,
                params.order_index,
                params.base_amount,
                params.price,
                params.trigger_price,
                params.nonce,
            )
            .into_signed("Failed to sign modify order")
    }

    /// Sign a cancel-all request
    pub fn cancel_all_orders(&self, params: &CancelAllOrdersParams) -> Result<SignedTx> {
        self.signer
            .sign_cancel_all_orders(params.time_in_force.into(), params.time, params.nonce)
            .into_signed("Failed to sign cancel all orders")
    }

    // === Account ===

    /// Sign a withdrawal
    pub fn withdraw(&self, params: &WithdrawParams) -> Result<SignedTx> {
        self.signer
            .sign_withdraw(params.amount, params.nonce)
            .into_signed("Failed to sign withdrawal")
    }

    /// Sign a transfer to another account
    pub fn transfer(&self, params: &TransferParams) -> Result<SignedTx> {
        self.signer
            .sign_transfer(
                params.to_account_index,
                params.amount,
                params.fee,
                &params.memo,
                params.nonce,
            )
            .into_signed("Failed to sign transfer")
    }

    /// Sign a sub account creation
    pub fn create_sub_account(&self, nonce: i64) -> Result<SignedTx> {
        self.signer
            .sign_create_sub_account(nonce)
            .into_signed("Failed to sign create sub account")
    }

    /// Sign a change of the API public key
    pub fn change_pub_key(&self, new_pubkey: &str, nonce: i64) -> Result<SignedTx> {
        self.signer
            .sign_change_pub_key(new_pubkey, nonce)
            .into_signed("Failed to sign change pub key")
    }

    /// Sign a leverage update
    pub fn update_leverage(&self, params: &UpdateLeverageParams) -> Result<SignedTx> {
        self.signer
            .sign_update_leverage(
                params.market_index,
                params.fraction,
                params.margin_mode.into(),
                params.nonce,
            )
            .into_signed("Failed to sign update leverage")
    }

    // === Pools ===

    /// Sign a public pool creation
    pub fn create_public_pool(&self, params: &CreatePublicPoolParams) -> Result<SignedTx> {
        self.signer
            .sign_create_public_pool(
                params.operator_fee,
                params.initial_total_shares,
                params.min_operator_share_rate,
                params.nonce,
            )
            .into_signed("Failed to sign create public pool")
    }

    /// Sign a public pool update
    pub fn update_public_pool(&self, params: &UpdatePublicPoolParams) -> Result<SignedTx> {
        self.signer
            .sign_update_public_pool(
                params.public_pool_index,
                params.operator_fee,
                params.min_operator_share_rate,
                params.operator_share_rate_max,
                params.nonce,
            )
            .into_signed("Failed to sign update public pool")
    }

    /// Sign a pool share mint
    pub fn mint_shares(&self, params: &SharesParams) -> Result<SignedTx> {
        self.signer
            .sign_mint_shares(params.public_pool_index, params.share_amount, params.nonce)
            .into_signed("Failed to sign mint shares")
    }

    /// Sign a pool share burn
    pub fn burn_shares(&self, params: &SharesParams) -> Result<SignedTx> {
        self.signer
            .sign_burn_shares(params.public_pool_index, params.share_amount, params.nonce)
            .into_signed("Failed to sign burn shares")
    }

    // === Auth ===

    /// Create an auth token for the API.
    ///
    /// `None` (or 0) means ten minutes from now.
    pub fn create_auth_token(&self, deadline: Option<i64>) -> Result<SignedTx> {
        let deadline = deadline
            .filter(|deadline| *deadline != 0)
            .unwrap_or_else(|| chrono::Utc::now().timestamp() + DEFAULT_AUTH_TOKEN_TTL_SECS);

        self.signer
            .create_auth_token(deadline)
            .into_signed("Failed to create auth token")
    }

    /// Generate a new API key pair with the platform signer
    pub fn generate_api_key(seed: &str) -> Result<ApiKeyResponse> {
        let signer = LighterSigner::load_default()?;
        Self::generate_api_key_with(&signer, seed)
    }

    /// Generate a new API key pair with `signer`
    pub fn generate_api_key_with(signer: &dyn SignerBackend, seed: &str) -> Result<ApiKeyResponse> {
        let response = signer.generate_api_key(seed);
        if let Some(error) = response.error {
            return Err(LighterError::signer("Failed to generate API key", error));
        }
        Ok(response)
    }

    // === Nonces and submission ===

    /// Take the next local nonce
    pub fn next_nonce(&self) -> i64 {
        self.nonces.next()
    }

    /// Reset the local nonce counter from the API
    pub async fn sync_nonce(&self) -> Result<i64> {
        let nonce = self
            .api
            .next_nonce(self.config.account_index, self.config.api_key_index)
            .await?;
        self.nonces.reset(nonce);
        Ok(nonce)
    }

    /// Submit a signed transaction to the API
    pub async fn submit(&self, tx_type: TxType, tx: &SignedTx) -> Result<SendTxResponse> {
        self.api.send_tx(tx_type, tx).await
    }

    // === Accessors ===

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// API client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Nonce counter
    pub fn nonces(&self) -> &NonceManager {
        &self.nonces
    }

    /// Chain ID handed to the signer
    pub fn chain_id(&self) -> i32 {
        self.config.chain_id
    }

    /// Account index
    pub fn account_index(&self) -> i64 {
        self.config.account_index
    }

    /// Active API key index
    pub fn api_key_index(&self) -> i32 {
        self.config.api_key_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CancelAllTimeInForce, MarginMode, OrderType, SignResult, TimeInForce,
        DEFAULT_28_DAY_ORDER_EXPIRY,
    };
    use std::sync::Mutex;

    /// Records every call as "Name(arg, arg, ...)" and replays canned results
    #[derive(Default)]
    struct MockSigner {
        calls: Mutex<Vec<String>>,
        sign_error: Option<String>,
        client_error: Option<String>,
    }

    impl MockSigner {
        fn failing(error: &str) -> Self {
            Self {
                sign_error: Some(error.to_string()),
                client_error: Some(error.to_string()),
                ..Default::default()
            }
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn sign(&self, call: String) -> SignResult {
            self.record(call.clone());
            match &self.sign_error {
                Some(error) => SignResult::err(error.clone()),
                None => SignResult::ok(format!(r#"{{"Call":"{}","Sig":"c2ln"}}"#, call)),
            }
        }

        fn lifecycle(&self, call: String) -> Option<String> {
            self.record(call);
            self.client_error.clone()
        }

        fn last_call(&self) -> String {
            self.calls.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    impl SignerBackend for MockSigner {
        fn generate_api_key(&self, seed: &str) -> ApiKeyResponse {
            self.record(format!("GenerateAPIKey({})", seed));
            match &self.sign_error {
                Some(error) => ApiKeyResponse::from_error(error.clone()),
                None => ApiKeyResponse {
                    private_key: Some("priv".to_string()),
                    public_key: Some("pub".to_string()),
                    error: None,
                },
            }
        }

        fn create_client(
            &self,
            url: &str,
            private_key: &str,
            chain_id: i32,
            api_key_index: i32,
            account_index: i64,
        ) -> Option<String> {
            self.lifecycle(format!(
                "CreateClient({}, {}, {}, {}, {})",
                url, private_key, chain_id, api_key_index, account_index
            ))
        }

        fn check_client(&self, api_key: &str, account_index: i64) -> Option<String> {
            self.lifecycle(format!("CheckClient({}, {})", api_key, account_index))
        }

        fn switch_api_key(&self, api_key_index: i32) -> Option<String> {
            self.lifecycle(format!("SwitchAPIKey({})", api_key_index))
        }

        fn sign_create_order(
            &self,
            market_index: i32,
            client_order_index: i64,
            base_amount: i64,
            price: i32,
            is_ask: i32,
            order_type: i32,
            time_in_force: i32,
            reduce_only: i32,
            trigger_price: i32,
            order_expiry: i64,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!(
                "SignCreateOrder({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
                market_index, client_order_index, base_amount, price, is_ask, order_type,
                time_in_force, reduce_only, trigger_price, order_expiry, nonce
            ))
        }

        fn sign_cancel_order(&self, market_index: i32, order_index: i64, nonce: i64) -> SignResult {
            self.sign(format!("SignCancelOrder({}, {}, {})", market_index, order_index, nonce))
        }

        fn sign_modify_order(
            &self,
            market_index: i32,
            order_index: i64,
            base_amount: i64,
            price: i64,
            trigger_price: i64,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!(
                "SignModifyOrder({}, {}, {}, {}, {}, {})",
                market_index, order_index, base_amount, price, trigger_price, nonce
            ))
        }

        fn sign_cancel_all_orders(&self, time_in_force: i32, time: i64, nonce: i64) -> SignResult {
            self.sign(format!("SignCancelAllOrders({}, {}, {})", time_in_force, time, nonce))
        }

        fn sign_withdraw(&self, amount: i64, nonce: i64) -> SignResult {
            self.sign(format!("SignWithdraw({}, {})", amount, nonce))
        }

        fn sign_transfer(
            &self,
            to_account_index: i64,
            amount: i64,
            fee: i64,
            memo: &str,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!(
                "SignTransfer({}, {}, {}, {}, {})",
                to_account_index, amount, fee, memo, nonce
            ))
        }

        fn sign_create_sub_account(&self, nonce: i64) -> SignResult {
            self.sign(format!("SignCreateSubAccount({})", nonce))
        }

        fn sign_change_pub_key(&self, new_pubkey: &str, nonce: i64) -> SignResult {
            self.sign(format!("SignChangePubKey({}, {})", new_pubkey, nonce))
        }

        fn sign_update_leverage(
            &self,
            market_index: i32,
            fraction: i64,
            margin_mode: i32,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!(
                "SignUpdateLeverage({}, {}, {}, {})",
                market_index, fraction, margin_mode, nonce
            ))
        }

        fn sign_create_public_pool(
            &self,
            operator_fee: i64,
            initial_total_shares: i64,
            min_operator_share_rate: i64,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!(
                "SignCreatePublicPool({}, {}, {}, {})",
                operator_fee, initial_total_shares, min_operator_share_rate, nonce
            ))
        }

        fn sign_update_public_pool(
            &self,
            public_pool_index: i32,
            operator_fee: i64,
            min_operator_share_rate: i64,
            operator_share_rate_max: i64,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!(
                "SignUpdatePublicPool({}, {}, {}, {}, {})",
                public_pool_index,
                operator_fee,
                min_operator_share_rate,
                operator_share_rate_max,
                nonce
            ))
        }

        fn sign_mint_shares(
            &self,
            public_pool_index: i32,
            share_amount: i64,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!("SignMintShares({}, {}, {})", public_pool_index, share_amount, nonce))
        }

        fn sign_burn_shares(
            &self,
            public_pool_index: i32,
            share_amount: i64,
            nonce: i64,
        ) -> SignResult {
            self.sign(format!("SignBurnShares({}, {}, {})", public_pool_index, share_amount, nonce))
        }

        fn create_auth_token(&self, deadline: i64) -> SignResult {
            self.sign(format!("CreateAuthToken({})", deadline))
        }
    }

    const TESTNET_URL: &str = "https://testnet.zklighter.elliot.ai";

    fn create_test_client(mock: MockSigner) -> (LighterClient, Arc<MockSigner>) {
        let mock = Arc::new(mock);
        let config = Config::new(TESTNET_URL, "0xabcdef", 3, 12345).unwrap();
        let client = LighterClient::with_backend(config, mock.clone()).unwrap();
        (client, mock)
    }

    #[test]
    fn test_initialize_passes_config() {
        let (client, mock) = create_test_client(MockSigner::default());
        client.initialize().unwrap();
        assert_eq!(
            mock.last_call(),
            format!("CreateClient({}, abcdef, 300, 3, 12345)", TESTNET_URL)
        );
    }

    #[test]
    fn test_initialize_mainnet_chain_id() {
        let mock = Arc::new(MockSigner::default());
        let config = Config::new("https://mainnet.zklighter.elliot.ai", "abcdef", 0, 1).unwrap();
        let client = LighterClient::with_backend(config, mock.clone()).unwrap();

        client.initialize().unwrap();
        assert!(mock.last_call().contains(", 304, 0, 1)"));
    }

    #[test]
    fn test_lifecycle_errors() {
        let (mut client, _) = create_test_client(MockSigner::failing("no such api key"));

        let err = client.initialize().unwrap_err();
        assert_eq!(err.to_string(), "Failed to initialize client: no such api key");

        let err = client.check_client().unwrap_err();
        assert_eq!(err.to_string(), "Client check failed: no such api key");

        let err = client.switch_api_key(5).unwrap_err();
        assert_eq!(err.to_string(), "Failed to switch API key: no such api key");
        assert_eq!(client.api_key_index(), 3);
    }

    #[test]
    fn test_check_client_and_switch_key() {
        let (mut client, mock) = create_test_client(MockSigner::default());

        client.check_client().unwrap();
        assert_eq!(mock.last_call(), "CheckClient(abcdef, 12345)");

        client.switch_api_key(7).unwrap();
        assert_eq!(mock.last_call(), "SwitchAPIKey(7)");
        assert_eq!(client.api_key_index(), 7);
    }

    #[test]
    fn test_create_order_defaults() {
        let (client, mock) = create_test_client(MockSigner::default());
        let params = CreateOrderParams::new(
            0,
            1700000000000,
            100,
            50000,
            false,
            OrderType::Market,
            TimeInForce::ImmediateOrCancel,
            42,
        );

        let tx = client.create_order(&params).unwrap();
        assert_eq!(
            mock.last_call(),
            "SignCreateOrder(0, 1700000000000, 100, 50000, 0, 1, 0, 0, 0, 0, 42)"
        );
        assert_eq!(tx.sig().unwrap().as_deref(), Some("c2ln"));
    }

    #[test]
    fn test_create_order_explicit_fields() {
        let (client, mock) = create_test_client(MockSigner::default());
        let params = CreateOrderParams::new(
            1,
            9,
            500,
            3100,
            true,
            OrderType::StopLossLimit,
            TimeInForce::GoodTillTime,
            43,
        )
        .reduce_only(true)
        .trigger_price(3000)
        .order_expiry(DEFAULT_28_DAY_ORDER_EXPIRY);

        client.create_order(&params).unwrap();
        assert_eq!(
            mock.last_call(),
            "SignCreateOrder(1, 9, 500, 3100, 1, 3, 1, 1, 3000, -1, 43)"
        );
    }

    #[test]
    fn test_sign_errors_carry_operation() {
        let (client, _) = create_test_client(MockSigner::failing("invalid nonce"));

        let err = client
            .cancel_order(&CancelOrderParams { market_index: 0, order_index: 1, nonce: 2 })
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to sign cancel order: invalid nonce");

        let err = client
            .withdraw(&WithdrawParams { amount: 1, nonce: 2 })
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to sign withdrawal: invalid nonce");

        let err = client.create_auth_token(Some(1)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to create auth token: invalid nonce");

        let params = SharesParams {
            public_pool_index: 1,
            share_amount: 2,
            nonce: 3,
        };
        match client.burn_shares(&params) {
            Err(LighterError::Signer { operation, message }) => {
                assert_eq!(operation, "Failed to sign burn shares");
                assert_eq!(message, "invalid nonce");
            }
            other => panic!("expected signer error, got {:?}", other),
        }
    }

    #[test]
    fn test_order_management_forwarding() {
        let (client, mock) = create_test_client(MockSigner::default());

        client
            .cancel_order(&CancelOrderParams {
                market_index: 0,
                order_index: 281474976710656,
                nonce: 5,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignCancelOrder(0, 281474976710656, 5)");

        client
            .modify_order(&ModifyOrderParams {
                market_index: 2,
                order_index: 77,
                base_amount: 10,
                price: 2000,
                trigger_price: 0,
                nonce: 6,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignModifyOrder(2, 77, 10, 2000, 0, 6)");

        client
            .cancel_all_orders(&CancelAllOrdersParams {
                time_in_force: CancelAllTimeInForce::Scheduled,
                time: 1700000600000,
                nonce: 7,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignCancelAllOrders(1, 1700000600000, 7)");
    }

    #[test]
    fn test_account_forwarding() {
        let (client, mock) = create_test_client(MockSigner::default());

        client.withdraw(&WithdrawParams { amount: 1_000_000, nonce: 1 }).unwrap();
        assert_eq!(mock.last_call(), "SignWithdraw(1000000, 1)");

        client
            .transfer(&TransferParams {
                to_account_index: 99,
                amount: 500,
                fee: 1,
                memo: "hello".to_string(),
                nonce: 2,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignTransfer(99, 500, 1, hello, 2)");

        client.create_sub_account(3).unwrap();
        assert_eq!(mock.last_call(), "SignCreateSubAccount(3)");

        client.change_pub_key("0xpub", 4).unwrap();
        assert_eq!(mock.last_call(), "SignChangePubKey(0xpub, 4)");

        client
            .update_leverage(&UpdateLeverageParams {
                market_index: 1,
                fraction: 500,
                margin_mode: MarginMode::Isolated,
                nonce: 5,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignUpdateLeverage(1, 500, 1, 5)");
    }

    #[test]
    fn test_pool_forwarding() {
        let (client, mock) = create_test_client(MockSigner::default());

        client
            .create_public_pool(&CreatePublicPoolParams {
                operator_fee: 100,
                initial_total_shares: 1_000_000,
                min_operator_share_rate: 500,
                nonce: 1,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignCreatePublicPool(100, 1000000, 500, 1)");

        client
            .update_public_pool(&UpdatePublicPoolParams {
                public_pool_index: 0,
                operator_fee: 50,
                min_operator_share_rate: 100,
                operator_share_rate_max: 1000,
                nonce: 2,
            })
            .unwrap();
        assert_eq!(mock.last_call(), "SignUpdatePublicPool(0, 50, 100, 1000, 2)");

        let shares = SharesParams { public_pool_index: 1, share_amount: 100_000_000, nonce: 3 };
        client.mint_shares(&shares).unwrap();
        assert_eq!(mock.last_call(), "SignMintShares(1, 100000000, 3)");
        client.burn_shares(&shares).unwrap();
        assert_eq!(mock.last_call(), "SignBurnShares(1, 100000000, 3)");
    }

    #[test]
    fn test_auth_token_deadline() {
        let (client, mock) = create_test_client(MockSigner::default());

        client.create_auth_token(Some(1700003600)).unwrap();
        assert_eq!(mock.last_call(), "CreateAuthToken(1700003600)");

        for deadline in [None, Some(0)] {
            let before = chrono::Utc::now().timestamp();
            client.create_auth_token(deadline).unwrap();
            let after = chrono::Utc::now().timestamp();

            let call = mock.last_call();
            let sent: i64 = call
                .trim_start_matches("CreateAuthToken(")
                .trim_end_matches(')')
                .parse()
                .unwrap();
            assert!(sent >= before + 600 && sent <= after + 600);
        }
    }

    #[test]
    fn test_generate_api_key_with() {
        let mock = MockSigner::default();
        let keys = LighterClient::generate_api_key_with(&mock, "seed").unwrap();
        assert_eq!(keys.private_key.as_deref(), Some("priv"));
        assert_eq!(keys.public_key.as_deref(), Some("pub"));
        assert_eq!(mock.last_call(), "GenerateAPIKey(seed)");

        let failing = MockSigner::failing("bad seed");
        let err = LighterClient::generate_api_key_with(&failing, "").unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate API key: bad seed");
    }

    #[test]
    fn test_local_nonces_increase() {
        let (client, _) = create_test_client(MockSigner::default());
        let first = client.next_nonce();
        assert_eq!(client.next_nonce(), first + 1);

        let clone = client.clone();
        assert_eq!(clone.next_nonce(), first + 2);
    }
}
