//! Lighter transaction signer backed by the native signer library

use crate::{
    error::Result,
    signer::{
        config::Config,
        ffi::NativeLibrary,
        platform::{resolve_library_path, validate_binary_exists},
    },
    types::{ApiKeyResponse, SignResult},
};
use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use tracing::{debug, info};

/// Held for the duration of every native call. The signer library keeps one
/// current client per process, so the lock is shared by all signers.
static NATIVE_LOCK: Mutex<()> = Mutex::new(());

fn native_lock() -> MutexGuard<'static, ()> {
    // the guarded state lives in the native library; a panic elsewhere
    // does not invalidate it
    NATIVE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Positional interface of the native signer.
///
/// Arguments are passed exactly as the C exports take them (booleans as
/// 0/1, enums as their codes). Lifecycle calls return the error text, if any.
pub trait SignerBackend: Send + Sync {
    /// Generate a new API key pair from `seed` (empty seed = random)
    fn generate_api_key(&self, seed: &str) -> ApiKeyResponse;

    /// Register the signing client for an account and API key
    fn create_client(
        &self,
        url: &str,
        private_key: &str,
        chain_id: i32,
        api_key_index: i32,
        account_index: i64,
    ) -> Option<String>;

    /// Verify the registered client against the account
    fn check_client(&self, api_key: &str, account_index: i64) -> Option<String>;

    /// Make another registered API key the active one
    fn switch_api_key(&self, api_key_index: i32) -> Option<String>;

    /// Sign a create-order transaction
    #[allow(clippy::too_many_arguments)]
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
    ) -> SignResult;

    /// Sign a cancel-order transaction
    fn sign_cancel_order(&self, market_index: i32, order_index: i64, nonce: i64) -> SignResult;

    /// Sign a modify-order transaction
    fn sign_modify_order(
        &self,
        market_index: i32,
        order_index: i64,
        base_amount: i64,
        price: i64,
        trigger_price: i64,
        nonce: i64,
    ) -> SignResult;

    /// Sign a cancel-all-orders transaction
    fn sign_cancel_all_orders(&self, time_in_force: i32, time: i64, nonce: i64) -> SignResult;

    /// Sign a withdrawal
    fn sign_withdraw(&self, amount: i64, nonce: i64) -> SignResult;

    /// Sign a transfer
    fn sign_transfer(
        &self,
        to_account_index: i64,
        amount: i64,
        fee: i64,
        memo: &str,
        nonce: i64,
    ) -> SignResult;

    /// Sign a sub account creation
    fn sign_create_sub_account(&self, nonce: i64) -> SignResult;

    /// Sign an API public key change
    fn sign_change_pub_key(&self, new_pubkey: &str, nonce: i64) -> SignResult;

    /// Sign a leverage update
    fn sign_update_leverage(
        &self,
        market_index: i32,
        fraction: i64,
        margin_mode: i32,
        nonce: i64,
    ) -> SignResult;

    /// Sign a public pool creation
    fn sign_create_public_pool(
        &self,
        operator_fee: i64,
        initial_total_shares: i64,
        min_operator_share_rate: i64,
        nonce: i64,
    ) -> SignResult;

    /// Sign a public pool update
    fn sign_update_public_pool(
        &self,
        public_pool_index: i32,
        operator_fee: i64,
        min_operator_share_rate: i64,
        operator_share_rate_max: i64,
        nonce: i64,
    ) -> SignResult;

    /// Sign a pool share mint
    fn sign_mint_shares(&self, public_pool_index: i32, share_amount: i64, nonce: i64) -> SignResult;

    /// Sign a pool share burn
    fn sign_burn_shares(&self, public_pool_index: i32, share_amount: i64, nonce: i64) -> SignResult;

    /// Create an auth token valid until `deadline` (unix seconds)
    fn create_auth_token(&self, deadline: i64) -> SignResult;
}

/// Lighter transaction signer
///
/// Wraps the platform signer library. The library keeps a process-wide
/// current client that `create_client` and `switch_api_key` replace, so calls
/// from every `LighterSigner` in the process go through one lock.
#[derive(Debug)]
pub struct LighterSigner {
    library: NativeLibrary,
    path: PathBuf,
}

impl LighterSigner {
    /// Load the signer library chosen by `config` (see
    /// [`resolve_library_path`](crate::signer::platform::resolve_library_path))
    pub fn load(config: &Config) -> Result<Self> {
        let path = resolve_library_path(config.signer_path.as_deref())?;
        Self::load_from(path)
    }

    /// Load the signer for the current platform from the default location
    pub fn load_default() -> Result<Self> {
        let path = resolve_library_path(None)?;
        Self::load_from(path)
    }

    /// Load the signer library at `path`
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        validate_binary_exists(path)?;
        let library = NativeLibrary::open(path)?;
        info!("✅ Signer library loaded from {}", path.display());

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SignerBackend for LighterSigner {
    fn generate_api_key(&self, seed: &str) -> ApiKeyResponse {
        let _guard = native_lock();
        debug!("GenerateAPIKey (seeded: {})", !seed.is_empty());
        self.library.generate_api_key(seed)
    }

    fn create_client(
        &self,
        url: &str,
        private_key: &str,
        chain_id: i32,
        api_key_index: i32,
        account_index: i64,
    ) -> Option<String> {
        let _guard = native_lock();
        debug!(
            "CreateClient url={} chain_id={} api_key_index={} account_index={}",
            url, chain_id, api_key_index, account_index
        );
        self.library
            .create_client(url, private_key, chain_id, api_key_index, account_index)
    }

    fn check_client(&self, api_key: &str, account_index: i64) -> Option<String> {
        let _guard = native_lock();
        debug!("CheckClient account_index={}", account_index);
        self.library.check_client(api_key, account_index)
    }

    fn switch_api_key(&self, api_key_index: i32) -> Option<String> {
        let _guard = native_lock();
        debug!("SwitchAPIKey api_key_index={}", api_key_index);
        self.library.switch_api_key(api_key_index)
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
        let _guard = native_lock();
        debug!(
            "SignCreateOrder market={} client_order_index={} nonce={}",
            market_index, client_order_index, nonce
        );
        self.library.sign_create_order(
            market_index,
            client_order_index,
            base_amount,
            price,
            is_ask,
            order_type,
            time_in_force,
            reduce_only,
            trigger_price,
            order_expiry,
            nonce,
        )
    }

    fn sign_cancel_order(&self, market_index: i32, order_index: i64, nonce: i64) -> SignResult {
        let _guard = native_lock();
        debug!(
            "SignCancelOrder market={} order_index={} nonce={}",
            market_index, order_index, nonce
        );
        self.library.sign_cancel_order(market_index, order_index, nonce)
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
        let _guard = native_lock();
        debug!(
            "SignModifyOrder market={} order_index={} nonce={}",
            market_index, order_index, nonce
        );
        self.library
            .sign_modify_order(market_index, order_index, base_amount, price, trigger_price, nonce)
    }

    fn sign_cancel_all_orders(&self, time_in_force: i32, time: i64, nonce: i64) -> SignResult {
        let _guard = native_lock();
        debug!("SignCancelAllOrders tif={} nonce={}", time_in_force, nonce);
        self.library.sign_cancel_all_orders(time_in_force, time, nonce)
    }

    fn sign_withdraw(&self, amount: i64, nonce: i64) -> SignResult {
        let _guard = native_lock();
        debug!("SignWithdraw amount={} nonce={}", amount, nonce);
        self.library.sign_withdraw(amount, nonce)
    }

    fn sign_transfer(
        &self,
        to_account_index: i64,
        amount: i64,
        fee: i64,
        memo: &str,
        nonce: i64,
    ) -> SignResult {
        let _guard = native_lock();
        debug!("SignTransfer to={} amount={} nonce={}", to_account_index, amount, nonce);
        self.library
            .sign_transfer(to_account_index, amount, fee, memo, nonce)
    }

    fn sign_create_sub_account(&self, nonce: i64) -> SignResult {
        let _guard = native_lock();
        debug!("SignCreateSubAccount nonce={}", nonce);
        self.library.sign_create_sub_account(nonce)
    }

    fn sign_change_pub_key(&self, new_pubkey: &str, nonce: i64) -> SignResult {
        let _guard = native_lock();
        debug!("SignChangePubKey nonce={}", nonce);
        self.library.sign_change_pub_key(new_pubkey, nonce)
    }

    fn sign_update_leverage(
        &self,
        market_index: i32,
        fraction: i64,
        margin_mode: i32,
        nonce: i64,
    ) -> SignResult {
        let _guard = native_lock();
        debug!("SignUpdateLeverage market={} fraction={} nonce={}", market_index, fraction, nonce);
        self.library
            .sign_update_leverage(market_index, fraction, margin_mode, nonce)
    }

    fn sign_create_public_pool(
        &self,
        operator_fee: i64,
        initial_total_shares: i64,
        min_operator_share_rate: i64,
        nonce: i64,
    ) -> SignResult {
        let _guard = native_lock();
        debug!("SignCreatePublicPool nonce={}", nonce);
        self.library.sign_create_public_pool(
            operator_fee,
            initial_total_shares,
            min_operator_share_rate,
            nonce,
        )
    }

    fn sign_update_public_pool(
        &self,
        public_pool_index: i32,
        operator_fee: i64,
        min_operator_share_rate: i64,
        operator_share_rate_max: i64,
        nonce: i64,
    ) -> SignResult {
        let _guard = native_lock();
        debug!("SignUpdatePublicPool pool={} nonce={}", public_pool_index, nonce);
        self.library.sign_update_public_pool(
            public_pool_index,
            operator_fee,
            min_operator_share_rate,
            operator_share_rate_max,
            nonce,
        )
    }

    fn sign_mint_shares(
        &self,
        public_pool_index: i32,
        share_amount: i64,
        nonce: i64,
    ) -> SignResult {
        let _guard = native_lock();
        debug!("SignMintShares pool={} shares={} nonce={}", public_pool_index, share_amount, nonce);
        self.library
            .sign_mint_shares(public_pool_index, share_amount, nonce)
    }

    fn sign_burn_shares(
        &self,
        public_pool_index: i32,
        share_amount: i64,
        nonce: i64,
    ) -> SignResult {
        let _guard = native_lock();
        debug!("SignBurnShares pool={} shares={} nonce={}", public_pool_index, share_amount, nonce);
        self.library
            .sign_burn_shares(public_pool_index, share_amount, nonce)
    }

    fn create_auth_token(&self, deadline: i64) -> SignResult {
        let _guard = native_lock();
        debug!("CreateAuthToken deadline={}", deadline);
        self.library.create_auth_token(deadline)
    }
}
