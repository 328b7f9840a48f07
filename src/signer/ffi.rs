//! Raw bindings to the native signer library.
//!
//! Every `unsafe` block of the crate lives here. Callers get plain Rust
//! values: C strings are copied out, null and empty strings become `None`.
//! Strings returned by the library are never freed; it allocates them on its
//! own heap and exports no deallocator.

#![allow(unsafe_code)]

use crate::{
    error::{LighterError, Result},
    types::{ApiKeyResponse, SignResult},
};
use libloading::Library;
use std::{
    ffi::{c_char, c_int, CStr, CString},
    path::Path,
};

#[repr(C)]
struct RawApiKeyResponse {
    private_key: *mut c_char,
    public_key: *mut c_char,
    err: *mut c_char,
}

#[repr(C)]
struct RawStrOrErr {
    value: *mut c_char,
    err: *mut c_char,
}

type GenerateApiKeyFn = unsafe extern "C" fn(*const c_char) -> RawApiKeyResponse;
type CreateClientFn =
    unsafe extern "C" fn(*const c_char, *const c_char, c_int, c_int, i64) -> *mut c_char;
type CheckClientFn = unsafe extern "C" fn(*const c_char, i64) -> *mut c_char;
type SwitchApiKeyFn = unsafe extern "C" fn(c_int) -> *mut c_char;
type SignCreateOrderFn = unsafe extern "C" fn(
    c_int, // market_index
    i64,   // client_order_index
    i64,   // base_amount
    c_int, // price
    c_int, // is_ask
    c_int, // order_type
    c_int, // time_in_force
    c_int, // reduce_only
    c_int, // trigger_price
    i64,   // order_expiry
    i64,   // nonce
) -> RawStrOrErr;
type SignCancelOrderFn = unsafe extern "C" fn(c_int, i64, i64) -> RawStrOrErr;
type SignModifyOrderFn = unsafe extern "C" fn(c_int, i64, i64, i64, i64, i64) -> RawStrOrErr;
type SignCancelAllOrdersFn = unsafe extern "C" fn(c_int, i64, i64) -> RawStrOrErr;
type SignWithdrawFn = unsafe extern "C" fn(i64, i64) -> RawStrOrErr;
type SignTransferFn = unsafe extern "C" fn(i64, i64, i64, *const c_char, i64) -> RawStrOrErr;
type SignCreateSubAccountFn = unsafe extern "C" fn(i64) -> RawStrOrErr;
type SignChangePubKeyFn = unsafe extern "C" fn(*const c_char, i64) -> RawStrOrErr;
type SignUpdateLeverageFn = unsafe extern "C" fn(c_int, i64, c_int, i64) -> RawStrOrErr;
type SignCreatePublicPoolFn = unsafe extern "C" fn(i64, i64, i64, i64) -> RawStrOrErr;
type SignUpdatePublicPoolFn = unsafe extern "C" fn(c_int, i64, i64, i64, i64) -> RawStrOrErr;
type SignSharesFn = unsafe extern "C" fn(c_int, i64, i64) -> RawStrOrErr;
type CreateAuthTokenFn = unsafe extern "C" fn(i64) -> RawStrOrErr;

/// Copy a C string owned by the library. Null and empty map to `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn copy_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let s = CStr::from_ptr(ptr).to_string_lossy().into_owned();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn c_string(name: &str, value: &str) -> std::result::Result<CString, String> {
    CString::new(value).map_err(|_| format!("{} contains an interior NUL byte", name))
}

impl RawStrOrErr {
    /// # Safety
    /// Both pointers must be null or NUL-terminated strings.
    unsafe fn into_sign_result(self) -> SignResult {
        SignResult {
            signature: copy_c_str(self.value),
            error: copy_c_str(self.err),
        }
    }
}

/// Resolve `name` in `lib` and copy out the function pointer.
///
/// # Safety
/// `T` must match the exported function's real signature.
unsafe fn symbol<T: Copy>(lib: &Library, name: &'static str) -> Result<T> {
    let sym = lib
        .get::<T>(name.as_bytes())
        .map_err(|source| LighterError::MissingSymbol { name, source })?;
    Ok(*sym)
}

/// A loaded signer library with every export resolved.
///
/// The function pointers stay valid for as long as `_lib` is alive, which is
/// the lifetime of this struct.
pub(crate) struct NativeLibrary {
    generate_api_key: GenerateApiKeyFn,
    create_client: CreateClientFn,
    check_client: CheckClientFn,
    switch_api_key: SwitchApiKeyFn,
    sign_create_order: SignCreateOrderFn,
    sign_cancel_order: SignCancelOrderFn,
    sign_modify_order: SignModifyOrderFn,
    sign_cancel_all_orders: SignCancelAllOrdersFn,
    sign_withdraw: SignWithdrawFn,
    sign_transfer: SignTransferFn,
    sign_create_sub_account: SignCreateSubAccountFn,
    sign_change_pub_key: SignChangePubKeyFn,
    sign_update_leverage: SignUpdateLeverageFn,
    sign_create_public_pool: SignCreatePublicPoolFn,
    sign_update_public_pool: SignUpdatePublicPoolFn,
    sign_mint_shares: SignSharesFn,
    sign_burn_shares: SignSharesFn,
    create_auth_token: CreateAuthTokenFn,
    _lib: Library,
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary").finish_non_exhaustive()
    }
}

impl NativeLibrary {
    /// Load the library at `path` and bind all exports
    pub(crate) fn open(path: &Path) -> Result<Self> {
        // SAFETY: loading runs the library's initializers; the signer binaries
        // are trusted artifacts shipped next to the SDK.
        let lib = unsafe { Library::new(path) }.map_err(|source| LighterError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: the types above mirror the exported C signatures.
        unsafe {
            Ok(Self {
                generate_api_key: symbol(&lib, "GenerateAPIKey")?,
                create_client: symbol(&lib, "CreateClient")?,
                check_client: symbol(&lib, "CheckClient")?,
                switch_api_key: symbol(&lib, "SwitchAPIKey")?,
                sign_create_order: symbol(&lib, "SignCreateOrder")?,
                sign_cancel_order: symbol(&lib, "SignCancelOrder")?,
                sign_modify_order: symbol(&lib, "SignModifyOrder")?,
                sign_cancel_all_orders: symbol(&lib, "SignCancelAllOrders")?,
                sign_withdraw: symbol(&lib, "SignWithdraw")?,
                sign_transfer: symbol(&lib, "SignTransfer")?,
                sign_create_sub_account: symbol(&lib, "SignCreateSubAccount")?,
                sign_change_pub_key: symbol(&lib, "SignChangePubKey")?,
                sign_update_leverage: symbol(&lib, "SignUpdateLeverage")?,
                sign_create_public_pool: symbol(&lib, "SignCreatePublicPool")?,
                sign_update_public_pool: symbol(&lib, "SignUpdatePublicPool")?,
                sign_mint_shares: symbol(&lib, "SignMintShares")?,
                sign_burn_shares: symbol(&lib, "SignBurnShares")?,
                create_auth_token: symbol(&lib, "CreateAuthToken")?,
                _lib: lib,
            })
        }
    }

    pub(crate) fn generate_api_key(&self, seed: &str) -> ApiKeyResponse {
        let seed = match c_string("seed", seed) {
            Ok(seed) => seed,
            Err(e) => return ApiKeyResponse::from_error(e),
        };
        // SAFETY: `seed` outlives the call; the returned pointers are C strings.
        unsafe {
            let raw = (self.generate_api_key)(seed.as_ptr());
            ApiKeyResponse {
                private_key: copy_c_str(raw.private_key),
                public_key: copy_c_str(raw.public_key),
                error: copy_c_str(raw.err),
            }
        }
    }

    pub(crate) fn create_client(
        &self,
        url: &str,
        private_key: &str,
        chain_id: i32,
        api_key_index: i32,
        account_index: i64,
    ) -> Option<String> {
        let url = c_string("url", url);
        let private_key = c_string("private key", private_key);
        let (url, private_key) = match (url, private_key) {
            (Ok(url), Ok(key)) => (url, key),
            (Err(e), _) | (_, Err(e)) => return Some(e),
        };
        // SAFETY: both strings outlive the call.
        unsafe {
            copy_c_str((self.create_client)(
                url.as_ptr(),
                private_key.as_ptr(),
                chain_id,
                api_key_index,
                account_index,
            ))
        }
    }

    pub(crate) fn check_client(&self, api_key: &str, account_index: i64) -> Option<String> {
        let api_key = match c_string("api key", api_key) {
            Ok(key) => key,
            Err(e) => return Some(e),
        };
        // SAFETY: `api_key` outlives the call.
        unsafe { copy_c_str((self.check_client)(api_key.as_ptr(), account_index)) }
    }

    pub(crate) fn switch_api_key(&self, api_key_index: i32) -> Option<String> {
        // SAFETY: scalar arguments only.
        unsafe { copy_c_str((self.switch_api_key)(api_key_index)) }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn sign_create_order(
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
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_create_order)(
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
            .into_sign_result()
        }
    }

    pub(crate) fn sign_cancel_order(
        &self,
        market_index: i32,
        order_index: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe { (self.sign_cancel_order)(market_index, order_index, nonce).into_sign_result() }
    }

    pub(crate) fn sign_modify_order(
        &self,
        market_index: i32,
        order_index: i64,
        base_amount: i64,
        price: i64,
        trigger_price: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_modify_order)(
                market_index,
                order_index,
                base_amount,
                price,
                trigger_price,
                nonce,
            )
            .into_sign_result()
        }
    }

    pub(crate) fn sign_cancel_all_orders(
        &self,
        time_in_force: i32,
        time: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe { (self.sign_cancel_all_orders)(time_in_force, time, nonce).into_sign_result() }
    }

    pub(crate) fn sign_withdraw(&self, amount: i64, nonce: i64) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe { (self.sign_withdraw)(amount, nonce).into_sign_result() }
    }

    pub(crate) fn sign_transfer(
        &self,
        to_account_index: i64,
        amount: i64,
        fee: i64,
        memo: &str,
        nonce: i64,
    ) -> SignResult {
        let memo = match c_string("memo", memo) {
            Ok(memo) => memo,
            Err(e) => return SignResult::err(e),
        };
        // SAFETY: `memo` outlives the call.
        unsafe {
            (self.sign_transfer)(to_account_index, amount, fee, memo.as_ptr(), nonce)
                .into_sign_result()
        }
    }

    pub(crate) fn sign_create_sub_account(&self, nonce: i64) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe { (self.sign_create_sub_account)(nonce).into_sign_result() }
    }

    pub(crate) fn sign_change_pub_key(&self, new_pubkey: &str, nonce: i64) -> SignResult {
        let new_pubkey = match c_string("public key", new_pubkey) {
            Ok(key) => key,
            Err(e) => return SignResult::err(e),
        };
        // SAFETY: `new_pubkey` outlives the call.
        unsafe { (self.sign_change_pub_key)(new_pubkey.as_ptr(), nonce).into_sign_result() }
    }

    pub(crate) fn sign_update_leverage(
        &self,
        market_index: i32,
        fraction: i64,
        margin_mode: i32,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_update_leverage)(market_index, fraction, margin_mode, nonce)
                .into_sign_result()
        }
    }

    pub(crate) fn sign_create_public_pool(
        &self,
        operator_fee: i64,
        initial_total_shares: i64,
        min_operator_share_rate: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_create_public_pool)(
                operator_fee,
                initial_total_shares,
                min_operator_share_rate,
                nonce,
            )
            .into_sign_result()
        }
    }

    pub(crate) fn sign_update_public_pool(
        &self,
        public_pool_index: i32,
        operator_fee: i64,
        min_operator_share_rate: i64,
        operator_share_rate_max: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_update_public_pool)(
                public_pool_index,
                operator_fee,
                min_operator_share_rate,
                operator_share_rate_max,
                nonce,
            )
            .into_sign_result()
        }
    }

    pub(crate) fn sign_mint_shares(
        &self,
        public_pool_index: i32,
        share_amount: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_mint_shares)(public_pool_index, share_amount, nonce).into_sign_result()
        }
    }

    pub(crate) fn sign_burn_shares(
        &self,
        public_pool_index: i32,
        share_amount: i64,
        nonce: i64,
    ) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe {
            (self.sign_burn_shares)(public_pool_index, share_amount, nonce).into_sign_result()
        }
    }

    pub(crate) fn create_auth_token(&self, deadline: i64) -> SignResult {
        // SAFETY: scalar arguments only.
        unsafe { (self.create_auth_token)(deadline).into_sign_result() }
    }
}
