//! Constants used throughout the Lighter SDK

/// Order type codes understood by the signer
pub mod order_types {
    /// Limit order
    pub const LIMIT: i32 = 0;
    /// Market order
    pub const MARKET: i32 = 1;
    /// Stop loss (market) order
    pub const STOP_LOSS: i32 = 2;
    /// Stop loss limit order
    pub const STOP_LOSS_LIMIT: i32 = 3;
    /// Take profit (market) order
    pub const TAKE_PROFIT: i32 = 4;
    /// Take profit limit order
    pub const TAKE_PROFIT_LIMIT: i32 = 5;
    /// Time weighted average price order
    pub const TWAP: i32 = 6;
}

/// Time in force codes for single orders
pub mod time_in_force {
    /// Immediate or cancel
    pub const IMMEDIATE_OR_CANCEL: i32 = 0;
    /// Good till time
    pub const GOOD_TILL_TIME: i32 = 1;
    /// Post only
    pub const POST_ONLY: i32 = 2;
}

/// Time in force codes for cancel-all requests
pub mod cancel_all_tif {
    /// Cancel everything now
    pub const IMMEDIATE: i32 = 0;
    /// Schedule a cancel-all at the given time
    pub const SCHEDULED: i32 = 1;
    /// Abort a scheduled cancel-all
    pub const ABORT: i32 = 2;
}

/// Margin mode codes
pub mod margin_modes {
    /// Cross margin
    pub const CROSS: i32 = 0;
    /// Isolated margin
    pub const ISOLATED: i32 = 1;
}

/// Transaction type codes for submitting signed transactions
pub mod tx_types {
    /// Change API public key
    pub const CHANGE_PUB_KEY: i32 = 8;
    /// Create sub account
    pub const CREATE_SUB_ACCOUNT: i32 = 9;
    /// Create public pool
    pub const CREATE_PUBLIC_POOL: i32 = 10;
    /// Update public pool
    pub const UPDATE_PUBLIC_POOL: i32 = 11;
    /// Transfer
    pub const TRANSFER: i32 = 12;
    /// Withdraw
    pub const WITHDRAW: i32 = 13;
    /// Create order
    pub const CREATE_ORDER: i32 = 14;
    /// Cancel order
    pub const CANCEL_ORDER: i32 = 15;
    /// Cancel all orders
    pub const CANCEL_ALL_ORDERS: i32 = 16;
    /// Modify order
    pub const MODIFY_ORDER: i32 = 17;
    /// Mint pool shares
    pub const MINT_SHARES: i32 = 18;
    /// Burn pool shares
    pub const BURN_SHARES: i32 = 19;
    /// Update leverage
    pub const UPDATE_LEVERAGE: i32 = 20;
}

/// Chain IDs for different networks
pub mod chain_ids {
    /// Lighter mainnet chain ID
    pub const MAINNET_CHAIN_ID: i32 = 304;

    /// Lighter testnet chain ID
    pub const TESTNET_CHAIN_ID: i32 = 300;
}

/// Default API endpoints
pub mod endpoints {
    /// Lighter mainnet API URL
    pub const MAINNET_API_URL: &str = "https://mainnet.zklighter.elliot.ai";

    /// Lighter testnet API URL
    pub const TESTNET_API_URL: &str = "https://testnet.zklighter.elliot.ai";

    /// Next nonce path
    pub const NEXT_NONCE_PATH: &str = "/api/v1/nextNonce";

    /// Send transaction path
    pub const SEND_TX_PATH: &str = "/api/v1/sendTx";
}

/// Trigger price meaning "no trigger"
pub const NIL_TRIGGER_PRICE: i32 = 0;

/// Order expiry sentinel asking the signer for its 28 day default
pub const DEFAULT_28_DAY_ORDER_EXPIRY: i64 = -1;

/// Order expiry used for immediate-or-cancel orders
pub const DEFAULT_IOC_EXPIRY: i64 = 0;

/// Auth token expiry sentinel asking the signer for its 10 minute default
pub const DEFAULT_10_MIN_AUTH_EXPIRY: i64 = -1;

/// Number of USDC base units per whole USDC
pub const USDC_TICKER_SCALE: i64 = 1_000_000;

/// Lifetime of an auth token when no deadline is given, in seconds
pub const DEFAULT_AUTH_TOKEN_TTL_SECS: i64 = 600;
