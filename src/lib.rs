//! # Lighter Rust SDK
//!
//! A Rust SDK for signing Lighter DEX transactions.
//!
//! ## Features
//!
//! - **Native Signing**: Orders, transfers, leverage, pools and auth tokens are
//!   signed by the prebuilt Lighter signer library, loaded at runtime
//! - **Typed Parameters**: Parameter structs and enums for every signing call,
//!   with the defaults the signer expects
//! - **Submission**: Optional REST helpers for nonces and sending signed transactions
//! - **Error Handling**: Native error strings surface as typed errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lighter_rust_sdk::{CreateOrderParams, LighterClient, OrderType, TimeInForce, TxType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LighterClient::new(
//!         "https://testnet.zklighter.elliot.ai", // API URL
//!         "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef", // API private key
//!         0,                                     // API key index
//!         12345,                                 // account index
//!     )?;
//!     client.initialize()?;
//!     client.sync_nonce().await?;
//!
//!     // Sign a market buy
//!     let order = client.create_order(&CreateOrderParams::new(
//!         0,                              // market index
//!         1,                              // client order index
//!         100,                            // base amount
//!         50000,                          // price
//!         false,                          // is_ask
//!         OrderType::Market,
//!         TimeInForce::ImmediateOrCancel,
//!         client.next_nonce(),
//!     ))?;
//!
//!     let response = client.submit(TxType::CreateOrder, &order).await?;
//!     println!("Order sent: {:?}", response.tx_hash);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod signer;
pub mod types;

// Re-exports for convenience
pub use api::ApiClient;
pub use client::{LighterClient, NonceManager};
pub use error::{LighterError, Result};
pub use signer::{Config, LighterSigner, Network, SignerBackend};
pub use types::*;
