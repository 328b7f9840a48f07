//! High-level client combining the signer, API access and nonce tracking

pub mod client;
pub mod nonce;

pub use client::LighterClient;
pub use nonce::NonceManager;
