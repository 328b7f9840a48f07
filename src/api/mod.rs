//! REST API access for submitting signed transactions

pub mod client;
pub mod utils;

pub use client::ApiClient;
