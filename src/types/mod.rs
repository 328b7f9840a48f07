//! Type definitions for the Lighter SDK

pub mod account;
pub mod api;
pub mod constants;
pub mod orders;
pub mod pool;

// Re-export commonly used types
pub use account::*;
pub use api::*;
pub use constants::*;
pub use orders::*;
pub use pool::*;
