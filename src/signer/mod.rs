//! Native signer loading and bindings for Lighter

pub mod config;
mod ffi;
pub mod platform;
pub mod signer;
pub mod utils;

pub use config::{Config, Network};
pub use platform::PlatformInfo;
pub use signer::{LighterSigner, SignerBackend};
pub use utils::*;
