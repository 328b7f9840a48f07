//! Error types for the Lighter SDK

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lighter operations
pub type Result<T> = std::result::Result<T, LighterError>;

/// Main error type for Lighter SDK operations
#[derive(Error, Debug)]
pub enum LighterError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter errors
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No signer binary is shipped for this OS/architecture pair
    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform {
        /// Operating system reported by the build target
        os: String,
        /// CPU architecture reported by the build target
        arch: String,
    },

    /// Signer binary is missing on disk
    #[error("Signer binary not found at: {}", .0.display())]
    LibraryNotFound(PathBuf),

    /// The dynamic loader rejected the signer binary
    #[error("Failed to load signer library at {}: {source}", .path.display())]
    LibraryLoad {
        /// Path that was handed to the loader
        path: PathBuf,
        /// Loader error
        #[source]
        source: libloading::Error,
    },

    /// An exported function is missing from the signer binary
    #[error("Signer library does not export {name}: {source}")]
    MissingSymbol {
        /// Symbol name
        name: &'static str,
        /// Loader error
        #[source]
        source: libloading::Error,
    },

    /// Error text returned by the native signer for a signing call
    #[error("{operation}: {message}")]
    Signer {
        /// Human readable operation, e.g. "Failed to sign order"
        operation: String,
        /// Error returned by the native library
        message: String,
    },

    /// Client lifecycle errors (initialize, check, key switching)
    #[error("{0}")]
    Client(String),

    /// API errors returned by the Lighter REST API
    #[error("API error {code}: {message}")]
    Api {
        /// Error code from the API
        code: i32,
        /// Error message from the API
        message: String,
    },
}

impl LighterError {
    /// Create a new API error
    pub fn api(code: i32, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a new signer error
    pub fn signer(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Signer {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new client error
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client(message.into())
    }
}
