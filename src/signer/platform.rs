//! Selection of the prebuilt signer binary for the running platform

use crate::error::{LighterError, Result};
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment variable overriding the signer library location
pub const SIGNER_PATH_ENV: &str = "LIGHTER_SIGNER_PATH";

/// Directory holding the prebuilt signer binaries shipped with the crate
pub fn default_signers_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("signers")
}

/// Platform details and the signer binary chosen for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Operating system (as in `std::env::consts::OS`)
    pub os: &'static str,
    /// CPU architecture (as in `std::env::consts::ARCH`)
    pub arch: &'static str,
    /// File name of the signer binary
    pub binary_name: &'static str,
    /// Full path of the signer binary
    pub library_path: PathBuf,
}

/// Name of the signer binary built for `os`/`arch`, if one exists
pub fn binary_name_for(os: &str, arch: &str) -> Option<&'static str> {
    match (os, arch) {
        ("macos", "aarch64") => Some("signer-arm64.dylib"),
        ("linux", "x86_64") => Some("signer-amd64.so"),
        _ => None,
    }
}

/// Detect the running platform and locate its signer binary in `signers_dir`
pub fn detect_platform(signers_dir: &Path) -> Result<PlatformInfo> {
    detect_platform_for(env::consts::OS, env::consts::ARCH, signers_dir)
}

fn detect_platform_for(
    os: &'static str,
    arch: &'static str,
    signers_dir: &Path,
) -> Result<PlatformInfo> {
    let binary_name =
        binary_name_for(os, arch).ok_or_else(|| LighterError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        })?;

    Ok(PlatformInfo {
        os,
        arch,
        binary_name,
        library_path: signers_dir.join(binary_name),
    })
}

/// Resolve the signer library path.
///
/// Order: `explicit`, then `LIGHTER_SIGNER_PATH`, then the platform binary in
/// the default signers directory.
pub fn resolve_library_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_with(explicit, env::var_os(SIGNER_PATH_ENV))
}

fn resolve_with(explicit: Option<&Path>, from_env: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = from_env.filter(|path| !path.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(detect_platform(&default_signers_dir())?.library_path)
}

/// Fail with `LibraryNotFound` unless `path` is an existing file
pub fn validate_binary_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LighterError::LibraryNotFound(path.to_path_buf()))
    }
}
