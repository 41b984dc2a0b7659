//! Platform-specific application data directory resolution.
//!
//! Configuration lives in the conventional per-user data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\textwatch\textwatch`
//! - **macOS**: `~/Library/Application Support/textwatch/textwatch`
//! - **Linux**: `~/.local/share/textwatch/textwatch`
//!
//! The directory is created lazily the first time a path inside it is
//! requested.

use anyhow::Result;
use serde::Deserialize;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Vendor directory name, taken from `[package.metadata] owner`.
pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
/// Application directory name, taken from the package name.
pub const APP_NAME: &str = APP_METADATA_NAME;

#[derive(Deserialize, Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the base directory from the environment of the current process.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Returns the full path of `file_name`, creating the base directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
