//! Persistence of the provider API key.
//!
//! A single credential string stored as JSON in the user's config
//! directory. Errors on this path are logged and degraded — a missing or
//! unreadable file simply means "no key saved" — so UIs never have to
//! handle storage failures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const APP_DIR: &str = "flightdeck";
const API_KEY_FILE: &str = "api_key.json";

/// On-disk shape of the stored credential.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredApiKey {
    /// The provider access key.
    pub api_key: String,
}

/// Get the config directory for the application, creating it if needed.
fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join(APP_DIR);
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn key_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(API_KEY_FILE))
}

fn read_key_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<StoredApiKey>(&content) {
            Ok(stored) if !stored.api_key.is_empty() => Some(stored.api_key),
            Ok(_) => None,
            Err(e) => {
                warn!("failed to parse {}: {e}", path.display());
                None
            }
        },
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            None
        }
    }
}

fn write_key_file(path: &Path, api_key: &str) {
    let stored = StoredApiKey {
        api_key: api_key.to_string(),
    };
    match serde_json::to_string_pretty(&stored) {
        Ok(json) => {
            if let Err(e) = fs::write(path, &json) {
                warn!("failed to write {}: {e}", path.display());
            } else {
                info!("saved API key to {}", path.display());
            }
        }
        Err(e) => warn!("failed to serialize API key: {e}"),
    }
}

/// Load the saved API key, if any.
pub fn load_api_key() -> Option<String> {
    read_key_file(&key_path()?)
}

/// Save the API key, or remove the stored one when `api_key` is empty.
pub fn save_api_key(api_key: &str) {
    if api_key.is_empty() {
        clear_api_key();
        return;
    }
    let Some(path) = key_path() else {
        warn!("could not determine config directory");
        return;
    };
    write_key_file(&path, api_key);
}

/// Remove the stored API key.
pub fn clear_api_key() {
    let Some(path) = key_path() else {
        warn!("could not determine config directory");
        return;
    };
    if path.exists() {
        if let Err(e) = fs::remove_file(&path) {
            warn!("failed to remove {}: {e}", path.display());
        } else {
            info!("cleared API key at {}", path.display());
        }
    }
}
