// Credentials file handling. The file is a JSON object:
//
//     { "username": "admin", "password": "secret" }

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// File name looked up in the home directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".zvm-rpo.json";

/// ZVM login credentials. Loaded once and never mutated.
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read and parse the credentials file at `path`.
pub fn load_credentials(path: &Path) -> Result<Credentials, ConfigError> {
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let creds: Credentials = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), user = %creds.username, "loaded credentials");
    Ok(creds)
}

/// `~/.zvm-rpo.json`, or `./.zvm-rpo.json` when no home directory is known.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(DEFAULT_CONFIG_FILE)
}
