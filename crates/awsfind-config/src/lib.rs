//! Account store for awsfind
//!
//! Accounts live in a YAML file (`aws-accounts.yaml` by default):
//!
//! ```yaml
//! accounts:
//!   - name: prod
//!     access_key: AKIA...
//!     secret_key: ...
//!     regions:
//!       - us-east-1
//!       - ap-northeast-1
//! ```

pub mod error;
pub mod model;
pub mod store;

pub use error::*;
pub use model::{AccountRecord, AccountSet, parse_regions};
pub use store::AccountStore;

use std::path::PathBuf;

/// Default store file name
pub const DEFAULT_CONFIG_FILE: &str = "aws-accounts.yaml";

/// Environment variable that points directly at the store file
pub const CONFIG_ENV: &str = "AWSFIND_CONFIG";

/// Per-user config directory (`~/.config/awsfind`)
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("awsfind");
    Ok(config_dir)
}

/// Locate the account store file
///
/// Lookup order:
/// 1. `explicit` (the `--config` flag)
/// 2. `AWSFIND_CONFIG` environment variable
/// 3. `./aws-accounts.yaml` if it exists
/// 4. `~/.config/awsfind/aws-accounts.yaml` if it exists
/// 5. `./aws-accounts.yaml` (created on first use)
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let local = std::env::current_dir()?.join(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }

    if let Ok(config_dir) = get_config_dir() {
        let global = config_dir.join(DEFAULT_CONFIG_FILE);
        if global.exists() {
            return Ok(global);
        }
    }

    Ok(local)
}
