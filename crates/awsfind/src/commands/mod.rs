pub mod add;
pub mod find;
pub mod list;
pub mod remove;

use anyhow::Context;
use awsfind_config::AccountStore;
use std::path::PathBuf;

/// Locate the account store and create it empty when missing
pub fn open_store(explicit: Option<PathBuf>) -> anyhow::Result<AccountStore> {
    let path = awsfind_config::resolve_config_path(explicit)?;
    tracing::debug!("Using account store {}", path.display());

    let store = AccountStore::new(path);
    store
        .ensure_exists()
        .with_context(|| format!("Error creating {}", store.path().display()))?;
    Ok(store)
}
