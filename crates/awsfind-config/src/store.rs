//! File-backed account store
//!
//! The whole YAML file is the store state. Every mutation loads it, applies
//! the change in memory and writes the full file back through a temporary
//! file and a rename, so a failed write never leaves a partial file behind.

use crate::error::Result;
use crate::model::{AccountRecord, AccountSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Account store backed by a single YAML file
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with an empty account set if it does not exist yet
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        self.save(&AccountSet::new())?;
        tracing::info!("Created empty account store at {}", self.path.display());
        Ok(())
    }

    /// Load the account set
    pub fn load(&self) -> Result<AccountSet> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AccountSet::new());
        }

        let set: AccountSet = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded {} accounts", set.len());
        Ok(set)
    }

    /// Overwrite the store with `set`
    pub fn save(&self, set: &AccountSet) -> Result<()> {
        let content = serde_yaml::to_string(set)?;
        let tmp = self.tmp_path();

        let written =
            write_private(&tmp, content.as_bytes()).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!("Saved {} accounts", set.len());
        Ok(())
    }

    /// Add an account and persist the result
    pub fn add(&self, record: AccountRecord) -> Result<()> {
        let mut set = self.load()?;
        let name = record.name.clone();
        set.add(record)?;
        self.save(&set)?;

        tracing::info!(account = %name, "Account added");
        Ok(())
    }

    /// Remove an account by name and persist the result
    pub fn remove(&self, name: &str) -> Result<AccountRecord> {
        let mut set = self.load()?;
        let removed = set.remove(name)?;
        self.save(&set)?;

        tracing::info!(account = %name, "Account removed");
        Ok(removed)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Write `data` to `path`, readable by the owner only
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
