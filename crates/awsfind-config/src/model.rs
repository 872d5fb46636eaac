//! Account records as persisted in the store

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// A named credential pair plus the regions to search with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub name: String,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default)]
    pub regions: Vec<String>,
}

impl AccountRecord {
    pub fn new(
        name: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        regions: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            regions,
        }
    }

    /// Rejects records that could never authenticate
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidAccount("name is empty".to_string()));
        }
        if self.access_key.is_empty() {
            return Err(ConfigError::InvalidAccount(format!(
                "{}: access key is empty",
                self.name
            )));
        }
        if self.secret_key.is_empty() {
            return Err(ConfigError::InvalidAccount(format!(
                "{}: secret key is empty",
                self.name
            )));
        }
        Ok(())
    }

    /// Access key with everything but the last four characters hidden
    pub fn masked_access_key(&self) -> String {
        let visible = self.access_key.len().saturating_sub(4);
        match self.access_key.get(visible..) {
            Some(tail) if visible > 0 => format!("{}{}", "*".repeat(visible), tail),
            _ => "*".repeat(self.access_key.len()),
        }
    }
}

/// Ordered set of accounts, the entire state of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSet {
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
}

impl AccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccountRecord> {
        self.accounts.iter()
    }

    pub fn get(&self, name: &str) -> Option<&AccountRecord> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append an account, keeping names unique
    pub fn add(&mut self, record: AccountRecord) -> Result<()> {
        record.validate()?;
        if self.contains(&record.name) {
            return Err(ConfigError::DuplicateAccount(record.name));
        }
        self.accounts.push(record);
        Ok(())
    }

    /// Remove an account by name, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Result<AccountRecord> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| ConfigError::AccountNotFound(name.to_string()))?;
        Ok(self.accounts.remove(index))
    }
}

impl<'a> IntoIterator for &'a AccountSet {
    type Item = &'a AccountRecord;
    type IntoIter = std::slice::Iter<'a, AccountRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

/// Split a comma-separated region list, dropping blanks
pub fn parse_regions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}
