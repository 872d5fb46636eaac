use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("Account {0} already exists")]
    DuplicateAccount(String),

    #[error("Account {0} not found")]
    AccountNotFound(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
