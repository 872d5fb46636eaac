//! Search error types

use thiserror::Error;

/// Errors raised while talking to a cloud provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{operation} failed: {message}")]
    RemoteCall {
        operation: &'static str,
        message: String,
    },
}

impl CloudError {
    pub fn remote(operation: &'static str, message: impl Into<String>) -> Self {
        Self::RemoteCall {
            operation,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
