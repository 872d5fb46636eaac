//! Remote collaborator traits
//!
//! The search core never talks to a cloud SDK directly. A
//! [`CredentialResolver`] turns one account and one region into a
//! [`ClientContext`], which carries the compute and identity APIs scoped to
//! that pair.

use crate::error::Result;
use async_trait::async_trait;
use awsfind_config::AccountRecord;

/// One page of a remote listing
///
/// `next_marker` restarts the listing at the following page; `None` means
/// the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_marker: None,
        }
    }

    pub fn with_marker(items: Vec<T>, marker: impl Into<String>) -> Self {
        Self {
            items,
            next_marker: Some(marker.into()),
        }
    }
}

/// A single describe-instances query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstanceQuery {
    /// Exact instance identifier
    ById(String),
    /// `private-ip-address` filter
    PrivateIp(String),
    /// `ip-address` filter (public IPv4)
    PublicIp(String),
}

impl InstanceQuery {
    /// Operation label used in logs
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ById(_) => "describe instance by id",
            Self::PrivateIp(_) => "describe instances by private IP",
            Self::PublicIp(_) => "describe instances by public IP",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::ById(v) | Self::PrivateIp(v) | Self::PublicIp(v) => v,
        }
    }

    /// Provider filter key, `None` for id lookups
    pub fn filter_name(&self) -> Option<&'static str> {
        match self {
            Self::ById(_) => None,
            Self::PrivateIp(_) => Some("private-ip-address"),
            Self::PublicIp(_) => Some("ip-address"),
        }
    }
}

/// Instance as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub instance_id: Option<String>,
    pub instance_type: Option<String>,
    pub private_ip: Option<String>,
    pub public_ip: Option<String>,
}

/// Group of instances launched together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    pub instances: Vec<Instance>,
}

/// Identity principal (IAM user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalSummary {
    pub user_name: String,
    pub user_id: String,
    pub arn: String,
}

/// Region-scoped compute queries
#[async_trait]
pub trait ComputeApi: Send + Sync {
    async fn describe_instances(
        &self,
        query: &InstanceQuery,
        marker: Option<&str>,
    ) -> Result<Page<Reservation>>;
}

/// Identity queries
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// List identity principals
    async fn list_users(&self, marker: Option<&str>) -> Result<Page<PrincipalSummary>>;

    /// List the access key ids of one principal
    async fn list_access_keys(&self, user_name: &str, marker: Option<&str>)
    -> Result<Page<String>>;
}

/// Clients bound to one (account, region) pair
pub struct ClientContext {
    pub account: String,
    pub region: String,
    pub compute: Box<dyn ComputeApi>,
    pub identity: Box<dyn IdentityApi>,
}

impl ClientContext {
    pub fn new(
        account: impl Into<String>,
        region: impl Into<String>,
        compute: Box<dyn ComputeApi>,
        identity: Box<dyn IdentityApi>,
    ) -> Self {
        Self {
            account: account.into(),
            region: region.into(),
            compute,
            identity,
        }
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("account", &self.account)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// Builds statically-credentialed clients for one account and region
///
/// Implementations must not cache contexts: every call yields fresh clients.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve(&self, account: &AccountRecord, region: &str) -> Result<ClientContext>;
}
