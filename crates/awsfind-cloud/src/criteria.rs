//! What to search for and how far to go

use crate::provider::InstanceQuery;

/// Search target, one per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    InstanceId(String),
    IpAddress(String),
    AccessKeyId(String),
}

impl SearchCriteria {
    /// Pick the criteria from optional CLI inputs
    ///
    /// An access key id takes priority over instance lookups. Returns `None`
    /// when nothing was supplied.
    pub fn from_inputs(
        instance_id: Option<&str>,
        ip_address: Option<&str>,
        access_key_id: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(String::from);

        if let Some(key) = non_empty(access_key_id) {
            return Some(Self::AccessKeyId(key));
        }
        if let Some(id) = non_empty(instance_id) {
            return Some(Self::InstanceId(id));
        }
        non_empty(ip_address).map(Self::IpAddress)
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::AccessKeyId(_))
    }

    /// Describe-instances queries needed for this criteria, in issue order
    pub fn instance_queries(&self) -> Vec<InstanceQuery> {
        match self {
            Self::InstanceId(id) => vec![InstanceQuery::ById(id.clone())],
            Self::IpAddress(ip) => vec![
                InstanceQuery::PrivateIp(ip.clone()),
                InstanceQuery::PublicIp(ip.clone()),
            ],
            Self::AccessKeyId(_) => Vec::new(),
        }
    }
}

impl std::fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstanceId(id) => write!(f, "instance {}", id),
            Self::IpAddress(ip) => write!(f, "IP address {}", ip),
            Self::AccessKeyId(key) => write!(f, "access key {}", key),
        }
    }
}

/// When the fan-out stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Stop everything after the first reported match
    FirstMatch,
    /// Visit every (account, region) pair
    ScanAll,
}

impl MatchPolicy {
    /// Instance lookups stop at the first hit, access-key lookups scan every account
    pub fn default_for(criteria: &SearchCriteria) -> Self {
        if criteria.is_identity() {
            Self::ScanAll
        } else {
            Self::FirstMatch
        }
    }
}

/// Immutable search settings, built once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub policy: MatchPolicy,
    /// Follow list markers instead of reading only the first page
    pub follow_pages: bool,
}

impl SearchOptions {
    pub fn for_criteria(criteria: &SearchCriteria) -> Self {
        Self {
            policy: MatchPolicy::default_for(criteria),
            follow_pages: false,
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_follow_pages(mut self, follow_pages: bool) -> Self {
        self.follow_pages = follow_pages;
        self
    }
}
