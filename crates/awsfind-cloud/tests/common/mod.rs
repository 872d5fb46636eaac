#![allow(dead_code)]

use async_trait::async_trait;
use awsfind_cloud::{
    ClientContext, CloudError, ComputeApi, CredentialResolver, IdentityApi, Instance,
    InstanceQuery, Page, PrincipalSummary, Reservation, Result,
};
use awsfind_config::{AccountRecord, AccountSet};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Remote call recorded by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Resolve {
        account: String,
        region: String,
    },
    Describe {
        account: String,
        region: String,
        query: InstanceQuery,
        marker: Option<String>,
    },
    ListUsers {
        account: String,
        marker: Option<String>,
    },
    ListKeys {
        account: String,
        user: String,
        marker: Option<String>,
    },
}

type PairKey = (String, String);
type QueryKey = (String, String, InstanceQuery);

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    bad_pairs: HashSet<PairKey>,
    instances: HashMap<QueryKey, Vec<Vec<Instance>>>,
    failing_queries: HashSet<QueryKey>,
    users: HashMap<String, Vec<Vec<String>>>,
    failing_users: HashSet<String>,
    keys: HashMap<PairKey, Vec<Vec<String>>>,
    failing_keys: HashSet<PairKey>,
}

/// In-memory cloud that counts every call made against it
#[derive(Clone, Default)]
pub struct FakeCloud {
    state: Arc<Mutex<State>>,
}

impl FakeCloud {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state(self, f: impl FnOnce(&mut State)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    /// Client construction for this pair fails
    pub fn fail_region(self, account: &str, region: &str) -> Self {
        self.with_state(|s| {
            s.bad_pairs.insert((account.into(), region.into()));
        })
    }

    /// Single-page answer for `query`
    pub fn instances(
        self,
        account: &str,
        region: &str,
        query: InstanceQuery,
        instances: Vec<Instance>,
    ) -> Self {
        self.instance_pages(account, region, query, vec![instances])
    }

    pub fn instance_pages(
        self,
        account: &str,
        region: &str,
        query: InstanceQuery,
        pages: Vec<Vec<Instance>>,
    ) -> Self {
        self.with_state(|s| {
            s.instances
                .insert((account.into(), region.into(), query), pages);
        })
    }

    pub fn fail_query(self, account: &str, region: &str, query: InstanceQuery) -> Self {
        self.with_state(|s| {
            s.failing_queries
                .insert((account.into(), region.into(), query));
        })
    }

    pub fn users(self, account: &str, users: &[&str]) -> Self {
        self.user_pages(account, vec![users.to_vec()])
    }

    pub fn user_pages(self, account: &str, pages: Vec<Vec<&str>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|p| p.into_iter().map(String::from).collect())
            .collect();
        self.with_state(|s| {
            s.users.insert(account.into(), pages);
        })
    }

    pub fn fail_users(self, account: &str) -> Self {
        self.with_state(|s| {
            s.failing_users.insert(account.into());
        })
    }

    pub fn keys(self, account: &str, user: &str, keys: &[&str]) -> Self {
        self.key_pages(account, user, vec![keys.to_vec()])
    }

    pub fn key_pages(self, account: &str, user: &str, pages: Vec<Vec<&str>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|p| p.into_iter().map(String::from).collect())
            .collect();
        self.with_state(|s| {
            s.keys.insert((account.into(), user.into()), pages);
        })
    }

    pub fn fail_keys(self, account: &str, user: &str) -> Self {
        self.with_state(|s| {
            s.failing_keys.insert((account.into(), user.into()));
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// (account, region) pairs whose clients were built
    pub fn resolved(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Resolve { account, region } => Some((account, region)),
                _ => None,
            })
            .collect()
    }

    pub fn describe_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Describe { .. }))
            .collect()
    }

    pub fn list_user_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ListUsers { .. }))
            .count()
    }

    /// Users whose keys were listed, in call order
    pub fn key_listings(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::ListKeys { user, .. } => Some(user),
                _ => None,
            })
            .collect()
    }

    /// Build a context directly, bypassing the resolver bookkeeping
    pub fn context(&self, account: &str, region: &str) -> ClientContext {
        ClientContext::new(
            account,
            region,
            Box::new(FakeCompute {
                cloud: self.clone(),
                account: account.into(),
                region: region.into(),
            }),
            Box::new(FakeIdentity {
                cloud: self.clone(),
                account: account.into(),
            }),
        )
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

fn page_at<T: Clone>(pages: &[Vec<T>], marker: Option<&str>) -> Page<T> {
    let index: usize = marker.and_then(|m| m.parse().ok()).unwrap_or(0);
    let items = pages.get(index).cloned().unwrap_or_default();
    if index + 1 < pages.len() {
        Page::with_marker(items, (index + 1).to_string())
    } else {
        Page::last(items)
    }
}

pub fn principal(name: &str) -> PrincipalSummary {
    PrincipalSummary {
        user_name: name.to_string(),
        user_id: format!("AIDA{}", name.to_uppercase()),
        arn: format!("arn:aws:iam::123456789012:user/{}", name),
    }
}

#[async_trait]
impl CredentialResolver for FakeCloud {
    async fn resolve(&self, account: &AccountRecord, region: &str) -> Result<ClientContext> {
        self.record(Call::Resolve {
            account: account.name.clone(),
            region: region.to_string(),
        });

        let bad = self
            .state
            .lock()
            .unwrap()
            .bad_pairs
            .contains(&(account.name.clone(), region.to_string()));
        if bad {
            return Err(CloudError::InvalidConfig(format!(
                "invalid region {}",
                region
            )));
        }

        Ok(self.context(&account.name, region))
    }
}

struct FakeCompute {
    cloud: FakeCloud,
    account: String,
    region: String,
}

#[async_trait]
impl ComputeApi for FakeCompute {
    async fn describe_instances(
        &self,
        query: &InstanceQuery,
        marker: Option<&str>,
    ) -> Result<Page<Reservation>> {
        self.cloud.record(Call::Describe {
            account: self.account.clone(),
            region: self.region.clone(),
            query: query.clone(),
            marker: marker.map(String::from),
        });

        let key = (self.account.clone(), self.region.clone(), query.clone());
        let state = self.cloud.state.lock().unwrap();
        if state.failing_queries.contains(&key) {
            return Err(CloudError::remote(query.operation(), "UnauthorizedOperation"));
        }

        let pages = state.instances.get(&key).cloned().unwrap_or_default();
        let page = page_at(&pages, marker);
        let reservations = if page.items.is_empty() {
            Vec::new()
        } else {
            vec![Reservation {
                instances: page.items,
            }]
        };
        Ok(Page {
            items: reservations,
            next_marker: page.next_marker,
        })
    }
}

struct FakeIdentity {
    cloud: FakeCloud,
    account: String,
}

#[async_trait]
impl IdentityApi for FakeIdentity {
    async fn list_users(&self, marker: Option<&str>) -> Result<Page<PrincipalSummary>> {
        self.cloud.record(Call::ListUsers {
            account: self.account.clone(),
            marker: marker.map(String::from),
        });

        let state = self.cloud.state.lock().unwrap();
        if state.failing_users.contains(&self.account) {
            return Err(CloudError::remote("list users", "AccessDenied"));
        }

        let pages = state.users.get(&self.account).cloned().unwrap_or_default();
        let page = page_at(&pages, marker);
        Ok(Page {
            items: page.items.iter().map(|n| principal(n)).collect(),
            next_marker: page.next_marker,
        })
    }

    async fn list_access_keys(&self, user_name: &str, marker: Option<&str>) -> Result<Page<String>> {
        self.cloud.record(Call::ListKeys {
            account: self.account.clone(),
            user: user_name.to_string(),
            marker: marker.map(String::from),
        });

        let key = (self.account.clone(), user_name.to_string());
        let state = self.cloud.state.lock().unwrap();
        if state.failing_keys.contains(&key) {
            return Err(CloudError::remote("list access keys", "AccessDenied"));
        }

        let pages = state.keys.get(&key).cloned().unwrap_or_default();
        Ok(page_at(&pages, marker))
    }
}

pub fn account(name: &str, regions: &[&str]) -> AccountRecord {
    AccountRecord::new(
        name,
        format!("AKIA{}", name.to_uppercase()),
        "secret",
        regions.iter().map(|r| r.to_string()).collect(),
    )
}

pub fn account_set(accounts: Vec<AccountRecord>) -> AccountSet {
    AccountSet { accounts }
}

pub fn instance(id: &str, private_ip: &str, public_ip: Option<&str>) -> Instance {
    Instance {
        instance_id: Some(id.to_string()),
        instance_type: Some("t3.micro".to_string()),
        private_ip: Some(private_ip.to_string()),
        public_ip: public_ip.map(String::from),
    }
}
