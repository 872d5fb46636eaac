//! Instance matching
//!
//! An instance id needs one describe query. An IP address needs two, since
//! private and public addresses are indexed under different filter keys;
//! both are always issued and their results concatenated as returned.

use crate::criteria::{SearchCriteria, SearchOptions};
use crate::error::Result;
use crate::provider::{ClientContext, Instance, InstanceQuery, Reservation};

/// A matched instance, ready to be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSummary {
    pub instance_id: String,
    pub instance_type: String,
    pub region: String,
    pub private_ip: String,
    pub public_ip: Option<String>,
}

impl InstanceSummary {
    /// `None` when the provider returned an instance without an id
    pub fn from_instance(instance: Instance, region: &str) -> Option<Self> {
        Some(Self {
            instance_id: instance.instance_id?,
            instance_type: instance.instance_type.unwrap_or_default(),
            region: region.to_string(),
            private_ip: instance.private_ip.unwrap_or_default(),
            public_ip: instance.public_ip,
        })
    }
}

/// Run every query `criteria` needs against `ctx` and collect the matches
///
/// A failed query is logged and contributes nothing; it never stops the
/// sibling query.
pub async fn find_instances(
    ctx: &ClientContext,
    criteria: &SearchCriteria,
    options: &SearchOptions,
) -> Vec<InstanceSummary> {
    let mut found = Vec::new();

    for query in criteria.instance_queries() {
        match describe(ctx, &query, options.follow_pages).await {
            Ok(reservations) => {
                tracing::debug!(
                    account = %ctx.account,
                    region = %ctx.region,
                    "{} {}: {} reservations",
                    query.operation(),
                    query.value(),
                    reservations.len()
                );
                found.extend(
                    reservations
                        .into_iter()
                        .flat_map(|r| r.instances)
                        .filter_map(|i| InstanceSummary::from_instance(i, &ctx.region)),
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Error in {} {} for account {}, region {}: {}",
                    query.operation(),
                    query.value(),
                    ctx.account,
                    ctx.region,
                    e
                );
            }
        }
    }

    found
}

/// Only the first page is read unless `follow_pages` is set
async fn describe(
    ctx: &ClientContext,
    query: &InstanceQuery,
    follow_pages: bool,
) -> Result<Vec<Reservation>> {
    let mut reservations = Vec::new();
    let mut marker: Option<String> = None;

    loop {
        let page = ctx
            .compute
            .describe_instances(query, marker.as_deref())
            .await?;
        reservations.extend(page.items);

        match page.next_marker {
            Some(next) if follow_pages => marker = Some(next),
            _ => break,
        }
    }

    Ok(reservations)
}
