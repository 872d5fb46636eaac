//! Fan-out search across accounts and regions
//!
//! Accounts are visited in stored order, and each account's regions in
//! stored order. Pairs are processed one at a time. A pair whose clients
//! cannot be built is skipped; remote failures inside a pair only empty
//! that pair's result.

use crate::criteria::{MatchPolicy, SearchCriteria, SearchOptions};
use crate::instance::find_instances;
use crate::principal::find_principal;
use crate::provider::{ClientContext, CredentialResolver};
use crate::report::Reporter;
use awsfind_config::AccountSet;

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    /// At least one match was reported
    Found,
    /// Every pair was visited without a match
    #[default]
    Exhausted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub outcome: SearchOutcome,
    /// Pairs reached, including skipped ones
    pub pairs_visited: usize,
    /// Pairs whose clients could not be built
    pub pairs_skipped: usize,
    pub matches: usize,
}

impl SearchSummary {
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }
}

/// Drives the matchers over every (account, region) pair
pub struct Searcher<'a> {
    resolver: &'a dyn CredentialResolver,
    options: SearchOptions,
}

impl<'a> Searcher<'a> {
    pub fn new(resolver: &'a dyn CredentialResolver, options: SearchOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search every pair, streaming matches to `reporter`
    ///
    /// Under [`MatchPolicy::FirstMatch`] this returns right after the first
    /// match is reported and no further pair is visited.
    pub async fn search(
        &self,
        accounts: &AccountSet,
        criteria: &SearchCriteria,
        reporter: &mut dyn Reporter,
    ) -> SearchSummary {
        let mut summary = SearchSummary::default();

        for account in accounts {
            for region in &account.regions {
                summary.pairs_visited += 1;
                tracing::debug!(account = %account.name, region = %region, "Searching {}", criteria);

                let ctx = match self.resolver.resolve(account, region).await {
                    Ok(ctx) => ctx,
                    Err(e) => {
                        tracing::warn!(
                            "Unable to load SDK config for account {}, region {}: {}",
                            account.name,
                            region,
                            e
                        );
                        summary.pairs_skipped += 1;
                        continue;
                    }
                };

                let stop = match criteria {
                    SearchCriteria::AccessKeyId(key) => {
                        self.report_principal(&ctx, key, reporter, &mut summary)
                            .await
                    }
                    _ => {
                        self.report_instances(&ctx, criteria, reporter, &mut summary)
                            .await
                    }
                };

                if stop {
                    tracing::debug!("Stopping at first match");
                    summary.outcome = SearchOutcome::Found;
                    return summary;
                }
            }
        }

        if summary.matches > 0 {
            summary.outcome = SearchOutcome::Found;
        }
        summary
    }

    /// Returns true when the search must stop
    async fn report_instances(
        &self,
        ctx: &ClientContext,
        criteria: &SearchCriteria,
        reporter: &mut dyn Reporter,
        summary: &mut SearchSummary,
    ) -> bool {
        let found = find_instances(ctx, criteria, &self.options).await;
        if found.is_empty() {
            return false;
        }

        reporter.instances_found(&ctx.account, &ctx.region);
        for instance in &found {
            reporter.instance(instance);
            summary.matches += 1;
            if self.options.policy == MatchPolicy::FirstMatch {
                return true;
            }
        }
        false
    }

    async fn report_principal(
        &self,
        ctx: &ClientContext,
        access_key_id: &str,
        reporter: &mut dyn Reporter,
        summary: &mut SearchSummary,
    ) -> bool {
        match find_principal(ctx, access_key_id, &self.options).await {
            Ok(Some(principal)) => {
                reporter.principal_found(&ctx.account, access_key_id, &principal);
                summary.matches += 1;
                self.options.policy == MatchPolicy::FirstMatch
            }
            Ok(None) => {
                reporter.principal_not_found(&ctx.account, access_key_id);
                false
            }
            // The account was never scanned, so nothing is reported for it
            Err(e) => {
                tracing::warn!(
                    "Error listing IAM users in account {}, region {}: {}",
                    ctx.account,
                    ctx.region,
                    e
                );
                false
            }
        }
    }
}
