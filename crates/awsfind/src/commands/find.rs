use anyhow::Context;
use awsfind_cloud::{ConsoleReporter, MatchPolicy, SearchCriteria, SearchOptions, Searcher};
use awsfind_cloud_aws::AwsCredentialResolver;
use awsfind_config::AccountStore;

/// Raw `find` flags
pub struct FindRequest {
    pub instance_id: Option<String>,
    pub ip: Option<String>,
    pub iam: Option<String>,
    pub first_match: bool,
    pub scan_all: bool,
    pub all_pages: bool,
}

impl FindRequest {
    fn criteria(&self) -> anyhow::Result<SearchCriteria> {
        let criteria = SearchCriteria::from_inputs(
            self.instance_id.as_deref(),
            self.ip.as_deref(),
            self.iam.as_deref(),
        )
        .ok_or_else(|| {
            anyhow::anyhow!("Specify either --instance-id, --ip or --iam to perform search")
        })?;

        if criteria.is_identity() && (self.instance_id.is_some() || self.ip.is_some()) {
            tracing::warn!("--iam given, ignoring --instance-id/--ip");
        }
        Ok(criteria)
    }

    fn options(&self, criteria: &SearchCriteria) -> SearchOptions {
        let options = SearchOptions::for_criteria(criteria).with_follow_pages(self.all_pages);
        if self.first_match {
            options.with_policy(MatchPolicy::FirstMatch)
        } else if self.scan_all {
            options.with_policy(MatchPolicy::ScanAll)
        } else {
            options
        }
    }
}

pub async fn handle(store: &AccountStore, request: FindRequest) -> anyhow::Result<()> {
    let criteria = request.criteria()?;
    let options = request.options(&criteria);

    let accounts = store.load().context("Failed to read configuration")?;
    tracing::debug!(
        "Searching {} across {} accounts ({:?})",
        criteria,
        accounts.len(),
        options
    );

    let resolver = AwsCredentialResolver::new();
    let mut reporter = ConsoleReporter::stdout();
    let summary = Searcher::new(&resolver, options)
        .search(&accounts, &criteria, &mut reporter)
        .await;

    tracing::info!(
        "Search finished: {:?}, {} pairs visited, {} skipped, {} matches",
        summary.outcome,
        summary.pairs_visited,
        summary.pairs_skipped,
        summary.matches
    );
    Ok(())
}
