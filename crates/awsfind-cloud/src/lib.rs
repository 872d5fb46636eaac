//! awsfind search core
//!
//! Fans a lookup out over every configured account and every region of
//! that account, looking for an EC2 instance (by id or IP address) or for
//! the IAM user owning an access key.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────────────────┐
//! │ AccountStore │──▶│                Searcher                  │
//! └──────────────┘   │  for account { for region { ... } }      │
//!                    └───────┬──────────────────────┬───────────┘
//!                            │ resolve              │ matches
//!                    ┌───────▼────────────┐  ┌──────▼──────┐
//!                    │ CredentialResolver │  │  Reporter   │
//!                    └───────┬────────────┘  └─────────────┘
//!                            │ ClientContext
//!              ┌─────────────┴─────────────┐
//!      ┌───────▼────────┐         ┌────────▼────────┐
//!      │ find_instances │         │ find_principal  │
//!      │  (ComputeApi)  │         │  (IdentityApi)  │
//!      └────────────────┘         └─────────────────┘
//! ```
//!
//! Provider SDKs live behind the traits in [`provider`]; see
//! `awsfind-cloud-aws` for the AWS implementation.

pub mod criteria;
pub mod error;
pub mod instance;
pub mod principal;
pub mod provider;
pub mod report;
pub mod search;

// Re-exports
pub use criteria::{MatchPolicy, SearchCriteria, SearchOptions};
pub use error::{CloudError, Result};
pub use instance::{InstanceSummary, find_instances};
pub use principal::find_principal;
pub use provider::{
    ClientContext, ComputeApi, CredentialResolver, IdentityApi, Instance, InstanceQuery, Page,
    PrincipalSummary, Reservation,
};
pub use report::{ConsoleReporter, Reporter};
pub use search::{SearchOutcome, SearchSummary, Searcher};
