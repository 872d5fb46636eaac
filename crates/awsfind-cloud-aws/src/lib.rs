//! AWS backend for awsfind
//!
//! Implements the search core's collaborator traits on top of the AWS SDK:
//!
//! - [`AwsCredentialResolver`]: static access key pair + region → clients
//! - [`Ec2Compute`]: `DescribeInstances` by id or by IP filter
//! - [`IamIdentity`]: `ListUsers` / `ListAccessKeys`
//!
//! # Example
//!
//! ```ignore
//! use awsfind_cloud::{ConsoleReporter, SearchCriteria, SearchOptions, Searcher};
//! use awsfind_cloud_aws::AwsCredentialResolver;
//!
//! let criteria = SearchCriteria::IpAddress("10.0.0.5".into());
//! let resolver = AwsCredentialResolver::new();
//! let searcher = Searcher::new(&resolver, SearchOptions::for_criteria(&criteria));
//! let summary = searcher
//!     .search(&accounts, &criteria, &mut ConsoleReporter::stdout())
//!     .await;
//! ```

pub mod compute;
pub mod identity;
pub mod resolver;

pub use compute::Ec2Compute;
pub use identity::IamIdentity;
pub use resolver::{AwsCredentialResolver, validate_region};
