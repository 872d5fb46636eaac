//! IAM user and access-key listings

use async_trait::async_trait;
use aws_sdk_iam::error::DisplayErrorContext;
use awsfind_cloud::{CloudError, IdentityApi, Page, PrincipalSummary, Result};

/// IAM client
///
/// IAM is global, so the region only selects the endpoint partition.
pub struct IamIdentity {
    client: aws_sdk_iam::Client,
}

impl IamIdentity {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_iam::Client::new(config),
        }
    }
}

#[async_trait]
impl IdentityApi for IamIdentity {
    async fn list_users(&self, marker: Option<&str>) -> Result<Page<PrincipalSummary>> {
        let output = self
            .client
            .list_users()
            .set_marker(marker.map(String::from))
            .send()
            .await
            .map_err(|e| CloudError::remote("list users", DisplayErrorContext(&e).to_string()))?;

        let next_marker = next_marker(output.is_truncated, output.marker);
        Ok(Page {
            items: output.users.into_iter().map(principal_from_sdk).collect(),
            next_marker,
        })
    }

    async fn list_access_keys(&self, user_name: &str, marker: Option<&str>) -> Result<Page<String>> {
        let output = self
            .client
            .list_access_keys()
            .user_name(user_name)
            .set_marker(marker.map(String::from))
            .send()
            .await
            .map_err(|e| {
                CloudError::remote("list access keys", DisplayErrorContext(&e).to_string())
            })?;

        let next_marker = next_marker(output.is_truncated, output.marker);
        Ok(Page {
            items: output
                .access_key_metadata
                .into_iter()
                .filter_map(|k| k.access_key_id)
                .collect(),
            next_marker,
        })
    }
}

/// IAM may return a marker on the last page; only trust it when truncated
fn next_marker(is_truncated: bool, marker: Option<String>) -> Option<String> {
    if is_truncated { marker } else { None }
}

fn principal_from_sdk(user: aws_sdk_iam::types::User) -> PrincipalSummary {
    PrincipalSummary {
        user_name: user.user_name,
        user_id: user.user_id,
        arn: user.arn,
    }
}
