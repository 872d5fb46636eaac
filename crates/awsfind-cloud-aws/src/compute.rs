//! EC2 describe-instances queries

use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::Filter;
use awsfind_cloud::{CloudError, ComputeApi, Instance, InstanceQuery, Page, Reservation, Result};

/// Region-scoped EC2 client
pub struct Ec2Compute {
    client: aws_sdk_ec2::Client,
}

impl Ec2Compute {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_ec2::Client::new(config),
        }
    }
}

#[async_trait]
impl ComputeApi for Ec2Compute {
    async fn describe_instances(
        &self,
        query: &InstanceQuery,
        marker: Option<&str>,
    ) -> Result<Page<Reservation>> {
        let request = self
            .client
            .describe_instances()
            .set_next_token(marker.map(String::from));

        let request = match query_filter(query) {
            Some(filter) => request.filters(filter),
            None => request.instance_ids(query.value()),
        };

        let output = request.send().await.map_err(|e| {
            CloudError::remote(query.operation(), DisplayErrorContext(&e).to_string())
        })?;

        Ok(Page {
            items: output
                .reservations
                .unwrap_or_default()
                .into_iter()
                .map(reservation_from_sdk)
                .collect(),
            next_marker: output.next_token,
        })
    }
}

/// Filter for IP queries, `None` for id lookups
fn query_filter(query: &InstanceQuery) -> Option<Filter> {
    query
        .filter_name()
        .map(|name| Filter::builder().name(name).values(query.value()).build())
}

fn reservation_from_sdk(reservation: aws_sdk_ec2::types::Reservation) -> Reservation {
    Reservation {
        instances: reservation
            .instances
            .unwrap_or_default()
            .into_iter()
            .map(instance_from_sdk)
            .collect(),
    }
}

fn instance_from_sdk(instance: aws_sdk_ec2::types::Instance) -> Instance {
    Instance {
        instance_id: instance.instance_id,
        instance_type: instance.instance_type.map(|t| t.as_str().to_string()),
        private_ip: instance.private_ip_address,
        public_ip: instance.public_ip_address,
    }
}
