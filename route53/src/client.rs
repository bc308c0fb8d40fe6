use async_trait::async_trait;
use aws_sdk_route53::types::ChangeInfo;
use aws_smithy_types::{DateTime, date_time::Format};

use zonectl_aws_core::config::AwsConfig;

use crate::{
    error::Route53Error,
    resource::{ChangeOutcome, CreatedHostedZone, HostedZonePage, HostedZoneRequest, NameserverChange},
};

pub mod change;
pub mod create;
pub mod list;

/// The Route53 operations the zonectl tools consume.
#[async_trait]
pub trait Route53Api: Send + Sync {
    async fn create_hosted_zone(&self, request: &HostedZoneRequest) -> Result<CreatedHostedZone, Route53Error>;

    /// Fetches one page of ListHostedZones, starting at `marker` (or the beginning).
    async fn list_hosted_zones_page(&self, marker: Option<String>) -> Result<HostedZonePage, Route53Error>;

    /// Submits a change batch holding exactly `change`.
    async fn change_resource_record_sets(&self, change: &NameserverChange) -> Result<ChangeOutcome, Route53Error>;
}

pub struct Route53Client {
    client: aws_sdk_route53::Client,
}

impl Route53Client {
    pub async fn new(config: &AwsConfig) -> Self {
        let sdk_config = config.sdk_config().await;
        Self::from_client(aws_sdk_route53::Client::new(&sdk_config))
    }

    pub fn from_client(client: aws_sdk_route53::Client) -> Self {
        Route53Client { client }
    }
}

#[async_trait]
impl Route53Api for Route53Client {
    async fn create_hosted_zone(&self, request: &HostedZoneRequest) -> Result<CreatedHostedZone, Route53Error> {
        self.do_create_hosted_zone(request).await
    }

    async fn list_hosted_zones_page(&self, marker: Option<String>) -> Result<HostedZonePage, Route53Error> {
        self.do_list_hosted_zones_page(marker).await
    }

    async fn change_resource_record_sets(&self, change: &NameserverChange) -> Result<ChangeOutcome, Route53Error> {
        self.do_change_resource_record_sets(change).await
    }
}

pub(crate) fn change_outcome(info: &ChangeInfo) -> ChangeOutcome {
    let submitted_at: Option<&DateTime> = info.submitted_at().into();
    ChangeOutcome {
        change_id:    info.id().to_string(),
        status:       info.status().as_str().to_string(),
        submitted_at: submitted_at.and_then(|t| t.fmt(Format::DateTime).ok()),
    }
}
