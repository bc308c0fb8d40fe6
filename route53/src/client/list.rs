use aws_sdk_route53::operation::list_hosted_zones::ListHostedZonesOutput;

use crate::{
    error::Route53Error,
    resource::{HostedZonePage, HostedZoneSummary},
};

use super::Route53Client;

/// Flattens one ListHostedZones response. Missing or negative record-set
/// counts read as 0.
pub fn page_from(list_result: ListHostedZonesOutput) -> HostedZonePage {
    let zones = list_result
        .hosted_zones
        .into_iter()
        .map(|hz| HostedZoneSummary {
            name: hz.name,
            id: hz.id,
            record_set_count: hz
                .resource_record_set_count
                .and_then(|count| u64::try_from(count).ok())
                .unwrap_or(0),
        })
        .collect();

    // A truncated page without a marker can't be continued, so it ends the listing.
    let next_marker = if list_result.is_truncated { list_result.next_marker } else { None };

    HostedZonePage { zones, next_marker }
}

impl Route53Client {
    pub async fn do_list_hosted_zones_page(&self, marker: Option<String>) -> Result<HostedZonePage, Route53Error> {
        let list_result = self.client.list_hosted_zones().set_marker(marker).send().await?;
        Ok(page_from(list_result))
    }
}
