use aws_sdk_route53::{
    operation::create_hosted_zone::CreateHostedZoneOutput,
    types::{ChangeInfo, HostedZoneConfig, Vpc, VpcRegion},
};

use crate::{
    error::Route53Error,
    resource::{CreatedHostedZone, HostedZoneRequest, short_zone_id},
};

use super::{Route53Client, change_outcome};

/// Reads the zone id (without `/hostedzone/`), name, delegated nameservers and
/// change info out of a CreateHostedZone response.
pub fn created_from(name: &str, output: &CreateHostedZoneOutput) -> Result<CreatedHostedZone, Route53Error> {
    let Some(hosted_zone) = output.hosted_zone() else {
        return Err(Route53Error::Service {
            code:    String::from("MissingHostedZone"),
            message: format!("CreateHostedZone for {} returned no hosted zone", name),
        });
    };

    let name_servers = output
        .delegation_set()
        .map(|delegation_set| delegation_set.name_servers().to_vec())
        .unwrap_or_default();

    let change_info: Option<&ChangeInfo> = output.change_info().into();

    Ok(CreatedHostedZone {
        id: short_zone_id(hosted_zone.id()).to_string(),
        name: hosted_zone.name().to_string(),
        name_servers,
        change: change_info.map(change_outcome),
    })
}

impl Route53Client {
    pub async fn do_create_hosted_zone(&self, request: &HostedZoneRequest) -> Result<CreatedHostedZone, Route53Error> {
        let hosted_zone_config = HostedZoneConfig::builder()
            .set_comment((!request.comment.is_empty()).then(|| request.comment.clone()))
            .private_zone(request.private_zone)
            .build();

        let mut create = self
            .client
            .create_hosted_zone()
            .name(&request.name)
            .caller_reference(&request.caller_reference)
            .hosted_zone_config(hosted_zone_config);

        if let Some(ref vpc) = request.vpc {
            create = create.vpc(
                Vpc::builder()
                    .vpc_id(&vpc.vpc_id)
                    .vpc_region(VpcRegion::from(vpc.vpc_region.as_str()))
                    .build(),
            );
        }

        tracing::debug!("CreateHostedZone {} (caller reference {})", request.name, request.caller_reference);
        let output = create.send().await?;

        created_from(&request.name, &output)
    }
}
