use serde::{Deserialize, Serialize};

use zonectl_aws_core::util::{RON, to_pretty_ron};

use super::resource::{HostedZoneRequest, NameserverChange};

/// A mutation planned against Route53. Printed instead of executed on dry runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Route53Op {
    CreateHostedZone(HostedZoneRequest),
    UpsertNameservers(NameserverChange),
}

impl Route53Op {
    pub fn to_ron(&self) -> anyhow::Result<String> {
        to_pretty_ron(self)
    }

    pub fn from_ron(s: &str) -> anyhow::Result<Self> {
        Ok(RON.from_str(s)?)
    }

    pub fn describe(&self) -> String {
        match self {
            Route53Op::CreateHostedZone(request) => {
                let visibility = if request.private_zone { "private" } else { "public" };
                format!("Create {} hosted zone {}", visibility, request.name)
            }
            Route53Op::UpsertNameservers(change) => format!(
                "UPSERT NS record at {} in hosted zone {} ({} nameservers, TTL {})",
                change.name,
                change.hosted_zone_id,
                change.name_servers.len(),
                change.ttl
            ),
        }
    }
}
