use serde::{Deserialize, Serialize};

/// Namespace prefix Route53 puts on hosted zone ids, e.g. `/hostedzone/Z123`.
pub const HOSTED_ZONE_ID_PREFIX: &str = "/hostedzone/";

pub const DEFAULT_NS_TTL: i64 = 300;

/// Strips the `/hostedzone/` namespace from a zone id, if present.
pub fn short_zone_id(id: &str) -> &str {
    id.strip_prefix(HOSTED_ZONE_ID_PREFIX).unwrap_or(id)
}

/// VPC to associate with a private hosted zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VpcAssociation {
    pub vpc_id:     String,
    pub vpc_region: String,
}

/// Everything sent to CreateHostedZone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostedZoneRequest {
    /// Domain name. A trailing dot is recommended but not required.
    pub name: String,
    /// Idempotency token. Route53 rejects a second zone with the same token.
    pub caller_reference: String,
    pub comment: String,
    pub private_zone: bool,
    pub vpc: Option<VpcAssociation>,
}

impl HostedZoneRequest {
    /// A public zone request with a fresh caller reference.
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caller_reference: uuid::Uuid::new_v4().to_string(),
            comment: comment.into(),
            private_zone: false,
            vpc: None,
        }
    }

    pub fn with_caller_reference(mut self, caller_reference: impl Into<String>) -> Self {
        self.caller_reference = caller_reference.into();
        self
    }

    pub fn private(mut self, vpc: Option<VpcAssociation>) -> Self {
        self.private_zone = true;
        self.vpc = vpc;
        self
    }
}

/// One row of a hosted zone listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostedZoneSummary {
    pub name: String,
    pub id: String,
    pub record_set_count: u64,
}

/// One page of ListHostedZones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostedZonePage {
    pub zones:       Vec<HostedZoneSummary>,
    /// Marker for the next page; `None` once the listing is exhausted.
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeOutcome {
    pub change_id:    String,
    pub status:       String,
    pub submitted_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedHostedZone {
    pub id: String,
    pub name: String,
    pub name_servers: Vec<String>,
    pub change: Option<ChangeOutcome>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordChangeAction {
    Create,
    Delete,
    Upsert,
}

/// A single-record-set change to the NS records of a zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameserverChange {
    pub hosted_zone_id: String,
    pub name: String,
    pub name_servers: Vec<String>,
    pub ttl: i64,
    pub action: RecordChangeAction,
    pub comment: String,
}

impl NameserverChange {
    /// An UPSERT of the NS record set at `name`, replacing whatever values it held.
    pub fn upsert(hosted_zone_id: &str, name: impl Into<String>, name_servers: Vec<String>) -> Self {
        Self {
            hosted_zone_id: short_zone_id(hosted_zone_id).to_string(),
            name: name.into(),
            name_servers,
            ttl: DEFAULT_NS_TTL,
            action: RecordChangeAction::Upsert,
            comment: String::from("update NS records"),
        }
    }

    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
