use comfy_table::Table;
use serde::Serialize;

use crate::{error::Route53Error, resource::HostedZoneSummary};

pub const NO_HOSTED_ZONES: &str = "No hosted zones found or an error occurred.";

/// What `list-hosted-zones` prints to stdout and the status it exits with.
#[derive(Debug, PartialEq)]
pub struct ListingReport {
    pub stdout:    Option<String>,
    pub exit_code: i32,
}

/// A failed listing exits 1 and prints no JSON. An empty one exits 0.
pub fn listing_report(result: &Result<Vec<HostedZoneSummary>, Route53Error>, json: bool) -> anyhow::Result<ListingReport> {
    let report = match (result, json) {
        (Ok(zones), true) => ListingReport {
            stdout:    Some(to_json(zones)?),
            exit_code: 0,
        },
        (Ok(zones), false) if zones.is_empty() => ListingReport {
            stdout:    Some(NO_HOSTED_ZONES.to_string()),
            exit_code: 0,
        },
        (Ok(zones), false) => ListingReport {
            stdout:    Some(hosted_zone_table(zones).to_string()),
            exit_code: 0,
        },
        (Err(_), true) => ListingReport {
            stdout:    None,
            exit_code: 1,
        },
        (Err(_), false) => ListingReport {
            stdout:    Some(NO_HOSTED_ZONES.to_string()),
            exit_code: 1,
        },
    };

    Ok(report)
}

pub fn hosted_zone_table(zones: &[HostedZoneSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "ID", "Record Set Count"]);

    for zone in zones {
        table.add_row(vec![zone.name.clone(), zone.id.clone(), zone.record_set_count.to_string()]);
    }

    table
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
