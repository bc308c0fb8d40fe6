use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    client::Route53Api,
    error::Route53Error,
    resource::{
        ChangeOutcome, CreatedHostedZone, HostedZonePage, HostedZoneRequest, HostedZoneSummary, NameserverChange,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(HostedZoneRequest),
    ListPage(Option<String>),
    Change(NameserverChange),
}

/// In-memory Route53 serving scripted pages. Markers are `page-<n>`.
#[derive(Default)]
pub struct FakeRoute53 {
    pages:        Vec<Vec<HostedZoneSummary>>,
    fail_list_at: Option<(usize, &'static str)>,
    fail_create:  Option<&'static str>,
    fail_change:  Option<&'static str>,
    calls:        Mutex<Vec<Call>>,
}

pub fn zone(name: &str, id: &str, record_set_count: u64) -> HostedZoneSummary {
    HostedZoneSummary {
        name: name.to_string(),
        id: id.to_string(),
        record_set_count,
    }
}

impl FakeRoute53 {
    pub fn with_pages(pages: Vec<Vec<HostedZoneSummary>>) -> Self {
        FakeRoute53 {
            pages,
            ..Default::default()
        }
    }

    pub fn failing_list_at(mut self, page: usize, code: &'static str) -> Self {
        self.fail_list_at = Some((page, code));
        self
    }

    pub fn failing_create(mut self, code: &'static str) -> Self {
        self.fail_create = Some(code);
        self
    }

    pub fn failing_change(mut self, code: &'static str) -> Self {
        self.fail_change = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::ListPage(_))).count()
    }

    pub fn changes(&self) -> Vec<NameserverChange> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Change(change) => Some(change),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Route53Api for FakeRoute53 {
    async fn create_hosted_zone(&self, request: &HostedZoneRequest) -> Result<CreatedHostedZone, Route53Error> {
        self.record(Call::Create(request.clone()));
        if let Some(code) = self.fail_create {
            return Err(Route53Error::from_code(Some(code), Some("scripted failure")));
        }
        Ok(CreatedHostedZone {
            id: String::from("ZNEW"),
            name: request.name.clone(),
            name_servers: vec![String::from("ns-1.awsdns-01.org"), String::from("ns-2.awsdns-02.com")],
            change: Some(ChangeOutcome {
                change_id:    String::from("/change/C1"),
                status:       String::from("PENDING"),
                submitted_at: None,
            }),
        })
    }

    async fn list_hosted_zones_page(&self, marker: Option<String>) -> Result<HostedZonePage, Route53Error> {
        self.record(Call::ListPage(marker.clone()));

        let index = match marker {
            Some(marker) => marker
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| Route53Error::from_code(Some("InvalidInput"), Some("bad marker")))?,
            None => 0,
        };

        if let Some((fail_at, code)) = self.fail_list_at
            && fail_at == index {
                return Err(Route53Error::from_code(Some(code), Some("scripted failure")));
            }

        let zones = self.pages.get(index).cloned().unwrap_or_default();
        let next_marker = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));
        Ok(HostedZonePage { zones, next_marker })
    }

    async fn change_resource_record_sets(&self, change: &NameserverChange) -> Result<ChangeOutcome, Route53Error> {
        self.record(Call::Change(change.clone()));
        if let Some(code) = self.fail_change {
            return Err(Route53Error::from_code(Some(code), Some("scripted failure")));
        }
        Ok(ChangeOutcome {
            change_id:    String::from("/change/C2"),
            status:       String::from("PENDING"),
            submitted_at: Some(String::from("2024-01-01T00:00:00Z")),
        })
    }
}
