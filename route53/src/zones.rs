//! The three zonectl flows: create a zone, list zones, and point a zone's NS
//! records somewhere new.
//!
//! Each flow comes in two forms. The `try_` form returns a typed
//! [`Route53Error`]; the plain form logs the failure and hands back `None` (or
//! an empty listing). `list-hosted-zones` uses the typed form so a failed
//! listing doesn't read as an empty account.

use std::ops::ControlFlow;

use crate::{
    client::Route53Api,
    error::Route53Error,
    resource::{ChangeOutcome, CreatedHostedZone, HostedZoneRequest, HostedZoneSummary, NameserverChange, short_zone_id},
    util::{self, walk_hosted_zones},
};

pub async fn try_create_hosted_zone<A>(api: &A, request: &HostedZoneRequest) -> Result<CreatedHostedZone, Route53Error>
where
    A: Route53Api + ?Sized,
{
    if request.name.trim().is_empty() {
        return Err(Route53Error::InvalidInput(String::from("domain name must not be empty")));
    }

    api.create_hosted_zone(request).await
}

pub async fn create_hosted_zone<A>(api: &A, request: &HostedZoneRequest) -> Option<CreatedHostedZone>
where
    A: Route53Api + ?Sized,
{
    match try_create_hosted_zone(api, request).await {
        Ok(created) => {
            tracing::info!("Hosted zone {} created with id {}", created.name, created.id);
            Some(created)
        }
        Err(e) => {
            tracing::error!("Failed to create hosted zone {}: {}", request.name, e);
            None
        }
    }
}

pub async fn try_list_hosted_zones<A>(api: &A) -> Result<Vec<HostedZoneSummary>, Route53Error>
where
    A: Route53Api + ?Sized,
{
    util::list_hosted_zones(api).await
}

/// Every visible hosted zone. Empty both when there are none and on failure.
pub async fn list_hosted_zones<A>(api: &A) -> Vec<HostedZoneSummary>
where
    A: Route53Api + ?Sized,
{
    match try_list_hosted_zones(api).await {
        Ok(zones) => zones,
        Err(e) => {
            tracing::error!("Failed to list hosted zones: {}", e);
            Vec::new()
        }
    }
}

/// Id of the first zone, in listing order, whose name starts with `domain_name`.
///
/// This is a string prefix match, so `example.com` also matches
/// `example.com.uk.` if that zone is listed first.
pub async fn try_find_hosted_zone_id<A>(api: &A, domain_name: &str) -> Result<Option<String>, Route53Error>
where
    A: Route53Api + ?Sized,
{
    if domain_name.trim().is_empty() {
        return Err(Route53Error::InvalidInput(String::from("domain name must not be empty")));
    }

    walk_hosted_zones(api, |zone| {
        if zone.name.starts_with(domain_name) {
            tracing::debug!("Hosted zone {} matches {}", zone.name, domain_name);
            ControlFlow::Break(short_zone_id(&zone.id).to_string())
        } else {
            ControlFlow::Continue(())
        }
    })
    .await
}

pub async fn find_hosted_zone_id<A>(api: &A, domain_name: &str) -> Option<String>
where
    A: Route53Api + ?Sized,
{
    match try_find_hosted_zone_id(api, domain_name).await {
        Ok(Some(id)) => Some(id),
        Ok(None) => {
            tracing::warn!("No hosted zone found for {}", domain_name);
            None
        }
        Err(e) => {
            tracing::error!("Failed to resolve hosted zone for {}: {}", domain_name, e);
            None
        }
    }
}

pub async fn try_update_nameservers<A>(api: &A, change: &NameserverChange) -> Result<ChangeOutcome, Route53Error>
where
    A: Route53Api + ?Sized,
{
    if change.name_servers.is_empty() {
        return Err(Route53Error::InvalidInput(String::from("at least one nameserver is required")));
    }

    api.change_resource_record_sets(change).await
}

pub async fn update_nameservers<A>(api: &A, change: &NameserverChange) -> Option<ChangeOutcome>
where
    A: Route53Api + ?Sized,
{
    match try_update_nameservers(api, change).await {
        Ok(outcome) => {
            tracing::info!(
                "Nameserver update for {} submitted as {} ({})",
                change.name,
                outcome.change_id,
                outcome.status
            );
            Some(outcome)
        }
        Err(e) => {
            tracing::error!("Failed to update nameservers for {}: {}", change.name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fake::{Call, FakeRoute53, zone},
        resource::RecordChangeAction,
    };

    fn two_pages() -> FakeRoute53 {
        FakeRoute53::with_pages(vec![vec![zone("example.com.", "Z1", 5)], vec![zone("other.org.", "Z2", 2)]])
    }

    #[tokio::test]
    async fn listing_spans_pages() {
        let fake = two_pages();
        let zones = list_hosted_zones(&fake).await;
        assert_eq!(zones, vec![zone("example.com.", "Z1", 5), zone("other.org.", "Z2", 2)]);
    }

    #[tokio::test]
    async fn listing_failure_reads_as_empty() {
        let fake = two_pages().failing_list_at(0, "AccessDenied");
        assert!(list_hosted_zones(&fake).await.is_empty());
        assert!(matches!(
            try_list_hosted_zones(&fake).await,
            Err(Route53Error::PermissionDenied(_))
        ));
    }

    #[tokio::test]
    async fn resolves_first_matching_zone() {
        let fake = two_pages();
        assert_eq!(find_hosted_zone_id(&fake, "example.com.").await.as_deref(), Some("Z1"));
        assert_eq!(find_hosted_zone_id(&fake, "other.org.").await.as_deref(), Some("Z2"));
    }

    #[tokio::test]
    async fn no_match_is_absent() {
        let fake = two_pages();
        assert_eq!(find_hosted_zone_id(&fake, "nomatch.test.").await, None);
        assert_eq!(try_find_hosted_zone_id(&fake, "nomatch.test.").await.unwrap(), None);
        assert_eq!(fake.list_calls(), 4);
    }

    #[tokio::test]
    async fn resolution_is_a_prefix_match() {
        let fake = FakeRoute53::with_pages(vec![
            vec![zone("example.com.uk.", "/hostedzone/ZUK", 3)],
            vec![zone("example.com.", "/hostedzone/ZCOM", 4)],
        ]);

        assert_eq!(find_hosted_zone_id(&fake, "example.com").await.as_deref(), Some("ZUK"));
        assert_eq!(fake.list_calls(), 1);
    }

    #[tokio::test]
    async fn empty_domain_is_rejected_before_listing() {
        let fake = two_pages();
        assert!(matches!(
            try_find_hosted_zone_id(&fake, "").await,
            Err(Route53Error::InvalidInput(_))
        ));
        assert!(matches!(
            try_find_hosted_zone_id(&fake, "  ").await,
            Err(Route53Error::InvalidInput(_))
        ));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn update_sends_exactly_one_upsert() {
        let fake = two_pages();
        let change = NameserverChange::upsert(
            "Z1",
            "example.com.",
            vec![String::from("ns1.example."), String::from("ns2.example.")],
        );

        let outcome = update_nameservers(&fake, &change).await.unwrap();
        assert_eq!(outcome.status, "PENDING");

        let sent = fake.changes();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].hosted_zone_id, "Z1");
        assert_eq!(sent[0].action, RecordChangeAction::Upsert);
        assert_eq!(sent[0].ttl, 300);
        assert_eq!(sent[0].name_servers, vec!["ns1.example.", "ns2.example."]);
    }

    #[tokio::test]
    async fn update_failure_is_absent() {
        let fake = two_pages().failing_change("NoSuchHostedZone");
        let change = NameserverChange::upsert("Z9", "example.com.", vec![String::from("ns1.example.")]);

        assert_eq!(update_nameservers(&fake, &change).await, None);
        assert!(matches!(
            try_update_nameservers(&fake, &change).await,
            Err(Route53Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_without_nameservers_never_reaches_the_api() {
        let fake = two_pages();
        let change = NameserverChange::upsert("Z1", "example.com.", Vec::new());

        assert_eq!(update_nameservers(&fake, &change).await, None);
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn create_returns_zone_and_nameservers() {
        let fake = FakeRoute53::default();
        let request = HostedZoneRequest::new("example.com.", "created by tests");

        let created = create_hosted_zone(&fake, &request).await.unwrap();
        assert_eq!(created.id, "ZNEW");
        assert_eq!(created.name_servers.len(), 2);
        assert_eq!(fake.calls(), vec![Call::Create(request)]);
    }

    #[tokio::test]
    async fn create_fault_is_absent_not_a_panic() {
        let fake = FakeRoute53::default().failing_create("HostedZoneAlreadyExists");
        let request = HostedZoneRequest::new("example.com.", "");

        assert_eq!(create_hosted_zone(&fake, &request).await, None);
        assert!(matches!(
            try_create_hosted_zone(&fake, &request).await,
            Err(Route53Error::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn create_rejects_empty_domain() {
        let fake = FakeRoute53::default();
        let request = HostedZoneRequest::new("  ", "");

        assert!(matches!(
            try_create_hosted_zone(&fake, &request).await,
            Err(Route53Error::InvalidInput(_))
        ));
        assert!(fake.calls().is_empty());
    }
}
