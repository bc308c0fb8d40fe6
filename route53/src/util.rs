use std::ops::ControlFlow;

use crate::{client::Route53Api, error::Route53Error, resource::HostedZoneSummary};

/// Walks every hosted zone in listing order, page by page.
///
/// Pages are fetched lazily: once `visit` breaks, no further pages are
/// requested and the break value is returned. Each call starts again from the
/// first page.
pub async fn walk_hosted_zones<A, T>(
    api: &A,
    mut visit: impl FnMut(HostedZoneSummary) -> ControlFlow<T>,
) -> Result<Option<T>, Route53Error>
where
    A: Route53Api + ?Sized,
{
    let mut marker = None;
    let mut page_index = 0usize;

    loop {
        let page = api.list_hosted_zones_page(marker).await?;
        tracing::debug!("ListHostedZones page {}: {} zones", page_index, page.zones.len());

        for zone in page.zones {
            if let ControlFlow::Break(found) = visit(zone) {
                return Ok(Some(found));
            }
        }

        match page.next_marker {
            Some(next_marker) => {
                marker = Some(next_marker);
                page_index += 1;
            }
            None => return Ok(None),
        }
    }
}

/// Concatenates every page of ListHostedZones.
pub async fn list_hosted_zones<A>(api: &A) -> Result<Vec<HostedZoneSummary>, Route53Error>
where
    A: Route53Api + ?Sized,
{
    let mut results = Vec::new();

    walk_hosted_zones(api, |zone| {
        results.push(zone);
        ControlFlow::<()>::Continue(())
    })
    .await?;

    Ok(results)
}
