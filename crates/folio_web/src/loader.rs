//! Data fetch for the portfolio resources.
//!
//! # Responsibility
//! - Fetch the three JSON resources and hand parsed results to the core.
//!
//! # Invariants
//! - No retry, timeout, or cancellation; a failure is reported once.
//! - Non-success HTTP statuses are failures, not empty data.

use folio_core::config::DataPaths;
use folio_core::data::{parse_businesses, LoadError, LoadResult, LoadResults, ResourceKind};
use folio_core::BusinessEntry;
use futures::future::join3;
use gloo_net::http::Request;
use log::debug;

/// Fetches one resource body as text.
pub async fn fetch_text(resource: ResourceKind, url: &str) -> LoadResult<String> {
    debug!(
        "event=fetch module=loader status=start resource={} url={url}",
        resource.as_str()
    );
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| LoadError::network(resource, err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::status(resource, response.status()));
    }
    response
        .text()
        .await
        .map_err(|err| LoadError::network(resource, err.to_string()))
}

/// Fetches projects, blogs and background concurrently and parses them.
pub async fn load_portfolio(paths: &DataPaths) -> LoadResults {
    let (projects, blogs, background) = join3(
        fetch_text(
            ResourceKind::Projects,
            paths.path_for(ResourceKind::Projects),
        ),
        fetch_text(ResourceKind::Blogs, paths.path_for(ResourceKind::Blogs)),
        fetch_text(
            ResourceKind::Background,
            paths.path_for(ResourceKind::Background),
        ),
    )
    .await;
    LoadResults::from_bodies(projects, blogs, background)
}

/// Fetches the business listing used by the storefront page.
pub async fn load_businesses(url: &str) -> Result<Vec<BusinessEntry>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| format!("failed to fetch businesses: {err}"))?;
    if !response.ok() {
        return Err(format!(
            "failed to fetch businesses: HTTP status {}",
            response.status()
        ));
    }
    let body = response
        .text()
        .await
        .map_err(|err| format!("failed to fetch businesses: {err}"))?;
    parse_businesses(&body)
}
