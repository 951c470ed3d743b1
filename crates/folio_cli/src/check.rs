//! Offline validation of a site's data files.
//!
//! # Responsibility
//! - Load the portfolio resources from disk with the same parsers the page
//!   uses, and summarize what the page would render.
//!
//! # Invariants
//! - File resolution follows `SiteConfig::data`, relative to the site root.
//! - Every resource is checked even when an earlier one fails.

use folio_core::data::{LoadError, LoadResult, LoadResults, ResourceKind};
use folio_core::{CarouselId, SiteConfig};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Outcome for one resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReport {
    pub resource: ResourceKind,
    pub path: PathBuf,
    /// Record count, or the load error message.
    pub outcome: Result<usize, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub resources: Vec<ResourceReport>,
    /// Ids that appear more than once across projects and blogs.
    pub duplicate_ids: Vec<String>,
    /// `(carousel, item_count, max_offset)` for carousels that loaded.
    pub carousels: Vec<(CarouselId, usize, usize)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.resources.iter().all(|report| report.outcome.is_ok())
    }
}

pub fn resolve(root: &Path, config: &SiteConfig, resource: ResourceKind) -> PathBuf {
    root.join(config.data.path_for(resource))
}

fn read_body(root: &Path, config: &SiteConfig, resource: ResourceKind) -> LoadResult<String> {
    let path = resolve(root, config, resource);
    std::fs::read_to_string(&path).map_err(|err| {
        LoadError::network(resource, format!("cannot read `{}`: {err}", path.display()))
    })
}

/// Reads and parses all portfolio resources under `root`.
pub fn load_from_dir(root: &Path, config: &SiteConfig) -> LoadResults {
    LoadResults::from_bodies(
        read_body(root, config, ResourceKind::Projects),
        read_body(root, config, ResourceKind::Blogs),
        read_body(root, config, ResourceKind::Background),
    )
}

pub fn check_site(root: &Path, config: &SiteConfig) -> CheckReport {
    let results = load_from_dir(root, config);
    let outcome = |resource: ResourceKind, len: Result<usize, &LoadError>| ResourceReport {
        resource,
        path: resolve(root, config, resource),
        outcome: len.map_err(ToString::to_string),
    };

    let resources = vec![
        outcome(
            ResourceKind::Projects,
            results.projects.as_ref().map(Vec::len),
        ),
        outcome(ResourceKind::Blogs, results.blogs.as_ref().map(Vec::len)),
        outcome(
            ResourceKind::Background,
            results.background.as_ref().map(Vec::len),
        ),
    ];

    let groups = [results.projects.as_deref().ok(), results.blogs.as_deref().ok()];
    let mut seen = std::collections::BTreeMap::<&str, usize>::new();
    for item in groups.iter().flatten().flat_map(|group| group.iter()) {
        *seen.entry(item.id.as_str()).or_default() += 1;
    }
    let distinct_items = seen.len();
    let duplicate_ids: Vec<String> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect();
    for id in &duplicate_ids {
        warn!("event=check module=cli status=duplicate item_id={id}");
    }

    let visible = config.carousel.visible_items;
    let carousels = [
        (CarouselId::Projects, results.projects.as_ref().ok()),
        (CarouselId::Blogs, results.blogs.as_ref().ok()),
    ]
    .into_iter()
    .filter_map(|(carousel, items)| {
        items.map(|items| {
            let count = items.len();
            (
                carousel,
                count,
                folio_core::carousel::max_offset(count, visible),
            )
        })
    })
    .collect();

    let report = CheckReport {
        resources,
        duplicate_ids,
        carousels,
    };
    info!(
        "event=check module=cli status={} distinct_items={distinct_items}",
        if report.is_ok() { "ok" } else { "error" }
    );
    report
}

#[cfg(test)]
mod tests {
    use super::check_site;
    use folio_core::{CarouselId, ResourceKind, SiteConfig};
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, name: &str, body: &str) {
        let dir = root.join("data");
        fs::create_dir_all(&dir).expect("create data dir");
        fs::write(dir.join(name), body).expect("write data file");
    }

    #[test]
    fn reports_counts_offsets_and_duplicates() {
        let site = tempfile::tempdir().expect("temp site root");
        write(
            site.path(),
            "projects.json",
            r#"[{"id":"a","title":"A"},{"id":"b","title":"B"},{"id":"c"},{"id":"d"},{"id":"e"}]"#,
        );
        write(site.path(), "blogs.json", r#"[{"id":"a","title":"dup"}]"#);
        write(site.path(), "background.json", "[]");

        let report = check_site(site.path(), &SiteConfig::default());
        assert!(report.is_ok());
        assert_eq!(report.resources[0].outcome, Ok(5));
        assert_eq!(report.duplicate_ids, vec!["a".to_string()]);
        assert_eq!(
            report.carousels,
            vec![(CarouselId::Projects, 5, 2), (CarouselId::Blogs, 1, 0)]
        );
    }

    #[test]
    fn missing_and_malformed_files_are_reported_per_resource() {
        let site = tempfile::tempdir().expect("temp site root");
        write(site.path(), "projects.json", "[]");
        write(site.path(), "background.json", "{oops");

        let report = check_site(site.path(), &SiteConfig::default());
        assert!(!report.is_ok());

        let blogs = &report.resources[1];
        assert_eq!(blogs.resource, ResourceKind::Blogs);
        assert!(blogs.outcome.as_ref().expect_err("blogs file is missing").contains("cannot read"));

        let background = &report.resources[2];
        assert!(background
            .outcome
            .as_ref()
            .expect_err("background is malformed")
            .starts_with("failed to parse background"));
        assert_eq!(report.carousels, vec![(CarouselId::Projects, 0, 0)]);
    }
}
