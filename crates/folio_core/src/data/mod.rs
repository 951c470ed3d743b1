//! Data resources, parsing, and load errors.
//!
//! # Responsibility
//! - Name the JSON resources the page consumes and their error messages.
//! - Parse raw response bodies into model records.
//! - Classify load failures for the controller's failure policy.
//!
//! # Invariants
//! - Parsing is all-or-nothing per resource: one bad record fails the file.
//! - Error messages shown to visitors are static per resource category.
//!
//! # See also
//! - crate::controller::PortfolioController::finish_load

pub mod index;

use crate::model::background::BackgroundEntry;
use crate::model::business::BusinessEntry;
use crate::model::item::Item;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the three portfolio data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Projects,
    Blogs,
    Background,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Projects,
        ResourceKind::Blogs,
        ResourceKind::Background,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Blogs => "blogs",
            Self::Background => "background",
        }
    }

    /// Static message that replaces the container when loading fails.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Projects => "Error loading projects",
            Self::Blogs => "Error loading blogs",
            Self::Background => "Error loading background",
        }
    }

    /// CSS selector of the container the resource renders into.
    pub fn container_selector(self) -> &'static str {
        match self {
            Self::Projects => "#projects-carousel .carousel-container",
            Self::Blogs => "#blogs-carousel .carousel-container",
            Self::Background => ".history-timeline",
        }
    }
}

/// Failure of one resource load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub resource: ResourceKind,
    pub kind: LoadErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Request could not be sent or the body could not be read.
    Network(String),
    /// Server answered with a non-success status.
    Status(u16),
    /// Body was not valid JSON for the expected shape.
    Parse(String),
}

impl LoadError {
    pub fn network(resource: ResourceKind, message: impl Into<String>) -> Self {
        Self {
            resource,
            kind: LoadErrorKind::Network(message.into()),
        }
    }

    pub fn status(resource: ResourceKind, status: u16) -> Self {
        Self {
            resource,
            kind: LoadErrorKind::Status(status),
        }
    }

    pub fn parse(resource: ResourceKind, message: impl Into<String>) -> Self {
        Self {
            resource,
            kind: LoadErrorKind::Parse(message.into()),
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let resource = self.resource.as_str();
        match &self.kind {
            LoadErrorKind::Network(message) => {
                write!(f, "failed to fetch {resource}: {message}")
            }
            LoadErrorKind::Status(status) => {
                write!(f, "failed to fetch {resource}: HTTP status {status}")
            }
            LoadErrorKind::Parse(message) => {
                write!(f, "failed to parse {resource}: {message}")
            }
        }
    }
}

impl Error for LoadError {}

pub type LoadResult<T> = Result<T, LoadError>;

pub fn parse_items(resource: ResourceKind, body: &str) -> LoadResult<Vec<Item>> {
    parse_records(resource, body)
}

pub fn parse_background(body: &str) -> LoadResult<Vec<BackgroundEntry>> {
    parse_records(ResourceKind::Background, body)
}

/// Parses the optional business listing; it is not one of the portfolio
/// resources, so errors are plain strings.
pub fn parse_businesses(body: &str) -> Result<Vec<BusinessEntry>, String> {
    serde_json::from_str(body).map_err(|err| format!("failed to parse businesses: {err}"))
}

fn parse_records<T: DeserializeOwned>(resource: ResourceKind, body: &str) -> LoadResult<Vec<T>> {
    serde_json::from_str(body).map_err(|err| LoadError::parse(resource, err.to_string()))
}

/// Per-resource outcomes of one load pass.
#[derive(Debug, Clone)]
pub struct LoadResults {
    pub projects: LoadResult<Vec<Item>>,
    pub blogs: LoadResult<Vec<Item>>,
    pub background: LoadResult<Vec<BackgroundEntry>>,
}

impl LoadResults {
    /// Builds results from raw bodies, already fetched.
    pub fn from_bodies(
        projects: LoadResult<String>,
        blogs: LoadResult<String>,
        background: LoadResult<String>,
    ) -> Self {
        Self {
            projects: projects.and_then(|body| parse_items(ResourceKind::Projects, &body)),
            blogs: blogs.and_then(|body| parse_items(ResourceKind::Blogs, &body)),
            background: background.and_then(|body| parse_background(&body)),
        }
    }

    pub fn errors(&self) -> Vec<&LoadError> {
        [
            self.projects.as_ref().err(),
            self.blogs.as_ref().err(),
            self.background.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.errors().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_background, parse_items, LoadError, LoadErrorKind, LoadResults, ResourceKind};

    const PROJECTS: &str = r#"[
        {"id": "p1", "title": "One", "description": "First", "technologies": "Rust"},
        {"id": "p2", "title": "Two", "description": "Second", "technologies": "Go", "link": "https://github.com/x/y"}
    ]"#;

    #[test]
    fn parses_items_and_background() {
        let items = parse_items(ResourceKind::Projects, PROJECTS).expect("projects parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].link.as_deref(), Some("https://github.com/x/y"));

        let entries =
            parse_background(r#"[{"year": "2020", "title": "t", "subtitle": "s", "description": "d"}]"#)
                .expect("background parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, "2020");
    }

    #[test]
    fn one_bad_record_fails_the_resource() {
        let err = parse_items(
            ResourceKind::Blogs,
            r#"[{"id": "b1", "title": "ok"}, {"title": "missing id"}]"#,
        )
        .expect_err("missing id must fail");
        assert_eq!(err.resource, ResourceKind::Blogs);
        assert!(matches!(err.kind, LoadErrorKind::Parse(_)));
    }

    #[test]
    fn from_bodies_keeps_fetch_errors_and_parses_the_rest() {
        let results = LoadResults::from_bodies(
            Ok(PROJECTS.to_string()),
            Err(LoadError::status(ResourceKind::Blogs, 404)),
            Ok("not json".to_string()),
        );
        assert_eq!(results.projects.as_ref().map(Vec::len), Ok(2));
        let errors = results.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "failed to fetch blogs: HTTP status 404");
        assert_eq!(errors[1].resource, ResourceKind::Background);
        assert!(!results.is_complete());
    }

    #[test]
    fn error_messages_are_static_per_resource() {
        assert_eq!(ResourceKind::Projects.error_message(), "Error loading projects");
        assert_eq!(ResourceKind::Blogs.error_message(), "Error loading blogs");
        assert_eq!(ResourceKind::Background.error_message(), "Error loading background");
    }
}
