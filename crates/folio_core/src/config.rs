//! Site configuration.
//!
//! # Responsibility
//! - Hold every tunable the page controller reads (data paths, carousel
//!   geometry, summary length, failure policy, about texts).
//! - Parse optional JSON overrides on top of built-in defaults.
//!
//! # Invariants
//! - A `SiteConfig` returned by `from_json_str` has passed `validate()`.
//! - Missing JSON fields fall back to `SiteConfig::default()` values.

use crate::carousel::CarouselId;
use crate::data::ResourceKind;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of cards visible at once in a carousel window.
pub const DEFAULT_VISIBLE_ITEMS: usize = 3;
/// Horizontal gap between cards, in CSS pixels.
pub const DEFAULT_GAP_PX: f64 = 20.0;
/// Characters of the description shown on a card before the ellipsis.
pub const DEFAULT_SUMMARY_CHARS: usize = 100;

const DEFAULT_ABOUT_REGULAR: &str = "Deliver fast & reliable solutions, leveraging the latest technologies and best practices to ensure performance, maintainability, and cost.";
const DEFAULT_ABOUT_TECHNICAL: &str = "This web made with the basic 3 (html+css+js, no framework) for performance, deployed with Docker on an efficient selfhosted Proxmox server leveraging Cloudflare for optimal speed and security.";

/// What to do when one of the data resources fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Any failure replaces every container with its error message.
    #[default]
    AllOrNothing,
    /// Each resource renders or fails on its own.
    Isolated,
}

/// Relative URLs of the data resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub projects: String,
    pub blogs: String,
    pub background: String,
    pub businesses: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            projects: "data/projects.json".to_string(),
            blogs: "data/blogs.json".to_string(),
            background: "data/background.json".to_string(),
            businesses: "data/businesses.json".to_string(),
        }
    }
}

impl DataPaths {
    /// Returns the configured path for one portfolio resource.
    pub fn path_for(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Projects => &self.projects,
            ResourceKind::Blogs => &self.blogs,
            ResourceKind::Background => &self.background,
        }
    }
}

/// Carousel window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselLayout {
    pub visible_items: usize,
    pub gap_px: f64,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            visible_items: DEFAULT_VISIBLE_ITEMS,
            gap_px: DEFAULT_GAP_PX,
        }
    }
}

/// The two texts behind the about-section toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutTexts {
    pub regular: String,
    pub technical: String,
}

impl Default for AboutTexts {
    fn default() -> Self {
        Self {
            regular: DEFAULT_ABOUT_REGULAR.to_string(),
            technical: DEFAULT_ABOUT_TECHNICAL.to_string(),
        }
    }
}

/// Root configuration for one page session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data: DataPaths,
    pub carousel: CarouselLayout,
    pub summary_chars: usize,
    /// Carousel moved by ArrowLeft/ArrowRight.
    pub keyboard_carousel: CarouselId,
    pub load_policy: LoadPolicy,
    pub about: AboutTexts,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            carousel: CarouselLayout::default(),
            summary_chars: DEFAULT_SUMMARY_CHARS,
            keyboard_carousel: CarouselId::Projects,
            load_policy: LoadPolicy::default(),
            about: AboutTexts::default(),
        }
    }
}

/// Configuration parse/validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    ZeroVisibleItems,
    InvalidGap(f64),
    EmptyDataPath(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid site config: {message}"),
            Self::ZeroVisibleItems => write!(f, "carousel.visible_items must be at least 1"),
            Self::InvalidGap(gap) => {
                write!(f, "carousel.gap_px must be finite and >= 0, got {gap}")
            }
            Self::EmptyDataPath(field) => write!(f, "data.{field} must not be empty"),
        }
    }
}

impl Error for ConfigError {}

impl SiteConfig {
    /// Parses a JSON override document and validates the merged result.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or wrong field types.
    /// - Any error returned by `validate()`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks geometry and path invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.visible_items == 0 {
            return Err(ConfigError::ZeroVisibleItems);
        }
        let gap = self.carousel.gap_px;
        if !gap.is_finite() || gap < 0.0 {
            return Err(ConfigError::InvalidGap(gap));
        }
        let paths = [
            ("projects", &self.data.projects),
            ("blogs", &self.data.blogs),
            ("background", &self.data.background),
            ("businesses", &self.data.businesses),
        ];
        for (field, path) in paths {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyDataPath(field));
            }
        }
        Ok(())
    }
}
