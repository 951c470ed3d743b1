//! Core page logic for the folio portfolio site.
//! This crate owns every rule about what the page shows; the web crate only
//! applies the views and effects computed here.

pub mod about;
pub mod carousel;
pub mod config;
pub mod controller;
pub mod data;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod popup;
pub mod render;

pub use about::AboutVersion;
pub use carousel::{CarouselId, CarouselState, CarouselView, Direction, NavButtons};
pub use config::{ConfigError, LoadPolicy, SiteConfig};
pub use controller::{
    CarouselMetrics, KeyInput, LoadPlan, LoadState, PageEffect, PageEvent, PortfolioController,
    SectionPlan,
};
pub use data::index::ItemIndex;
pub use data::{LoadError, LoadErrorKind, LoadResults, ResourceKind};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::background::BackgroundEntry;
pub use model::business::BusinessEntry;
pub use model::item::{Item, ItemId, ItemValidationError};
pub use popup::{PopupLink, PopupState, PopupView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
