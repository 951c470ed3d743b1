//! Page controller: owns all page state and maps events to effects.
//!
//! # Responsibility
//! - Sequence data load → item index → render plan.
//! - Route navigation, keyboard, resize and popup events to the carousel and
//!   popup state, returning effects for the web layer to apply.
//!
//! # Invariants
//! - The controller is the only owner of carousel offsets and the item index.
//! - Effects are returned, never applied here; no DOM access in this module.
//! - Events are handled one at a time on the UI thread.

use crate::about::AboutVersion;
use crate::carousel::{CarouselId, CarouselState, CarouselView, Direction};
use crate::config::{LoadPolicy, SiteConfig};
use crate::data::index::ItemIndex;
use crate::data::{LoadError, LoadResults, ResourceKind};
use crate::model::background::BackgroundEntry;
use crate::model::item::Item;
use crate::popup::{PopupState, PopupView};
use crate::render::{carousel_cards, timeline_rows, CardView, TimelineRow};
use log::{debug, error, info};

/// Coarse page lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// At least one resource failed; its container shows an error message.
    Failed,
}

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl KeyInput {
    /// Parses a `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Source of measured card widths, in CSS pixels, excluding the gap.
pub trait CarouselMetrics {
    fn item_width_px(&self, carousel: CarouselId) -> f64;
}

impl<F> CarouselMetrics for F
where
    F: Fn(CarouselId) -> f64,
{
    fn item_width_px(&self, carousel: CarouselId) -> f64 {
        self(carousel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Key(KeyInput),
    Resize,
    Nav {
        carousel: CarouselId,
        direction: Direction,
    },
    CardClick(String),
    /// Click on the overlay; `on_backdrop` is true when the target is the
    /// overlay element itself rather than the popup content.
    OverlayClick {
        on_backdrop: bool,
    },
    CloseClick,
    AboutToggled {
        technical: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    Carousel(CarouselView),
    ShowPopup(PopupView),
    HidePopup,
    AboutText(String),
}

/// What to put into one data container after a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPlan {
    Cards {
        carousel: CarouselId,
        cards: Vec<CardView>,
    },
    Timeline(Vec<TimelineRow>),
    Error {
        resource: ResourceKind,
        message: &'static str,
    },
}

impl SectionPlan {
    pub fn resource(&self) -> ResourceKind {
        match self {
            Self::Cards { carousel, .. } => carousel.resource(),
            Self::Timeline(_) => ResourceKind::Background,
            Self::Error { resource, .. } => *resource,
        }
    }

    fn error(resource: ResourceKind) -> Self {
        Self::Error {
            resource,
            message: resource.error_message(),
        }
    }
}

/// Render plan produced by `finish_load`, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    pub state: LoadState,
    pub sections: Vec<SectionPlan>,
}

impl LoadPlan {
    /// Carousels that received cards; error sections are left untouched.
    pub fn rendered_carousels(&self) -> Vec<CarouselId> {
        self.sections
            .iter()
            .filter_map(|section| match section {
                SectionPlan::Cards { carousel, .. } => Some(*carousel),
                _ => None,
            })
            .collect()
    }
}

pub struct PortfolioController {
    config: SiteConfig,
    load_state: LoadState,
    index: ItemIndex,
    carousels: CarouselState,
    popup: PopupState,
}

impl PortfolioController {
    pub fn new(config: SiteConfig) -> Self {
        let carousels = CarouselState::new(config.carousel);
        Self {
            config,
            load_state: LoadState::Idle,
            index: ItemIndex::default(),
            carousels,
            popup: PopupState::default(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn index(&self) -> &ItemIndex {
        &self.index
    }

    pub fn carousels(&self) -> &CarouselState {
        &self.carousels
    }

    pub fn popup(&self) -> &PopupState {
        &self.popup
    }

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
        info!("event=data_load module=controller status=start");
    }

    /// Applies fetched results and returns what to render.
    ///
    /// Under `LoadPolicy::AllOrNothing` any failure turns every section into
    /// its error message and leaves the index empty.
    pub fn finish_load(&mut self, results: LoadResults) -> LoadPlan {
        for err in results.errors() {
            log_load_error(err);
        }

        let plan = match self.config.load_policy {
            LoadPolicy::AllOrNothing => self.plan_all_or_nothing(results),
            LoadPolicy::Isolated => self.plan_isolated(results),
        };

        for section in &plan.sections {
            if let SectionPlan::Error { resource, .. } = section {
                if let Some(carousel) = carousel_for(*resource) {
                    self.carousels.set_item_count(carousel, 0);
                }
            }
        }

        self.load_state = plan.state;
        info!(
            "event=data_load module=controller status={} items={}",
            match plan.state {
                LoadState::Loaded => "ok",
                _ => "error",
            },
            self.index.len()
        );
        plan
    }

    fn plan_all_or_nothing(&mut self, results: LoadResults) -> LoadPlan {
        match results {
            LoadResults {
                projects: Ok(projects),
                blogs: Ok(blogs),
                background: Ok(background),
            } => LoadPlan {
                state: LoadState::Loaded,
                sections: self.render_sections(Some(projects), Some(blogs), Some(background)),
            },
            _ => {
                self.index = ItemIndex::default();
                LoadPlan {
                    state: LoadState::Failed,
                    sections: [
                        ResourceKind::Background,
                        ResourceKind::Projects,
                        ResourceKind::Blogs,
                    ]
                    .into_iter()
                    .map(SectionPlan::error)
                    .collect(),
                }
            }
        }
    }

    fn plan_isolated(&mut self, results: LoadResults) -> LoadPlan {
        let state = if results.is_complete() {
            LoadState::Loaded
        } else {
            LoadState::Failed
        };
        LoadPlan {
            state,
            sections: self.render_sections(
                results.projects.ok(),
                results.blogs.ok(),
                results.background.ok(),
            ),
        }
    }

    /// Rebuilds the index and emits sections: background, projects, blogs.
    fn render_sections(
        &mut self,
        projects: Option<Vec<Item>>,
        blogs: Option<Vec<Item>>,
        background: Option<Vec<BackgroundEntry>>,
    ) -> Vec<SectionPlan> {
        let groups = [projects.as_deref(), blogs.as_deref()];
        self.index = ItemIndex::build(groups.into_iter().flatten());

        let mut sections = Vec::with_capacity(3);
        sections.push(match background {
            Some(entries) => SectionPlan::Timeline(timeline_rows(&entries)),
            None => SectionPlan::error(ResourceKind::Background),
        });
        for (carousel, items) in [(CarouselId::Projects, projects), (CarouselId::Blogs, blogs)] {
            sections.push(match items {
                Some(items) => {
                    self.carousels.set_item_count(carousel, items.len());
                    SectionPlan::Cards {
                        carousel,
                        cards: carousel_cards(carousel, &items, self.config.summary_chars),
                    }
                }
                None => SectionPlan::error(carousel.resource()),
            });
        }
        sections
    }

    /// Views for every carousel at the current offsets; used to initialize
    /// button state after render.
    pub fn carousel_views(&self, metrics: &impl CarouselMetrics) -> Vec<CarouselView> {
        CarouselId::ALL
            .into_iter()
            .map(|id| self.carousels.view(id, metrics.item_width_px(id)))
            .collect()
    }

    /// Handles one page event.
    pub fn handle(&mut self, event: PageEvent, metrics: &impl CarouselMetrics) -> Vec<PageEffect> {
        match event {
            PageEvent::Key(KeyInput::ArrowLeft) => {
                self.move_carousel(self.config.keyboard_carousel, Direction::Prev, metrics)
            }
            PageEvent::Key(KeyInput::ArrowRight) => {
                self.move_carousel(self.config.keyboard_carousel, Direction::Next, metrics)
            }
            PageEvent::Key(KeyInput::Escape) | PageEvent::CloseClick => self.hide_popup(),
            PageEvent::OverlayClick { on_backdrop: true } => self.hide_popup(),
            PageEvent::OverlayClick { on_backdrop: false } => Vec::new(),
            PageEvent::Resize => {
                debug!("event=carousel_reset module=controller status=ok reason=resize");
                self.carousels
                    .reset_all()
                    .into_iter()
                    .map(PageEffect::Carousel)
                    .collect()
            }
            PageEvent::Nav {
                carousel,
                direction,
            } => self.move_carousel(carousel, direction, metrics),
            PageEvent::CardClick(item_id) => self.show_popup(&item_id),
            PageEvent::AboutToggled { technical } => {
                let text = AboutVersion::from_checked(technical).text(&self.config.about);
                vec![PageEffect::AboutText(text.to_string())]
            }
        }
    }

    fn move_carousel(
        &mut self,
        carousel: CarouselId,
        direction: Direction,
        metrics: &impl CarouselMetrics,
    ) -> Vec<PageEffect> {
        let view = self
            .carousels
            .move_by(carousel, direction, metrics.item_width_px(carousel));
        debug!(
            "event=carousel_move module=controller status=ok carousel={} step={} offset={}",
            carousel.dom_id(),
            direction.step(),
            view.offset
        );
        vec![PageEffect::Carousel(view)]
    }

    fn show_popup(&mut self, item_id: &str) -> Vec<PageEffect> {
        match self.popup.show(&self.index, item_id) {
            Some(view) => vec![PageEffect::ShowPopup(view)],
            None => {
                debug!(
                    "event=popup_show module=controller status=skipped reason=unknown_item item_id={item_id}"
                );
                Vec::new()
            }
        }
    }

    fn hide_popup(&mut self) -> Vec<PageEffect> {
        self.popup.hide();
        vec![PageEffect::HidePopup]
    }
}

impl Default for PortfolioController {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

fn carousel_for(resource: ResourceKind) -> Option<CarouselId> {
    match resource {
        ResourceKind::Projects => Some(CarouselId::Projects),
        ResourceKind::Blogs => Some(CarouselId::Blogs),
        ResourceKind::Background => None,
    }
}

fn log_load_error(err: &LoadError) {
    error!(
        "event=data_load module=controller status=error resource={} error={}",
        err.resource.as_str(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::{KeyInput, PageEffect, PageEvent, PortfolioController};
    use crate::carousel::CarouselId;
    use crate::config::{LoadPolicy, SiteConfig};
    use crate::data::{LoadError, LoadResults, ResourceKind};

    const ONE_PROJECT: &str = r#"[{"id": "p1", "title": "One"}]"#;

    #[test]
    fn parses_only_known_keys() {
        assert_eq!(KeyInput::parse("ArrowLeft"), Some(KeyInput::ArrowLeft));
        assert_eq!(KeyInput::parse("Escape"), Some(KeyInput::Escape));
        assert_eq!(KeyInput::parse("Enter"), None);
    }

    #[test]
    fn overlay_content_click_does_not_close() {
        let mut controller = PortfolioController::default();
        let metrics = |_: CarouselId| 300.0;
        let effects = controller.handle(PageEvent::OverlayClick { on_backdrop: false }, &metrics);
        assert!(effects.is_empty());
        let effects = controller.handle(PageEvent::OverlayClick { on_backdrop: true }, &metrics);
        assert_eq!(effects, vec![PageEffect::HidePopup]);
    }

    #[test]
    fn about_toggle_emits_text() {
        let mut controller = PortfolioController::default();
        let effects = controller.handle(
            PageEvent::AboutToggled { technical: true },
            &|_: CarouselId| 0.0,
        );
        assert!(matches!(&effects[..], [PageEffect::AboutText(text)] if text.contains("Docker")));
    }

    #[test]
    fn failed_load_leaves_no_carousel_to_initialize() {
        let mut controller = PortfolioController::default();
        let plan = controller.finish_load(LoadResults::from_bodies(
            Ok(ONE_PROJECT.to_string()),
            Err(LoadError::status(ResourceKind::Blogs, 500)),
            Ok("[]".to_string()),
        ));
        assert!(plan.rendered_carousels().is_empty());
    }

    #[test]
    fn isolated_load_initializes_only_rendered_carousels() {
        let config = SiteConfig {
            load_policy: LoadPolicy::Isolated,
            ..SiteConfig::default()
        };
        let mut controller = PortfolioController::new(config);
        let plan = controller.finish_load(LoadResults::from_bodies(
            Ok(ONE_PROJECT.to_string()),
            Err(LoadError::status(ResourceKind::Blogs, 500)),
            Ok("[]".to_string()),
        ));
        assert_eq!(plan.rendered_carousels(), vec![CarouselId::Projects]);
    }
}
