//! Carousel pagination state and geometry.
//!
//! # Responsibility
//! - Track the first-visible offset and item count of every carousel.
//! - Derive translation and navigation-button state from that offset.
//!
//! # Invariants
//! - Stored offsets always lie in `[0, max_offset(item_count, visible_items)]`.
//! - Moving past either end is a no-op, never an error.
//! - Functions here never touch the DOM; the web layer applies `CarouselView`.

use crate::config::CarouselLayout;
use crate::data::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies one carousel widget on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselId {
    Projects,
    Blogs,
}

impl CarouselId {
    pub const ALL: [CarouselId; 2] = [CarouselId::Projects, CarouselId::Blogs];

    /// Element id of the carousel root in page markup.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Projects => "projects-carousel",
            Self::Blogs => "blogs-carousel",
        }
    }

    /// Accepts either the element id or the short config name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "projects-carousel" | "projects" => Some(Self::Projects),
            "blogs-carousel" | "blogs" => Some(Self::Blogs),
            _ => None,
        }
    }

    /// CSS class of the card element inside each carousel item.
    pub fn card_class(self) -> &'static str {
        match self {
            Self::Projects => "project-card",
            Self::Blogs => "blog-card",
        }
    }

    /// Data resource whose records fill this carousel.
    pub fn resource(self) -> ResourceKind {
        match self {
            Self::Projects => ResourceKind::Projects,
            Self::Blogs => ResourceKind::Blogs,
        }
    }
}

/// One navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Maps the `-1`/`+1` step used by page markup; any other value is rejected.
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(Self::Prev),
            1 => Some(Self::Next),
            _ => None,
        }
    }

    pub fn step(self) -> i32 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Largest valid offset for `item_count` items in a window of `visible_items`.
pub fn max_offset(item_count: usize, visible_items: usize) -> usize {
    item_count.saturating_sub(visible_items)
}

pub fn clamp_offset(offset: usize, max: usize) -> usize {
    offset.min(max)
}

/// Horizontal translation in CSS pixels: `-offset * (item_width + gap)`.
pub fn translate_x_px(offset: usize, item_width_px: f64, gap_px: f64) -> f64 {
    let px = -(offset as f64) * (item_width_px + gap_px);
    // -0.0 would print as "-0px".
    if px == 0.0 {
        0.0
    } else {
        px
    }
}

/// CSS `transform` value for a translation.
pub fn transform_css(px: f64) -> String {
    let px = if px == 0.0 { 0.0 } else { px };
    format!("translateX({px}px)")
}

/// Disabled flags for the prev/next buttons of one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

pub fn nav_buttons(offset: usize, max: usize) -> NavButtons {
    NavButtons {
        prev_disabled: offset == 0,
        next_disabled: offset >= max,
    }
}

/// Everything the web layer needs to repaint one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub carousel: CarouselId,
    pub offset: usize,
    pub max_offset: usize,
    pub translate_x_px: f64,
    pub transform: String,
    pub buttons: NavButtons,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Track {
    offset: usize,
    item_count: usize,
}

/// Offsets and item counts for every carousel on the page.
#[derive(Debug, Clone)]
pub struct CarouselState {
    layout: CarouselLayout,
    tracks: BTreeMap<CarouselId, Track>,
}

impl CarouselState {
    pub fn new(layout: CarouselLayout) -> Self {
        let tracks = CarouselId::ALL
            .into_iter()
            .map(|id| (id, Track::default()))
            .collect();
        Self { layout, tracks }
    }

    pub fn layout(&self) -> CarouselLayout {
        self.layout
    }

    pub fn offset(&self, id: CarouselId) -> usize {
        self.track(id).offset
    }

    pub fn item_count(&self, id: CarouselId) -> usize {
        self.track(id).item_count
    }

    pub fn max_offset(&self, id: CarouselId) -> usize {
        max_offset(self.item_count(id), self.layout.visible_items)
    }

    /// Records how many cards a carousel holds and re-clamps its offset.
    pub fn set_item_count(&mut self, id: CarouselId, item_count: usize) {
        let max = max_offset(item_count, self.layout.visible_items);
        let track = self.tracks.entry(id).or_default();
        track.item_count = item_count;
        track.offset = clamp_offset(track.offset, max);
    }

    /// Moves one item in `direction`, clamped to the valid range.
    ///
    /// `item_width_px` is the measured width of one card, without the gap.
    pub fn move_by(
        &mut self,
        id: CarouselId,
        direction: Direction,
        item_width_px: f64,
    ) -> CarouselView {
        let max = self.max_offset(id);
        let track = self.tracks.entry(id).or_default();
        let moved = match direction {
            Direction::Prev => track.offset.saturating_sub(1),
            Direction::Next => track.offset.saturating_add(1),
        };
        track.offset = clamp_offset(moved, max);
        self.view(id, item_width_px)
    }

    /// Returns a carousel to its first item.
    pub fn reset(&mut self, id: CarouselId) -> CarouselView {
        self.tracks.entry(id).or_default().offset = 0;
        self.view(id, 0.0)
    }

    /// Resets every carousel; used when the viewport is resized.
    pub fn reset_all(&mut self) -> Vec<CarouselView> {
        CarouselId::ALL.into_iter().map(|id| self.reset(id)).collect()
    }

    /// Current view without changing state.
    pub fn view(&self, id: CarouselId, item_width_px: f64) -> CarouselView {
        let offset = self.offset(id);
        let max = self.max_offset(id);
        let px = translate_x_px(offset, item_width_px, self.layout.gap_px);
        CarouselView {
            carousel: id,
            offset,
            max_offset: max,
            translate_x_px: px,
            transform: transform_css(px),
            buttons: nav_buttons(offset, max),
        }
    }

    fn track(&self, id: CarouselId) -> Track {
        self.tracks.get(&id).copied().unwrap_or_default()
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(CarouselLayout::default())
    }
}
