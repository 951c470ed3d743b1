//! DOM-free render models for cards and timeline rows.
//!
//! The web layer turns these into elements; all strings here are plain text
//! and must be written through `textContent`.

use crate::carousel::CarouselId;
use crate::model::background::BackgroundEntry;
use crate::model::business::BusinessEntry;
use crate::model::item::Item;

pub const CAROUSEL_ITEM_CLASS: &str = "carousel-item";
pub const HISTORY_ITEM_CLASS: &str = "history-item";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const BUSINESS_IMAGE_SRC: &str = "assets/images/shop.png";

/// Card summary: the first `max_chars` characters followed by `...`.
///
/// The ellipsis is appended even for short descriptions.
pub fn card_summary(description: &str, max_chars: usize) -> String {
    let mut summary: String = description.chars().take(max_chars).collect();
    summary.push_str("...");
    summary
}

/// One carousel card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub item_id: String,
    pub card_class: &'static str,
    pub title: String,
    pub summary: String,
}

pub fn carousel_cards(carousel: CarouselId, items: &[Item], summary_chars: usize) -> Vec<CardView> {
    items
        .iter()
        .map(|item| CardView {
            item_id: item.id.clone(),
            card_class: carousel.card_class(),
            title: item.title.clone(),
            summary: card_summary(&item.description, summary_chars),
        })
        .collect()
}

/// One timeline row as `(class, text)` cells in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub cells: [(&'static str, String); 4],
}

pub fn timeline_rows(entries: &[BackgroundEntry]) -> Vec<TimelineRow> {
    entries
        .iter()
        .map(|entry| TimelineRow {
            cells: [
                ("year", entry.year.clone()),
                ("title", entry.title.clone()),
                ("subtitle", entry.subtitle.clone()),
                ("description", entry.description.clone()),
            ],
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCard {
    pub title: String,
    pub text: String,
    pub image_src: &'static str,
}

pub fn business_cards(entries: &[BusinessEntry]) -> Vec<BusinessCard> {
    entries
        .iter()
        .map(|entry| BusinessCard {
            title: entry.title.clone(),
            text: entry.desc.clone(),
            image_src: BUSINESS_IMAGE_SRC,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{business_cards, card_summary, carousel_cards, timeline_rows};
    use crate::carousel::CarouselId;
    use crate::model::background::BackgroundEntry;
    use crate::model::business::BusinessEntry;
    use crate::model::item::Item;

    #[test]
    fn summary_truncates_by_characters_not_bytes() {
        let text = "é".repeat(150);
        let summary = card_summary(&text, 100);
        assert_eq!(summary.chars().count(), 103);
        assert!(summary.ends_with("..."));

        assert_eq!(card_summary("short", 100), "short...");
    }

    #[test]
    fn cards_carry_carousel_class_and_item_id() {
        let items = vec![Item::new("b1", "Post", "Body text", "Prose").expect("valid")];
        let cards = carousel_cards(CarouselId::Blogs, &items, 4);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card_class, "blog-card");
        assert_eq!(cards[0].item_id, "b1");
        assert_eq!(cards[0].summary, "Body...");
    }

    #[test]
    fn timeline_rows_keep_display_order() {
        let entries = vec![BackgroundEntry {
            year: "2022".to_string(),
            title: "Engineer".to_string(),
            subtitle: "Acme".to_string(),
            description: "Built things".to_string(),
        }];
        let rows = timeline_rows(&entries);
        let classes: Vec<&str> = rows[0].cells.iter().map(|(class, _)| *class).collect();
        assert_eq!(classes, ["year", "title", "subtitle", "description"]);
        assert_eq!(rows[0].cells[0].1, "2022");
    }

    #[test]
    fn business_cards_use_shop_image() {
        let cards = business_cards(&[BusinessEntry {
            title: "Bakery".to_string(),
            desc: "Fresh bread".to_string(),
        }]);
        assert_eq!(cards[0].image_src, "assets/images/shop.png");
        assert_eq!(cards[0].text, "Fresh bread");
    }
}
