//! Details popup view model.
//!
//! # Responsibility
//! - Turn an indexed item into the text and row visibility of the popup.
//! - Track whether the overlay is open.
//!
//! # Invariants
//! - `show` for an unknown id returns `None` and leaves state untouched.
//! - Optional rows are hidden exactly when the item lacks the field.

use crate::data::index::ItemIndex;
use crate::model::item::Item;

pub const GITHUB_LINK_LABEL: &str = "View on GitHub";
pub const ARTICLE_LINK_LABEL: &str = "Read Article";

/// Label of the popup link for `url`.
pub fn link_label(url: &str) -> &'static str {
    if url.contains("github") {
        GITHUB_LINK_LABEL
    } else {
        ARTICLE_LINK_LABEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLink {
    pub href: String,
    pub label: &'static str,
}

/// Content of the popup for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub item_id: String,
    pub title: String,
    pub description: String,
    pub technologies: String,
    /// `None` hides the duration row.
    pub duration: Option<String>,
    /// `None` hides the link row.
    pub link: Option<PopupLink>,
}

impl PopupView {
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            technologies: item.technologies.clone(),
            duration: item.duration.clone(),
            link: item.link.as_ref().map(|href| PopupLink {
                href: href.clone(),
                label: link_label(href),
            }),
        }
    }
}

/// Open/closed state of the overlay.
#[derive(Debug, Clone, Default)]
pub struct PopupState {
    open_item: Option<String>,
}

impl PopupState {
    /// Opens the popup for `item_id` when it is indexed.
    pub fn show(&mut self, index: &ItemIndex, item_id: &str) -> Option<PopupView> {
        let item = index.get(item_id)?;
        self.open_item = Some(item.id.clone());
        Some(PopupView::from_item(item))
    }

    /// Closes the popup; returns whether it was open.
    pub fn hide(&mut self) -> bool {
        self.open_item.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open_item.is_some()
    }

    pub fn open_item(&self) -> Option<&str> {
        self.open_item.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{link_label, PopupState, ARTICLE_LINK_LABEL, GITHUB_LINK_LABEL};
    use crate::data::index::ItemIndex;
    use crate::model::item::Item;

    fn index() -> ItemIndex {
        let items = vec![
            Item::new("repo", "Repo", "A repo", "Rust")
                .expect("valid")
                .with_duration("3 months")
                .with_link("https://github.com/me/repo"),
            Item::new("post", "Post", "A post", "Writing")
                .expect("valid")
                .with_link("https://blog.example.com/post"),
            Item::new("bare", "Bare", "No extras", "None").expect("valid"),
        ];
        ItemIndex::build([items.as_slice()])
    }

    #[test]
    fn link_label_depends_on_github_substring() {
        assert_eq!(link_label("https://github.com/a/b"), GITHUB_LINK_LABEL);
        assert_eq!(link_label("https://gist.github.com/a"), GITHUB_LINK_LABEL);
        assert_eq!(link_label("https://medium.com/@me/post"), ARTICLE_LINK_LABEL);
    }

    #[test]
    fn show_fills_rows_from_optional_fields() {
        let index = index();
        let mut popup = PopupState::default();

        let view = popup.show(&index, "repo").expect("indexed item");
        assert_eq!(view.title, "Repo");
        assert_eq!(view.duration.as_deref(), Some("3 months"));
        let link = view.link.expect("link row shown");
        assert_eq!(link.label, GITHUB_LINK_LABEL);
        assert_eq!(link.href, "https://github.com/me/repo");
        assert!(popup.is_open());

        let view = popup.show(&index, "post").expect("indexed item");
        assert_eq!(view.duration, None);
        assert_eq!(view.link.map(|l| l.label), Some(ARTICLE_LINK_LABEL));

        let view = popup.show(&index, "bare").expect("indexed item");
        assert_eq!(view.link, None);
        assert_eq!(popup.open_item(), Some("bare"));
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let index = index();
        let mut popup = PopupState::default();
        assert!(popup.show(&index, "nope").is_none());
        assert!(!popup.is_open());

        popup.show(&index, "repo");
        assert!(popup.show(&index, "nope").is_none());
        assert_eq!(popup.open_item(), Some("repo"));
    }

    #[test]
    fn hide_reports_previous_state() {
        let index = index();
        let mut popup = PopupState::default();
        assert!(!popup.hide());
        popup.show(&index, "repo");
        assert!(popup.hide());
        assert!(!popup.is_open());
    }
}
