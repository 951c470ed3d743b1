//! Portfolio item model shared by project and blog carousels.
//!
//! # Responsibility
//! - Define the canonical record behind one carousel card and its popup.
//! - Accept the loose JSON shapes hand-edited data files tend to carry.
//!
//! # Invariants
//! - `id` is never blank after trimming.
//! - `duration` and `link` are `None` instead of empty strings.
//!
//! # See also
//! - data/projects.json, data/blogs.json

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier used to bind a card to its popup content.
pub type ItemId = String;

/// One project or blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Display text; list-shaped JSON is joined with `", "`.
    pub technologies: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Validation errors for item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    BlankId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "item id must not be blank"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates an item with required fields and no optional rows.
    ///
    /// # Errors
    /// - Returns `ItemValidationError::BlankId` when `id` is blank.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            id: id.into().trim().to_string(),
            title: title.into(),
            description: description.into(),
            technologies: technologies.into(),
            duration: None,
            link: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Sets the optional duration row; blank input clears it.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = non_blank(Some(duration.into()));
        self
    }

    /// Sets the optional link row; blank input clears it.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = non_blank(Some(link.into()));
        self
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.trim().is_empty() {
            return Err(ItemValidationError::BlankId);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawItem {
    id: StringOrNumber,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    technologies: Option<TextOrList>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl TryFrom<RawItem> for Item {
    type Error = ItemValidationError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let item = Self {
            id: raw.id.into_string().trim().to_string(),
            title: raw.title,
            description: raw.description,
            technologies: raw.technologies.map(TextOrList::joined).unwrap_or_default(),
            duration: non_blank(raw.duration),
            link: non_blank(raw.link),
        };
        item.validate()?;
        Ok(item)
    }
}

/// JSON scalar that is rendered as text regardless of its wire type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl StringOrNumber {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn joined(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::List(values) => values.join(", "),
        }
    }
}

pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};

    #[test]
    fn new_trims_id_and_rejects_blank() {
        let item = Item::new(" p1 ", "Title", "Body", "Rust").expect("valid item");
        assert_eq!(item.id, "p1");

        let err = Item::new("   ", "Title", "Body", "Rust").expect_err("blank id");
        assert_eq!(err, ItemValidationError::BlankId);
    }

    #[test]
    fn builder_treats_blank_optionals_as_absent() {
        let item = Item::new("p1", "t", "d", "x")
            .expect("valid item")
            .with_duration("  ")
            .with_link("");
        assert_eq!(item.duration, None);
        assert_eq!(item.link, None);
    }

    #[test]
    fn deserialize_accepts_numeric_id_and_technology_list() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Scheduler",
            "description": "Cron replacement",
            "technologies": ["Rust", "Tokio"],
            "duration": "",
            "link": "https://github.com/me/scheduler"
        }))
        .expect("item should decode");

        assert_eq!(item.id, "7");
        assert_eq!(item.technologies, "Rust, Tokio");
        assert_eq!(item.duration, None);
        assert_eq!(item.link.as_deref(), Some("https://github.com/me/scheduler"));
    }

    #[test]
    fn deserialize_rejects_blank_id() {
        let err = serde_json::from_value::<Item>(serde_json::json!({
            "id": " ",
            "title": "x",
            "description": "y",
            "technologies": "z"
        }))
        .expect_err("blank id must fail");
        assert!(err.to_string().contains("item id must not be blank"));
    }
}
