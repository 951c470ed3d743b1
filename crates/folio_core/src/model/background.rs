//! Background timeline entries.

use crate::model::item::deserialize_text;
use serde::{Deserialize, Serialize};

/// One row of the history timeline.
///
/// `year` keeps whatever label the data file carries ("2021", "2019 - 2022").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundEntry {
    #[serde(deserialize_with = "deserialize_text")]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
}
