//! Business listing entries for the storefront page.

use serde::{Deserialize, Serialize};

/// One business card: a title and a short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessEntry {
    pub title: String,
    #[serde(default)]
    pub desc: String,
}
