//! Id → item lookup used by the popup.
//!
//! # Invariants
//! - Rebuilt from scratch on every load; never patched in place.
//! - On duplicate ids the later record wins (projects first, then blogs).

use crate::model::item::Item;
use log::warn;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    items: HashMap<String, Item>,
}

impl ItemIndex {
    /// Builds an index from ordered item groups.
    pub fn build<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a [Item]>,
    {
        let mut items = HashMap::new();
        for group in groups {
            for item in group {
                if items.insert(item.id.clone(), item.clone()).is_some() {
                    warn!(
                        "event=item_index_duplicate module=data status=replaced item_id={}",
                        item.id
                    );
                }
            }
        }
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ItemIndex;
    use crate::model::item::Item;

    fn item(id: &str, title: &str) -> Item {
        Item::new(id, title, "desc", "tech").expect("valid item")
    }

    #[test]
    fn later_groups_replace_duplicate_ids() {
        let projects = vec![item("shared", "project"), item("p2", "other")];
        let blogs = vec![item("shared", "blog")];
        let index = ItemIndex::build([projects.as_slice(), blogs.as_slice()]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("shared").map(|i| i.title.as_str()), Some("blog"));
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn default_index_is_empty() {
        assert!(ItemIndex::default().is_empty());
    }
}
