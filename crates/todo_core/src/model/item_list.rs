//! In-memory ordered item collection.
//!
//! # Responsibility
//! - Own the item sequence and expose query/mutation operations.
//! - Resolve item positions from identifiers.
//!
//! # Invariants
//! - Insertion order is display order.
//! - No stored item ever has an empty trimmed title.
//! - Out-of-range positions are no-ops, never panics.

use crate::model::filter::Filter;
use crate::model::item::{Item, ItemId};
use log::debug;

/// Result of [`ItemList::update_item_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleUpdate {
    /// Title replaced with the trimmed value.
    Renamed,
    /// New title trimmed to nothing so the item was deleted.
    Removed(Item),
    /// No item at the given position.
    Missing,
}

/// Ordered sequence of to-do items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Items with `completed == false`, in list order.
    pub fn active_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| !item.completed).collect()
    }

    /// Items with `completed == true`, in list order.
    pub fn completed_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.completed).collect()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.len() - self.active_count()
    }

    /// Subset visible under `filter`, in list order.
    pub fn filtered_items(&self, filter: Filter) -> Vec<&Item> {
        match filter {
            Filter::Active => self.active_items(),
            Filter::Completed => self.completed_items(),
            Filter::All => self.items.iter().collect(),
        }
    }

    /// Appends a new active item and returns its identifier.
    ///
    /// Returns `None` without touching the list when `title` trims to nothing.
    pub fn add_item(&mut self, title: &str) -> Option<ItemId> {
        let item = Item::new(title).ok()?;
        let id = item.id.clone();
        self.items.push(item);
        debug!(
            "event=item_add module=model status=ok id={} count={}",
            id,
            self.items.len()
        );
        Some(id)
    }

    /// Returns the position of the last item whose `id` matches.
    ///
    /// Scans from the end of the list.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().rposition(|item| item.id == id)
    }

    /// Flips `completed` at `index`. Returns `false` when out of range.
    pub fn toggle_item(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Sets every item's `completed` flag.
    pub fn toggle_all(&mut self, completed: bool) {
        for item in &mut self.items {
            item.completed = completed;
        }
    }

    /// Replaces the title at `index`, deleting the item when the new title is blank.
    pub fn update_item_title(&mut self, index: usize, new_title: &str) -> TitleUpdate {
        if index >= self.items.len() {
            return TitleUpdate::Missing;
        }

        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return TitleUpdate::Removed(self.items.remove(index));
        }

        self.items[index].title = trimmed.to_string();
        TitleUpdate::Renamed
    }

    /// Deletes and returns the item at `index`.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Drops every completed item and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(Item::is_active);
        before - self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemList, TitleUpdate};
    use crate::model::item::Item;

    fn list_with(titles: &[&str]) -> ItemList {
        let mut list = ItemList::new();
        for title in titles {
            list.add_item(title).unwrap();
        }
        list
    }

    #[test]
    fn index_of_prefers_last_duplicate_id() {
        let list = ItemList::from_items(vec![
            Item::with_id("dup", "first").unwrap(),
            Item::with_id("other", "second").unwrap(),
            Item::with_id("dup", "third").unwrap(),
        ]);
        assert_eq!(list.index_of("dup"), Some(2));
        assert_eq!(list.index_of("missing"), None);
    }

    #[test]
    fn out_of_range_positions_are_noops() {
        let mut list = list_with(&["a"]);
        assert!(!list.toggle_item(5));
        assert_eq!(list.update_item_title(5, "x"), TitleUpdate::Missing);
        assert!(list.remove_item(5).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn update_title_trims_value() {
        let mut list = list_with(&["a"]);
        assert_eq!(list.update_item_title(0, "  renamed "), TitleUpdate::Renamed);
        assert_eq!(list.items()[0].title, "renamed");
    }

    #[test]
    fn counts_track_completion() {
        let mut list = list_with(&["a", "b", "c"]);
        list.toggle_item(1);
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.completed_count(), 1);
    }
}
