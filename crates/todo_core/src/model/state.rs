//! Explicit application state threaded through every handler call.

use crate::model::filter::Filter;
use crate::model::item_list::ItemList;

/// The item list plus the current display filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub items: ItemList,
    pub filter: Filter,
}

impl TodoState {
    /// Builds startup state from loaded items with the filter at `All`.
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            filter: Filter::All,
        }
    }

    /// Drops completed items and resets the filter to `All`.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.items.clear_completed();
        self.filter = Filter::All;
        removed
    }
}
