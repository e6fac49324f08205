//! Full render pass from state to display.
//!
//! # Responsibility
//! - Recompute every display region from the item list and filter.
//! - Persist the full list after each pass.
//!
//! # Invariants
//! - One call rewrites every region; there is no partial patching.
//! - Main section and footer visibility follow the unfiltered list.
//! - "Toggle all" is checked exactly when no item is active.

use crate::model::state::TodoState;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use crate::repo::todo_store::TodoStore;
use crate::view::surface::Surface;
use crate::view::templates::{pluralize, FooterContext, Templates};
use log::debug;

const ITEM_WORD: &str = "item";

/// Render engine wrapping a templating implementation.
pub struct Renderer<T: Templates> {
    templates: T,
}

impl<T: Templates> Renderer<T> {
    pub fn new(templates: T) -> Self {
        Self { templates }
    }

    /// Builds the footer template input for `state`.
    pub fn footer_context(state: &TodoState) -> FooterContext {
        let active = state.items.active_count();
        FooterContext {
            active_todo_count: active,
            active_todo_word: pluralize(active, ITEM_WORD),
            completed_todos: state.items.len() - active,
            filter: state.filter,
        }
    }

    /// Writes every region of `surface` from `state`, then saves the list.
    ///
    /// # Errors
    /// - Propagates store write failures; the display is already updated.
    pub fn render<S: KeyValueStore>(
        &self,
        state: &TodoState,
        surface: &mut dyn Surface,
        store: &mut TodoStore<S>,
    ) -> StoreResult<()> {
        let visible = state.items.filtered_items(state.filter);
        surface.set_list_markup(self.templates.list(&visible));

        let has_items = !state.items.is_empty();
        surface.set_main_visible(has_items);
        surface.set_toggle_all_checked(state.items.active_count() == 0);

        self.render_footer(state, surface);
        surface.focus_entry();

        debug!(
            "event=render module=view status=ok filter={} visible={} total={}",
            state.filter.as_str(),
            visible.len(),
            state.items.len()
        );

        store.save(state.items.items())
    }

    fn render_footer(&self, state: &TodoState, surface: &mut dyn Surface) {
        if state.items.is_empty() {
            surface.set_footer_visible(false);
            return;
        }

        let context = Self::footer_context(state);
        surface.set_footer_markup(self.templates.footer(&context));
        surface.set_footer_visible(true);
    }
}
