//! Core logic for a single-page to-do list.
//! Owns the item model, persistence, rendering and signal dispatch.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::Filter;
pub use model::item::{new_item_id, Item, ItemId, ItemValidationError};
pub use model::item_list::{ItemList, TitleUpdate};
pub use model::state::TodoState;
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use repo::todo_store::{TodoStore, DEFAULT_STORAGE_KEY};
pub use service::app::TodoApp;
pub use service::controller::{
    Dispatch, EditSession, EventController, Key, Origin, Region, Role, Signal, SignalKind,
    ENTER_KEY, ESCAPE_KEY,
};
pub use service::router::{RouteError, Router, FILTER_ROUTE, INITIAL_ROUTE};
pub use view::render::Renderer;
pub use view::surface::{Focus, MemorySurface, Surface};
pub use view::templates::{pluralize, FooterContext, HtmlTemplates, Templates};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
