//! To-do domain model.
//!
//! # Responsibility
//! - Define the item record, the ordered item list and the display filter.
//! - Keep all list mutations behind `ItemList` operations.
//!
//! # Invariants
//! - Every item is identified by an id assigned once at creation.
//! - Deletion is permanent; there are no tombstones.

pub mod filter;
pub mod item;
pub mod item_list;
pub mod state;
