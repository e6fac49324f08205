//! Persistence boundary.
//!
//! # Responsibility
//! - Define the key-value slot contract and its implementations.
//! - Encode the item list into a single JSON slot.
//!
//! # Invariants
//! - Writes go through `Item` serialization; reads go through `Item` validation.

pub mod kv_store;
pub mod todo_store;
