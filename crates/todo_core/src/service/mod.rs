//! Interaction services.
//!
//! # Responsibility
//! - Dispatch UI signals into model mutations.
//! - Bind navigation paths to the display filter.
//! - Wire state, store, renderer and controller into one application.

pub mod app;
pub mod controller;
pub mod router;
