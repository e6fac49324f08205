//! Presentation layer.
//!
//! # Responsibility
//! - Turn `TodoState` into markup through pure templates.
//! - Push markup and region state to a `Surface`.

pub mod render;
pub mod surface;
pub mod templates;
