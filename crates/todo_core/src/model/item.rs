//! To-do item domain model.
//!
//! # Responsibility
//! - Define the sole persisted record (`id`, `title`, `completed`).
//! - Generate fresh random identifiers for new items.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes afterwards.
//! - `title` is never empty or whitespace-only while stored.
//! - Deserialization enforces the same invariants as the constructors.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque item identifier.
///
/// Freshly created items use a hyphenated random v4 token, but loaded data may
/// carry any non-empty string.
pub type ItemId = String;

/// Generates a 36-character `8-4-4-4-12` random token.
///
/// The version nibble is fixed to `4` and the variant bits to `10xx`.
/// Uniqueness against existing items is not checked.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4().hyphenated().to_string()
}

/// Validation failures for item construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyId,
    EmptyTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "item id must not be empty"),
            Self::EmptyTitle => write!(f, "item title must not be empty after trimming"),
        }
    }
}

impl Error for ItemValidationError {}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

/// Raw wire shape used only to route deserialization through validation.
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    completed: bool,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemValidationError;

    fn try_from(value: ItemRecord) -> Result<Self, Self::Error> {
        let item = Self {
            id: value.id,
            title: value.title,
            completed: value.completed,
        };
        item.validate()?;
        Ok(item)
    }
}

impl Item {
    /// Creates an active item with a generated identifier.
    ///
    /// The title is stored trimmed.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` trims to nothing.
    pub fn new(title: &str) -> Result<Self, ItemValidationError> {
        Self::with_id(new_item_id(), title)
    }

    /// Creates an active item with a caller-provided identifier.
    ///
    /// `id` is kept as given; only emptiness is rejected.
    pub fn with_id(id: impl Into<ItemId>, title: &str) -> Result<Self, ItemValidationError> {
        let item = Self {
            id: id.into(),
            title: title.trim().to_string(),
            completed: false,
        };
        item.validate()?;
        Ok(item)
    }

    /// Validates stored-state invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_empty() {
            return Err(ItemValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns whether this item still needs doing.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::{new_item_id, Item, ItemValidationError};

    #[test]
    fn new_item_id_has_v4_layout() {
        let id = new_item_id();
        assert_eq!(id.len(), 36);

        let groups = id.split('-').map(str::len).collect::<Vec<_>>();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);

        let hex = id.replace('-', "");
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hex.as_bytes()[12], b'4');
        assert!(matches!(hex.as_bytes()[16], b'8' | b'9' | b'a' | b'b'));
    }

    #[test]
    fn new_trims_title_and_starts_active() {
        let item = Item::new("  buy milk  ").unwrap();
        assert_eq!(item.title, "buy milk");
        assert!(!item.completed);
        assert!(item.is_active());
    }

    #[test]
    fn new_rejects_blank_title() {
        assert_eq!(Item::new("   ").unwrap_err(), ItemValidationError::EmptyTitle);
        assert_eq!(Item::new("").unwrap_err(), ItemValidationError::EmptyTitle);
    }

    #[test]
    fn with_id_rejects_empty_id() {
        assert_eq!(
            Item::with_id("", "title").unwrap_err(),
            ItemValidationError::EmptyId
        );
    }

    #[test]
    fn with_id_keeps_caller_identifier_verbatim() {
        let item = Item::with_id("legacy id-7", " restored ").unwrap();
        assert_eq!(item.id, "legacy id-7");
        assert_eq!(item.title, "restored");
        assert!(item.is_active());
    }
}
