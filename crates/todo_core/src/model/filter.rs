//! Display filter selected by the current route.

use serde::{Deserialize, Serialize};

/// Route segment for [`Filter::All`].
pub const FILTER_ALL: &str = "all";
/// Route segment for [`Filter::Active`].
pub const FILTER_ACTIVE: &str = "active";
/// Route segment for [`Filter::Completed`].
pub const FILTER_COMPLETED: &str = "completed";

/// Active view selector. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Maps a route segment to a filter.
    ///
    /// Unknown segments fall back to `All`, which shows the full list.
    pub fn from_segment(segment: &str) -> Self {
        match segment.trim() {
            FILTER_ACTIVE => Self::Active,
            FILTER_COMPLETED => Self::Completed,
            _ => Self::All,
        }
    }

    /// Stable route segment for this filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Active => FILTER_ACTIVE,
            Self::Completed => FILTER_COMPLETED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;

    #[test]
    fn from_segment_maps_known_values_and_defaults_to_all() {
        assert_eq!(Filter::from_segment("active"), Filter::Active);
        assert_eq!(Filter::from_segment("completed"), Filter::Completed);
        assert_eq!(Filter::from_segment("all"), Filter::All);
        assert_eq!(Filter::from_segment("archived"), Filter::All);
        assert_eq!(Filter::from_segment(""), Filter::All);
    }

    #[test]
    fn as_str_roundtrips_through_from_segment() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(Filter::from_segment(filter.as_str()), filter);
        }
    }
}
