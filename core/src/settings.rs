//! Viewer settings.
//!
//! These live in the host's settings persistence; this library only reads
//! them, and takes them as explicit parameters so the transforms stay pure.

use serde::{Deserialize, Serialize};

/// Which end of the role hierarchy sorts first in a member's role list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest position first.
    #[default]
    HighestFirst,
    /// Lowest position first.
    LowestFirst,
    /// Unrecognized persisted value; sorting leaves input order unchanged.
    #[serde(other)]
    Unspecified,
}

/// Persisted viewer settings, read fresh at every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Role list ordering for member targets.
    pub sort_order: SortOrder,
    /// Whether the permissions dropdown opens expanded.
    pub default_expanded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sorts_highest_first() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.sort_order, SortOrder::HighestFirst);
        assert!(!settings.default_expanded);
    }

    #[test]
    fn test_deserialize_known_values() {
        let settings: ViewerSettings =
            serde_json::from_str(r#"{"sort_order": "lowest_first", "default_expanded": true}"#)
                .unwrap();
        assert_eq!(settings.sort_order, SortOrder::LowestFirst);
        assert!(settings.default_expanded);
    }

    #[test]
    fn test_unrecognized_sort_order_degrades() {
        // A stale persisted value must not fail deserialization; it maps to
        // the no-sort fallback instead.
        let settings: ViewerSettings =
            serde_json::from_str(r#"{"sort_order": "by_color"}"#).unwrap();
        assert_eq!(settings.sort_order, SortOrder::Unspecified);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ViewerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ViewerSettings::default());
    }
}
