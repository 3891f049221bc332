use crate::catalog::track::Track;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
    Shuffled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortProperty {
    DateTagged,
    DateReleased,
    DateLastPlayed,
    PlayCount,
    SkipCount,
    Duration,
    Shuffled,
}

/// Requested ordering of the filtered result set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub direction: SortDirection,
    pub property: SortProperty,
}

impl SortOrder {
    pub fn shuffled() -> Self {
        SortOrder {
            direction: SortDirection::Shuffled,
            property: SortProperty::Shuffled,
        }
    }

    /// Resolve into the concrete sort keys the executor applies. Shuffling
    /// itself happens downstream; here it degrades to the tagging date.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        let ascending = !matches!(self.direction, SortDirection::Descending);
        let field = match self.property {
            SortProperty::DateTagged => SortField::CreatedAt,
            SortProperty::DateReleased => SortField::ReleasedAt,
            SortProperty::DateLastPlayed => SortField::LastPlayedAt,
            SortProperty::PlayCount => SortField::PlayCount,
            SortProperty::SkipCount => SortField::SkipCount,
            SortProperty::Duration => SortField::Duration,
            SortProperty::Shuffled => SortField::CreatedAt,
        };
        vec![SortKey { field, ascending }]
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder {
            direction: SortDirection::Descending,
            property: SortProperty::DateTagged,
        }
    }
}

/// Track field an ordering resolves to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    CreatedAt,
    ReleasedAt,
    LastPlayedAt,
    PlayCount,
    SkipCount,
    Duration,
}

/// One resolved sort descriptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub ascending: bool,
}

impl SortKey {
    pub fn compare(&self, a: &Track, b: &Track) -> Ordering {
        let ordering = match self.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::ReleasedAt => a
                .released_at
                .partial_cmp(&b.released_at)
                .unwrap_or(Ordering::Equal),
            SortField::LastPlayedAt => a.last_played_at.cmp(&b.last_played_at),
            SortField::PlayCount => a.play_count.cmp(&b.play_count),
            SortField::SkipCount => a.skip_count.cmp(&b.skip_count),
            SortField::Duration => a
                .duration_seconds
                .partial_cmp(&b.duration_seconds)
                .unwrap_or(Ordering::Equal),
        };
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_order() {
        let order = SortOrder::default();
        assert_eq!(order.direction, SortDirection::Descending);
        assert_eq!(order.property, SortProperty::DateTagged);
    }

    #[test]
    fn test_shuffled_resolves_to_created_at() {
        let keys = SortOrder::shuffled().sort_keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].field, SortField::CreatedAt);
        assert!(keys[0].ascending);
    }

    #[test]
    fn test_descending_reverses() {
        let order = SortOrder {
            direction: SortDirection::Descending,
            property: SortProperty::PlayCount,
        };
        let keys = order.sort_keys();
        assert_eq!(keys[0].field, SortField::PlayCount);
        assert!(!keys[0].ascending);
    }
}
