use crate::fields;
use lazy_static::lazy_static;
use model::catalog::track::Track;
use model::core::value::{ScalarType, Value};
use std::collections::HashMap;

/// Accessor for one of the track fields exposed to predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    TagIds,
    ArtistIds,
    VocalLevel,
    IsDisliked,
    ReleasedAt,
    HasMarkers,
    DurationSeconds,
}

impl TrackField {
    pub fn value_of(&self, track: &Track) -> Value {
        match self {
            TrackField::TagIds => Value::String(track.tag_ids.clone()),
            TrackField::ArtistIds => Value::String(track.artist_ids.clone()),
            TrackField::VocalLevel => Value::Int(track.vocal_level_value),
            TrackField::IsDisliked => Value::Bool(track.is_disliked),
            TrackField::ReleasedAt => Value::Double(track.released_at),
            TrackField::HasMarkers => Value::Bool(track.has_markers),
            TrackField::DurationSeconds => Value::Double(track.duration_seconds),
        }
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            TrackField::TagIds | TrackField::ArtistIds => ScalarType::String,
            TrackField::VocalLevel => ScalarType::Int,
            TrackField::IsDisliked | TrackField::HasMarkers => ScalarType::Bool,
            TrackField::ReleasedAt | TrackField::DurationSeconds => ScalarType::Double,
        }
    }
}

/// What one allow-list entry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub owner: &'static str,
    pub field: TrackField,
    pub scalar: ScalarType,
}

/// Explicit capability safelist consulted while decoding field references.
///
/// Absence of an identifier fails the whole reconstruction; this is how the
/// decoder refuses to resolve references that were never deliberately
/// exposed. Immutable after construction and safely shared across threads.
#[derive(Debug, Clone, Default)]
pub struct FieldAllowList {
    entries: HashMap<String, FieldDef>,
}

impl FieldAllowList {
    pub fn new() -> Self {
        FieldAllowList::default()
    }

    pub fn allow(&mut self, identifier: impl Into<String>, field: TrackField) {
        self.entries.insert(
            identifier.into(),
            FieldDef {
                owner: "Track",
                field,
                scalar: field.scalar_type(),
            },
        );
    }

    pub fn resolve(&self, identifier: &str) -> Option<&FieldDef> {
        self.entries.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The canonical catalog safelist: exactly the seven track fields the
    /// filter pipeline compiles against.
    pub fn track_catalog() -> Self {
        let mut list = FieldAllowList::new();
        list.allow(fields::TAG_IDS, TrackField::TagIds);
        list.allow(fields::ARTIST_IDS, TrackField::ArtistIds);
        list.allow(fields::VOCAL_LEVEL, TrackField::VocalLevel);
        list.allow(fields::IS_DISLIKED, TrackField::IsDisliked);
        list.allow(fields::RELEASED_AT, TrackField::ReleasedAt);
        list.allow(fields::HAS_MARKERS, TrackField::HasMarkers);
        list.allow(fields::DURATION_SECONDS, TrackField::DurationSeconds);
        list
    }
}

lazy_static! {
    /// Process-wide canonical allow-list, built once and borrowed by callers.
    pub static ref TRACK_ALLOW_LIST: FieldAllowList = FieldAllowList::track_catalog();
}
