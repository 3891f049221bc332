//! Stable wire identifiers for the track fields predicates may reference.
//! These are the only key paths the canonical allow-list ever resolves.

pub const TAG_IDS: &str = "Track.tagIds";
pub const ARTIST_IDS: &str = "Track.artistIds";
pub const VOCAL_LEVEL: &str = "Track.vocalLevel";
pub const IS_DISLIKED: &str = "Track.isDisliked";
pub const RELEASED_AT: &str = "Track.releasedAt";
pub const HAS_MARKERS: &str = "Track.hasMarkers";
pub const DURATION_SECONDS: &str = "Track.durationSeconds";
