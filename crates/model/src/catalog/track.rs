use crate::catalog::vocal::VocalLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator for the flattened membership id strings on [`Track`].
pub const ID_SEPARATOR: &str = "_";

/// Named position inside a track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub emoji: Option<String>,
    pub name: Option<String>,
    pub position_seconds: f64,
}

impl Marker {
    pub fn new(emoji: Option<String>, name: Option<String>, position_seconds: f64) -> Self {
        Marker {
            emoji: emoji.filter(|e| !e.is_empty()),
            name: name.filter(|n| !n.is_empty()),
            position_seconds,
        }
    }
}

/// A track in the local catalog.
///
/// Tag and artist memberships are flattened into separator-joined id strings
/// (`tag_ids`, `artist_ids`) so the query layer can express membership as
/// substring containment; `has_markers` is likewise precomputed. The
/// constructor derives all three.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,

    pub vocal_level_value: i64,
    pub released_at: f64,
    pub is_disliked: bool,
    pub duration_seconds: f64,

    pub play_count: u32,
    pub skip_count: u32,
    pub last_played_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,

    pub markers: Vec<Marker>,

    pub tag_ids: String,
    pub artist_ids: String,
    pub has_markers: bool,
}

impl Track {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        vocal_level: VocalLevel,
        released_at: f64,
        is_disliked: bool,
        duration_seconds: f64,
        tag_ids: Vec<String>,
        artist_ids: Vec<String>,
        markers: Vec<Marker>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let has_markers = !markers.is_empty();
        Track {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            vocal_level_value: vocal_level.code(),
            released_at,
            is_disliked,
            duration_seconds,
            play_count: 0,
            skip_count: 0,
            last_played_at: None,
            created_at,
            markers,
            tag_ids: tag_ids.join(ID_SEPARATOR),
            artist_ids: artist_ids.join(ID_SEPARATOR),
            has_markers,
        }
    }

    pub fn vocal_level(&self) -> Option<VocalLevel> {
        VocalLevel::from_code(self.vocal_level_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_with(tags: Vec<String>, markers: Vec<Marker>) -> Track {
        Track::new(
            "t1",
            "Title",
            "Artist",
            "Album",
            VocalLevel::Instrumental,
            0.0,
            false,
            180.0,
            tags,
            vec!["a1".to_string(), "a2".to_string()],
            markers,
            Utc::now(),
        )
    }

    #[test]
    fn test_membership_strings_joined() {
        let track = track_with(vec!["x".to_string(), "y".to_string()], vec![]);
        assert_eq!(track.tag_ids, "x_y");
        assert_eq!(track.artist_ids, "a1_a2");
    }

    #[test]
    fn test_has_markers_derived() {
        let without = track_with(vec![], vec![]);
        assert!(!without.has_markers);

        let with = track_with(vec![], vec![Marker::new(None, None, 30.0)]);
        assert!(with.has_markers);
    }

    #[test]
    fn test_marker_normalizes_empty_strings() {
        let marker = Marker::new(Some(String::new()), Some("Drop".to_string()), 61.5);
        assert_eq!(marker.emoji, None);
        assert_eq!(marker.name.as_deref(), Some("Drop"));
    }
}
