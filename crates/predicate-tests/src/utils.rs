//! Shared builders and a direct (non-compiled) evaluation of filter specs,
//! used as the behavioral reference for round-trip tests.

use chrono::{TimeZone, Utc};
use model::catalog::tag::{TagKind, TagRef};
use model::catalog::track::{Marker, Track};
use model::catalog::vocal::VocalLevel;
use model::filter::join::JoinPolicy;
use model::filter::param::{FilterParam, ParamKind};
use model::filter::spec::FilterSpec;

pub struct TrackSeed {
    pub id: &'static str,
    pub vocal_level: VocalLevel,
    pub released_at: f64,
    pub is_disliked: bool,
    pub duration_seconds: f64,
    pub tags: &'static [&'static str],
    pub artists: &'static [&'static str],
    pub with_marker: bool,
}

pub fn build_track(seed: &TrackSeed) -> Track {
    let markers = if seed.with_marker {
        vec![Marker::new(None, Some("Drop".to_string()), 30.0)]
    } else {
        vec![]
    };
    Track::new(
        seed.id,
        format!("Title {}", seed.id),
        "Artist",
        "Album",
        seed.vocal_level,
        seed.released_at,
        seed.is_disliked,
        seed.duration_seconds,
        seed.tags.iter().map(|t| t.to_string()).collect(),
        seed.artists.iter().map(|a| a.to_string()).collect(),
        markers,
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    )
}

/// A small catalog covering every dimension the pipeline filters on.
pub fn sample_library() -> Vec<Track> {
    let seeds = [
        TrackSeed {
            id: "chill-instrumental",
            vocal_level: VocalLevel::Instrumental,
            released_at: 1_546_300_800.0, // 2019-01-01
            is_disliked: false,
            duration_seconds: 185.0,
            tags: &["tag-chill", "tag-focus"],
            artists: &["artist-a"],
            with_marker: false,
        },
        TrackSeed {
            id: "upbeat-vocals",
            vocal_level: VocalLevel::StandardVocals,
            released_at: 1_609_459_200.0, // 2021-01-01
            is_disliked: false,
            duration_seconds: 240.0,
            tags: &["tag-upbeat", "tag-gym"],
            artists: &["artist-b"],
            with_marker: true,
        },
        TrackSeed {
            id: "disliked-banger",
            vocal_level: VocalLevel::StandardVocals,
            released_at: 1_609_459_200.0,
            is_disliked: true,
            duration_seconds: 200.0,
            tags: &["tag-upbeat"],
            artists: &["artist-a", "artist-b"],
            with_marker: false,
        },
        TrackSeed {
            id: "long-minimal",
            vocal_level: VocalLevel::MinimalVocals,
            released_at: 1_672_531_200.0, // 2023-01-01
            is_disliked: false,
            duration_seconds: 600.0,
            tags: &["tag-chill"],
            artists: &["artist-c"],
            with_marker: true,
        },
        TrackSeed {
            id: "untagged-oldie",
            vocal_level: VocalLevel::NotSpecified,
            released_at: 631_152_000.0, // 1990-01-01
            is_disliked: false,
            duration_seconds: 150.0,
            tags: &[],
            artists: &[],
            with_marker: false,
        },
    ];
    seeds.iter().map(build_track).collect()
}

pub fn tag_param(id: &str, kind: TagKind, excluded: bool) -> FilterParam {
    FilterParam::Tag {
        tag: TagRef::new(id, kind),
        excluded,
    }
}

pub fn artist_param(id: &str, excluded: bool) -> FilterParam {
    FilterParam::Artist {
        id: id.to_string(),
        excluded,
    }
}

pub fn vocal_param(level: VocalLevel, excluded: bool) -> FilterParam {
    FilterParam::VocalLevel { level, excluded }
}

/// Direct evaluation of a filter spec against one track, written straight
/// from the category semantics rather than through the compiled pipeline.
/// Round-trip tests compare the decoded predicate against this.
pub fn matches_spec(track: &Track, spec: &FilterSpec) -> bool {
    if track.is_disliked {
        return false;
    }

    let contains = |haystack: &str, id: &str| haystack.contains(id);

    // Tags, kind by kind: Any joins disjoin, everything else conjoins.
    for kind in TagKind::ALL {
        let included: Vec<&TagRef> = spec
            .params
            .iter()
            .filter(|p| !p.is_excluded())
            .filter_map(FilterParam::tag_ref)
            .filter(|t| t.kind == kind)
            .collect();
        if included.is_empty() {
            continue;
        }
        let any = spec.join_overrides.get(&ParamKind::from(kind)) == Some(&JoinPolicy::Any)
            && included.len() >= 2;
        let hit = if any {
            included.iter().any(|t| contains(&track.tag_ids, &t.id))
        } else {
            included.iter().all(|t| contains(&track.tag_ids, &t.id))
        };
        if !hit {
            return false;
        }
    }

    for param in &spec.params {
        match param {
            FilterParam::Tag { tag, excluded: true } => {
                if contains(&track.tag_ids, &tag.id) {
                    return false;
                }
            }
            FilterParam::Artist { id, excluded: true } => {
                if contains(&track.artist_ids, id) {
                    return false;
                }
            }
            FilterParam::VocalLevel {
                level,
                excluded: true,
            } => {
                if track.vocal_level_value == level.code() {
                    return false;
                }
            }
            _ => {}
        }
    }

    let included_artists: Vec<&str> = spec
        .params
        .iter()
        .filter(|p| !p.is_excluded())
        .filter_map(FilterParam::artist_id)
        .collect();
    if !included_artists.is_empty() {
        let any = spec.join_overrides.get(&ParamKind::Artist) == Some(&JoinPolicy::Any)
            && included_artists.len() >= 2;
        let hit = if any {
            included_artists
                .iter()
                .any(|id| contains(&track.artist_ids, id))
        } else {
            included_artists
                .iter()
                .all(|id| contains(&track.artist_ids, id))
        };
        if !hit {
            return false;
        }
    }

    let included_levels: Vec<VocalLevel> = spec
        .params
        .iter()
        .filter(|p| !p.is_excluded())
        .filter_map(FilterParam::vocal_level)
        .collect();
    if !included_levels.is_empty()
        && !included_levels
            .iter()
            .any(|level| track.vocal_level_value == level.code())
    {
        return false;
    }

    for param in &spec.params {
        match param {
            FilterParam::ReleaseDateRange { start, end } => {
                if let Some(start) = start {
                    if track.released_at < start.timestamp_millis() as f64 / 1000.0 {
                        return false;
                    }
                }
                if let Some(end) = end {
                    if track.released_at > end.timestamp_millis() as f64 / 1000.0 {
                        return false;
                    }
                }
            }
            FilterParam::DurationRange { min, max } => {
                if let Some(min) = min {
                    if track.duration_seconds < *min as f64 {
                        return false;
                    }
                }
                if let Some(max) = max {
                    if track.duration_seconds > *max as f64 {
                        return false;
                    }
                }
            }
            FilterParam::HasMarkers(value) => {
                if track.has_markers != *value {
                    return false;
                }
            }
            _ => {}
        }
    }

    true
}
