//! Category extraction: partitions the ordered filter parameters into
//! per-dimension groups and resolves the effective join policy for every
//! joinable category. Extraction never fails; malformed ranges simply come
//! out absent.

use model::catalog::tag::TagRef;
use model::catalog::vocal::VocalLevel;
use model::filter::join::{JoinPolicies, JoinPolicy};
use model::filter::param::{FilterParam, ParamKind};
use model::filter::sort::SortOrder;
use model::filter::spec::FilterSpec;

/// Per-category partition of a filter spec plus the effective join policies.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPartition {
    pub included_tags: Vec<TagRef>,
    pub excluded_tags: Vec<TagRef>,
    pub included_vocal_levels: Vec<VocalLevel>,
    pub excluded_vocal_levels: Vec<VocalLevel>,
    pub included_artists: Vec<String>,
    pub excluded_artists: Vec<String>,
    /// Release bounds in epoch seconds, `(start, end)`.
    pub release_date_range: Option<(Option<f64>, Option<f64>)>,
    /// Duration bounds in whole seconds, `(min, max)`.
    pub duration_range: Option<(Option<i64>, Option<i64>)>,
    pub has_markers: Option<bool>,
    pub sort: SortOrder,
    pub joins: JoinPolicies,
}

pub fn extract(spec: &FilterSpec) -> FilterPartition {
    let mut partition = FilterPartition {
        included_tags: Vec::new(),
        excluded_tags: Vec::new(),
        included_vocal_levels: Vec::new(),
        excluded_vocal_levels: Vec::new(),
        included_artists: Vec::new(),
        excluded_artists: Vec::new(),
        release_date_range: None,
        duration_range: None,
        has_markers: None,
        sort: SortOrder::default(),
        joins: JoinPolicies::from_overrides(&spec.join_overrides),
    };

    let mut sort_seen = false;
    for param in &spec.params {
        match param {
            FilterParam::Tag { tag, excluded } => {
                if *excluded {
                    partition.excluded_tags.push(tag.clone());
                } else {
                    partition.included_tags.push(tag.clone());
                }
            }
            FilterParam::VocalLevel { level, excluded } => {
                if *excluded {
                    partition.excluded_vocal_levels.push(*level);
                } else {
                    partition.included_vocal_levels.push(*level);
                }
            }
            FilterParam::Artist { id, excluded } => {
                if *excluded {
                    partition.excluded_artists.push(id.clone());
                } else {
                    partition.included_artists.push(id.clone());
                }
            }
            FilterParam::ReleaseDateRange { start, end } => {
                if partition.release_date_range.is_none() && !(start.is_none() && end.is_none()) {
                    partition.release_date_range = Some((
                        start.map(|d| d.timestamp_millis() as f64 / 1000.0),
                        end.map(|d| d.timestamp_millis() as f64 / 1000.0),
                    ));
                }
            }
            FilterParam::DurationRange { min, max } => {
                if partition.duration_range.is_none() && !(min.is_none() && max.is_none()) {
                    partition.duration_range = Some((*min, *max));
                }
            }
            FilterParam::HasMarkers(value) => {
                if partition.has_markers.is_none() {
                    partition.has_markers = Some(*value);
                }
            }
            FilterParam::Sort(order) => {
                if !sort_seen {
                    partition.sort = *order;
                    sort_seen = true;
                }
            }
        }
    }

    resolve_joins(spec, &mut partition);
    partition
}

/// Fill in the default policy for every joinable kind present in the params,
/// then collapse: a category with fewer than 2 non-excluded members is forced
/// to `All`, since `Any` over fewer than 2 operands is never serialized.
fn resolve_joins(spec: &FilterSpec, partition: &mut FilterPartition) {
    for kind in spec.kinds() {
        if kind.is_joinable() && partition.joins.get(kind) == JoinPolicy::None {
            partition.joins.set(kind, kind.default_join_policy());
        }
    }

    for kind in [
        ParamKind::Mood,
        ParamKind::Activity,
        ParamKind::Genre,
        ParamKind::Instrument,
        ParamKind::Custom,
        ParamKind::Artist,
    ] {
        if partition.joins.get(kind) != JoinPolicy::None && spec.non_excluded_count(kind) < 2 {
            partition.joins.set(kind, JoinPolicy::All);
        }
    }

    // Vocal level joins are not caller-customizable: two or more included
    // levels disjoin, anything less conjoins trivially.
    partition.joins.vocal_level = if partition.included_vocal_levels.len() >= 2 {
        JoinPolicy::Any
    } else {
        JoinPolicy::All
    };
}
