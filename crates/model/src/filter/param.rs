use crate::catalog::tag::{TagKind, TagRef};
use crate::catalog::vocal::VocalLevel;
use crate::filter::join::JoinPolicy;
use crate::filter::sort::SortOrder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user-selected filter criterion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FilterParam {
    Tag {
        tag: TagRef,
        excluded: bool,
    },
    VocalLevel {
        level: VocalLevel,
        excluded: bool,
    },
    Artist {
        id: String,
        excluded: bool,
    },
    ReleaseDateRange {
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
    DurationRange {
        min: Option<i64>,
        max: Option<i64>,
    },
    HasMarkers(bool),
    Sort(SortOrder),
}

impl FilterParam {
    pub fn kind(&self) -> ParamKind {
        match self {
            FilterParam::Tag { tag, .. } => tag.kind.into(),
            FilterParam::VocalLevel { .. } => ParamKind::VocalLevel,
            FilterParam::Artist { .. } => ParamKind::Artist,
            FilterParam::ReleaseDateRange { .. } => ParamKind::ReleaseDate,
            FilterParam::DurationRange { .. } => ParamKind::Duration,
            FilterParam::HasMarkers(_) => ParamKind::HasMarkers,
            FilterParam::Sort(_) => ParamKind::SortOrder,
        }
    }

    pub fn is_excluded(&self) -> bool {
        match self {
            FilterParam::Tag { excluded, .. } => *excluded,
            FilterParam::VocalLevel { excluded, .. } => *excluded,
            FilterParam::Artist { excluded, .. } => *excluded,
            _ => false,
        }
    }

    pub fn tag_ref(&self) -> Option<&TagRef> {
        match self {
            FilterParam::Tag { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn vocal_level(&self) -> Option<VocalLevel> {
        match self {
            FilterParam::VocalLevel { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn artist_id(&self) -> Option<&str> {
        match self {
            FilterParam::Artist { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn has_markers_value(&self) -> Option<bool> {
        match self {
            FilterParam::HasMarkers(value) => Some(*value),
            _ => None,
        }
    }

    pub fn sort_order(&self) -> Option<&SortOrder> {
        match self {
            FilterParam::Sort(order) => Some(order),
            _ => None,
        }
    }

    /// Whether this param counts toward `kind`'s join-policy membership.
    /// Only tag kinds and artists have customizable joins.
    pub fn matches_kind(&self, kind: ParamKind) -> bool {
        if kind.is_tag_kind() {
            self.tag_ref().map(|t| ParamKind::from(t.kind)) == Some(kind)
        } else if kind == ParamKind::Artist {
            matches!(self, FilterParam::Artist { .. })
        } else {
            false
        }
    }
}

/// The filter dimension a parameter belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Mood,
    Activity,
    Genre,
    Instrument,
    Custom,
    Artist,
    VocalLevel,
    HasMarkers,
    ReleaseDate,
    Duration,
    SortOrder,
}

impl ParamKind {
    pub fn default_join_policy(&self) -> JoinPolicy {
        match self {
            ParamKind::VocalLevel => JoinPolicy::Any,
            _ => JoinPolicy::All,
        }
    }

    pub fn is_joinable(&self) -> bool {
        !matches!(
            self,
            ParamKind::HasMarkers | ParamKind::ReleaseDate | ParamKind::Duration | ParamKind::SortOrder
        )
    }

    pub fn is_tag_kind(&self) -> bool {
        self.tag_kind().is_some()
    }

    pub fn tag_kind(&self) -> Option<TagKind> {
        match self {
            ParamKind::Mood => Some(TagKind::Mood),
            ParamKind::Activity => Some(TagKind::Activity),
            ParamKind::Genre => Some(TagKind::Genre),
            ParamKind::Instrument => Some(TagKind::Instrument),
            ParamKind::Custom => Some(TagKind::Custom),
            _ => None,
        }
    }
}

impl From<TagKind> for ParamKind {
    fn from(kind: TagKind) -> Self {
        match kind {
            TagKind::Mood => ParamKind::Mood,
            TagKind::Activity => ParamKind::Activity,
            TagKind::Genre => ParamKind::Genre,
            TagKind::Instrument => ParamKind::Instrument,
            TagKind::Custom => ParamKind::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_join_policies() {
        assert_eq!(ParamKind::VocalLevel.default_join_policy(), JoinPolicy::Any);
        assert_eq!(ParamKind::Mood.default_join_policy(), JoinPolicy::All);
        assert_eq!(ParamKind::Artist.default_join_policy(), JoinPolicy::All);
    }

    #[test]
    fn test_joinable_kinds() {
        assert!(ParamKind::Genre.is_joinable());
        assert!(ParamKind::VocalLevel.is_joinable());
        assert!(!ParamKind::ReleaseDate.is_joinable());
        assert!(!ParamKind::SortOrder.is_joinable());
    }

    #[test]
    fn test_matches_kind_only_counts_tags_and_artists() {
        let tag = FilterParam::Tag {
            tag: TagRef::new("t1", TagKind::Mood),
            excluded: false,
        };
        assert!(tag.matches_kind(ParamKind::Mood));
        assert!(!tag.matches_kind(ParamKind::Genre));

        let level = FilterParam::VocalLevel {
            level: VocalLevel::Instrumental,
            excluded: false,
        };
        assert!(!level.matches_kind(ParamKind::VocalLevel));
    }
}
