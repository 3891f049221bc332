use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories a tag can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TagKind {
    Mood,
    Activity,
    Genre,
    Instrument,
    Custom,
}

impl TagKind {
    /// Declaration order is the order tag groups appear in compiled predicates.
    pub const ALL: [TagKind; 5] = [
        TagKind::Mood,
        TagKind::Activity,
        TagKind::Genre,
        TagKind::Instrument,
        TagKind::Custom,
    ];
}

/// User-defined label attached to tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: String,
    pub kind: TagKind,
    pub name: Option<String>,
    pub emoji: Option<String>,
}

impl Tag {
    pub fn new(kind: TagKind, name: Option<String>) -> Self {
        Tag {
            id: Uuid::new_v4().to_string(),
            kind,
            name,
            emoji: None,
        }
    }

    pub fn with_id(id: impl Into<String>, kind: TagKind, name: Option<String>) -> Self {
        Tag {
            id: id.into(),
            kind,
            name,
            emoji: None,
        }
    }
}

/// Tag reference carried by filter parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TagRef {
    pub id: String,
    pub kind: TagKind,
}

impl TagRef {
    pub fn new(id: impl Into<String>, kind: TagKind) -> Self {
        TagRef {
            id: id.into(),
            kind,
        }
    }
}

impl From<&Tag> for TagRef {
    fn from(tag: &Tag) -> Self {
        TagRef {
            id: tag.id.clone(),
            kind: tag.kind,
        }
    }
}
