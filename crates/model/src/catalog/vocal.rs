use serde::{Deserialize, Serialize};

/// How prominent vocals are in a track. The predicate layer compares the
/// stable integer code, not the variant itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VocalLevel {
    StandardVocals,
    MinimalVocals,
    Instrumental,
    NotSpecified,
}

impl VocalLevel {
    pub const ALL: [VocalLevel; 4] = [
        VocalLevel::StandardVocals,
        VocalLevel::MinimalVocals,
        VocalLevel::Instrumental,
        VocalLevel::NotSpecified,
    ];

    /// Stable code stored on tracks and serialized into predicates.
    pub fn code(&self) -> i64 {
        match self {
            VocalLevel::StandardVocals => 1,
            VocalLevel::MinimalVocals => 2,
            VocalLevel::Instrumental => 3,
            VocalLevel::NotSpecified => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(VocalLevel::StandardVocals),
            2 => Some(VocalLevel::MinimalVocals),
            3 => Some(VocalLevel::Instrumental),
            4 => Some(VocalLevel::NotSpecified),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for level in VocalLevel::ALL {
            assert_eq!(VocalLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(VocalLevel::from_code(0), None);
    }
}
