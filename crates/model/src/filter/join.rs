use crate::filter::param::ParamKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How members of one filter category combine. `None` means "use the
/// category's default".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum JoinPolicy {
    All,
    Any,
    #[default]
    None,
}

/// Join policy per joinable category.
///
/// Built from a sparse override map; the extractor fills in defaults and
/// collapses redundant `Any` joins before compilation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JoinPolicies {
    pub mood: JoinPolicy,
    pub activity: JoinPolicy,
    pub genre: JoinPolicy,
    pub instrument: JoinPolicy,
    pub custom: JoinPolicy,
    pub artists: JoinPolicy,
    pub vocal_level: JoinPolicy,
}

impl JoinPolicies {
    pub fn from_overrides(overrides: &HashMap<ParamKind, JoinPolicy>) -> Self {
        let mut policies = JoinPolicies::default();
        for (kind, policy) in overrides {
            policies.set(*kind, *policy);
        }
        policies
    }

    pub fn get(&self, kind: ParamKind) -> JoinPolicy {
        match kind {
            ParamKind::Mood => self.mood,
            ParamKind::Activity => self.activity,
            ParamKind::Genre => self.genre,
            ParamKind::Instrument => self.instrument,
            ParamKind::Custom => self.custom,
            ParamKind::Artist => self.artists,
            ParamKind::VocalLevel => self.vocal_level,
            _ => JoinPolicy::None,
        }
    }

    pub fn set(&mut self, kind: ParamKind, policy: JoinPolicy) {
        match kind {
            ParamKind::Mood => self.mood = policy,
            ParamKind::Activity => self.activity = policy,
            ParamKind::Genre => self.genre = policy,
            ParamKind::Instrument => self.instrument = policy,
            ParamKind::Custom => self.custom = policy,
            ParamKind::Artist => self.artists = policy,
            ParamKind::VocalLevel => self.vocal_level = policy,
            _ => {}
        }
    }
}
