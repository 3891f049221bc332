use crate::filter::join::JoinPolicy;
use crate::filter::param::{FilterParam, ParamKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete description of one filter request: the ordered parameters plus
/// sparse per-category join-policy overrides. This is the input boundary of
/// the predicate pipeline; partitioning happens in the extractor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterSpec {
    pub params: Vec<FilterParam>,
    pub join_overrides: HashMap<ParamKind, JoinPolicy>,
}

impl FilterSpec {
    pub fn new(params: Vec<FilterParam>, join_overrides: HashMap<ParamKind, JoinPolicy>) -> Self {
        FilterSpec {
            params,
            join_overrides,
        }
    }

    pub fn from_params(params: Vec<FilterParam>) -> Self {
        FilterSpec {
            params,
            join_overrides: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Distinct parameter kinds in first-appearance order.
    pub fn kinds(&self) -> Vec<ParamKind> {
        let mut kinds = Vec::new();
        for param in &self.params {
            let kind = param.kind();
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Number of non-excluded members counting toward `kind`'s join policy.
    pub fn non_excluded_count(&self, kind: ParamKind) -> usize {
        self.params
            .iter()
            .filter(|p| p.matches_kind(kind) && !p.is_excluded())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tag::{TagKind, TagRef};

    #[test]
    fn test_kinds_deduplicates_in_order() {
        let spec = FilterSpec::from_params(vec![
            FilterParam::Tag {
                tag: TagRef::new("a", TagKind::Mood),
                excluded: false,
            },
            FilterParam::Artist {
                id: "x".to_string(),
                excluded: false,
            },
            FilterParam::Tag {
                tag: TagRef::new("b", TagKind::Mood),
                excluded: true,
            },
        ]);
        assert_eq!(spec.kinds(), vec![ParamKind::Mood, ParamKind::Artist]);
    }

    #[test]
    fn test_non_excluded_count_skips_exclusions() {
        let spec = FilterSpec::from_params(vec![
            FilterParam::Tag {
                tag: TagRef::new("a", TagKind::Genre),
                excluded: false,
            },
            FilterParam::Tag {
                tag: TagRef::new("b", TagKind::Genre),
                excluded: true,
            },
        ]);
        assert_eq!(spec.non_excluded_count(ParamKind::Genre), 1);
    }
}
