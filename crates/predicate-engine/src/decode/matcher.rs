use crate::ast::CompareOp;
use crate::decode::allowlist::TrackField;
use model::catalog::track::Track;
use model::core::value::Value;
use tracing::warn;

/// Executable predicate reconstructed from a wire document. Evaluation is a
/// pure function of the track; downstream execution (scanning, retries) is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPredicate {
    matcher: Matcher,
}

impl TrackPredicate {
    pub(crate) fn new(matcher: Matcher) -> Self {
        TrackPredicate { matcher }
    }

    pub fn evaluate(&self, track: &Track) -> bool {
        self.matcher.matches(track)
    }
}

/// Resolved matcher tree: the combined condition shape with field accessors
/// in place of wire identifiers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Matcher {
    Contains {
        field: TrackField,
        value: Value,
    },
    Equal {
        field: TrackField,
        value: Value,
    },
    NotEqual {
        field: TrackField,
        value: Value,
    },
    Compare {
        field: TrackField,
        op: CompareOp,
        value: Value,
    },
    Not(Box<Matcher>),
    And(Vec<Matcher>),
    Or(Vec<Matcher>),
}

impl Matcher {
    fn matches(&self, track: &Track) -> bool {
        match self {
            Matcher::Contains { field, value } => {
                let haystack = field.value_of(track);
                match (haystack.as_str(), value.as_str()) {
                    (Some(haystack), Some(needle)) => haystack.contains(needle),
                    _ => {
                        warn!(?field, "containment over non-string operands");
                        false
                    }
                }
            }
            Matcher::Equal { field, value } => field.value_of(track) == *value,
            Matcher::NotEqual { field, value } => field.value_of(track) != *value,
            Matcher::Compare { field, op, value } => {
                match (field.value_of(track).as_f64(), value.as_f64()) {
                    (Some(lhs), Some(rhs)) => op.evaluate(lhs, rhs),
                    _ => {
                        warn!(?field, "comparison over non-numeric operands");
                        false
                    }
                }
            }
            Matcher::Not(child) => !child.matches(track),
            Matcher::And(children) => children.iter().all(|child| child.matches(track)),
            Matcher::Or(children) => children.iter().any(|child| child.matches(track)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use model::catalog::vocal::VocalLevel;

    fn sample_track() -> Track {
        Track::new(
            "t1",
            "Title",
            "Artist",
            "Album",
            VocalLevel::Instrumental,
            1_500_000_000.0,
            false,
            240.0,
            vec!["tag-a".to_string(), "tag-b".to_string()],
            vec!["artist-x".to_string()],
            vec![],
            Utc::now(),
        )
    }

    #[test]
    fn test_contains_is_substring_membership() {
        let track = sample_track();
        let hit = Matcher::Contains {
            field: TrackField::TagIds,
            value: Value::String("tag-a".to_string()),
        };
        let miss = Matcher::Contains {
            field: TrackField::TagIds,
            value: Value::String("tag-z".to_string()),
        };
        assert!(hit.matches(&track));
        assert!(!miss.matches(&track));
    }

    #[test]
    fn test_compare_on_duration() {
        let track = sample_track();
        let at_least = Matcher::Compare {
            field: TrackField::DurationSeconds,
            op: CompareOp::GreaterThanOrEqual,
            value: Value::Double(240.0),
        };
        let below = Matcher::Compare {
            field: TrackField::DurationSeconds,
            op: CompareOp::LessThan,
            value: Value::Double(240.0),
        };
        assert!(at_least.matches(&track));
        assert!(!below.matches(&track));
    }

    #[test]
    fn test_combinators_short_circuit_semantics() {
        let track = sample_track();
        let yes = Matcher::Equal {
            field: TrackField::IsDisliked,
            value: Value::Bool(false),
        };
        let no = Matcher::Equal {
            field: TrackField::VocalLevel,
            value: Value::Int(1),
        };
        assert!(Matcher::And(vec![yes.clone(), yes.clone()]).matches(&track));
        assert!(!Matcher::And(vec![yes.clone(), no.clone()]).matches(&track));
        assert!(Matcher::Or(vec![no.clone(), yes.clone()]).matches(&track));
        assert!(Matcher::Not(Box::new(no)).matches(&track));
    }

    #[test]
    fn test_type_mismatch_fails_closed() {
        let track = sample_track();
        let matcher = Matcher::Contains {
            field: TrackField::DurationSeconds,
            value: Value::String("240".to_string()),
        };
        assert!(!matcher.matches(&track));
    }
}
