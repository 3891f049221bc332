//! Predicate compilation.
//!
//! Builds one category unit per non-empty filter dimension in a fixed order,
//! then left-folds the units into a conjunction. The first unit seeds the
//! accumulator directly, so an all-empty spec reduces to exactly the
//! "not disliked" term with no enclosing conjunction.

use crate::ast::{CompareOp, Condition, OperandNode, StructureNode};
use crate::extract::{extract, FilterPartition};
use crate::fields;
use model::catalog::tag::TagKind;
use model::filter::join::JoinPolicy;
use model::filter::spec::FilterSpec;
use tracing::debug;

/// Symbolic bound-variable index shared by every field reference in a
/// single-level predicate. Nested binders are unsupported.
pub const ROOT_VARIABLE_KEY: i32 = 1;

/// A compiled predicate: both rendered wire halves plus the binder key they
/// share. The halves are derived from one combined tree and are therefore
/// shape-isomorphic by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPredicate {
    pub structure: StructureNode,
    pub operands: OperandNode,
    pub root_variable_key: i32,
}

/// Compile a filter spec into a predicate. Total: every spec, including the
/// empty one, produces a well-formed predicate.
pub fn compile(spec: &FilterSpec) -> CompiledPredicate {
    let partition = extract(spec);
    let condition = build_condition(&partition);
    let compiled = CompiledPredicate {
        structure: condition.structure(),
        operands: condition.operands(),
        root_variable_key: ROOT_VARIABLE_KEY,
    };
    debug!(
        terms = compiled.structure.leaf_count(),
        "compiled filter spec"
    );
    compiled
}

/// Category order is fixed; reordering would change the wire-tree shape the
/// downstream schema consumer sees, even though conjunction commutes.
fn build_condition(partition: &FilterPartition) -> Condition {
    let mut units: Vec<Condition> = Vec::new();

    // Disjoined tag groups, one per tag kind with an effective Any join.
    for kind in TagKind::ALL {
        if partition.joins.get(kind.into()) != JoinPolicy::Any {
            continue;
        }
        let group: Vec<Condition> = partition
            .included_tags
            .iter()
            .filter(|tag| tag.kind == kind)
            .map(|tag| Condition::contains(fields::TAG_IDS, tag.id.clone()))
            .collect();
        if !group.is_empty() {
            units.push(or_fold(group));
        }
    }

    // Included vocal levels.
    match partition.included_vocal_levels.len() {
        0 => {}
        1 => units.push(Condition::equal_int(
            fields::VOCAL_LEVEL,
            partition.included_vocal_levels[0].code(),
        )),
        _ => units.push(or_fold(
            partition
                .included_vocal_levels
                .iter()
                .map(|level| Condition::equal_int(fields::VOCAL_LEVEL, level.code()))
                .collect(),
        )),
    }

    // Conjoined tags: every included tag whose kind was not disjoined above.
    let and_tags: Vec<Condition> = partition
        .included_tags
        .iter()
        .filter(|tag| partition.joins.get(tag.kind.into()) != JoinPolicy::Any)
        .map(|tag| Condition::contains(fields::TAG_IDS, tag.id.clone()))
        .collect();
    if !and_tags.is_empty() {
        units.push(and_fold(and_tags));
    }

    if !partition.excluded_tags.is_empty() {
        units.push(and_fold(
            partition
                .excluded_tags
                .iter()
                .map(|tag| Condition::contains(fields::TAG_IDS, tag.id.clone()).negate())
                .collect(),
        ));
    }

    if !partition.excluded_artists.is_empty() {
        units.push(and_fold(
            partition
                .excluded_artists
                .iter()
                .map(|id| Condition::contains(fields::ARTIST_IDS, id.clone()).negate())
                .collect(),
        ));
    }

    if !partition.included_artists.is_empty() {
        let terms: Vec<Condition> = partition
            .included_artists
            .iter()
            .map(|id| Condition::contains(fields::ARTIST_IDS, id.clone()))
            .collect();
        if partition.joins.artists == JoinPolicy::Any {
            units.push(or_fold(terms));
        } else {
            units.push(and_fold(terms));
        }
    }

    if !partition.excluded_vocal_levels.is_empty() {
        units.push(and_fold(
            partition
                .excluded_vocal_levels
                .iter()
                .map(|level| Condition::not_equal_int(fields::VOCAL_LEVEL, level.code()))
                .collect(),
        ));
    }

    if let Some(range) = partition.release_date_range {
        units.push(range_unit(fields::RELEASED_AT, range));
    }

    if let Some((min, max)) = partition.duration_range {
        units.push(range_unit(
            fields::DURATION_SECONDS,
            (min.map(|v| v as f64), max.map(|v| v as f64)),
        ));
    }

    if let Some(value) = partition.has_markers {
        units.push(Condition::equal_bool(fields::HAS_MARKERS, value));
    }

    // Compulsory for every predicate, and the whole predicate when the spec
    // is empty.
    units.push(Condition::equal_bool(fields::IS_DISLIKED, false));

    let mut iter = units.into_iter();
    let seed = iter.next().expect("units always contain the fallback term");
    iter.fold(seed, Condition::and)
}

/// Bound terms of a range category, pre-combined into one unit. The caller
/// guarantees at least one bound is present.
fn range_unit(field: &str, (lower, upper): (Option<f64>, Option<f64>)) -> Condition {
    let lower = lower.map(|v| Condition::compare(field, CompareOp::GreaterThanOrEqual, v));
    let upper = upper.map(|v| Condition::compare(field, CompareOp::LessThanOrEqual, v));
    match (lower, upper) {
        (Some(l), Some(u)) => Condition::and(l, u),
        (Some(l), None) => l,
        (None, Some(u)) => u,
        (None, None) => unreachable!("absent ranges are dropped during extraction"),
    }
}

/// Left-fold a disjunction group. Groups below 2 members violate the
/// extractor's collapse rule and cannot come from the public pipeline.
fn or_fold(terms: Vec<Condition>) -> Condition {
    if terms.len() < 2 {
        panic!(
            "disjunction group requires at least 2 members, got {}",
            terms.len()
        );
    }
    let mut iter = terms.into_iter();
    let seed = Condition::or(
        iter.next().expect("checked above"),
        iter.next().expect("checked above"),
    );
    iter.fold(seed, Condition::or)
}

/// Left-fold a conjunction group; a single member passes through unchanged.
fn and_fold(terms: Vec<Condition>) -> Condition {
    let mut iter = terms.into_iter();
    let first = iter
        .next()
        .expect("conjunction groups are built from non-empty categories");
    match iter.next() {
        None => first,
        Some(second) => iter.fold(Condition::and(first, second), Condition::and),
    }
}
