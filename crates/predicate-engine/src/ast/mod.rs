//! Predicate trees.
//!
//! The compiler builds one combined [`Condition`] tree carrying both the
//! operator skeleton and the operand values. The two wire halves — the
//! [`StructureNode`] skeleton with type placeholders and the [`OperandNode`]
//! value tree — are derived from it by separate rendering passes, so they can
//! never drift out of shape.

pub mod condition;
pub mod operand;
pub mod structure;

pub use condition::{CompareOp, Condition};
pub use operand::OperandNode;
pub use structure::StructureNode;

/// Check the shape-isomorphism invariant between the two halves of a compiled
/// predicate: every combinator in the structure tree must align with a list of
/// the same arity in the operand tree, every leaf with a field/literal pair
/// (plus a direction marker for comparisons). Negation is transparent — its
/// operand side is the operand side of its single child.
pub fn shape_matches(structure: &StructureNode, operands: &OperandNode) -> bool {
    match structure {
        StructureNode::And(children) | StructureNode::Or(children) => match operands {
            OperandNode::List(items) => {
                children.len() == items.len()
                    && children
                        .iter()
                        .zip(items.iter())
                        .all(|(child, item)| shape_matches(child, item))
            }
            _ => false,
        },
        StructureNode::Negation(child) => shape_matches(child, operands),
        StructureNode::Equal(_) | StructureNode::NotEqual(_) | StructureNode::Contains(_) => {
            match operands {
                OperandNode::List(items) => {
                    items.len() == 2
                        && matches!(items[0], OperandNode::FieldRef(_))
                        && matches!(items[1], OperandNode::Literal(_))
                }
                _ => false,
            }
        }
        StructureNode::Comparison(_) => match operands {
            OperandNode::List(items) => {
                items.len() == 3
                    && matches!(items[0], OperandNode::FieldRef(_))
                    && matches!(items[1], OperandNode::Literal(_))
                    && matches!(items[2], OperandNode::Operator(_))
            }
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::Value;

    #[test]
    fn test_shape_matches_leaf() {
        let condition = Condition::contains("Track.tagIds", "t1");
        assert!(shape_matches(&condition.structure(), &condition.operands()));
    }

    #[test]
    fn test_shape_matches_negation_is_transparent() {
        let condition = Condition::contains("Track.tagIds", "t1").negate();
        assert!(shape_matches(&condition.structure(), &condition.operands()));
    }

    #[test]
    fn test_shape_matches_comparison_carries_marker() {
        let condition = Condition::compare(
            "Track.durationSeconds",
            CompareOp::GreaterThanOrEqual,
            120.0,
        );
        assert!(shape_matches(&condition.structure(), &condition.operands()));
    }

    #[test]
    fn test_shape_mismatch_detected() {
        let and = Condition::and(
            Condition::contains("Track.tagIds", "t1"),
            Condition::equal_bool("Track.isDisliked", false),
        );
        let lone = Condition::contains("Track.tagIds", "t1");
        assert!(!shape_matches(&and.structure(), &lone.operands()));
    }

    #[test]
    fn test_shape_rejects_swapped_leaf_order() {
        let structure = Condition::equal_bool("Track.isDisliked", false).structure();
        let swapped = OperandNode::List(vec![
            OperandNode::Literal(Value::Bool(false)),
            OperandNode::FieldRef("Track.isDisliked".to_string()),
        ]);
        assert!(!shape_matches(&structure, &swapped));
    }
}
