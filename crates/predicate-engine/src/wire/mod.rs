//! Rendering of compiled predicates into the external wire schema.
//!
//! Serialization of a well-formed [`CompiledPredicate`] is total: every node
//! kind has a wire form and child order is preserved exactly.

pub mod schema;

pub use schema::{
    WireBinder, WireClause, WireDocument, WireMarker, WireOperand, WireOperator, WirePlaceholder,
    WirePlaceholderArg, WireStructure,
};

use crate::ast::{CompareOp, OperandNode, StructureNode};
use crate::compile::CompiledPredicate;
use model::core::value::{ScalarType, Value};

/// Render a compiled predicate into the wire document schema.
pub fn serialize(predicate: &CompiledPredicate) -> WireDocument {
    WireDocument {
        predicate: vec![WireClause {
            variable: WireBinder {
                key: predicate.root_variable_key,
            },
            expression: operand_node(&predicate.operands, predicate.root_variable_key),
            structure: structure_node(&predicate.structure),
        }],
    }
}

/// Convenience: render straight to a JSON value. Infallible for the types
/// the schema admits.
pub fn to_json(predicate: &CompiledPredicate) -> serde_json::Value {
    serde_json::to_value(serialize(predicate)).expect("wire schema serialization is total")
}

fn structure_node(node: &StructureNode) -> WireStructure {
    match node {
        StructureNode::Equal(ty) => WireStructure::Equal {
            args: leaf_placeholders(*ty),
        },
        StructureNode::NotEqual(ty) => WireStructure::NotEqual {
            args: leaf_placeholders(*ty),
        },
        StructureNode::Comparison(ty) => WireStructure::Comparison {
            args: leaf_placeholders(*ty),
        },
        StructureNode::Contains(ty) => WireStructure::Contains {
            args: leaf_placeholders(*ty),
        },
        StructureNode::And(children) => WireStructure::Conjunction {
            args: children.iter().map(structure_node).collect(),
        },
        StructureNode::Or(children) => WireStructure::Disjunction {
            args: children.iter().map(structure_node).collect(),
        },
        StructureNode::Negation(child) => WireStructure::Negation {
            args: vec![structure_node(child)],
        },
    }
}

/// A leaf declares its operand pair as `[keyPath placeholder, value
/// placeholder]`, both carrying the same scalar type.
fn leaf_placeholders(ty: ScalarType) -> Vec<WirePlaceholder> {
    vec![
        WirePlaceholder::KeyPath {
            args: vec![
                WirePlaceholderArg::Marker(WireMarker::Variable {}),
                WirePlaceholderArg::TypeName(ty.wire_name()),
            ],
        },
        WirePlaceholder::Value {
            args: vec![WirePlaceholderArg::TypeName(ty.wire_name())],
        },
    ]
}

fn operand_node(node: &OperandNode, binder_key: i32) -> WireOperand {
    match node {
        OperandNode::Literal(Value::String(v)) => WireOperand::String(v.clone()),
        OperandNode::Literal(Value::Int(v)) => WireOperand::Int(*v),
        OperandNode::Literal(Value::Double(v)) => WireOperand::Double(*v),
        OperandNode::Literal(Value::Bool(v)) => WireOperand::Bool(*v),
        OperandNode::FieldRef(identifier) => WireOperand::FieldRef {
            identifier: identifier.clone(),
            root: WireBinder { key: binder_key },
        },
        OperandNode::Operator(op) => WireOperand::Operator(wire_operator(*op)),
        OperandNode::List(items) => WireOperand::List(
            items
                .iter()
                .map(|item| operand_node(item, binder_key))
                .collect(),
        ),
    }
}

fn wire_operator(op: CompareOp) -> WireOperator {
    match op {
        CompareOp::LessThan => WireOperator::LessThan {},
        CompareOp::GreaterThan => WireOperator::GreaterThan {},
        CompareOp::LessThanOrEqual => WireOperator::LessThanOrEqual {},
        CompareOp::GreaterThanOrEqual => WireOperator::GreaterThanOrEqual {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use crate::fields;
    use model::filter::spec::FilterSpec;
    use serde_json::json;

    #[test]
    fn test_empty_spec_document_shape() {
        let doc = to_json(&compile(&FilterSpec::default()));
        assert_eq!(
            doc,
            json!({
                "predicate": [
                    {
                        "variable": { "key": 1 },
                        "expression": [
                            { "identifier": fields::IS_DISLIKED, "root": { "key": 1 } },
                            false,
                        ],
                        "structure": {
                            "equal": {
                                "args": [
                                    { "keyPath": { "args": [{ "variable": {} }, "bool"] } },
                                    { "value": { "args": ["bool"] } },
                                ]
                            }
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_binder_key_propagates_to_field_refs() {
        let compiled = compile(&FilterSpec::default());
        let doc = serialize(&compiled);
        match &doc.predicate[0].expression {
            WireOperand::List(items) => match &items[0] {
                WireOperand::FieldRef { root, .. } => assert_eq!(root.key, 1),
                other => panic!("expected field ref, got {:?}", other),
            },
            other => panic!("expected operand list, got {:?}", other),
        }
    }
}
