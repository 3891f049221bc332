//! External wire schema of the downstream query engine.
//!
//! Operator nodes serialize as a single-key object — the stable operator
//! identifier — wrapping an ordered `args` array; zero-argument markers are
//! the identifier with an empty body. Field references carry the key path
//! plus the symbolic binder they resolve against.

use serde::Serialize;

/// Document root: the predicate's top-level container. Always a
/// single-element list for the single-level binder form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WireDocument {
    pub predicate: Vec<WireClause>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WireClause {
    pub variable: WireBinder,
    pub expression: WireOperand,
    pub structure: WireStructure,
}

/// Symbolic bound-variable key; the serializer only ever emits key 1.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WireBinder {
    pub key: i32,
}

/// Operator-skeleton node: `{"<identifier>": {"args": [...]}}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum WireStructure {
    Equal { args: Vec<WirePlaceholder> },
    NotEqual { args: Vec<WirePlaceholder> },
    Comparison { args: Vec<WirePlaceholder> },
    Contains { args: Vec<WirePlaceholder> },
    Conjunction { args: Vec<WireStructure> },
    Disjunction { args: Vec<WireStructure> },
    Negation { args: Vec<WireStructure> },
}

/// Operand-type placeholder inside a structure leaf.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum WirePlaceholder {
    KeyPath { args: Vec<WirePlaceholderArg> },
    Value { args: Vec<WirePlaceholderArg> },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum WirePlaceholderArg {
    Marker(WireMarker),
    TypeName(&'static str),
}

/// Zero-argument markers: `{"<identifier>": {}}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WireMarker {
    Variable {},
}

/// Comparison-direction markers carried in the operand tree.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WireOperator {
    LessThan {},
    GreaterThan {},
    LessThanOrEqual {},
    GreaterThanOrEqual {},
}

/// Operand-tree node. Literals and lists serialize bare; field references
/// and operators serialize as tagged objects.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum WireOperand {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    FieldRef { identifier: String, root: WireBinder },
    Operator(WireOperator),
    List(Vec<WireOperand>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structure_node_shape() {
        let node = WireStructure::Conjunction {
            args: vec![WireStructure::Equal {
                args: vec![
                    WirePlaceholder::KeyPath {
                        args: vec![
                            WirePlaceholderArg::Marker(WireMarker::Variable {}),
                            WirePlaceholderArg::TypeName("bool"),
                        ],
                    },
                    WirePlaceholder::Value {
                        args: vec![WirePlaceholderArg::TypeName("bool")],
                    },
                ],
            }],
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "conjunction": {
                    "args": [
                        {
                            "equal": {
                                "args": [
                                    { "keyPath": { "args": [{ "variable": {} }, "bool"] } },
                                    { "value": { "args": ["bool"] } },
                                ]
                            }
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_zero_arg_marker_shape() {
        assert_eq!(
            serde_json::to_value(WireOperator::GreaterThanOrEqual {}).unwrap(),
            json!({ "greaterThanOrEqual": {} })
        );
    }

    #[test]
    fn test_field_ref_shape() {
        let operand = WireOperand::FieldRef {
            identifier: "Track.tagIds".to_string(),
            root: WireBinder { key: 1 },
        };
        assert_eq!(
            serde_json::to_value(&operand).unwrap(),
            json!({ "identifier": "Track.tagIds", "root": { "key": 1 } })
        );
    }

    #[test]
    fn test_operand_literals_serialize_bare() {
        let operand = WireOperand::List(vec![
            WireOperand::String("t1".to_string()),
            WireOperand::Int(3),
            WireOperand::Double(120.0),
            WireOperand::Bool(false),
        ]);
        assert_eq!(
            serde_json::to_value(&operand).unwrap(),
            json!(["t1", 3, 120.0, false])
        );
    }
}
