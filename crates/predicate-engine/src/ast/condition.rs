use crate::ast::operand::OperandNode;
use crate::ast::structure::StructureNode;
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison direction for ordered fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompareOp {
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl CompareOp {
    pub fn identifier(&self) -> &'static str {
        match self {
            CompareOp::LessThan => "lessThan",
            CompareOp::GreaterThan => "greaterThan",
            CompareOp::LessThanOrEqual => "lessThanOrEqual",
            CompareOp::GreaterThanOrEqual => "greaterThanOrEqual",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "lessThan" => Some(CompareOp::LessThan),
            "greaterThan" => Some(CompareOp::GreaterThan),
            "lessThanOrEqual" => Some(CompareOp::LessThanOrEqual),
            "greaterThanOrEqual" => Some(CompareOp::GreaterThanOrEqual),
            _ => None,
        }
    }

    pub fn evaluate(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            CompareOp::LessThan => lhs < rhs,
            CompareOp::GreaterThan => lhs > rhs,
            CompareOp::LessThanOrEqual => lhs <= rhs,
            CompareOp::GreaterThanOrEqual => lhs >= rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Combined predicate tree. Leaves pair a field key path with a literal;
/// combinators require arity >= 2 except `Not`.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Contains { field: String, value: Value },
    Equal { field: String, value: Value },
    NotEqual { field: String, value: Value },
    Compare { field: String, op: CompareOp, value: Value },
    Not(Box<Condition>),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    pub fn contains(field: impl Into<String>, id: impl Into<String>) -> Self {
        Condition::Contains {
            field: field.into(),
            value: Value::String(id.into()),
        }
    }

    pub fn equal_int(field: impl Into<String>, value: i64) -> Self {
        Condition::Equal {
            field: field.into(),
            value: Value::Int(value),
        }
    }

    pub fn equal_bool(field: impl Into<String>, value: bool) -> Self {
        Condition::Equal {
            field: field.into(),
            value: Value::Bool(value),
        }
    }

    pub fn not_equal_int(field: impl Into<String>, value: i64) -> Self {
        Condition::NotEqual {
            field: field.into(),
            value: Value::Int(value),
        }
    }

    pub fn compare(field: impl Into<String>, op: CompareOp, value: f64) -> Self {
        Condition::Compare {
            field: field.into(),
            op,
            value: Value::Double(value),
        }
    }

    pub fn and(lhs: Condition, rhs: Condition) -> Self {
        Condition::And(vec![lhs, rhs])
    }

    pub fn or(lhs: Condition, rhs: Condition) -> Self {
        Condition::Or(vec![lhs, rhs])
    }

    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    /// Rendering pass 1: the operator skeleton with operand type placeholders.
    pub fn structure(&self) -> StructureNode {
        match self {
            Condition::Contains { value, .. } => StructureNode::Contains(value.scalar_type()),
            Condition::Equal { value, .. } => StructureNode::Equal(value.scalar_type()),
            Condition::NotEqual { value, .. } => StructureNode::NotEqual(value.scalar_type()),
            Condition::Compare { value, .. } => StructureNode::Comparison(value.scalar_type()),
            Condition::Not(child) => StructureNode::Negation(Box::new(child.structure())),
            Condition::And(children) => {
                StructureNode::And(children.iter().map(Condition::structure).collect())
            }
            Condition::Or(children) => {
                StructureNode::Or(children.iter().map(Condition::structure).collect())
            }
        }
    }

    /// Rendering pass 2: the operand values and field references. Negation
    /// contributes no operand node of its own.
    pub fn operands(&self) -> OperandNode {
        match self {
            Condition::Contains { field, value }
            | Condition::Equal { field, value }
            | Condition::NotEqual { field, value } => OperandNode::List(vec![
                OperandNode::FieldRef(field.clone()),
                OperandNode::Literal(value.clone()),
            ]),
            Condition::Compare { field, op, value } => OperandNode::List(vec![
                OperandNode::FieldRef(field.clone()),
                OperandNode::Literal(value.clone()),
                OperandNode::Operator(*op),
            ]),
            Condition::Not(child) => child.operands(),
            Condition::And(children) | Condition::Or(children) => {
                OperandNode::List(children.iter().map(Condition::operands).collect())
            }
        }
    }
}
