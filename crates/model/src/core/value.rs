use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value carried by a predicate operand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
}

impl Value {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Value::String(_) => ScalarType::String,
            Value::Int(_) => ScalarType::Int,
            Value::Double(_) => ScalarType::Double,
            Value::Bool(_) => ScalarType::Bool,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            Value::String(_) => None,
            Value::Bool(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Double(_) => None,
            Value::String(_) => None,
            Value::Bool(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Scalar types a predicate operand can take, with their stable wire names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int,
    Double,
    Bool,
}

impl ScalarType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "int",
            ScalarType::Double => "double",
            ScalarType::Bool => "bool",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(ScalarType::String),
            "int" => Some(ScalarType::Int),
            "double" => Some(ScalarType::Double),
            "bool" => Some(ScalarType::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
