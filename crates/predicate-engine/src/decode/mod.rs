//! Safelisted reconstruction of executable predicates from wire documents.
//!
//! Structural nodes resolve purely by identifier and arity; every field
//! reference must resolve through the injected [`FieldAllowList`]. Anything
//! else fails closed — there is no partial reconstruction.

pub mod allowlist;
pub mod matcher;

pub use allowlist::{FieldAllowList, FieldDef, TrackField, TRACK_ALLOW_LIST};
pub use matcher::TrackPredicate;

use crate::ast::CompareOp;
use crate::compile::ROOT_VARIABLE_KEY;
use crate::decode::matcher::Matcher;
use crate::error::{DecodeError, Result};
use model::core::value::{ScalarType, Value};
use serde_json::Value as Json;
use tracing::debug;

/// Reconstruct an executable predicate from a JSON string.
pub fn decode_str(json: &str, allow: &FieldAllowList) -> Result<TrackPredicate> {
    let doc: Json = serde_json::from_str(json)
        .map_err(|e| DecodeError::MalformedWireNode(format!("invalid JSON: {e}")))?;
    decode(&doc, allow)
}

/// Reconstruct an executable predicate from a parsed wire document.
pub fn decode(doc: &Json, allow: &FieldAllowList) -> Result<TrackPredicate> {
    let clauses = doc
        .get("predicate")
        .and_then(Json::as_array)
        .ok_or_else(|| malformed("document root must carry a 'predicate' list"))?;
    let clause = match clauses.as_slice() {
        [clause] => clause,
        _ => {
            return Err(malformed(format!(
                "expected a single predicate clause, got {}",
                clauses.len()
            )))
        }
    };

    let key = clause
        .get("variable")
        .and_then(|v| v.get("key"))
        .and_then(Json::as_i64)
        .ok_or_else(|| malformed("predicate clause is missing its binder key"))?;
    if key != i64::from(ROOT_VARIABLE_KEY) {
        return Err(malformed(format!(
            "unsupported binder key {key}; only single-level predicates are accepted"
        )));
    }

    let structure = clause
        .get("structure")
        .ok_or_else(|| malformed("predicate clause is missing its structure tree"))?;
    let expression = clause
        .get("expression")
        .ok_or_else(|| malformed("predicate clause is missing its expression tree"))?;

    let matcher = node(structure, expression, allow, key)?;
    debug!(fields = allow.len(), "decoded wire predicate");
    Ok(TrackPredicate::new(matcher))
}

fn malformed(detail: impl Into<String>) -> DecodeError {
    DecodeError::MalformedWireNode(detail.into())
}

/// One operator node: a single-key object wrapping its body.
fn operator_entry(json: &Json) -> Result<(&str, &Json)> {
    let object = json
        .as_object()
        .ok_or_else(|| malformed(format!("expected an operator object, got {json}")))?;
    if object.len() != 1 {
        return Err(malformed(format!(
            "operator objects carry exactly one identifier, got {}",
            object.len()
        )));
    }
    let (identifier, body) = object.iter().next().expect("length checked above");
    Ok((identifier.as_str(), body))
}

fn node_args(identifier: &str, body: &Json) -> Result<Vec<Json>> {
    body.get("args")
        .and_then(Json::as_array)
        .cloned()
        .ok_or_else(|| malformed(format!("'{identifier}' node is missing its args array")))
}

fn node(structure: &Json, operands: &Json, allow: &FieldAllowList, key: i64) -> Result<Matcher> {
    let (identifier, body) = operator_entry(structure)?;
    match identifier {
        "conjunction" | "disjunction" => {
            let args = node_args(identifier, body)?;
            if args.len() < 2 {
                return Err(malformed(format!(
                    "'{identifier}' requires at least 2 children, got {}",
                    args.len()
                )));
            }
            let items = operands.as_array().ok_or_else(|| {
                malformed(format!("'{identifier}' expects a list of operand groups"))
            })?;
            if items.len() != args.len() {
                return Err(malformed(format!(
                    "'{identifier}' has {} children but {} operand groups",
                    args.len(),
                    items.len()
                )));
            }
            let children = args
                .iter()
                .zip(items.iter())
                .map(|(child, item)| node(child, item, allow, key))
                .collect::<Result<Vec<_>>>()?;
            if identifier == "conjunction" {
                Ok(Matcher::And(children))
            } else {
                Ok(Matcher::Or(children))
            }
        }
        "negation" => {
            let args = node_args(identifier, body)?;
            match args.as_slice() {
                [child] => Ok(Matcher::Not(Box::new(node(child, operands, allow, key)?))),
                _ => Err(malformed(format!(
                    "'negation' requires exactly 1 child, got {}",
                    args.len()
                ))),
            }
        }
        "equal" | "notEqual" | "contains" | "comparison" => {
            leaf(identifier, body, operands, allow, key)
        }
        other => Err(malformed(format!("unknown operator identifier '{other}'"))),
    }
}

fn leaf(
    identifier: &str,
    body: &Json,
    operands: &Json,
    allow: &FieldAllowList,
    key: i64,
) -> Result<Matcher> {
    let declared = leaf_placeholder_type(identifier, body)?;

    let items = operands
        .as_array()
        .ok_or_else(|| malformed(format!("'{identifier}' expects an operand list")))?;
    let expected_len = if identifier == "comparison" { 3 } else { 2 };
    if items.len() != expected_len {
        return Err(malformed(format!(
            "'{identifier}' expects {expected_len} operands, got {}",
            items.len()
        )));
    }

    let field = field_ref(&items[0], allow, key)?;
    let value = literal(&items[1], declared)?;

    match identifier {
        "equal" => Ok(Matcher::Equal { field, value }),
        "notEqual" => Ok(Matcher::NotEqual { field, value }),
        "contains" => Ok(Matcher::Contains { field, value }),
        "comparison" => {
            let op = comparison_operator(&items[2])?;
            Ok(Matcher::Compare { field, op, value })
        }
        _ => unreachable!("leaf called for non-leaf identifier"),
    }
}

/// Validate a leaf's placeholder pair and return the scalar type both halves
/// declare.
fn leaf_placeholder_type(identifier: &str, body: &Json) -> Result<ScalarType> {
    let args = node_args(identifier, body)?;
    let [key_path, value] = args.as_slice() else {
        return Err(malformed(format!(
            "'{identifier}' declares {} placeholders, expected 2",
            args.len()
        )));
    };

    let (kp_ident, kp_body) = operator_entry(key_path)?;
    if kp_ident != "keyPath" {
        return Err(malformed(format!(
            "'{identifier}' placeholder 0 must be 'keyPath', got '{kp_ident}'"
        )));
    }
    let kp_args = node_args(kp_ident, kp_body)?;
    let [marker, kp_type] = kp_args.as_slice() else {
        return Err(malformed("'keyPath' placeholder takes 2 args"));
    };
    let (marker_ident, marker_body) = operator_entry(marker)?;
    if marker_ident != "variable" || !marker_body.as_object().is_some_and(|m| m.is_empty()) {
        return Err(malformed("'keyPath' placeholder must open with a bare variable marker"));
    }
    let kp_scalar = placeholder_scalar(kp_type)?;

    let (value_ident, value_body) = operator_entry(value)?;
    if value_ident != "value" {
        return Err(malformed(format!(
            "'{identifier}' placeholder 1 must be 'value', got '{value_ident}'"
        )));
    }
    let value_args = node_args(value_ident, value_body)?;
    let [value_type] = value_args.as_slice() else {
        return Err(malformed("'value' placeholder takes 1 arg"));
    };
    let value_scalar = placeholder_scalar(value_type)?;

    if kp_scalar != value_scalar {
        return Err(malformed(format!(
            "placeholder types disagree: keyPath says {kp_scalar}, value says {value_scalar}"
        )));
    }
    Ok(kp_scalar)
}

fn placeholder_scalar(json: &Json) -> Result<ScalarType> {
    json.as_str()
        .and_then(ScalarType::from_wire_name)
        .ok_or_else(|| malformed(format!("unknown placeholder type {json}")))
}

fn field_ref(json: &Json, allow: &FieldAllowList, key: i64) -> Result<TrackField> {
    let identifier = json
        .get("identifier")
        .and_then(Json::as_str)
        .ok_or_else(|| malformed("field reference is missing its identifier"))?;
    let root_key = json
        .get("root")
        .and_then(|r| r.get("key"))
        .and_then(Json::as_i64)
        .ok_or_else(|| malformed("field reference is missing its binder key"))?;
    if root_key != key {
        return Err(malformed(format!(
            "field reference binds key {root_key}, expected {key}"
        )));
    }
    allow
        .resolve(identifier)
        .map(|def| def.field)
        .ok_or_else(|| DecodeError::UnresolvedField(identifier.to_string()))
}

fn literal(json: &Json, declared: ScalarType) -> Result<Value> {
    let value = match declared {
        ScalarType::String => json.as_str().map(|s| Value::String(s.to_string())),
        ScalarType::Int => json.as_i64().map(Value::Int),
        ScalarType::Double => json.as_f64().map(Value::Double),
        ScalarType::Bool => json.as_bool().map(Value::Bool),
    };
    value.ok_or_else(|| malformed(format!("literal {json} is not a {declared}")))
}

fn comparison_operator(json: &Json) -> Result<CompareOp> {
    let (identifier, body) = operator_entry(json)?;
    if !body.as_object().is_some_and(|m| m.is_empty()) {
        return Err(malformed(format!(
            "comparison marker '{identifier}' must have an empty body"
        )));
    }
    CompareOp::from_identifier(identifier)
        .ok_or_else(|| malformed(format!("unknown comparison marker '{identifier}'")))
}
