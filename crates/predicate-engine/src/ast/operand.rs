use crate::ast::condition::CompareOp;
use model::core::value::Value;

/// Value/reference half of a compiled predicate, shape-isomorphic to the
/// structure tree. `Operator` is the comparison-direction marker a
/// `Comparison` leaf carries as its third list element.
#[derive(Debug, Clone, PartialEq)]
pub enum OperandNode {
    Literal(Value),
    FieldRef(String),
    Operator(CompareOp),
    List(Vec<OperandNode>),
}

impl OperandNode {
    pub fn field_ref(identifier: impl Into<String>) -> Self {
        OperandNode::FieldRef(identifier.into())
    }

    /// Field identifiers referenced anywhere under this node, in order.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            OperandNode::FieldRef(identifier) => out.push(identifier),
            OperandNode::List(items) => {
                for item in items {
                    item.collect_fields(out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_fields_in_order() {
        let tree = OperandNode::List(vec![
            OperandNode::List(vec![
                OperandNode::FieldRef("Track.tagIds".to_string()),
                OperandNode::Literal(Value::String("t1".to_string())),
            ]),
            OperandNode::List(vec![
                OperandNode::FieldRef("Track.isDisliked".to_string()),
                OperandNode::Literal(Value::Bool(false)),
            ]),
        ]);
        assert_eq!(
            tree.referenced_fields(),
            vec!["Track.tagIds", "Track.isDisliked"]
        );
    }
}
