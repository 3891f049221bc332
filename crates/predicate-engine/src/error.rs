use thiserror::Error;

/// Errors surfaced while reconstructing a predicate from a wire document.
///
/// Both variants fail the whole reconstruction; there is no partial or
/// best-effort decoding. Compilation and serialization are total and have no
/// error type of their own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A field reference names an identifier the allow-list does not expose.
    /// Expected for foreign or tampered documents; callers reject the
    /// predicate wholesale.
    #[error("field reference '{0}' is not exposed by the allow-list")]
    UnresolvedField(String),

    /// Unknown operator identifier, arity mismatch, or an operand tree whose
    /// shape does not line up with the structure tree.
    #[error("malformed wire node: {0}")]
    MalformedWireNode(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
