pub mod ast;
pub mod compile;
pub mod decode;
pub mod error;
pub mod extract;
pub mod fields;
pub mod wire;

pub use ast::{shape_matches, CompareOp, Condition, OperandNode, StructureNode};
pub use compile::{compile, CompiledPredicate, ROOT_VARIABLE_KEY};
pub use decode::{decode, decode_str, FieldAllowList, TrackPredicate, TRACK_ALLOW_LIST};
pub use error::{DecodeError, Result};
pub use extract::{extract, FilterPartition};
pub use wire::{serialize, to_json, WireDocument};
