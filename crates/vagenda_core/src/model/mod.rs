//! vAgenda document model.
//!
//! # Responsibility
//! - Define the document aggregate and its two optional sub-aggregates.
//! - Own the serde wire mapping (camelCase keys, unknown-field extras).
//!
//! # Invariants
//! - `Document::todo_list` and `Document::plan` are independently optional.
//! - `Plan::narratives` always exists, possibly empty.
//! - Item and phase order is positional and semantically meaningful.

pub mod document;
pub mod plan;
pub mod todo;

/// Unknown JSON members carried through decode/encode unchanged, in source
/// order.
pub type Extras = serde_json::Map<String, serde_json::Value>;
