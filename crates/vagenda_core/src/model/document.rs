//! Document root aggregate.
//!
//! # Responsibility
//! - Hold document metadata and the optional todo list / plan.
//! - Offer constructors for collaborators that build documents in memory.
//!
//! # Invariants
//! - A missing sub-aggregate is `None`, never an empty placeholder.
//!
//! # See also
//! - `crate::edit` for the mutation surface.

use crate::model::plan::Plan;
use crate::model::todo::TodoList;
use crate::model::Extras;
use serde::{Deserialize, Serialize};

/// Document format version understood by this crate.
pub const SCHEMA_VERSION: &str = "0.2";

/// `vAgendaInfo` metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VAgendaInfo {
    /// A block without `version` decodes to `""` so validation reports it.
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// RFC 3339 timestamp text; kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(flatten)]
    pub extras: Extras,
}

impl Default for VAgendaInfo {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            author: None,
            description: None,
            created: None,
            extras: Extras::new(),
        }
    }
}

/// Root agenda document.
///
/// `info` is `None` only for decoded documents that lacked the
/// `vAgendaInfo` block; validation reports that as a missing root field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "vAgendaInfo", default, skip_serializing_if = "Option::is_none")]
    pub info: Option<VAgendaInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_list: Option<TodoList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(flatten)]
    pub extras: Extras,
}

impl Default for Document {
    /// Empty document stamped with the current [`SCHEMA_VERSION`].
    fn default() -> Self {
        Self {
            info: Some(VAgendaInfo::default()),
            todo_list: None,
            plan: None,
            extras: Extras::new(),
        }
    }
}

impl Document {
    /// Creates a document carrying only a todo list.
    pub fn with_todo_list(todo_list: TodoList) -> Self {
        Self {
            todo_list: Some(todo_list),
            ..Self::default()
        }
    }

    /// Creates a document carrying only a plan.
    pub fn with_plan(plan: Plan) -> Self {
        Self {
            plan: Some(plan),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, SCHEMA_VERSION};
    use crate::model::todo::TodoList;
    use serde_json::json;

    #[test]
    fn absent_sub_aggregates_are_not_serialized() {
        let value = serde_json::to_value(Document::default()).unwrap();

        assert_eq!(value, json!({ "vAgendaInfo": { "version": SCHEMA_VERSION } }));
    }

    #[test]
    fn missing_info_block_decodes_to_none() {
        let doc: Document = serde_json::from_value(json!({ "todoList": { "items": [] } })).unwrap();

        assert_eq!(doc.info, None);
        assert!(doc.todo_list.is_some());
    }

    #[test]
    fn todo_list_uses_camel_case_member_name() {
        let value = serde_json::to_value(Document::with_todo_list(TodoList::new())).unwrap();

        assert_eq!(value["todoList"], json!({ "items": [] }));
        assert!(value.get("plan").is_none());
    }
}
