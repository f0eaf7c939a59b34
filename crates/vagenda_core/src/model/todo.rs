//! Todo list sub-aggregate.
//!
//! # Responsibility
//! - Define `TodoList`, `TodoItem` and the item lifecycle status.
//! - Provide bounds-checked positional primitives used by document edits.
//!
//! # Invariants
//! - Items are addressed by position; valid positions are `0..items.len()`.
//! - Removal keeps the remaining items contiguous and in relative order.

use crate::edit::{EditError, EditResult};
use crate::model::Extras;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a todo item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Work is in progress.
    InProgress,
    /// Finished.
    Completed,
    /// Waiting on something external.
    Blocked,
    /// No longer actionable.
    Cancelled,
}

impl ItemStatus {
    /// Wire name, as used in JSON and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One actionable entry in a todo list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub title: String,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hierarchical ID such as `1.2.3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,
    /// `#phase-id`, `file://...` or `https://...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_ref: Option<String>,
    #[serde(flatten)]
    pub extras: Extras,
}

impl TodoItem {
    /// Creates a pending item with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style status override.
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the item's `uid`, generating and storing one when absent.
    ///
    /// Existing identifiers are never replaced.
    pub fn ensure_uid(&mut self) -> Uuid {
        *self.uid.get_or_insert_with(Uuid::new_v4)
    }
}

/// Ordered sequence of todo items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub items: Vec<TodoItem>,
    #[serde(flatten)]
    pub extras: Extras,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            extras: Extras::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` after the current last item.
    pub fn add_item(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    /// Applies `apply` to the item at `index` in place.
    ///
    /// # Errors
    /// - `EditError::InvalidIndex` when `index >= len`; `apply` is not called.
    pub fn update_item<F>(&mut self, index: usize, apply: F) -> EditResult<()>
    where
        F: FnOnce(&mut TodoItem),
    {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(EditError::InvalidIndex { index, len })?;
        apply(item);
        Ok(())
    }

    /// Removes and returns the item at `index`, shifting later items left.
    ///
    /// # Errors
    /// - `EditError::InvalidIndex` when `index >= len`; the list is untouched.
    pub fn remove_item(&mut self, index: usize) -> EditResult<TodoItem> {
        let len = self.items.len();
        if index >= len {
            return Err(EditError::InvalidIndex { index, len });
        }
        Ok(self.items.remove(index))
    }
}
