//! Document edit operations.
//!
//! # Responsibility
//! - Provide add/update/remove/read operations over the todo list and plan
//!   of a `Document`.
//! - Check presence and bounds before touching any state.
//!
//! # Invariants
//! - A failed call leaves the document exactly as it was.
//! - Reads never fail; an absent sub-aggregate reads as empty.
//! - Phase operations addressed by index report a missing plan as
//!   `InvalidIndex { len: 0 }`, not `NoPlan`.
//! - Failures are returned, never logged here.

use crate::model::document::Document;
use crate::model::plan::{Narrative, Narratives, Phase, PhaseStatus, Plan, PlanStatus};
use crate::model::todo::{ItemStatus, TodoItem, TodoList};
use log::debug;
use thiserror::Error;

static EMPTY_NARRATIVES: Narratives = Narratives::new();

pub type EditResult<T> = Result<T, EditError>;

/// Failure of a document edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("document does not contain a todo list")]
    NoTodoList,
    #[error("document does not contain a plan")]
    NoPlan,
    #[error("index {index} out of range for length {len}")]
    InvalidIndex { index: usize, len: usize },
}

impl Document {
    fn todo_list_mut(&mut self) -> EditResult<&mut TodoList> {
        self.todo_list.as_mut().ok_or(EditError::NoTodoList)
    }

    fn plan_mut(&mut self) -> EditResult<&mut Plan> {
        self.plan.as_mut().ok_or(EditError::NoPlan)
    }

    /// Bounds-checks `index` against the plan's phases; a missing plan
    /// counts as zero phases.
    fn checked_phases_mut(&mut self, index: usize) -> EditResult<&mut Vec<Phase>> {
        let len = self.plan.as_ref().map_or(0, |plan| plan.phases.len());
        match self.plan.as_mut() {
            Some(plan) if index < len => Ok(&mut plan.phases),
            _ => Err(EditError::InvalidIndex { index, len }),
        }
    }

    // ---- todo list ----

    /// Appends `item` to the todo list.
    ///
    /// # Errors
    /// - `NoTodoList` when the document has no todo list.
    pub fn add_todo_item(&mut self, item: TodoItem) -> EditResult<()> {
        let list = self.todo_list_mut()?;
        list.add_item(item);
        debug!(
            "event=todo_item_added module=edit status=ok len={}",
            list.len()
        );
        Ok(())
    }

    /// Replaces the todo item at `index` wholesale.
    ///
    /// # Errors
    /// - `NoTodoList` when the document has no todo list.
    /// - `InvalidIndex` when `index` is out of range.
    pub fn update_todo_item(&mut self, index: usize, item: TodoItem) -> EditResult<()> {
        self.todo_list_mut()?
            .update_item(index, |existing| *existing = item)?;
        debug!("event=todo_item_updated module=edit status=ok index={index}");
        Ok(())
    }

    /// Sets only the status of the todo item at `index`.
    ///
    /// # Errors
    /// Same as [`Document::update_todo_item`].
    pub fn update_todo_item_status(&mut self, index: usize, status: ItemStatus) -> EditResult<()> {
        self.todo_list_mut()?
            .update_item(index, |item| item.status = status)?;
        debug!(
            "event=todo_item_status_updated module=edit status=ok index={index} item_status={}",
            status.as_str()
        );
        Ok(())
    }

    /// Removes and returns the todo item at `index`.
    ///
    /// Later items shift left by one.
    ///
    /// # Errors
    /// Same as [`Document::update_todo_item`].
    pub fn remove_todo_item(&mut self, index: usize) -> EditResult<TodoItem> {
        let list = self.todo_list_mut()?;
        let removed = list.remove_item(index)?;
        debug!(
            "event=todo_item_removed module=edit status=ok index={index} len={}",
            list.len()
        );
        Ok(removed)
    }

    /// Current todo items; empty when the document has no todo list.
    pub fn todo_items(&self) -> &[TodoItem] {
        self.todo_list
            .as_ref()
            .map(|list| list.items.as_slice())
            .unwrap_or(&[])
    }

    // ---- plan phases ----

    /// Appends `phase` to the plan.
    ///
    /// # Errors
    /// - `NoPlan` when the document has no plan.
    pub fn add_phase(&mut self, phase: Phase) -> EditResult<()> {
        let plan = self.plan_mut()?;
        plan.phases.push(phase);
        debug!(
            "event=phase_added module=edit status=ok len={}",
            plan.phases.len()
        );
        Ok(())
    }

    /// Replaces the phase at `index` wholesale.
    ///
    /// # Errors
    /// - `InvalidIndex` when the plan is absent or `index` is out of range.
    pub fn update_phase(&mut self, index: usize, phase: Phase) -> EditResult<()> {
        self.checked_phases_mut(index)?[index] = phase;
        debug!("event=phase_updated module=edit status=ok index={index}");
        Ok(())
    }

    /// Sets only the status of the phase at `index`.
    ///
    /// # Errors
    /// Same as [`Document::update_phase`].
    pub fn update_phase_status(&mut self, index: usize, status: PhaseStatus) -> EditResult<()> {
        self.checked_phases_mut(index)?[index].status = status;
        debug!(
            "event=phase_status_updated module=edit status=ok index={index} phase_status={}",
            status.as_str()
        );
        Ok(())
    }

    /// Removes and returns the phase at `index`; later phases shift left.
    ///
    /// # Errors
    /// Same as [`Document::update_phase`].
    pub fn remove_phase(&mut self, index: usize) -> EditResult<Phase> {
        let phases = self.checked_phases_mut(index)?;
        let removed = phases.remove(index);
        debug!(
            "event=phase_removed module=edit status=ok index={index} len={}",
            phases.len()
        );
        Ok(removed)
    }

    /// Current phases; empty when the document has no plan.
    pub fn phases(&self) -> &[Phase] {
        self.plan
            .as_ref()
            .map(|plan| plan.phases.as_slice())
            .unwrap_or(&[])
    }

    // ---- plan narratives ----

    /// Inserts `narrative` under `key`, returning the value it replaced.
    ///
    /// # Errors
    /// - `NoPlan` when the document has no plan.
    pub fn add_narrative(
        &mut self,
        key: impl Into<String>,
        narrative: Narrative,
    ) -> EditResult<Option<Narrative>> {
        let plan = self.plan_mut()?;
        let key = key.into();
        let key_len = key.len();
        let previous = plan.narratives.insert(key, narrative);
        debug!(
            "event=narrative_added module=edit status=ok key_len={key_len} replaced={} count={}",
            previous.is_some(),
            plan.narratives.len()
        );
        Ok(previous)
    }

    /// Removes the narrative under `key` if present.
    ///
    /// Removing a missing key is a no-op and returns `Ok(None)`.
    ///
    /// # Errors
    /// - `NoPlan` when the document has no plan.
    pub fn remove_narrative(&mut self, key: &str) -> EditResult<Option<Narrative>> {
        let plan = self.plan_mut()?;
        let removed = plan.narratives.remove(key);
        debug!(
            "event=narrative_removed module=edit status=ok found={} count={}",
            removed.is_some(),
            plan.narratives.len()
        );
        Ok(removed)
    }

    /// Current narratives; empty when the document has no plan.
    pub fn narratives(&self) -> &Narratives {
        self.plan
            .as_ref()
            .map(|plan| &plan.narratives)
            .unwrap_or(&EMPTY_NARRATIVES)
    }

    // ---- plan status ----

    /// Sets the plan status. Any status may follow any other.
    ///
    /// # Errors
    /// - `NoPlan` when the document has no plan.
    pub fn update_plan_status(&mut self, status: PlanStatus) -> EditResult<()> {
        self.plan_mut()?.status = status;
        debug!(
            "event=plan_status_updated module=edit status=ok plan_status={}",
            status.as_str()
        );
        Ok(())
    }
}
