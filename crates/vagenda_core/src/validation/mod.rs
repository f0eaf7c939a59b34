//! Conformance validation for vAgenda documents.
//!
//! # Responsibility
//! - Check a decoded `Document` against format rules the type system does
//!   not already enforce (version, identifiers, references, blank text).
//! - Collect every finding instead of stopping at the first one.
//!
//! # Invariants
//! - Validation never mutates the document.
//! - Issue `code` values are stable identifiers for callers to match on.

pub mod issues;
pub mod policy;

use crate::model::document::{Document, SCHEMA_VERSION};
use crate::model::plan::Plan;
use crate::model::todo::TodoList;
use log::debug;
use std::collections::HashSet;

pub use issues::{Issue, Severity, ValidationReport};
use policy::{
    is_hierarchical_id, is_plan_ref, ISSUE_DUPLICATE_ID, ISSUE_EMPTY_NARRATIVE_CONTENT,
    ISSUE_EMPTY_NARRATIVE_KEY, ISSUE_EMPTY_TITLE, ISSUE_INVALID_ID_FORMAT, ISSUE_INVALID_PLANREF,
    ISSUE_INVALID_VERSION, ISSUE_MISSING_ROOT_FIELD,
};

/// Validates `document` and returns every issue found.
pub fn validate(document: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();

    match &document.info {
        None => report.add_error(
            ISSUE_MISSING_ROOT_FIELD,
            "vAgendaInfo",
            "missing required root field: vAgendaInfo",
        ),
        Some(info) if info.version != SCHEMA_VERSION => report.add_error(
            ISSUE_INVALID_VERSION,
            "vAgendaInfo.version",
            format!("expected version '{SCHEMA_VERSION}', got '{}'", info.version),
        ),
        Some(_) => {}
    }

    if document.todo_list.is_none() && document.plan.is_none() {
        report.add_error(
            ISSUE_MISSING_ROOT_FIELD,
            "$",
            "document must contain a todoList or a plan",
        );
    }

    if let Some(todo_list) = &document.todo_list {
        validate_todo_list(todo_list, &mut report);
    }
    if let Some(plan) = &document.plan {
        validate_plan(plan, &mut report);
    }

    debug!(
        "event=document_validated module=validation status={} errors={} warnings={}",
        if report.is_valid() { "ok" } else { "invalid" },
        report.errors.len(),
        report.warnings.len()
    );
    report
}

impl Document {
    /// Shorthand for [`validate`].
    pub fn validate(&self) -> ValidationReport {
        validate(self)
    }
}

fn validate_todo_list(todo_list: &TodoList, report: &mut ValidationReport) {
    for (index, item) in todo_list.items.iter().enumerate() {
        let path = format!("todoList.items[{index}]");
        check_title(&item.title, &path, report);
        check_id(item.id.as_deref(), &path, report);

        if let Some(plan_ref) = item.plan_ref.as_deref() {
            if !is_plan_ref(plan_ref) {
                report.add_error(
                    ISSUE_INVALID_PLANREF,
                    format!("{path}.planRef"),
                    "planRef must match #..., file://..., or https://...",
                );
            }
        }
    }
}

fn validate_plan(plan: &Plan, report: &mut ValidationReport) {
    check_title(&plan.title, "plan", report);

    let mut seen_ids = HashSet::new();
    for (index, phase) in plan.phases.iter().enumerate() {
        let path = format!("plan.phases[{index}]");
        check_title(&phase.title, &path, report);
        check_id(phase.id.as_deref(), &path, report);

        if let Some(id) = phase.id.as_deref() {
            if !seen_ids.insert(id) {
                report.add_error(
                    ISSUE_DUPLICATE_ID,
                    format!("{path}.id"),
                    format!("phase id '{id}' is already used by an earlier phase"),
                );
            }
        }
    }

    for (key, narrative) in &plan.narratives {
        if key.trim().is_empty() {
            report.add_error(
                ISSUE_EMPTY_NARRATIVE_KEY,
                "plan.narratives",
                "narrative keys must not be blank",
            );
            continue;
        }
        if narrative.content.trim().is_empty() {
            report.add_warning(
                ISSUE_EMPTY_NARRATIVE_CONTENT,
                format!("plan.narratives.{key}"),
                "narrative has no content",
            );
        }
    }
}

fn check_title(title: &str, path: &str, report: &mut ValidationReport) {
    if title.trim().is_empty() {
        report.add_error(
            ISSUE_EMPTY_TITLE,
            format!("{path}.title"),
            "title must not be blank",
        );
    }
}

fn check_id(id: Option<&str>, path: &str, report: &mut ValidationReport) {
    if let Some(id) = id {
        if !is_hierarchical_id(id) {
            report.add_error(
                ISSUE_INVALID_ID_FORMAT,
                format!("{path}.id"),
                "id must match hierarchical ID pattern",
            );
        }
    }
}
