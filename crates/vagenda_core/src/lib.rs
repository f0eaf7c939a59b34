//! Core document logic for vAgenda todo lists and plans.
//! This crate owns the document model and every edit invariant.

pub mod codec;
pub mod edit;
pub mod logging;
pub mod model;
pub mod validation;

pub use codec::{CodecError, CodecResult, DumpOptions, LoadOptions};
pub use edit::{EditError, EditResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::document::{Document, VAgendaInfo, SCHEMA_VERSION};
pub use model::plan::{Narrative, Narratives, Phase, PhaseStatus, Plan, PlanStatus};
pub use model::todo::{ItemStatus, TodoItem, TodoList};
pub use model::Extras;
pub use validation::{validate, Issue, Severity, ValidationReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
