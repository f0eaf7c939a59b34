//! Document encode/decode.
//!
//! # Responsibility
//! - Turn JSON text or files into `Document` values and back.
//! - Optionally gate loads on conformance validation (strict mode).
//!
//! # Invariants
//! - Output is two-space indented JSON with a trailing newline.
//! - Unknown members survive a load/dump cycle.

pub mod json;

use crate::validation::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

pub use json::{dump_file, dump_str, load_file, load_str, parse_json};

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to access `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid vAgenda JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vAgenda JSON document must be an object")]
    NotAnObject,
    #[error("document failed validation: {}", .0.summary())]
    Invalid(ValidationReport),
}

/// Decode options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject documents whose validation report contains errors.
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Encode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Sort object keys; otherwise members follow declaration order.
    pub canonical: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { canonical: true }
    }
}
