//! JSON parse/emit for vAgenda documents.

use crate::codec::{CodecError, CodecResult, DumpOptions, LoadOptions};
use crate::model::document::Document;
use crate::validation::validate;
use log::{debug, info};
use serde_json::{Map, Value};
use std::path::Path;

/// Parses JSON text, requiring an object at the root.
pub fn parse_json(text: &str) -> CodecResult<Value> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(CodecError::NotAnObject);
    }
    Ok(value)
}

/// Decodes a document from JSON text.
///
/// # Errors
/// - `Json` / `NotAnObject` for malformed input.
/// - `Invalid` when `options.strict` is set and validation reports errors.
pub fn load_str(text: &str, options: LoadOptions) -> CodecResult<Document> {
    let value = parse_json(text)?;
    let document: Document = serde_json::from_value(value)?;
    if options.strict {
        let report = validate(&document);
        if !report.is_valid() {
            return Err(CodecError::Invalid(report));
        }
    }
    debug!(
        "event=document_loaded module=codec status=ok strict={} todo_items={} phases={}",
        options.strict,
        document.todo_items().len(),
        document.phases().len()
    );
    Ok(document)
}

/// Decodes a document from a UTF-8 JSON file.
pub fn load_file(path: impl AsRef<Path>, options: LoadOptions) -> CodecResult<Document> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text, options)
}

/// Encodes a document as JSON text.
pub fn dump_str(document: &Document, options: DumpOptions) -> CodecResult<String> {
    let mut rendered = if options.canonical {
        let value = sort_keys(serde_json::to_value(document)?);
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string_pretty(document)?
    };
    rendered.push('\n');
    Ok(rendered)
}

/// Encodes a document into a file, replacing existing content.
pub fn dump_file(
    document: &Document,
    path: impl AsRef<Path>,
    options: DumpOptions,
) -> CodecResult<()> {
    let path = path.as_ref();
    let rendered = dump_str(document, options)?;
    std::fs::write(path, rendered.as_bytes()).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "event=document_written module=codec status=ok canonical={} bytes={}",
        options.canonical,
        rendered.len()
    );
    Ok(())
}

// Rebuilds objects with keys inserted in sorted order so canonical output
// does not depend on serde_json's map backend.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|left, right| left.0.cmp(&right.0));
            let sorted = entries
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect::<Map<String, Value>>();
            Value::Object(sorted)
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

impl Document {
    /// Decodes a document from JSON text. See [`load_str`].
    pub fn from_json(text: &str, options: LoadOptions) -> CodecResult<Self> {
        load_str(text, options)
    }

    /// Encodes this document as JSON text. See [`dump_str`].
    pub fn to_json(&self, options: DumpOptions) -> CodecResult<String> {
        dump_str(self, options)
    }
}
