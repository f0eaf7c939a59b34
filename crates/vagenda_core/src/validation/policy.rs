//! Conformance policy: accepted version, identifier patterns, issue codes.

use once_cell::sync::Lazy;
use regex::Regex;

static HIERARCHICAL_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+(\.[a-zA-Z0-9_-]+)*$").expect("valid hierarchical id regex")
});
static PLAN_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#[a-zA-Z0-9_.-]+|file://.*|https://.*)$").expect("valid plan ref regex")
});

pub const ISSUE_INVALID_VERSION: &str = "invalid_version";
pub const ISSUE_MISSING_ROOT_FIELD: &str = "missing_root_field";
pub const ISSUE_EMPTY_TITLE: &str = "empty_title";
pub const ISSUE_INVALID_ID_FORMAT: &str = "invalid_id_format";
pub const ISSUE_DUPLICATE_ID: &str = "duplicate_id";
pub const ISSUE_INVALID_PLANREF: &str = "invalid_planref";
pub const ISSUE_EMPTY_NARRATIVE_KEY: &str = "empty_narrative_key";
pub const ISSUE_EMPTY_NARRATIVE_CONTENT: &str = "empty_narrative_content";

pub fn is_hierarchical_id(value: &str) -> bool {
    HIERARCHICAL_ID_RE.is_match(value)
}

pub fn is_plan_ref(value: &str) -> bool {
    PLAN_REF_RE.is_match(value)
}
