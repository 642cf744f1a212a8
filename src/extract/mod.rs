//! Pattern extractors for command references.
//!
//! Pure functions over raw text. Each returns a `HashSet<String>` of the
//! command identifiers it recognizes; absence of matches is an empty set,
//! never an error. Identifiers are taken verbatim, case-sensitive, with no
//! normalization.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a quoted `command` key followed by a quoted value, tolerating
/// whitespace after the colon. The leading quote keeps field names like
/// `subcommand` from matching.
static COMMAND_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""command":\s*"([^"]+)""#).unwrap());

/// Matches the legacy compact `cmd` key. No whitespace tolerance: legacy
/// entries were machine-written and never carry a space after the colon.
static LEGACY_COMMAND_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""cmd":"([^"]+)""#).unwrap());

/// Matches second-level Markdown headings whose content is a backtick-quoted
/// token, e.g. `` ## `Move` ``.
static OVERVIEW_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## `([^`]+)`").unwrap());

/// Extract every `"command": "Name"` value from the given text.
pub fn command_fields(text: &str) -> HashSet<String> {
    COMMAND_FIELD
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Extract every legacy `"cmd":"Name"` value from the given text.
pub fn legacy_command_fields(text: &str) -> HashSet<String> {
    LEGACY_COMMAND_FIELD
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Extract the documented command names from an overview document: one per
/// `` ## `Name` `` heading, trimmed. Headings at other levels and
/// second-level headings without a backticked token are ignored.
pub fn overview_headings(text: &str) -> HashSet<String> {
    OVERVIEW_HEADING
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect()
}
