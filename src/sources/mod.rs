//! Source readers for the three input documents.
//!
//! Each reader opens one named file, hands its text to the pattern
//! extractors, and returns the aggregated command set. Readers never decide
//! recovery policy themselves; they surface an [`AuditError`] and let the
//! caller substitute an empty contribution.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AuditError, Result};
use crate::extract;

/// One record of the commands JSON file. Only the `value` field matters;
/// everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Raw record payload. A string here embeds escaped JSON command
    /// references; anything else means the record is skipped.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl CommandRecord {
    /// The record's payload text, unescaped (`\"` becomes `"`), or `None`
    /// when the record carries no usable string value.
    pub fn unescaped_value(&self) -> Option<String> {
        self.value
            .as_ref()
            .and_then(|v| v.as_str())
            .map(|v| v.replace("\\\"", "\""))
    }
}

/// Load and parse the commands JSON file as an ordered sequence of records.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CommandRecord>> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| AuditError::from_io(path, e))?;

    serde_json::from_str(&content).map_err(|e| AuditError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the structured commands file and extract every embedded
/// `"command": "Name"` reference.
///
/// Records without a string `value` are skipped silently. The escaped
/// `\"` sequences inside each value are unescaped before scanning, and the
/// whole unescaped blob is scanned at once.
pub fn read_commands_file(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let records = load_records(path)?;

    let mut commands = HashSet::new();
    for record in &records {
        if let Some(unescaped) = record.unescaped_value() {
            commands.extend(extract::command_fields(&unescaped));
        }
    }

    debug!(path = %path.display(), count = commands.len(), "scanned commands file");
    Ok(commands)
}

/// Read the reference manual and extract command references line by line.
///
/// Both the current `"command"` shape and the legacy `"cmd"` shape are
/// recognized; an entry matching either or both counts exactly once.
pub fn read_manual(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| AuditError::from_io(path, e))?;

    let mut commands = HashSet::new();
    for line in content.lines() {
        commands.extend(extract::command_fields(line));
        commands.extend(extract::legacy_command_fields(line));
    }

    debug!(path = %path.display(), count = commands.len(), "scanned manual");
    Ok(commands)
}

/// Read the overview document and extract the documented command set from
/// its `` ## `Name` `` headings.
pub fn read_overview(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| AuditError::from_io(path, e))?;

    let commands = extract::overview_headings(&content);
    debug!(path = %path.display(), count = commands.len(), "scanned overview");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn commands_file_unescapes_embedded_json() {
        let file = write_temp(r#"[{"value": "{\"command\":\"Move\"}"}]"#);
        let found = read_commands_file(file.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found.contains("Move"));
    }

    #[test]
    fn commands_file_skips_records_without_string_value() {
        let file = write_temp(
            r#"[{"value": 42}, {"label": "x"}, {"value": "{\"command\":\"Jump\"}"}]"#,
        );
        let found = read_commands_file(file.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found.contains("Jump"));
    }

    #[test]
    fn commands_file_missing_is_not_found() {
        let err = read_commands_file("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AuditError::NotFound { .. }));
    }

    #[test]
    fn commands_file_malformed_is_json_error() {
        let file = write_temp("[{not json");
        let err = read_commands_file(file.path()).unwrap_err();
        assert!(matches!(err, AuditError::Json { .. }));
    }

    #[test]
    fn manual_unions_current_and_legacy_shapes() {
        let file = write_temp("prose\n\"cmd\":\"Jump\"\nmore prose\n\"command\": \"Move\"\n");
        let found = read_manual(file.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.contains("Jump"));
        assert!(found.contains("Move"));
    }

    #[test]
    fn manual_counts_double_shaped_entry_once() {
        let file = write_temp("\"cmd\":\"Move\" and \"command\":\"Move\"\n");
        let found = read_manual(file.path()).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn overview_reads_heading_set() {
        let file = write_temp("# Title\n\n## `Move`\n\n## `Jump`\n\n### `Nope`\n");
        let found = read_overview(file.path()).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn overview_missing_is_not_found() {
        let err = read_overview("no/such/overview.md").unwrap_err();
        assert!(matches!(err, AuditError::NotFound { .. }));
    }
}
