//! Overview skeleton generation.
//!
//! Reconstructs a commands-overview document from the commands JSON file:
//! every embedded command object is located by brace matching, parsed, and
//! its non-metadata keys collected as argument names. The rendered headings
//! use the same `` ## `Name` `` shape the coverage check reads back, so a
//! freshly generated overview always passes its own check.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::sources::CommandRecord;

/// Record keys that are storage metadata rather than command arguments.
pub const DEFAULT_IGNORED_KEYS: &[&str] = &[
    "command",
    "msgId",
    "_as",
    "__v",
    "_id",
    "label",
    "value",
    "ownerId",
    "access",
    "createdAt",
    "updatedAt",
    "description",
    "v",
];

/// Command names inside record payloads are plain dotted identifiers.
static COMMAND_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""command":"([A-Za-z0-9.]+)""#).unwrap());

/// Map of command name to the argument names seen for it across all records.
pub type CommandArguments = BTreeMap<String, BTreeSet<String>>;

/// Collect per-command argument names from the given records.
///
/// Unparseable or mismatched candidate objects are skipped silently; a
/// command mentioned only in broken fragments still appears, with no
/// arguments.
pub fn collect_command_arguments(
    records: &[CommandRecord],
    ignored_keys: &[String],
) -> CommandArguments {
    let mut arguments = CommandArguments::new();

    for record in records {
        let Some(value) = record.unescaped_value() else {
            continue;
        };

        for cap in COMMAND_NAME.captures_iter(&value) {
            let name = cap[1].to_string();
            let args = arguments.entry(name.clone()).or_default();

            let match_start = cap.get(0).unwrap().start();
            let Some(object) = enclosing_object(&value, match_start) else {
                continue;
            };

            // Only trust the slice if it parses and names the same command.
            let Ok(parsed) = serde_json::from_str::<serde_json::Value>(object) else {
                continue;
            };
            let Some(map) = parsed.as_object() else {
                continue;
            };
            if map.get("command").and_then(|v| v.as_str()) != Some(name.as_str()) {
                continue;
            }

            for key in map.keys() {
                if !ignored_keys.iter().any(|ignored| ignored == key) {
                    args.insert(key.clone());
                }
            }
        }
    }

    debug!(commands = arguments.len(), "collected command arguments");
    arguments
}

/// Slice out the innermost `{ ... }` object enclosing the byte offset, by
/// brace counting. Returns `None` when no opening brace precedes the offset
/// or the braces never balance.
fn enclosing_object(text: &str, offset: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    let open = bytes[..offset].iter().rposition(|&b| b == b'{')?;

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[open..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Render the overview document from collected command arguments.
pub fn render_overview(arguments: &CommandArguments) -> String {
    let mut out = String::from("# Commands Overview\n\n");

    for (name, args) in arguments {
        out.push_str(&format!("## `{}`\n\n", name));
        if args.is_empty() {
            out.push_str("No specific arguments extracted from available examples for this command.\n");
        } else {
            for arg in args {
                out.push_str(&format!("- {}\n", arg));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: &str) -> CommandRecord {
        serde_json::from_value(serde_json::json!({ "value": value })).unwrap()
    }

    fn default_ignored() -> Vec<String> {
        DEFAULT_IGNORED_KEYS.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn collects_arguments_excluding_metadata() {
        let records = vec![record(
            r#"{"command":"Move","speed":5,"direction":"north","_id":"abc","msgId":7}"#,
        )];
        let args = collect_command_arguments(&records, &default_ignored());

        let move_args = args.get("Move").unwrap();
        assert_eq!(
            move_args.iter().collect::<Vec<_>>(),
            vec!["direction", "speed"]
        );
    }

    #[test]
    fn unions_arguments_across_records() {
        let records = vec![
            record(r#"{"command":"Move","speed":1}"#),
            record(r#"{"command":"Move","direction":"east"}"#),
        ];
        let args = collect_command_arguments(&records, &default_ignored());
        assert_eq!(args.get("Move").unwrap().len(), 2);
    }

    #[test]
    fn brace_matching_finds_nested_object() {
        let records = vec![record(
            r#"{"outer":true,"payload":{"command":"Jump","height":2}}"#,
        )];
        let args = collect_command_arguments(&records, &default_ignored());
        let jump_args = args.get("Jump").unwrap();
        assert_eq!(jump_args.iter().collect::<Vec<_>>(), vec!["height"]);
    }

    #[test]
    fn unparseable_candidate_keeps_command_without_arguments() {
        let records = vec![record(r#"{"command":"Broken", not json"#)];
        let args = collect_command_arguments(&records, &default_ignored());
        assert!(args.get("Broken").unwrap().is_empty());
    }

    #[test]
    fn invalid_enclosing_object_contributes_no_arguments() {
        // The enclosing braces slice to a non-JSON fragment; the command is
        // still recorded, argument-free.
        let records = vec![record(r#"{"inner":"\"command\":\"Ghost\""}"#)];
        let args = collect_command_arguments(&records, &default_ignored());
        assert!(args.get("Ghost").unwrap().is_empty());
    }

    #[test]
    fn renders_backticked_headings_and_sorted_bullets() {
        let records = vec![
            record(r#"{"command":"Move","speed":1,"angle":2}"#),
            record(r#"{"command":"Jump"}"#),
        ];
        let args = collect_command_arguments(&records, &default_ignored());
        let rendered = render_overview(&args);

        assert!(rendered.starts_with("# Commands Overview\n"));
        // Sorted command order: Jump before Move.
        let jump_at = rendered.find("## `Jump`").unwrap();
        let move_at = rendered.find("## `Move`").unwrap();
        assert!(jump_at < move_at);
        assert!(rendered.contains("- angle\n- speed\n"));
        assert!(rendered.contains("No specific arguments extracted"));
    }

    #[test]
    fn rendered_overview_passes_heading_extraction() {
        let records = vec![record(r#"{"command":"Move","speed":1}"#)];
        let args = collect_command_arguments(&records, &default_ignored());
        let rendered = render_overview(&args);

        let documented = crate::extract::overview_headings(&rendered);
        assert!(documented.contains("Move"));
    }
}
