//! List command: print the deduplicated source-command list.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use tracing::warn;

use crate::sources;

/// Options for the list command
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Structured commands file
    pub commands: PathBuf,
    /// Reference manual
    pub manual: PathBuf,
}

/// Execute the list command: the informational half of the coverage report,
/// without reconciliation.
pub fn execute_list(options: ListOptions) -> Result<()> {
    let mut commands = salvage(sources::read_commands_file(&options.commands));
    commands.extend(salvage(sources::read_manual(&options.manual)));

    let mut sorted: Vec<String> = commands.into_iter().collect();
    sorted.sort();

    for command in &sorted {
        println!("{}", command);
    }

    Ok(())
}

fn salvage(result: crate::Result<HashSet<String>>) -> HashSet<String> {
    match result {
        Ok(commands) => commands,
        Err(err) => {
            warn!(%err, "source skipped");
            eprintln!("{} {}", style("✗").red(), err);
            HashSet::new()
        }
    }
}
