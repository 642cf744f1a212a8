//! Check command: the full documentation coverage cross-check.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use tracing::warn;

use crate::reconcile::CoverageReport;
use crate::sources;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Structured commands file
    pub commands: PathBuf,
    /// Reference manual
    pub manual: PathBuf,
    /// Overview document to reconcile against
    pub overview: PathBuf,
}

/// Execute the check command.
///
/// Every reader failure is reported and neutralized to an empty
/// contribution; the report is always produced.
pub fn execute_check(options: CheckOptions) -> Result<()> {
    let mut source_commands = salvage(sources::read_commands_file(&options.commands));
    source_commands.extend(salvage(sources::read_manual(&options.manual)));

    let documented = salvage(sources::read_overview(&options.overview));

    let report = CoverageReport::new(&source_commands, &documented);
    print_report(&report, &options.overview);

    Ok(())
}

/// Unwrap a reader result into "set or empty", reporting any failure.
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

fn print_report(report: &CoverageReport, overview: &std::path::Path) {
    if report.is_complete() {
        println!(
            "\n{} All commands from source files are present in {}.",
            style("✓").green(),
            overview.display()
        );
    } else {
        println!(
            "\n{} Commands found in source files but missing from {}:",
            style("✗").red(),
            overview.display()
        );
        for command in &report.missing {
            println!("{}", command);
        }
    }

    println!("\nUnique commands found across all source files:");
    for command in &report.all_commands {
        println!("{}", command);
    }
}
