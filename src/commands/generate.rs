//! Generate command: rebuild the overview skeleton from the commands file.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::error::AuditError;
use crate::overview;
use crate::sources;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Structured commands file to read
    pub commands: PathBuf,
    /// Overview file to write
    pub output: PathBuf,
    /// Record keys excluded from argument collection
    pub ignored_keys: Vec<String>,
}

/// Execute the generate command.
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let records = sources::load_records(&options.commands)?;
    let arguments = overview::collect_command_arguments(&records, &options.ignored_keys);
    let rendered = overview::render_overview(&arguments);

    std::fs::write(&options.output, &rendered)
        .map_err(|e| AuditError::from_io(&options.output, e))?;

    println!(
        "{} Wrote overview for {} command(s) to {}",
        style("✓").green(),
        arguments.len(),
        options.output.display()
    );

    Ok(())
}
