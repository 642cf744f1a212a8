#![forbid(unsafe_code)]

//! # cmdcov - Command Documentation Coverage
//!
//! Cross-checks documentation completeness: scans a structured commands file
//! and a reference manual for every command identifier they mention, then
//! reconciles those identifiers against an overview document that is
//! supposed to enumerate all commands.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cmdcov::{sources, CoverageReport};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut found = sources::read_commands_file("commands.json")?;
//!     found.extend(sources::read_manual("api_manual.md")?);
//!
//!     let documented = sources::read_overview("commands_overview.md")?;
//!     let report = CoverageReport::new(&found, &documented);
//!
//!     for command in &report.missing {
//!         println!("undocumented: {}", command);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod overview;
pub mod reconcile;
pub mod sources;

// Re-exports
pub use config::Config;
pub use error::{AuditError, Result};
pub use overview::{collect_command_arguments, render_overview, CommandArguments};
pub use reconcile::CoverageReport;
pub use sources::CommandRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
