//! CLI command implementations.
//!
//! Each command is in its own submodule. Handlers own all terminal output;
//! the library modules below them stay silent apart from tracing.

pub mod check;
pub mod generate;
pub mod list;

pub use check::{execute_check, CheckOptions};
pub use generate::{execute_generate, GenerateOptions};
pub use list::{execute_list, ListOptions};
