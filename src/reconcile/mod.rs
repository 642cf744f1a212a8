//! Reconciliation of extracted command sets.
//!
//! Pure set arithmetic: no I/O, no error conditions. Sorting happens here,
//! once, so every report is deterministic.

use std::collections::HashSet;

/// Outcome of reconciling the source-command set against the documented set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Commands present in the source artifacts but absent from the
    /// overview, sorted ascending.
    pub missing: Vec<String>,
    /// Every command found across the source artifacts, sorted ascending.
    pub all_commands: Vec<String>,
}

impl CoverageReport {
    /// Compute `missing = source − documented` and sorted views of both.
    pub fn new(source: &HashSet<String>, documented: &HashSet<String>) -> Self {
        let mut missing: Vec<String> = source.difference(documented).cloned().collect();
        missing.sort();

        let mut all_commands: Vec<String> = source.iter().cloned().collect();
        all_commands.sort();

        Self {
            missing,
            all_commands,
        }
    }

    /// True when every source command is documented.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
