//! Append-only record of phase transitions.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Prefix applied to every entry by [`TransitionLog::formatted`].
pub const ENTRY_PREFIX: &str = "Interval: ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionLog {
    entries: Vec<String>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in chronological order, each prefixed with [`ENTRY_PREFIX`].
    pub fn formatted(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("{ENTRY_PREFIX}{entry}"))
            .collect()
    }
}

/// Message recorded when `outgoing` ends and its opposite begins.
///
/// The label names the phase that is ending, not the one starting.
pub fn transition_message(outgoing: Phase) -> String {
    format!("{} time started.", outgoing.label())
}
