use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timer::Phase;

/// Every state change of the controller produces an Event.
/// Hosts render from them; nothing else observes the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero; the opposite phase started immediately.
    PhaseSwitched {
        from: Phase,
        to: Phase,
        /// The entry appended to the transition log.
        message: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        title: String,
        running: bool,
        remaining_secs: u64,
        remaining: String,
        elapsed_secs: i64,
        switches: usize,
        at: DateTime<Utc>,
    },
    /// Formatted transition log, oldest first.
    TransitionLog {
        entries: Vec<String>,
        at: DateTime<Utc>,
    },
    /// Host tore the session down; the tick source is stopped.
    SessionEnded {
        switches: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
