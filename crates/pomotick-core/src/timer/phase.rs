use serde::{Deserialize, Serialize};

/// Length of the work phase in seconds (25 minutes).
pub const TASK_DURATION_SECS: u64 = 1500;
/// Length of the break phase in seconds (5 minutes).
pub const BREAK_DURATION_SECS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Task,
    Break,
}

impl Phase {
    /// Countdown length for this phase, in seconds.
    pub fn duration_secs(self) -> u64 {
        match self {
            Phase::Task => TASK_DURATION_SECS,
            Phase::Break => BREAK_DURATION_SECS,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Phase::Task => Phase::Break,
            Phase::Break => Phase::Task,
        }
    }

    /// Short name used inside transition log messages.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Task => "Work",
            Phase::Break => "Break",
        }
    }

    /// Heading a host shows while this phase is active.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Task => "Work Time",
            Phase::Break => "Break Time",
        }
    }
}

/// Upper bound for any countdown value.
pub fn max_duration_secs() -> u64 {
    TASK_DURATION_SECS.max(BREAK_DURATION_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_fixed() {
        assert_eq!(Phase::Task.duration_secs(), 1500);
        assert_eq!(Phase::Break.duration_secs(), 300);
        assert_eq!(max_duration_secs(), 1500);
    }

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Phase::Task.opposite(), Phase::Break);
        assert_eq!(Phase::Break.opposite().opposite(), Phase::Break);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Task).unwrap(), "\"task\"");
        assert_eq!(serde_json::to_string(&Phase::Break).unwrap(), "\"break\"");
    }
}
