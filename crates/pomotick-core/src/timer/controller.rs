//! Interval timer controller.
//!
//! A plain state machine over two phases. It does not own a thread or a
//! clock: it schedules ticks on a [`TickSource`] and the host forwards each
//! delivered tick to [`IntervalTimer::on_tick`].
//!
//! ## State Transitions
//!
//! ```text
//! Idle-Task  <-toggle_run->  Running-Task
//!                                 | countdown hits zero (auto-resumes)
//! Idle-Break <-toggle_run->  Running-Break
//!
//! reset: any state -> Idle-<current phase>, full duration
//! ```
//!
//! ## Usage
//!
//! ```
//! use pomotick_core::{IntervalTimer, ManualTicks, Phase};
//!
//! let mut timer = IntervalTimer::new(ManualTicks::new());
//! timer.toggle_run();
//! for _ in 0..=1500 {
//!     timer.on_tick();
//! }
//! assert_eq!(timer.phase(), Phase::Break);
//! assert!(timer.is_running());
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::format::format_remaining;
use super::log::{transition_message, TransitionLog};
use super::phase::Phase;
use super::ticks::{ManualTicks, TickSource, TICK_PERIOD};
use crate::command::Command;
use crate::events::Event;

/// The single stateful object behind a timer screen.
#[derive(Debug)]
pub struct IntervalTimer<S: TickSource = ManualTicks> {
    phase: Phase,
    /// Countdown for the current phase, in seconds.
    remaining_secs: u64,
    /// When the current run segment began. `None` until first started.
    phase_started_at: Option<DateTime<Utc>>,
    log: TransitionLog,
    ticks: S,
    tick_period: Duration,
}

impl<S: TickSource> IntervalTimer<S> {
    /// Idle, in the Task phase, with the full Task duration and an empty log.
    pub fn new(mut ticks: S) -> Self {
        ticks.stop();
        let phase = Phase::default();
        Self {
            phase,
            remaining_secs: phase.duration_secs(),
            phase_started_at: None,
            log: TransitionLog::new(),
            ticks,
            tick_period: TICK_PERIOD,
        }
    }

    /// Schedule ticks every `period` instead of once per second.
    ///
    /// The countdown still moves one second per tick; this only changes how
    /// fast a live host delivers them.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// True exactly while the tick source is scheduled.
    pub fn is_running(&self) -> bool {
        self.ticks.is_scheduled()
    }

    pub fn phase_started_at(&self) -> Option<DateTime<Utc>> {
        self.phase_started_at
    }

    pub fn transition_log(&self) -> &TransitionLog {
        &self.log
    }

    pub fn formatted_log(&self) -> Vec<String> {
        self.log.formatted()
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_display(&self) -> String {
        format_remaining(self.remaining_secs)
    }

    pub fn ticks(&self) -> &S {
        &self.ticks
    }

    /// Wall-clock time since the current run segment began.
    pub fn elapsed_in_phase(&self) -> chrono::Duration {
        self.elapsed_in_phase_at(Utc::now())
    }

    /// Like [`Self::elapsed_in_phase`] against an explicit `now`.
    ///
    /// A timer that was never started counts as started at `now`, so the
    /// result is zero rather than an error.
    pub fn elapsed_in_phase_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.phase_started_at.unwrap_or(now)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            title: self.phase.title().to_string(),
            running: self.is_running(),
            remaining_secs: self.remaining_secs,
            remaining: self.remaining_display(),
            elapsed_secs: self.elapsed_in_phase().num_seconds(),
            switches: self.log.len(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Pause when running, start when idle.
    pub fn toggle_run(&mut self) -> Event {
        if self.is_running() {
            self.ticks.stop();
            debug!(phase = ?self.phase, remaining_secs = self.remaining_secs, "timer paused");
            Event::TimerPaused {
                phase: self.phase,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        } else {
            self.start_ticking();
            debug!(phase = ?self.phase, remaining_secs = self.remaining_secs, "timer started");
            Event::TimerStarted {
                phase: self.phase,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        }
    }

    /// Stop and restore the full duration of the current phase.
    /// Leaves the phase and the transition log alone.
    pub fn reset(&mut self) -> Event {
        self.ticks.stop();
        self.remaining_secs = self.phase.duration_secs();
        debug!(phase = ?self.phase, "timer reset");
        Event::TimerReset {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Call once per delivered tick. Returns `Some(Event::PhaseSwitched)`
    /// when the countdown had already reached zero.
    ///
    /// Ignored while the timer is not running.
    pub fn on_tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return None;
        }
        Some(self.switch_phase())
    }

    /// Teardown hook for hosts. Safe to call repeatedly.
    pub fn shutdown(&mut self) -> Event {
        self.ticks.stop();
        Event::SessionEnded {
            switches: self.log.len(),
            at: Utc::now(),
        }
    }

    /// Apply a host command.
    pub fn dispatch(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::ToggleRun => Some(self.toggle_run()),
            Command::Reset => Some(self.reset()),
            Command::Tick => self.on_tick(),
            Command::Status => Some(self.snapshot()),
            Command::Log => Some(Event::TransitionLog {
                entries: self.formatted_log(),
                at: Utc::now(),
            }),
            Command::Quit => Some(self.shutdown()),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Log the transition, flip the phase and keep running.
    ///
    /// Order matters: the old tick source is stopped before state changes
    /// and the new one starts only afterwards.
    fn switch_phase(&mut self) -> Event {
        let from = self.phase;
        let message = transition_message(from);
        self.log.push(message.clone());

        self.ticks.stop();
        self.phase = from.opposite();
        self.remaining_secs = self.phase.duration_secs();
        self.start_ticking();

        info!(from = ?from, to = ?self.phase, switches = self.log.len(), "phase switched");
        Event::PhaseSwitched {
            from,
            to: self.phase,
            message,
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    fn start_ticking(&mut self) {
        self.phase_started_at = Some(Utc::now());
        self.ticks.start(self.tick_period);
    }
}

impl Default for IntervalTimer<ManualTicks> {
    fn default() -> Self {
        Self::new(ManualTicks::new())
    }
}
