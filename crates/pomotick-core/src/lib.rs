//! # pomotick Core Library
//!
//! Core logic for a single-screen work/break interval timer. The controller
//! is a plain state object; any front end (the bundled CLI, a TUI, a GUI)
//! observes it and dispatches commands to it.
//!
//! ## Architecture
//!
//! - **Controller**: [`IntervalTimer`] owns the countdown, the active
//!   [`Phase`] and the append-only [`TransitionLog`]
//! - **Tick sources**: [`TickSource`] schedules the one-second cadence;
//!   [`ManualTicks`] for tests and simulation, [`IntervalTicks`] on tokio
//! - **Events**: every state change yields an [`Event`] for the host to render
//!
//! ## Key Components
//!
//! - [`IntervalTimer`]: Core timer state machine
//! - [`format_remaining`]: `MM:SS` rendering of a countdown
//! - [`Command`]: Text commands a host forwards to the controller

pub mod command;
pub mod error;
pub mod events;
pub mod timer;

pub use command::Command;
pub use error::{CoreError, Result};
pub use events::Event;
pub use timer::{
    format_remaining, IntervalTicks, IntervalTimer, ManualTicks, Phase, TickReceiver, TickSource,
    TransitionLog, BREAK_DURATION_SECS, TASK_DURATION_SECS, TICK_PERIOD,
};
