mod controller;
mod format;
mod log;
mod phase;
mod ticks;

pub use controller::IntervalTimer;
pub use format::format_remaining;
pub use log::{transition_message, TransitionLog, ENTRY_PREFIX};
pub use phase::{max_duration_secs, Phase, BREAK_DURATION_SECS, TASK_DURATION_SECS};
pub use ticks::{IntervalTicks, ManualTicks, TickReceiver, TickSource, TICK_PERIOD};
