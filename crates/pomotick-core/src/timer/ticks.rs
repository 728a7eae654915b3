//! Tick sources.
//!
//! The controller never sleeps. It asks a [`TickSource`] to schedule a
//! periodic tick and the owner of the controller forwards every delivered
//! tick to `on_tick()`. Two sources ship here:
//!
//! - [`ManualTicks`]: no clock at all, the caller drives ticks by hand.
//! - [`IntervalTicks`]: a tokio task that fires on a steady interval and
//!   hands ticks to a [`TickReceiver`] owned by the host loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Cadence of the countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that can be scheduled to produce a tick every `period`.
///
/// `stop()` must be safe to call on a source that is already stopped.
pub trait TickSource {
    fn start(&mut self, period: Duration);
    fn stop(&mut self);
    fn is_scheduled(&self) -> bool;
}

/// Tick source with no clock behind it.
///
/// Only tracks whether a tick is "scheduled"; the owner calls
/// `on_tick()` itself. Used by tests and by deterministic simulation.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    scheduled: bool,
    period: Option<Duration>,
    starts: usize,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the source has been started.
    pub fn starts(&self) -> usize {
        self.starts
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl TickSource for ManualTicks {
    fn start(&mut self, period: Duration) {
        debug_assert!(!self.scheduled, "starting a tick source that is already live");
        self.scheduled = true;
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.scheduled = false;
        self.period = None;
    }

    fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

#[derive(Debug, Clone, Copy)]
struct Tick {
    generation: u64,
}

/// Tick source backed by a tokio interval task.
///
/// Every `start()` opens a new generation; ticks stamped with an older
/// generation are dropped by the [`TickReceiver`], so a tick that was
/// already queued when the source stopped is never delivered.
///
/// `start()` spawns onto the current tokio runtime and panics outside one.
#[derive(Debug)]
pub struct IntervalTicks {
    tx: mpsc::UnboundedSender<Tick>,
    live: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

/// Receiving half of an [`IntervalTicks`] source.
#[derive(Debug)]
pub struct TickReceiver {
    rx: mpsc::UnboundedReceiver<Tick>,
    live: Arc<AtomicU64>,
}

impl IntervalTicks {
    pub fn channel() -> (IntervalTicks, TickReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let live = Arc::new(AtomicU64::new(0));
        (
            IntervalTicks {
                tx,
                live: Arc::clone(&live),
                task: None,
            },
            TickReceiver { rx, live },
        )
    }
}

impl TickSource for IntervalTicks {
    fn start(&mut self, period: Duration) {
        // Never two live tasks for one source.
        self.stop();
        let generation = self.live.fetch_add(1, Ordering::AcqRel) + 1;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        debug!(generation, period_ms = period.as_millis() as u64, "tick source started");
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let generation = self.live.fetch_add(1, Ordering::AcqRel) + 1;
            debug!(generation, "tick source stopped");
        }
    }

    fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for IntervalTicks {
    fn drop(&mut self) {
        self.stop();
    }
}

impl TickReceiver {
    /// Wait for the next tick of the live generation.
    ///
    /// Stays pending while the source is stopped. Returns `None` once the
    /// [`IntervalTicks`] half has been dropped.
    pub async fn next(&mut self) -> Option<()> {
        loop {
            let tick = self.rx.recv().await?;
            if tick.generation == self.live.load(Ordering::Acquire) {
                return Some(());
            }
        }
    }
}
