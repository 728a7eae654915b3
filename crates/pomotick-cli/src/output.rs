//! Rendering of controller events for the terminal.

use pomotick_core::{format_remaining, Event, IntervalTimer, TickSource};

/// Prints events either as human-readable lines or one JSON object per line.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn emit(&self, event: &Event) -> pomotick_core::Result<()> {
        if self.json {
            println!("{}", event.to_json()?);
        } else {
            for line in describe(event) {
                println!("{line}");
            }
        }
        Ok(())
    }

    /// One status line per tick. JSON mode emits a full snapshot instead.
    pub fn status<S: TickSource>(&self, timer: &IntervalTimer<S>) -> pomotick_core::Result<()> {
        if self.json {
            return self.emit(&timer.snapshot());
        }
        println!("{}", status_line(timer));
        Ok(())
    }
}

pub fn status_line<S: TickSource>(timer: &IntervalTimer<S>) -> String {
    let state = if timer.is_running() { "running" } else { "paused" };
    format!(
        "{}  {}  [{state}]",
        timer.phase().title(),
        timer.remaining_display()
    )
}

fn describe(event: &Event) -> Vec<String> {
    match event {
        Event::TimerStarted { phase, remaining_secs, .. } => {
            vec![format!("started {} at {}", phase.title(), format_remaining(*remaining_secs))]
        }
        Event::TimerPaused { phase, remaining_secs, .. } => {
            vec![format!("paused {} at {}", phase.title(), format_remaining(*remaining_secs))]
        }
        Event::TimerReset { phase, remaining_secs, .. } => {
            vec![format!("reset {} to {}", phase.title(), format_remaining(*remaining_secs))]
        }
        Event::PhaseSwitched { to, message, .. } => {
            vec![format!("{message} Now: {}", to.title())]
        }
        Event::StateSnapshot { title, running, remaining, switches, .. } => {
            let state = if *running { "running" } else { "paused" };
            vec![format!("{title}  {remaining}  [{state}]  switches: {switches}")]
        }
        Event::TransitionLog { entries, .. } => {
            let mut lines = Vec::with_capacity(entries.len() + 1);
            lines.push("Intervals:".to_string());
            lines.extend(entries.iter().cloned());
            lines
        }
        Event::SessionEnded { switches, .. } => {
            vec![format!("session ended after {switches} switches")]
        }
    }
}
