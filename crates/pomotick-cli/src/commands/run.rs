//! Interactive host: one controller, a tokio interval and stdin commands.

use std::time::Duration;

use clap::Args;
use pomotick_core::{Command, IntervalTicks, IntervalTimer, TICK_PERIOD};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::output::Printer;

#[derive(Args)]
pub struct RunArgs {
    /// Milliseconds between ticks (each tick is one second of countdown)
    #[arg(long, default_value_t = TICK_PERIOD.as_millis() as u64)]
    tick_ms: u64,
    /// Start counting down immediately
    #[arg(long)]
    start: bool,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

/// Settings for one interactive session.
#[derive(Debug, Clone, Copy)]
pub struct HostConfig {
    pub tick_period: Duration,
    pub autostart: bool,
    pub json: bool,
}

impl TryFrom<RunArgs> for HostConfig {
    type Error = String;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        if args.tick_ms == 0 {
            return Err("--tick-ms must be greater than zero".into());
        }
        Ok(Self {
            tick_period: Duration::from_millis(args.tick_ms),
            autostart: args.start,
            json: args.json,
        })
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::try_from(args)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session(config))
}

async fn session(config: HostConfig) -> Result<(), Box<dyn std::error::Error>> {
    let printer = Printer::new(config.json);
    let (ticks, mut tick_rx) = IntervalTicks::channel();
    let mut timer = IntervalTimer::new(ticks).with_tick_period(config.tick_period);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(tick_ms = config.tick_period.as_millis() as u64, "session started");
    printer.emit(&timer.snapshot())?;
    if config.autostart {
        printer.emit(&timer.toggle_run())?;
    }

    loop {
        tokio::select! {
            Some(()) = tick_rx.next() => {
                if let Some(event) = timer.on_tick() {
                    printer.emit(&event)?;
                }
                printer.status(&timer)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Some(event) = timer.dispatch(command) {
                            printer.emit(&event)?;
                        }
                    }
                    Err(e) => {
                        warn!(input = line.trim(), "ignoring input");
                        eprintln!("{e}");
                    }
                }
            }
        }
    }

    // Stop the interval before the runtime goes away.
    printer.emit(&timer.shutdown())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tick_period_is_rejected() {
        let args = RunArgs { tick_ms: 0, start: false, json: false };
        assert!(HostConfig::try_from(args).is_err());
    }

    #[test]
    fn config_from_args() {
        let args = RunArgs { tick_ms: 250, start: true, json: true };
        let config = HostConfig::try_from(args).unwrap();
        assert_eq!(config.tick_period, Duration::from_millis(250));
        assert!(config.autostart);
        assert!(config.json);
    }
}
