use clap::Args;
use pomotick_core::{Command, IntervalTimer, ManualTicks};

use crate::output::Printer;

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of ticks to deliver
    #[arg(long)]
    ticks: u64,
    /// Start the timer before ticking (ticks on an idle timer are ignored)
    #[arg(long)]
    start: bool,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let printer = Printer::new(args.json);
    let mut timer = IntervalTimer::new(ManualTicks::new());

    if args.start {
        printer.emit(&timer.toggle_run())?;
    }
    for _ in 0..args.ticks {
        if let Some(event) = timer.on_tick() {
            printer.emit(&event)?;
        }
    }

    for command in [Command::Status, Command::Log] {
        if let Some(event) = timer.dispatch(command) {
            printer.emit(&event)?;
        }
    }
    timer.shutdown();
    Ok(())
}
