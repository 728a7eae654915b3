use pomotick_core::format_remaining;

pub fn run(seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_remaining(seconds));
    Ok(())
}
