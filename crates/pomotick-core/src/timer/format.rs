/// Render a countdown value as zero-padded `MM:SS`.
///
/// Minutes are not capped at 59, so `6000` renders as `100:00`.
pub fn format_remaining(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}
