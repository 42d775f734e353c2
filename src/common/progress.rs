use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::{OutputFormat, get_output_format};

const TICK_CHARS: &str = "⠁⠉⠙⠚⠒⠂⠒⠲⠴⠤⠄⠤⠠⠤⠦⠖⠒⠐⠒⠓⠋ ";

/// Spinner shown while child processes run. Hidden in JSON mode.
pub fn create_spinner(message: impl Into<String>) -> ProgressBar {
    if get_output_format() == OutputFormat::Json {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(TICK_CHARS);
    pb.set_style(style);
    pb.set_message(message.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
