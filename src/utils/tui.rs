use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(message: String) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/", ""])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Show a spinner on stderr while `fut` runs.
pub async fn with_spinner<F: Future>(message: String, fut: F) -> F::Output {
    let spinner = create_spinner(message);
    let output = fut.await;
    spinner.finish_and_clear();
    output
}
