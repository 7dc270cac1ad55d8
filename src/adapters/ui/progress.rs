//! Spinner shown while the catalog fetch is pending.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const LOADING_MESSAGE: &str = "Loading workshops...";

/// Start a steady-ticking spinner. Call `finish_and_clear` when the fetch resolves.
pub fn loading_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(LOADING_MESSAGE);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
