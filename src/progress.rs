//! Step-by-step status output for the deploy procedure

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Status display for the deployment steps
///
/// Each catalog call gets a spinner while it blocks and a styled line when
/// it finishes.
pub struct StepProgress {
    step_style: Style,
    detail_style: Style,
    warn_style: Style,
    spinner: Option<ProgressBar>,
}

impl StepProgress {
    pub fn new() -> Self {
        Self {
            step_style: Style::new().cyan().bold(),
            detail_style: Style::new().dim(),
            warn_style: Style::new().yellow().bold(),
            spinner: None,
        }
    }

    /// Announce a step and start a spinner for it
    pub fn begin(&mut self, message: &str) {
        self.finish();
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    /// Finish the current step with a result line
    pub fn done(&mut self, message: &str) {
        self.finish();
        println!("{} {}", self.step_style.apply_to("=>"), message);
    }

    /// Print a secondary detail line under the current step
    pub fn detail(&self, message: &str) {
        println!("   {}", self.detail_style.apply_to(message));
    }

    /// Print a non-fatal warning
    pub fn warn(&mut self, message: &str) {
        self.finish();
        println!("{} {}", self.warn_style.apply_to("warning:"), message);
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StepProgress {
    fn drop(&mut self) {
        self.finish();
    }
}
