use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner shown while a diary is fetched. Falls back to a log line when
/// not attached to a terminal or when the output is not for humans.
pub struct FetchSpinner {
    spinner: Option<ProgressBar>,
}

impl FetchSpinner {
    pub fn start(enabled: bool, msg: impl Into<String>) -> Self {
        let msg = msg.into();

        if !enabled || !is_interactive() {
            tracing::info!(operation = "progress", message = %msg, "Progress update");
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        spinner.set_message(msg);
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self { spinner: Some(spinner) }
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        let msg = msg.into();
        match &self.spinner {
            Some(spinner) => spinner.set_message(msg),
            None => tracing::info!(operation = "progress", message = %msg, "Progress update"),
        }
    }

    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
