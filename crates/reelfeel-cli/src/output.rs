use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Writes user-facing messages and reports in the selected format
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Human-readable rendering should be printed
    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human && !self.quiet
    }

    /// Format a report is rendered in, `None` when quiet
    pub fn report_format(&self) -> Option<OutputFormat> {
        (!self.quiet).then_some(self.format)
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message("success", msg.as_ref()));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Shown even in quiet mode
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message("error", msg.as_ref()));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message("info", msg.as_ref()));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "⚠".yellow(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message("warning", msg.as_ref()));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(data).unwrap_or_default()),
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default())
            }
            OutputFormat::Human => println!("{}", data),
        }
    }
}

fn message(kind: &str, msg: &str) -> serde_json::Value {
    json!({
        "type": kind,
        "message": msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_shape() {
        let value = message("error", "User not found");
        assert_eq!(value["type"], "error");
        assert_eq!(value["message"], "User not found");
    }

    #[test]
    fn test_is_human() {
        assert!(Output::new(OutputFormat::Human, false).is_human());
        assert!(!Output::new(OutputFormat::Human, true).is_human());
        assert!(!Output::new(OutputFormat::Json, false).is_human());
    }

    #[test]
    fn test_quiet_suppresses_reports_in_every_format() {
        for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::JsonPretty] {
            assert_eq!(Output::new(format, true).report_format(), None);
            assert_eq!(Output::new(format, false).report_format(), Some(format));
        }
    }
}
