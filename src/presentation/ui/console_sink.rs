use colored::Colorize;

use crate::application::services::progress_sink::ProgressSink;

/// Prints progress lines to stdout with a `::` marker
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn format_line(line: &str) -> String {
        format!("{} {}", "::".blue().bold(), line)
    }
}

impl ProgressSink for ConsoleSink {
    fn writeln(&self, line: &str) {
        tracing::trace!("progress: {}", line);
        println!("{}", Self::format_line(line));
    }
}
