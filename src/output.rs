//! Mode-aware CLI output. Color is decided here, once, from explicit
//! configuration instead of global console state.

use colored::Colorize;
use std::io::{self, IsTerminal};

/// Output mode for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with colors
    Human,
    /// Machine-readable JSON output
    Json,
    /// Plain text without colors (for pipes/logs)
    Plain,
}

impl OutputMode {
    /// Auto-detect output mode based on environment.
    pub fn auto() -> Self {
        if std::env::var("LINGOLENS_JSON").is_ok() {
            Self::Json
        } else if !io::stdout().is_terminal() {
            // Output is piped/redirected, use plain text
            Self::Plain
        } else {
            Self::Human
        }
    }

    pub fn colored(self) -> bool {
        self == Self::Human
    }
}

/// CLI output writer with mode awareness.
pub struct OutputWriter {
    mode: OutputMode,
}

impl OutputWriter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        match self.mode {
            OutputMode::Human => {
                println!();
                println!("{}", title.cyan().bold());
                println!("{}", "═".repeat(title.chars().count()).cyan());
            }
            OutputMode::Plain => {
                println!();
                println!("{}", title);
                println!("{}", "=".repeat(title.chars().count()));
            }
            OutputMode::Json => {}
        }
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => println!("{} {}", "✓".green().bold(), message),
            OutputMode::Plain => println!("[ok] {}", message),
            OutputMode::Json => {}
        }
    }

    /// Print a warning line.
    pub fn warn(&self, message: &str) {
        match self.mode {
            OutputMode::Human => println!("{} {}", "⚠".yellow().bold(), message.yellow()),
            OutputMode::Plain => println!("[warn] {}", message),
            OutputMode::Json => {}
        }
    }

    /// Print an error line.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => eprintln!("{} {}", "✗".red().bold(), message.red()),
            OutputMode::Plain => eprintln!("[error] {}", message),
            OutputMode::Json => {}
        }
    }

    /// Print a labelled value.
    pub fn kv(&self, label: &str, value: &str) {
        match self.mode {
            OutputMode::Human => println!("{} {}", format!("{}:", label).cyan(), value),
            OutputMode::Plain => println!("{}: {}", label, value),
            OutputMode::Json => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_human_mode_is_colored() {
        assert!(OutputMode::Human.colored());
        assert!(!OutputMode::Plain.colored());
        assert!(!OutputMode::Json.colored());
    }

    #[test]
    fn test_writer_reports_its_mode() {
        let writer = OutputWriter::new(OutputMode::Plain);
        assert_eq!(writer.mode(), OutputMode::Plain);
    }
}
