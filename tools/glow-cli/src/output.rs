//! Output formatting utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler with support for colors, JSON mode, and spinners
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{}", message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green().bold(), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow().bold(), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.json {
            eprintln!(r#"{{"error": "{}"}}"#, message.replace('"', "\\\""));
            return;
        }
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    /// Print a debug message (only in verbose mode)
    pub fn debug(&self, message: &str) {
        if self.json || !self.verbose {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(message).dim());
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.json {
            return;
        }
        println!();
        println!("{}", style(title).bold().underlined());
    }

    /// Print data as JSON
    pub fn json<T: serde::Serialize>(&self, data: &T) {
        match serde_json::to_string_pretty(data) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to serialize JSON: {}", e),
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).cyan(), value);
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").cyan(), item);
    }

    /// Print a table row with fixed column widths
    pub fn table_row(&self, cells: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        println!("  {}", row.join(" "));
    }

    /// Create a spinner for an operation of unknown length
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}
