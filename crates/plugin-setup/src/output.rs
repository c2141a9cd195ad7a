//! Terminal output utilities

use console::style;
use plugin_setup_core::guide::Styler;
use plugin_setup_core::report::{Reporter, Verbosity};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a dimmed detail line
pub fn detail(msg: &str) {
    println!("  {}", style(msg).dim());
}

/// Print a header
pub fn header(msg: &str) {
    let rule = "=".repeat(50);
    println!("\n{}\n{}\n{}\n", rule, style(msg).bold(), rule);
}

/// Reporter writing to the terminal
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        if self.verbosity.shows_progress() {
            info(msg);
        }
    }

    fn success(&self, msg: &str) {
        if self.verbosity.shows_progress() {
            success(msg);
        }
    }

    fn warning(&self, msg: &str) {
        warning(msg);
    }

    fn error(&self, msg: &str) {
        error(msg);
    }

    fn banner(&self, msg: &str) {
        if self.verbosity.shows_progress() {
            header(msg);
        }
    }

    fn detail(&self, msg: &str) {
        if self.verbosity.shows_detail() {
            detail(msg);
        }
    }
}

/// Colours for the final guide
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleStyle;

impl Styler for ConsoleStyle {
    fn step(&self, number: usize, total: usize, title: &str) -> String {
        format!("{} {}", style(format!("[{}/{}]", number, total)).bold(), title)
    }

    fn success(&self, msg: &str) -> String {
        style(format!("✔ {}", msg)).green().bold().to_string()
    }

    fn info(&self, msg: &str) -> String {
        style(format!("ℹ {}", msg)).blue().to_string()
    }

    fn warning(&self, msg: &str) -> String {
        style(format!("⚠ {}", msg)).yellow().to_string()
    }
}
