//! User-facing progress reporting
//!
//! Components never print directly. They receive a [`Reporter`] and emit
//! status lines through it; the binary decides how those lines look.

use std::cell::RefCell;

/// How chatty the reporter should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors and warnings only
    Quiet,
    #[default]
    Normal,
    /// Also echo the commands being run
    Verbose,
}

impl Verbosity {
    /// Map `-q` / `-v` counts to a verbosity level
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose > 0 {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether info and success lines should be shown
    pub fn shows_progress(&self) -> bool {
        *self >= Self::Normal
    }

    /// Whether detail lines (command echoes) should be shown
    pub fn shows_detail(&self) -> bool {
        *self >= Self::Verbose
    }
}

/// Sink for progress messages
pub trait Reporter {
    fn info(&self, msg: &str);
    fn success(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Section heading, e.g. "Setting up your plugin repository..."
    fn banner(&self, msg: &str);
    /// Low-level detail such as a command line about to run
    fn detail(&self, msg: &str);
}

/// Severity of a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
    Banner,
    Detail,
}

/// Reporter that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in order
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Recorded messages of one level
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message of `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    fn push(&self, level: Level, msg: &str) {
        self.messages.borrow_mut().push((level, msg.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn success(&self, msg: &str) {
        self.push(Level::Success, msg);
    }

    fn warning(&self, msg: &str) {
        self.push(Level::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }

    fn banner(&self, msg: &str) {
        self.push(Level::Banner, msg);
    }

    fn detail(&self, msg: &str) {
        self.push(Level::Detail, msg);
    }
}
