//! Console output boundary for the demonstrations.
//!
//! Production code uses [`Reporter::stdout()`] which prints styled lines
//! to the terminal. Tests use [`Reporter::capture()`] backed by a shared
//! buffer, so assertions can inspect exactly what was reported without
//! scraping the process output.

use std::sync::{Arc, Mutex, MutexGuard};

use colored::Colorize;

/// Line-oriented status reporter.
///
/// Cloning is cheap; clones of a capturing reporter share one buffer, so
/// a reporter can be handed to concurrently running demonstrations.
#[derive(Clone, Debug, Default)]
pub struct Reporter {
    capture: Option<Arc<Mutex<Vec<String>>>>,
}

impl Reporter {
    /// Create a reporter that prints to the terminal.
    pub fn stdout() -> Self {
        Self { capture: None }
    }

    /// Create a reporter that collects plain-text lines in memory.
    pub fn capture() -> Self {
        Self {
            capture: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Print a section header for one demonstration.
    pub fn section(&self, title: &str) {
        let line = format!("--- {title} ---");
        if !self.record(&line) {
            println!("\n{}", line.bold());
        }
    }

    /// Print a neutral status line.
    pub fn info(&self, message: &str) {
        if !self.record(message) {
            println!("  {message}");
        }
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        let line = format!("✔ {message}");
        if !self.record(&line) {
            println!("  {} {}", "✔".green().bold(), message);
        }
    }

    /// Print a failure line. Goes to stderr in terminal mode.
    pub fn error(&self, message: &str) {
        let line = format!("✖ {message}");
        if !self.record(&line) {
            eprintln!("  {} {}", "✖".red().bold(), message.red());
        }
    }

    /// Register a message to be reported when the returned guard is
    /// dropped. Runs on every exit path of the enclosing scope, normal
    /// return or propagated failure alike.
    pub fn completion_guard(&self, message: impl Into<String>) -> CompletionGuard {
        CompletionGuard {
            reporter: self.clone(),
            message: message.into(),
        }
    }

    /// Snapshot of the captured lines. Empty for a stdout reporter.
    pub fn lines(&self) -> Vec<String> {
        match &self.capture {
            Some(buffer) => lock_buffer(buffer).clone(),
            None => Vec::new(),
        }
    }

    /// Record the line into the capture buffer, if capturing.
    /// Returns `false` when the reporter prints to the terminal instead.
    fn record(&self, line: &str) -> bool {
        match &self.capture {
            Some(buffer) => {
                lock_buffer(buffer).push(line.to_string());
                true
            }
            None => false,
        }
    }
}

/// Lock the capture buffer, recovering from poisoning.
fn lock_buffer(buffer: &Mutex<Vec<String>>) -> MutexGuard<'_, Vec<String>> {
    match buffer.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Emits its message through the reporter exactly once, on drop.
pub struct CompletionGuard {
    reporter: Reporter,
    message: String,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.reporter.info(&self.message);
    }
}
