//! User-facing progress messages.
//!
//! Conversion code reports through a [`Reporter`] instead of printing, so the
//! same code runs under the CLI, in tests, or behind another host.

use console::{Style, Term};

/// Sink for messages meant for the person running a conversion.
pub trait Reporter: Send + Sync {
    /// Report a progress or success message.
    fn report(&self, message: &str);

    /// Report a failure. Defaults to [`report`](Reporter::report).
    fn report_failure(&self, message: &str) {
        self.report(message);
    }
}

/// Reporter that forwards messages to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, message: &str) {
        log::info!("{message}");
    }

    fn report_failure(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Colored terminal reporter writing to stderr.
pub struct ConsoleReporter {
    term: Term,
    green: Style,
    red: Style,
}

impl ConsoleReporter {
    /// Create a reporter on stderr.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        let _ = self
            .term
            .write_line(&self.green.apply_to(message).to_string());
    }

    fn report_failure(&self, message: &str) {
        let _ = self.term.write_line(&self.red.apply_to(message).to_string());
    }
}
