//! Console output for link events

use colored::Colorize;
use gog_core::{LinkEvent, Reporter};

/// Prints links and unlinks to stdout and failures to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    failures: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries that were skipped because of an error.
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: LinkEvent) {
        if event.is_failure() {
            self.failures += 1;
            eprintln!("{} {}", "ERROR".red().bold(), event);
        } else {
            println!("{event}");
        }
    }
}
