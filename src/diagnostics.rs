//! Injectable diagnostic reporting
//!
//! Classification never fails, but it can detect suspicious input (a current
//! marker that matches no declared step value). Those findings go through a
//! [`DiagnosticSink`] so embedders route them to their logging setup and tests
//! assert on them directly.

use std::cell::RefCell;

/// Receiver for non-fatal diagnostics emitted during resolution.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the active `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "stepline", "{message}");
    }
}

/// Records warnings in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
