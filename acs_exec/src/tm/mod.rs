//! Telemetry module
//!
//! Buffered status reporting for the control modules. Sinks accept labelled
//! values and severity-tagged messages, buffer them, and emit everything on
//! `flush`. A `fatal` report signals that the caller should halt autonomous
//! progress; the sink itself never terminates anything.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{error, info, warn};

// Internal
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// One buffered report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmEntry {
    /// A captioned message.
    Write(String, String),

    /// A labelled data value.
    Data(String, String),

    Warning(String),
    Error(String),
    Fatal(String),
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Capability contract of a status/reporting sink.
pub trait TmSink {
    /// Buffer a captioned message.
    fn write(&mut self, caption: &str, data: &str);

    /// Buffer a labelled data value.
    fn data(&mut self, label: &str, value: &dyn Display);

    fn warning(&mut self, info: &str);

    fn error(&mut self, info: &str);

    /// Report an unrecoverable condition. The caller is expected to stop
    /// autonomous progress after this.
    fn fatal(&mut self, info: &str);

    /// Emit everything buffered so far and clear the buffer.
    fn flush(&mut self);
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Sink that flushes its buffer through the `log` facade.
#[derive(Debug, Default)]
pub struct LogTm {
    buffer: Vec<TmEntry>,
}

/// In-memory sink recording entries for test assertions.
///
/// Clones share the same record, so a test can keep a handle to the entries
/// after moving the sink into the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemTm {
    entries: Rc<RefCell<Vec<TmEntry>>>,
    flushes: Rc<RefCell<usize>>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LogTm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TmSink for LogTm {
    fn write(&mut self, caption: &str, data: &str) {
        self.buffer
            .push(TmEntry::Write(caption.to_owned(), data.to_owned()));
    }

    fn data(&mut self, label: &str, value: &dyn Display) {
        self.buffer
            .push(TmEntry::Data(label.to_owned(), value.to_string()));
    }

    fn warning(&mut self, info: &str) {
        self.buffer.push(TmEntry::Warning(info.to_owned()));
    }

    fn error(&mut self, info: &str) {
        self.buffer.push(TmEntry::Error(info.to_owned()));
    }

    fn fatal(&mut self, info: &str) {
        self.buffer.push(TmEntry::Fatal(info.to_owned()));
    }

    fn flush(&mut self) {
        for entry in self.buffer.drain(..) {
            match entry {
                TmEntry::Write(caption, data) => info!("{}: {}", caption, data),
                TmEntry::Data(label, value) => info!("DATA {}: {}", label, value),
                TmEntry::Warning(msg) => warn!("{}", msg),
                TmEntry::Error(msg) => error!("{}", msg),
                TmEntry::Fatal(msg) => error!("--- FATAL --- {}", msg),
            }
        }
    }
}

impl MemTm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far, flushed or not.
    pub fn entries(&self) -> Vec<TmEntry> {
        self.entries.borrow().clone()
    }

    /// How many times the sink has been flushed.
    pub fn flush_count(&self) -> usize {
        *self.flushes.borrow()
    }
}

impl TmSink for MemTm {
    fn write(&mut self, caption: &str, data: &str) {
        self.entries
            .borrow_mut()
            .push(TmEntry::Write(caption.to_owned(), data.to_owned()));
    }

    fn data(&mut self, label: &str, value: &dyn Display) {
        self.entries
            .borrow_mut()
            .push(TmEntry::Data(label.to_owned(), value.to_string()));
    }

    fn warning(&mut self, info: &str) {
        self.entries.borrow_mut().push(TmEntry::Warning(info.to_owned()));
    }

    fn error(&mut self, info: &str) {
        self.entries.borrow_mut().push(TmEntry::Error(info.to_owned()));
    }

    fn fatal(&mut self, info: &str) {
        self.entries.borrow_mut().push(TmEntry::Fatal(info.to_owned()));
    }

    fn flush(&mut self) {
        *self.flushes.borrow_mut() += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mem_tm_records_entries() {
        let record = MemTm::new();
        let mut sink = record.clone();

        sink.write("status", "ready");
        sink.data("pose/x", &48.0);
        sink.warning("low battery");
        sink.fatal("no map");
        sink.flush();

        let entries = record.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            TmEntry::Write("status".to_owned(), "ready".to_owned())
        );
        assert_eq!(entries[1], TmEntry::Data("pose/x".to_owned(), "48".to_owned()));
        assert_eq!(entries[3], TmEntry::Fatal("no map".to_owned()));
        assert_eq!(record.flush_count(), 1);
    }

    #[test]
    fn test_log_tm_flush_drains_buffer() {
        let mut sink = LogTm::new();
        sink.write("status", "ready");
        sink.flush();
        sink.flush();
        assert!(sink.buffer.is_empty());
    }
}
