//! Log sinks: the caller-visible, append-only stream an action writes to.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Destination for the human-readable lines an action emits while it runs.
///
/// Lines are delivered in the order they are logged. A sink never reorders
/// or drops lines; a write failure is reported back to the action.
pub trait LogSink {
    fn log(&mut self, line: &str) -> Result<()>;
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, line: &str) -> Result<()> {
        (**self).log(line)
    }
}

// ---------------------------------------------------------------------------
// MemoryLog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub line: String,
}

/// Collects lines in memory with the time each was emitted.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    entries: Vec<LogEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.line.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LogSink for MemoryLog {
    fn log(&mut self, line: &str) -> Result<()> {
        self.entries.push(LogEntry {
            at: Utc::now(),
            line: line.to_string(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WriterLog
// ---------------------------------------------------------------------------

/// Writes each line to an `io::Write`, flushing immediately so a watching
/// caller sees progress as it happens.
pub struct WriterLog<W: Write> {
    out: W,
}

impl<W: Write> WriterLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogSink for WriterLog<W> {
    fn log(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TracingLog
// ---------------------------------------------------------------------------

/// Forwards every line to `tracing` at INFO under the `action` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn log(&mut self, line: &str) -> Result<()> {
        tracing::info!(target: "action", "{line}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tee
// ---------------------------------------------------------------------------

/// Sends every line to two sinks, the first one first.
pub struct Tee<A, B>(pub A, pub B);

impl<A: LogSink, B: LogSink> LogSink for Tee<A, B> {
    fn log(&mut self, line: &str) -> Result<()> {
        self.0.log(line)?;
        self.1.log(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_preserves_order() {
        let mut log = MemoryLog::new();
        log.log("first").unwrap();
        log.log("second").unwrap();
        log.log("third").unwrap();
        assert_eq!(log.lines(), vec!["first", "second", "third"]);
        let entries = log.entries();
        assert!(entries[0].at <= entries[1].at && entries[1].at <= entries[2].at);
    }

    #[test]
    fn writer_log_writes_one_line_per_entry() {
        let mut log = WriterLog::new(Vec::new());
        log.log("hello").unwrap();
        log.log("5").unwrap();
        let out = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(out, "hello\n5\n");
    }

    #[test]
    fn tracing_log_never_fails() {
        let mut log = TracingLog;
        assert!(log.log("forwarded").is_ok());
    }

    #[test]
    fn tee_writes_to_both_sinks_in_order() {
        let mut first = MemoryLog::new();
        let mut second = WriterLog::new(Vec::new());
        {
            let mut tee = Tee(&mut first, &mut second);
            tee.log("one").unwrap();
            tee.log("two").unwrap();
        }
        assert_eq!(first.lines(), vec!["one", "two"]);
        assert_eq!(String::from_utf8(second.into_inner()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn sink_works_through_a_mutable_reference() {
        fn emit<S: LogSink>(mut sink: S) {
            sink.log("via ref").unwrap();
        }

        let mut log = MemoryLog::new();
        emit(&mut log);
        assert_eq!(log.lines(), vec!["via ref"]);
    }
}
