//! Machine-readable JSON sink

use chrono::DateTime;
use lantern_models::{BoxedOption, LogRecord};
use std::io::{self, Write};
use std::sync::Mutex;

use crate::sink::Sink;

/// One-JSON-document-per-line renderer
///
/// Before serialization the configured options are applied to the record in
/// order, each with write access to the full record. On success the
/// serialized document is written as one undecorated line and returned.
///
/// Serialization failure never reaches the caller: the sink writes a
/// diagnostic line naming the failure, then the raw message as a best-effort
/// second line, and returns the raw message. Destination write errors are
/// ignored (best effort).
pub struct JsonSink {
    writer: Mutex<Box<dyn Write + Send>>,
    options: Vec<BoxedOption>,
    scrub_timestamp: bool,
}

impl JsonSink {
    /// JSON sink bound to the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// JSON sink bound to an arbitrary destination
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            options: Vec::new(),
            scrub_timestamp: false,
        }
    }

    /// Append one record-mutating option
    pub fn with_option(mut self, option: BoxedOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append record-mutating options, preserving their order
    pub fn with_options(mut self, options: impl IntoIterator<Item = BoxedOption>) -> Self {
        self.options.extend(options);
        self
    }

    // Zeroes the timestamp on every render so serialized output is byte-stable
    // across runs. Reachable only through the testing module.
    pub(crate) fn scrub_timestamp_for_tests(mut self) -> Self {
        self.scrub_timestamp = true;
        self
    }

    fn write_line(&self, line: &str) {
        self.writer
            .lock()
            .map(|mut w| {
                let _ = writeln!(w, "{line}");
            })
            .ok();
    }
}

impl Sink for JsonSink {
    fn log(&self, mut record: LogRecord) -> String {
        for option in &self.options {
            option.apply(&mut record);
        }
        if self.scrub_timestamp {
            record.timestamp = DateTime::UNIX_EPOCH;
        }
        match serde_json::to_string(&record) {
            Ok(line) => {
                self.write_line(&line);
                line
            }
            Err(err) => {
                self.write_line(&format!("lantern/log: failed to serialize record: {err}"));
                self.write_line(&record.message); // best-effort
                record.message
            }
        }
    }
}
