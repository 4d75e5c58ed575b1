//! Human-readable console sink

use lantern_models::LogRecord;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::sink::Sink;

/// Single-line human-oriented renderer; the process default
///
/// Formats `HH:MM:SS.mmm LEVEL [source:] message [key=value]*` and writes
/// it to the configured destination. The console sink applies no options
/// and has no failure path. Destination write errors are ignored
/// (best effort).
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Console sink bound to the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Console sink bound to an arbitrary destination
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn format(record: &LogRecord) -> String {
        let mut line = format!(
            "{} {:>5}",
            record.timestamp.format("%H:%M:%S%.3f"),
            record.level
        );
        if let Some(source) = &record.source {
            line.push(' ');
            line.push_str(source);
            line.push(':');
        }
        line.push(' ');
        line.push_str(&record.message);
        for param in &record.params {
            line.push(' ');
            line.push_str(&param.key);
            line.push('=');
            line.push_str(&param.value.to_string());
        }
        line
    }
}

impl Sink for ConsoleSink {
    fn log(&self, record: LogRecord) -> String {
        let line = Self::format(&record);
        self.writer
            .lock()
            .map(|mut w| {
                let _ = writeln!(w, "{line}");
            })
            .ok();
        line
    }
}
