//! Sink contract and the process-wide active-sink registry

use arc_swap::ArcSwap;
use lantern_models::{Level, LogRecord};
use std::sync::{Arc, OnceLock};

use crate::console::ConsoleSink;

/// A sink renders one record to text
///
/// `log` renders the record, writes the rendered text to the sink's
/// destination as a side effect, and returns exactly what was written, so
/// callers can reuse the serialized form (error wrapping, assertions).
/// Sinks never hold the record past the call.
///
/// Rendering is synchronous and uncancellable; a sink whose destination
/// blocks (e.g. a full pipe) blocks the calling thread.
pub trait Sink: Send + Sync {
    fn log(&self, record: LogRecord) -> String;
}

/// Adapter to allow the use of ordinary functions as a [`Sink`]
///
/// ```
/// use lantern_log::{Sink, SinkFn};
/// use lantern_models::{Level, LogRecord};
///
/// let silent = SinkFn::new(|record: LogRecord| record.message);
/// assert_eq!(silent.log(LogRecord::new(Level::Info, "quiet")), "quiet");
/// ```
pub struct SinkFn<F>(F);

impl<F> SinkFn<F>
where
    F: Fn(LogRecord) -> String + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Sink for SinkFn<F>
where
    F: Fn(LogRecord) -> String + Send + Sync,
{
    fn log(&self, record: LogRecord) -> String {
        (self.0)(record)
    }
}

static ACTIVE_SINK: OnceLock<ArcSwap<Box<dyn Sink>>> = OnceLock::new();

fn active_sink() -> &'static ArcSwap<Box<dyn Sink>> {
    ACTIVE_SINK
        .get_or_init(|| ArcSwap::from_pointee(Box::new(ConsoleSink::stdout()) as Box<dyn Sink>))
}

pub(crate) fn store_sink(sink: Box<dyn Sink>) {
    active_sink().store(Arc::new(sink));
}

pub(crate) fn restore_default_sink() {
    store_sink(Box::new(ConsoleSink::stdout()));
}

/// Replace the process-wide sink
///
/// A single atomic pointer swap: subsequent [`log`] calls observe the new
/// sink; a render already in flight finishes on the sink that was active
/// when it started. The installed sink is used as-is, without validation.
pub fn set_sink(sink: impl Sink + 'static) {
    store_sink(Box::new(sink));
}

/// Submit a record to the active sink
///
/// Returns exactly the text the sink rendered and wrote.
pub fn log(record: LogRecord) -> String {
    let sink = active_sink().load_full();
    sink.log(record)
}

/// Log an info-level message through the active sink
pub fn info(message: impl Into<String>) -> String {
    log(LogRecord::new(Level::Info, message))
}

/// Log an error-level message through the active sink
pub fn error(message: impl Into<String>) -> String {
    log(LogRecord::new(Level::Error, message))
}
