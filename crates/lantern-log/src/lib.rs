//! Lantern - a minimal, swappable structured-logging facade
//!
//! One sink is active process-wide at any time. Callers build a
//! [`LogRecord`](lantern_models::LogRecord), submit it through [`log`], and
//! get back exactly the text the active sink wrote to its destination.
//!
//! Two renderers are built in:
//!
//! - [`ConsoleSink`]: human-readable single-line output, the process default
//! - [`JsonSink`]: one JSON document per record, with record-mutating
//!   options applied before serialization
//!
//! The facade is synchronous and single-sink: no buffering, no fan-out, no
//! level filtering. Rendering never fails past the sink boundary; the JSON
//! sink degrades to a plain-text fallback if serialization fails.
//!
//! Test harnesses swap in a sink bound to an in-memory buffer via the
//! [`testing`] module; the guard it returns restores the production console
//! default when dropped.

pub mod console;
pub mod json;
pub mod sink;
pub mod testing;

pub use console::ConsoleSink;
pub use json::JsonSink;
pub use sink::{error, info, log, set_sink, Sink, SinkFn};
