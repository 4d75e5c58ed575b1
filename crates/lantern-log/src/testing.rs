//! Test support: in-memory destinations and scoped sink swaps
//!
//! A test installs a sink bound to a [`SharedBuffer`], asserts on
//! `buffer.contents()`, and relies on the returned [`SinkGuard`] to restore
//! the production console default when it drops, pass or fail.

use lantern_models::BoxedOption;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::console::ConsoleSink;
use crate::json::JsonSink;
use crate::sink::{restore_default_sink, set_sink};

/// Cloneable in-memory writer
///
/// Clones share one buffer, so a test can hand a clone to a sink and read
/// back what the sink wrote.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8 text
    pub fn contents(&self) -> String {
        self.bytes
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }

    /// Written text split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.bytes.lock().map(|mut b| b.clear()).ok();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .map(|mut b| {
                b.extend_from_slice(buf);
                buf.len()
            })
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "shared buffer poisoned"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Guard for a scoped sink swap
///
/// Dropping the guard unconditionally reinstalls the production default
/// (a console sink bound to standard output). Drop runs on unwind too, so
/// restoration happens whether the test passes or panics.
#[must_use = "the production sink is restored when this guard drops"]
pub struct SinkGuard {
    _private: (),
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        restore_default_sink();
    }
}

/// Install a console sink bound to `writer` for the scope of the guard
pub fn set_console_sink_for_tests(writer: impl Write + Send + 'static) -> SinkGuard {
    set_sink(ConsoleSink::new(writer));
    SinkGuard { _private: () }
}

/// Install a JSON sink bound to `writer` for the scope of the guard
///
/// The caller's options are applied on every render and the timestamp is
/// zeroed, so serialized output is byte-stable across runs regardless of
/// wall-clock time.
pub fn set_json_sink_for_tests(
    writer: impl Write + Send + 'static,
    options: Vec<BoxedOption>,
) -> SinkGuard {
    set_sink(
        JsonSink::new(writer)
            .with_options(options)
            .scrub_timestamp_for_tests(),
    );
    SinkGuard { _private: () }
}
