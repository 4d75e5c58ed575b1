use lantern_log::testing::{set_console_sink_for_tests, set_json_sink_for_tests, SharedBuffer};
use lantern_log::{set_sink, Sink, SinkFn};
use lantern_models::{with_param, Level, LogRecord, ParamValue};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

// The registry is process-wide state and the harness runs tests on multiple
// threads, so every test here serializes behind this lock.
static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    REGISTRY_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

// ===== SCOPED SWAP TESTS =====

#[test]
fn test_scoped_console_swap_routes_to_buffer() {
    let _serial = serial();
    let buffer = SharedBuffer::new();
    let _guard = set_console_sink_for_tests(buffer.clone());

    let rendered = lantern_log::log(LogRecord::new(Level::Info, "captured"));

    assert!(rendered.contains("captured"));
    assert_eq!(buffer.contents(), format!("{rendered}\n"));
}

#[test]
fn test_guard_drop_restores_production_default() {
    let _serial = serial();
    let buffer = SharedBuffer::new();
    {
        let _guard = set_console_sink_for_tests(buffer.clone());
        lantern_log::log(LogRecord::new(Level::Info, "inside scope"));
    }

    // After the guard drops the active sink writes to stdout again, so the
    // test buffer must not grow.
    let before = buffer.contents();
    lantern_log::log(LogRecord::new(Level::Info, "outside scope"));
    assert_eq!(buffer.contents(), before);
}

#[test]
fn test_guard_restores_even_when_the_scope_panics() {
    let _serial = serial();
    let buffer = SharedBuffer::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _guard = set_console_sink_for_tests(buffer.clone());
        lantern_log::log(LogRecord::new(Level::Error, "before panic"));
        panic!("test body failed");
    }));
    assert!(result.is_err());

    let before = buffer.contents();
    lantern_log::log(LogRecord::new(Level::Info, "after panic"));
    assert_eq!(buffer.contents(), before);
}

#[test]
fn test_scoped_json_swap_scrubs_timestamps_for_byte_stable_output() {
    let _serial = serial();
    let buffer = SharedBuffer::new();
    let _guard = set_json_sink_for_tests(buffer.clone(), vec![]);

    let first = lantern_log::log(LogRecord::new(Level::Info, "server started"));
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = lantern_log::log(LogRecord::new(Level::Info, "server started"));

    assert_eq!(first, second);
    let parsed: LogRecord = serde_json::from_str(&first).unwrap();
    assert_eq!(parsed.message, "server started");
    assert_eq!(parsed.timestamp, chrono::DateTime::UNIX_EPOCH);
}

#[test]
fn test_scoped_json_swap_applies_caller_options() {
    let _serial = serial();
    let buffer = SharedBuffer::new();
    let _guard = set_json_sink_for_tests(buffer.clone(), vec![with_param("suite", "registry")]);

    let rendered = lantern_log::log(LogRecord::new(Level::Info, "tagged"));

    let parsed: LogRecord = serde_json::from_str(&rendered).unwrap();
    assert_eq!(
        parsed.param("suite"),
        Some(&ParamValue::String("registry".into()))
    );
}

// ===== PERMANENT SWAP TESTS =====

#[test]
fn test_set_sink_installs_a_function_sink() {
    let _serial = serial();
    set_sink(SinkFn::new(|record: LogRecord| {
        format!("custom:{}", record.message)
    }));

    assert_eq!(
        lantern_log::log(LogRecord::new(Level::Info, "ping")),
        "custom:ping"
    );

    // Put the default back for the other tests.
    drop(set_console_sink_for_tests(SharedBuffer::new()));
}

#[test]
fn test_log_returns_exactly_what_the_sink_rendered() {
    let _serial = serial();
    let buffer = SharedBuffer::new();
    let _guard = set_json_sink_for_tests(buffer.clone(), vec![]);

    let rendered = lantern_log::log(LogRecord::new(Level::Warn, "exact"));

    assert_eq!(buffer.lines(), vec![rendered]);
}

// ===== CONVENIENCE ENTRY POINT TESTS =====

#[test]
fn test_info_and_error_helpers_carry_severity() {
    let _serial = serial();
    let buffer = SharedBuffer::new();
    let _guard = set_json_sink_for_tests(buffer.clone(), vec![]);

    let info_line = lantern_log::info("all good");
    let error_line = lantern_log::error("all bad");

    let info_rec: LogRecord = serde_json::from_str(&info_line).unwrap();
    let error_rec: LogRecord = serde_json::from_str(&error_line).unwrap();
    assert_eq!(info_rec.level, Level::Info);
    assert_eq!(info_rec.message, "all good");
    assert_eq!(error_rec.level, Level::Error);
    assert_eq!(error_rec.message, "all bad");
}

// ===== DIRECT SINK SUBSTITUTION =====

#[test]
fn test_ad_hoc_sink_without_named_type() {
    // A closure is a full sink implementation; no named type needed.
    let sink = SinkFn::new(|record: LogRecord| record.message.to_uppercase());
    assert_eq!(sink.log(LogRecord::new(Level::Info, "quiet")), "QUIET");
}
