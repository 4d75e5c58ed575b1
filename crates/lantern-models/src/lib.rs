//! Record model for the Lantern logging facade
//!
//! This crate provides the value types that sinks render:
//!
//! - **Level**: severity taxonomy with string parsing
//! - **LogRecord**: message, timestamp, and ordered key-value annotations
//! - **RecordOption**: record-mutating transformations applied before
//!   structured rendering (redaction, enrichment)
//!
//! Records are plain values. Sinks never own a record past a single render
//! call, and records mutate only through explicit option application.

pub mod level;
pub mod options;
pub mod record;

pub use level::{Level, ParseLevelError};
pub use options::{scrub_param, with_param, BoxedOption, OptionFn, RecordOption};
pub use record::{LogRecord, Param, ParamValue, SCRUBBED};
