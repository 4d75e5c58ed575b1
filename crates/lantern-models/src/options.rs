//! Record-mutating options applied before structured rendering

use crate::record::{LogRecord, ParamValue};

/// One transformation of a record
///
/// Options are applied in caller-supplied order, each strictly after the
/// previous, with write access to the full record. Typical options scrub a
/// field or inject a static annotation.
pub trait RecordOption: Send + Sync {
    fn apply(&self, record: &mut LogRecord);
}

/// Adapter to allow the use of ordinary closures as a [`RecordOption`]
pub struct OptionFn<F>(F);

impl<F> OptionFn<F>
where
    F: Fn(&mut LogRecord) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> RecordOption for OptionFn<F>
where
    F: Fn(&mut LogRecord) + Send + Sync,
{
    fn apply(&self, record: &mut LogRecord) {
        (self.0)(record)
    }
}

/// Owned, type-erased option, as sinks store them
pub type BoxedOption = Box<dyn RecordOption>;

/// Option that injects (or overwrites) a static annotation
pub fn with_param(key: impl Into<String>, value: impl Into<ParamValue>) -> BoxedOption {
    let key = key.into();
    let value = value.into();
    Box::new(OptionFn::new(move |record: &mut LogRecord| {
        record.set_param(key.clone(), value.clone());
    }))
}

/// Option that redacts an annotation's value
pub fn scrub_param(key: impl Into<String>) -> BoxedOption {
    let key = key.into();
    Box::new(OptionFn::new(move |record: &mut LogRecord| {
        record.scrub_param(&key);
    }))
}
