//! Log record value type and its annotation model

use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Marker written in place of a scrubbed annotation value
pub const SCRUBBED: &str = "<scrubbed>";

/// Typed value of a single annotation
///
/// Values serialize as bare JSON scalars. Non-finite floats (NaN, ±∞) have
/// no JSON representation and fail serialization with a descriptive error;
/// the structured sink degrades to its raw-message fallback in that case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::Null => serializer.serialize_unit(),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            ParamValue::Float(f) => Err(S::Error::custom(format!(
                "non-finite float {f} has no JSON representation"
            ))),
            ParamValue::String(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => f.write_str("null"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

/// One key-value annotation on a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,
    pub value: ParamValue,
}

/// One structured log event
///
/// A record is a plain value: a message, a severity, a timestamp, an
/// optional source, and an ordered set of key-value annotations. Annotation
/// order is caller-supplied and preserved through rendering. Records mutate
/// only through explicit [`RecordOption`](crate::RecordOption) application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub level: Level,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

impl LogRecord {
    /// Create a record timestamped now
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            level,
            timestamp: Utc::now(),
            params: Vec::new(),
        }
    }

    /// Replace the timestamp
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach an originating source (e.g. a module path or file:line)
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Append or overwrite an annotation, builder style
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set_param(key, value);
        self
    }

    /// Upsert an annotation
    ///
    /// An existing key keeps its position and takes the new value; a new key
    /// is appended. Repeated writes to one key therefore resolve to the last
    /// value written.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|p| p.key == key) {
            Some(param) => param.value = value,
            None => self.params.push(Param { key, value }),
        }
    }

    /// Replace an annotation's value with the [`SCRUBBED`] marker
    ///
    /// The key stays visible so redacted fields remain discoverable in
    /// output. Absent keys are untouched.
    pub fn scrub_param(&mut self, key: &str) {
        if let Some(param) = self.params.iter_mut().find(|p| p.key == key) {
            param.value = ParamValue::String(SCRUBBED.to_string());
        }
    }

    /// Look up an annotation value by key
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.iter().find(|p| p.key == key).map(|p| &p.value)
    }
}
