// ABOUTME: Value model for resolved placeholder values
// ABOUTME: Defines the closed set of value kinds the renderer knows how to stringify

pub mod stringify;

pub use stringify::{stringify, StringifyOptions};

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// The data object placeholder expressions are resolved against by default.
pub type Scope = serde_json::Value;

/// Anything that can serialize itself to JSON text.
///
/// Blanket-implemented for every `Serialize` type, so `Value::structured`
/// accepts plain structs, maps and `serde_json::Value` alike.
pub trait JsonText: Send + Sync {
    fn json_text(&self) -> serde_json::Result<String>;
}

impl<T: Serialize + Send + Sync> JsonText for T {
    fn json_text(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A resolved placeholder value.
///
/// Every value a resolver or scope lookup can produce falls into exactly one
/// of these kinds, and every kind has a defined textual form (see
/// [`stringify`]), so rendering can never fail on a "bad" value.
#[derive(Clone)]
pub enum Value {
    /// Text, emitted unchanged.
    Text(String),
    /// `true` / `false`.
    Bool(bool),
    /// A double, including the ±infinity and NaN sub-cases.
    Number(f64),
    /// An explicit null, treated as "no value" rather than an error.
    Null,
    /// Nothing found at the looked-up path.
    Absent,
    /// A value with its own text conversion, used verbatim.
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// A structured value without a custom text conversion, serialized as JSON.
    Structured(Arc<dyn JsonText>),
    /// Any kind with no sensible textual form.
    Unsupported,
}

impl Value {
    /// Wrap a value that carries its own text conversion.
    pub fn display(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Value::Display(Arc::new(value))
    }

    /// Wrap a structured value to be serialized as JSON at stringify time.
    pub fn structured(value: impl Serialize + Send + Sync + 'static) -> Self {
        Value::Structured(Arc::new(value))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Null => f.write_str("Null"),
            Value::Absent => f.write_str("Absent"),
            Value::Display(_) => f.write_str("Display(..)"),
            Value::Structured(_) => f.write_str("Structured(..)"),
            Value::Unsupported => f.write_str("Unsupported"),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => Value::Structured(Arc::new(other.clone())),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from(&value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Absent,
        }
    }
}
