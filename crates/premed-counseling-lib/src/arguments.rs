//! Lenient access to prompt and tool arguments.
//!
//! Arguments arrive as a JSON object. Handlers never reject them: a missing
//! or mistyped value is reported as absent and the caller picks a default.

use serde_json::{Map, Value};

/// A borrowed view over a request's argument object.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arguments<'a> {
    inner: Option<&'a Map<String, Value>>,
}

impl<'a> Arguments<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { inner: Some(map) }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.inner.and_then(|map| map.get(key))
    }

    /// Text form of an argument.
    ///
    /// Strings are returned verbatim, numbers and booleans use their JSON
    /// text. `null` and missing keys are absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Text form of an argument, or `default` when absent.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// Numeric form of an argument.
    ///
    /// JSON numbers are used directly and numeric strings are parsed.
    /// Anything else, including strings that parse to infinity or NaN, is
    /// absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        value.is_finite().then_some(value)
    }
}

impl<'a> From<&'a Map<String, Value>> for Arguments<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Self::new(map)
    }
}

impl<'a> From<Option<&'a Map<String, Value>>> for Arguments<'a> {
    fn from(map: Option<&'a Map<String, Value>>) -> Self {
        Self { inner: map }
    }
}
