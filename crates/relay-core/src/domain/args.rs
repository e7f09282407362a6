//! Positional and keyword arguments carried by a dispatch.
//!
//! Both wrap plain `serde_json` containers. Typed callers build them directly
//! and can never produce a malformed shape; callers holding an untyped
//! `serde_json::Value` go through [`Args::from_value`] / [`Kwargs::from_value`],
//! which is the only place shape validation happens. A JSON `null` there means
//! "not supplied" and becomes an empty container.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{ArgumentKind, RelayError};

/// Ordered positional arguments. Order is preserved up to the worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(Vec<Value>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Validate an untyped value. `null` is empty; anything else but a JSON
    /// array is rejected.
    pub fn from_value(value: Value) -> Result<Self, RelayError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Array(items) => Ok(Self(items)),
            other => Err(RelayError::InvalidArgumentShape {
                argument: ArgumentKind::Args,
                expected: "an array",
                found: shape_name(&other),
            }),
        }
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

/// Keyword arguments. Keys are unique; insertion order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kwargs(Map<String, Value>);

impl Kwargs {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Validate an untyped value. `null` is empty; anything else but a JSON
    /// object is rejected.
    pub fn from_value(value: Value) -> Result<Self, RelayError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(Self(map)),
            other => Err(RelayError::InvalidArgumentShape {
                argument: ArgumentKind::Kwargs,
                expected: "an object",
                found: shape_name(&other),
            }),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Kwargs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
