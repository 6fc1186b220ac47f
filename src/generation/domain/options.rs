//! Free-form generation options.

use super::GenerationDomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended key-value bag attached to a generation request.
///
/// Any JSON object is accepted, flat or nested. The renderer does not read
/// any key yet; the bag is stored with the record so later templates can.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationOptions(Map<String, Value>);

impl GenerationOptions {
    /// Builds options from an optional JSON value.
    ///
    /// `None` and JSON `null` produce an empty bag.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationDomainError::InvalidOptions`] when the value is
    /// neither `null` nor a JSON object.
    pub fn from_value(value: Option<Value>) -> Result<Self, GenerationDomainError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(map)) => Ok(Self(map)),
            Some(other) => Err(GenerationDomainError::InvalidOptions(json_type_name(&other))),
        }
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` when no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the options into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
