//! Field values attached to a logger

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Accumulated key-value fields. Keys are unique; the last write wins.
///
/// Ordered by key so formatters render fields deterministically.
pub type Fields = BTreeMap<String, FieldValue>;

/// A value that serializes to JSON when a formatter renders it.
///
/// Implemented for every `Serialize` type. Serialization is deferred to
/// emission time and may fail, e.g. for a map with non-string keys.
pub trait StructuredValue: Send + Sync {
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> StructuredValue for T
where
    T: Serialize + Send + Sync,
{
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Value type for structured logging fields
#[derive(Clone)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
    Structured(Arc<dyn StructuredValue>),
}

impl FieldValue {
    /// Wrap any serializable value
    pub fn structured<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        FieldValue::Structured(Arc::new(value))
    }

    /// Convert to serde_json::Value for rendering.
    ///
    /// Non-finite floats render as `null`.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        Ok(match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Json(value) => value.clone(),
            FieldValue::Structured(value) => value.to_json()?,
        })
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.debug_tuple("String").field(s).finish(),
            FieldValue::Int(i) => f.debug_tuple("Int").field(i).finish(),
            FieldValue::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            FieldValue::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            FieldValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            FieldValue::Structured(_) => f.write_str("Structured(..)"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u64::from(u))
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Json(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(FieldValue::from("alice").to_json_value().unwrap(), json!("alice"));
        assert_eq!(FieldValue::from(42).to_json_value().unwrap(), json!(42));
        assert_eq!(FieldValue::from(7u64).to_json_value().unwrap(), json!(7));
        assert_eq!(FieldValue::from(true).to_json_value().unwrap(), json!(true));
        assert_eq!(FieldValue::from(None::<i32>).to_json_value().unwrap(), json!(null));
    }

    #[test]
    fn test_non_finite_float_is_null() {
        let value = FieldValue::from(f64::NAN);
        assert_eq!(value.to_json_value().unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_structured_value() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let value = FieldValue::structured(Point { x: 1, y: 2 });
        assert_eq!(value.to_json_value().unwrap(), json!({"x": 1, "y": 2}));
    }

    #[test]
    fn test_structured_value_failure() {
        // JSON object keys must be strings
        let map: HashMap<(i32, i32), i32> = HashMap::from([((1, 2), 3)]);
        let value = FieldValue::structured(map);
        assert!(value.to_json_value().is_err());
    }

    #[test]
    fn test_fields_last_write_wins() {
        let mut fields = Fields::new();
        fields.insert("k".to_string(), FieldValue::from("1"));
        fields.insert("k".to_string(), FieldValue::from("2"));

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["k"].to_json_value().unwrap(), json!("2"));
    }
}
