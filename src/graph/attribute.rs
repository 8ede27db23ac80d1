//! Attribute values and records shared by nodes and arcs
//!
//! Every element of the diagram carries an [`AttributeRecord`]: an
//! insertion-ordered mapping from string key to a dynamically-typed
//! [`AttributeValue`]. The record is the uniform payload type — the store
//! never looks inside it beyond a handful of well-known fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A single attribute value
///
/// Supports:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
/// - Null (the absent/unset marker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl AttributeValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// String form of the value: strings yield themselves unquoted,
    /// numbers and booleans their display form, null the empty string.
    pub fn to_text(&self) -> String {
        match self {
            AttributeValue::String(s) => s.clone(),
            AttributeValue::Integer(i) => i.to_string(),
            AttributeValue::Float(f) => f.to_string(),
            AttributeValue::Boolean(b) => b.to_string(),
            AttributeValue::Null => String::new(),
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "String",
            AttributeValue::Integer(_) => "Integer",
            AttributeValue::Float(_) => "Float",
            AttributeValue::Boolean(_) => "Boolean",
            AttributeValue::Null => "Null",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "\"{}\"", s),
            AttributeValue::Integer(i) => write!(f, "{}", i),
            AttributeValue::Float(fl) => write!(f, "{}", fl),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions
impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<i32> for AttributeValue {
    fn from(i: i32) -> Self {
        AttributeValue::Integer(i as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(f: f64) -> Self {
        AttributeValue::Float(f)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

/// Scalar interchange with the consuming layer. Arrays and objects are not
/// part of the record contract and collapse to `Null`.
impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => AttributeValue::String(s),
            serde_json::Value::Bool(b) => AttributeValue::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttributeValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    AttributeValue::Float(f)
                } else {
                    AttributeValue::Null
                }
            }
            _ => AttributeValue::Null,
        }
    }
}

impl From<&AttributeValue> for serde_json::Value {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::String(s) => serde_json::Value::String(s.clone()),
            AttributeValue::Integer(i) => serde_json::Value::from(*i),
            AttributeValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            AttributeValue::Boolean(b) => serde_json::Value::Bool(*b),
            AttributeValue::Null => serde_json::Value::Null,
        }
    }
}

/// Insertion-ordered attribute record keyed by string
///
/// The payload type for both nodes and arcs. Iteration yields fields in the
/// order they were first inserted; re-inserting a key keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord(IndexMap<String, AttributeValue>);

impl AttributeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        AttributeRecord(IndexMap::new())
    }

    /// Set a field, returning the previous value if the key was present
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    /// Remove a field, preserving the order of the remaining fields
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.0.shift_remove(key)
    }

    /// True when the field is absent or explicitly `Null`.
    ///
    /// This is the standard existence check: a field counts as present only
    /// when it is set and non-null.
    pub fn is_null(&self, key: &str) -> bool {
        self.0.get(key).map_or(true, AttributeValue::is_null)
    }

    /// String form of a field, empty when the field is absent
    pub fn text(&self, key: &str) -> String {
        self.0
            .get(key)
            .map(AttributeValue::to_text)
            .unwrap_or_default()
    }

    /// Check if a key is present (regardless of its value)
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    /// Iterate field keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Drop all fields
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Convert to a JSON object of scalar fields
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                .collect(),
        )
    }

    /// Build a record from a JSON object; `None` for non-object values
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut record = AttributeRecord::new();
        for (key, value) in object {
            record.insert(key.clone(), AttributeValue::from(value.clone()));
        }
        Some(record)
    }
}

static NULL: AttributeValue = AttributeValue::Null;

/// Indexed read: absent keys read as `Null`
impl<'a> Index<&'a str> for AttributeRecord {
    type Output = AttributeValue;

    fn index(&self, key: &'a str) -> &AttributeValue {
        self.0.get(key).unwrap_or(&NULL)
    }
}

/// Indexed write: first access to an absent key inserts `Null`
impl<'a> IndexMut<&'a str> for AttributeRecord {
    fn index_mut(&mut self, key: &'a str) -> &mut AttributeValue {
        self.0.entry(key.to_string()).or_insert(AttributeValue::Null)
    }
}
