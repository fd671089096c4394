//! Example value types.
//!
//! [`ExampleValue`] is the nested structure produced for a message: scalars
//! for primitive fields, single-element lists for repeated fields and
//! [`ExampleObject`] for nested messages. Objects keep keys in insertion
//! order, which for generated examples is schema declaration order.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_yaml::Value as YamlValue;

/// A generated example value.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<ExampleValue>),
    Object(ExampleObject),
}

impl ExampleValue {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        ExampleValue::String(s.into())
    }

    /// Get the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExampleValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the object if this is an object value.
    pub fn as_object(&self) -> Option<&ExampleObject> {
        match self {
            ExampleValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the elements if this is a list value.
    pub fn as_list(&self) -> Option<&[ExampleValue]> {
        match self {
            ExampleValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value can receive nested keys (an object, or a list
    /// holding at least one object).
    pub fn is_structural(&self) -> bool {
        match self {
            ExampleValue::Object(_) => true,
            ExampleValue::List(items) => items.iter().any(|v| v.as_object().is_some()),
            _ => false,
        }
    }

    /// Merge recursively generated message keys into this value.
    ///
    /// Objects receive every key of `nested` (nested keys win). Lists receive
    /// the keys in each element that is an object. Scalars are left as is.
    pub fn merge_nested(&mut self, nested: &ExampleObject) {
        match self {
            ExampleValue::Object(obj) => obj.overlay(nested),
            ExampleValue::List(items) => {
                for item in items.iter_mut() {
                    if let ExampleValue::Object(obj) = item {
                        obj.overlay(nested);
                    }
                }
            }
            _ => {}
        }
    }

    /// Convert a YAML value from the override file into an example value.
    pub fn from_yaml(yaml: &YamlValue) -> Self {
        match yaml {
            YamlValue::Null => ExampleValue::Null,
            YamlValue::Bool(b) => ExampleValue::Bool(*b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ExampleValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    ExampleValue::UInt(u)
                } else if let Some(f) = n.as_f64() {
                    ExampleValue::Float(f)
                } else {
                    ExampleValue::String(n.to_string())
                }
            }
            YamlValue::String(s) => ExampleValue::String(s.clone()),
            YamlValue::Sequence(arr) => {
                ExampleValue::List(arr.iter().map(ExampleValue::from_yaml).collect())
            }
            YamlValue::Mapping(map) => {
                let mut obj = ExampleObject::new();
                for (k, v) in map {
                    let key = match k {
                        YamlValue::String(s) => s.clone(),
                        YamlValue::Number(n) => n.to_string(),
                        YamlValue::Bool(b) => b.to_string(),
                        _ => continue,
                    };
                    obj.insert(key, ExampleValue::from_yaml(v));
                }
                ExampleValue::Object(obj)
            }
            YamlValue::Tagged(tagged) => ExampleValue::from_yaml(&tagged.value),
        }
    }
}

impl From<&str> for ExampleValue {
    fn from(s: &str) -> Self {
        ExampleValue::String(s.to_string())
    }
}

impl From<String> for ExampleValue {
    fn from(s: String) -> Self {
        ExampleValue::String(s)
    }
}

impl From<ExampleObject> for ExampleValue {
    fn from(obj: ExampleObject) -> Self {
        ExampleValue::Object(obj)
    }
}

/// Insertion-ordered mapping from field name to example value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExampleObject {
    entries: Vec<(String, ExampleValue)>,
}

impl ExampleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing an existing entry with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: ExampleValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Write every entry of `other` into this object; `other` wins on conflict.
    pub fn overlay(&mut self, other: &ExampleObject) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&ExampleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExampleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, ExampleValue)> for ExampleObject {
    fn from_iter<I: IntoIterator<Item = (String, ExampleValue)>>(iter: I) -> Self {
        let mut obj = ExampleObject::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl Serialize for ExampleValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExampleValue::Null => serializer.serialize_unit(),
            ExampleValue::Bool(b) => serializer.serialize_bool(*b),
            ExampleValue::Int(i) => serializer.serialize_i64(*i),
            ExampleValue::UInt(u) => serializer.serialize_u64(*u),
            ExampleValue::Float(f) => serializer.serialize_f64(*f),
            ExampleValue::String(s) => serializer.serialize_str(s),
            ExampleValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ExampleValue::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl Serialize for ExampleObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<&ExampleValue> for serde_json::Value {
    fn from(value: &ExampleValue) -> Self {
        match value {
            ExampleValue::Null => serde_json::Value::Null,
            ExampleValue::Bool(b) => serde_json::Value::Bool(*b),
            ExampleValue::Int(i) => serde_json::Value::from(*i),
            ExampleValue::UInt(u) => serde_json::Value::from(*u),
            ExampleValue::Float(f) => serde_json::Value::from(*f),
            ExampleValue::String(s) => serde_json::Value::String(s.clone()),
            ExampleValue::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            ExampleValue::Object(obj) => serde_json::Value::from(obj),
        }
    }
}

impl From<&ExampleObject> for serde_json::Value {
    fn from(obj: &ExampleObject) -> Self {
        let map: serde_json::Map<String, serde_json::Value> = obj
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}
