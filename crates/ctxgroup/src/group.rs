//! The resolved context group record

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A context group after inheritance and the `all` overlay have been applied
///
/// Fields keep the order in which they were first set: inherited keys, then
/// the group's own keys, then keys introduced by the `all` group. Overwriting
/// a key changes its value but not its position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContextGroup {
    name: String,
    fields: Map<String, Value>,
}

impl ResolvedContextGroup {
    pub(crate) fn new(name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Name of the group that was resolved
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field as a string slice, if it is a JSON string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// All merged fields, excluding `name`
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Convert to a JSON object with `name` first, followed by every field
    ///
    /// A group field literally called `name` takes precedence over the
    /// resolved name in this flattened form.
    pub fn to_json(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert("name".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Serialize for ResolvedContextGroup {
    /// Serializes the flat form produced by [`ResolvedContextGroup::to_json`].
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a ResolvedContextGroup {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        other => write!(f, "{}", other),
    }
}

impl fmt::Display for ResolvedContextGroup {
    /// Renders as `ContextGroup(name=dev, key1=value1, ...)` for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextGroup(name={}", self.name)?;
        for (key, value) in &self.fields {
            write!(f, ", {}=", key)?;
            write_value(f, value)?;
        }
        f.write_str(")")
    }
}
