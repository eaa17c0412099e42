//! Borrowed view over a `contextGroups` object
//!
//! Validation is lazy: only the entries a resolution actually touches are
//! checked, so a malformed group elsewhere in the tree does not block loading
//! a well-formed one.

use crate::constants::ContextKey;
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Group definition: a flat mapping of context keys to values
pub type GroupDefinition = Map<String, Value>;

/// Read-only view of the `contextGroups` tree
#[derive(Debug, Clone, Copy)]
pub struct ContextGroups<'a> {
    groups: &'a Map<String, Value>,
}

impl<'a> ContextGroups<'a> {
    /// Wrap the raw `contextGroups` value
    ///
    /// Returns an error unless the value is a JSON object.
    pub fn new(value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .map(Self::from_map)
            .ok_or_else(|| Error::InvalidValue {
                key: ContextKey::ContextGroups.to_string(),
                expected: "an object",
            })
    }

    /// Wrap an already-validated map
    pub fn from_map(groups: &'a Map<String, Value>) -> Self {
        Self { groups }
    }

    /// The fallback group name from `contextGroups.default`
    pub fn default_group(&self) -> Result<Option<&'a str>> {
        match self.groups.get(ContextKey::Default.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(name)) => Ok(Some(name.as_str())),
            Some(_) => Err(Error::InvalidValue {
                key: format!("{}.{}", ContextKey::ContextGroups, ContextKey::Default),
                expected: "a string",
            }),
        }
    }

    /// The overlay applied to every resolution, from `contextGroups.all`
    pub fn all_group(&self) -> Result<Option<&'a GroupDefinition>> {
        self.group(ContextKey::All.as_str())
    }

    /// Look up a group definition by name
    ///
    /// `Ok(None)` means the group is not defined; an entry that exists but is
    /// not an object is an [`Error::InvalidGroup`].
    pub fn group(&self, name: &str) -> Result<Option<&'a GroupDefinition>> {
        match self.groups.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(definition)) => Ok(Some(definition)),
            Some(_) => Err(Error::InvalidGroup {
                name: name.to_string(),
            }),
        }
    }

    /// Check whether a group is defined
    pub fn contains(&self, name: &str) -> bool {
        matches!(self.groups.get(name), Some(value) if !value.is_null())
    }

    /// Names of selectable groups in tree order
    ///
    /// The reserved `default` and `all` entries are skipped.
    pub fn group_names(&self) -> Vec<&'a str> {
        self.groups
            .keys()
            .map(String::as_str)
            .filter(|key| !ContextKey::is_reserved_group_key(key))
            .collect()
    }
}

/// Read the `inherits` target of a group definition
pub(crate) fn parent_of<'a>(group: &str, definition: &'a GroupDefinition) -> Result<Option<&'a str>> {
    match definition.get(ContextKey::Inherits.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(parent)) => Ok(Some(parent.as_str())),
        Some(_) => Err(Error::InvalidValue {
            key: format!("{}.{}", group, ContextKey::Inherits),
            expected: "a string",
        }),
    }
}
