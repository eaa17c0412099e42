//! ContextProvider trait and the in-memory StaticContext
//!
//! A provider is the resolver's only window onto the outside world: it answers
//! "what is the raw context value stored under this key?" The construct tree of
//! an infrastructure framework is the usual source; [`StaticContext`] covers
//! tests and hosts that already hold the context as JSON.

use crate::Result;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Read-only access to raw context values by key
pub trait ContextProvider {
    /// Look up a context value, returning `None` when the key is not set.
    fn try_get_context(&self, key: &str) -> Option<Value>;
}

impl<P: ContextProvider + ?Sized> ContextProvider for &P {
    fn try_get_context(&self, key: &str) -> Option<Value> {
        (**self).try_get_context(key)
    }
}

impl<P: ContextProvider + ?Sized> ContextProvider for Box<P> {
    fn try_get_context(&self, key: &str) -> Option<Value> {
        (**self).try_get_context(key)
    }
}

impl ContextProvider for Map<String, Value> {
    fn try_get_context(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl ContextProvider for HashMap<String, Value> {
    fn try_get_context(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// In-memory context values
///
/// Later writes replace earlier ones, so file context can be loaded first and
/// command-line style overrides layered on top with [`StaticContext::with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticContext {
    values: Map<String, Value>,
}

impl StaticContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from an existing map of values
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Create a context from a JSON value
    ///
    /// Returns an error unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(crate::Error::InvalidValue {
                key: "context".to_string(),
                expected: "an object",
            }),
        }
    }

    /// Parse a context object from JSON text
    ///
    /// # Example
    ///
    /// ```
    /// use ctxgroup::{ContextProvider, StaticContext};
    ///
    /// let context = StaticContext::from_json_str(r#"{"ctxgroup": "dev"}"#).unwrap();
    /// assert_eq!(context.try_get_context("ctxgroup").unwrap(), "dev");
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parse the `context` object out of a `cdk.json` document
    ///
    /// A document without a `context` section yields an empty context.
    pub fn from_cdk_json(content: &str) -> Result<Self> {
        let mut document: Value = serde_json::from_str(content)?;
        match document.get_mut("context").map(Value::take) {
            Some(context) => Self::from_value(context),
            None => Ok(Self::new()),
        }
    }

    /// Set a value, replacing any existing value for `key`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a value in place, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Borrow the raw values
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl ContextProvider for StaticContext {
    fn try_get_context(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}
