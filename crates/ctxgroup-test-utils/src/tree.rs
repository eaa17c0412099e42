//! Context tree fixtures

use ctxgroup::{ContextKey, StaticContext};
use serde_json::{Map, Value, json};

/// Builder for a context holding a `contextGroups` tree
///
/// # Example
///
/// ```
/// use ctxgroup_test_utils::TreeBuilder;
/// use serde_json::json;
///
/// let context = TreeBuilder::new()
///     .group("dev", json!({ "instances": 1 }))
///     .default_group("dev")
///     .build();
/// let group = ctxgroup::resolve(&context, None).unwrap();
/// assert_eq!(group.name(), "dev");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    groups: Map<String, Value>,
    context: StaticContext,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group definition; `definition` should be a JSON object
    pub fn group(mut self, name: &str, definition: Value) -> Self {
        self.groups.insert(name.to_string(), definition);
        self
    }

    /// Add a group that inherits from `parent`
    pub fn child(self, name: &str, parent: &str, definition: Value) -> Self {
        let mut definition = definition;
        if let Some(object) = definition.as_object_mut() {
            object.insert(ContextKey::Inherits.to_string(), json!(parent));
        }
        self.group(name, definition)
    }

    /// Set `contextGroups.all`
    pub fn all(self, definition: Value) -> Self {
        self.group(ContextKey::All.as_str(), definition)
    }

    /// Set `contextGroups.default`
    pub fn default_group(self, name: &str) -> Self {
        self.group(ContextKey::Default.as_str(), json!(name))
    }

    /// Set the top-level `ctxgroup` override
    pub fn ctxgroup(mut self, name: &str) -> Self {
        self.context.insert(ContextKey::GroupOverride.as_str(), name);
        self
    }

    pub fn build(self) -> StaticContext {
        let tree = Value::Object(self.groups);
        self.context.with(ContextKey::ContextGroups.as_str(), tree)
    }
}

/// The canonical inheritance sample
///
/// `A = {x:1, y:2}`, `B = {y:3, z:4, inherits:"A"}` and `all = {z:9}`.
pub fn sample_context() -> StaticContext {
    TreeBuilder::new()
        .group("A", json!({ "x": 1, "y": 2 }))
        .child("B", "A", json!({ "y": 3, "z": 4 }))
        .all(json!({ "z": 9 }))
        .build()
}
