//! Context group resolution with layered merge
//!
//! The `ContextGroupResolver` picks a group name and then merges three layers
//! into one flat record, later layers overriding earlier ones:
//!
//! 1. The group named by the selected group's `inherits` key
//! 2. The selected group's own keys
//! 3. The `all` group
//!
//! Inheritance is a single level deep: a parent's own `inherits` key is not
//! followed.

use crate::constants::ContextKey;
use crate::group::ResolvedContextGroup;
use crate::provider::ContextProvider;
use crate::tree::{ContextGroups, GroupDefinition, parent_of};
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Where the selected group name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    /// Passed to [`ContextGroupResolver::with_group`]
    Explicit,
    /// The `ctxgroup` context value
    Override,
    /// `contextGroups.default`
    Default,
}

/// Resolves a named context group from a [`ContextProvider`]
///
/// Group name selection, first match wins:
/// 1. The explicit name given to [`ContextGroupResolver::with_group`]
/// 2. The `ctxgroup` context value
/// 3. `contextGroups.default`
///
/// # Example
///
/// ```
/// use ctxgroup::{ContextGroupResolver, StaticContext};
/// use serde_json::json;
///
/// let context = StaticContext::new().with(
///     "contextGroups",
///     json!({
///         "default": "dev",
///         "dev": { "instances": 1 },
///         "all": { "region": "us-east-1" }
///     }),
/// );
///
/// let group = ContextGroupResolver::new(&context).resolve().unwrap();
/// assert_eq!(group.name(), "dev");
/// assert_eq!(group.get_str("region"), Some("us-east-1"));
/// ```
#[derive(Debug)]
pub struct ContextGroupResolver<'p, P: ContextProvider + ?Sized> {
    provider: &'p P,
    explicit_group: Option<String>,
}

impl<'p, P: ContextProvider + ?Sized> ContextGroupResolver<'p, P> {
    /// Create a resolver reading context from `provider`
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            explicit_group: None,
        }
    }

    /// Select a group explicitly, overriding `ctxgroup` and the default
    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.explicit_group = Some(name.into());
        self
    }

    /// The explicitly requested group name, if any
    pub fn explicit_group(&self) -> Option<&str> {
        self.explicit_group.as_deref()
    }

    /// Determine which group would be loaded, and why
    pub fn select_group_name(&self) -> Result<(String, GroupSource)> {
        let tree = self.context_groups_value()?;
        let groups = ContextGroups::new(&tree)?;
        self.select_from(&groups)
    }

    /// Resolve the selected group into a flat record
    ///
    /// Reads `contextGroups` from the provider once, selects a group name and
    /// merges the inherited, own and `all` layers in that order.
    ///
    /// # Errors
    ///
    /// - [`Error::ContextGroupsMissing`] when the provider has no `contextGroups`
    /// - [`Error::NoGroupSelected`] when no source names a group
    /// - [`Error::UnknownGroup`] when the selected group is not defined
    /// - [`Error::UnknownParent`] when `inherits` names an undefined group
    pub fn resolve(&self) -> Result<ResolvedContextGroup> {
        let tree = self.context_groups_value()?;
        let groups = ContextGroups::new(&tree)?;
        let (name, source) = self.select_from(&groups)?;
        tracing::debug!(group = %name, ?source, "Selected context group");

        let fields = merge_layers(&groups, &name)?;
        Ok(ResolvedContextGroup::new(name, fields))
    }

    fn context_groups_value(&self) -> Result<Value> {
        match self
            .provider
            .try_get_context(ContextKey::ContextGroups.as_str())
        {
            None | Some(Value::Null) => Err(Error::ContextGroupsMissing),
            Some(tree) => Ok(tree),
        }
    }

    fn select_from(&self, groups: &ContextGroups<'_>) -> Result<(String, GroupSource)> {
        if let Some(name) = &self.explicit_group {
            return Ok((name.clone(), GroupSource::Explicit));
        }

        match self
            .provider
            .try_get_context(ContextKey::GroupOverride.as_str())
        {
            None | Some(Value::Null) => {}
            Some(Value::String(name)) => return Ok((name, GroupSource::Override)),
            Some(_) => {
                return Err(Error::InvalidValue {
                    key: ContextKey::GroupOverride.to_string(),
                    expected: "a string",
                });
            }
        }

        match groups.default_group()? {
            Some(name) => Ok((name.to_string(), GroupSource::Default)),
            None => Err(Error::NoGroupSelected),
        }
    }
}

/// Merge the inherited, own and `all` layers for group `name`
///
/// The reserved `default` and `all` entries are not selectable groups.
fn merge_layers(groups: &ContextGroups<'_>, name: &str) -> Result<Map<String, Value>> {
    let unknown = || Error::UnknownGroup {
        name: name.to_string(),
    };
    if ContextKey::is_reserved_group_key(name) {
        return Err(unknown());
    }
    let own = groups.group(name)?.ok_or_else(unknown)?;

    let mut fields = Map::new();

    if let Some(parent) = parent_of(name, own)? {
        let unknown_parent = || Error::UnknownParent {
            group: name.to_string(),
            parent: parent.to_string(),
        };
        if ContextKey::is_reserved_group_key(parent) {
            return Err(unknown_parent());
        }
        let base = groups.group(parent)?.ok_or_else(unknown_parent)?;
        tracing::trace!(group = %name, %parent, keys = base.len(), "Applying inherited layer");
        overlay(&mut fields, base);
    }

    tracing::trace!(group = %name, keys = own.len(), "Applying group layer");
    overlay(&mut fields, own);

    if let Some(all) = groups.all_group()? {
        tracing::trace!(group = %name, keys = all.len(), "Applying all layer");
        overlay(&mut fields, all);
    }

    Ok(fields)
}

/// Copy every key of `layer` onto `fields`, skipping the `inherits` control key
fn overlay(fields: &mut Map<String, Value>, layer: &GroupDefinition) {
    for (key, value) in layer {
        if key == ContextKey::Inherits.as_str() {
            continue;
        }
        fields.insert(key.clone(), value.clone());
    }
}

/// Resolve a context group in one call
///
/// Equivalent to `ContextGroupResolver::new(provider)`, plus
/// [`ContextGroupResolver::with_group`] when `group` is `Some`.
pub fn resolve<P: ContextProvider + ?Sized>(
    provider: &P,
    group: Option<&str>,
) -> Result<ResolvedContextGroup> {
    let resolver = ContextGroupResolver::new(provider);
    match group {
        Some(name) => resolver.with_group(name).resolve(),
        None => resolver.resolve(),
    }
}
