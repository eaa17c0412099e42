//! Reserved context keys.

/// Well-known keys the resolver reads from a context tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKey {
    /// The top-level `contextGroups` object holding every group definition
    ContextGroups,
    /// The top-level `ctxgroup` override naming the group to load
    GroupOverride,
    /// `contextGroups.default`, the fallback group name
    Default,
    /// `contextGroups.all`, the overlay applied to every group
    All,
    /// The `inherits` key inside a group definition
    Inherits,
}

impl ContextKey {
    /// Get the string representation of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContextGroups => "contextGroups",
            Self::GroupOverride => "ctxgroup",
            Self::Default => "default",
            Self::All => "all",
            Self::Inherits => "inherits",
        }
    }

    /// Keys inside `contextGroups` that are not selectable group definitions.
    pub fn is_reserved_group_key(key: &str) -> bool {
        key == Self::Default.as_str() || key == Self::All.as_str()
    }
}

impl AsRef<str> for ContextKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_context_names() {
        assert_eq!(ContextKey::ContextGroups.as_str(), "contextGroups");
        assert_eq!(ContextKey::GroupOverride.as_str(), "ctxgroup");
        assert_eq!(ContextKey::Inherits.to_string(), "inherits");
    }

    #[test]
    fn reserved_group_keys() {
        assert!(ContextKey::is_reserved_group_key("default"));
        assert!(ContextKey::is_reserved_group_key("all"));
        assert!(!ContextKey::is_reserved_group_key("prod"));
    }
}
