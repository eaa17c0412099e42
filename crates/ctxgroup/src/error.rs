//! Error types for ctxgroup

/// Result type for ctxgroup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while resolving a context group
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No explicit name, no `ctxgroup` override and no `contextGroups.default`
    #[error("Could not determine a context group to load")]
    NoGroupSelected,

    /// The provider has no `contextGroups` tree
    #[error("No contextGroups found in context")]
    ContextGroupsMissing,

    /// The selected group is not defined in `contextGroups`
    #[error("Unknown context group: {name}")]
    UnknownGroup { name: String },

    /// A group inherits from a group that is not defined
    #[error("Context group {group} inherits from unknown context group: {parent}")]
    UnknownParent { group: String, parent: String },

    /// A group definition is present but is not a key/value mapping
    #[error("Context group {name} must be an object")]
    InvalidGroup { name: String },

    /// A reserved key holds a value of the wrong type
    #[error("Invalid value for {key}: expected {expected}")]
    InvalidValue { key: String, expected: &'static str },

    /// JSON context text failed to parse
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from the shape or contents of the context tree.
    ///
    /// Everything except a JSON parse failure is a configuration error.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Error::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_parent_displays_both_names() {
        let error = Error::UnknownParent {
            group: "prod".to_string(),
            parent: "base".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("prod"), "got: {}", display);
        assert!(display.contains("base"), "got: {}", display);
    }

    #[test]
    fn json_errors_are_not_configuration_errors() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!Error::from(parse).is_configuration_error());
        assert!(Error::NoGroupSelected.is_configuration_error());
    }
}
