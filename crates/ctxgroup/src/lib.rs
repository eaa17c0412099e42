//! Named context group resolution for infrastructure-as-code context trees
//!
//! A context tree carries a `contextGroups` object whose entries are named
//! bundles of configuration. This crate picks one bundle and flattens it:
//!
//! - **Selection**: explicit name, else the `ctxgroup` context value, else
//!   `contextGroups.default`
//! - **Inheritance**: a group may name one parent via `inherits`; its own
//!   keys win over the parent's
//! - **All overlay**: keys in `contextGroups.all` are applied last and win
//!   over everything
//!
//! # Example
//!
//! ```
//! use ctxgroup::{StaticContext, resolve};
//! use serde_json::json;
//!
//! let context = StaticContext::new()
//!     .with("contextGroups", json!({
//!         "A": { "x": 1, "y": 2 },
//!         "B": { "y": 3, "z": 4, "inherits": "A" },
//!         "all": { "z": 9 }
//!     }))
//!     .with("ctxgroup", "B");
//!
//! let group = resolve(&context, None)?;
//! assert_eq!(group.name(), "B");
//! assert_eq!(group.to_string(), "ContextGroup(name=B, x=1, y=3, z=9)");
//! # Ok::<(), ctxgroup::Error>(())
//! ```

pub mod constants;
pub mod error;
pub mod group;
pub mod logging;
pub mod provider;
pub mod resolver;
pub mod tree;

pub use constants::ContextKey;
pub use error::{Error, Result};
pub use group::ResolvedContextGroup;
pub use provider::{ContextProvider, StaticContext};
pub use resolver::{ContextGroupResolver, GroupSource, resolve};
pub use tree::{ContextGroups, GroupDefinition};
