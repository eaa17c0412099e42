//! Shared test utilities for the context-groups workspace.
//!
//! This crate provides standardised context tree fixtures so test suites do
//! not hand-build `contextGroups` JSON over and over. It is a dev-dependency
//! only — never published.
//!
//! # Modules
//!
//! - [`tree`] — [`TreeBuilder`] for assembling a [`StaticContext`]
//!
//! [`StaticContext`]: ctxgroup::StaticContext

pub mod tree;

pub use tree::{TreeBuilder, sample_context};
