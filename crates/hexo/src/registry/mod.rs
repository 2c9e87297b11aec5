//! Callout type registry.
//!
//! - `types`: keyword-to-style mapping and lookup.
//! - `defaults`: the built-in Obsidian keyword table.

/// Built-in registry contents.
pub mod defaults;
/// Registry type definitions.
pub mod types;

pub use defaults::{FALLBACK_STYLE, default_registry};
pub use types::{CalloutMapping, CalloutRegistry, CalloutStyle};
