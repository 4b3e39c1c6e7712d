//! Component-module registry: maps markup tag names to canonical component
//! names and their allowed-attribute lists.
//!
//! # Module Structure
//!
//! - `types` - Declaration types and the case-insensitive tag registry
//! - `defaults` - Built-in Dash `html` and `dash_svg` schemas

pub mod defaults;
mod types;

pub use types::{ComponentModule, TagDefinition, TagEntry, TagRegistry};
