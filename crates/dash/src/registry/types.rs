//! Registry type definitions for component modules.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single tag declaration inside a component module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDefinition {
    /// Canonical component name, in the casing the output should use
    /// (e.g. "Div", "LinearGradient").
    pub name: String,
    /// Allowed attribute names, in markup-standard spelling. A trailing `*`
    /// marks a wildcard prefix ("aria-*" allows any attribute starting with
    /// "aria-").
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// A named, ordered schema source mapping tag names to allowed attributes.
///
/// Modules are consulted in priority order when the registry is built:
/// caller-supplied extra modules first, built-ins last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentModule {
    /// Module name as it appears in generated expressions (e.g. "html").
    pub name: String,
    /// Tag declarations owned by this module.
    pub tags: Vec<TagDefinition>,
}

impl ComponentModule {
    /// Create an empty module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Add a tag declaration (builder style).
    pub fn tag(mut self, name: impl Into<String>, attributes: &[&str]) -> Self {
        self.tags.push(TagDefinition {
            name: name.into(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
        });
        self
    }
}

/// A resolved registry entry for one lowercased tag key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Canonical component name as declared by the owning module.
    pub canonical: String,
    /// Name of the owning module.
    pub module: String,
    /// Allowed attribute names (markup spelling, wildcards suffixed `*`).
    pub attributes: Vec<String>,
}

/// Case-insensitive lookup table from markup tag names to registry entries.
///
/// Built once from an ordered module list; the first module to declare a
/// lowercased tag fully determines its canonical spelling and attribute
/// source. Later declarations of the same tag are ignored, never merged.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    entries: HashMap<String, TagEntry>,
}

impl TagRegistry {
    /// Build a registry from modules in priority order.
    pub fn build(modules: &[ComponentModule]) -> Self {
        let mut entries = HashMap::new();
        for module in modules {
            for tag in &module.tags {
                let key = tag.name.to_ascii_lowercase();
                entries.entry(key).or_insert_with(|| TagEntry {
                    canonical: tag.name.clone(),
                    module: module.name.clone(),
                    attributes: tag.attributes.clone(),
                });
            }
        }
        Self { entries }
    }

    /// Look up a tag by any character-case variant of its name.
    pub fn lookup(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.get(&tag.to_ascii_lowercase())
    }

    /// The lowercased allowed-tag set, as consumed by the normalizer.
    pub fn allowed_tags(&self) -> HashSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
