//! Attribute resolution and filtering.
//!
//! Allow-lists are declared in markup-standard spelling; a handful of
//! framework property names differ from their markup counterparts and are
//! translated through the alias table in both directions. Matching runs
//! against markup names, emission uses framework names (`for` is a Python
//! keyword and can never appear as a kwarg).

use crate::registry::TagEntry;

/// Framework property name ↔ markup attribute name.
const FRAMEWORK_ALIASES: &[(&str, &str)] = &[
    ("className", "class"),
    ("htmlFor", "for"),
    ("accessKey", "accesskey"),
    ("contentEditable", "contenteditable"),
    ("spellCheck", "spellcheck"),
    ("tabIndex", "tabindex"),
];

/// Translate a framework property name to its markup spelling
/// (`className` → `class`). Names without an alias pass through.
pub fn markup_name(name: &str) -> &str {
    FRAMEWORK_ALIASES
        .iter()
        .find(|(framework, _)| *framework == name)
        .map(|(_, markup)| *markup)
        .unwrap_or(name)
}

/// Translate a markup attribute name to its framework spelling
/// (`class` → `className`). Names without an alias pass through.
pub fn framework_name(name: &str) -> &str {
    FRAMEWORK_ALIASES
        .iter()
        .find(|(_, markup)| *markup == name)
        .map(|(framework, _)| *framework)
        .unwrap_or(name)
}

/// The allowed-attribute set for one tag, split into exact names and
/// wildcard prefixes.
#[derive(Debug)]
pub struct AttributeFilter<'a> {
    module: &'a str,
    canonical: &'a str,
    exact: Vec<String>,
    wildcards: Vec<String>,
}

/// Partition of an element's attributes into kept pairs and dropped names.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Surviving attributes, in source order.
    pub kept: Vec<(String, String)>,
    /// Names that failed the allow-list, in source order.
    pub dropped: Vec<String>,
}

impl<'a> AttributeFilter<'a> {
    /// Build the filter for a registry entry, translating aliases and
    /// separating wildcard entries (trailing `*`) from exact names.
    pub fn new(entry: &'a TagEntry) -> Self {
        let mut exact = Vec::new();
        let mut wildcards = Vec::new();
        for attribute in &entry.attributes {
            if let Some(prefix) = attribute.strip_suffix('*') {
                wildcards.push(prefix.to_string());
            } else {
                exact.push(markup_name(attribute).to_string());
            }
        }
        Self {
            module: &entry.module,
            canonical: &entry.canonical,
            exact,
            wildcards,
        }
    }

    /// Whether an attribute name matches an exact entry or a wildcard
    /// prefix.
    pub fn allows(&self, name: &str) -> bool {
        self.exact.iter().any(|allowed| allowed == name)
            || self.wildcards.iter().any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// Filter an element's attributes, diagnosing each dropped name once.
    pub fn filter(&self, attrs: &[(String, String)]) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for (name, value) in attrs {
            if self.allows(name) {
                outcome.kept.push((name.clone(), value.clone()));
            } else {
                log::warn!(
                    "Attr: `{}` on {}.{} is not supported, removed",
                    name,
                    self.module,
                    self.canonical
                );
                outcome.dropped.push(name.clone());
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(attributes: &[&str]) -> TagEntry {
        TagEntry {
            canonical: "Input".to_string(),
            module: "dcc".to_string(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn pairs(attrs: &[(&str, &str)]) -> Vec<(String, String)> {
        attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn exact_names_survive_and_others_drop() {
        let entry = entry(&["id", "type"]);
        let filter = AttributeFilter::new(&entry);
        let outcome = filter.filter(&pairs(&[("id", "a"), ("name", "b"), ("type", "text")]));
        assert_eq!(outcome.kept.len(), 2);
        assert_eq!(outcome.dropped, vec!["name".to_string()]);
    }

    #[test]
    fn wildcard_matches_the_declared_prefix() {
        let entry = entry(&["id", "aria-*"]);
        let filter = AttributeFilter::new(&entry);
        assert!(filter.allows("aria-label"));
        assert!(filter.allows("aria-required"));
        // The prefix is what matters; unrelated names must not slip
        // through just because any string starts with itself.
        assert!(!filter.allows("role"));
        assert!(!filter.allows("ariafoo"));
    }

    #[test]
    fn alias_translation_matches_markup_spelling() {
        let entry = entry(&["className", "htmlFor"]);
        let filter = AttributeFilter::new(&entry);
        assert!(filter.allows("class"));
        assert!(filter.allows("for"));
        assert!(!filter.allows("className"));
    }

    #[test]
    fn alias_helpers_round_trip() {
        assert_eq!(markup_name("className"), "class");
        assert_eq!(framework_name("class"), "className");
        assert_eq!(framework_name("for"), "htmlFor");
        assert_eq!(framework_name("tabindex"), "tabIndex");
        assert_eq!(framework_name("accesskey"), "accessKey");
        assert_eq!(framework_name("spellcheck"), "spellCheck");
        assert_eq!(framework_name("contenteditable"), "contentEditable");
        assert_eq!(framework_name("href"), "href");
    }
}
