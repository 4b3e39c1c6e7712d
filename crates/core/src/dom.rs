//! Owned element tree.
//!
//! The tree is built once by the parsing adapter, mutated in place by the
//! normalizer (tag renames, unwrap splicing), and read back by code
//! generation. Every node is exclusively owned by its parent; there are no
//! back-references.

use std::collections::HashSet;

/// A single markup element: tag, ordered attributes, directly-owned text,
/// and owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as parsed (html5ever lowercases HTML tags).
    pub tag: String,
    /// Attributes in source order.
    pub attrs: Vec<(String, String)>,
    /// All directly-owned text fragments, concatenated in document order.
    /// Empty when the element has no text of its own.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a text fragment to this element's owned text.
    ///
    /// Fragments are separated by a space; the codegen layer collapses
    /// whitespace runs anyway.
    pub fn push_text(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(fragment);
    }

    /// Collect the distinct lowercased tag names of this element and all of
    /// its descendants.
    pub fn subtree_tags(&self) -> HashSet<String> {
        let mut tags = HashSet::new();
        self.collect_tags(&mut tags);
        tags
    }

    fn collect_tags(&self, tags: &mut HashSet<String>) {
        tags.insert(self.tag.to_ascii_lowercase());
        for child in &self.children {
            child.collect_tags(tags);
        }
    }

    /// Find the first direct child with the given (lowercased) tag.
    pub fn child_with_tag(&self, tag: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.tag.eq_ignore_ascii_case(tag))
    }
}
