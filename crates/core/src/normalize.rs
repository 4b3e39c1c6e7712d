//! Structural normalization.
//!
//! Reshapes a freshly parsed document into the single rooted tree that code
//! generation expects: resolves the content root out of the `html`/`head`/
//! `body` wrappers, applies tag renames, and unwraps every element whose tag
//! is either unregistered or explicitly skip-listed.
//!
//! Unwrapping is structural: the element node disappears, its element
//! children are spliced into the parent at the same position, and its own
//! text is dropped. The pass operates on the removal set of the whole tree
//! at once, so the outcome does not depend on traversal order.

use crate::dom::Element;
use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Tag used for the synthesized container when the body holds more than one
/// top-level element.
const SYNTHETIC_ROOT_TAG: &str = "div";

/// Wrapper tags that are structurally expected at the document level and
/// therefore never reported as unsupported.
const WRAPPER_TAGS: [&str; 3] = ["html", "head", "body"];

/// Options for structural normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Tag renames (old → new), applied before allow-list evaluation.
    /// A renamed tag is evaluated, and skip-matched, under its new name.
    #[serde(default)]
    pub tag_map: HashMap<String, String>,
    /// Tags to unwrap even when a module registers them.
    #[serde(default)]
    pub skip_tags: Vec<String>,
}

/// Result of normalization: the single content root plus the tags that were
/// removed and deserve a diagnostic.
#[derive(Debug, Clone)]
pub struct NormalizedTree {
    /// The resolved content root.
    pub root: Element,
    /// Sorted tag names that were unwrapped and should be reported.
    /// Excludes document wrappers and intentionally skipped allowed tags.
    pub removed_tags: Vec<String>,
}

/// Normalize a parsed document into a single rooted element tree.
///
/// `document` is the `html` root returned by [`crate::parse::parse_html`];
/// `allowed_tags` is the registry's lowercased allowed-tag set.
pub fn normalize(
    document: Element,
    allowed_tags: &HashSet<String>,
    options: &NormalizeOptions,
) -> ConvertResult<NormalizedTree> {
    let mut document = document;
    let body_idx = document
        .children
        .iter()
        .position(|c| c.tag.eq_ignore_ascii_case("body"))
        .ok_or_else(|| {
            ConvertError::structure("body lookup", "parsed document has no body wrapper")
        })?;
    let mut body = document.children.remove(body_idx);

    let renames: HashMap<String, String> = options
        .tag_map
        .iter()
        .map(|(old, new)| (old.to_ascii_lowercase(), new.clone()))
        .collect();
    if !renames.is_empty() {
        for child in &mut body.children {
            apply_renames(child, &renames);
        }
    }

    let mut present: HashSet<String> = HashSet::new();
    for child in &body.children {
        present.extend(child.subtree_tags());
    }

    let skip: HashSet<String> = options
        .skip_tags
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    let unsupported: HashSet<String> = present.difference(allowed_tags).cloned().collect();
    let mut removal = unsupported;
    removal.extend(skip.iter().cloned());
    log::debug!("normalizing with removal set: {:?}", removal);

    let mut survivors = Vec::new();
    for child in body.children {
        unwrap_into(child, &removal, &mut survivors);
    }

    // Zero survivors still yields a tree: an empty synthesized container.
    let root = if survivors.len() == 1 {
        survivors.remove(0)
    } else {
        let mut container = Element::new(SYNTHETIC_ROOT_TAG);
        container.children = survivors;
        container
    };

    let mut removed_tags: Vec<String> = removal
        .into_iter()
        .filter(|tag| present.contains(tag))
        .filter(|tag| !WRAPPER_TAGS.contains(&tag.as_str()))
        .filter(|tag| !(skip.contains(tag) && allowed_tags.contains(tag)))
        .collect();
    removed_tags.sort();

    Ok(NormalizedTree { root, removed_tags })
}

fn apply_renames(element: &mut Element, renames: &HashMap<String, String>) {
    if let Some(new_tag) = renames.get(&element.tag.to_ascii_lowercase()) {
        element.tag = new_tag.clone();
    }
    for child in &mut element.children {
        apply_renames(child, renames);
    }
}

/// Unwrap `element` into `out`: removed elements contribute their processed
/// children in place; surviving elements are pushed whole.
fn unwrap_into(element: Element, removal: &HashSet<String>, out: &mut Vec<Element>) {
    let Element {
        tag,
        attrs,
        text,
        children,
    } = element;

    let mut kept_children = Vec::new();
    for child in children {
        unwrap_into(child, removal, &mut kept_children);
    }

    if removal.contains(&tag.to_ascii_lowercase()) {
        // The element's own text is disallowed content and is dropped with it.
        out.extend(kept_children);
    } else {
        out.push(Element {
            tag,
            attrs,
            text,
            children: kept_children,
        });
    }
}
