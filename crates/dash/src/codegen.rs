//! Call-expression code generation.
//!
//! Walks a normalized element tree and emits one Python constructor call per
//! element, `module.Tag(attr=..., children=[...])`, nested to the depth of
//! the tree. Input trees must already be normalized: every tag present has a
//! registry entry.

use crate::attrs::{AttributeFilter, framework_name};
use crate::registry::TagRegistry;
use html2dash_core::{ConvertError, ConvertResult, Element};

/// Caller-supplied per-tag attribute formatting override.
///
/// Consulted before the built-in rules; `Some(fragment)` is used verbatim,
/// `None` (or an empty fragment) falls through. Implemented for any matching
/// closure.
pub trait AttrFormatter {
    /// Format one attribute of `tag`, or decline with `None`.
    fn format(&self, tag: &str, name: &str, value: &str) -> Option<String>;
}

impl<F> AttrFormatter for F
where
    F: Fn(&str, &str, &str) -> Option<String>,
{
    fn format(&self, tag: &str, name: &str, value: &str) -> Option<String> {
        self(tag, name, value)
    }
}

/// Converts a Rust string to a Python string literal.
///
/// Uses JSON serialization to properly escape special characters; a JSON
/// string literal is also a valid Python string literal.
///
/// # Examples
///
/// ```
/// use html2dash::codegen::py_string_literal;
///
/// assert_eq!(py_string_literal("hello"), "\"hello\"");
/// assert_eq!(py_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn py_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Collapses whitespace runs to single spaces, strips newlines, and trims.
///
/// # Examples
///
/// ```
/// use html2dash::codegen::normalize_text;
///
/// assert_eq!(normalize_text("  a \n  b  "), "a b");
/// assert_eq!(normalize_text(" \n "), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Recursively render one element as a constructor-call expression.
///
/// The attributes section is omitted when no attribute survives filtering;
/// `children=[...]` is omitted when the element has neither text nor child
/// elements. Text, when present, is the first children entry.
pub fn render_element(
    element: &Element,
    registry: &TagRegistry,
    overrides: Option<&dyn AttrFormatter>,
) -> ConvertResult<String> {
    let entry = registry
        .lookup(&element.tag)
        .ok_or_else(|| ConvertError::UnsupportedTag(element.tag.clone()))?;

    let mut children = Vec::new();
    let text = normalize_text(&element.text);
    if !text.is_empty() {
        children.push(py_string_literal(&text));
    }
    for child in &element.children {
        children.push(render_element(child, registry, overrides)?);
    }

    let filter = AttributeFilter::new(entry);
    let outcome = filter.filter(&element.attrs);
    let attrs: Vec<String> = outcome
        .kept
        .iter()
        .map(|(name, value)| format_attribute(&entry.canonical, name, value, overrides))
        .collect();

    let attrs_str = attrs.join(", ");
    let children_str = if children.is_empty() {
        String::new()
    } else {
        format!("children=[{}]", children.join(", "))
    };
    let comma = if !attrs_str.is_empty() && !children_str.is_empty() {
        ", "
    } else {
        ""
    };
    Ok(format!(
        "{}.{}({}{}{})",
        entry.module, entry.canonical, attrs_str, comma, children_str
    ))
}

/// Format one surviving attribute.
///
/// Rule order: caller override, inline `style`, hyphenated names, then the
/// plain `name="value"` assignment under the framework-side name.
fn format_attribute(
    tag: &str,
    name: &str,
    value: &str,
    overrides: Option<&dyn AttrFormatter>,
) -> String {
    if let Some(formatter) = overrides
        && let Some(fragment) = formatter.format(tag, name, value)
        && !fragment.is_empty()
    {
        return fragment;
    }

    if name == "style" {
        return format_style(value);
    }
    if name.contains('-') {
        // Python kwargs cannot contain hyphens; spread a one-entry dict.
        return format!(
            "**{{{}: {}}}",
            py_string_literal(name),
            py_string_literal(value)
        );
    }
    // Backslashes are doubled so the emitted literal stays terminated.
    let value = value.replace('\\', "\\\\").replace('"', "'");
    format!("{}=\"{}\"", framework_name(name), value)
}

/// Parse a `;`-separated inline style into a dict literal assignment.
fn format_style(value: &str) -> String {
    let mut entries = Vec::new();
    for declaration in value.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((key, val)) = declaration.split_once(':') else {
            log::debug!("style declaration without a colon skipped: `{declaration}`");
            continue;
        };
        entries.push(format!(
            "{}: {}",
            py_string_literal(key.trim()),
            py_string_literal(val.trim())
        ));
    }
    format!("style={{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::defaults::html_module;

    fn registry() -> TagRegistry {
        TagRegistry::build(&[html_module()])
    }

    fn element(tag: &str, attrs: &[(&str, &str)], text: &str) -> Element {
        let mut el = Element::new(tag);
        el.attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        el.text = text.to_string();
        el
    }

    #[test]
    fn nested_calls_mirror_tree_depth() {
        let mut root = element("div", &[], "");
        root.children.push(element("p", &[], "Hi"));
        let expr = render_element(&root, &registry(), None).unwrap();
        assert_eq!(expr, r#"html.Div(children=[html.P(children=["Hi"])])"#);
    }

    #[test]
    fn leaf_without_attrs_or_children_is_a_bare_call() {
        let expr = render_element(&element("br", &[], ""), &registry(), None).unwrap();
        assert_eq!(expr, "html.Br()");
    }

    #[test]
    fn text_precedes_child_expressions() {
        let mut root = element("div", &[], "lead");
        root.children.push(element("span", &[], "tail"));
        let expr = render_element(&root, &registry(), None).unwrap();
        assert_eq!(
            expr,
            r#"html.Div(children=["lead", html.Span(children=["tail"])])"#
        );
    }

    #[test]
    fn style_becomes_a_dict_literal() {
        let expr = render_element(
            &element("div", &[("style", "color:red;margin:10px")], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(style={"color": "red", "margin": "10px"})"#);
    }

    #[test]
    fn empty_and_malformed_style_segments_are_skipped() {
        let expr = render_element(
            &element("div", &[("style", "color:red;;broken;")], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(style={"color": "red"})"#);
    }

    #[test]
    fn class_uses_the_framework_keyword() {
        let expr = render_element(
            &element("div", &[("class", "bg-gray-800")], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(className="bg-gray-800")"#);
    }

    #[test]
    fn hyphenated_attribute_becomes_a_spread() {
        let expr = render_element(
            &element("div", &[("aria-label", "x")], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(**{"aria-label": "x"})"#);
    }

    #[test]
    fn embedded_double_quotes_are_downgraded_to_single() {
        let expr = render_element(
            &element("div", &[("id", r#"asds"ad"sasd"#)], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(id="asds'ad'sasd")"#);
    }

    #[test]
    fn trailing_backslash_in_a_value_stays_escaped() {
        let expr = render_element(
            &element("div", &[("id", r"foo\")], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(id="foo\\")"#);
    }

    #[test]
    fn text_is_normalized_and_escaped() {
        let expr = render_element(&element("p", &[], " say \n \"hi\"  now "), &registry(), None)
            .unwrap();
        assert_eq!(expr, r#"html.P(children=["say \"hi\" now"])"#);
    }

    #[test]
    fn disallowed_attribute_is_dropped() {
        let expr = render_element(
            &element("div", &[("href", "#"), ("id", "d")], ""),
            &registry(),
            None,
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(id="d")"#);
    }

    #[test]
    fn override_wins_and_none_falls_through() {
        let formatter = |tag: &str, name: &str, value: &str| {
            if tag == "Div" && name == "id" {
                Some(format!("ident={}", py_string_literal(value)))
            } else {
                None
            }
        };
        let expr = render_element(
            &element("div", &[("id", "d"), ("class", "c")], ""),
            &registry(),
            Some(&formatter),
        )
        .unwrap();
        assert_eq!(expr, r#"html.Div(ident="d", className="c")"#);
    }

    #[test]
    fn unregistered_tag_is_an_error() {
        let err = render_element(&element("widget", &[], ""), &registry(), None).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedTag(tag) if tag == "widget"));
    }
}
