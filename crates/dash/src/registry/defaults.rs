//! Built-in component schemas.
//!
//! These tables are the statically-declared replacement for discovering
//! component properties from the live framework at run time: the tag and
//! attribute lists were generated once from the documented Dash component
//! APIs (`dash.html` and `dash_svg`) and are shipped with the crate.
//!
//! Attribute names use markup-standard spelling so filtering matches real
//! markup attributes; the resolver translates framework aliases such as
//! `className` both ways. Every built-in tag additionally accepts the
//! `aria-*` and `data-*` wildcard attributes, which Dash forwards as
//! wildcard props.

use super::types::{ComponentModule, TagDefinition};
use once_cell::sync::Lazy;

/// Attributes shared by every `dash.html` component.
const GLOBAL_HTML_ATTRS: &[&str] = &[
    "id",
    "className",
    "style",
    "title",
    "role",
    "lang",
    "dir",
    "hidden",
    "draggable",
    "accesskey",
    "contenteditable",
    "spellcheck",
    "tabindex",
    "aria-*",
    "data-*",
];

/// HTML tags that carry only the global attribute set.
const PLAIN_HTML_TAGS: &[&str] = &[
    "abbr",
    "address",
    "article",
    "aside",
    "b",
    "bdi",
    "bdo",
    "br",
    "caption",
    "cite",
    "code",
    "datalist",
    "dd",
    "dfn",
    "div",
    "dl",
    "dt",
    "em",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "i",
    "kbd",
    "legend",
    "main",
    "mark",
    "nav",
    "noscript",
    "p",
    "picture",
    "pre",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "section",
    "small",
    "span",
    "strong",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "tfoot",
    "thead",
    "tr",
    "u",
    "ul",
    "var",
    "wbr",
];

/// HTML tags with attributes beyond the global set.
const HTML_TAG_EXTRAS: &[(&str, &[&str])] = &[
    ("a", &["href", "target", "rel", "download", "hreflang", "type"]),
    ("area", &["href", "alt", "shape", "coords", "target"]),
    ("audio", &["src", "controls", "loop", "muted", "preload"]),
    ("base", &["href", "target"]),
    ("blockquote", &["cite"]),
    ("button", &["type", "name", "value", "disabled"]),
    ("canvas", &["width", "height"]),
    ("col", &["span"]),
    ("colgroup", &["span"]),
    ("data", &["value"]),
    ("del", &["cite", "datetime"]),
    ("details", &["open"]),
    ("dialog", &["open"]),
    ("embed", &["src", "type", "width", "height"]),
    ("fieldset", &["name", "disabled"]),
    ("form", &["action", "method", "target", "name"]),
    ("iframe", &["src", "width", "height", "allow", "name"]),
    ("img", &["src", "alt", "width", "height", "loading"]),
    (
        "input",
        &[
            "type",
            "name",
            "value",
            "placeholder",
            "checked",
            "disabled",
            "required",
            "min",
            "max",
            "step",
            "multiple",
            "pattern",
            "size",
        ],
    ),
    ("ins", &["cite", "datetime"]),
    ("label", &["htmlFor"]),
    ("li", &["value"]),
    ("link", &["href", "rel", "type", "media"]),
    ("map", &["name"]),
    ("meta", &["name", "content"]),
    ("meter", &["value", "min", "max", "low", "high", "optimum"]),
    ("object", &["data", "type", "width", "height", "name"]),
    ("ol", &["start", "reversed", "type"]),
    ("optgroup", &["label", "disabled"]),
    ("option", &["value", "disabled", "selected"]),
    ("output", &["name"]),
    ("param", &["name", "value"]),
    ("progress", &["value", "max"]),
    ("q", &["cite"]),
    (
        "select",
        &["name", "value", "disabled", "multiple", "required", "size"],
    ),
    ("slot", &["name"]),
    ("source", &["src", "type", "media"]),
    ("td", &["colspan", "rowspan", "headers"]),
    (
        "textarea",
        &["name", "placeholder", "rows", "cols", "disabled", "required", "wrap"],
    ),
    ("th", &["colspan", "rowspan", "headers", "scope"]),
    ("time", &["datetime"]),
    ("track", &["src", "kind", "label", "default"]),
    (
        "video",
        &["src", "controls", "loop", "muted", "poster", "width", "height", "preload"],
    ),
];

/// Attributes shared by every `dash_svg` component.
const GLOBAL_SVG_ATTRS: &[&str] = &[
    "id",
    "className",
    "style",
    "width",
    "height",
    "x",
    "y",
    "fill",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-dasharray",
    "opacity",
    "transform",
    "aria-*",
    "data-*",
];

/// SVG components with their canonical casing and extra attributes.
const SVG_TAGS: &[(&str, &[&str])] = &[
    ("Svg", &["xmlns", "viewBox", "version", "preserveAspectRatio"]),
    ("Circle", &["cx", "cy", "r"]),
    ("Ellipse", &["cx", "cy", "rx", "ry"]),
    ("Rect", &["rx", "ry"]),
    ("Line", &["x1", "y1", "x2", "y2"]),
    ("Polyline", &["points"]),
    ("Polygon", &["points"]),
    ("Path", &["d", "pathLength"]),
    ("Text", &["dx", "dy", "text-anchor", "font-family", "font-size"]),
    ("Tspan", &["dx", "dy"]),
    ("G", &[]),
    ("Defs", &[]),
    ("Use", &["href"]),
    ("Symbol", &["viewBox", "preserveAspectRatio"]),
    ("Image", &["href"]),
    ("LinearGradient", &["x1", "y1", "x2", "y2", "gradientUnits"]),
    ("RadialGradient", &["cx", "cy", "r", "fx", "fy", "gradientUnits"]),
    ("Stop", &["offset", "stop-color", "stop-opacity"]),
    ("Pattern", &["patternUnits", "viewBox"]),
    ("ClipPath", &["clipPathUnits"]),
    ("Mask", &["maskUnits"]),
    ("Marker", &["refX", "refY", "markerWidth", "markerHeight", "orient"]),
];

static HTML_MODULE: Lazy<ComponentModule> = Lazy::new(build_html_module);
static SVG_MODULE: Lazy<ComponentModule> = Lazy::new(build_svg_module);

/// The built-in `dash.html` module, the default lowest-priority schema.
pub fn html_module() -> ComponentModule {
    HTML_MODULE.clone()
}

/// The built-in `dash_svg` secondary module. Registered above the base
/// `html` module only when the converter enables it.
pub fn svg_module() -> ComponentModule {
    SVG_MODULE.clone()
}

fn build_html_module() -> ComponentModule {
    let mut module = ComponentModule::new("html");
    for tag in PLAIN_HTML_TAGS {
        module.tags.push(TagDefinition {
            name: capitalize(tag),
            attributes: attribute_list(GLOBAL_HTML_ATTRS, &[]),
        });
    }
    for (tag, extras) in HTML_TAG_EXTRAS {
        module.tags.push(TagDefinition {
            name: capitalize(tag),
            attributes: attribute_list(GLOBAL_HTML_ATTRS, extras),
        });
    }
    module
}

fn build_svg_module() -> ComponentModule {
    let mut module = ComponentModule::new("dash_svg");
    for (name, extras) in SVG_TAGS {
        module.tags.push(TagDefinition {
            name: name.to_string(),
            attributes: attribute_list(GLOBAL_SVG_ATTRS, extras),
        });
    }
    module
}

fn attribute_list(global: &[&str], extras: &[&str]) -> Vec<String> {
    global
        .iter()
        .chain(extras.iter())
        .map(|a| a.to_string())
        .collect()
}

/// Dash component names capitalize the first letter of the tag ("div" →
/// "Div", "h1" → "H1").
fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
