#![deny(missing_docs)]
//! html2dash: convert HTML markup into Dash component constructor code.
//!
//! The pipeline parses markup into an element tree, normalizes it to a
//! single rooted tree against the registered component modules, renders a
//! nested constructor-call expression, and hands the text to a
//! code-formatting collaborator.
//!
//! ```
//! use html2dash::convert_html;
//!
//! let code = convert_html("<div><p>Hi</p></div>").unwrap();
//! assert_eq!(code, r#"html.Div(children=[html.P(children=["Hi"])])"#);
//! ```

/// Attribute resolution and filtering.
pub mod attrs;
/// Call-expression code generation.
pub mod codegen;
/// Pretty-printing of generated expression text.
pub mod pretty;
/// Component-module registry.
pub mod registry;

use std::collections::HashMap;

pub use codegen::{AttrFormatter, render_element};
pub use html2dash_core::{
    ConvertError, ConvertResult, Element, NormalizeOptions, ParseOptions, normalize, parse_html,
};
pub use pretty::{CodeFormatter, PrettyPrinter};
pub use registry::{ComponentModule, TagDefinition, TagEntry, TagRegistry, defaults};

/// Builder for a configured HTML → Dash conversion.
///
/// All knobs are optional; `Converter::new().convert(html)` uses the
/// built-in `html` module alone with default formatting.
pub struct Converter {
    normalize: NormalizeOptions,
    parse: ParseOptions,
    extra_modules: Vec<ComponentModule>,
    enable_svg: bool,
    attr_formatter: Option<Box<dyn AttrFormatter>>,
    code_formatter: Box<dyn CodeFormatter>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            parse: ParseOptions::default(),
            extra_modules: Vec::new(),
            enable_svg: false,
            attr_formatter: None,
            code_formatter: Box::new(PrettyPrinter::default()),
        }
    }

    /// Rename tags (old → new) before allow-list evaluation.
    pub fn tag_map(mut self, map: HashMap<String, String>) -> Self {
        self.normalize.tag_map = map;
        self
    }

    /// Unwrap these tags even when a module registers them.
    pub fn skip_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.normalize.skip_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Register an extra component module. Repeatable; earlier calls take
    /// priority, and every extra module shadows the built-ins.
    pub fn extra_module(mut self, module: ComponentModule) -> Self {
        self.extra_modules.push(module);
        self
    }

    /// Enable the built-in `dash_svg` secondary module.
    pub fn enable_svg(mut self, enable: bool) -> Self {
        self.enable_svg = enable;
        self
    }

    /// Lift the parser's node-count safety limit for very large documents.
    pub fn huge_tree(mut self, enable: bool) -> Self {
        self.parse.huge_tree = enable;
        self
    }

    /// Install a per-tag attribute formatting override.
    pub fn attr_formatter(mut self, formatter: impl AttrFormatter + 'static) -> Self {
        self.attr_formatter = Some(Box::new(formatter));
        self
    }

    /// Replace the code-formatting collaborator.
    pub fn code_formatter(mut self, formatter: impl CodeFormatter + 'static) -> Self {
        self.code_formatter = Box::new(formatter);
        self
    }

    /// The module list in priority order: extras, then `dash_svg` when
    /// enabled, then the base `html` module.
    fn modules(&self) -> Vec<ComponentModule> {
        let mut modules = self.extra_modules.clone();
        if self.enable_svg {
            modules.push(defaults::svg_module());
        }
        modules.push(defaults::html_module());
        modules
    }

    /// Convert markup to the raw single-line call expression, skipping the
    /// code-formatting collaborator.
    pub fn convert_expression(&self, html: &str) -> ConvertResult<String> {
        let registry = TagRegistry::build(&self.modules());
        let document = parse_html(html, &self.parse)?;
        let tree = normalize(document, &registry.allowed_tags(), &self.normalize)?;
        if !tree.removed_tags.is_empty() {
            log::warn!(
                "Tags: unsupported [{}] removed.",
                tree.removed_tags.join(", ")
            );
        }
        render_element(&tree.root, &registry, self.attr_formatter.as_deref())
    }

    /// Convert markup to formatted Dash constructor code.
    pub fn convert(&self, html: &str) -> ConvertResult<String> {
        let expression = self.convert_expression(html)?;
        self.code_formatter.format(&expression)
    }

    /// Convert markup and emit the result through the log sink instead of
    /// returning it.
    pub fn print(&self, html: &str) -> ConvertResult<()> {
        let code = self.convert(html)?;
        log::info!("{code}");
        Ok(())
    }
}

/// Convert markup with default options: built-in `html` module, default
/// pretty-printing.
pub fn convert_html(html: &str) -> ConvertResult<String> {
    Converter::new().convert(html)
}
