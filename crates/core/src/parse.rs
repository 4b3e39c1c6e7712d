//! HTML parsing adapter.
//!
//! Drives html5ever's document parser and converts the resulting `RcDom`
//! into the owned [`Element`] tree. The document parser always synthesizes
//! `html`/`head`/`body` wrappers, even for bare fragments; the normalizer
//! resolves the effective content root afterwards.
//!
//! Comment, doctype, and processing-instruction nodes are dropped here and
//! never surface downstream.

use crate::dom::Element;
use crate::error::{ConvertError, ConvertResult};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use serde::{Deserialize, Serialize};

/// Node-count safety limit applied unless `huge_tree` is set.
pub const DEFAULT_NODE_LIMIT: usize = 100_000;

/// Options for the parsing adapter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Lift the node-count safety limit for very large documents.
    #[serde(default)]
    pub huge_tree: bool,
}

/// Parse an HTML fragment or document into an [`Element`] tree.
///
/// Returns the `html` document root; callers normally hand it straight to
/// [`crate::normalize::normalize`].
pub fn parse_html(html: &str, options: &ParseOptions) -> ConvertResult<Element> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let document = dom.document;
    let root_handle = document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .ok_or_else(|| {
            ConvertError::structure("root resolution", "parsed document has no root element")
        })?;

    let mut walker = DomWalker {
        nodes: 0,
        limit: if options.huge_tree {
            None
        } else {
            Some(DEFAULT_NODE_LIMIT)
        },
    };
    walker.convert_element(&root_handle)
}

/// Converts rcdom handles into owned elements while counting nodes.
struct DomWalker {
    nodes: usize,
    limit: Option<usize>,
}

impl DomWalker {
    fn bump(&mut self) -> ConvertResult<()> {
        self.nodes += 1;
        match self.limit {
            Some(limit) if self.nodes > limit => Err(ConvertError::TreeTooLarge {
                nodes: self.nodes,
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn convert_element(&mut self, handle: &Handle) -> ConvertResult<Element> {
        let NodeData::Element { name, attrs, .. } = &handle.data else {
            return Err(ConvertError::structure(
                "root resolution",
                "expected an element node",
            ));
        };

        let mut element = Element::new(name.local.to_string());
        for attr in attrs.borrow().iter() {
            element
                .attrs
                .push((attr.name.local.to_string(), attr.value.to_string()));
        }

        for child in handle.children.borrow().iter() {
            match &child.data {
                NodeData::Element { .. } => {
                    self.bump()?;
                    let converted = self.convert_element(child)?;
                    element.children.push(converted);
                }
                NodeData::Text { contents } => {
                    let text = contents.borrow();
                    if !text.trim().is_empty() {
                        self.bump()?;
                        element.push_text(&text);
                    }
                }
                // Comments are pure noise; doctypes and processing
                // instructions carry nothing the converter can use.
                NodeData::Comment { .. }
                | NodeData::Doctype { .. }
                | NodeData::ProcessingInstruction { .. }
                | NodeData::Document => {}
            }
        }
        Ok(element)
    }
}
