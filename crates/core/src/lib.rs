#![deny(missing_docs)]
//! html2dash core: element tree, HTML parsing adapter, and structural normalization.

/// Owned element tree produced by parsing and consumed by codegen.
pub mod dom;
/// Core error types.
pub mod error;
/// Structural normalization of parsed documents.
pub mod normalize;
/// HTML parsing adapter built on html5ever.
pub mod parse;

pub use dom::Element;
pub use error::{ConvertError, ConvertResult};
pub use normalize::{NormalizeOptions, NormalizedTree, normalize};
pub use parse::{DEFAULT_NODE_LIMIT, ParseOptions, parse_html};
