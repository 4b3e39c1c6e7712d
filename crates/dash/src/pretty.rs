//! Best-effort pretty-printing of generated expression text.
//!
//! The conversion entry point treats the formatter as an opaque
//! collaborator: it hands over the single-line expression and fails the
//! whole conversion if formatting fails. The built-in [`PrettyPrinter`]
//! re-flows nested call expressions the way a Python formatter would:
//! groups that fit the line width stay inline, everything else gets one
//! item per line with trailing commas.

use html2dash_core::{ConvertError, ConvertResult};

/// An opaque code-formatting collaborator.
pub trait CodeFormatter {
    /// Reformat raw expression text into canonical source text.
    fn format(&self, source: &str) -> ConvertResult<String>;
}

/// Width-aware expression re-flower.
#[derive(Debug, Clone, Copy)]
pub struct PrettyPrinter {
    /// Target line width.
    pub width: usize,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            width: 88,
            indent: 4,
        }
    }
}

impl CodeFormatter for PrettyPrinter {
    fn format(&self, source: &str) -> ConvertResult<String> {
        let nodes = parse_expression(source)?;
        let mut out = String::with_capacity(source.len());
        render_nodes(&nodes, &mut out, 0, self);
        Ok(out)
    }
}

/// A fragment of the tokenized expression.
#[derive(Debug)]
enum Node {
    /// Plain text run (identifiers, `=`, `:`, spaces within an item).
    Run(String),
    /// String literal, quotes included.
    Str(String),
    /// Bracketed group with comma-separated items.
    Group {
        open: char,
        close: char,
        items: Vec<Vec<Node>>,
    },
}

fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Parse a run of nodes terminated by `,`, a closing delimiter, or end
    /// of input. Terminators are left unconsumed.
    fn parse_item(&mut self) -> ConvertResult<Vec<Node>> {
        let mut nodes = Vec::new();
        let mut run = String::new();
        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' => {
                    flush_run(&mut run, &mut nodes);
                    nodes.push(self.parse_string()?);
                }
                '(' | '[' | '{' => {
                    flush_run(&mut run, &mut nodes);
                    self.pos += 1;
                    nodes.push(self.parse_group(c)?);
                }
                ')' | ']' | '}' | ',' => break,
                _ => {
                    run.push(c);
                    self.pos += 1;
                }
            }
        }
        flush_run(&mut run, &mut nodes);
        Ok(nodes)
    }

    /// Parse the comma-separated items of a group whose opener was already
    /// consumed.
    fn parse_group(&mut self, open: char) -> ConvertResult<Node> {
        let close = closing(open);
        let mut items = Vec::new();
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(c) if c == close => {
                    self.pos += 1;
                    return Ok(Node::Group { open, close, items });
                }
                Some(')') | Some(']') | Some('}') => {
                    return Err(ConvertError::format(format!(
                        "mismatched `{}` inside `{}` group",
                        self.peek().unwrap_or(close),
                        open
                    )));
                }
                None => {
                    return Err(ConvertError::format(format!(
                        "unterminated `{open}` group"
                    )));
                }
                _ => {}
            }
            let item = self.parse_item()?;
            if !item.is_empty() {
                items.push(item);
            }
            if self.peek() == Some(',') {
                self.pos += 1;
            }
        }
    }

    /// Consume a quoted string literal, honoring backslash escapes.
    fn parse_string(&mut self) -> ConvertResult<Node> {
        let quote = self.bump().unwrap_or('"');
        let mut literal = String::new();
        literal.push(quote);
        while let Some(c) = self.bump() {
            literal.push(c);
            if c == '\\' {
                if let Some(escaped) = self.bump() {
                    literal.push(escaped);
                }
                continue;
            }
            if c == quote {
                return Ok(Node::Str(literal));
            }
        }
        Err(ConvertError::format("unterminated string literal"))
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.pos += 1;
        }
    }
}

fn flush_run(run: &mut String, nodes: &mut Vec<Node>) {
    if !run.is_empty() {
        nodes.push(Node::Run(std::mem::take(run)));
    }
}

/// Tokenize a full expression; anything left over means unbalanced input.
fn parse_expression(source: &str) -> ConvertResult<Vec<Node>> {
    let mut parser = Parser {
        chars: source.chars().collect(),
        pos: 0,
    };
    let nodes = parser.parse_item()?;
    if let Some(extra) = parser.peek() {
        return Err(ConvertError::format(format!(
            "unexpected `{extra}` outside any group"
        )));
    }
    Ok(nodes)
}

fn inline_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Run(s) | Node::Str(s) => out.push_str(s),
            Node::Group { open, close, items } => {
                out.push(*open);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    inline_nodes(item, out);
                }
                out.push(*close);
            }
        }
    }
}

fn current_column(out: &str) -> usize {
    match out.rfind('\n') {
        Some(idx) => out.len() - idx - 1,
        None => out.len(),
    }
}

fn render_nodes(nodes: &[Node], out: &mut String, level: usize, pp: &PrettyPrinter) {
    for node in nodes {
        match node {
            Node::Run(s) | Node::Str(s) => out.push_str(s),
            Node::Group { open, close, items } => {
                let mut inline = String::new();
                inline_nodes(std::slice::from_ref(node), &mut inline);
                if current_column(out) + inline.len() <= pp.width || items.is_empty() {
                    out.push_str(&inline);
                } else {
                    out.push(*open);
                    for item in items {
                        out.push('\n');
                        out.push_str(&" ".repeat(pp.indent * (level + 1)));
                        render_nodes(item, out, level + 1, pp);
                        out.push(',');
                    }
                    out.push('\n');
                    out.push_str(&" ".repeat(pp.indent * level));
                    out.push(*close);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_expressions_stay_on_one_line() {
        let source = r#"html.Div(children=[html.P(children=["Hi"])])"#;
        let formatted = PrettyPrinter::default().format(source).unwrap();
        assert_eq!(formatted, source);
    }

    #[test]
    fn long_expressions_expand_with_trailing_commas() {
        let printer = PrettyPrinter {
            width: 30,
            indent: 4,
        };
        let source = r##"html.Div(className="bg", children=[html.A(href="#"), "text"])"##;
        let formatted = printer.format(source).unwrap();
        let expected = "html.Div(\n    className=\"bg\",\n    children=[\n        html.A(href=\"#\"),\n        \"text\",\n    ],\n)";
        assert_eq!(formatted, expected);
    }

    #[test]
    fn empty_argument_lists_never_expand() {
        let printer = PrettyPrinter {
            width: 1,
            indent: 4,
        };
        assert_eq!(printer.format("html.Br()").unwrap(), "html.Br()");
    }

    #[test]
    fn delimiters_inside_strings_are_opaque() {
        let source = r#"html.P(children=["a (weird, [text] {here})"])"#;
        let formatted = PrettyPrinter::default().format(source).unwrap();
        assert_eq!(formatted, source);
    }

    #[test]
    fn unbalanced_input_is_a_format_error() {
        let err = PrettyPrinter::default().format("html.Div(").unwrap_err();
        assert!(matches!(err, ConvertError::Format(_)));
        let err = PrettyPrinter::default().format("html.Div)").unwrap_err();
        assert!(matches!(err, ConvertError::Format(_)));
        let err = PrettyPrinter::default().format(r#"html.P(children=["x)"#).unwrap_err();
        assert!(matches!(err, ConvertError::Format(_)));
    }
}
