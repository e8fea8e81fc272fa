//! PHP source parsing on the tree-sitter PHP grammar.
//!
//! [`PhpSource`] owns a file's text together with its syntax tree, so callers
//! can walk nodes and read their text without juggling lifetimes. Files the
//! grammar cannot parse cleanly are rejected: a partial tree may attribute
//! strings to the wrong call.
//!
//! String literal nodes are decoded with PHP's escape rules. Only constant
//! strings have a value; anything that interpolates yields `None`.

use anyhow::{Context, Result, bail};
use tree_sitter::{Node, Parser, Tree, TreeCursor};

/// Node kinds allowed inside a double-quoted string with a constant value.
const CONSTANT_STRING_PARTS: &[&str] = &["string_content", "string_value", "escape_sequence"];

/// A parsed PHP (or PHTML) file.
pub struct PhpSource {
    source: String,
    tree: Tree,
}

impl PhpSource {
    /// Parse `source`, failing on the first syntax error.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_php::LANGUAGE_PHP.into())
            .context("Failed to load the PHP grammar")?;
        let tree = parser
            .parse(&source, None)
            .context("PHP parser returned no tree")?;

        let parsed = Self { source, tree };
        if parsed.root().has_error() {
            let line = parsed
                .preorder()
                .find(|node| node.is_error() || node.is_missing())
                .map(line)
                .unwrap_or(1);
            bail!("syntax error on line {}", line);
        }
        Ok(parsed)
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Every node of the tree, parents before children, in source order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            cursor: self.tree.walk(),
            done: false,
        }
    }

    /// Value of a single string literal node.
    pub fn string_literal(&self, node: Node<'_>) -> Option<String> {
        match node.kind() {
            "string" => {
                let raw = strip_binary_prefix(self.text(node).as_bytes());
                let body = raw.strip_prefix(b"'")?.strip_suffix(b"'")?;
                Some(decode_single_quoted(body))
            }
            "encapsed_string" => {
                let mut cursor = node.walk();
                if node
                    .named_children(&mut cursor)
                    .any(|part| !CONSTANT_STRING_PARTS.contains(&part.kind()))
                {
                    return None;
                }
                let raw = strip_binary_prefix(self.text(node).as_bytes());
                let body = raw.strip_prefix(b"\"")?.strip_suffix(b"\"")?;
                decode_double_quoted(body)
            }
            _ => None,
        }
    }

    /// Value of `'a' . 'b' . ...` when every operand is a string literal.
    /// Parentheses are looked through.
    pub fn constant_string(&self, node: Node<'_>) -> Option<String> {
        match node.kind() {
            "binary_expression" if operator(node) == Some(".") => {
                let operands = code_children(node);
                let [left, right] = operands.as_slice() else {
                    return None;
                };
                let mut value = self.constant_string(*left)?;
                value.push_str(&self.constant_string(*right)?);
                Some(value)
            }
            "parenthesized_expression" => match code_children(node).as_slice() {
                [inner] => self.constant_string(*inner),
                _ => None,
            },
            _ => self.string_literal(node),
        }
    }
}

/// Preorder walk over a syntax tree, see [`PhpSource::preorder`].
pub struct Preorder<'t> {
    cursor: TreeCursor<'t>,
    done: bool,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        if self.done {
            return None;
        }
        let node = self.cursor.node();
        if !self.cursor.goto_first_child() {
            while !self.cursor.goto_next_sibling() {
                if !self.cursor.goto_parent() {
                    self.done = true;
                    break;
                }
            }
        }
        Some(node)
    }
}

/// 1-based line where `node` starts.
pub fn line(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

/// 1-based line of the last character of `node`.
pub fn end_line(node: Node<'_>) -> usize {
    let start = node.start_position();
    let end = node.end_position();
    // A node ending right after a newline ends on the previous line.
    if end.column == 0 && end.row > start.row {
        end.row
    } else {
        end.row + 1
    }
}

pub fn is_comment(node: Node<'_>) -> bool {
    node.kind() == "comment"
}

/// Named children of `node`, comments excluded.
pub fn code_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !is_comment(*child))
        .collect()
}

/// First anonymous child, which for an operator expression is the operator.
fn operator(node: Node<'_>) -> Option<&'static str> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| !child.is_named())
        .map(|child| child.kind())
}

/// `b'...'` and `b"..."` are plain strings.
fn strip_binary_prefix(raw: &[u8]) -> &[u8] {
    match raw {
        [b'b' | b'B', rest @ ..] => rest,
        _ => raw,
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn decode_single_quoted(content: &[u8]) -> String {
    let mut out = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        let b = content[i];
        if b == b'\\' && matches!(content.get(i + 1), Some(b'\\' | b'\'')) {
            out.push(content[i + 1]);
            i += 2;
        } else {
            out.push(b);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Decode double-quoted string content. Returns `None` when it interpolates.
fn decode_double_quoted(content: &[u8]) -> Option<String> {
    let mut out = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\\' => i = decode_escape(content, i, &mut out),
            b'$' if content
                .get(i + 1)
                .is_some_and(|&n| is_ident_start(n) || n == b'{') =>
            {
                return None;
            }
            b'{' if content.get(i + 1) == Some(&b'$') => return None,
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Some(String::from_utf8_lossy(&out).into_owned())
}

/// Decode the escape sequence at `i` (a backslash) and return the next index.
fn decode_escape(content: &[u8], i: usize, out: &mut Vec<u8>) -> usize {
    let Some(&n) = content.get(i + 1) else {
        out.push(b'\\');
        return i + 1;
    };
    let simple = match n {
        b'n' => Some(b'\n'),
        b't' => Some(b'\t'),
        b'r' => Some(b'\r'),
        b'v' => Some(0x0b),
        b'e' => Some(0x1b),
        b'f' => Some(0x0c),
        b'\\' => Some(b'\\'),
        b'$' => Some(b'$'),
        b'"' => Some(b'"'),
        _ => None,
    };
    if let Some(decoded) = simple {
        out.push(decoded);
        return i + 2;
    }

    match n {
        b'0'..=b'7' => {
            let digits = content[i + 1..]
                .iter()
                .take(3)
                .take_while(|&&b| (b'0'..=b'7').contains(&b))
                .count();
            let value = content[i + 1..i + 1 + digits]
                .iter()
                .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
            out.push((value & 0xff) as u8);
            i + 1 + digits
        }
        b'x' if content.get(i + 2).is_some_and(u8::is_ascii_hexdigit) => {
            let digits = content[i + 2..]
                .iter()
                .take(2)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            let hex = String::from_utf8_lossy(&content[i + 2..i + 2 + digits]);
            out.push(u8::from_str_radix(&hex, 16).unwrap_or(0));
            i + 2 + digits
        }
        b'u' if content.get(i + 2) == Some(&b'{') => {
            let close = content[i + 3..].iter().position(|&b| b == b'}');
            let decoded = close.and_then(|len| {
                let hex = std::str::from_utf8(&content[i + 3..i + 3 + len]).ok()?;
                let c = char::from_u32(u32::from_str_radix(hex, 16).ok()?)?;
                Some((c, len))
            });
            match decoded {
                Some((c, len)) => {
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                    i + 3 + len + 1
                }
                None => {
                    out.push(b'\\');
                    i + 1
                }
            }
        }
        // Unknown escapes keep their backslash.
        _ => {
            out.push(b'\\');
            i + 1
        }
    }
}
