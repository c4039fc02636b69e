//! Parsing over tree-sitter's TypeScript grammar and byte-range edits of the parsed source.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::domain::AppError;

/// Grammar used to parse a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    fn language(self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Parse `source`, rejecting input the grammar cannot recover cleanly.
pub(crate) fn parse(source: &str, dialect: Dialect, file: &str) -> Result<Tree, AppError> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|e| AppError::transform(file, format!("failed to load grammar: {}", e)))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AppError::transform(file, "parser returned no tree"))?;

    if let Some(bad) = first_error(tree.root_node()) {
        let line = bad.start_position().row + 1;
        let reason = if bad.is_missing() {
            format!("missing '{}' at line {}", bad.kind(), line)
        } else {
            format!("syntax error at line {}", line)
        };
        return Err(AppError::transform(file, reason));
    }
    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

pub(crate) fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

/// Contents of a string literal node without its quotes.
pub(crate) fn string_value<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    let quoted = text(node, source);
    quoted.get(1..quoted.len().saturating_sub(1)).unwrap_or("")
}

/// First direct child whose kind is `kind`, named or anonymous.
pub(crate) fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Named children other than comments.
pub(crate) fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).filter(|child| child.kind() != "comment").collect()
}

/// A replacement of `src[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Edit {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self { start, end, text: text.into() }
    }

    pub fn remove(start: usize, end: usize) -> Self {
        Self::new(start, end, "")
    }

    pub fn replace(node: Node<'_>, text: impl Into<String>) -> Self {
        Self::new(node.start_byte(), node.end_byte(), text)
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at, at, text)
    }
}

/// Apply edits in source order; an edit overlapping an earlier one is dropped.
pub(crate) fn apply_edits(src: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|edit| (edit.start, edit.end));
    let mut out = String::with_capacity(src.len());
    let mut cursor = 0;

    for edit in edits {
        if edit.start < cursor {
            continue;
        }
        out.push_str(&src[cursor..edit.start]);
        out.push_str(&edit.text);
        cursor = edit.end;
    }
    out.push_str(&src[cursor..]);
    out
}

/// Widen `start..end` to whole lines when nothing else shares them.
pub(crate) fn line_span(src: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = src.as_bytes();
    let line_start = src[..start].rfind('\n').map_or(0, |i| i + 1);
    if !src[line_start..start].trim().is_empty() {
        return (start, end);
    }

    let mut i = end;
    while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\r' | b';') {
        i += 1;
    }
    match bytes.get(i) {
        None => (line_start, i),
        Some(b'\n') => (line_start, i + 1),
        Some(_) => (start, end),
    }
}

/// Offset just past the line containing `at`.
pub(crate) fn line_end(src: &str, at: usize) -> usize {
    src[at..].find('\n').map_or(src.len(), |i| at + i + 1)
}

/// Leading whitespace of the line containing `at`.
pub(crate) fn indentation(src: &str, at: usize) -> &str {
    let line_start = src[..at].rfind('\n').map_or(0, |i| i + 1);
    let line = &src[line_start..];
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}
