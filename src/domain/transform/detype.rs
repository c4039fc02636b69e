//! Type stripping for TypeScript modules and `lang="ts"` single-file components.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::{Node, TreeCursor};

use crate::domain::AppError;

use super::syntax::{self, Dialect, Edit, child_of_kind, named_children, text};
use super::vue_macros::{self, Declarations};

static SCRIPT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<script\b([^>]*)>"#).expect("Invalid regex"));

static LANG_TS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+lang\s*=\s*["'](tsx?)["']"#).expect("Invalid regex"));

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("Invalid regex"));

/// Statements and members with no runtime counterpart.
const TYPE_ONLY: [&str; 5] = [
    "interface_declaration",
    "type_alias_declaration",
    "function_signature",
    "ambient_declaration",
    "abstract_method_signature",
];

/// Strip TypeScript from `source`, choosing the strategy from `path`'s extension.
///
/// `.vue` files have their `lang="ts"` script blocks converted; `.ts`-family
/// files are converted whole; anything else is returned unchanged.
pub fn detype(path: &Path, source: &str) -> Result<String, AppError> {
    let file = path.display().to_string();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("vue") => detype_sfc(source, &file),
        Some("ts" | "mts" | "cts") => detype_script(source, Dialect::TypeScript, &file),
        Some("tsx") => detype_script(source, Dialect::Tsx, &file),
        _ => Ok(source.to_string()),
    }
}

fn detype_sfc(source: &str, file: &str) -> Result<String, AppError> {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;

    for caps in SCRIPT_OPEN.captures_iter(source) {
        let Some(tag) = caps.get(0) else { continue };
        if tag.start() < cursor {
            continue;
        }
        let close = source[tag.end()..]
            .find("</script>")
            .map(|at| tag.end() + at)
            .ok_or_else(|| AppError::transform(file, "unterminated <script> block"))?;

        out.push_str(&source[cursor..tag.start()]);
        let attrs = &caps[1];
        match LANG_TS.captures(attrs) {
            Some(lang) => {
                let dialect = if &lang[1] == "tsx" { Dialect::Tsx } else { Dialect::TypeScript };
                out.push_str(&format!("<script{}>", LANG_TS.replace(attrs, "")));
                out.push_str(&detype_script(&source[tag.end()..close], dialect, file)?);
            }
            None => out.push_str(&source[tag.start()..close]),
        }
        cursor = close;
    }

    out.push_str(&source[cursor..]);
    Ok(out)
}

fn detype_script(source: &str, dialect: Dialect, file: &str) -> Result<String, AppError> {
    let tree = syntax::parse(source, dialect, file)?;
    let mut stripper = Stripper {
        source,
        file,
        declarations: Declarations::collect(tree.root_node(), source),
        edits: Vec::new(),
    };
    stripper.visit(&mut tree.walk())?;

    let stripped = syntax::apply_edits(source, stripper.edits);
    let mut tidy = BLANK_RUN.replace_all(&stripped, "\n\n").into_owned();
    if !source.starts_with('\n') {
        tidy = tidy.trim_start_matches('\n').to_string();
    }
    Ok(tidy)
}

struct Stripper<'s, 't> {
    source: &'s str,
    file: &'s str,
    declarations: Declarations<'t>,
    edits: Vec<Edit>,
}

impl<'s, 't> Stripper<'s, 't> {
    fn visit(&mut self, cursor: &mut TreeCursor<'t>) -> Result<(), AppError> {
        if self.strip(cursor.node())? {
            return Ok(());
        }
        if cursor.goto_first_child() {
            loop {
                self.visit(cursor)?;
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
            cursor.goto_parent();
        }
        Ok(())
    }

    fn visit_node(&mut self, node: Node<'t>) -> Result<(), AppError> {
        self.visit(&mut node.walk())
    }

    /// Record edits for `node`. Returns true when its children need no visit.
    fn strip(&mut self, node: Node<'t>) -> Result<bool, AppError> {
        match node.kind() {
            kind if TYPE_ONLY.contains(&kind) => self.remove_statement(node),
            "index_signature" | "method_signature"
                if node.parent().is_some_and(|p| p.kind() == "class_body") =>
            {
                self.remove_statement(node)
            }
            "import_statement" => self.strip_import(node),
            "export_statement" => return self.strip_export(node),
            "enum_declaration" => {
                let runtime = self.enum_runtime(node)?;
                self.edits.push(Edit::replace(node, runtime));
            }
            "internal_module" | "module" if node.is_named() => {
                return Err(AppError::transform(
                    self.file,
                    format!("namespaces are not supported (line {})", node.start_position().row + 1),
                ));
            }
            "type_annotation"
            | "type_parameters"
            | "type_arguments"
            | "type_predicate_annotation"
            | "asserts_annotation" => {
                self.edits.push(Edit::remove(node.start_byte(), node.end_byte()));
            }
            "accessibility_modifier" | "override_modifier" => self.remove_token(node),
            "implements_clause" => {
                let start = self.source[..node.start_byte()].trim_end().len();
                self.edits.push(Edit::remove(start, node.end_byte()));
            }
            "as_expression" | "satisfies_expression" | "non_null_expression" => {
                let Some(expr) = node.named_child(0) else { return Ok(true) };
                self.edits.push(Edit::remove(expr.end_byte(), node.end_byte()));
                self.visit_node(expr)?;
            }
            "call_expression" => match vue_macros::rewrite_call(
                node,
                self.source,
                &self.declarations,
                self.file,
            ) {
                Some(edit) => self.edits.push(edit),
                None => return Ok(false),
            },
            "required_parameter" | "optional_parameter" => {
                let is_this = node
                    .child_by_field_name("pattern")
                    .is_some_and(|pattern| pattern.kind() == "this");
                if is_this {
                    self.remove_list_item(node);
                    return Ok(true);
                }
                self.remove_tokens(node, &["readonly", "?"]);
                return Ok(false);
            }
            "public_field_definition" => {
                if child_of_kind(node, "declare").is_some()
                    || child_of_kind(node, "abstract").is_some()
                {
                    self.remove_statement(node);
                    return Ok(true);
                }
                self.remove_tokens(node, &["readonly", "?", "!"]);
                return Ok(false);
            }
            "method_definition" => {
                self.remove_tokens(node, &["?"]);
                self.assign_parameter_properties(node);
                return Ok(false);
            }
            "abstract_class_declaration" => {
                self.remove_tokens(node, &["abstract"]);
                return Ok(false);
            }
            "variable_declarator" => {
                self.remove_tokens(node, &["!"]);
                return Ok(false);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn strip_import(&mut self, node: Node<'t>) {
        if child_of_kind(node, "type").is_some() {
            self.remove_statement(node);
            return;
        }
        let Some(clause) = child_of_kind(node, "import_clause") else { return };
        let Some(named) = child_of_kind(clause, "named_imports") else { return };

        let specifiers = named_children(named);
        let typed: Vec<Node<'t>> = specifiers
            .iter()
            .copied()
            .filter(|spec| child_of_kind(*spec, "type").is_some())
            .collect();
        if typed.is_empty() {
            return;
        }

        if typed.len() < specifiers.len() {
            typed.into_iter().for_each(|spec| self.remove_list_item(spec));
        } else if let Some(default) = named.prev_named_sibling() {
            self.edits.push(Edit::remove(default.end_byte(), named.end_byte()));
        } else {
            self.remove_statement(node);
        }
    }

    fn strip_export(&mut self, node: Node<'t>) -> Result<bool, AppError> {
        if let Some(declaration) = node.child_by_field_name("declaration")
            && TYPE_ONLY.contains(&declaration.kind())
        {
            self.remove_statement(node);
            return Ok(true);
        }
        if child_of_kind(node, "type").is_some() {
            self.remove_statement(node);
            return Ok(true);
        }

        if let Some(clause) = child_of_kind(node, "export_clause") {
            let specifiers = named_children(clause);
            let typed: Vec<Node<'t>> = specifiers
                .iter()
                .copied()
                .filter(|spec| child_of_kind(*spec, "type").is_some())
                .collect();
            if !typed.is_empty() && typed.len() == specifiers.len() {
                self.remove_statement(node);
                return Ok(true);
            }
            typed.into_iter().for_each(|spec| self.remove_list_item(spec));
        }
        Ok(false)
    }

    /// `var E; (function (E) { ... })(E || (E = {}));` for an enum declaration.
    fn enum_runtime(&self, node: Node<'t>) -> Result<String, AppError> {
        let name = node
            .child_by_field_name("name")
            .map(|n| text(n, self.source))
            .ok_or_else(|| AppError::transform(self.file, "enum without a name"))?;
        let body = node
            .child_by_field_name("body")
            .ok_or_else(|| AppError::transform(self.file, format!("enum {} has no body", name)))?;
        let indent = syntax::indentation(self.source, node.start_byte());

        let mut next: Option<i64> = Some(0);
        let mut lines = vec![format!("var {};", name), format!("{}(function ({}) {{", indent, name)];
        for member in named_children(body) {
            let (key, value) = match member.kind() {
                "enum_assignment" => (member.child_by_field_name("name"), member.child_by_field_name("value")),
                _ => (Some(member), None),
            };
            let Some(key) = key else { continue };
            let key = match key.kind() {
                "string" => syntax::string_value(key, self.source),
                _ => text(key, self.source),
            };

            let line = match value {
                Some(value) if matches!(value.kind(), "string" | "template_string") => {
                    next = None;
                    format!("{}[\"{}\"] = {};", name, key, text(value, self.source))
                }
                Some(value) => {
                    let value = text(value, self.source);
                    next = value.parse::<i64>().ok().map(|n| n + 1);
                    format!("{0}[{0}[\"{1}\"] = {2}] = \"{1}\";", name, key, value)
                }
                None => {
                    let value = next.ok_or_else(|| {
                        AppError::transform(
                            self.file,
                            format!("enum member {}.{} needs an initializer", name, key),
                        )
                    })?;
                    next = Some(value + 1);
                    format!("{0}[{0}[\"{1}\"] = {2}] = \"{1}\";", name, key, value)
                }
            };
            lines.push(format!("{}  {}", indent, line));
        }
        lines.push(format!("{}}})({1} || ({1} = {{}}));", indent, name));
        Ok(lines.join("\n"))
    }

    /// Constructor parameter properties become explicit assignments.
    fn assign_parameter_properties(&mut self, method: Node<'t>) {
        let is_constructor = method
            .child_by_field_name("name")
            .is_some_and(|name| text(name, self.source) == "constructor");
        if !is_constructor {
            return;
        }
        let (Some(params), Some(body)) = (
            method.child_by_field_name("parameters"),
            method.child_by_field_name("body"),
        ) else {
            return;
        };

        let properties: Vec<&str> = named_children(params)
            .into_iter()
            .filter(|param| {
                child_of_kind(*param, "accessibility_modifier").is_some()
                    || child_of_kind(*param, "readonly").is_some()
            })
            .filter_map(|param| param.child_by_field_name("pattern"))
            .filter(|pattern| pattern.kind() == "identifier")
            .map(|pattern| text(pattern, self.source))
            .collect();
        if properties.is_empty() {
            return;
        }

        let indent = syntax::indentation(self.source, method.start_byte());
        let mut assignments: String = properties
            .iter()
            .map(|name| format!("\n{}  this.{1} = {1};", indent, name))
            .collect();
        if !text(body, self.source).contains('\n') {
            assignments.push('\n');
            assignments.push_str(indent);
        }
        self.edits.push(Edit::insert(body.start_byte() + 1, assignments));
    }

    fn remove_statement(&mut self, node: Node<'t>) {
        let (start, end) = syntax::line_span(self.source, node.start_byte(), node.end_byte());
        self.edits.push(Edit::remove(start, end));
    }

    /// Remove a modifier together with the whitespace after it.
    fn remove_token(&mut self, node: Node<'t>) {
        let end = node.next_sibling().map_or(node.end_byte(), |next| next.start_byte());
        self.edits.push(Edit::remove(node.start_byte(), end));
    }

    fn remove_tokens(&mut self, node: Node<'t>, kinds: &[&str]) {
        let mut cursor = node.walk();
        let tokens: Vec<Node<'t>> = node
            .children(&mut cursor)
            .filter(|child| !child.is_named() && kinds.contains(&child.kind()))
            .collect();
        for token in tokens {
            if token.kind().chars().all(|c| c.is_ascii_alphabetic()) {
                self.remove_token(token);
            } else {
                self.edits.push(Edit::remove(token.start_byte(), token.end_byte()));
            }
        }
    }

    /// Remove one entry of a comma-separated list along with its separator.
    fn remove_list_item(&mut self, node: Node<'t>) {
        let edit = match (node.next_named_sibling(), node.prev_named_sibling()) {
            (Some(next), _) => Edit::remove(node.start_byte(), next.start_byte()),
            (None, Some(prev)) => Edit::remove(prev.end_byte(), node.end_byte()),
            (None, None) => Edit::remove(node.start_byte(), node.end_byte()),
        };
        self.edits.push(edit);
    }
}
