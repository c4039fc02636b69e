//! CommonJS to ES module rewriting for generated config files.

use std::collections::HashSet;
use std::path::Path;

use tree_sitter::{Node, TreeCursor};

use crate::domain::AppError;

use super::syntax::{self, Dialect, Edit, named_children, text};

/// Module system a file is loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSystem {
    CommonJs,
    Esm,
}

impl ModuleSystem {
    /// Decide from the file extension, falling back to the package `type`.
    pub fn for_path(path: &Path, package_type_module: bool) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("mjs" | "mts" | "ts") => ModuleSystem::Esm,
            Some("cjs" | "cts") => ModuleSystem::CommonJs,
            _ if package_type_module => ModuleSystem::Esm,
            _ => ModuleSystem::CommonJs,
        }
    }
}

/// Rewrite CommonJS `require`/`module.exports` into ES module syntax when the
/// file at `path` is loaded as ESM. CommonJS files are returned unchanged.
pub fn transform_cjs_to_esm(
    path: &Path,
    source: &str,
    package_type_module: bool,
) -> Result<String, AppError> {
    if ModuleSystem::for_path(path, package_type_module) == ModuleSystem::CommonJs {
        return Ok(source.to_string());
    }

    let file = path.display().to_string();
    let tree = syntax::parse(source, Dialect::TypeScript, &file)?;
    let mut taken = HashSet::new();
    collect_identifiers(tree.root_node(), source, &mut taken);

    let mut rewriter = Rewriter {
        source,
        file: &file,
        edits: Vec::new(),
        hoisted: Vec::new(),
        taken,
        imports_end: None,
    };
    rewriter.visit(&mut tree.walk())?;
    Ok(rewriter.finish())
}

struct Rewriter<'s> {
    source: &'s str,
    file: &'s str,
    edits: Vec<Edit>,
    /// Inline requires lifted to imports, as (module, identifier).
    hoisted: Vec<(String, String)>,
    taken: HashSet<String>,
    imports_end: Option<usize>,
}

impl<'s> Rewriter<'s> {
    fn visit(&mut self, cursor: &mut TreeCursor<'_>) -> Result<(), AppError> {
        if self.rewrite(cursor.node())? {
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

    /// Record edits for `node`. Returns true when its children need no visit.
    fn rewrite(&mut self, node: Node<'_>) -> Result<bool, AppError> {
        let top_level = node.parent().is_some_and(|parent| parent.kind() == "program");
        match node.kind() {
            "import_statement" if top_level => {
                self.imports_end = Some(node.end_byte());
                Ok(true)
            }
            "lexical_declaration" | "variable_declaration" if top_level => {
                let Some(import) = self.require_declaration(node)? else { return Ok(false) };
                self.edits.push(Edit::replace(node, import));
                self.imports_end = Some(node.end_byte());
                Ok(true)
            }
            "expression_statement" if top_level => self.rewrite_statement(node),
            "call_expression" if is_require(node, self.source) => {
                let module = self.require_argument(node)?;
                let ident = self.hoist(syntax::string_value(module, self.source));
                self.edits.push(Edit::replace(node, ident));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn rewrite_statement(&mut self, statement: Node<'_>) -> Result<bool, AppError> {
        let Some(expr) = statement.named_child(0) else { return Ok(false) };

        if is_require(expr, self.source) {
            let module = self.require_argument(expr)?;
            let import = format!(
                "import {}{}",
                text(module, self.source),
                semicolon(statement, self.source)
            );
            self.edits.push(Edit::replace(statement, import));
            self.imports_end = Some(statement.end_byte());
            return Ok(true);
        }

        if expr.kind() != "assignment_expression" {
            return Ok(false);
        }
        let (Some(left), Some(right)) =
            (expr.child_by_field_name("left"), expr.child_by_field_name("right"))
        else {
            return Ok(false);
        };

        let head = match text(left, self.source) {
            "module.exports" => "export default ".to_string(),
            _ => match named_export(left, self.source) {
                Some(name) => format!("export const {} = ", name),
                None => return Ok(false),
            },
        };
        self.edits.push(Edit::new(statement.start_byte(), right.start_byte(), head));
        self.visit(&mut right.walk())?;
        Ok(true)
    }

    /// `import ...` for a top-level `const x = require("m")` declaration.
    fn require_declaration(&self, declaration: Node<'_>) -> Result<Option<String>, AppError> {
        let declarators = named_children(declaration);
        let [declarator] = declarators[..] else { return Ok(None) };
        let (Some(name), Some(value)) = (
            declarator.child_by_field_name("name"),
            declarator.child_by_field_name("value"),
        ) else {
            return Ok(None);
        };
        if !is_require(value, self.source) {
            return Ok(None);
        }
        let module = text(self.require_argument(value)?, self.source);
        let semi = semicolon(declaration, self.source);

        let binding = match name.kind() {
            "identifier" => text(name, self.source).to_string(),
            "object_pattern" => {
                let specifiers = named_children(name)
                    .into_iter()
                    .map(|property| self.import_specifier(property))
                    .collect::<Result<Vec<_>, _>>()?;
                format!("{{ {} }}", specifiers.join(", "))
            }
            _ => return Ok(None),
        };
        Ok(Some(format!("import {} from {}{}", binding, module, semi)))
    }

    fn import_specifier(&self, property: Node<'_>) -> Result<String, AppError> {
        match property.kind() {
            "shorthand_property_identifier_pattern" => Ok(text(property, self.source).to_string()),
            "pair_pattern" => {
                let key = property.child_by_field_name("key");
                let value = property.child_by_field_name("value");
                match (key, value) {
                    (Some(key), Some(value)) if value.kind() == "identifier" => {
                        Ok(format!("{} as {}", text(key, self.source), text(value, self.source)))
                    }
                    _ => Err(self.unsupported_destructuring(property)),
                }
            }
            _ => Err(self.unsupported_destructuring(property)),
        }
    }

    fn unsupported_destructuring(&self, property: Node<'_>) -> AppError {
        AppError::transform(
            self.file,
            format!(
                "unsupported destructuring in require call at line {}",
                property.start_position().row + 1
            ),
        )
    }

    /// The string literal a `require` call loads.
    fn require_argument<'t>(&self, call: Node<'t>) -> Result<Node<'t>, AppError> {
        let args = call.child_by_field_name("arguments").map(named_children).unwrap_or_default();
        match args[..] {
            [module] if module.kind() == "string" => Ok(module),
            _ => Err(AppError::transform(
                self.file,
                format!(
                    "require() with a non-literal argument cannot be converted (line {})",
                    call.start_position().row + 1
                ),
            )),
        }
    }

    /// Identifier standing in for `module`, one per module and never shadowing
    /// a name already bound in the file.
    fn hoist(&mut self, module: &str) -> String {
        if let Some((_, ident)) = self.hoisted.iter().find(|(m, _)| m == module) {
            return ident.clone();
        }
        let base = format!("__{}", sanitize_ident(module));
        let mut ident = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&ident) {
            ident = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.taken.insert(ident.clone());
        self.hoisted.push((module.to_string(), ident.clone()));
        ident
    }

    fn finish(mut self) -> String {
        if !self.hoisted.is_empty() {
            let at = self.imports_end.map_or(0, |end| syntax::line_end(self.source, end));
            let mut imports: String = self
                .hoisted
                .iter()
                .map(|(module, ident)| format!("import {} from \"{}\"\n", ident, module))
                .collect();
            if at > 0 && !self.source[..at].ends_with('\n') {
                imports.insert(0, '\n');
                imports.pop();
            }
            self.edits.push(Edit::insert(at, imports));
        }
        syntax::apply_edits(self.source, self.edits)
    }
}

fn is_require(node: Node<'_>, source: &str) -> bool {
    node.kind() == "call_expression"
        && node
            .child_by_field_name("function")
            .is_some_and(|callee| callee.kind() == "identifier" && text(callee, source) == "require")
}

/// `name` for `exports.name` or `module.exports.name`.
fn named_export<'s>(left: Node<'_>, source: &'s str) -> Option<&'s str> {
    if left.kind() != "member_expression" {
        return None;
    }
    let object = text(left.child_by_field_name("object")?, source);
    let property = left.child_by_field_name("property")?;
    (matches!(object, "exports" | "module.exports") && property.kind() == "property_identifier")
        .then(|| text(property, source))
}

fn semicolon(statement: Node<'_>, source: &str) -> &'static str {
    if text(statement, source).ends_with(';') { ";" } else { "" }
}

fn collect_identifiers(node: Node<'_>, source: &str, out: &mut HashSet<String>) {
    if node.kind() == "identifier" {
        out.insert(text(node, source).to_string());
    }
    for child in named_children(node) {
        collect_identifiers(child, source, out);
    }
}

fn sanitize_ident(module: &str) -> String {
    module.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn esm(source: &str) -> String {
        transform_cjs_to_esm(Path::new("tailwind.config.mjs"), source, false).unwrap()
    }

    #[test]
    fn commonjs_files_are_untouched() {
        let source = "const a = require('a')\nmodule.exports = { a }\n";
        let out = transform_cjs_to_esm(Path::new("tailwind.config.js"), source, false).unwrap();
        assert_eq!(out, source);
        let out = transform_cjs_to_esm(Path::new("tailwind.config.cjs"), source, true).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn js_in_module_package_is_converted() {
        let out = transform_cjs_to_esm(
            Path::new("tailwind.config.js"),
            "module.exports = {}\n",
            true,
        )
        .unwrap();
        assert_eq!(out, "export default {}\n");
    }

    #[test]
    fn rewrites_default_and_destructured_requires() {
        let out = esm("const animate = require(\"tailwindcss-animate\")\nconst { fontFamily: ff, colors } = require('tailwindcss/defaultTheme');\n");
        assert_eq!(
            out,
            "import animate from \"tailwindcss-animate\"\nimport { fontFamily as ff, colors } from 'tailwindcss/defaultTheme';\n"
        );
    }

    #[test]
    fn rewrites_exports() {
        let out = esm("module.exports = {\n  darkMode: [\"class\"],\n}\nexports.extra = 1\n");
        assert_eq!(out, "export default {\n  darkMode: [\"class\"],\n}\nexport const extra = 1\n");
    }

    #[test]
    fn bare_require_becomes_side_effect_import() {
        assert_eq!(esm("require('./setup');\n"), "import './setup';\n");
    }

    #[test]
    fn inline_requires_are_hoisted_after_imports() {
        let out = esm(
            "import a from 'a'\n\nmodule.exports = {\n  plugins: [require(\"tailwindcss-animate\"), require(\"tailwindcss-animate\")],\n}\n",
        );
        assert_eq!(
            out,
            "import a from 'a'\nimport __tailwindcss_animate from \"tailwindcss-animate\"\n\nexport default {\n  plugins: [__tailwindcss_animate, __tailwindcss_animate],\n}\n"
        );
    }

    #[test]
    fn requires_in_comments_and_strings_are_ignored() {
        let source = "// const x = require('x')\nconst note = \"require('y')\"\n";
        assert_eq!(esm(source), source);
    }

    #[test]
    fn dynamic_require_is_an_error() {
        let err = transform_cjs_to_esm(Path::new("a.mjs"), "const x = require(name)\n", false)
            .unwrap_err();
        assert!(matches!(err, AppError::Transform { .. }));
        assert!(err.to_string().contains("non-literal"));
    }

    #[test]
    fn unterminated_require_string_is_an_error() {
        let err = transform_cjs_to_esm(Path::new("a.ts"), "const x = require('abc\n", false)
            .unwrap_err();
        assert!(matches!(err, AppError::Transform { .. }));
        assert!(err.to_string().contains("line"), "{}", err);
    }

    #[test]
    fn unbalanced_destructuring_is_an_error() {
        let err = transform_cjs_to_esm(Path::new("a.ts"), "const { a, b = require('m')\n", false)
            .unwrap_err();
        assert!(matches!(err, AppError::Transform { .. }));
    }

    #[test]
    fn destructuring_with_defaults_is_rejected() {
        let err = transform_cjs_to_esm(Path::new("a.mjs"), "const { a = 1 } = require('m')\n", false)
            .unwrap_err();
        assert!(err.to_string().contains("unsupported destructuring"));
    }

    #[test]
    fn colliding_module_names_get_distinct_identifiers() {
        let out = esm("plugins: [require(\"a-b\"), require(\"a_b\")]");
        assert_eq!(
            out,
            "import __a_b from \"a-b\"\nimport __a_b_2 from \"a_b\"\nplugins: [__a_b, __a_b_2]"
        );
    }

    #[test]
    fn hoisted_identifier_avoids_existing_bindings() {
        let out = esm("const __a = 1\nmodule.exports = [__a, require('a')]\n");
        assert_eq!(
            out,
            "import __a_2 from \"a\"\nconst __a = 1\nexport default [__a, __a_2]\n"
        );
    }

    #[test]
    fn nested_require_is_hoisted_not_imported_in_place() {
        let out = esm("function load() {\n  const x = require('x')\n  return x\n}\n");
        assert_eq!(
            out,
            "import __x from \"x\"\nfunction load() {\n  const x = __x\n  return x\n}\n"
        );
    }
}
