//! Path mappings from `tsconfig.json` / `jsconfig.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tree_sitter::Node;

use crate::domain::AppError;
use crate::domain::transform::syntax::{self, Dialect, Edit};

/// `compilerOptions.paths` resolved against `baseUrl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsconfigPaths {
    base_url: PathBuf,
    mappings: Vec<(String, String)>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsconfigFile {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    base_url: Option<String>,
    #[serde(default)]
    paths: BTreeMap<String, Vec<String>>,
}

impl TsconfigPaths {
    /// Parse tsconfig content located at `path`.
    ///
    /// Comments and trailing commas are accepted.
    pub fn parse(path: &Path, content: &str) -> Result<Self, AppError> {
        let cleaned = strip_jsonc(content);
        let file: TsconfigFile = serde_json::from_str(&cleaned).map_err(|err| {
            AppError::ConfigParse { path: path.to_path_buf(), details: err.to_string() }
        })?;

        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let base_url = config_dir.join(file.compiler_options.base_url.as_deref().unwrap_or("."));

        let mappings = file
            .compiler_options
            .paths
            .into_iter()
            .filter_map(|(pattern, targets)| {
                targets.into_iter().next().map(|target| (pattern, target))
            })
            .collect();

        Ok(Self { base_url, mappings })
    }

    /// Resolve an alias through the mappings; longest matching prefix wins.
    pub fn resolve(&self, alias: &str) -> Option<PathBuf> {
        let mut best: Option<(usize, PathBuf)> = None;

        for (pattern, target) in &self.mappings {
            let candidate = match pattern.strip_suffix('*') {
                Some(prefix) => alias.strip_prefix(prefix).map(|rest| {
                    (prefix.len(), self.base_url.join(target.replacen('*', rest, 1)))
                }),
                None if pattern == alias => {
                    Some((pattern.len(), self.base_url.join(target.as_str())))
                }
                None => None,
            };

            if let Some((len, path)) = candidate
                && best.as_ref().is_none_or(|(best_len, _)| len > *best_len)
            {
                best = Some((len, path));
            }
        }

        best.map(|(_, path)| super::normalize_path(&path))
    }
}

/// Remove comments and trailing commas so `serde_json` accepts the content.
///
/// Content the grammar rejects is returned as is and left for `serde_json`
/// to report.
fn strip_jsonc(input: &str) -> String {
    let wrapped = format!("(\n{}\n)", input);
    let Ok(tree) = syntax::parse(&wrapped, Dialect::TypeScript, "tsconfig.json") else {
        return input.to_string();
    };
    let mut edits = Vec::new();
    collect_jsonc_extras(tree.root_node(), &mut edits);
    let stripped = syntax::apply_edits(&wrapped, edits);
    stripped[2..stripped.len() - 2].to_string()
}

fn collect_jsonc_extras(node: Node<'_>, edits: &mut Vec<Edit>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "comment" => edits.push(Edit::replace(child, "")),
            "," if closes_list(child) => edits.push(Edit::replace(child, "")),
            _ => collect_jsonc_extras(child, edits),
        }
    }
}

/// True when only comments sit between `comma` and a closing bracket.
fn closes_list(comma: Node<'_>) -> bool {
    let mut next = comma.next_sibling();
    while let Some(sibling) = next.filter(|n| n.kind() == "comment") {
        next = sibling.next_sibling();
    }
    next.is_some_and(|n| matches!(n.kind(), "}" | "]"))
}
