//! Runtime declarations for type-only `defineProps` and `defineEmits` calls.
//!
//! Once types are stripped, `defineProps<T>()` would declare no props at all,
//! so the members of `T` are turned into a runtime props object. Only object
//! literals and interfaces or aliases declared in the same script can be
//! resolved; anything else falls back to an empty call with a warning.

use std::collections::HashMap;

use tree_sitter::Node;

use super::syntax::{Edit, child_of_kind, named_children, string_value, text};

/// Interfaces and type aliases declared at the top of a script, by name.
pub(super) struct Declarations<'t> {
    shapes: HashMap<String, Node<'t>>,
}

impl<'t> Declarations<'t> {
    pub(super) fn collect(root: Node<'t>, source: &str) -> Self {
        let mut shapes = HashMap::new();
        for statement in named_children(root) {
            let declaration = match statement.kind() {
                "export_statement" => match statement.child_by_field_name("declaration") {
                    Some(declaration) => declaration,
                    None => continue,
                },
                _ => statement,
            };
            let shape = match declaration.kind() {
                "interface_declaration" => declaration.child_by_field_name("body"),
                "type_alias_declaration" => declaration.child_by_field_name("value"),
                _ => None,
            };
            if let (Some(name), Some(shape)) = (declaration.child_by_field_name("name"), shape) {
                shapes.insert(text(name, source).to_string(), shape);
            }
        }
        Self { shapes }
    }

    /// Members of an object-like type, following local names and `&`.
    fn members(&self, ty: Node<'t>, source: &str) -> Option<Vec<Node<'t>>> {
        match ty.kind() {
            "object_type" | "interface_body" => Some(named_children(ty)),
            "parenthesized_type" => self.members(ty.named_child(0)?, source),
            "intersection_type" => {
                let mut members = Vec::new();
                for part in named_children(ty) {
                    members.extend(self.members(part, source)?);
                }
                Some(members)
            }
            "type_identifier" => self.members(*self.shapes.get(text(ty, source))?, source),
            _ => None,
        }
    }
}

/// Replacement for a `withDefaults`, `defineProps` or `defineEmits` call
/// carrying type arguments. `None` leaves the call to the generic stripper.
pub(super) fn rewrite_call<'t>(
    call: Node<'t>,
    source: &str,
    declarations: &Declarations<'t>,
    file: &str,
) -> Option<Edit> {
    let callee = call.child_by_field_name("function")?;
    let runtime = match text(callee, source) {
        "withDefaults" => {
            let args = named_children(call.child_by_field_name("arguments")?);
            let inner = args.first().filter(|arg| arg.kind() == "call_expression")?;
            if text(inner.child_by_field_name("function")?, source) != "defineProps" {
                return None;
            }
            let ty = type_argument(*inner)?;
            let defaults = args.get(1).map(|d| object_entries(*d, source)).unwrap_or_default();
            format!("defineProps({})", runtime_props(ty, source, declarations, &defaults, file))
        }
        "defineProps" => {
            let ty = type_argument(call)?;
            format!("defineProps({})", runtime_props(ty, source, declarations, &[], file))
        }
        "defineEmits" => {
            let ty = type_argument(call)?;
            format!("defineEmits({})", runtime_emits(ty, source, declarations, file))
        }
        _ => return None,
    };
    Some(Edit::replace(call, runtime))
}

fn type_argument(call: Node<'_>) -> Option<Node<'_>> {
    call.child_by_field_name("type_arguments")?.named_child(0)
}

fn runtime_props<'t>(
    ty: Node<'t>,
    source: &str,
    declarations: &Declarations<'t>,
    defaults: &[(String, String)],
    file: &str,
) -> String {
    let Some(members) = declarations.members(ty, source) else {
        tracing::warn!(file, props = text(ty, source), "Cannot resolve props type");
        return String::new();
    };

    let entries: Vec<String> = members
        .into_iter()
        .filter_map(|member| {
            let constructor = match member.kind() {
                "property_signature" => member
                    .child_by_field_name("type")
                    .and_then(|annotation| annotation.named_child(0))
                    .map_or_else(|| "null".to_string(), |ty| runtime_type(ty, source)),
                "method_signature" => "Function".to_string(),
                _ => return None,
            };
            let name = property_name(member.child_by_field_name("name")?, source);
            let required = child_of_kind(member, "?").is_none();
            let default = defaults
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| format!(", default: {}", value))
                .unwrap_or_default();
            Some(format!(
                "{}: {{ type: {}, required: {}{} }}",
                property_key(name),
                constructor,
                required,
                default
            ))
        })
        .collect();

    if entries.is_empty() { "{}".to_string() } else { format!("{{ {} }}", entries.join(", ")) }
}

fn runtime_emits<'t>(
    ty: Node<'t>,
    source: &str,
    declarations: &Declarations<'t>,
    file: &str,
) -> String {
    let Some(members) = declarations.members(ty, source) else {
        tracing::warn!(file, emits = text(ty, source), "Cannot resolve emits type");
        return String::new();
    };

    let mut names: Vec<&str> = Vec::new();
    for member in members {
        match member.kind() {
            // (e: 'change' | 'close', ...): void
            "call_signature" => {
                let event = member
                    .child_by_field_name("parameters")
                    .and_then(|params| named_children(params).into_iter().next())
                    .and_then(|first| first.child_by_field_name("type"));
                if let Some(event) = event {
                    string_literals(event, source, &mut names);
                }
            }
            // change: [id: number]
            "property_signature" => {
                if let Some(name) = member.child_by_field_name("name") {
                    names.push(property_name(name, source));
                }
            }
            _ => {}
        }
    }

    let mut unique: Vec<String> = Vec::new();
    for name in names {
        let quoted = format!("'{}'", name);
        if !unique.contains(&quoted) {
            unique.push(quoted);
        }
    }
    format!("[{}]", unique.join(", "))
}

fn string_literals<'s>(node: Node<'_>, source: &'s str, out: &mut Vec<&'s str>) {
    if node.kind() == "string" {
        out.push(string_value(node, source));
        return;
    }
    for child in named_children(node) {
        string_literals(child, source, out);
    }
}

/// `key: value` pairs of an object literal, in source order.
fn object_entries(object: Node<'_>, source: &str) -> Vec<(String, String)> {
    if object.kind() != "object" {
        return Vec::new();
    }
    named_children(object)
        .into_iter()
        .filter_map(|entry| match entry.kind() {
            "pair" => Some((
                property_name(entry.child_by_field_name("key")?, source).to_string(),
                text(entry.child_by_field_name("value")?, source).to_string(),
            )),
            "shorthand_property_identifier" => {
                let name = text(entry, source).to_string();
                Some((name.clone(), name))
            }
            _ => None,
        })
        .collect()
}

fn property_name<'s>(name: Node<'_>, source: &'s str) -> &'s str {
    match name.kind() {
        "string" => string_value(name, source),
        _ => text(name, source),
    }
}

fn property_key(name: &str) -> String {
    let is_ident = name.chars().next().is_some_and(|c| !c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident { name.to_string() } else { format!("'{}'", name) }
}

/// Vue runtime constructor(s) for a TypeScript type.
fn runtime_type(ty: Node<'_>, source: &str) -> String {
    let mut constructors: Vec<&'static str> = Vec::new();
    if !collect_constructors(ty, source, &mut constructors) {
        return "null".to_string();
    }

    match constructors.as_slice() {
        [] => "null".to_string(),
        [single] => single.to_string(),
        many => format!("[{}]", many.join(", ")),
    }
}

/// Push the constructors `ty` may hold; false when one of them has none.
fn collect_constructors(ty: Node<'_>, source: &str, out: &mut Vec<&'static str>) -> bool {
    let constructor = match ty.kind() {
        "union_type" | "parenthesized_type" => {
            return named_children(ty).into_iter().all(|part| collect_constructors(part, source, out));
        }
        "readonly_type" => match ty.named_child(0) {
            Some(inner) => return collect_constructors(inner, source, out),
            None => return false,
        },
        "literal_type" => match ty.named_child(0).map(|literal| literal.kind()) {
            Some("string") => "String",
            Some("number" | "unary_expression") => "Number",
            Some("true" | "false") => "Boolean",
            Some("null" | "undefined") => return true,
            _ => return false,
        },
        "template_literal_type" => "String",
        "array_type" | "tuple_type" => "Array",
        "function_type" | "constructor_type" => "Function",
        "object_type" => "Object",
        "generic_type" => {
            match ty.child_by_field_name("name").map(|name| text(name, source)) {
                Some("Array" | "ReadonlyArray") => "Array",
                Some("Record") => "Object",
                _ => return false,
            }
        }
        "predefined_type" | "type_identifier" => match text(ty, source) {
            "string" => "String",
            "number" => "Number",
            "boolean" => "Boolean",
            "bigint" => "BigInt",
            "symbol" => "Symbol",
            "object" => "Object",
            "Date" => "Date",
            "Function" => "Function",
            "undefined" | "null" | "void" => return true,
            _ => return false,
        },
        _ => return false,
    };
    if !out.contains(&constructor) {
        out.push(constructor);
    }
    true
}
