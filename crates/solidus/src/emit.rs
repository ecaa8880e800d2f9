//! TypeScript emission for the generated accessor module.
//!
//! Output is a function of its inputs alone: the same class name and route
//! list always render byte-identical text, so rewriting the module on every
//! pass is safe and diff-friendly.

use std::fmt::Write;

use crate::extract::Route;
use crate::segment::PARAM_SIGIL;

/// Name of the convenience alias exported alongside the class.
pub const ALIAS_NAME: &str = "paths";

/// Renders the complete generated module for `routes`.
///
/// One static accessor per route, in list order. Parameter-less accessors
/// return their path as a plain string literal; parameterized accessors take
/// `string | number` for each dynamic segment and return a template literal
/// with the segments substituted in path order. Every accessor carries a doc
/// line naming the exact source path it implements.
pub fn emit_module(class_name: &str, routes: &[Route]) -> String {
    let mut out = String::new();

    out.push_str("// Generated by solidus. Do not edit.\n");
    out.push_str("//\n");
    out.push_str("// One static accessor per route path discovered in the route tree;\n");
    out.push_str("// regenerate with `solidus generate` after route changes.\n\n");

    writeln!(out, "export class {class_name} {{").unwrap();
    for (index, route) in routes.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        emit_accessor(&mut out, route);
    }
    out.push_str("}\n");

    if class_name != ALIAS_NAME {
        out.push('\n');
        writeln!(out, "export const {ALIAS_NAME} = {class_name};").unwrap();
    }

    out
}

fn emit_accessor(out: &mut String, route: &Route) {
    writeln!(out, "  /** `{}` */", escape_doc(&route.source_path)).unwrap();

    if route.parameters.is_empty() {
        writeln!(out, "  static {}(): string {{", route.identifier).unwrap();
        writeln!(out, "    return '{}';", escape_single_quoted(&route.source_path)).unwrap();
    } else {
        let parameters = route
            .parameters
            .iter()
            .map(|name| format!("{name}: string | number"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  static {}({}): string {{", route.identifier, parameters).unwrap();
        writeln!(out, "    return `{}`;", interpolation_template(&route.source_path)).unwrap();
    }

    out.push_str("  }\n");
}

/// Rebuilds the path as a TS template-literal body: each dynamic component
/// becomes a `${name}` interpolation, static components are carried verbatim
/// (escaped), and the split/join round trip preserves every slash, including
/// leading, trailing, and doubled ones.
fn interpolation_template(source_path: &str) -> String {
    source_path
        .split('/')
        .map(|component| match component.strip_prefix(PARAM_SIGIL) {
            Some(name) if !name.is_empty() => format!("${{{name}}}"),
            _ => escape_template(component),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Escapes text for a single-quoted TS string literal.
fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escapes one static component for a TS template literal.
fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// A `*/` inside a path would close the JSDoc line early.
fn escape_doc(text: &str) -> String {
    text.replace("*/", "*\\/")
}
