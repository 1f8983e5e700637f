//! TypeScript code generation modules.
//!
//! Every generator is a pure function of its inputs: it formats records,
//! types and imports into source text and performs no IO.

pub mod arguments;
pub mod contract;
pub mod methods;
pub mod return_values;
pub mod types;

pub use arguments::ArgumentsGenerator;
pub use contract::ContractGenerator;
pub use methods::{
    BuildExtrinsicGenerator, MixedMethodsGenerator, QueryGenerator, TxSignAndSendGenerator,
};
pub use return_values::ReturnValuesGenerator;
pub use types::TypesGenerator;

use crate::imports::ImportSpec;
use crate::methods::MethodArg;

/// First line of every generated file.
pub const HEADER: &str = "/* This file is auto-generated by inkbind. Do not edit manually. */\n";

/// Identifiers that cannot be used as parameter names.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "implements", "interface", "let", "package",
    "private", "protected", "public", "static", "yield", "await", "arguments", "eval",
];

/// Renders the `import type` line for the types module, if anything is
/// imported.
#[must_use]
pub fn import_line(imports: &ImportSpec) -> Option<String> {
    if imports.is_empty() {
        return None;
    }
    let names: Vec<&str> = imports.names.iter().map(String::as_str).collect();
    Some(format!(
        "import type {{ {} }} from '{}';\n",
        names.join(", "),
        imports.path
    ))
}

/// Quotes a message label for use as a class member or property key.
#[must_use]
pub fn member_name(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Returns a parameter identifier for an argument label.
#[must_use]
pub fn arg_ident(label: &str) -> String {
    if RESERVED_WORDS.contains(&label) {
        format!("{label}_")
    } else {
        label.to_string()
    }
}

/// Renders `args` as a call argument array, e.g. `[to, amount]`.
#[must_use]
pub fn arg_array(args: &[MethodArg]) -> String {
    let idents: Vec<String> = args.iter().map(|a| arg_ident(&a.name)).collect();
    format!("[{}]", idents.join(", "))
}

/// Renders a JSDoc block from documentation lines and extra tag lines.
///
/// Returns an empty string when there is nothing to document.
#[must_use]
pub fn doc_comment(indent: &str, docs: &[String], tags: &[String]) -> String {
    let lines: Vec<String> = docs
        .iter()
        .map(|l| l.trim().replace("*/", "*\\/"))
        .collect();
    let has_docs = lines.iter().any(|l| !l.is_empty());

    if !has_docs && tags.is_empty() {
        return String::new();
    }

    let mut output = format!("{indent}/**\n");
    if has_docs {
        for line in &lines {
            if line.is_empty() {
                output.push_str(&format!("{indent} *\n"));
            } else {
                output.push_str(&format!("{indent} * {line}\n"));
            }
        }
        if !tags.is_empty() {
            output.push_str(&format!("{indent} *\n"));
        }
    }
    for tag in tags {
        output.push_str(&format!("{indent} * {tag}\n"));
    }
    output.push_str(&format!("{indent} */\n"));
    output
}
