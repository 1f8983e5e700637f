//! Types module generation.

use super::{HEADER, doc_comment};
use inkbind_abi::ir::{DeclarationKind, ResolvedField, ResolvedVariant, TypeDeclaration};

/// Generator for the per-document types module.
pub struct TypesGenerator<'a> {
    declarations: &'a [TypeDeclaration],
}

impl<'a> TypesGenerator<'a> {
    /// Creates a new types generator.
    #[must_use]
    pub fn new(declarations: &'a [TypeDeclaration]) -> Self {
        Self { declarations }
    }

    /// Generates the types module: every declaration body, separated by a
    /// blank line.
    #[must_use]
    pub fn generate(&self) -> String {
        let bodies: Vec<String> = self
            .declarations
            .iter()
            .map(|d| self.generate_declaration(d))
            .collect();

        let mut output = String::from(HEADER);
        if !bodies.is_empty() {
            output.push('\n');
            output.push_str(&bodies.join("\n\n"));
            output.push('\n');
        }
        output
    }

    /// Generates a single declaration body.
    #[must_use]
    pub fn generate_declaration(&self, decl: &TypeDeclaration) -> String {
        let mut output = doc_comment("", &decl.docs, &[]);
        match &decl.kind {
            DeclarationKind::Composite { fields } => {
                output.push_str(&generate_composite(&decl.name, fields));
            }
            DeclarationKind::Enum { variants } => {
                output.push_str(&generate_enum(&decl.name, variants));
            }
        }
        output
    }
}

fn generate_composite(name: &str, fields: &[ResolvedField]) -> String {
    let named = !fields.is_empty() && fields.iter().all(|f| f.name.is_some());

    if named {
        let mut output = format!("export interface {name} {{\n");
        for field in fields {
            output.push_str(&doc_comment("\t", &field.docs, &[]));
            let field_name = field.name.as_deref().unwrap_or_default();
            output.push_str(&format!("\t{}: {};\n", field_name, field.ty.text));
        }
        output.push('}');
        return output;
    }

    format!("export type {name} = {};", inline_fields(fields))
}

fn generate_enum(name: &str, variants: &[ResolvedVariant]) -> String {
    if variants.is_empty() {
        return format!("export type {name} = never;");
    }

    if variants.iter().all(|v| v.fields.is_empty()) {
        let mut output = format!("export enum {name} {{\n");
        for variant in variants {
            output.push_str(&doc_comment("\t", &variant.docs, &[]));
            output.push_str(&format!("\t{0} = '{0}',\n", variant.name));
        }
        output.push('}');
        return output;
    }

    let mut output = format!("export type {name} =\n");
    let last = variants.len() - 1;
    for (i, variant) in variants.iter().enumerate() {
        let sep = if i == last { ";" } else { "" };
        output.push_str(&format!(
            "\t| {{ {}: {} }}{}\n",
            variant.name,
            inline_fields(&variant.fields),
            sep
        ));
    }
    output.pop();
    output
}

/// Renders fields inline: object literal, single type, tuple or `null`.
fn inline_fields(fields: &[ResolvedField]) -> String {
    match fields {
        [] => "null".to_string(),
        fields if fields.iter().all(|f| f.name.is_some()) => {
            let parts: Vec<String> = fields
                .iter()
                .map(|f| format!("{}: {}", f.name.as_deref().unwrap_or_default(), f.ty.text))
                .collect();
            format!("{{ {} }}", parts.join("; "))
        }
        [single] => single.ty.text.clone(),
        fields => {
            let parts: Vec<&str> = fields.iter().map(|f| f.ty.text.as_str()).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::erc20_ir;
    use inkbind_abi::{AbiIr, parse_abi};

    fn ir_from_types(types: &str) -> AbiIr {
        let json = format!(r#"{{"V3": {{"spec": {{"messages": []}}, "types": {types}}}}}"#);
        let doc = parse_abi(&json).expect("Failed to parse");
        AbiIr::from_document("test", &doc).expect("Failed to resolve")
    }

    #[test]
    fn test_generate_erc20_types() {
        let ir = erc20_ir();
        let output = TypesGenerator::new(&ir.declarations).generate();

        assert!(output.starts_with(HEADER));
        assert!(output.contains("export type AccountId = Array<number>;"));
        assert!(output.contains("export interface Balance {\n\tamount: (string | number);\n}"));
        assert!(output.contains(
            "/**\n * Token errors.\n */\nexport enum Error {\n\tInsufficientBalance = 'InsufficientBalance',\n"
        ));
        // Declarations are separated by exactly one blank line.
        assert!(output.contains("Array<number>;\n\nexport interface Balance"));
    }

    #[test]
    fn test_declarations_in_registry_order() {
        let ir = erc20_ir();
        let output = TypesGenerator::new(&ir.declarations).generate();

        let account = output.find("AccountId =").expect("AccountId");
        let balance = output.find("interface Balance").expect("Balance");
        let error = output.find("enum Error").expect("Error");
        assert!(account < balance && balance < error);
    }

    #[test]
    fn test_generate_tagged_union() {
        let ir = ir_from_types(
            r#"[
                {"id": 0, "type": {"path": ["psp22", "PSP22Error"], "def": {"variant": {"variants": [
                    {"name": "Custom", "fields": [{"type": 1}]},
                    {"name": "InsufficientBalance"},
                    {"name": "Pair", "fields": [{"type": 1}, {"type": 2}]}
                ]}}}},
                {"id": 1, "type": {"def": {"primitive": "str"}}},
                {"id": 2, "type": {"def": {"primitive": "u32"}}}
            ]"#,
        );
        let output = TypesGenerator::new(&ir.declarations).generate();

        assert!(output.contains(
            "export type PSP22Error =\n\t| { Custom: string }\n\t| { InsufficientBalance: null }\n\t| { Pair: [string, number] };"
        ));
    }

    #[test]
    fn test_generate_tuple_and_empty_composites() {
        let ir = ir_from_types(
            r#"[
                {"id": 0, "type": {"path": ["lib", "Pair"], "def": {"composite": {"fields": [
                    {"type": 2}, {"type": 2}]}}}},
                {"id": 1, "type": {"path": ["lib", "Marker"], "def": {"composite": {"fields": []}}}},
                {"id": 2, "type": {"def": {"primitive": "bool"}}}
            ]"#,
        );
        let output = TypesGenerator::new(&ir.declarations).generate();

        assert!(output.contains("export type Pair = [boolean, boolean];"));
        assert!(output.contains("export type Marker = null;"));
    }

    #[test]
    fn test_generate_empty_registry() {
        let ir = ir_from_types("[]");
        let output = TypesGenerator::new(&ir.declarations).generate();
        assert_eq!(output, HEADER);
    }
}
