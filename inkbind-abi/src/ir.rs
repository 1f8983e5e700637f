//! Intermediate representation for code generation.
//!
//! This module resolves a parsed [`AbiDocument`] once into the model every
//! output flavor is generated from: the declared composites and enums, the
//! argument and return type tables, and the raw message list.

use crate::decoder::TypeDecoder;
use crate::error::SchemaError;
use crate::types::{AbiDocument, MessageSpec, TypeDef, TypeRegistry};
use std::collections::{BTreeSet, HashMap};

/// Per-document resolution context.
#[derive(Debug, Clone)]
pub struct AbiIr {
    /// Document name (input file stem).
    pub name: String,
    /// Declared composites and enums, in registry order.
    pub declarations: Vec<TypeDeclaration>,
    /// Distinct argument types across all messages.
    pub argument_types: ArgumentTypeTable,
    /// Distinct return types across all messages.
    pub return_types: TypeTable,
    /// Messages in ABI order.
    pub messages: Vec<MessageSpec>,
    declared_names: BTreeSet<String>,
}

impl AbiIr {
    /// Resolves a parsed document.
    ///
    /// # Errors
    /// Returns `SchemaError` if the registry has duplicate ids, or if any
    /// declared field, argument or return type cannot be resolved.
    pub fn from_document(name: impl Into<String>, doc: &AbiDocument) -> Result<Self, SchemaError> {
        let name = name.into();
        let registry = TypeRegistry::new(doc.registry())?;
        let decoder = TypeDecoder::new(registry);

        let declarations = resolve_declarations(&decoder)?;
        let declared_names = declarations.iter().map(|d| d.name.clone()).collect();
        let argument_types = TypeTable::from_arguments(doc.messages(), &decoder)?;
        let return_types = TypeTable::from_return_types(doc.messages(), &decoder)?;

        tracing::debug!(
            document = %name,
            declarations = declarations.len(),
            argument_types = argument_types.len(),
            return_types = return_types.len(),
            "resolved ABI document"
        );

        Ok(Self {
            name,
            declarations,
            argument_types,
            return_types,
            messages: doc.messages().to_vec(),
            declared_names,
        })
    }

    /// Returns true if `name` is a declared composite or enum.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared_names.contains(name)
    }

    /// Names of all declared composites and enums.
    #[must_use]
    pub fn declared_names(&self) -> &BTreeSet<String> {
        &self.declared_names
    }
}

/// A type reference resolved to its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Registry type id.
    pub id: u32,
    /// TypeScript text.
    pub text: String,
    /// Declared names mentioned by `text`.
    pub references: BTreeSet<String>,
}

/// A declared composite or enum.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    /// Registry type id.
    pub id: u32,
    /// Declared name.
    pub name: String,
    /// Declaration shape.
    pub kind: DeclarationKind,
    /// Documentation lines.
    pub docs: Vec<String>,
}

/// Shape of a declaration.
#[derive(Debug, Clone)]
pub enum DeclarationKind {
    /// Record-like type.
    Composite {
        /// Fields in order.
        fields: Vec<ResolvedField>,
    },
    /// Sum type.
    Enum {
        /// Variants in order.
        variants: Vec<ResolvedVariant>,
    },
}

/// A field with its resolved type.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    /// Field name, absent for tuple-like fields.
    pub name: Option<String>,
    /// Resolved type.
    pub ty: ResolvedType,
    /// Documentation lines.
    pub docs: Vec<String>,
}

/// An enum variant with resolved payload fields.
#[derive(Debug, Clone)]
pub struct ResolvedVariant {
    /// Variant name.
    pub name: String,
    /// Payload fields.
    pub fields: Vec<ResolvedField>,
    /// Documentation lines.
    pub docs: Vec<String>,
}

/// Id-keyed table of resolved types in first-seen order.
///
/// Two ids that decode to the same text stay separate entries.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    entries: Vec<ResolvedType>,
    index: HashMap<u32, usize>,
}

/// Table of every distinct argument type in a document.
pub type ArgumentTypeTable = TypeTable;

impl TypeTable {
    /// Builds the table from every message argument, in declaration order.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if an argument refers to an id
    /// that is not in the registry.
    pub fn from_arguments(
        messages: &[MessageSpec],
        decoder: &TypeDecoder<'_>,
    ) -> Result<Self, SchemaError> {
        let mut table = Self::default();
        for msg in messages {
            for arg in &msg.args {
                table.insert(arg.ty.id, decoder, || {
                    format!("argument '{}' of message '{}'", arg.label, msg.label)
                })?;
            }
        }
        Ok(table)
    }

    /// Builds the table from every declared message return type.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if a return type refers to an id
    /// that is not in the registry.
    pub fn from_return_types(
        messages: &[MessageSpec],
        decoder: &TypeDecoder<'_>,
    ) -> Result<Self, SchemaError> {
        let mut table = Self::default();
        for msg in messages {
            if let Some(ret) = &msg.return_type {
                table.insert(ret.id, decoder, || {
                    format!("return type of message '{}'", msg.label)
                })?;
            }
        }
        Ok(table)
    }

    fn insert(
        &mut self,
        id: u32,
        decoder: &TypeDecoder<'_>,
        context: impl FnOnce() -> String,
    ) -> Result<(), SchemaError> {
        if self.index.contains_key(&id) {
            return Ok(());
        }
        if !decoder.registry().contains(id) {
            return Err(SchemaError::type_not_found(id, context()));
        }
        let resolved = decoder.decode(id)?;
        self.index.insert(id, self.entries.len());
        self.entries.push(resolved);
        Ok(())
    }

    /// Looks up a resolved type by registry id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&ResolvedType> {
        self.index.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedType> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves every declared composite and enum, in registry order.
fn resolve_declarations(decoder: &TypeDecoder<'_>) -> Result<Vec<TypeDeclaration>, SchemaError> {
    let mut declarations = Vec::with_capacity(decoder.declared_ids().len());

    for &id in decoder.declared_ids() {
        let (Some(info), Some(name)) = (decoder.registry().get(id), decoder.declared_name(id))
        else {
            return Err(SchemaError::type_not_found(id, "declared type"));
        };

        let resolve_fields = |fields: &[crate::types::Field]| {
            fields
                .iter()
                .map(|f| {
                    Ok(ResolvedField {
                        name: f.name.clone(),
                        ty: decoder.decode(f.ty)?,
                        docs: f.docs.clone(),
                    })
                })
                .collect::<Result<Vec<_>, SchemaError>>()
        };

        let kind = match &info.def {
            TypeDef::Composite(c) => DeclarationKind::Composite {
                fields: resolve_fields(&c.fields)?,
            },
            TypeDef::Variant(v) => DeclarationKind::Enum {
                variants: v
                    .variants
                    .iter()
                    .map(|variant| {
                        Ok(ResolvedVariant {
                            name: variant.name.clone(),
                            fields: resolve_fields(&variant.fields)?,
                            docs: variant.docs.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, SchemaError>>()?,
            },
            _ => continue,
        };

        declarations.push(TypeDeclaration {
            id,
            name: name.to_string(),
            kind,
            docs: info.docs.clone(),
        });
    }

    Ok(declarations)
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_abi;

    const ERC20: &str = r#"{
        "contract": {"name": "erc20", "version": "1.0.0"},
        "V3": {
            "spec": {
                "messages": [
                    {"label": "transfer", "selector": "0x84a15da1",
                     "args": [
                        {"label": "to", "type": {"type": 0, "displayName": ["AccountId"]}},
                        {"label": "amount", "type": {"type": 3, "displayName": ["Balance"]}}
                     ],
                     "returnType": {"type": 5, "displayName": ["Result"]},
                     "mutates": true, "payable": false, "docs": ["Moves tokens."]},
                    {"label": "balance_of", "selector": "0x0f755a56",
                     "args": [{"label": "owner", "type": {"type": 0, "displayName": ["AccountId"]}}],
                     "returnType": {"type": 3, "displayName": ["Balance"]},
                     "mutates": false, "payable": false, "docs": []},
                    {"label": "total_supply", "selector": "0xdb6375a8", "args": [],
                     "returnType": {"type": 3, "displayName": ["Balance"]},
                     "mutates": false, "payable": false, "docs": []}
                ]
            },
            "types": [
                {"id": 0, "type": {"path": ["ink_env", "types", "AccountId"],
                    "def": {"composite": {"fields": [{"type": 1, "typeName": "[u8; 32]"}]}}}},
                {"id": 1, "type": {"def": {"array": {"len": 32, "type": 2}}}},
                {"id": 2, "type": {"def": {"primitive": "u8"}}},
                {"id": 3, "type": {"path": ["erc20", "Balance"],
                    "def": {"composite": {"fields": [{"name": "amount", "type": 4}]}}}},
                {"id": 4, "type": {"def": {"primitive": "u128"}}},
                {"id": 5, "type": {"path": ["Result"],
                    "def": {"variant": {"variants": [
                        {"name": "Ok", "fields": [{"type": 6}], "index": 0},
                        {"name": "Err", "fields": [{"type": 7}], "index": 1}]}}}},
                {"id": 6, "type": {"def": {"tuple": []}}},
                {"id": 7, "type": {"path": ["erc20", "Error"], "docs": ["Token errors."],
                    "def": {"variant": {"variants": [
                        {"name": "InsufficientBalance", "index": 0}]}}}}
            ]
        }
    }"#;

    fn erc20_ir() -> AbiIr {
        let doc = parse_abi(ERC20).expect("Failed to parse");
        AbiIr::from_document("erc20", &doc).expect("Failed to resolve")
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("account_id"), "AccountId");
        assert_eq!(to_pascal_case("Balance"), "Balance");
        assert_eq!(to_pascal_case("PSP22Error"), "PSP22Error");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
    }

    #[test]
    fn test_abi_ir_from_document() {
        let ir = erc20_ir();

        assert_eq!(ir.name, "erc20");
        assert_eq!(ir.messages.len(), 3);
        let names: Vec<&str> = ir.declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["AccountId", "Balance", "Error"]);
    }

    fn declaration<'a>(ir: &'a AbiIr, name: &str) -> &'a TypeDeclaration {
        ir.declarations
            .iter()
            .find(|d| d.name == name)
            .expect("declared")
    }

    #[test]
    fn test_declarations_keep_fields_and_docs() {
        let ir = erc20_ir();

        let balance = declaration(&ir, "Balance");
        match &balance.kind {
            DeclarationKind::Composite { fields } => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].name.as_deref(), Some("amount"));
                assert_eq!(fields[0].ty.text, "(string | number)");
            }
            other => panic!("expected composite, got {other:?}"),
        }

        let error = declaration(&ir, "Error");
        assert_eq!(error.docs, vec!["Token errors.".to_string()]);
        assert!(matches!(
            error.kind,
            DeclarationKind::Enum { ref variants } if variants.len() == 1
        ));
    }

    #[test]
    fn test_argument_table_dedups_by_id() {
        let ir = erc20_ir();

        // `to` and `owner` share id 0.
        assert_eq!(ir.argument_types.len(), 2);
        let ids: Vec<u32> = ir.argument_types.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 3]);
        assert_eq!(ir.argument_types.get(0).map(|t| t.text.as_str()), Some("AccountId"));
        assert!(ir.argument_types.get(5).is_none());
    }

    #[test]
    fn test_argument_table_keeps_textual_duplicates() {
        let json = r#"{"V3": {"spec": {"messages": [
                {"label": "a", "args": [{"label": "x", "type": {"type": 0}}]},
                {"label": "b", "args": [{"label": "y", "type": {"type": 1}}]}
            ]},
            "types": [
                {"id": 0, "type": {"def": {"primitive": "u32"}}},
                {"id": 1, "type": {"def": {"primitive": "u16"}}}
            ]}}"#;
        let doc = parse_abi(json).expect("Failed to parse");
        let ir = AbiIr::from_document("dup", &doc).expect("Failed to resolve");

        assert_eq!(ir.argument_types.len(), 2);
        assert!(ir.argument_types.iter().all(|t| t.text == "number"));
    }

    #[test]
    fn test_return_table() {
        let ir = erc20_ir();

        let ids: Vec<u32> = ir.return_types.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 3]);
        let result = ir.return_types.get(5).expect("result type");
        assert_eq!(result.text, "({ ok: null } | { err: Error })");
        assert!(result.references.contains("Error"));
        assert_eq!(ir.return_types.get(3).expect("balance").text, "Balance");
    }

    #[test]
    fn test_is_declared() {
        let ir = erc20_ir();

        assert!(ir.is_declared("AccountId"));
        assert!(ir.is_declared("Balance"));
        assert!(!ir.is_declared("number"));
        assert!(!ir.is_declared("Result"));
    }

    #[test]
    fn test_missing_argument_type_is_fatal() {
        let json = r#"{"V3": {"spec": {"messages": [
                {"label": "set", "args": [{"label": "value", "type": {"type": 9}}]}
            ]}, "types": []}}"#;
        let doc = parse_abi(json).expect("Failed to parse");

        match AbiIr::from_document("broken", &doc) {
            Err(SchemaError::TypeNotFound { id, context }) => {
                assert_eq!(id, 9);
                assert!(context.contains("argument 'value' of message 'set'"));
            }
            other => panic!("expected type-not-found, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_return_type_is_fatal() {
        let json = r#"{"V3": {"spec": {"messages": [
                {"label": "get", "args": [], "returnType": {"type": 4}}
            ]}, "types": []}}"#;
        let doc = parse_abi(json).expect("Failed to parse");

        assert!(matches!(
            AbiIr::from_document("broken", &doc),
            Err(SchemaError::TypeNotFound { id: 4, .. })
        ));
    }
}
