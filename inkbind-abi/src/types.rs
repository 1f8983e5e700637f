//! ABI document definitions.
//!
//! This module contains the data structures representing an ink! V3
//! metadata document: the contract spec with its messages and the portable
//! type registry.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::SchemaError;

/// Complete ABI document (the `V3` payload plus surrounding metadata).
#[derive(Debug, Clone, Deserialize)]
pub struct AbiDocument {
    /// Contract identity, when present.
    #[serde(default)]
    pub contract: Option<ContractInfo>,
    /// Versioned metadata body.
    #[serde(rename = "V3")]
    pub v3: MetadataV3,
}

impl AbiDocument {
    /// Returns the message declarations in ABI order.
    #[must_use]
    pub fn messages(&self) -> &[MessageSpec] {
        &self.v3.spec.messages
    }

    /// Returns the type registry entries in ABI order.
    #[must_use]
    pub fn registry(&self) -> &[PortableType] {
        &self.v3.types
    }
}

/// Contract name and version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractInfo {
    /// Contract name.
    #[serde(default)]
    pub name: String,
    /// Contract version.
    #[serde(default)]
    pub version: String,
}

/// V3 metadata body.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataV3 {
    /// Callable surface of the contract.
    pub spec: ContractSpec,
    /// Portable type registry.
    #[serde(default)]
    pub types: Vec<PortableType>,
}

/// Contract spec section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractSpec {
    /// Message (method) declarations.
    #[serde(default)]
    pub messages: Vec<MessageSpec>,
    /// Contract-level documentation.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// A callable contract message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSpec {
    /// Message label, e.g. `transfer` or `PSP22::transfer`.
    pub label: String,
    /// Four-byte selector as hex.
    #[serde(default)]
    pub selector: String,
    /// Arguments in declaration order.
    #[serde(default)]
    pub args: Vec<MessageParamSpec>,
    /// Declared return type.
    #[serde(default)]
    pub return_type: Option<TypeSpec>,
    /// Whether the message changes contract state.
    #[serde(default)]
    pub mutates: bool,
    /// Whether the message accepts value transfer.
    #[serde(default)]
    pub payable: bool,
    /// Documentation lines.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// A message argument.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageParamSpec {
    /// Argument label.
    pub label: String,
    /// Argument type reference.
    #[serde(rename = "type")]
    pub ty: TypeSpec,
}

/// Reference into the type registry with its display path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSpec {
    /// Registry type id.
    #[serde(rename = "type")]
    pub id: u32,
    /// Display name segments.
    #[serde(default)]
    pub display_name: Vec<String>,
}

/// One registry entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PortableType {
    /// Registry type id.
    pub id: u32,
    /// Type information.
    #[serde(rename = "type")]
    pub ty: TypeInfo,
}

/// Registry type information.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeInfo {
    /// Fully qualified path segments; empty for anonymous types.
    #[serde(default)]
    pub path: Vec<String>,
    /// Generic parameters.
    #[serde(default)]
    pub params: Vec<TypeParameter>,
    /// Type definition.
    pub def: TypeDef,
    /// Documentation lines.
    #[serde(default)]
    pub docs: Vec<String>,
}

impl TypeInfo {
    /// Returns the last path segment, if the type is named.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Returns true if the type has the exact path given.
    #[must_use]
    pub fn has_path(&self, path: &[&str]) -> bool {
        self.path.len() == path.len() && self.path.iter().zip(path).all(|(a, b)| a == b)
    }
}

/// Generic parameter of a registry type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeParameter {
    /// Parameter name.
    pub name: String,
    /// Concrete type id, if bound.
    #[serde(rename = "type", default)]
    pub ty: Option<u32>,
}

/// Type definition variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDef {
    /// Record-like type with ordered fields.
    Composite(CompositeDef),
    /// Sum type with ordered variants.
    Variant(VariantDef),
    /// Variable-length sequence.
    Sequence(SequenceDef),
    /// Fixed-length array.
    Array(ArrayDef),
    /// Tuple of type ids.
    Tuple(Vec<u32>),
    /// Primitive type.
    Primitive(PrimitiveType),
    /// Compact-encoded integer wrapper.
    Compact(CompactDef),
    /// Bit sequence.
    #[serde(rename = "bitsequence")]
    BitSequence(BitSequenceDef),
}

impl TypeDef {
    /// Returns true if this is a composite type.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Returns true if this is a variant type.
    #[must_use]
    pub const fn is_variant(&self) -> bool {
        matches!(self, Self::Variant(_))
    }
}

/// Composite type definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompositeDef {
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A field of a composite or variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name; absent for tuple-like fields.
    #[serde(default)]
    pub name: Option<String>,
    /// Field type id.
    #[serde(rename = "type")]
    pub ty: u32,
    /// Source-level type name.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Documentation lines.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// Variant (enum) type definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantDef {
    /// Variants in declaration order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl VariantDef {
    /// Finds a variant by name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns true if no variant carries data.
    #[must_use]
    pub fn is_unit_only(&self) -> bool {
        self.variants.iter().all(|v| v.fields.is_empty())
    }
}

/// One variant of an enum.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    /// Variant name.
    pub name: String,
    /// Variant payload fields.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Encoding index.
    #[serde(default)]
    pub index: Option<u32>,
    /// Documentation lines.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// Sequence definition.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceDef {
    /// Element type id.
    #[serde(rename = "type")]
    pub ty: u32,
}

/// Array definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayDef {
    /// Array length.
    pub len: u32,
    /// Element type id.
    #[serde(rename = "type")]
    pub ty: u32,
}

/// Compact wrapper definition.
#[derive(Debug, Clone, Deserialize)]
pub struct CompactDef {
    /// Wrapped type id.
    #[serde(rename = "type")]
    pub ty: u32,
}

/// Bit sequence definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitSequenceDef {
    /// Store type id.
    pub bit_store_type: u32,
    /// Order type id.
    pub bit_order_type: u32,
}

/// Primitive types of the SCALE type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Boolean.
    Bool,
    /// Unicode scalar.
    Char,
    /// UTF-8 string.
    Str,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// Unsigned 128-bit integer.
    U128,
    /// Unsigned 256-bit integer.
    U256,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Signed 128-bit integer.
    I128,
    /// Signed 256-bit integer.
    I256,
}

impl PrimitiveType {
    /// Returns the TypeScript type used for this primitive.
    ///
    /// Integers wider than 32 bits do not fit a JavaScript number and are
    /// accepted as decimal strings as well.
    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Char | Self::Str => "string",
            Self::U8 | Self::U16 | Self::U32 | Self::I8 | Self::I16 | Self::I32 => "number",
            Self::U64 | Self::U128 | Self::U256 | Self::I64 | Self::I128 | Self::I256 => {
                "(string | number)"
            }
        }
    }
}

/// Id-indexed view over a document's type registry.
#[derive(Debug, Clone)]
pub struct TypeRegistry<'a> {
    entries: &'a [PortableType],
    type_map: HashMap<u32, usize>,
}

impl<'a> TypeRegistry<'a> {
    /// Builds the lookup map for a registry.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateTypeId` if an id is declared twice.
    pub fn new(entries: &'a [PortableType]) -> Result<Self, SchemaError> {
        let mut type_map = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if type_map.insert(entry.id, idx).is_some() {
                return Err(SchemaError::DuplicateTypeId { id: entry.id });
            }
        }
        Ok(Self { entries, type_map })
    }

    /// Looks up a type by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&'a TypeInfo> {
        self.type_map.get(&id).map(|&idx| &self.entries[idx].ty)
    }

    /// Returns true if a type with the given id exists.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.type_map.contains_key(&id)
    }

    /// Iterates entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'a PortableType> + 'a {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
