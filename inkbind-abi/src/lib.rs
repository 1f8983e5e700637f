//! # inkbind ABI
//!
//! ink! contract metadata model and type resolution.
//!
//! This crate provides:
//! - JSON parsing of V3 contract metadata with version gating
//! - Type definitions for the contract spec and portable type registry
//! - A decoder from registry type ids to TypeScript type text
//! - Intermediate representation for code generation

pub mod decoder;
pub mod error;
pub mod ir;
pub mod parser;
pub mod types;

pub use decoder::TypeDecoder;
pub use error::{ParseError, SchemaError};
pub use ir::{AbiIr, ArgumentTypeTable, ResolvedType, TypeDeclaration, TypeTable};
pub use parser::{parse_abi, parse_abi_file};
pub use types::{
    AbiDocument, ContractSpec, MessageParamSpec, MessageSpec, PortableType, PrimitiveType,
    TypeDef, TypeInfo, TypeRegistry, TypeSpec,
};
