//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use inkbind::prelude::*;
//! ```

// ABI types
pub use inkbind_abi::{
    AbiDocument, AbiIr, ArgumentTypeTable, ParseError, ResolvedType, SchemaError,
    TypeDeclaration, TypeDecoder, TypeTable, parse_abi, parse_abi_file,
};

// Generation
pub use inkbind_codegen::{
    Batch, BatchReport, CodegenError, DocumentReport, GeneratedDocument, GeneratedFile,
    Generator, GeneratorConfig, ImportSpec, MethodKind, MethodProjector, MethodRecord,
    OutputKind, OutputWriter, SkippedDocument, generate_from_file, generate_from_json,
};
