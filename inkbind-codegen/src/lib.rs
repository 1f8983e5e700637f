//! # inkbind Codegen
//!
//! TypeScript binding generation from ink! contract ABIs.
//!
//! This crate provides:
//! - Method projection for query, extrinsic, transaction and mixed flavors
//! - Import consistency between generated files and the types module
//! - TypeScript renderers for every output file
//! - Output tree layout, the runtime support package and batch runs

pub mod batch;
pub mod error;
pub mod generator;
pub mod imports;
pub mod methods;
pub mod output;
pub mod runtime;
pub mod typescript;

#[cfg(test)]
mod test_fixtures;

pub use batch::{Batch, BatchReport, DocumentReport, GeneratorConfig, SkippedDocument};
pub use error::CodegenError;
pub use generator::{GeneratedDocument, Generator};
pub use imports::ImportSpec;
pub use methods::{MethodKind, MethodProjector, MethodRecord};
pub use output::{GeneratedFile, OutputKind, OutputWriter};

/// Generates every binding file for an ABI document held in memory.
///
/// # Arguments
/// * `name` - Document name used for file names and import paths
/// * `json` - ABI document content
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution or generation fails.
pub fn generate_from_json(name: &str, json: &str) -> Result<GeneratedDocument, CodegenError> {
    let doc = inkbind_abi::parse_abi(json)?;
    let ir = inkbind_abi::AbiIr::from_document(name, &doc)?;
    Generator::new(&ir).generate()
}

/// Generates every binding file for an ABI document on disk.
///
/// The document is named after the file stem.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution or generation
/// fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<GeneratedDocument, CodegenError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CodegenError::config(format!("'{}' has no file name", path.display()))
        })?;
    let doc = inkbind_abi::parse_abi_file(path)?;
    let ir = inkbind_abi::AbiIr::from_document(name, &doc)?;
    Generator::new(&ir).generate()
}
