//! Per-document generation.

use crate::error::CodegenError;
use crate::imports::ImportSpec;
use crate::methods::{MethodProjector, MethodRecord};
use crate::output::OutputKind;
use crate::typescript::{
    ArgumentsGenerator, BuildExtrinsicGenerator, ContractGenerator, MixedMethodsGenerator,
    QueryGenerator, ReturnValuesGenerator, TxSignAndSendGenerator, TypesGenerator,
};
use inkbind_abi::ir::AbiIr;

/// Default path from the `contracts` output directory to the ABI files.
pub const DEFAULT_ABI_DIR: &str = ".";

/// Every generated file of one document, held in memory.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// Document name (input file stem).
    pub name: String,
    /// Rendered files in [`OutputKind::ALL`] order.
    pub files: Vec<(OutputKind, String)>,
}

impl GeneratedDocument {
    /// Returns the rendered contents for `kind`.
    #[must_use]
    pub fn get(&self, kind: OutputKind) -> Option<&str> {
        self.files
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
    }
}

/// TypeScript generator for one resolved document.
pub struct Generator<'a> {
    ir: &'a AbiIr,
    abi_dir: String,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given resolved document.
    #[must_use]
    pub fn new(ir: &'a AbiIr) -> Self {
        Self {
            ir,
            abi_dir: DEFAULT_ABI_DIR.to_string(),
        }
    }

    /// Sets the path, relative to the `contracts` output directory, of the
    /// directory holding the document's ABI file.
    #[must_use]
    pub fn with_abi_dir(mut self, abi_dir: impl Into<String>) -> Self {
        self.abi_dir = abi_dir.into();
        self
    }

    /// Renders one output file.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a message refers to a type id
    /// missing from the resolved tables.
    pub fn generate_kind(&self, kind: OutputKind) -> Result<String, CodegenError> {
        let ir = self.ir;
        let records = MethodProjector::new(ir).project(kind)?;

        let text = match kind {
            OutputKind::Types => TypesGenerator::new(&ir.declarations).generate(),
            OutputKind::Arguments => {
                let imports = ImportSpec::build(
                    ir,
                    records.iter().flat_map(|r| r.args.iter().map(|a| &a.ty)),
                );
                ArgumentsGenerator::new(&records, &imports).generate()
            }
            OutputKind::ReturnValues => {
                let imports = ImportSpec::build(ir, ir.return_types.iter());
                ReturnValuesGenerator::new(&ir.return_types, &imports).generate()
            }
            OutputKind::Query => {
                QueryGenerator::new(&records, &record_imports(ir, &records)).generate()
            }
            OutputKind::BuildExtrinsic => {
                BuildExtrinsicGenerator::new(&records, &record_imports(ir, &records)).generate()
            }
            OutputKind::TxSignAndSend => {
                TxSignAndSendGenerator::new(&records, &record_imports(ir, &records)).generate()
            }
            OutputKind::MixedMethods => {
                MixedMethodsGenerator::new(&records, &record_imports(ir, &records)).generate()
            }
            OutputKind::Contract => ContractGenerator::new(&ir.name, &self.abi_dir).generate(),
        };

        Ok(text)
    }

    /// Renders every output file of the document.
    ///
    /// Nothing is written; a failure leaves no partial result behind.
    ///
    /// # Errors
    /// Returns the first error raised by any output kind.
    pub fn generate(&self) -> Result<GeneratedDocument, CodegenError> {
        let files = OutputKind::ALL
            .iter()
            .map(|&kind| Ok((kind, self.generate_kind(kind)?)))
            .collect::<Result<Vec<_>, CodegenError>>()?;

        Ok(GeneratedDocument {
            name: self.ir.name.clone(),
            files,
        })
    }
}

fn record_imports(ir: &AbiIr, records: &[MethodRecord]) -> ImportSpec {
    ImportSpec::build(ir, records.iter().flat_map(MethodRecord::resolved_types))
}
