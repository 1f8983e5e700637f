//! Batch generation over a directory of ABI documents.

use crate::error::CodegenError;
use crate::generator::Generator;
use crate::output::{GeneratedFile, OutputKind, OutputWriter, relative_path};
use inkbind_abi::{AbiIr, parse_abi_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extension of input ABI documents.
pub const INPUT_EXTENSION: &str = "json";

/// Batch generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory scanned for `*.json` ABI documents.
    pub input_dir: PathBuf,
    /// Root of the generated tree.
    pub output_dir: PathBuf,
    /// Whether to write the `_sdk` runtime package.
    pub write_runtime: bool,
}

impl GeneratorConfig {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    write_runtime: Option<bool>,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input directory.
    #[must_use]
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Enables or disables writing the runtime package (default: enabled).
    #[must_use]
    pub fn write_runtime(mut self, enabled: bool) -> Self {
        self.write_runtime = Some(enabled);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if either directory is unset.
    pub fn build(self) -> Result<GeneratorConfig, CodegenError> {
        let input_dir = self
            .input_dir
            .ok_or_else(|| CodegenError::config("input directory is required"))?;
        let output_dir = self
            .output_dir
            .ok_or_else(|| CodegenError::config("output directory is required"))?;

        Ok(GeneratorConfig {
            input_dir,
            output_dir,
            write_runtime: self.write_runtime.unwrap_or(true),
        })
    }
}

/// Files written for one document.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// Document name (input file stem).
    pub name: String,
    /// Input ABI file.
    pub source: PathBuf,
    /// Written files, one per output kind.
    pub files: Vec<GeneratedFile>,
}

/// A document that produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// Input ABI file.
    pub source: PathBuf,
    /// Why the document was skipped.
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Documents generated, in input order.
    pub generated: Vec<DocumentReport>,
    /// Documents skipped, in input order.
    pub skipped: Vec<SkippedDocument>,
}

impl BatchReport {
    /// Total number of files written for documents.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.generated.iter().map(|d| d.files.len()).sum()
    }
}

/// Generates bindings for every ABI document in a directory.
#[derive(Debug, Clone)]
pub struct Batch {
    config: GeneratorConfig,
}

impl Batch {
    /// Creates a new batch for `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the batch.
    ///
    /// Documents are processed in file name order. A document that fails
    /// to parse, resolve or render is logged and skipped; its siblings are
    /// unaffected.
    ///
    /// # Errors
    /// Returns an error if the input directory cannot be listed or the
    /// output tree cannot be written.
    pub fn run(&self) -> Result<BatchReport, CodegenError> {
        let writer = OutputWriter::new(&self.config.output_dir);
        writer.prepare()?;
        if self.config.write_runtime {
            writer.write_runtime()?;
        }

        let abi_dir = self.abi_dir(&writer)?;
        let inputs = list_inputs(&self.config.input_dir)?;
        info!(
            input = %self.config.input_dir.display(),
            documents = inputs.len(),
            "generating bindings"
        );

        let mut report = BatchReport::default();
        for source in inputs {
            let name = document_name(&source);
            match self.generate_document(&writer, &source, &name, &abi_dir) {
                Ok(files) => {
                    info!(document = %name, files = files.len(), "generated bindings");
                    report.generated.push(DocumentReport {
                        name,
                        source,
                        files,
                    });
                }
                Err(e) if e.is_document_local() => {
                    warn!(file = %source.display(), error = %e, "skipping document");
                    report.skipped.push(SkippedDocument {
                        source,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    fn generate_document(
        &self,
        writer: &OutputWriter,
        source: &Path,
        name: &str,
        abi_dir: &str,
    ) -> Result<Vec<GeneratedFile>, CodegenError> {
        let doc = parse_abi_file(source)?;
        let ir = AbiIr::from_document(name, &doc)?;
        let generated = Generator::new(&ir).with_abi_dir(abi_dir).generate()?;

        generated
            .files
            .iter()
            .map(|(kind, text)| writer.write(*kind, &generated.name, text))
            .collect()
    }

    /// Path from the `contracts` output directory to the input directory.
    fn abi_dir(&self, writer: &OutputWriter) -> Result<String, CodegenError> {
        let contracts = writer.root().join(OutputKind::Contract.dir());
        let contracts = contracts
            .canonicalize()
            .map_err(|e| CodegenError::output(&contracts, e))?;
        let input = self.config.input_dir.canonicalize().map_err(|e| {
            CodegenError::config(format!(
                "cannot resolve input directory '{}': {e}",
                self.config.input_dir.display()
            ))
        })?;

        let rel = relative_path(&contracts, &input);
        debug!(abi_dir = %rel, "resolved ABI import path");
        Ok(rel)
    }
}

/// Lists `*.json` files in `dir`, sorted by file name.
fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        CodegenError::config(format!(
            "cannot read input directory '{}': {e}",
            dir.display()
        ))
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext == INPUT_EXTENSION);
        if is_json && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(inputs)
}

fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
