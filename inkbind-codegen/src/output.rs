//! Output tree layout and file writing.

use crate::error::CodegenError;
use crate::runtime::{RUNTIME_DIR, RUNTIME_FILES};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Extension of every generated source file.
pub const FILE_EXTENSION: &str = "ts";

/// The kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputKind {
    /// Declared composites and enums.
    Types,
    /// Per-method argument tuples.
    Arguments,
    /// Distinct return types.
    ReturnValues,
    /// Read-only query methods.
    Query,
    /// Unsigned extrinsic builders.
    BuildExtrinsic,
    /// Sign-and-submit transaction methods.
    TxSignAndSend,
    /// Query or transaction per method, by mutability.
    MixedMethods,
    /// Contract object tying the method classes together.
    Contract,
}

impl OutputKind {
    /// Every kind, in generation order.
    pub const ALL: [Self; 8] = [
        Self::Types,
        Self::Arguments,
        Self::ReturnValues,
        Self::Query,
        Self::BuildExtrinsic,
        Self::TxSignAndSend,
        Self::MixedMethods,
        Self::Contract,
    ];

    /// Directory under the output root holding files of this kind.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Arguments => "arguments",
            Self::ReturnValues => "return-values",
            Self::Query => "query",
            Self::BuildExtrinsic => "build-extrinsic",
            Self::TxSignAndSend => "tx-sign-and-send",
            Self::MixedMethods => "mixed-methods",
            Self::Contract => "contracts",
        }
    }

    /// Path of a document's file relative to the output root.
    #[must_use]
    pub fn relative_path(&self, document: &str) -> PathBuf {
        Path::new(self.dir()).join(format!("{document}.{FILE_EXTENSION}"))
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// A single written file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the output directory.
    pub relative_path: PathBuf,
    /// Absolute path where the file was written.
    pub absolute_path: PathBuf,
    /// What kind of file this is.
    pub kind: OutputKind,
    /// Number of bytes written.
    pub bytes: usize,
}

/// Writes generated files under an output root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    /// Creates a writer rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the output root, the runtime directory and one directory per
    /// output kind.
    ///
    /// # Errors
    /// Returns `CodegenError::Output` if a directory cannot be created.
    pub fn prepare(&self) -> Result<(), CodegenError> {
        ensure_dir(&self.root)?;
        ensure_dir(&self.root.join(RUNTIME_DIR))?;
        for kind in OutputKind::ALL {
            ensure_dir(&self.root.join(kind.dir()))?;
        }
        Ok(())
    }

    /// Writes the runtime support package, overwriting existing files.
    ///
    /// # Errors
    /// Returns `CodegenError::Output` if a file cannot be written.
    pub fn write_runtime(&self) -> Result<(), CodegenError> {
        let dir = self.root.join(RUNTIME_DIR);
        ensure_dir(&dir)?;
        for (name, contents) in RUNTIME_FILES {
            let path = dir.join(name);
            std::fs::write(&path, contents).map_err(|e| CodegenError::output(&path, e))?;
            tracing::debug!(path = %path.display(), "wrote runtime file");
        }
        Ok(())
    }

    /// Writes one generated file for `document`.
    ///
    /// # Errors
    /// Returns `CodegenError::Output` if the file cannot be written.
    pub fn write(
        &self,
        kind: OutputKind,
        document: &str,
        contents: &str,
    ) -> Result<GeneratedFile, CodegenError> {
        let relative_path = kind.relative_path(document);
        let absolute_path = self.root.join(&relative_path);
        std::fs::write(&absolute_path, contents)
            .map_err(|e| CodegenError::output(&absolute_path, e))?;
        tracing::debug!(path = %absolute_path.display(), bytes = contents.len(), "wrote file");

        Ok(GeneratedFile {
            relative_path,
            absolute_path,
            kind,
            bytes: contents.len(),
        })
    }
}

fn ensure_dir(path: &Path) -> Result<(), CodegenError> {
    std::fs::create_dir_all(path).map_err(|e| CodegenError::output(path, e))
}

/// Computes the `/`-separated path leading from directory `from` to `to`.
///
/// Both paths must be absolute (or both relative to the same base). The
/// result always starts with `.` so it can be used as a module specifier.
#[must_use]
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    for component in &to[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    if parts.is_empty() {
        ".".to_string()
    } else if parts[0] == ".." {
        parts.join("/")
    } else {
        format!("./{}", parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_dirs() {
        let dirs: Vec<&str> = OutputKind::ALL.iter().map(OutputKind::dir).collect();
        assert_eq!(
            dirs,
            vec![
                "types",
                "arguments",
                "return-values",
                "query",
                "build-extrinsic",
                "tx-sign-and-send",
                "mixed-methods",
                "contracts",
            ]
        );
        assert_eq!(OutputKind::MixedMethods.to_string(), "mixed-methods");
        assert_eq!(
            OutputKind::Query.relative_path("erc20"),
            Path::new("query").join("erc20.ts")
        );
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/work/out/contracts"), Path::new("/work/abis")),
            "../../abis"
        );
        assert_eq!(
            relative_path(Path::new("/work/out/contracts"), Path::new("/work/out/contracts")),
            "."
        );
        assert_eq!(
            relative_path(Path::new("/work/out"), Path::new("/work/out/contracts/abis")),
            "./contracts/abis"
        );
    }

    #[test]
    fn test_prepare_creates_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("nested").join("out");
        let writer = OutputWriter::new(&root);

        writer.prepare().expect("prepare");
        // Idempotent on an existing tree.
        writer.prepare().expect("prepare again");

        assert!(root.join(RUNTIME_DIR).is_dir());
        for kind in OutputKind::ALL {
            assert!(root.join(kind.dir()).is_dir(), "missing {kind}");
        }
    }

    #[test]
    fn test_write_runtime_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = OutputWriter::new(dir.path());
        writer.prepare().expect("prepare");
        writer.write_runtime().expect("runtime");

        for (name, contents) in RUNTIME_FILES {
            let written =
                std::fs::read_to_string(dir.path().join(RUNTIME_DIR).join(name)).expect("read");
            assert_eq!(written, *contents);
        }

        let file = writer
            .write(OutputKind::Types, "flipper", "export type A = null;\n")
            .expect("write");
        assert_eq!(file.kind, OutputKind::Types);
        assert_eq!(file.bytes, 22);
        assert!(file.absolute_path.exists());
        assert_eq!(file.relative_path, Path::new("types").join("flipper.ts"));
    }

    #[test]
    fn test_write_without_prepare_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = OutputWriter::new(dir.path().join("missing"));

        let result = writer.write(OutputKind::Query, "x", "");
        assert!(matches!(result, Err(CodegenError::Output { .. })));
    }
}
