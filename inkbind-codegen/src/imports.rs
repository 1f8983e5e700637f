//! Import consistency.
//!
//! Computes, per generated file, which declared type names must be imported
//! from the document's types module.

use inkbind_abi::ir::{AbiIr, ResolvedType};
use std::collections::BTreeSet;

/// Names a generated file imports from the types module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Imported declared names, deduplicated and sorted.
    pub names: BTreeSet<String>,
    /// Module specifier of the types module, relative to the importing file.
    pub path: String,
}

impl ImportSpec {
    /// Creates an import spec with no names for `document`.
    #[must_use]
    pub fn empty(document: &str) -> Self {
        Self {
            names: BTreeSet::new(),
            path: types_module_path(document),
        }
    }

    /// Builds the import spec for a file mentioning `types`.
    ///
    /// A type contributes its text when that text is a declared name, plus
    /// any declared names nested inside it. Primitive text never appears.
    #[must_use]
    pub fn build<'t>(ir: &AbiIr, types: impl IntoIterator<Item = &'t ResolvedType>) -> Self {
        let mut spec = Self::empty(&ir.name);
        for ty in types {
            if ir.is_declared(&ty.text) {
                spec.names.insert(ty.text.clone());
            }
            spec.names.extend(
                ty.references
                    .iter()
                    .filter(|name| ir.is_declared(name))
                    .cloned(),
            );
        }
        spec
    }

    /// Returns true if nothing needs importing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Module specifier of a document's types module from a sibling directory.
#[must_use]
pub fn types_module_path(document: &str) -> String {
    format!("../types/{document}")
}
