//! Return value types generation.

use super::{HEADER, import_line};
use crate::imports::ImportSpec;
use inkbind_abi::ir::TypeTable;

/// Generator for the per-document return value types module.
pub struct ReturnValuesGenerator<'a> {
    return_types: &'a TypeTable,
    imports: &'a ImportSpec,
}

impl<'a> ReturnValuesGenerator<'a> {
    /// Creates a new return values generator.
    #[must_use]
    pub fn new(return_types: &'a TypeTable, imports: &'a ImportSpec) -> Self {
        Self {
            return_types,
            imports,
        }
    }

    /// Generates the return values module, keyed by registry type id.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');
        if let Some(line) = import_line(self.imports) {
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str("export type ReturnValues = {\n");
        for ty in self.return_types.iter() {
            output.push_str(&format!("\t{}: {};\n", ty.id, ty.text));
        }
        output.push_str("};\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::erc20_ir;

    #[test]
    fn test_generate_return_values() {
        let ir = erc20_ir();
        let imports = ImportSpec::build(&ir, ir.return_types.iter());
        let output = ReturnValuesGenerator::new(&ir.return_types, &imports).generate();

        assert!(
            output.contains("import type { AccountId, Balance, Error } from '../types/erc20';\n")
        );
        assert!(output.contains(
            "export type ReturnValues = {\n\t5: ({ ok: null } | { err: Error });\n\t1: Balance;\n\t9: Array<AccountId>;\n};\n"
        ));
    }

    #[test]
    fn test_return_types_listed_once() {
        let ir = erc20_ir();
        let imports = ImportSpec::build(&ir, ir.return_types.iter());
        let output = ReturnValuesGenerator::new(&ir.return_types, &imports).generate();

        // balance_of and total_supply share id 1.
        assert_eq!(output.matches("\t1: Balance;").count(), 1);
    }
}
