//! Argument types generation.

use super::{HEADER, arg_ident, import_line, member_name};
use crate::imports::ImportSpec;
use crate::methods::MethodRecord;

/// Generator for the per-document argument types module.
pub struct ArgumentsGenerator<'a> {
    methods: &'a [MethodRecord],
    imports: &'a ImportSpec,
}

impl<'a> ArgumentsGenerator<'a> {
    /// Creates a new arguments generator.
    #[must_use]
    pub fn new(methods: &'a [MethodRecord], imports: &'a ImportSpec) -> Self {
        Self { methods, imports }
    }

    /// Generates the arguments module: a map from message label to its
    /// labelled argument tuple.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');
        if let Some(line) = import_line(self.imports) {
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str("export type Arguments = {\n");
        for method in self.methods {
            let params: Vec<String> = method
                .args
                .iter()
                .map(|a| format!("{}: {}", arg_ident(&a.name), a.ty.text))
                .collect();
            output.push_str(&format!(
                "\t{}: [{}];\n",
                member_name(&method.name),
                params.join(", ")
            ));
        }
        output.push_str("};\n");

        output
    }
}
