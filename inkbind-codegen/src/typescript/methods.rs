//! Method class generation for the four calling flavors.
//!
//! Each flavor renders a default-exported `Methods` class with one member
//! per method record. Members keep the message label verbatim as a quoted
//! name, so labels such as `PSP22::transfer` survive.

use super::{HEADER, arg_array, arg_ident, doc_comment, import_line, member_name};
use crate::imports::ImportSpec;
use crate::methods::{MethodKind, MethodRecord};
use std::collections::BTreeSet;

const CONTRACT_PROMISE_IMPORT: &str =
    "import type { ContractPromise } from '@polkadot/api-contract';\n";
const KEYRING_PAIR_IMPORT: &str = "import type { KeyringPair } from '@polkadot/keyring/types';\n";
const SUBMITTABLE_IMPORT: &str =
    "import type { SubmittableExtrinsic } from '@polkadot/api/types';\n";

const GAS_LIMIT: &str = "GasLimit";
const GAS_LIMIT_AND_VALUE: &str = "GasLimitAndRequiredValue";

/// A constructor parameter stored on the class as `__<name>`.
struct Field {
    name: &'static str,
    ty: &'static str,
}

const NATIVE_CONTRACT: Field = Field {
    name: "nativeContract",
    ty: "ContractPromise",
};
const CALLER_ADDRESS: Field = Field {
    name: "callerAddress",
    ty: "string",
};
const KEYRING_PAIR: Field = Field {
    name: "keyringPair",
    ty: "KeyringPair",
};

/// Generator for the read-only query class.
pub struct QueryGenerator<'a> {
    records: &'a [MethodRecord],
    imports: &'a ImportSpec,
}

impl<'a> QueryGenerator<'a> {
    /// Creates a new query generator.
    #[must_use]
    pub fn new(records: &'a [MethodRecord], imports: &'a ImportSpec) -> Self {
        Self { records, imports }
    }

    /// Generates the query module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str(CONTRACT_PROMISE_IMPORT);
        output.push_str(&sdk_types_import(self.records, &["QueryReturnType"]));
        output.push_str("import { queryJSON } from '../_sdk/query';\n");
        push_types_import(&mut output, self.imports);

        output.push_str(&class_open(&[NATIVE_CONTRACT, CALLER_ADDRESS]));
        for record in self.records {
            let ret = return_text(record);
            output.push_str(&member(
                record,
                &format!("Promise<QueryReturnType<{ret}>>"),
                &format!(
                    "queryJSON<{ret}>(this.__nativeContract, this.__callerAddress, {}, {}, __options)",
                    member_name(&record.name),
                    arg_array(&record.args)
                ),
            ));
        }
        output.push_str("}\n");
        output
    }
}

/// Generator for the unsigned extrinsic builder class.
pub struct BuildExtrinsicGenerator<'a> {
    records: &'a [MethodRecord],
    imports: &'a ImportSpec,
}

impl<'a> BuildExtrinsicGenerator<'a> {
    /// Creates a new extrinsic builder generator.
    #[must_use]
    pub fn new(records: &'a [MethodRecord], imports: &'a ImportSpec) -> Self {
        Self { records, imports }
    }

    /// Generates the build-extrinsic module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str(CONTRACT_PROMISE_IMPORT);
        output.push_str(SUBMITTABLE_IMPORT);
        output.push_str(&sdk_types_import(self.records, &[]));
        output.push_str("import { buildSubmittableExtrinsic } from '../_sdk/tx';\n");
        push_types_import(&mut output, self.imports);

        output.push_str(&class_open(&[NATIVE_CONTRACT]));
        for record in self.records {
            output.push_str(&member(
                record,
                "SubmittableExtrinsic<'promise'>",
                &format!(
                    "buildSubmittableExtrinsic(this.__nativeContract, {}, {}, __options)",
                    member_name(&record.name),
                    arg_array(&record.args)
                ),
            ));
        }
        output.push_str("}\n");
        output
    }
}

/// Generator for the sign-and-send transaction class.
pub struct TxSignAndSendGenerator<'a> {
    records: &'a [MethodRecord],
    imports: &'a ImportSpec,
}

impl<'a> TxSignAndSendGenerator<'a> {
    /// Creates a new transaction generator.
    #[must_use]
    pub fn new(records: &'a [MethodRecord], imports: &'a ImportSpec) -> Self {
        Self { records, imports }
    }

    /// Generates the tx-sign-and-send module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str(CONTRACT_PROMISE_IMPORT);
        output.push_str(KEYRING_PAIR_IMPORT);
        output.push_str(&sdk_types_import(self.records, &["SignAndSendSuccessResponse"]));
        output.push_str("import { txSignAndSend } from '../_sdk/tx';\n");
        push_types_import(&mut output, self.imports);

        output.push_str(&class_open(&[NATIVE_CONTRACT, KEYRING_PAIR]));
        for record in self.records {
            output.push_str(&tx_member(record));
        }
        output.push_str("}\n");
        output
    }
}

/// Generator for the mixed class: transactions for mutating messages,
/// plain queries for the rest.
pub struct MixedMethodsGenerator<'a> {
    records: &'a [MethodRecord],
    imports: &'a ImportSpec,
}

impl<'a> MixedMethodsGenerator<'a> {
    /// Creates a new mixed methods generator.
    #[must_use]
    pub fn new(records: &'a [MethodRecord], imports: &'a ImportSpec) -> Self {
        Self { records, imports }
    }

    /// Generates the mixed-methods module.
    #[must_use]
    pub fn generate(&self) -> String {
        let has_tx = self.records.iter().any(|r| r.kind() == MethodKind::Tx);
        let has_query = self.records.iter().any(|r| r.kind() == MethodKind::Query);

        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str(CONTRACT_PROMISE_IMPORT);
        output.push_str(KEYRING_PAIR_IMPORT);
        let extra: &[&str] = if has_tx {
            &["SignAndSendSuccessResponse"]
        } else {
            &[]
        };
        output.push_str(&sdk_types_import(self.records, extra));
        if has_query {
            output.push_str("import { queryOkJSON } from '../_sdk/query';\n");
        }
        if has_tx {
            output.push_str("import { txSignAndSend } from '../_sdk/tx';\n");
        }
        push_types_import(&mut output, self.imports);

        output.push_str(&class_open(&[NATIVE_CONTRACT, KEYRING_PAIR]));
        for record in self.records {
            match record.kind() {
                MethodKind::Tx | MethodKind::Extrinsic => output.push_str(&tx_member(record)),
                MethodKind::Query => {
                    let ret = return_text(record);
                    output.push_str(&member(
                        record,
                        &format!("Promise<{ret}>"),
                        &format!(
                            "queryOkJSON<{ret}>(this.__nativeContract, this.__keyringPair.address, {}, {}, __options)",
                            member_name(&record.name),
                            arg_array(&record.args)
                        ),
                    ));
                }
            }
        }
        output.push_str("}\n");
        output
    }
}

fn tx_member(record: &MethodRecord) -> String {
    member(
        record,
        "Promise<SignAndSendSuccessResponse>",
        &format!(
            "txSignAndSend(this.__nativeContract, this.__keyringPair, {}, {}, __options)",
            member_name(&record.name),
            arg_array(&record.args)
        ),
    )
}

fn push_types_import(output: &mut String, imports: &ImportSpec) {
    if let Some(line) = import_line(imports) {
        output.push_str(&line);
    }
    output.push('\n');
}

/// Imports from the runtime types module: `extra` plus whichever options
/// types the records need.
fn sdk_types_import(records: &[MethodRecord], extra: &[&str]) -> String {
    let mut names: BTreeSet<&str> = extra.iter().copied().collect();
    names.extend(records.iter().map(|r| -> &str { options_type(r) }));
    if names.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = names.into_iter().collect();
    format!("import type {{ {} }} from '../_sdk/types';\n", names.join(", "))
}

fn options_type(record: &MethodRecord) -> &'static str {
    if record.payable {
        GAS_LIMIT_AND_VALUE
    } else {
        GAS_LIMIT
    }
}

fn return_text(record: &MethodRecord) -> &str {
    record.return_type().map_or("null", |t| t.text.as_str())
}

fn class_open(fields: &[Field]) -> String {
    let mut output = String::from("export default class Methods {\n");
    for field in fields {
        output.push_str(&format!("\treadonly __{}: {};\n", field.name, field.ty));
    }

    let params: Vec<String> = fields
        .iter()
        .map(|f| format!("{}: {}", f.name, f.ty))
        .collect();
    output.push_str(&format!("\n\tconstructor({}) {{\n", params.join(", ")));
    for field in fields {
        output.push_str(&format!("\t\tthis.__{0} = {0};\n", field.name));
    }
    output.push_str("\t}\n");
    output
}

fn member(record: &MethodRecord, return_type: &str, call: &str) -> String {
    let mut params: Vec<String> = record
        .args
        .iter()
        .map(|a| format!("{}: {}", arg_ident(&a.name), a.ty.text))
        .collect();
    params.push(format!("__options?: {}", options_type(record)));

    let tags = [format!("@selector {}", record.selector)];
    let mut output = String::from("\n");
    output.push_str(&doc_comment("\t", &record.docs, &tags));
    output.push_str(&format!(
        "\t{}({}): {} {{\n",
        member_name(&record.name),
        params.join(", "),
        return_type
    ));
    output.push_str(&format!("\t\treturn {call};\n"));
    output.push_str("\t}\n");
    output
}
