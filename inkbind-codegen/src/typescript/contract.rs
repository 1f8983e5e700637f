//! Contract class generation.

use super::HEADER;
use crate::output::OutputKind;

/// Method classes bundled by the contract object: property, import alias,
/// output kind and constructor arguments.
const METHOD_CLASSES: [(&str, &str, OutputKind, &str); 4] = [
    (
        "query",
        "QueryMethods",
        OutputKind::Query,
        "this.nativeContract, signer.address",
    ),
    (
        "buildExtrinsic",
        "BuildExtrinsicMethods",
        OutputKind::BuildExtrinsic,
        "this.nativeContract",
    ),
    (
        "tx",
        "TxSignAndSendMethods",
        OutputKind::TxSignAndSend,
        "this.nativeContract, signer",
    ),
    (
        "methods",
        "MixedMethods",
        OutputKind::MixedMethods,
        "this.nativeContract, signer",
    ),
];

/// Generator for the per-document contract class.
pub struct ContractGenerator<'a> {
    document: &'a str,
    abi_dir: &'a str,
}

impl<'a> ContractGenerator<'a> {
    /// Creates a new contract generator.
    ///
    /// `abi_dir` is the path from the `contracts` output directory to the
    /// directory holding `<document>.json`.
    #[must_use]
    pub fn new(document: &'a str, abi_dir: &'a str) -> Self {
        Self { document, abi_dir }
    }

    /// Generates the contract module.
    #[must_use]
    pub fn generate(&self) -> String {
        let doc = self.document;
        let mut output = String::from(HEADER);
        output.push('\n');
        output.push_str("import type { ApiPromise } from '@polkadot/api';\n");
        output.push_str("import { ContractPromise } from '@polkadot/api-contract';\n");
        output.push_str("import type { KeyringPair } from '@polkadot/keyring/types';\n");
        output.push_str(&format!(
            "import ABI from '{}/{doc}.json';\n",
            self.abi_dir.trim_end_matches('/')
        ));
        for (_, alias, kind, _) in METHOD_CLASSES {
            output.push_str(&format!("import {alias} from '../{}/{doc}';\n", kind.dir()));
        }
        output.push('\n');

        output.push_str("export default class Contract {\n");
        for (property, alias, _, _) in METHOD_CLASSES {
            output.push_str(&format!("\treadonly {property}: {alias};\n"));
        }
        output.push('\n');
        output.push_str("\treadonly address: string;\n");
        output.push_str("\treadonly signer: KeyringPair;\n");
        output.push_str("\treadonly nativeContract: ContractPromise;\n");
        output.push_str("\treadonly nativeAPI: ApiPromise;\n");
        output.push('\n');

        output.push_str(
            "\tconstructor(address: string, signer: KeyringPair, nativeAPI: ApiPromise) {\n",
        );
        output.push_str("\t\tthis.address = address;\n");
        output.push_str("\t\tthis.signer = signer;\n");
        output.push_str("\t\tthis.nativeAPI = nativeAPI;\n");
        output.push_str(
            "\t\tthis.nativeContract = new ContractPromise(nativeAPI, ABI, address);\n",
        );
        output.push('\n');
        for (property, alias, _, args) in METHOD_CLASSES {
            output.push_str(&format!("\t\tthis.{property} = new {alias}({args});\n"));
        }
        output.push_str("\t}\n");
        output.push('\n');

        output.push_str("\twithSigner(signer: KeyringPair): Contract {\n");
        output.push_str("\t\treturn new Contract(this.address, signer, this.nativeAPI);\n");
        output.push_str("\t}\n");
        output.push_str("}\n");
        output
    }
}
