//! Runtime support package shipped next to generated bindings.
//!
//! The files are embedded at compile time and written verbatim into the
//! output tree.

/// Directory under the output root holding the runtime package.
pub const RUNTIME_DIR: &str = "_sdk";

/// Runtime files as `(file name, contents)`.
pub const RUNTIME_FILES: &[(&str, &str)] = &[
    ("types.ts", include_str!("../runtime/_sdk/types.ts")),
    ("query.ts", include_str!("../runtime/_sdk/query.ts")),
    ("tx.ts", include_str!("../runtime/_sdk/tx.ts")),
    ("utils.ts", include_str!("../runtime/_sdk/utils.ts")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_exports_used_by_templates() {
        let all: String = RUNTIME_FILES.iter().map(|(_, c)| *c).collect();
        for export in [
            "export type GasLimit",
            "export type GasLimitAndRequiredValue",
            "export type QueryReturnType",
            "export type SignAndSendSuccessResponse",
            "export async function queryJSON",
            "export async function queryOkJSON",
            "export function buildSubmittableExtrinsic",
            "export function txSignAndSend",
        ] {
            assert!(all.contains(export), "runtime is missing `{export}`");
        }
    }

    #[test]
    fn test_runtime_resolves_labels_through_abi() {
        // Generated code passes raw ink! labels; the runtime must map them to
        // the camel-cased keys of `ContractPromise.query` and `.tx`.
        for (name, contents) in RUNTIME_FILES {
            assert!(!contents.contains(".query[title]"), "{name} indexes query by label");
            assert!(!contents.contains(".tx[title]"), "{name} indexes tx by label");
        }

        let file = |wanted: &str| {
            RUNTIME_FILES
                .iter()
                .find(|(name, _)| *name == wanted)
                .map(|(_, c)| *c)
                .unwrap_or_default()
        };
        assert!(file("utils.ts").contains("nativeContract.abi.findMessage(title).method"));
        assert!(file("query.ts").contains("query[messageMethod(nativeContract, title)]"));
        assert!(file("tx.ts").contains("tx[messageMethod(nativeContract, title)]"));
    }
}
