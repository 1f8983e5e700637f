//! Shared ABI fixtures for unit tests.

use inkbind_abi::{AbiIr, parse_abi};

/// Token contract: two declared composites, one enum, five messages.
pub(crate) const ERC20: &str = r#"{
    "source": {"hash": "0x00", "language": "ink! 3.4.0", "compiler": "rustc 1.68.0"},
    "contract": {"name": "erc20", "version": "1.0.0"},
    "V3": {
        "spec": {
            "constructors": [],
            "docs": [],
            "events": [],
            "messages": [
                {"label": "transfer", "selector": "0x84a15da1",
                 "args": [
                    {"label": "to", "type": {"type": 0, "displayName": ["AccountId"]}},
                    {"label": "amount", "type": {"type": 1, "displayName": ["Balance"]}}
                 ],
                 "returnType": {"type": 5, "displayName": ["Result"]},
                 "mutates": true, "payable": false,
                 "docs": [" Transfers `amount` to `to`."]},
                {"label": "balance_of", "selector": "0x0f755a56",
                 "args": [{"label": "owner", "type": {"type": 0, "displayName": ["AccountId"]}}],
                 "returnType": {"type": 1, "displayName": ["Balance"]},
                 "mutates": false, "payable": false, "docs": []},
                {"label": "total_supply", "selector": "0xdb6375a8", "args": [],
                 "returnType": {"type": 1, "displayName": ["Balance"]},
                 "mutates": false, "payable": false, "docs": []},
                {"label": "deposit", "selector": "0x2d10c9bd", "args": [],
                 "returnType": null,
                 "mutates": true, "payable": true, "docs": []},
                {"label": "holders", "selector": "0x1a2b3c4d",
                 "args": [{"label": "default", "type": {"type": 8, "displayName": ["bool"]}}],
                 "returnType": {"type": 9, "displayName": ["Vec"]},
                 "mutates": false, "payable": false, "docs": []}
            ]
        },
        "storage": {"struct": {"fields": []}},
        "types": [
            {"id": 0, "type": {"path": ["ink_env", "types", "AccountId"],
                "def": {"composite": {"fields": [{"type": 3, "typeName": "[u8; 32]"}]}}}},
            {"id": 1, "type": {"path": ["erc20", "Balance"],
                "def": {"composite": {"fields": [{"name": "amount", "type": 2, "typeName": "u128"}]}}}},
            {"id": 2, "type": {"def": {"primitive": "u128"}}},
            {"id": 3, "type": {"def": {"array": {"len": 32, "type": 4}}}},
            {"id": 4, "type": {"def": {"primitive": "u8"}}},
            {"id": 5, "type": {"path": ["Result"],
                "params": [{"name": "T", "type": 6}, {"name": "E", "type": 7}],
                "def": {"variant": {"variants": [
                    {"name": "Ok", "fields": [{"type": 6}], "index": 0},
                    {"name": "Err", "fields": [{"type": 7}], "index": 1}]}}}},
            {"id": 6, "type": {"def": {"tuple": []}}},
            {"id": 7, "type": {"path": ["erc20", "Error"], "docs": [" Token errors."],
                "def": {"variant": {"variants": [
                    {"name": "InsufficientBalance", "index": 0},
                    {"name": "InsufficientAllowance", "index": 1}]}}}},
            {"id": 8, "type": {"def": {"primitive": "bool"}}},
            {"id": 9, "type": {"def": {"sequence": {"type": 0}}}}
        ]
    }
}"#;

/// Resolves [`ERC20`] under the document name `erc20`.
pub(crate) fn erc20_ir() -> AbiIr {
    let doc = parse_abi(ERC20).expect("fixture parses");
    AbiIr::from_document("erc20", &doc).expect("fixture resolves")
}
