//! Method projection.
//!
//! Re-shapes the raw message list of a resolved document into the method
//! records each output flavor renders. Records are rebuilt for every flavor
//! and never shared between them.

use crate::error::CodegenError;
use crate::output::OutputKind;
use inkbind_abi::ir::{AbiIr, ResolvedType};
use inkbind_abi::types::MessageSpec;

/// Calling convention of a method record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Read-only dry run.
    Query,
    /// Unsigned call payload.
    Extrinsic,
    /// Signed and submitted transaction.
    Tx,
}

/// Flavor-specific part of a method record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodShape {
    /// Query record, carrying the return type and mutability.
    Query {
        /// Declared return type.
        return_type: Option<ResolvedType>,
        /// Whether the message mutates state.
        mutates: bool,
    },
    /// Extrinsic record.
    Extrinsic,
    /// Transaction record.
    Tx,
}

/// A method argument with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodArg {
    /// Argument label.
    pub name: String,
    /// Resolved argument type.
    pub ty: ResolvedType,
}

/// One method as rendered by a flavor template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    /// Message label.
    pub name: String,
    /// Message selector.
    pub selector: String,
    /// Documentation lines.
    pub docs: Vec<String>,
    /// Arguments in declaration order.
    pub args: Vec<MethodArg>,
    /// Whether the message accepts value transfer.
    pub payable: bool,
    /// Flavor-specific shape.
    pub shape: MethodShape,
}

impl MethodRecord {
    /// Returns the calling convention of this record.
    #[must_use]
    pub const fn kind(&self) -> MethodKind {
        match self.shape {
            MethodShape::Query { .. } => MethodKind::Query,
            MethodShape::Extrinsic => MethodKind::Extrinsic,
            MethodShape::Tx => MethodKind::Tx,
        }
    }

    /// Returns the return type, present only on query records.
    #[must_use]
    pub fn return_type(&self) -> Option<&ResolvedType> {
        match &self.shape {
            MethodShape::Query { return_type, .. } => return_type.as_ref(),
            MethodShape::Extrinsic | MethodShape::Tx => None,
        }
    }

    /// Every resolved type the record mentions.
    pub fn resolved_types(&self) -> impl Iterator<Item = &ResolvedType> {
        self.args.iter().map(|a| &a.ty).chain(self.return_type())
    }
}

/// Projects a resolved document's messages into method records.
pub struct MethodProjector<'a> {
    ir: &'a AbiIr,
}

impl<'a> MethodProjector<'a> {
    /// Creates a new projector.
    #[must_use]
    pub fn new(ir: &'a AbiIr) -> Self {
        Self { ir }
    }

    /// Projects the records used by an output kind.
    ///
    /// Kinds that render no methods yield an empty list.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a message refers to a type id
    /// absent from the document's resolved tables.
    pub fn project(&self, kind: OutputKind) -> Result<Vec<MethodRecord>, CodegenError> {
        match kind {
            OutputKind::Arguments | OutputKind::Query => self.query(),
            OutputKind::BuildExtrinsic => self.build_extrinsic(),
            OutputKind::TxSignAndSend => self.tx_sign_and_send(),
            OutputKind::MixedMethods => self.mixed(),
            OutputKind::Types | OutputKind::ReturnValues | OutputKind::Contract => Ok(Vec::new()),
        }
    }

    /// Every message as a query record.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` on a table miss.
    pub fn query(&self) -> Result<Vec<MethodRecord>, CodegenError> {
        self.ir.messages.iter().map(|m| self.query_record(m)).collect()
    }

    /// Every message as an extrinsic record.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` on a table miss.
    pub fn build_extrinsic(&self) -> Result<Vec<MethodRecord>, CodegenError> {
        self.ir
            .messages
            .iter()
            .map(|m| self.record(m, MethodShape::Extrinsic))
            .collect()
    }

    /// Every message as a transaction record.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` on a table miss.
    pub fn tx_sign_and_send(&self) -> Result<Vec<MethodRecord>, CodegenError> {
        self.ir
            .messages
            .iter()
            .map(|m| self.record(m, MethodShape::Tx))
            .collect()
    }

    /// Mutating messages as transaction records, the rest as query records.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` on a table miss.
    pub fn mixed(&self) -> Result<Vec<MethodRecord>, CodegenError> {
        self.ir
            .messages
            .iter()
            .map(|m| {
                if m.mutates {
                    self.record(m, MethodShape::Tx)
                } else {
                    self.query_record(m)
                }
            })
            .collect()
    }

    fn query_record(&self, msg: &MessageSpec) -> Result<MethodRecord, CodegenError> {
        let return_type = msg
            .return_type
            .as_ref()
            .map(|ret| {
                self.ir
                    .return_types
                    .get(ret.id)
                    .cloned()
                    .ok_or_else(|| CodegenError::UnknownType {
                        id: ret.id,
                        method: msg.label.clone(),
                        position: "return type".to_string(),
                    })
            })
            .transpose()?;

        self.record(
            msg,
            MethodShape::Query {
                return_type,
                mutates: msg.mutates,
            },
        )
    }

    fn record(&self, msg: &MessageSpec, shape: MethodShape) -> Result<MethodRecord, CodegenError> {
        let args = msg
            .args
            .iter()
            .map(|arg| {
                let ty = self.ir.argument_types.get(arg.ty.id).cloned().ok_or_else(|| {
                    CodegenError::UnknownType {
                        id: arg.ty.id,
                        method: msg.label.clone(),
                        position: format!("argument '{}'", arg.label),
                    }
                })?;
                Ok(MethodArg {
                    name: arg.label.clone(),
                    ty,
                })
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;

        Ok(MethodRecord {
            name: msg.label.clone(),
            selector: msg.selector.clone(),
            docs: msg.docs.clone(),
            args,
            payable: msg.payable,
            shape,
        })
    }
}
