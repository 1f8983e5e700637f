//! # inkbind
//!
//! TypeScript bindings generator for ink! smart contracts.
//!
//! inkbind reads ink! contract ABI documents (metadata V3) and writes, per
//! contract, a set of TypeScript modules: declared types, argument and
//! return value maps, four calling-convention method classes and a
//! contract object tying them together.
//!
//! ## Quick Start
//!
//! ```ignore
//! use inkbind::prelude::*;
//!
//! let config = GeneratorConfig::builder()
//!     .input_dir("artifacts")
//!     .output_dir("typed_contracts")
//!     .build()?;
//!
//! let report = Batch::new(config).run()?;
//! println!("{} contracts generated", report.generated.len());
//! ```
//!
//! ## Crate Organization
//!
//! - [`abi`] - ABI model, parsing and type resolution
//! - [`codegen`] - TypeScript generation and output writing

pub mod prelude;

/// ABI model, parsing and type resolution.
pub mod abi {
    pub use inkbind_abi::*;
}

/// TypeScript generation and output writing.
pub mod codegen {
    pub use inkbind_codegen::*;
}
