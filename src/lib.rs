//! # Solidity Source Generator (Native Core)
//!
//! Deterministic AST-to-source generator for the contract editor host. The
//! host constructs node trees (from templates and user metadata), passes them
//! across the bridge as JSON, and receives finished Solidity-style source
//! text to hand to the compiler service.
//!
//! ## Emission Invariants
//!
//! 1. **Total dispatch**: `print` matches exhaustively over the closed node
//!    set; adding a node kind is a compile error until every formatter
//!    accounts for it.
//! 2. **Order is meaning**: modifiers, base contracts, imports and body
//!    declarations are emitted exactly in caller order, never re-sorted.
//! 3. **Verbatim leaves**: numeric text, pragma bodies, names and type
//!    annotations pass through untouched; only string literals are escaped.
//! 4. **Section separation**: a program emits its present sections (license,
//!    pragma, imports, body) separated by exactly one blank line; an absent
//!    section leaves no placeholder.
//! 5. **No partial output**: a malformed node at the JSON boundary fails the
//!    whole generate call; the host never receives a truncated file.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod ast;
mod codegen;
mod solc;

#[cfg(test)]
mod codegen_tests;

pub use ast::*;
pub use codegen::{
    format_contract, format_import, format_literal, format_pragma, format_program,
    format_variable_declaration, generate_source_internal, print, GenerateError,
};
pub use solc::*;

#[cfg(feature = "napi")]
pub use codegen::generate_source_native;

#[cfg(feature = "napi")]
#[napi]
pub fn generator_bridge() -> String {
    "Solgen Native Bridge Connected".to_string()
}
