//! Codegen module for the contract-language generator.
//!
//! Generates Solidity-style source text from the AST model in `ast.rs`.
//! Printing is a purely functional fold over the tree: each formatter renders
//! its own node and recurses into children through their own formatters, so
//! the output for a given node is byte-identical across calls.
//!
//! Formatters never validate field text. Names, type annotations, modifiers
//! and pragma bodies are opaque strings emitted verbatim; garbage in produces
//! garbage out by contract.

#[cfg(feature = "napi")]
use napi_derive::napi;

use crate::ast::{
    ContractDeclaration, ContractMember, ImportDeclaration, Literal, LiteralValue, Node,
    PragmaDirective, Program, SourceUnitMember, VariableDeclaration,
};

const INDENT: &str = "    ";

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// Render any node to source text. This is the only dispatch point; every
/// kind in `Node` must have an arm here.
pub fn print(node: &Node) -> String {
    match node {
        Node::NumberLiteral(lit) => lit.value.clone(),
        Node::StringLiteral(lit) => format_string_literal(&lit.value),
        Node::BooleanLiteral(lit) => format_boolean_literal(lit.value),
        Node::Literal(lit) => format_literal(lit),
        Node::VariableDeclaration(decl) => format_variable_declaration(decl),
        Node::ContractDeclaration(contract) => format_contract(contract),
        Node::ImportDeclaration(import) => format_import(import),
        Node::PragmaDirective(pragma) => format_pragma(pragma),
        Node::Program(program) => format_program(program),
    }
}

/// Deserialize a node from the host's JSON shape and render it.
///
/// A JSON value whose `type` tag names no known node kind fails here, loudly,
/// with no partial output: a failed generate means no source file produced.
pub fn generate_source_internal(ast: serde_json::Value) -> Result<String, GenerateError> {
    let node: Node = serde_json::from_value(ast).map_err(|e| GenerateError::MalformedNode {
        message: e.to_string(),
    })?;
    Ok(print(&node))
}

#[cfg(feature = "napi")]
#[napi]
pub fn generate_source_native(ast: serde_json::Value) -> napi::Result<String> {
    generate_source_internal(ast).map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Errors that can occur turning host JSON into source text.
#[derive(Debug, Clone)]
pub enum GenerateError {
    MalformedNode { message: String },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNode { message } => {
                write!(f, "Malformed AST node: {}", message)
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// LITERALS
// ═══════════════════════════════════════════════════════════════════════════════

pub fn format_literal(literal: &Literal) -> String {
    match &literal.value {
        LiteralValue::NumberLiteral(lit) => lit.value.clone(),
        LiteralValue::StringLiteral(lit) => format_string_literal(&lit.value),
        LiteralValue::BooleanLiteral(lit) => format_boolean_literal(lit.value),
    }
}

fn format_string_literal(value: &str) -> String {
    format!("\"{}\"", escape_string(value))
}

fn format_boolean_literal(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECLARATIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Emission order: modifiers (space-joined, given order), type annotation,
/// name, then the assignment clause iff an initializer is present.
pub fn format_variable_declaration(decl: &VariableDeclaration) -> String {
    let mut out = String::new();
    if !decl.modifiers.is_empty() {
        out.push_str(&decl.modifiers.join(" "));
        out.push(' ');
    }
    out.push_str(&decl.type_annotation);
    out.push(' ');
    out.push_str(&decl.name);
    if let Some(initializer) = &decl.initializer {
        out.push_str(" = ");
        out.push_str(&format_literal(initializer));
    }
    out.push(';');
    out
}

fn format_contract_member(member: &ContractMember) -> String {
    match member {
        ContractMember::VariableDeclaration(decl) => format_variable_declaration(decl),
    }
}

/// Header keyword, name, and the `is` clause only when `extends` is
/// non-empty. An empty body still emits its block delimiters.
pub fn format_contract(contract: &ContractDeclaration) -> String {
    let mut header = format!("contract {}", contract.name);
    if !contract.extends.is_empty() {
        header.push_str(" is ");
        header.push_str(&contract.extends.join(", "));
    }
    if contract.body.is_empty() {
        return format!("{} {{}}", header);
    }
    let members = contract
        .body
        .iter()
        .map(|member| indent_block(&format_contract_member(member)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} {{\n{}\n}}", header, members)
}

/// Indent every line of an already-rendered member one level. Members are
/// single-line today; multi-line kinds (function bodies) stay correct.
fn indent_block(rendered: &str) -> String {
    rendered
        .lines()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIRECTIVES
// ═══════════════════════════════════════════════════════════════════════════════

pub fn format_import(import: &ImportDeclaration) -> String {
    if import.names.is_empty() {
        format!("import \"{}\";", escape_string(&import.path))
    } else {
        format!(
            "import {{ {} }} from \"{}\";",
            import.names.join(", "),
            escape_string(&import.path)
        )
    }
}

pub fn format_pragma(pragma: &PragmaDirective) -> String {
    format!("pragma {};", pragma.value)
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROGRAM ASSEMBLY
// ═══════════════════════════════════════════════════════════════════════════════

fn format_source_unit_member(member: &SourceUnitMember) -> String {
    match member {
        SourceUnitMember::ContractDeclaration(contract) => format_contract(contract),
    }
}

/// Assemble the fixed section sequence: license comment, pragma, imports,
/// then top-level declarations. Only present sections are collected, and
/// consecutive present sections are separated by exactly one blank line, so
/// an omitted section never leaves a stray blank where it would have been.
pub fn format_program(program: &Program) -> String {
    let mut sections: Vec<String> = Vec::new();
    if let Some(license) = &program.license {
        sections.push(format!("// SPDX-License-Identifier: {}", license));
    }
    if let Some(pragma) = &program.pragma {
        sections.push(format_pragma(pragma));
    }
    if !program.imports.is_empty() {
        sections.push(
            program
                .imports
                .iter()
                .map(format_import)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    for member in &program.body {
        sections.push(format_source_unit_member(member));
    }
    sections.join("\n\n")
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
