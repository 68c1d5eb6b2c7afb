//! Data contract with the externally hosted Solidity compiler.
//!
//! The compiler itself is a black box owned by the host: given source text
//! keyed by filename it returns contracts keyed by filename then symbol, or a
//! list of structured diagnostics. This module is the typed boundary only —
//! it performs no I/O and never invokes the compiler.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════════
// REQUEST / OUTPUT SHAPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileRequest {
    /// Source text keyed by filename, typically one entry per generated file.
    pub sources: HashMap<String, SourceFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOutput {
    /// filename -> contract symbol -> compiled artifact.
    #[serde(default)]
    pub contracts: HashMap<String, HashMap<String, CompiledContract>>,
    #[serde(default)]
    pub errors: Vec<Diagnostic>,
}

impl CompileOutput {
    /// Warnings and infos do not fail a compile; only error severity does.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|d| d.severity == Severity::Error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledContract {
    #[serde(default)]
    pub abi: serde_json::Value,
    #[serde(default)]
    pub evm: EvmOutput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmOutput {
    #[serde(default)]
    pub bytecode: Bytecode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bytecode {
    #[serde(default)]
    pub object: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTICS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub formatted_message: Option<String>,
    #[serde(default)]
    pub source_location: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

lazy_static! {
    // Legacy solc formatted line: `Token.sol:12:5: Error: message text`
    static ref FORMATTED_LINE_RE: Regex =
        Regex::new(r"^(?P<file>[^:]+):(?P<line>\d+):(?P<col>\d+):\s*(?P<sev>[A-Za-z]+):\s*(?P<msg>.*)$")
            .unwrap();
}

impl Diagnostic {
    /// Classify a compiler-formatted message line into the structured shape.
    /// Lines that do not match the legacy `file:line:col: Severity: message`
    /// layout become error diagnostics wrapping the raw text, so no compiler
    /// output is ever dropped silently.
    pub fn from_formatted(line: &str) -> Diagnostic {
        let trimmed = line.trim();
        if let Some(caps) = FORMATTED_LINE_RE.captures(trimmed) {
            let severity = match caps["sev"].to_ascii_lowercase().as_str() {
                "warning" => Severity::Warning,
                "info" | "note" => Severity::Info,
                _ => Severity::Error,
            };
            Diagnostic {
                severity,
                message: caps["msg"].to_string(),
                formatted_message: Some(trimmed.to_string()),
                source_location: Some(SourceLocation {
                    file: caps["file"].to_string(),
                    line: caps["line"].parse().unwrap_or(0),
                    column: caps["col"].parse().unwrap_or(0),
                }),
            }
        } else {
            Diagnostic {
                severity: Severity::Error,
                message: trimmed.to_string(),
                formatted_message: Some(trimmed.to_string()),
                source_location: None,
            }
        }
    }
}
