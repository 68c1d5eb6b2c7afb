//! AST node model for the contract-language generator.
//!
//! Every node is a plain value object tagged by a `type` discriminator on the
//! wire, matching the host's `{ type: "ContractDeclaration", ... }` objects.
//! The node set is closed: each kind is a variant of a tagged union, so adding
//! a kind is a compile-time obligation on every formatter that matches on it.
//!
//! Nodes carry no behavior and are never mutated after construction. Every
//! collection in this model is an ordered sequence; emission order is a
//! correctness property, never an implementation detail.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// LITERALS
// ═══════════════════════════════════════════════════════════════════════════════

/// Numeric literal. `value` is verbatim source text and is never reformatted
/// (no base conversion, no trimming, no sign normalization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
}

/// String literal. `value` is the runtime string; quoting and escaping happen
/// at emission time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// The closed set of literal kinds a `Literal` wrapper can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LiteralValue {
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
}

/// Wrapper node used wherever a declaration carries a literal value, e.g. a
/// variable initializer. Printing delegates to the inner literal's formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: LiteralValue,
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECLARATIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// State variable declaration.
///
/// `modifiers` order is significant and preserved verbatim. An absent
/// `initializer` omits the assignment clause entirely (not an empty one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub name: String,
    pub type_annotation: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub initializer: Option<Literal>,
}

/// The closed set of declaration kinds a contract body can hold. Future member
/// kinds (functions, events) are added here as new tagged variants with their
/// own formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContractMember {
    VariableDeclaration(VariableDeclaration),
}

/// Contract declaration with optional inheritance.
///
/// Empty `extends` omits the inheritance clause syntax entirely; non-empty
/// preserves the given base order, comma-joined. `body` order is
/// caller-supplied and emitted verbatim, no reordering or grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeclaration {
    pub name: String,
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub body: Vec<ContractMember>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIRECTIVES
// ═══════════════════════════════════════════════════════════════════════════════

/// Import directive. Empty `names` emits the bare/side-effect form; non-empty
/// emits the named-import form listing `names` in given order. The two shapes
/// are a binary branch, never mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    pub path: String,
    #[serde(default)]
    pub names: Vec<String>,
}

/// Pragma directive. `value` is opaque text emitted verbatim as the directive
/// body; this layer never parses or validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PragmaDirective {
    pub value: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROGRAM
// ═══════════════════════════════════════════════════════════════════════════════

/// The closed set of top-level declaration kinds a program body can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceUnitMember {
    ContractDeclaration(ContractDeclaration),
}

/// A whole source file.
///
/// Section order is fixed: license comment, pragma, imports, body. An omitted
/// optional section contributes nothing to the output, not even a blank
/// placeholder line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub pragma: Option<PragmaDirective>,
    #[serde(default)]
    pub imports: Vec<ImportDeclaration>,
    #[serde(default)]
    pub body: Vec<SourceUnitMember>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// TOP-LEVEL DISPATCH
// ═══════════════════════════════════════════════════════════════════════════════

/// Every printable node kind. `print` matches exhaustively on this union, so
/// an unknown kind is unrepresentable in Rust; at the JSON boundary an unknown
/// `type` tag fails deserialization outright instead of emitting empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    Literal(Literal),
    VariableDeclaration(VariableDeclaration),
    ContractDeclaration(ContractDeclaration),
    ImportDeclaration(ImportDeclaration),
    PragmaDirective(PragmaDirective),
    Program(Program),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_round_trips_through_type_tag() {
        let json = serde_json::json!({
            "type": "VariableDeclaration",
            "name": "totalSupply",
            "typeAnnotation": "uint256",
            "modifiers": ["public"],
            "initializer": {
                "value": { "type": "NumberLiteral", "value": "10000" }
            }
        });
        let node: Node = serde_json::from_value(json).unwrap();
        match node {
            Node::VariableDeclaration(decl) => {
                assert_eq!(decl.name, "totalSupply");
                assert_eq!(decl.type_annotation, "uint256");
                assert_eq!(decl.modifiers, vec!["public".to_string()]);
                assert!(decl.initializer.is_some());
            }
            other => panic!("wrong node kind: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_tag_is_rejected() {
        let json = serde_json::json!({ "type": "FunctionDeclaration", "name": "mint" });
        let parsed: Result<Node, _> = serde_json::from_value(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = serde_json::json!({ "type": "Program" });
        let node: Node = serde_json::from_value(json).unwrap();
        match node {
            Node::Program(program) => {
                assert!(program.license.is_none());
                assert!(program.pragma.is_none());
                assert!(program.imports.is_empty());
                assert!(program.body.is_empty());
            }
            other => panic!("wrong node kind: {:?}", other),
        }
    }
}
