//! End-to-end program assembly fixtures.
//!
//! These pin the exact emitted text for whole programs:
//! - section order and the single-blank-line separation rule
//! - omission of absent sections with no stray blank lines
//! - repeatability of `print` over a fixed tree

#[cfg(test)]
mod tests {
    use crate::ast::{
        ContractDeclaration, ContractMember, ImportDeclaration, Literal, LiteralValue, Node,
        NumberLiteral, PragmaDirective, Program, SourceUnitMember, VariableDeclaration,
    };
    use crate::codegen::print;

    fn bare_import(path: &str) -> ImportDeclaration {
        ImportDeclaration {
            path: path.to_string(),
            names: vec![],
        }
    }

    fn pragma_089() -> PragmaDirective {
        PragmaDirective {
            value: "solidity ^0.8.9".to_string(),
        }
    }

    #[test]
    fn test_program_header_sections_exact_text() {
        let program = Node::Program(Program {
            license: Some("MIT".to_string()),
            pragma: Some(pragma_089()),
            imports: vec![bare_import("@a"), bare_import("@b"), bare_import("@c")],
            body: vec![],
        });
        assert_eq!(
            print(&program),
            "// SPDX-License-Identifier: MIT\n\
             \n\
             pragma solidity ^0.8.9;\n\
             \n\
             import \"@a\";\n\
             import \"@b\";\n\
             import \"@c\";"
        );
    }

    #[test]
    fn test_missing_license_leaves_no_blank_line() {
        let program = Node::Program(Program {
            license: None,
            pragma: Some(pragma_089()),
            imports: vec![bare_import("@a")],
            body: vec![],
        });
        let source = print(&program);
        assert!(source.starts_with("pragma solidity ^0.8.9;"));
        assert_eq!(source, "pragma solidity ^0.8.9;\n\nimport \"@a\";");
    }

    #[test]
    fn test_missing_license_and_pragma_starts_at_imports() {
        let program = Node::Program(Program {
            license: None,
            pragma: None,
            imports: vec![bare_import("@a"), bare_import("@b")],
            body: vec![],
        });
        assert_eq!(print(&program), "import \"@a\";\nimport \"@b\";");
    }

    #[test]
    fn test_body_only_program_has_no_leading_blank() {
        let program = Node::Program(Program {
            license: None,
            pragma: None,
            imports: vec![],
            body: vec![SourceUnitMember::ContractDeclaration(ContractDeclaration {
                name: "Empty".to_string(),
                extends: vec![],
                body: vec![],
            })],
        });
        assert_eq!(print(&program), "contract Empty {}");
    }

    #[test]
    fn test_full_program_with_contract_body() {
        let program = Node::Program(Program {
            license: Some("MIT".to_string()),
            pragma: Some(pragma_089()),
            imports: vec![
                ImportDeclaration {
                    path: "@openzeppelin/contracts/token/ERC721/ERC721.sol".to_string(),
                    names: vec![],
                },
                ImportDeclaration {
                    path: "./lib/Roles.sol".to_string(),
                    names: vec!["Minter".to_string(), "Burner".to_string()],
                },
            ],
            body: vec![SourceUnitMember::ContractDeclaration(ContractDeclaration {
                name: "MyToken".to_string(),
                extends: vec![
                    "ERC721".to_string(),
                    "ReentrancyGuard".to_string(),
                    "Ownable".to_string(),
                ],
                body: vec![ContractMember::VariableDeclaration(VariableDeclaration {
                    name: "maxSupply".to_string(),
                    type_annotation: "uint256".to_string(),
                    modifiers: vec!["public".to_string()],
                    initializer: Some(Literal {
                        value: LiteralValue::NumberLiteral(NumberLiteral {
                            value: "10000".to_string(),
                        }),
                    }),
                })],
            })],
        });
        assert_eq!(
            print(&program),
            "// SPDX-License-Identifier: MIT\n\
             \n\
             pragma solidity ^0.8.9;\n\
             \n\
             import \"@openzeppelin/contracts/token/ERC721/ERC721.sol\";\n\
             import { Minter, Burner } from \"./lib/Roles.sol\";\n\
             \n\
             contract MyToken is ERC721, ReentrancyGuard, Ownable {\n\
             \x20\x20\x20\x20public uint256 maxSupply = 10000;\n\
             }"
        );
    }

    #[test]
    fn test_multiple_contracts_separated_by_blank_line() {
        let contract = |name: &str| {
            SourceUnitMember::ContractDeclaration(ContractDeclaration {
                name: name.to_string(),
                extends: vec![],
                body: vec![],
            })
        };
        let program = Node::Program(Program {
            license: None,
            pragma: None,
            imports: vec![],
            body: vec![contract("A"), contract("B")],
        });
        assert_eq!(print(&program), "contract A {}\n\ncontract B {}");
    }

    #[test]
    fn test_print_is_repeatable() {
        let program = Node::Program(Program {
            license: Some("GPL-3.0".to_string()),
            pragma: Some(pragma_089()),
            imports: vec![bare_import("@a")],
            body: vec![SourceUnitMember::ContractDeclaration(ContractDeclaration {
                name: "Stable".to_string(),
                extends: vec!["Ownable".to_string()],
                body: vec![],
            })],
        });
        assert_eq!(print(&program), print(&program));
    }
}
