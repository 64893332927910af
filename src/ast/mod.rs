/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Module, space, type and member declarations
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
///
/// Every node family is a closed enum; consumers match exhaustively.
pub mod ast;
pub mod expressions;
pub mod statements;
