/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the stylesheet tree
///
/// Submodules:
/// - ast: the `Node` sum type and node paths
/// - expressions: literals, variable references and operations
/// - statements: documents, rules, conditionals and declarations
/// - types: the expression types inferred by the checker
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
