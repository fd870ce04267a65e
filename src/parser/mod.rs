//! Parser module building the stylesheet tree from tokens.
//!
//! Statements (bindings, rules, declarations and if clauses) are dispatched
//! on their first token through a lookup table. Expressions use a Pratt
//! parser: NUD (null denotation) handlers for literals and variables, LED
//! (left denotation) handlers for the arithmetic operators, and binding
//! powers for precedence.
//!
//! Parsing stops at the first syntax error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
