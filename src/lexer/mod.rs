//! Lexical analysis module.
//!
//! Converts ICSS source text into a stream of tokens for the parser:
//!
//! - Literals: colours, pixel and percentage sizes, scalars and booleans
//! - Selectors: `.class`, `#id` and tag names
//! - Variable names, keywords and punctuation
//! - Whitespace and comments are skipped

pub mod lexer;
pub mod tokens;
