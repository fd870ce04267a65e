//! Lexical scoping shared by the checker and the evaluator.
//!
//! A `ScopeStack` holds one frame per open scope (document, rule,
//! conditional body, alternative body). Lookups walk from the innermost frame
//! outwards, so inner bindings shadow outer ones until their scope closes.

pub mod scope;
