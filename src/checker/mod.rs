//! Semantic checking module.
//!
//! This module validates a parsed stylesheet before it is evaluated:
//!
//! - Inferring the type of every expression
//! - Resolving variable references through nested scopes
//! - Checking operand types of arithmetic operations
//! - Matching declaration values against the property they set
//! - Rejecting misplaced nodes such as nested rules
//!
//! Problems are collected as diagnostics rather than returned as errors, so
//! a single run reports everything wrong with a document.

pub mod checker;

#[cfg(test)]
mod tests;
