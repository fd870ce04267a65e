//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Fatal error structures with source position information
//! - Specific error variants for lexing, parsing and structural faults
//! - Non-fatal semantic diagnostics collected by the checker
//! - Helpful error messages and suggestions

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
