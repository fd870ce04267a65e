//! Stylesheet text generation.
//!
//! Prints a fully evaluated tree as plain CSS.

pub mod generator;

#[cfg(test)]
mod tests;
