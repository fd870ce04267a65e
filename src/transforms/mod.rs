//! Tree transformations run between checking and generation.
//!
//! The evaluator folds every expression to a literal and removes variable
//! bindings and conditionals, leaving a tree the generator can print
//! directly.

pub mod evaluator;
pub mod transform;
