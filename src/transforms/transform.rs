use crate::{ast::ast::Node, errors::errors::Error};

/// A pass that rewrites a tree in place.
pub trait Transform {
    fn apply(&mut self, root: &mut Node) -> Result<(), Error>;
}
