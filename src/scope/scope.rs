use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// A single scope: names bound while it is open.
pub type Frame<T> = HashMap<String, T>;

/// Stack of binding frames, innermost last.
///
/// `T` is whatever a pass tracks per variable: the inferred type while
/// checking, the folded literal while evaluating.
#[derive(Debug)]
pub struct ScopeStack<T> {
    frames: Vec<Frame<T>>,
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        ScopeStack { frames: vec![] }
    }
}

impl<T> ScopeStack<T> {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Opens a new, empty innermost scope.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Closes the innermost scope, returning its bindings.
    pub fn pop(&mut self) -> Option<Frame<T>> {
        self.frames.pop()
    }

    /// Binds `name` in the innermost scope, replacing a binding of the same
    /// name in that scope only.
    pub fn bind(&mut self, name: &str, value: T, position: &Position) -> Result<(), Error> {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.insert(name.to_string(), value);
                Ok(())
            }
            None => Err(Error::new(
                ErrorImpl::NoScope {
                    name: name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    /// Looks `name` up from the innermost scope outwards.
    pub fn resolve(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
