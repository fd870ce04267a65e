use std::rc::Rc;

use thiserror::Error;

use crate::{
    ast::ast::Node,
    checker::checker::check,
    errors::{diagnostics::Diagnostic, errors::Error},
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    transforms::{evaluator::Evaluator, transform::Transform},
};

#[derive(Error, Debug)]
pub enum CompileError {
    /// Lexing, parsing or a malformed tree.
    #[error(transparent)]
    Fatal(#[from] Error),
    /// The checker rejected the document; never empty.
    #[error("checking failed with {} error(s)", .0.len())]
    Diagnostics(Vec<Diagnostic>),
}

/// Runs the passes over a single source file.
///
/// Each stage is also exposed on its own so callers can stop early, e.g.
/// after checking.
pub struct Pipeline {
    file: Rc<String>,
}

impl Pipeline {
    pub fn new(file_name: impl Into<String>) -> Self {
        Pipeline {
            file: Rc::new(file_name.into()),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file
    }

    pub fn parse(&self, source: &str) -> Result<Node, Error> {
        let tokens = tokenize(source, Some(self.file.to_string()))?;
        parse(tokens, Rc::clone(&self.file))
    }

    pub fn check(&self, root: &Node) -> Result<Vec<Diagnostic>, Error> {
        check(root)
    }

    /// Runs the tree transformations in order. The tree must have passed
    /// checking.
    pub fn transform(&self, root: &mut Node) -> Result<(), Error> {
        let mut transforms: Vec<Box<dyn Transform>> = vec![Box::new(Evaluator::new())];

        for transform in transforms.iter_mut() {
            transform.apply(root)?;
        }

        Ok(())
    }

    pub fn generate(&self, root: &Node) -> Result<String, Error> {
        generate(root)
    }

    /// Compiles `source` to CSS. The evaluator only runs when checking
    /// reported nothing.
    #[tracing::instrument(level = "info", skip_all, fields(file = %self.file))]
    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        let mut root = self.parse(source)?;

        let diagnostics = self.check(&root)?;
        if !diagnostics.is_empty() {
            tracing::info!(count = diagnostics.len(), "checking reported errors");
            return Err(CompileError::Diagnostics(diagnostics));
        }

        self.transform(&mut root)?;
        Ok(self.generate(&root)?)
    }
}
