use std::mem;

use crate::{
    ast::{
        ast::Node,
        expressions::{Expr, Literal, LiteralExpr, OperationKind},
        statements::{Conditional, Document, PropertySet, Rule, VariableBinding},
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope::ScopeStack,
};

use super::transform::Transform;

/// Constant folding and desugaring.
///
/// Expects a tree the checker reported no diagnostics for. Afterwards every
/// declaration holds a literal and no bindings or conditionals remain.
#[derive(Debug, Default)]
pub struct Evaluator {
    variable_values: ScopeStack<Literal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::default()
    }

    fn evaluate_document(&mut self, document: &mut Document) -> Result<(), Error> {
        self.variable_values.push();

        let mut children = Vec::with_capacity(document.children.len());
        for child in mem::take(&mut document.children) {
            match child {
                Node::VariableBinding(binding) => self.evaluate_variable_binding(&binding)?,
                Node::Rule(mut rule) => {
                    self.evaluate_rule(&mut rule)?;
                    children.push(Node::Rule(rule));
                }
                other => tracing::warn!(kind = other.kind_name(), "dropping misplaced node"),
            }
        }
        document.children = children;

        self.variable_values.pop();
        Ok(())
    }

    fn evaluate_rule(&mut self, rule: &mut Rule) -> Result<(), Error> {
        self.variable_values.push();
        let body = self.evaluate_body(mem::take(&mut rule.body));
        self.variable_values.pop();

        rule.body = body?;
        Ok(())
    }

    /// Rewrites a body into a new sequence with conditionals replaced by the
    /// chosen branch and bindings removed.
    fn evaluate_body(&mut self, body: Vec<Node>) -> Result<Vec<Node>, Error> {
        let mut evaluated = Vec::with_capacity(body.len());
        for child in body {
            evaluated.extend(self.evaluate_body_item(child)?);
        }
        Ok(evaluated)
    }

    fn evaluate_body_item(&mut self, node: Node) -> Result<Vec<Node>, Error> {
        match node {
            Node::PropertySet(mut property_set) => {
                self.evaluate_property_set(&mut property_set);
                Ok(vec![Node::PropertySet(property_set)])
            }
            Node::VariableBinding(binding) => {
                self.evaluate_variable_binding(&binding)?;
                Ok(vec![])
            }
            Node::Conditional(conditional) => self.evaluate_conditional(conditional),
            other => {
                tracing::warn!(kind = other.kind_name(), "dropping misplaced node");
                Ok(vec![])
            }
        }
    }

    fn evaluate_property_set(&mut self, property_set: &mut PropertySet) {
        match self.evaluate_expression(&property_set.expression) {
            Some(value) => {
                property_set.expression = Expr::Literal(LiteralExpr {
                    value,
                    span: property_set.expression.get_span().clone(),
                });
            }
            None => tracing::warn!(
                property = %property_set.property,
                "declaration value does not fold to a literal"
            ),
        }
    }

    fn evaluate_variable_binding(&mut self, binding: &VariableBinding) -> Result<(), Error> {
        match self.evaluate_expression(&binding.expression) {
            Some(value) => self
                .variable_values
                .bind(&binding.name, value, &binding.span.start),
            None => {
                tracing::warn!(name = %binding.name, "binding does not fold to a literal");
                Ok(())
            }
        }
    }

    fn evaluate_conditional(&mut self, conditional: Conditional) -> Result<Vec<Node>, Error> {
        match self.evaluate_expression(&conditional.condition) {
            Some(Literal::Bool(true)) => self.evaluate_branch(conditional.body),
            Some(Literal::Bool(false)) => match conditional.alternative {
                Some(alternative) => self.evaluate_branch(alternative.body),
                None => Ok(vec![]),
            },
            other => {
                tracing::warn!(condition = ?other, "condition does not fold to a boolean");
                Ok(vec![])
            }
        }
    }

    fn evaluate_branch(&mut self, body: Vec<Node>) -> Result<Vec<Node>, Error> {
        self.variable_values.push();
        let body = self.evaluate_body(body);
        self.variable_values.pop();
        body
    }

    /// Folds an expression to a literal, or `None` when it cannot be folded.
    pub fn evaluate_expression(&self, expression: &Expr) -> Option<Literal> {
        match expression {
            Expr::Literal(literal) => Some(literal.value.clone()),
            Expr::VariableRef(variable) => self.variable_values.resolve(&variable.name).cloned(),
            Expr::Operation(operation) => {
                let left = self.evaluate_expression(&operation.left)?;
                let right = self.evaluate_expression(&operation.right)?;
                evaluate_operation(operation.kind, left, right)
            }
        }
    }
}

impl Transform for Evaluator {
    #[tracing::instrument(level = "debug", skip_all)]
    fn apply(&mut self, root: &mut Node) -> Result<(), Error> {
        self.variable_values = ScopeStack::new();

        match root {
            Node::Document(document) => self.evaluate_document(document),
            other => Err(Error::new(
                ErrorImpl::RootNotDocument {
                    found: other.kind_name().to_string(),
                },
                other.get_span().start.clone(),
            )),
        }
    }
}

pub fn evaluate_operation(kind: OperationKind, left: Literal, right: Literal) -> Option<Literal> {
    match kind {
        OperationKind::Add => evaluate_additive(left, right, i64::checked_add),
        OperationKind::Subtract => evaluate_additive(left, right, i64::checked_sub),
        OperationKind::Multiply => evaluate_multiply(left, right),
    }
}

fn evaluate_additive(left: Literal, right: Literal, op: fn(i64, i64) -> Option<i64>) -> Option<Literal> {
    match (left, right) {
        (Literal::Pixel(a), Literal::Pixel(b)) => op(a, b).map(Literal::Pixel),
        (Literal::Percentage(a), Literal::Percentage(b)) => op(a, b).map(Literal::Percentage),
        (Literal::Scalar(a), Literal::Scalar(b)) => op(a, b).map(Literal::Scalar),
        _ => None,
    }
}

fn evaluate_multiply(left: Literal, right: Literal) -> Option<Literal> {
    match (left, right) {
        (Literal::Pixel(a), Literal::Scalar(b)) | (Literal::Scalar(b), Literal::Pixel(a)) => {
            a.checked_mul(b).map(Literal::Pixel)
        }
        (Literal::Percentage(a), Literal::Scalar(b)) | (Literal::Scalar(b), Literal::Percentage(a)) => {
            a.checked_mul(b).map(Literal::Percentage)
        }
        (Literal::Scalar(a), Literal::Scalar(b)) => a.checked_mul(b).map(Literal::Scalar),
        _ => None,
    }
}

/// Runs a fresh evaluator over `root`.
pub fn evaluate(root: &mut Node) -> Result<(), Error> {
    Evaluator::new().apply(root)
}
