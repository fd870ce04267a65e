use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::{Node, NodePath},
        expressions::{Expr, Literal, Operation, OperationKind, VariableRef},
        statements::{Alternative, Conditional, Document, PropertySet, Rule, VariableBinding},
        types::ExpressionType,
    },
    errors::{
        diagnostics::{Diagnostic, Diagnostics},
        errors::{Error, ErrorImpl},
    },
    scope::scope::ScopeStack,
    Span,
};

lazy_static! {
    /// Types each supported property accepts.
    pub static ref PROPERTY_TYPES: HashMap<&'static str, &'static [ExpressionType]> = {
        let mut map: HashMap<&'static str, &'static [ExpressionType]> = HashMap::new();
        map.insert("background-color", &[ExpressionType::Color]);
        map.insert("color", &[ExpressionType::Color]);
        map.insert("width", &[ExpressionType::Pixel, ExpressionType::Percentage]);
        map.insert("height", &[ExpressionType::Pixel]);
        map
    };
}

/// Which block a body belongs to; decides what may appear in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Rule,
    Conditional,
    Alternative,
}

impl BodyKind {
    fn misplaced_message(&self) -> &'static str {
        match self {
            BodyKind::Rule => "rule body can only contain declarations, bindings, and conditionals",
            BodyKind::Conditional => "conditional body can only contain declarations, bindings, conditionals and alternatives",
            BodyKind::Alternative => "alternative body can only contain declarations, bindings and conditionals",
        }
    }
}

/// Semantic checker.
///
/// Walks the whole tree once, tracking the type of every bound variable in a
/// `ScopeStack`, and reports every problem it finds instead of stopping at
/// the first one.
#[derive(Debug, Default)]
pub struct Checker {
    variable_types: ScopeStack<ExpressionType>,
    diagnostics: Diagnostics,
}

impl Checker {
    pub fn new() -> Self {
        Checker::default()
    }

    /// Checks the tree rooted at `root`.
    ///
    /// Returns the diagnostics in pre-order of the nodes they belong to. The
    /// only fatal condition is a root that is not a document.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check(mut self, root: &Node) -> Result<Vec<Diagnostic>, Error> {
        match root {
            Node::Document(document) => self.check_document(document)?,
            other => {
                return Err(Error::new(
                    ErrorImpl::RootNotDocument {
                        found: other.kind_name().to_string(),
                    },
                    other.get_span().start.clone(),
                ))
            }
        }

        tracing::debug!(count = self.diagnostics.len(), "checking complete");
        Ok(self.diagnostics.into_sorted())
    }

    fn report(&mut self, path: &NodePath, span: &Span, message: impl Into<String>) {
        self.diagnostics.report(path, span, message);
    }

    fn check_document(&mut self, document: &Document) -> Result<(), Error> {
        self.variable_types.push();

        for (index, child) in document.children.iter().enumerate() {
            let path = NodePath::root().child(index);
            match child {
                Node::VariableBinding(binding) => self.check_variable_binding(binding, &path)?,
                Node::Rule(rule) => self.check_rule(rule, &path)?,
                other => self.report(
                    &path,
                    other.get_span(),
                    "only variable bindings and rules allowed at document level",
                ),
            }
        }

        self.variable_types.pop();
        Ok(())
    }

    fn check_variable_binding(&mut self, binding: &VariableBinding, path: &NodePath) -> Result<(), Error> {
        let expression_type = self.check_expression_type(&binding.expression, &path.child(0));
        self.variable_types
            .bind(&binding.name, expression_type, &binding.span.start)
    }

    fn check_rule(&mut self, rule: &Rule, path: &NodePath) -> Result<(), Error> {
        self.variable_types.push();
        self.check_body(&rule.body, path, 0, BodyKind::Rule)?;
        self.variable_types.pop();
        Ok(())
    }

    /// Checks body items; `offset` is the child index of the first item
    /// within the owning node.
    fn check_body(&mut self, body: &[Node], parent: &NodePath, offset: usize, kind: BodyKind) -> Result<(), Error> {
        for (index, child) in body.iter().enumerate() {
            let path = parent.child(offset + index);
            match child {
                Node::PropertySet(property_set) => self.check_property_set(property_set, &path),
                Node::VariableBinding(binding) => self.check_variable_binding(binding, &path)?,
                Node::Conditional(conditional) => self.check_conditional(conditional, &path)?,
                Node::Alternative(alternative) if kind == BodyKind::Conditional => {
                    self.check_alternative(alternative, &path)?
                }
                Node::Rule(rule) => self.report(&path, &rule.span, "nesting of rules is not supported"),
                other => self.report(&path, other.get_span(), kind.misplaced_message()),
            }
        }

        Ok(())
    }

    fn check_property_set(&mut self, property_set: &PropertySet, path: &NodePath) {
        let expression_type = self.check_expression_type(&property_set.expression, &path.child(0));

        // Already reported where the type was lost.
        if expression_type == ExpressionType::Undefined {
            return;
        }

        let property = property_set.property.as_str();
        match PROPERTY_TYPES.get(property) {
            None => self.report(path, &property_set.span, "unknown property name"),
            Some(allowed) if !allowed.contains(&expression_type) => {
                let allowed = allowed
                    .iter()
                    .map(|ty| ty.to_string())
                    .collect::<Vec<String>>()
                    .join(" and ");
                self.report(
                    path,
                    &property_set.span,
                    format!("only {} expressions are allowed for {}", allowed, property),
                );
            }
            Some(_) => {}
        }
    }

    fn check_expression_type(&mut self, expression: &Expr, path: &NodePath) -> ExpressionType {
        match expression {
            Expr::Literal(literal) => literal.value.get_type(),
            Expr::VariableRef(variable) => self.check_variable_reference_type(variable, path),
            Expr::Operation(operation) => self.check_operation_type(operation, path),
        }
    }

    fn check_variable_reference_type(&mut self, variable: &VariableRef, path: &NodePath) -> ExpressionType {
        if let Some(expression_type) = self.variable_types.resolve(&variable.name) {
            return *expression_type;
        }

        self.report(
            path,
            &variable.span,
            format!("variable '{}' is not defined in current scope", variable.name),
        );
        ExpressionType::Undefined
    }

    fn check_operation_type(&mut self, operation: &Operation, path: &NodePath) -> ExpressionType {
        for (index, operand) in [&operation.left, &operation.right].into_iter().enumerate() {
            if let Expr::Literal(literal) = &**operand {
                if matches!(literal.value, Literal::Color(_) | Literal::Bool(_)) {
                    self.report(
                        &path.child(index),
                        &literal.span,
                        "color/boolean literals are not allowed in operations",
                    );
                    return ExpressionType::Undefined;
                }
            }
        }

        let left = self.check_expression_type(&operation.left, &path.child(0));
        let right = self.check_expression_type(&operation.right, &path.child(1));

        match operation.kind {
            OperationKind::Add | OperationKind::Subtract => {
                if left == right {
                    left
                } else {
                    self.report(
                        path,
                        &operation.span,
                        "operation can only be used with expressions of the same type",
                    );
                    ExpressionType::Undefined
                }
            }
            OperationKind::Multiply => {
                if left == ExpressionType::Scalar {
                    right
                } else if right == ExpressionType::Scalar {
                    left
                } else {
                    self.report(
                        path,
                        &operation.span,
                        "multiply operation can only be used with a scalar and a non-scalar expression or scalar and scalar",
                    );
                    ExpressionType::Undefined
                }
            }
        }
    }

    fn check_conditional(&mut self, conditional: &Conditional, path: &NodePath) -> Result<(), Error> {
        self.variable_types.push();

        let condition_path = path.child(0);
        let is_boolean = match &conditional.condition {
            Expr::Literal(literal) => matches!(literal.value, Literal::Bool(_)),
            Expr::VariableRef(variable) => {
                self.check_variable_reference_type(variable, &condition_path) == ExpressionType::Bool
            }
            Expr::Operation(_) => false,
        };

        if !is_boolean {
            self.report(
                &condition_path,
                conditional.condition.get_span(),
                "if clause can only contain boolean expressions",
            );
        }

        self.check_body(&conditional.body, path, 1, BodyKind::Conditional)?;
        self.variable_types.pop();

        // Bindings made in the then-branch are not visible in the else-branch.
        if let Some(alternative) = &conditional.alternative {
            self.check_alternative(alternative, &path.child(1 + conditional.body.len()))?;
        }

        Ok(())
    }

    fn check_alternative(&mut self, alternative: &Alternative, path: &NodePath) -> Result<(), Error> {
        self.variable_types.push();
        self.check_body(&alternative.body, path, 0, BodyKind::Alternative)?;
        self.variable_types.pop();
        Ok(())
    }
}

/// Checks `root` with a fresh checker.
pub fn check(root: &Node) -> Result<Vec<Diagnostic>, Error> {
    Checker::new().check(root)
}
