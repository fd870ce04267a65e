use std::fmt::Display;

use crate::Span;

use super::types::ExpressionType;

// LITERALS

/// Literal Values
///
/// Numeric values are whole numbers, as the language has no fractional
/// literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Raw colour text such as `#ff00ff`, reproduced verbatim.
    Color(String),
    Pixel(i64),
    Percentage(i64),
    Scalar(i64),
    Bool(bool),
}

impl Literal {
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Color(_) => ExpressionType::Color,
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Scalar(_) => ExpressionType::Scalar,
            Literal::Bool(_) => ExpressionType::Bool,
        }
    }
}

/// Renders the literal as a CSS value.
impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Color(value) => write!(f, "{}", value),
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Scalar(value) => write!(f, "{}", value),
            Literal::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Literal Expression
/// A literal value together with where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Variable Reference
/// Represents a use of a bound variable, e.g. `LinkColor`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Add => write!(f, "+"),
            OperationKind::Subtract => write!(f, "-"),
            OperationKind::Multiply => write!(f, "*"),
        }
    }
}

/// Operation Expression
/// A binary arithmetic operation, e.g. `Width + 10px`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    VariableRef(VariableRef),
    Operation(Operation),
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(LiteralExpr {
            value,
            span: Span::null(),
        })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::VariableRef(VariableRef {
            name: name.into(),
            span: Span::null(),
        })
    }

    pub fn operation(kind: OperationKind, left: Expr, right: Expr) -> Self {
        Expr::Operation(Operation {
            kind,
            left: Box::new(left),
            right: Box::new(right),
            span: Span::null(),
        })
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::operation(OperationKind::Add, left, right)
    }

    pub fn subtract(left: Expr, right: Expr) -> Self {
        Expr::operation(OperationKind::Subtract, left, right)
    }

    pub fn multiply(left: Expr, right: Expr) -> Self {
        Expr::operation(OperationKind::Multiply, left, right)
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(literal) => &literal.span,
            Expr::VariableRef(variable) => &variable.span,
            Expr::Operation(operation) => &operation.span,
        }
    }

    /// Returns the literal value if the expression is already folded.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::literal(value)
    }
}
