use std::fmt::Display;

use crate::Span;

use super::{ast::Node, expressions::Expr};

/// The root of a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
    pub span: Span,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Document {
            children,
            span: Span::null(),
        }
    }
}

/// A selector exactly as written: `p`, `.menu` or `#header`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub text: String,
    pub span: Span,
}

impl Selector {
    pub fn new(text: impl Into<String>) -> Self {
        Selector {
            text: text.into(),
            span: Span::null(),
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub body: Vec<Node>,
    pub span: Span,
}

impl Rule {
    pub fn new(selectors: Vec<Selector>, body: Vec<Node>) -> Self {
        Rule {
            selectors,
            body,
            span: Span::null(),
        }
    }
}

/// `if [condition] { body } else { alternative }`
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Expr,
    pub body: Vec<Node>,
    pub alternative: Option<Alternative>,
    pub span: Span,
}

impl Conditional {
    pub fn new(condition: Expr, body: Vec<Node>, alternative: Option<Alternative>) -> Self {
        Conditional {
            condition,
            body,
            alternative,
            span: Span::null(),
        }
    }
}

/// The `else` half of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub body: Vec<Node>,
    pub span: Span,
}

impl Alternative {
    pub fn new(body: Vec<Node>) -> Self {
        Alternative {
            body,
            span: Span::null(),
        }
    }
}

/// A declaration such as `width: 10px;`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySet {
    pub property: String,
    pub expression: Expr,
    pub span: Span,
}

impl PropertySet {
    pub fn new(property: impl Into<String>, expression: Expr) -> Self {
        PropertySet {
            property: property.into(),
            expression,
            span: Span::null(),
        }
    }
}

/// `Name := expression;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableBinding {
    pub name: String,
    pub expression: Expr,
    pub span: Span,
}

impl VariableBinding {
    pub fn new(name: impl Into<String>, expression: Expr) -> Self {
        VariableBinding {
            name: name.into(),
            expression,
            span: Span::null(),
        }
    }
}
