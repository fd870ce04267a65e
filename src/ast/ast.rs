use crate::Span;

use super::statements::{Alternative, Conditional, Document, PropertySet, Rule, VariableBinding};

/// Node Kinds
///
/// Every structural element of a stylesheet. Bodies hold `Node`s rather than
/// narrower types so the checker can report misplaced elements instead of the
/// tree refusing to represent them.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document(Document),
    Rule(Rule),
    Conditional(Conditional),
    Alternative(Alternative),
    PropertySet(PropertySet),
    VariableBinding(VariableBinding),
}

impl Node {
    /// Returns the span of the node.
    pub fn get_span(&self) -> &Span {
        match self {
            Node::Document(document) => &document.span,
            Node::Rule(rule) => &rule.span,
            Node::Conditional(conditional) => &conditional.span,
            Node::Alternative(alternative) => &alternative.span,
            Node::PropertySet(property_set) => &property_set.span,
            Node::VariableBinding(binding) => &binding.span,
        }
    }

    /// Human readable name of the node kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Rule(_) => "rule",
            Node::Conditional(_) => "conditional",
            Node::Alternative(_) => "alternative",
            Node::PropertySet(_) => "property set",
            Node::VariableBinding(_) => "variable binding",
        }
    }
}

impl From<Document> for Node {
    fn from(document: Document) -> Self {
        Node::Document(document)
    }
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

impl From<Conditional> for Node {
    fn from(conditional: Conditional) -> Self {
        Node::Conditional(conditional)
    }
}

impl From<Alternative> for Node {
    fn from(alternative: Alternative) -> Self {
        Node::Alternative(alternative)
    }
}

impl From<PropertySet> for Node {
    fn from(property_set: PropertySet) -> Self {
        Node::PropertySet(property_set)
    }
}

impl From<VariableBinding> for Node {
    fn from(binding: VariableBinding) -> Self {
        Node::VariableBinding(binding)
    }
}

/// Node Path
///
/// Identifies a node by the child indices leading to it from the root.
/// Ordering is lexicographic with a prefix first, which is pre-order.
///
/// Children are numbered per node kind:
/// - document: its children
/// - rule: its body
/// - conditional: the condition at 0, body from 1, then the alternative
/// - alternative: its body
/// - property set and variable binding: the expression at 0
/// - operation: left at 0, right at 1
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(vec![])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
