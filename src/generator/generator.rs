use std::fmt::Write;

use crate::{
    ast::{
        ast::Node,
        statements::{Document, PropertySet, Rule},
    },
    errors::errors::{Error, ErrorImpl},
};

const INDENT: &str = "  ";

/// Generates CSS text from an evaluated tree.
///
/// Only rules and their declarations are printed; any other node is
/// skipped. Declarations whose value is not a literal are skipped as well.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate(root: &Node) -> Result<String, Error> {
    match root {
        Node::Document(document) => Ok(generate_document(document)),
        other => Err(Error::new(
            ErrorImpl::RootNotDocument {
                found: other.kind_name().to_string(),
            },
            other.get_span().start.clone(),
        )),
    }
}

fn generate_document(document: &Document) -> String {
    let mut output = String::new();

    for child in &document.children {
        if let Node::Rule(rule) = child {
            generate_rule(&mut output, rule);
        }
    }

    output
}

fn generate_rule(output: &mut String, rule: &Rule) {
    let selectors = rule
        .selectors
        .iter()
        .map(|selector| selector.to_string())
        .collect::<Vec<String>>()
        .join(",\n");

    output.push_str(&selectors);
    output.push_str(" {\n");

    for child in &rule.body {
        if let Node::PropertySet(property_set) = child {
            generate_property_set(output, property_set);
        }
    }

    output.push_str("}\n\n");
}

fn generate_property_set(output: &mut String, property_set: &PropertySet) {
    match property_set.expression.as_literal() {
        Some(value) => {
            // Writing to a String never fails.
            let _ = writeln!(output, "{}{}: {};", INDENT, property_set.property, value);
        }
        None => tracing::warn!(
            property = %property_set.property,
            "skipping declaration with an unevaluated value"
        ),
    }
}
