use pretty_assertions::assert_eq;

use crate::ast::{
    ast::Node,
    expressions::{Expr, Literal},
    statements::{Document, PropertySet, Rule, Selector, VariableBinding},
};

use super::generator::generate;

fn document(children: Vec<Node>) -> Node {
    Document::new(children).into()
}

fn rule(selectors: &[&str], body: Vec<Node>) -> Node {
    Rule::new(selectors.iter().map(|s| Selector::new(*s)).collect(), body).into()
}

fn set(property: &str, value: Literal) -> Node {
    PropertySet::new(property, value.into()).into()
}

#[test]
fn test_single_rule() {
    let root = document(vec![rule(
        &[".box"],
        vec![set("color", Literal::Color("#ffffff".to_string()))],
    )]);

    assert_eq!(generate(&root).unwrap(), ".box {\n  color: #ffffff;\n}\n\n");
}

#[test]
fn test_empty_document() {
    assert_eq!(generate(&document(vec![])).unwrap(), "");
}

#[test]
fn test_empty_rule() {
    let root = document(vec![rule(&["p"], vec![])]);

    assert_eq!(generate(&root).unwrap(), "p {\n}\n\n");
}

#[test]
fn test_multiple_selectors() {
    let root = document(vec![rule(
        &["p", ".menu", "#header"],
        vec![set("width", Literal::Pixel(10))],
    )]);

    assert_eq!(
        generate(&root).unwrap(),
        "p,\n.menu,\n#header {\n  width: 10px;\n}\n\n"
    );
}

#[test]
fn test_value_rendering() {
    let root = document(vec![
        rule(
            &["p"],
            vec![
                set("background-color", Literal::Color("#ff00ff".to_string())),
                set("width", Literal::Percentage(50)),
                set("height", Literal::Pixel(-20)),
            ],
        ),
        rule(&["a"], vec![set("width", Literal::Pixel(0))]),
    ]);

    assert_eq!(
        generate(&root).unwrap(),
        "p {\n  background-color: #ff00ff;\n  width: 50%;\n  height: -20px;\n}\n\na {\n  width: 0px;\n}\n\n"
    );
}

#[test]
fn test_non_declarations_ignored() {
    let root = document(vec![
        VariableBinding::new("Width", Literal::Pixel(1).into()).into(),
        rule(
            &["p"],
            vec![
                VariableBinding::new("Inner", Literal::Pixel(1).into()).into(),
                set("width", Literal::Pixel(1)),
                PropertySet::new("height", Expr::variable("Inner")).into(),
            ],
        ),
    ]);

    assert_eq!(generate(&root).unwrap(), "p {\n  width: 1px;\n}\n\n");
}

#[test]
fn test_root_must_be_document() {
    let root = rule(&["p"], vec![]);

    assert_eq!(
        generate(&root).unwrap_err().get_error_name(),
        "RootNotDocument"
    );
}
