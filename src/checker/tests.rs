//! Unit tests for the checker.
//!
//! Trees are built by hand so that shapes the parser never produces
//! (misplaced nodes, non-document roots) are covered as well.

use pretty_assertions::assert_eq;

use crate::ast::{
    ast::{Node, NodePath},
    expressions::{Expr, Literal},
    statements::{Alternative, Conditional, Document, PropertySet, Rule, Selector, VariableBinding},
};

use super::checker::check;

fn document(children: Vec<Node>) -> Node {
    Document::new(children).into()
}

fn rule(selector: &str, body: Vec<Node>) -> Node {
    Rule::new(vec![Selector::new(selector)], body).into()
}

fn set(property: &str, expression: Expr) -> Node {
    PropertySet::new(property, expression).into()
}

fn bind(name: &str, expression: Expr) -> Node {
    VariableBinding::new(name, expression).into()
}

fn messages(root: &Node) -> Vec<String> {
    check(root)
        .unwrap()
        .iter()
        .map(|diagnostic| diagnostic.message().to_string())
        .collect()
}

fn px(value: i64) -> Expr {
    Literal::Pixel(value).into()
}

fn color(value: &str) -> Expr {
    Literal::Color(value.to_string()).into()
}

#[test]
fn test_valid_document_has_no_diagnostics() {
    let root = document(vec![
        bind("LinkColor", color("#ff0000")),
        bind("ParWidth", px(500)),
        rule(
            "p",
            vec![
                set("background-color", color("#ffffff")),
                set("width", Expr::variable("ParWidth")),
                set("height", Expr::add(px(10), px(20))),
            ],
        ),
        rule("a", vec![set("color", Expr::variable("LinkColor"))]),
    ]);

    assert!(check(&root).unwrap().is_empty());
}

#[test]
fn test_root_must_be_document() {
    let root = rule("p", vec![]);
    let error = check(&root).unwrap_err();

    assert_eq!(error.get_error_name(), "RootNotDocument");
}

#[test]
fn test_document_level_property_set() {
    let root = document(vec![set("color", color("#ffffff"))]);

    assert_eq!(
        messages(&root),
        vec!["only variable bindings and rules allowed at document level"]
    );
}

#[test]
fn test_nested_rule_rejected() {
    let root = document(vec![rule("p", vec![rule("a", vec![])])]);

    assert_eq!(messages(&root), vec!["nesting of rules is not supported"]);
}

#[test]
fn test_alternative_in_rule_body_rejected() {
    let root = document(vec![rule("p", vec![Alternative::new(vec![]).into()])]);

    assert_eq!(
        messages(&root),
        vec!["rule body can only contain declarations, bindings, and conditionals"]
    );
}

#[test]
fn test_unknown_property() {
    let root = document(vec![rule("p", vec![set("margin", px(10))])]);

    assert_eq!(messages(&root), vec!["unknown property name"]);
}

#[test]
fn test_property_type_mismatch() {
    let root = document(vec![rule(
        "p",
        vec![
            set("color", px(10)),
            set("width", color("#ffffff")),
            set("height", Literal::Percentage(50).into()),
        ],
    )]);

    assert_eq!(
        messages(&root),
        vec![
            "only color expressions are allowed for color",
            "only pixel and percentage expressions are allowed for width",
            "only pixel expressions are allowed for height",
        ]
    );
}

#[test]
fn test_width_accepts_percentage() {
    let root = document(vec![rule("p", vec![set("width", Literal::Percentage(50).into())])]);

    assert!(messages(&root).is_empty());
}

#[test]
fn test_undefined_variable() {
    let root = document(vec![rule("p", vec![set("width", Expr::variable("Missing"))])]);

    assert_eq!(
        messages(&root),
        vec!["variable 'Missing' is not defined in current scope"]
    );
}

#[test]
fn test_mismatched_add_reports_once_on_operation() {
    let root = document(vec![rule(
        "p",
        vec![set("width", Expr::add(px(10), Literal::Percentage(5).into()))],
    )]);

    let diagnostics = check(&root).unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message(),
        "operation can only be used with expressions of the same type"
    );
    assert_eq!(diagnostics[0].path(), &NodePath::root().child(0).child(0).child(0));
}

#[test]
fn test_mismatched_subtract() {
    let root = document(vec![rule(
        "p",
        vec![set("width", Expr::subtract(Literal::Scalar(2).into(), px(5)))],
    )]);

    assert_eq!(
        messages(&root),
        vec!["operation can only be used with expressions of the same type"]
    );
}

#[test]
fn test_multiply_two_pixels() {
    let root = document(vec![rule("p", vec![set("width", Expr::multiply(px(10), px(10)))])]);

    assert_eq!(
        messages(&root),
        vec!["multiply operation can only be used with a scalar and a non-scalar expression or scalar and scalar"]
    );
}

#[test]
fn test_multiply_takes_non_scalar_type() {
    let root = document(vec![rule(
        "p",
        vec![
            set("width", Expr::multiply(Literal::Scalar(2).into(), px(10))),
            set("height", Expr::multiply(px(10), Literal::Scalar(3).into())),
            set(
                "width",
                Expr::multiply(
                    Expr::multiply(Literal::Scalar(2).into(), Literal::Scalar(3).into()),
                    Literal::Percentage(10).into(),
                ),
            ),
        ],
    )]);

    assert!(messages(&root).is_empty());
}

#[test]
fn test_color_literal_in_operation() {
    let root = document(vec![rule(
        "p",
        vec![set("color", Expr::add(color("#ffffff"), px(10)))],
    )]);

    let diagnostics = check(&root).unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message(),
        "color/boolean literals are not allowed in operations"
    );
    // Reported on the offending operand.
    assert_eq!(
        diagnostics[0].path(),
        &NodePath::root().child(0).child(0).child(0).child(0)
    );
}

#[test]
fn test_boolean_literal_in_operation() {
    let root = document(vec![bind(
        "Flag",
        Expr::multiply(Literal::Scalar(2).into(), Literal::Bool(true).into()),
    )]);

    assert_eq!(
        messages(&root),
        vec!["color/boolean literals are not allowed in operations"]
    );
}

#[test]
fn test_operand_check_short_circuits() {
    // The undefined variable on the right is never looked at.
    let root = document(vec![rule(
        "p",
        vec![set("width", Expr::add(color("#ffffff"), Expr::variable("Missing")))],
    )]);

    assert_eq!(messages(&root).len(), 1);
}

#[test]
fn test_conditional_with_boolean_literal() {
    let root = document(vec![rule(
        "p",
        vec![Conditional::new(
            Literal::Bool(true).into(),
            vec![set("color", color("#ffffff"))],
            Some(Alternative::new(vec![set("color", color("#000000"))])),
        )
        .into()],
    )]);

    assert!(messages(&root).is_empty());
}

#[test]
fn test_conditional_with_boolean_variable() {
    let root = document(vec![
        bind("UseColor", Literal::Bool(false).into()),
        rule(
            "p",
            vec![Conditional::new(Expr::variable("UseColor"), vec![], None).into()],
        ),
    ]);

    assert!(messages(&root).is_empty());
}

#[test]
fn test_conditional_with_non_boolean_variable() {
    let root = document(vec![
        bind("Width", px(10)),
        rule(
            "p",
            vec![Conditional::new(Expr::variable("Width"), vec![], None).into()],
        ),
    ]);

    assert_eq!(
        messages(&root),
        vec!["if clause can only contain boolean expressions"]
    );
}

#[test]
fn test_conditional_with_undefined_variable_reports_twice() {
    let root = document(vec![rule(
        "p",
        vec![Conditional::new(Expr::variable("Missing"), vec![], None).into()],
    )]);

    assert_eq!(
        messages(&root),
        vec![
            "variable 'Missing' is not defined in current scope",
            "if clause can only contain boolean expressions",
        ]
    );
}

#[test]
fn test_conditional_with_scalar_literal() {
    let root = document(vec![rule(
        "p",
        vec![Conditional::new(Literal::Scalar(1).into(), vec![], None).into()],
    )]);

    assert_eq!(
        messages(&root),
        vec!["if clause can only contain boolean expressions"]
    );
}

#[test]
fn test_rule_inside_conditional_rejected() {
    let root = document(vec![rule(
        "p",
        vec![Conditional::new(Literal::Bool(true).into(), vec![rule("a", vec![])], None).into()],
    )]);

    assert_eq!(messages(&root), vec!["nesting of rules is not supported"]);
}

#[test]
fn test_alternative_accepted_in_conditional_body_only() {
    let root = document(vec![rule(
        "p",
        vec![Conditional::new(
            Literal::Bool(true).into(),
            vec![Alternative::new(vec![]).into()],
            Some(Alternative::new(vec![Alternative::new(vec![]).into()])),
        )
        .into()],
    )]);

    assert_eq!(
        messages(&root),
        vec!["alternative body can only contain declarations, bindings and conditionals"]
    );
}

#[test]
fn test_variable_not_visible_outside_rule() {
    let root = document(vec![
        rule("p", vec![bind("Local", px(10)), set("width", Expr::variable("Local"))]),
        rule("a", vec![set("width", Expr::variable("Local"))]),
    ]);

    assert_eq!(
        messages(&root),
        vec!["variable 'Local' is not defined in current scope"]
    );
}

#[test]
fn test_variable_not_visible_outside_conditional() {
    let root = document(vec![rule(
        "p",
        vec![
            Conditional::new(
                Literal::Bool(true).into(),
                vec![bind("Inner", px(10))],
                Some(Alternative::new(vec![set("width", Expr::variable("Inner"))])),
            )
            .into(),
            set("width", Expr::variable("Inner")),
        ],
    )]);

    assert_eq!(
        messages(&root),
        vec![
            "variable 'Inner' is not defined in current scope",
            "variable 'Inner' is not defined in current scope",
        ]
    );
}

#[test]
fn test_shadowing_changes_type_only_inside_scope() {
    let root = document(vec![
        bind("Size", px(10)),
        rule(
            "p",
            vec![
                bind("Size", Literal::Percentage(50).into()),
                // height only takes pixels
                set("height", Expr::variable("Size")),
            ],
        ),
        rule("a", vec![set("height", Expr::variable("Size"))]),
    ]);

    assert_eq!(
        messages(&root),
        vec!["only pixel expressions are allowed for height"]
    );
}

#[test]
fn test_checker_continues_after_errors() {
    let root = document(vec![
        rule("p", vec![set("width", Expr::variable("A"))]),
        set("color", color("#ffffff")),
        rule("a", vec![set("margin", px(1)), set("width", Expr::variable("B"))]),
    ]);

    assert_eq!(
        messages(&root),
        vec![
            "variable 'A' is not defined in current scope",
            "only variable bindings and rules allowed at document level",
            "unknown property name",
            "variable 'B' is not defined in current scope",
        ]
    );
}

#[test]
fn test_diagnostics_in_pre_order() {
    // condition, then-branch, else-branch
    let root = document(vec![rule(
        "p",
        vec![Conditional::new(
            Expr::variable("Missing"),
            vec![set("height", Literal::Percentage(10).into())],
            Some(Alternative::new(vec![set("margin", px(1))])),
        )
        .into()],
    )]);

    let diagnostics = check(&root).unwrap();
    let paths: Vec<&NodePath> = diagnostics.iter().map(|d| d.path()).collect();
    let conditional = NodePath::root().child(0).child(0);

    assert_eq!(
        paths,
        vec![
            &conditional.child(0),
            &conditional.child(0),
            &conditional.child(1),
            &conditional.child(2).child(0),
        ]
    );
}
