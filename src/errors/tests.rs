//! Unit tests for error handling.
//!
//! This module contains tests for error types, error reporting and the
//! diagnostic sink.

use crate::ast::ast::NodePath;
use crate::errors::diagnostics::Diagnostics;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{Position, Span};
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.icss".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.icss".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "width".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.icss");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999px".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(error.get_tip().to_string().contains("99999999999999999999px"));
}

#[test]
fn test_root_not_document_error() {
    let error = Error::new(
        ErrorImpl::RootNotDocument {
            found: "rule".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "RootNotDocument");
    assert_eq!(error.to_string(), "root node should be a document, found rule");
}

#[test]
fn test_no_scope_error() {
    let error = Error::new(
        ErrorImpl::NoScope {
            name: "Width".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NoScope");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_display() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(&NodePath::root().child(0), &Span::null(), "unknown property name");

    let sorted = diagnostics.into_sorted();
    assert_eq!(sorted[0].to_string(), "ERROR: unknown property name");
    assert_eq!(sorted[0].message(), "unknown property name");
}

#[test]
fn test_diagnostics_sorted_in_pre_order() {
    let mut diagnostics = Diagnostics::new();
    let rule = NodePath::root().child(1);
    let declaration = rule.child(0);
    let operand = declaration.child(0).child(1);

    diagnostics.report(&operand, &Span::null(), "operand");
    diagnostics.report(&declaration, &Span::null(), "declaration");
    diagnostics.report(&NodePath::root().child(2), &Span::null(), "later sibling");
    diagnostics.report(&NodePath::root().child(0), &Span::null(), "earlier sibling");
    diagnostics.report(&declaration, &Span::null(), "declaration again");

    assert_eq!(diagnostics.len(), 5);

    let messages: Vec<String> = diagnostics
        .into_sorted()
        .iter()
        .map(|d| d.message().to_string())
        .collect();

    assert_eq!(
        messages,
        vec![
            "earlier sibling",
            "declaration",
            "declaration again",
            "operand",
            "later sibling",
        ]
    );
}
