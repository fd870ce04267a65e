use crate::{
    ast::{
        ast::Node,
        statements::{Alternative, Conditional, PropertySet, Rule, Selector, VariableBinding},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Position, Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected_token_detailed(
            "expected a variable binding, rule, declaration or if clause",
        )),
    }
}

/// `Name := expression;`
pub fn parse_variable_binding_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let name_token = parser.expect(TokenKind::CapitalIdent)?;

    let error = parser.unexpected_token_detailed("expected `:=` after variable name");
    parser.expect_error(TokenKind::AssignmentOperator, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Node::VariableBinding(VariableBinding {
        name: name_token.value,
        expression,
        span: Span {
            start: name_token.span.start,
            end,
        },
    }))
}

/// A lowercase name starts a declaration when followed by a colon and a
/// tag selector otherwise.
pub fn parse_declaration_or_rule_stmt(parser: &mut Parser) -> Result<Node, Error> {
    if parser.peek_kind() == TokenKind::Colon {
        parse_declaration_stmt(parser)
    } else {
        parse_rule_stmt(parser)
    }
}

/// `property: expression;`
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let property_token = parser.expect(TokenKind::LowerIdent)?;
    parser.expect(TokenKind::Colon)?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Node::PropertySet(PropertySet {
        property: property_token.value,
        expression,
        span: Span {
            start: property_token.span.start,
            end,
        },
    }))
}

pub fn parse_rule_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let mut selectors = vec![parse_selector(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        selectors.push(parse_selector(parser)?);
    }

    let start = selectors[0].span.start.clone();
    let (body, end) = parse_block(parser)?;

    Ok(Node::Rule(Rule {
        selectors,
        body,
        span: Span { start, end },
    }))
}

fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    if !parser.current_token().is_one_of_many(&[
        TokenKind::ClassSelector,
        TokenKind::IdSelector,
        TokenKind::Color,
        TokenKind::LowerIdent,
    ]) {
        return Err(parser.unexpected_token_detailed("expected a selector"));
    }

    let token = parser.advance();
    Ok(Selector {
        text: token.value.clone(),
        span: token.span.clone(),
    })
}

/// `if [condition] { body } else { body }`
pub fn parse_conditional_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let error = parser.unexpected_token_detailed("expected `[` after `if`");
    parser.expect_error(TokenKind::OpenBracket, Some(error))?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    let (body, mut end) = parse_block(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        let else_start = parser.advance().span.start.clone();
        let (else_body, else_end) = parse_block(parser)?;
        end = else_end.clone();

        Some(Alternative {
            body: else_body,
            span: Span {
                start: else_start,
                end: else_end,
            },
        })
    } else {
        None
    };

    Ok(Node::Conditional(Conditional {
        condition,
        body,
        alternative,
        span: Span { start, end },
    }))
}

/// Parses `{ ... }`, returning the items and the end of the closing brace.
fn parse_block(parser: &mut Parser) -> Result<(Vec<Node>, Position), Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && !parser.at_eof() {
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;
    Ok((body, end))
}
