use crate::{
    ast::expressions::{Expr, Literal, LiteralExpr, Operation, OperationKind, VariableRef},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = match parser.get_nud_lookup().get(&parser.current_token_kind()).copied() {
        Some(nud) => nud,
        None => return Err(parser.unexpected_token_detailed("expected an expression")),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, it takes `left` as its lhs
    loop {
        let kind = parser.current_token_kind();
        let operator_bp = *parser.get_bp_lookup().get(&kind).unwrap_or(&BindingPower::Default);
        if operator_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&kind).copied() {
            Some(led) => led,
            None => return Err(parser.unexpected_token()),
        };

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Pixel => Literal::Pixel(parse_number(parser, token.value.trim_end_matches("px"))?),
        TokenKind::Percentage => Literal::Percentage(parse_number(parser, token.value.trim_end_matches('%'))?),
        TokenKind::Scalar => Literal::Scalar(parse_number(parser, &token.value)?),
        TokenKind::Color => Literal::Color(token.value.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::CapitalIdent => {
            parser.advance();
            return Ok(Expr::VariableRef(VariableRef {
                name: token.value,
                span: token.span,
            }));
        }
        _ => return Err(parser.unexpected_token()),
    };

    parser.advance();
    Ok(Expr::Literal(LiteralExpr {
        value,
        span: token.span,
    }))
}

fn parse_number(parser: &Parser, digits: &str) -> Result<i64, Error> {
    digits.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let kind = match operator_token.kind {
        TokenKind::Plus => OperationKind::Add,
        TokenKind::Minus => OperationKind::Subtract,
        TokenKind::Star => OperationKind::Multiply,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Operation(Operation {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        kind,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
