//! Helper macros for the lexer.
//!
//! - `MK_TOKEN!` builds a `Token`
//! - `MK_DEFAULT_HANDLER!` builds a handler for a fixed punctuation token
//! - `MK_MATCH_HANDLER!` builds a handler that keeps the matched text

/// Creates a Token instance.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Pixel, "10px".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler for a token whose text is always `$value`.
///
/// ```ignore
/// pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: String| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}

/// Creates a handler that emits a `$kind` token carrying the matched text.
#[macro_export]
macro_rules! MK_MATCH_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: String| {
            let span = lexer.span_of(matched.len());
            let length = matched.len();
            lexer.push(MK_TOKEN!($kind, matched, span));
            lexer.advance_n(length);
        }
    };
}
