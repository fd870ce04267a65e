use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_MATCH_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the current position.
pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        // Every pattern is anchored to the current position.
        regex: Regex::new(&format!("^(?:{})", regex)).unwrap(),
        handler,
    }
}

lazy_static! {
    /// Tried in order; the first pattern that matches wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"\s+", skip_handler),
        pattern(r"//[^\n]*", skip_handler),
        pattern(r"(?s)/\*.*?\*/", skip_handler),
        pattern(r"#[A-Za-z0-9-]+", hash_handler),
        pattern(r"\.[a-z0-9-]+", MK_MATCH_HANDLER!(TokenKind::ClassSelector)),
        pattern(r"[0-9]+px", MK_MATCH_HANDLER!(TokenKind::Pixel)),
        pattern(r"[0-9]+%", MK_MATCH_HANDLER!(TokenKind::Percentage)),
        pattern(r"[0-9]+", MK_MATCH_HANDLER!(TokenKind::Scalar)),
        pattern(r"[a-z][a-z0-9-]*", symbol_handler),
        pattern(r"[A-Z][A-Za-z0-9_]*", symbol_handler),
        pattern(r":=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, ":=")),
        pattern(r":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(r";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(r",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(r"\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern(r"\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern(r"\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern(r"\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern(r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern(r"\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("<input>")));

        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `length` bytes.
    pub fn span_of(&self, length: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + length) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) {
    lexer.advance_n(matched.len());
}

/// `#` followed by exactly six hex digits is a colour, anything else an id.
fn hash_handler(lexer: &mut Lexer, matched: String) {
    let digits = &matched[1..];
    let kind = if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        TokenKind::Color
    } else {
        TokenKind::IdSelector
    };

    let span = lexer.span_of(matched.len());
    let length = matched.len();
    lexer.push(MK_TOKEN!(kind, matched, span));
    lexer.advance_n(length);
}

fn symbol_handler(lexer: &mut Lexer, matched: String) {
    let kind = match RESERVED_LOOKUP.get(matched.as_str()) {
        Some(kind) => *kind,
        None if matched.starts_with(|c: char| c.is_ascii_uppercase()) => TokenKind::CapitalIdent,
        None => TokenKind::LowerIdent,
    };

    let span = lexer.span_of(matched.len());
    let length = matched.len();
    lexer.push(MK_TOKEN!(kind, matched, span));
    lexer.advance_n(length);
}

/// Splits `source` into tokens, always ending with an `EOF` token.
#[tracing::instrument(level = "debug", skip(source))]
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.as_str().to_string()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                let token = lex.remainder().chars().next().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: token.to_string(),
                    },
                    lex.position(),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    tracing::trace!(count = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
