#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::{
    diagnostics::Diagnostic,
    errors::{Error, ErrorTip},
};

pub mod ast;
pub mod checker;
pub mod errors;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod pipeline;
pub mod scope;
pub mod transforms;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Spans are source metadata: two trees that only differ in where they were
/// parsed from compare equal.
impl PartialEq for Span {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line, or `None` when the offset lies past the end
/// of the source.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = "Hello, world!\nThis is a test file.\nIt has multiple lines.\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 66).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
    }

    #[test]
    fn test_format_excerpt_points_at_column() {
        let source = "p {\n  width: Foo;\n}\n";
        let excerpt = super::format_excerpt(source, "test.icss", 13, "ERROR: oops");

        assert_eq!(
            excerpt,
            "ERROR: oops\n-> test.icss\n  |\n2 | width: Foo;\n  | -------^\n"
        );
    }
}

/// Renders `headline` followed by the source line containing `position`
/// and a marker under the offending column.
///
/// ```text
/// ERROR: variable 'Foo' is not defined in current scope
/// -> style.icss
///   |
/// 2 | width: Foo;
///   | -------^
/// ```
pub fn format_excerpt(source: &str, file: &str, position: u32, headline: &str) -> String {
    let mut output = format!("{}\n-> {}\n", headline, file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

/// Formats a fatal error the way the command line reports it.
pub fn display_error(error: &Error, source: &str) -> String {
    let headline = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    let position = error.get_position();
    format_excerpt(source, &position.1, position.0, &headline)
}

/// Formats a checker diagnostic as `ERROR: <message>` with its source line.
pub fn display_diagnostic(diagnostic: &Diagnostic, source: &str) -> String {
    let position = &diagnostic.span().start;
    format_excerpt(source, &position.1, position.0, &diagnostic.to_string())
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
