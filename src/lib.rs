#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    config::FrontendConfig,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod arena;
pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Half-open byte range `[start, end)` into the caller-owned source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Borrows the text this span covers.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start as usize..self.end as usize]
    }
}

/// Runs the whole front end over `source` and returns every diagnostic.
///
/// Lexer and parser failures are fatal and come back as a single error;
/// analysis errors accumulate up to `config.error_limit`.
pub fn check(source: &str, config: &FrontendConfig) -> Vec<Error> {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => return vec![error],
    };

    let program = match parse(&tokens, source, config) {
        Ok(program) => program,
        Err(error) => return vec![error],
    };

    let (_, errors) = type_check(&program, config);
    errors
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line. Offsets at or past the end
/// of the source map onto the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, &str, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, "", 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line, pos - start);
        }

        last = (line_number, line, line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    last
}

/// Renders an error as a caret report against its source text.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> final.lang
           |
        20 | x : u32 = #;
           | ----------^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, error.get_position());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Span,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, line, line_pos) = super::get_line_at_position("a\nbc", 99);
        assert_eq!(line_number, 2);
        assert_eq!(line, "bc");
        assert_eq!(line_pos, 2);
    }

    #[test]
    fn test_span_helpers() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert_eq!(span.text("x : u32;"), "u3");
        assert_eq!(span.to(Span::new(4, 9)), Span::new(2, 9));
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_render_error() {
        let source = "func f() : i32 {\n    x : u32 = true;\n}\n";
        let error = Error::new(
            ErrorImpl::TypeMismatch {
                expected: "u32".to_string(),
                received: "bool".to_string(),
            },
            Span::new(31, 35),
        );

        let rendered = super::render_error(&error, source, "test.lang");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: TypeMismatch (Expected type `u32`, received `bool`)");
        assert_eq!(lines[1], "-> test.lang");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x : u32 = true;");
        assert_eq!(lines[4], "  | ----------^");
    }
}
