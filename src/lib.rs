#![allow(clippy::module_inception)]

use std::{fmt::Display, time::Instant};

use tracing::debug;

use crate::{
    ast::ast::Module,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// File name reported by diagnostics when the caller has none.
pub const DEFAULT_FILE_NAME: &str = "shell";

/// Name given to every parsed module.
pub const MODULE_NAME: &str = "main";

/// A 1-based line/column location in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// The location of the first character of any source.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Source range covered by a token or node. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn start_line(&self) -> u32 {
        self.start.line
    }

    pub fn start_column(&self) -> u32 {
        self.start.column
    }

    pub fn end_line(&self) -> u32 {
        self.end.line
    }

    pub fn end_column(&self) -> u32 {
        self.end.column
    }
}

/// Runs the whole front end over `source`: tokenize, then parse.
///
/// Either phase failing aborts the pipeline; no partial module is produced.
pub fn compile_source(source: &str) -> Result<Module, Error> {
    compile_named_source(source, None)
}

/// Same as [`compile_source`], with `file` recorded on the tracing span.
pub fn compile_named_source(source: &str, file: Option<&str>) -> Result<Module, Error> {
    let _span =
        tracing::debug_span!("compile_source", file = file.unwrap_or(DEFAULT_FILE_NAME)).entered();
    let start = Instant::now();

    let tokens = tokenize(source)?;
    let module = parse(tokens)?;

    debug!("Front end finished in {:?}", start.elapsed());
    Ok(module)
}

/// Returns `(line_number, line_text, column)` for `position` in `source`.
///
/// Positions past the last line (the EOF marker after a trailing newline)
/// yield an empty line.
pub fn get_line_at_position(source: &str, position: Position) -> (usize, String, usize) {
    let line_number = position.line.max(1) as usize;
    let line = source
        .lines()
        .nth(line_number - 1)
        .unwrap_or_default()
        .to_string();

    (line_number, line, position.column.max(1) as usize)
}

/// Renders `error` against the source it came from.
pub fn format_error(error: &Error, source: &str, file: Option<&str>) -> String {
    /*
        Error: SyntaxError (message)
        -> main.vx
           |
        20 | let a = #;
           | --------^
    */

    let file = file.unwrap_or(DEFAULT_FILE_NAME);
    let (line, line_text, column) = get_line_at_position(source, error.get_position());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {} ({})\n", error.get_error_kind(), error)),
        tip => out.push_str(&format!("Error: {} ({}; {})\n", error.get_error_kind(), error, tip)),
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = column.saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}
