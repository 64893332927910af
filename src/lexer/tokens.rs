use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("space");
        set.insert("class");
        set.insert("void");
        set.insert("return");
        set.insert("let");
        set.insert("this");
        set.insert("number");
        set.insert("string");
        set.insert("bool");
        set.insert("get");
        set.insert("set");
        set.insert("new");
        set
    };
}

/// Keywords that may stand in a type position.
pub const BUILTIN_TYPES: [&str; 4] = ["void", "number", "string", "bool"];

/// Operators lexed with maximal munch ahead of their one-character prefixes.
pub const TWO_CHAR_OPERATORS: [&str; 4] = ["==", "!=", ">=", "<="];

pub const SINGLE_CHAR_OPERATORS: [char; 8] = ['+', '-', '*', '/', '=', '<', '>', '!'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Keyword,
    Symbol,
    Operator,
    EndOfFile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "end of file"),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    /// Line of the token's first character.
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    /// Column of the token's first character.
    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn position(&self) -> Position {
        self.span.start
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.value == symbol
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == operator
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// How the token reads in an error message.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfFile => String::from("end of file"),
            TokenKind::String => format!("string \"{}\"", self.value.escape_default()),
            _ => format!("`{}`", self.value),
        }
    }

    /// Whether this token can open a type name.
    pub fn is_type_name(&self) -> bool {
        match self.kind {
            TokenKind::Identifier => true,
            TokenKind::Keyword => BUILTIN_TYPES.contains(&self.value.as_str()),
            _ => false,
        }
    }
}
