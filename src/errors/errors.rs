use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human-readable reason, without the location suffix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorKind::Lex,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::ExpectedSpaceDeclaration { .. } => "ExpectedSpaceDeclaration",
            ErrorImpl::ExpectedTypeDeclaration { .. } => "ExpectedTypeDeclaration",
            ErrorImpl::ExpectedClassName { .. } => "ExpectedClassName",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedEndOfFile { .. } => "UnexpectedEndOfFile",
            ErrorImpl::UnknownMemberDeclaration { .. } => "UnknownMemberDeclaration",
            ErrorImpl::InvalidAccessor { .. } => "InvalidAccessor",
            ErrorImpl::DuplicateAccessor { .. } => "DuplicateAccessor",
            ErrorImpl::MissingInitializer { .. } => "MissingInitializer",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to the string literal"))
            }
            ErrorImpl::ExpectedToken { expected, .. } if expected == "`;`" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnknownMemberDeclaration { .. } => ErrorTip::Suggestion(String::from(
                "members are methods `T name() { }`, fields `T name;` or properties `T name { get; set; }`",
            )),
            ErrorImpl::MissingInitializer { variable } => ErrorTip::Suggestion(format!(
                "give `{}` a value with `=`, or declare it with an explicit type",
                variable
            )),
            ErrorImpl::NumberParseError { .. } => {
                ErrorTip::Suggestion(String::from("is it above the integer limit?"))
            }
            _ => ErrorTip::None,
        }
    }
}

/// The phase an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "LexError"),
            ErrorKind::Syntax => write!(f, "SyntaxError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Expected space declaration, found {found}")]
    ExpectedSpaceDeclaration { found: String },
    #[error("Expected type declaration, found {found}")]
    ExpectedTypeDeclaration { found: String },
    #[error("Expected class name, found {found}")]
    ExpectedClassName { found: String },
    #[error("Expected {expected}, found {found}")]
    ExpectedToken { expected: String, found: String },
    #[error("Expected {expected}, found end of file")]
    UnexpectedEndOfFile { expected: String },
    #[error("Unknown member declaration `{member}`, found {found}")]
    UnknownMemberDeclaration { member: String, found: String },
    #[error("Expected `get` or `set` accessor, found {found}")]
    InvalidAccessor { found: String },
    #[error("Property `{property}` declares `{accessor}` more than once")]
    DuplicateAccessor { property: String, accessor: String },
    #[error("Implicit variable declaration `{variable}` requires an initializer")]
    MissingInitializer { variable: String },
    #[error("Unexpected token {token} in expression")]
    UnexpectedToken { token: String },
    #[error("Invalid number literal `{token}`")]
    NumberParseError { token: String },
}
