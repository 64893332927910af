//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(3, 10));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position(), Position::new(3, 10));
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::ExpectedClassName {
            found: String::from("`{`"),
        },
        Position::new(2, 7),
    );

    assert_eq!(error.to_string(), "Expected class name, found `{` at line 2, column 7");
    assert_eq!(error.get_message(), "Expected class name, found `{`");
}

#[test]
fn test_error_kinds() {
    let lex = Error::new(ErrorImpl::UnterminatedString, Position::start());
    assert_eq!(lex.get_error_kind(), ErrorKind::Lex);
    assert_eq!(lex.get_error_kind().to_string(), "LexError");

    let syntax = Error::new(
        ErrorImpl::MissingInitializer {
            variable: String::from("x"),
        },
        Position::start(),
    );
    assert_eq!(syntax.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(syntax.get_error_kind().to_string(), "SyntaxError");
}

#[test]
fn test_unexpected_end_of_file_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfFile {
            expected: String::from("`}`"),
        },
        Position::new(4, 1),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfFile");
    assert_eq!(error.get_message(), "Expected `}`, found end of file");
}

#[test]
fn test_duplicate_accessor_message() {
    let error = Error::new(
        ErrorImpl::DuplicateAccessor {
            property: String::from("Size"),
            accessor: String::from("get"),
        },
        Position::start(),
    );

    assert_eq!(error.get_message(), "Property `Size` declares `get` more than once");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::ExpectedClassName {
            found: String::from("`{`"),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: String::from("`;`"),
            found: String::from("`}`"),
        },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
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
fn test_errors_compare_by_value() {
    let a = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 2));
    let b = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 2));
    let c = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 3));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_unknown_member_message_has_single_location() {
    let error = Error::new(
        ErrorImpl::UnknownMemberDeclaration {
            member: String::from("x"),
            found: String::from("`:`"),
        },
        Position::new(1, 29),
    );

    assert_eq!(error.get_message(), "Unknown member declaration `x`, found `:`");
    assert_eq!(
        error.to_string(),
        "Unknown member declaration `x`, found `:` at line 1, column 29"
    );
}
