//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - String literals with escape sequences
//! - Operators and punctuation, including maximal munch
//! - Comments
//! - Line/column tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::{errors::errors::ErrorKind, Position};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

fn values(source: &str) -> Vec<String> {
    tokenize(source).unwrap().into_iter().map(|token| token.value).collect()
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    assert_eq!(tokens[0].position(), Position::new(1, 1));
}

#[test]
fn test_tokenize_keywords() {
    let source = "space class void return let this number string bool get set new";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 13);
    for token in &tokens[..12] {
        assert_eq!(token.kind, TokenKind::Keyword, "{} should be a keyword", token.value);
    }
    assert_eq!(tokens[12].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase spaces classy";
    let tokens = tokenize(source).unwrap();

    let expected = ["foo", "bar", "baz_123", "_underscore", "CamelCase", "spaces", "classy"];
    for (token, value) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 5;").unwrap();

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Symbol,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].value, "=");
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].value, ";");
}

#[test]
fn test_tokenize_numbers_have_no_decimal_point() {
    assert_eq!(values("3.14"), vec!["3", ".", "14", ""]);
    assert_eq!(
        kinds("3.14"),
        vec![TokenKind::Number, TokenKind::Symbol, TokenKind::Number, TokenKind::EndOfFile]
    );
}

#[test]
fn test_tokenize_number_then_identifier() {
    assert_eq!(values("12abc"), vec!["12", "abc", ""]);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld""#).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello\nworld");
    assert!(!tokens[0].value.contains('\\'));
}

#[test]
fn test_tokenize_all_escapes() {
    let tokens = tokenize(r#""a\tb\rc\"d\\e""#).unwrap();
    assert_eq!(tokens[0].value, "a\tb\rc\"d\\e");
}

#[test]
fn test_tokenize_unknown_escape_keeps_character() {
    let tokens = tokenize(r#""\q\0""#).unwrap();
    assert_eq!(tokens[0].value, "q0");
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_string_keeps_comment_markers() {
    let tokens = tokenize(r#""// not a comment""#).unwrap();
    assert_eq!(tokens[0].value, "// not a comment");
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("let s = \"abc").unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Lex);
    assert!(error.to_string().contains("Unterminated string"));
    // Reported at the opening quote.
    assert_eq!(error.get_position(), Position::new(1, 9));
}

#[test]
fn test_tokenize_trailing_backslash_is_unterminated() {
    let error = tokenize("\"abc\\").unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_tokenize_two_char_operators() {
    let tokens = tokenize("== != >= <=").unwrap();

    for (token, value) in tokens.iter().zip(["==", "!=", ">=", "<="]) {
        assert_eq!(token.kind, TokenKind::Operator);
        assert_eq!(token.value, value);
    }
    assert_eq!(tokens[4].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_maximal_munch() {
    assert_eq!(values("a===b"), vec!["a", "==", "=", "b", ""]);
    assert_eq!(values("!!="), vec!["!", "!=", ""]);
    assert_eq!(values("< ="), vec!["<", "=", ""]);
}

#[test]
fn test_tokenize_single_char_operators() {
    let tokens = tokenize("+ - * / = < > !").unwrap();

    assert_eq!(tokens.len(), 9);
    for token in &tokens[..8] {
        assert_eq!(token.kind, TokenKind::Operator);
    }
}

#[test]
fn test_tokenize_symbols() {
    let tokens = tokenize("( ) { } [ ] ; , .").unwrap();

    assert_eq!(tokens.len(), 10);
    for token in &tokens[..9] {
        assert_eq!(token.kind, TokenKind::Symbol);
    }
}

#[test]
fn test_tokenize_unknown_characters_pass_through() {
    let tokens = tokenize("@ # $").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Symbol);
    assert_eq!(tokens[0].value, "@");
    assert_eq!(tokens[1].value, "#");
    assert_eq!(tokens[2].value, "$");
    assert_eq!(tokens[3].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5; // this is a comment\nlet y = 10;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[5].value, "let");
    assert_eq!(tokens[5].position(), Position::new(2, 1));
}

#[test]
fn test_tokenize_comment_at_end_of_input() {
    assert_eq!(kinds("x // trailing"), vec![TokenKind::Identifier, TokenKind::EndOfFile]);
}

#[test]
fn test_tokenize_slash_is_division() {
    assert_eq!(values("a / b"), vec!["a", "/", "b", ""]);
}

#[test]
fn test_tokenize_positions() {
    let source = "space A;\n\n  class Foo {\n}";
    let tokens = tokenize(source).unwrap();

    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line(), t.column())).collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 7), (1, 8), (3, 3), (3, 9), (3, 13), (4, 1), (4, 2)]
    );
}

#[test]
fn test_tokenize_token_spans() {
    let tokens = tokenize("return \"a\\nb\";").unwrap();

    // The span covers the raw source, escapes and quotes included.
    assert_eq!(tokens[1].span.start, Position::new(1, 8));
    assert_eq!(tokens[1].span.end, Position::new(1, 14));
    assert_eq!(tokens[2].span.start, Position::new(1, 14));
}

#[test]
fn test_tokenize_multiline_string_advances_line() {
    let tokens = tokenize("\"a\nb\" x").unwrap();

    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[1].position(), Position::new(2, 4));
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let \t  x \r\n  =   42  ";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn test_tokenize_eof_position_after_trailing_newline() {
    let tokens = tokenize("x\n").unwrap();
    assert_eq!(tokens[1].position(), Position::new(2, 1));
}

#[test]
fn test_tokenize_unicode_identifier() {
    let tokens = tokenize("héllo = 1").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "héllo");
    assert_eq!(tokens[1].position(), Position::new(1, 7));
}

#[test]
fn test_tokenize_method_call() {
    assert_eq!(
        values("obj.Method(1, \"test\");"),
        vec!["obj", ".", "Method", "(", "1", ",", "test", ")", ";", ""]
    );
}
