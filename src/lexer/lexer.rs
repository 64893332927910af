use std::time::Instant;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SINGLE_CHAR_OPERATORS, TWO_CHAR_OPERATORS};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored so a match can only start at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[\p{Alphabetic}_][\p{Alphabetic}\p{Nd}_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes one character, keeping line/column in step.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn advance_str(&mut self, text: &str) {
        for _ in text.chars() {
            self.advance();
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_str(matched);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.get_position();
    lexer.advance_str(matched);

    let kind = if RESERVED_LOOKUP.contains(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(kind, String::from(matched), Span::new(start, lexer.get_position())));
}

fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.get_position();
    let unterminated = || Error::new(ErrorImpl::UnterminatedString, start);

    // Opening quote.
    lexer.advance();

    let mut result = String::new();
    loop {
        match lexer.advance().ok_or_else(unterminated)? {
            '"' => break,
            '\\' => match lexer.advance().ok_or_else(unterminated)? {
                'n' => result.push('\n'),
                'r' => result.push('\r'),
                't' => result.push('\t'),
                '"' => result.push('"'),
                '\\' => result.push('\\'),
                other => result.push(other),
            },
            ch => result.push(ch),
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result, Span::new(start, lexer.get_position())));
    Ok(())
}

fn operator_handler(lexer: &mut Lexer) {
    let start = lexer.get_position();

    let pair: String = lexer.remainder().chars().take(2).collect();
    if TWO_CHAR_OPERATORS.contains(&pair.as_str()) {
        lexer.advance_str(&pair);
        lexer.push(MK_TOKEN!(TokenKind::Operator, pair, Span::new(start, lexer.get_position())));
        return;
    }

    let Some(ch) = lexer.advance() else {
        return;
    };

    let kind = if SINGLE_CHAR_OPERATORS.contains(&ch) {
        TokenKind::Operator
    } else {
        TokenKind::Symbol
    };

    lexer.push(MK_TOKEN!(kind, ch.to_string(), Span::new(start, lexer.get_position())));
}

/// Converts `source` into tokens, always terminated by an `EndOfFile` token.
///
/// The only failure is a string literal left open at end of input; any other
/// unexpected character becomes a one-character Symbol token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let start = Instant::now();
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let found = pattern.regex.find(lex.remainder()).map(|m| m.as_str().to_string());

            if let Some(text) = found {
                (pattern.handler)(&mut lex, &text);
                matched = true;
                break;
            }
        }

        if matched {
            continue;
        }

        if lex.at() == Some('"') {
            if let Err(error) = string_handler(&mut lex) {
                debug!("Tokenizing failed: {}", error);
                return Err(error);
            }
        } else {
            operator_handler(&mut lex);
        }
    }

    let end = lex.get_position();
    lex.push(MK_TOKEN!(TokenKind::EndOfFile, String::new(), Span::new(end, end)));

    debug!("Tokenized {} tokens in {:?}", lex.tokens.len(), start.elapsed());
    Ok(lex.tokens)
}
