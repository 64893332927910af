//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The rule functions live in `decl`, `stmt` and `expr` and all take the
//! parser by mutable reference.

use std::time::Instant;

use tracing::debug;

use crate::{
    ast::ast::Module,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MODULE_NAME, MK_TOKEN,
};

use super::decl::parse_space_decl;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the cursor into it. The cursor
/// only moves forward and never passes the trailing `EndOfFile` token.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EndOfFile`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EndOfFile` token is appended if the stream does not already end
    /// with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map_or(Position::start(), |token| token.span.end);
            tokens.push(MK_TOKEN!(TokenKind::EndOfFile, String::new(), Span::new(end, end)));
        }

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Looks `offset` tokens ahead, saturating at `EndOfFile`.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `expected` - What the caller wanted, used in the error message
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error_expected(expected));
        }

        Ok(self.advance())
    }

    /// Expects a `Symbol` token with the given text, e.g. `;` or `{`.
    pub fn expect_symbol(&mut self, symbol: &str) -> Result<Token, Error> {
        if !self.current_token().is_symbol(symbol) {
            return Err(self.error_expected(&format!("`{}`", symbol)));
        }

        Ok(self.advance())
    }

    /// Expects an identifier or built-in type keyword.
    pub fn expect_type_name(&mut self) -> Result<Token, Error> {
        if !self.current_token().is_type_name() {
            return Err(self.error_expected("type name"));
        }

        Ok(self.advance())
    }

    /// Builds the error for a missing `expected` at the current token.
    pub fn error_expected(&self, expected: &str) -> Error {
        let token = self.current_token();
        let error = if token.is_eof() {
            ErrorImpl::UnexpectedEndOfFile {
                expected: expected.to_string(),
            }
        } else {
            ErrorImpl::ExpectedToken {
                expected: expected.to_string(),
                found: token.describe(),
            }
        };

        Error::new(error, token.position())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.current_token().is_eof()
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position()
    }

    /// End of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        match self.pos {
            0 => self.current_token().span.start,
            pos => self.tokens[pos - 1].span.end,
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.previous_end())
    }
}

/// Parses a stream of tokens into a module tree.
///
/// This is the main entry point for parsing. The stream must open with a
/// `space` declaration; everything after it belongs to that space.
pub fn parse(tokens: Vec<Token>) -> Result<Module, Error> {
    let start = Instant::now();
    let mut parser = Parser::new(tokens);

    let root_space = match parse_space_decl(&mut parser) {
        Ok(space) => space,
        Err(error) => {
            debug!("Parsing failed: {}", error);
            return Err(error);
        }
    };

    debug!(
        "Parsed space `{}` with {} declarations in {:?}",
        root_space.name,
        root_space.declarations.len(),
        start.elapsed()
    );

    Ok(Module {
        name: String::from(MODULE_NAME),
        span: root_space.span,
        root_space,
    })
}
