//! Error types and error handling for the front end.
//!
//! This module defines the single error type returned by both phases:
//!
//! - An error structure carrying the line/column it was raised at
//! - Specific error variants for lexing and parsing failures
//! - Classification into lex and syntax errors
//! - Helpful suggestions for common mistakes
//!
//! Every error is fatal to the tokenize/parse call that raised it.

pub mod errors;

#[cfg(test)]
mod tests;
