//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a module tree. It handles:
//!
//! - Space (namespace) and class declarations
//! - Member disambiguation between methods, fields and properties
//! - Statement parsing (returns, implicit and explicit variable declarations)
//! - Expression parsing (flat left-associative binary chains, method calls)
//!
//! Lookahead never exceeds three tokens. The first malformed construct
//! aborts parsing; there is no recovery.

pub mod decl;
pub mod expr;
pub mod parser;
pub mod stmt;
