//! # avm-lint-syntax
//!
//! Bicep front-end for avm-lint: lexer, top-level-statement parser, and the
//! declaration model consumed by the lint rules.
//!
//! This is not a general Bicep parser. It models exactly what convention
//! checks need: the ordered sequence of top-level declarations, with full
//! shape for `metadata` and `targetScope` statements and an opaque record
//! for everything else.
//!
//! ## Example
//!
//! ```
//! use avm_lint_syntax::{Lexer, Parser};
//!
//! let source = "metadata name = 'Elastic SANs'\n";
//! let (tokens, lex_errors) = Lexer::new(source).tokenize();
//! assert!(lex_errors.is_empty());
//!
//! let (program, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//! assert_eq!(program.declarations().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;
mod span;
mod token;

pub use ast::{
    Declaration, Decorator, MetadataDeclaration, OtherDeclaration, Program,
    TargetScopeDeclaration,
};
pub use error::{LexError, ParseError};
pub use lexer::Lexer;
pub use parser::Parser;
pub use span::Span;
pub use token::{Token, TokenKind};
