//! Parser for top-level Bicep declarations.
//!
//! Only the statement shapes the lint rules consume are modelled in full:
//! `metadata <key> = <value>` and `targetScope = <value>`, plus any
//! decorators preceding them. Every other statement is recognised by its
//! leading keyword and skipped bracket-aware, so bodies spanning multiple
//! lines do not confuse statement boundaries.

use crate::ast::{
    Declaration, Decorator, MetadataDeclaration, OtherDeclaration, Program,
    TargetScopeDeclaration,
};
use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Statement keywords whose bodies are skipped entirely.
const SKIPPED_KEYWORDS: &[&str] = &[
    "param",
    "var",
    "resource",
    "module",
    "output",
    "type",
    "func",
    "import",
    "using",
    "test",
    "extension",
    "assert",
];

/// Parser over a lexed token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a parser over a token stream.
    ///
    /// The stream is expected to end with an EOF token, as produced by
    /// [`crate::Lexer::tokenize`]; one is appended if missing.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, "", Span::default()));
        }
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parses the token stream into an ordered declaration sequence.
    ///
    /// Parsing recovers at statement boundaries, so all errors in a file are
    /// reported in one pass. Statements that fail to parse are dropped from
    /// the sequence; callers are expected to treat any error as fatal for
    /// further analysis of the file.
    #[must_use]
    pub fn parse(mut self) -> (Program, Vec<ParseError>) {
        let mut declarations = Vec::new();

        loop {
            self.skip_newlines();
            if self.at_eof() {
                break;
            }

            let decorators = self.parse_decorators();
            if self.at_eof() {
                if !decorators.is_empty() {
                    self.errors.push(ParseError::DanglingDecorator {
                        span: self.current().span,
                    });
                }
                break;
            }

            if let Some(declaration) = self.parse_declaration(decorators) {
                declarations.push(declaration);
            }
        }

        (Program::new(declarations), self.errors)
    }

    /// Collects the run of decorators preceding a declaration.
    fn parse_decorators(&mut self) -> Vec<Decorator> {
        let mut decorators = Vec::new();

        while self.current().kind == TokenKind::At {
            self.advance();

            let Some(mut name) = self.expect_identifier("decorator name") else {
                self.skip_statement();
                continue;
            };

            // dotted names such as `sys.description`
            while self.current().kind == TokenKind::Dot {
                self.advance();
                let Some(part) = self.expect_identifier("identifier after '.'") else {
                    self.skip_statement();
                    break;
                };
                name.push('.');
                name.push_str(&part);
            }

            if self.current().kind == TokenKind::LeftParen {
                self.skip_balanced_parens();
            }

            decorators.push(Decorator { name });
            self.skip_newlines();
        }

        decorators
    }

    fn parse_declaration(&mut self, decorators: Vec<Decorator>) -> Option<Declaration> {
        let token = self.current().clone();

        if token.kind != TokenKind::Identifier {
            self.errors.push(ParseError::UnexpectedToken {
                found: token.describe(),
                span: token.span,
            });
            self.skip_statement();
            return None;
        }

        match token.text.as_str() {
            "metadata" => {
                self.advance();
                let Some(name) = self.expect_identifier("metadata key") else {
                    self.skip_statement();
                    return None;
                };
                if !self.expect(TokenKind::Assign, "'='") {
                    self.skip_statement();
                    return None;
                }
                let value = self.parse_value();
                Some(Declaration::Metadata(MetadataDeclaration {
                    name,
                    value,
                    decorators,
                }))
            }
            "targetScope" => {
                self.advance();
                if !self.expect(TokenKind::Assign, "'='") {
                    self.skip_statement();
                    return None;
                }
                let value = self.parse_value();
                Some(Declaration::TargetScope(TargetScopeDeclaration {
                    value,
                    decorators,
                }))
            }
            keyword if SKIPPED_KEYWORDS.contains(&keyword) => {
                self.skip_statement();
                Some(Declaration::Other(OtherDeclaration {
                    keyword: keyword.to_string(),
                }))
            }
            _ => {
                self.errors.push(ParseError::UnexpectedToken {
                    found: token.describe(),
                    span: token.span,
                });
                self.skip_statement();
                None
            }
        }
    }

    /// Captures a string-literal right-hand side, then consumes the rest of
    /// the statement. Non-literal values are skipped and yield `None`.
    fn parse_value(&mut self) -> Option<String> {
        let value = if self.current().kind == TokenKind::String {
            let text = self.current().text.clone();
            self.advance();
            Some(text)
        } else {
            None
        };
        self.skip_statement();
        value
    }

    /// Consumes tokens up to and including the statement terminator: a
    /// newline at bracket depth zero, or EOF.
    fn skip_statement(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.current().kind {
                TokenKind::Eof => break,
                TokenKind::LeftParen | TokenKind::LeftBrace | TokenKind::LeftBracket => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RightParen | TokenKind::RightBrace | TokenKind::RightBracket => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                }
                TokenKind::Newline if depth == 0 => {
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Consumes a balanced `( ... )` group, newlines included.
    fn skip_balanced_parens(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.current().kind {
                TokenKind::Eof => break,
                TokenKind::LeftParen => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RightParen => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                    if depth == 0 {
                        break;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn expect_identifier(&mut self, expected: &'static str) -> Option<String> {
        if self.current().kind == TokenKind::Identifier {
            let text = self.current().text.clone();
            self.advance();
            Some(text)
        } else {
            let token = self.current();
            self.errors.push(ParseError::ExpectedToken {
                expected,
                found: token.describe(),
                span: token.span,
            });
            None
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> bool {
        if self.current().kind == kind {
            self.advance();
            true
        } else {
            let token = self.current();
            self.errors.push(ParseError::ExpectedToken {
                expected,
                found: token.describe(),
                span: token.span,
            });
            false
        }
    }

    fn skip_newlines(&mut self) {
        while self.current().kind == TokenKind::Newline {
            self.advance();
        }
    }

    fn at_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> (Program, Vec<ParseError>) {
        let (tokens, lex_errors) = Lexer::new(source).tokenize();
        assert!(lex_errors.is_empty(), "unexpected lex errors: {lex_errors:?}");
        Parser::new(tokens).parse()
    }

    fn parse_ok(source: &str) -> Vec<Declaration> {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
        program.into_declarations()
    }

    #[test]
    fn parses_metadata_block_in_order() {
        let decls = parse_ok(
            "metadata name = 'Elastic SANs'\n\
             metadata description = 'This module deploys an Elastic SAN'\n\
             metadata owner = 'Azure/module-maintainers'\n",
        );
        assert_eq!(decls.len(), 3);
        let keys: Vec<_> = decls
            .iter()
            .map(|d| d.as_metadata().map(|m| m.name.as_str()))
            .collect();
        assert_eq!(keys, vec![Some("name"), Some("description"), Some("owner")]);
    }

    #[test]
    fn parses_target_scope() {
        let decls = parse_ok("targetScope = 'subscription'\n");
        assert_eq!(decls.len(), 1);
        let scope = decls[0].as_target_scope().expect("target scope declaration");
        assert_eq!(scope.literal_value(), Some("subscription"));
        assert!(!scope.has_decorators());
    }

    #[test]
    fn decorator_attaches_to_following_declaration() {
        let decls = parse_ok("@sys.description('ignored')\nmetadata name = 'Widgets'\n");
        assert_eq!(decls.len(), 1);
        let metadata = decls[0].as_metadata().expect("metadata declaration");
        assert!(metadata.has_decorators());
        assert_eq!(metadata.decorators[0].name, "sys.description");
    }

    #[test]
    fn skipped_statement_keeps_keyword_and_position() {
        let decls = parse_ok(
            "metadata name = 'Widgets'\n\
             param location string = 'westeurope'\n\
             targetScope = 'subscription'\n",
        );
        assert_eq!(decls.len(), 3);
        assert!(decls[0].is_metadata());
        assert!(matches!(
            &decls[1],
            Declaration::Other(other) if other.keyword == "param"
        ));
        assert!(decls[2].is_target_scope());
    }

    #[test]
    fn multiline_body_is_one_statement() {
        let decls = parse_ok(
            "resource sa 'Microsoft.Storage/storageAccounts@2023-01-01' = {\n\
             \x20 name: 'mystorage'\n\
             \x20 location: 'westeurope'\n\
             }\n\
             metadata name = 'Widgets'\n",
        );
        assert_eq!(decls.len(), 2);
        assert!(decls[1].is_metadata());
    }

    #[test]
    fn non_literal_value_yields_none() {
        let decls = parse_ok("metadata name = {}\n");
        let metadata = decls[0].as_metadata().expect("metadata declaration");
        assert_eq!(metadata.literal_value(), None);
    }

    #[test]
    fn missing_assign_is_reported_and_recovered() {
        let (program, errors) = parse("metadata name 'Widgets'\nmetadata owner = 'x'\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "PRS001");
        // recovery resumes at the next statement
        assert_eq!(program.declarations().len(), 1);
    }

    #[test]
    fn unknown_leading_identifier_is_reported() {
        let (program, errors) = parse("banana = 1\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "PRS002");
        assert!(program.declarations().is_empty());
    }

    #[test]
    fn dangling_decorator_is_reported() {
        let (_, errors) = parse("@secure()\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "PRS003");
    }

    #[test]
    fn statement_starting_with_punctuation_is_reported() {
        let (_, errors) = parse("= 'loose'\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "PRS002");
    }
}
