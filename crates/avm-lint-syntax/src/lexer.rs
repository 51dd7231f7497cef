//! Lexer for Bicep source text.
//!
//! Converts source text into a flat token stream. Newlines are tokens
//! because statements are line-terminated. Lexing continues past errors so
//! that a single pass reports all of them.

use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Position bookmark used to build spans.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    line: u32,
    column: u32,
}

/// Lexer over Bicep source text.
pub struct Lexer<'src> {
    source: &'src str,
    rest: &'src str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire source.
    ///
    /// The token stream always ends with an [`TokenKind::Eof`] token.
    /// Recoverable errors are collected; the offending text is skipped and
    /// lexing continues.
    #[must_use]
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            match self.next_token() {
                Ok(token) => {
                    let done = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if done {
                        break;
                    }
                }
                Err(err) => errors.push(err),
            }
        }

        (tokens, errors)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;

        let start = self.mark();
        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, "", self.span_from(start)));
        };

        let kind = match c {
            '\n' => {
                self.advance();
                TokenKind::Newline
            }
            '@' => {
                self.advance();
                TokenKind::At
            }
            '=' => {
                self.advance();
                // `==` is an expression operator, a single `=` is assignment
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Operator
                } else {
                    TokenKind::Assign
                }
            }
            '(' => {
                self.advance();
                TokenKind::LeftParen
            }
            ')' => {
                self.advance();
                TokenKind::RightParen
            }
            '{' => {
                self.advance();
                TokenKind::LeftBrace
            }
            '}' => {
                self.advance();
                TokenKind::RightBrace
            }
            '[' => {
                self.advance();
                TokenKind::LeftBracket
            }
            ']' => {
                self.advance();
                TokenKind::RightBracket
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '.' => {
                self.advance();
                TokenKind::Dot
            }
            ':' => {
                self.advance();
                TokenKind::Colon
            }
            '\'' => return self.scan_string(start),
            '+' | '-' | '*' | '/' | '%' | '<' | '>' | '!' | '&' | '|' | '?' => {
                self.advance();
                TokenKind::Operator
            }
            c if c.is_ascii_digit() => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                TokenKind::Number
            }
            c if is_identifier_start(c) => {
                while self.peek().is_some_and(is_identifier_continue) {
                    self.advance();
                }
                TokenKind::Identifier
            }
            c => {
                self.advance();
                return Err(LexError::UnexpectedCharacter {
                    ch: c,
                    span: self.span_from(start),
                });
            }
        };

        Ok(self.lexeme_token(kind, start))
    }

    /// Skips whitespace and comments. Newlines are not trivia.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('/') if self.peek_second() == Some('/') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_second() == Some('*') => {
                    let start = self.mark();
                    self.advance();
                    self.advance();
                    loop {
                        match self.peek() {
                            None => {
                                return Err(LexError::UnterminatedComment {
                                    span: self.span_from(start),
                                });
                            }
                            Some('*') if self.peek_second() == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(_) => {
                                self.advance();
                            }
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Scans a single-quoted string literal, decoding escape sequences.
    fn scan_string(&mut self, start: Mark) -> Result<Token, LexError> {
        self.advance(); // opening quote

        let mut value = String::new();
        let mut bad_escape: Option<LexError> = None;

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString {
                        span: self.span_from(start),
                    });
                }
                Some('\'') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.mark();
                    self.advance();
                    match self.peek() {
                        None | Some('\n') => {
                            return Err(LexError::UnterminatedString {
                                span: self.span_from(start),
                            });
                        }
                        Some(c) => {
                            self.advance();
                            match c {
                                'n' => value.push('\n'),
                                'r' => value.push('\r'),
                                't' => value.push('\t'),
                                '\\' => value.push('\\'),
                                '\'' => value.push('\''),
                                '$' => value.push('$'),
                                other => {
                                    // keep scanning to the closing quote so the
                                    // stream stays in sync, then report
                                    if bad_escape.is_none() {
                                        bad_escape = Some(LexError::InvalidEscape {
                                            ch: other,
                                            span: self.span_from(escape_start),
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        if let Some(err) = bad_escape {
            return Err(err);
        }

        Ok(Token::new(TokenKind::String, value, self.span_from(start)))
    }

    /// Builds a token whose text is the raw source slice.
    fn lexeme_token(&self, kind: TokenKind, start: Mark) -> Token {
        let text = &self.source[start.offset..self.position];
        Token::new(kind, text, self.span_from(start))
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn span_from(&self, start: Mark) -> Span {
        Span::new(
            start.offset,
            self.position - start.offset,
            start.line,
            start.column,
        )
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest.chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.rest.chars().next()?;
        let len = c.len_utf8();
        self.rest = &self.rest[len..];
        self.position += len;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
