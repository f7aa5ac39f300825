//! Contains the [`Scanner`] and the [`TokenSequence`] it produces.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use rill_base::{
    diagnostic::Handler,
    source_file::{self, ByteIndex, SourceFile, Span},
};

use crate::{
    error::{self, UnexpectedCharacter, UnterminatedString},
    token::{Literal, Token, TokenKind},
};

/// Walks a source file once, left to right, classifying each maximal lexeme and emitting the
/// corresponding token on demand.
///
/// A scanner is constructed once per source file and discarded after the full token sequence has
/// been produced; its cursor only ever advances. Lexical errors are reported through the
/// [`Handler`] passed to [`Self::scan_token`] and never stop the scan.
#[derive(Debug)]
pub struct Scanner<'a> {
    iterator: source_file::Iterator<'a>,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of the given source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iterator: source_file.iter(),
            line: 1,
        }
    }

    /// Scans the next token, consuming and skipping whitespace, comments, and reported malformed
    /// lexemes along the way.
    ///
    /// Returns [`None`] once the source text is exhausted; the caller appends the end-of-input
    /// token via [`Self::end_of_input`].
    pub fn scan_token(&mut self, handler: &dyn Handler<error::Error>) -> Option<Token> {
        loop {
            let (start, character) = self.iterator.next()?;

            if let Some(kind) = TokenKind::from_single_char(character) {
                return Some(self.make_token(start, kind));
            }

            match character {
                '!' => {
                    return Some(self.handle_operator(start, TokenKind::Bang, TokenKind::BangEqual))
                }
                '=' => {
                    return Some(self.handle_operator(
                        start,
                        TokenKind::Equal,
                        TokenKind::EqualEqual,
                    ))
                }
                '<' => {
                    return Some(self.handle_operator(start, TokenKind::Less, TokenKind::LessEqual))
                }
                '>' => {
                    return Some(self.handle_operator(
                        start,
                        TokenKind::Greater,
                        TokenKind::GreaterEqual,
                    ))
                }
                '/' => {
                    if self.match_char('/') {
                        // a line comment runs up to, not including, the newline
                        Self::walk_iter(&mut self.iterator, |character| character != '\n');
                    } else {
                        return Some(self.make_token(start, TokenKind::Slash));
                    }
                }
                ' ' | '\r' | '\t' => {}
                '\n' => self.line += 1,
                '"' => {
                    if let Some(token) = self.handle_string(start, handler) {
                        return Some(token);
                    }
                }
                character if character.is_ascii_digit() => {
                    return Some(self.handle_number(start))
                }
                character if character.is_ascii_alphabetic() || character == '_' => {
                    return Some(self.handle_identifier(start))
                }
                _ => handler.receive(UnexpectedCharacter { line: self.line }.into()),
            }
        }
    }

    /// Creates the end-of-input token: a zero-width span at the end of the source file, no
    /// literal, and the final line reached.
    #[must_use]
    pub fn end_of_input(&self) -> Token {
        let source_file = self.iterator.source_file().clone();
        let end = source_file.content().len();

        Token::new(
            TokenKind::Eof,
            Span::new(source_file, end, end).unwrap(),
            Literal::None,
            self.line,
        )
    }

    /// Increments the iterator until the predicate returns false.
    fn walk_iter(iter: &mut source_file::Iterator, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = iter.peek() {
            if !predicate(character) {
                break;
            }

            iter.next();
        }
    }

    /// Creates a span from the given start byte index to the current cursor position.
    fn create_span(&mut self, start: ByteIndex) -> Span {
        self.iterator.peek().map_or_else(
            || Span::to_end(self.iterator.source_file().clone(), start).unwrap(),
            |(index, _)| Span::new(self.iterator.source_file().clone(), start, index).unwrap(),
        )
    }

    fn make_token(&mut self, start: ByteIndex, kind: TokenKind) -> Token {
        Token::new(kind, self.create_span(start), Literal::None, self.line)
    }

    /// Consumes the next character if it is equal to `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        match self.iterator.peek() {
            Some((_, character)) if character == expected => {
                self.iterator.next();
                true
            }
            _ => false,
        }
    }

    fn handle_operator(&mut self, start: ByteIndex, single: TokenKind, double: TokenKind) -> Token {
        let kind = if self.match_char('=') { double } else { single };
        self.make_token(start, kind)
    }

    fn handle_string(
        &mut self,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) -> Option<Token> {
        // the token reports the line of the opening quote, even for multi-line literals
        let opening_line = self.line;

        loop {
            match self.iterator.peek() {
                Some((_, '"')) => {
                    self.iterator.next();
                    break;
                }
                Some((_, character)) => {
                    if character == '\n' {
                        self.line += 1;
                    }

                    self.iterator.next();
                }
                None => {
                    handler.receive(UnterminatedString { line: self.line }.into());
                    return None;
                }
            }
        }

        let span = self.create_span(start);

        // the quotes belong to the lexeme but not to the value
        let value = span.str()[1..span.str().len() - 1].to_owned();

        Some(Token::new(
            TokenKind::String,
            span,
            value.into(),
            opening_line,
        ))
    }

    fn handle_number(&mut self, start: ByteIndex) -> Token {
        Self::walk_iter(&mut self.iterator, |character| character.is_ascii_digit());

        // a `.` is part of the number only when a digit follows it; a trailing `.` is left for
        // the next lexeme
        if let (Some((_, '.')), Some((_, next))) =
            (self.iterator.peek(), self.iterator.peek_second())
        {
            if next.is_ascii_digit() {
                self.iterator.next();
                Self::walk_iter(&mut self.iterator, |character| character.is_ascii_digit());
            }
        }

        let span = self.create_span(start);
        let value = span.str().parse::<f64>().unwrap();

        Token::new(TokenKind::Number, span, value.into(), self.line)
    }

    fn handle_identifier(&mut self, start: ByteIndex) -> Token {
        Self::walk_iter(&mut self.iterator, |character| {
            character.is_ascii_alphanumeric() || character == '_'
        });

        self.make_token(start, TokenKind::Identifier)
    }
}

/// Is the finite, ordered sequence of tokens produced by scanning one source file.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the interpretation process. The sequence preserves source order and is always
/// terminated by exactly one end-of-input token.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct TokenSequence {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Scans the given source file into a token sequence.
    ///
    /// This function drives the [`Scanner`] by calling [`Scanner::scan_token`] repeatedly until
    /// the source text is exhausted, then appends the end-of-input token. Malformed lexemes are
    /// reported to `handler` and produce no token; the scan itself never fails.
    #[must_use]
    pub fn scan(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        let mut scanner = Scanner::new(source_file);

        // list of tokens to return
        let mut tokens = Vec::new();

        while let Some(token) = scanner.scan_token(handler) {
            tokens.push(token);
        }

        tokens.push(scanner.end_of_input());

        Self { tokens }
    }

    /// Dissolves this struct into the underlying vector of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
