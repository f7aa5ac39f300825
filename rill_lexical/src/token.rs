//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display};

use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use rill_base::source_file::Span;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Is an enumeration containing every kind of token the scanner can emit.
///
/// The set is closed and stable: a later parsing stage can match on it exhaustively. The
/// `Display` implementation renders the SCREAMING_SNAKE_CASE name used in the token debug
/// rendering (`LEFT_PAREN`, `BANG_EQUAL`, `EOF`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Star,
    Slash,

    // one/two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // literals and identifiers
    String,
    Number,
    Identifier,

    // end-of-input marker
    Eof,
}

impl TokenKind {
    /// Gets the character this kind is scanned from, for the fixed single-character punctuation
    /// kinds that need no lookahead.
    ///
    /// Returns [`None`] for every other kind, including `SLASH` and the one-character operator
    /// kinds, since those are only decided after inspecting the following character.
    #[must_use]
    pub fn single_char(self) -> Option<char> {
        match self {
            Self::LeftParen => Some('('),
            Self::RightParen => Some(')'),
            Self::LeftBrace => Some('{'),
            Self::RightBrace => Some('}'),
            Self::Comma => Some(','),
            Self::Dot => Some('.'),
            Self::Minus => Some('-'),
            Self::Plus => Some('+'),
            Self::Semicolon => Some(';'),
            Self::Star => Some('*'),
            _ => None,
        }
    }

    /// Looks up the fixed single-character punctuation kind scanned from the given character.
    #[must_use]
    pub fn from_single_char(character: char) -> Option<Self> {
        lazy_static! {
            static ref SINGLE_CHAR_MAP: HashMap<char, TokenKind> = {
                let mut map = HashMap::new();

                for kind in TokenKind::iter() {
                    if let Some(character) = kind.single_char() {
                        map.insert(character, kind);
                    }
                }

                map
            };
        }
        SINGLE_CHAR_MAP.get(&character).copied()
    }
}

/// Is a sum type carrying the parsed value of a literal token.
///
/// Modeling the literal as a variant capability rather than a nullable field lets downstream
/// stages access the parsed value without runtime type tests.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
pub enum Literal {
    /// The token carries no literal value.
    None,

    /// The parsed floating-point value of a `NUMBER` token.
    Number(f64),

    /// The unquoted text of a `STRING` token.
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// Represents one lexeme of Rill source code.
///
/// Tokens are immutable once produced and own their source file through the span, so they remain
/// valid after the scanner that produced them is discarded.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the span of the source code that makes up the token.
    ///
    /// For string literals the span covers the surrounding quote characters, while the literal
    /// value strips them.
    #[get = "pub"]
    span: Span,

    /// Gets the parsed literal value of the token.
    #[get = "pub"]
    literal: Literal,

    /// Gets the 1-based source line on which the token's first character appears.
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    /// Gets the exact source substring that produced this token.
    #[must_use]
    pub fn lexeme(&self) -> &str { self.span.str() }
}

impl Display for Token {
    /// Renders `{kind} {lexeme} {literal}`, with the literal part empty when absent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme(), self.literal)
    }
}

#[cfg(test)]
pub(crate) mod tests;
