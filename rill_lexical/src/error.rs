//! Contains all kinds of lexical errors that can occur while tokenizing the source code.
//!
//! The `Display` implementations are the stable diagnostic format consumed by the driver:
//! `[line {line}] Error: {message}`.

use derive_more::From;
use enum_as_inner::EnumAsInner;
use thiserror::Error;

/// The scanner consumed a character that matches none of the recognized lexeme classes.
///
/// The offending character is skipped and scanning continues from the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("[line {line}] Error: Unexpected character.")]
pub struct UnexpectedCharacter {
    /// The 1-based line on which the offending character appears.
    pub line: usize,
}

/// The source text ended while a string literal was still open.
///
/// The partially consumed literal produces no token; scanning ends at the end of input as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("[line {line}] Error: Unterminated string.")]
pub struct UnterminatedString {
    /// The 1-based line on which scanning ended.
    pub line: usize,
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, Error,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnexpectedCharacter(UnexpectedCharacter),

    #[error(transparent)]
    UnterminatedString(UnterminatedString),
}
