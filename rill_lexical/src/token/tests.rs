use std::fmt::{Display, Write};

use lazy_static::lazy_static;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};
use rill_base::{diagnostic::Storage, source_file::SourceFile};
use rill_test::input::Input;
use strum::IntoEnumIterator;

use super::{Literal, TokenKind};
use crate::{error, token_sequence::TokenSequence};

/// Gets the fixed source text of the given kind, for the punctuation and operator kinds whose
/// lexeme is always the same.
pub fn fixed_lexeme(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::LeftParen => Some("("),
        TokenKind::RightParen => Some(")"),
        TokenKind::LeftBrace => Some("{"),
        TokenKind::RightBrace => Some("}"),
        TokenKind::Comma => Some(","),
        TokenKind::Dot => Some("."),
        TokenKind::Minus => Some("-"),
        TokenKind::Plus => Some("+"),
        TokenKind::Semicolon => Some(";"),
        TokenKind::Star => Some("*"),
        TokenKind::Slash => Some("/"),
        TokenKind::Bang => Some("!"),
        TokenKind::BangEqual => Some("!="),
        TokenKind::Equal => Some("="),
        TokenKind::EqualEqual => Some("=="),
        TokenKind::Less => Some("<"),
        TokenKind::LessEqual => Some("<="),
        TokenKind::Greater => Some(">"),
        TokenKind::GreaterEqual => Some(">="),
        TokenKind::String | TokenKind::Number | TokenKind::Identifier | TokenKind::Eof => None,
    }
}

/// Represents an input for an identifier token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The valid identifier string.
    pub string: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[A-Za-z_][A-Za-z0-9_]*"
            .prop_map(|string| Self { string })
            .boxed()
    }
}

impl Input<&super::Token> for &Identifier {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), TokenKind::Identifier);
        prop_assert_eq!(output.lexeme(), self.string.as_str());
        prop_assert_eq!(output.literal(), &Literal::None);
        Ok(())
    }
}

/// Represents an input for a number literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumberLiteral {
    /// The digits before the decimal point.
    pub whole: u32,

    /// The digits after the decimal point, if any.
    pub fraction: Option<u32>,
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.whole)?;

        if let Some(fraction) = self.fraction {
            write!(f, ".{fraction}")?;
        }

        Ok(())
    }
}

impl Arbitrary for NumberLiteral {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            proptest::num::u32::ANY,
            proptest::option::of(proptest::num::u32::ANY),
        )
            .prop_map(|(whole, fraction)| Self { whole, fraction })
            .boxed()
    }
}

impl Input<&super::Token> for &NumberLiteral {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), TokenKind::Number);
        let expected_lexeme = self.to_string();
        prop_assert_eq!(output.lexeme(), expected_lexeme.as_str());

        let expected = self.to_string().parse::<f64>().unwrap();
        prop_assert_eq!(output.literal(), &Literal::Number(expected));

        Ok(())
    }
}

/// Represents an input for a string literal token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// The content of the string literal (without the surrounding quotes).
    pub content: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        f.write_str(&self.content)?;
        f.write_char('"')
    }
}

impl Arbitrary for StringLiteral {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[^\"\r]*".prop_map(|content| Self { content }).boxed()
    }
}

impl Input<&super::Token> for &StringLiteral {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), TokenKind::String);
        let expected_lexeme = format!("\"{}\"", self.content);
        prop_assert_eq!(output.lexeme(), expected_lexeme.as_str());
        prop_assert_eq!(output.literal(), &Literal::String(self.content.clone()));
        Ok(())
    }
}

/// Represents an input for a punctuation or operator token with a fixed lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    /// The punctuation/operator kind.
    pub kind: TokenKind,
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(fixed_lexeme(self.kind).unwrap())
    }
}

impl Arbitrary for Punctuation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref FIXED_KINDS: Vec<TokenKind> = TokenKind::iter()
                .filter(|kind| fixed_lexeme(*kind).is_some())
                .collect();
        }

        proptest::sample::select(FIXED_KINDS.as_slice())
            .prop_map(|kind| Self { kind })
            .boxed()
    }
}

impl Input<&super::Token> for &Punctuation {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), self.kind);
        prop_assert_eq!(output.lexeme(), fixed_lexeme(self.kind).unwrap());
        prop_assert_eq!(output.literal(), &Literal::None);
        Ok(())
    }
}

/// Represents an input for any single significant token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
    Punctuation(Punctuation),
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Identifier::arbitrary().prop_map(Self::Identifier),
            NumberLiteral::arbitrary().prop_map(Self::NumberLiteral),
            StringLiteral::arbitrary().prop_map(Self::StringLiteral),
            Punctuation::arbitrary().prop_map(Self::Punctuation),
        ]
        .boxed()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(x) => Display::fmt(x, f),
            Self::NumberLiteral(x) => Display::fmt(x, f),
            Self::StringLiteral(x) => Display::fmt(x, f),
            Self::Punctuation(x) => Display::fmt(x, f),
        }
    }
}

impl Input<&super::Token> for &Token {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        match self {
            Token::Identifier(input) => input.assert(output),
            Token::NumberLiteral(input) => input.assert(output),
            Token::StringLiteral(input) => input.assert(output),
            Token::Punctuation(input) => input.assert(output),
        }
    }
}

fn tokenize(source: String) -> Result<super::Token, TestCaseError> {
    let source_file = SourceFile::temp(source)?;

    let error_storage: Storage<error::Error> = Storage::new();
    let token_sequence = TokenSequence::scan(&source_file, &error_storage);

    // a single significant lexeme scans to itself plus the end-of-input marker
    prop_assert!(error_storage.as_vec().is_empty());
    prop_assert_eq!(token_sequence.len(), 2);
    prop_assert_eq!(token_sequence[1].kind(), TokenKind::Eof);

    Ok(token_sequence.dissolve().into_iter().next().unwrap())
}

proptest! {
    #[test]
    fn token_test(
        input in Token::arbitrary()
    ) {
        let source = input.to_string();
        let token = tokenize(source)?;

        input.assert(&token)?;
    }
}

#[test]
fn single_char_lookup_round_trips() {
    for kind in TokenKind::iter() {
        if let Some(character) = kind.single_char() {
            assert_eq!(TokenKind::from_single_char(character), Some(kind));
        }
    }

    // characters that need lookahead are never in the fixed table
    assert_eq!(TokenKind::from_single_char('/'), None);
    assert_eq!(TokenKind::from_single_char('!'), None);
    assert_eq!(TokenKind::from_single_char('='), None);
    assert_eq!(TokenKind::from_single_char('<'), None);
    assert_eq!(TokenKind::from_single_char('>'), None);
    assert_eq!(TokenKind::from_single_char('"'), None);
}

#[test]
fn kind_names_render_in_screaming_snake_case() {
    assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
    assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn token_display_matches_the_driver_rendering() {
    let source_file = SourceFile::temp("123 \"hi\" !").unwrap();

    let error_storage: Storage<error::Error> = Storage::new();
    let token_sequence = TokenSequence::scan(&source_file, &error_storage);

    assert_eq!(token_sequence[0].to_string(), "NUMBER 123 123");
    assert_eq!(token_sequence[1].to_string(), "STRING \"hi\" hi");
    assert_eq!(token_sequence[2].to_string(), "BANG ! ");
    assert_eq!(token_sequence[3].to_string(), "EOF  ");
}
