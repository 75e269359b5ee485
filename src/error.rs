//! The parse error type.

use text_size::TextRange;
use thiserror::Error;

use crate::{token::TokenKind, utils::Locatable};

/// A recoverable syntax error recorded at a point in the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {range:?}")]
pub struct ParseError {
    pub kind: SyntaxErrorKind,
    pub range: TextRange,
}

impl ParseError {
    pub const fn new(kind: SyntaxErrorKind, range: TextRange) -> Self {
        ParseError { kind, range }
    }
}

impl Locatable for ParseError {
    fn range(&self) -> TextRange {
        self.range
    }
}

/// What the grammar expected at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("expected expression")]
    ExpectedExpression,
    #[error("expected comma")]
    ExpectedComma,
    #[error("expected pattern")]
    ExpectedPattern,
    #[error("expected closing parenthesis")]
    ExpectedRParen,
    #[error("expected opening parenthesis")]
    ExpectedLParen,
    #[error("expected identifier")]
    ExpectedIdentifier,
    #[error("expected type")]
    ExpectedType,
    #[error("expected '>'")]
    ExpectedGt,
    #[error("expected ']'")]
    ExpectedRBracket,
    #[error("expected ':'")]
    ExpectedColon,
    #[error("expected '}}'")]
    ExpectedRBrace,
    #[error("expected ':' or '->'")]
    ExpectedColonOrArrow,
    #[error(
        "unexpected token ({})",
        .found.map_or_else(|| "end of input".to_owned(), |t| t.to_string()),
    )]
    UnexpectedToken { found: Option<TokenKind> },
}
