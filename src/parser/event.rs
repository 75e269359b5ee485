use crate::{error::ParseError, syntax::SyntaxKind, token::TokenKind};

/// Flat output of the parser, replayed into a tree by the `Sink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// A node start that is not decided yet, or was abandoned.
    /// The sink ignores it.
    Placeholder,

    /// Start of a node. `forward_parent` is the distance to the `Start` event
    /// of a node that was opened later but wraps this one, see
    /// [`CompletedMarker::precede`](super::marker::CompletedMarker::precede).
    Start {
        kind: SyntaxKind,
        forward_parent: Option<usize>,
    },

    Finish,

    Token {
        kind: TokenKind,
    },

    /// A recoverable syntax error at the current position.
    Error {
        error: ParseError,
    },
}
