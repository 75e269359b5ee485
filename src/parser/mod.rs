//! The parser core: a cursor over the significant tokens and an event buffer.
//!
//! Grammars drive the [`Parser`] through [`Marker`]s: `start` opens a node,
//! `Marker::complete` closes it with a kind, `Marker::abandon` discards it.
//! Speculative parses take a [`Checkpoint`] and [`Parser::rollback`] to it,
//! which restores the cursor and every event and marker recorded since.
//!
//! ```txt
//!        +-------+            +--------+            +------+
//! str -> | lexer | - Tokens -> | parser | - Events -> | sink | -> rowan tree
//!        +-------+            +--------+            +------+
//! ```

mod event;
mod marker;
mod sink;

use log::{debug, trace};
use text_size::{TextRange, TextSize};

use crate::{
    error::{ParseError, SyntaxErrorKind},
    token::{Token, TokenKind},
};

pub(crate) use event::Event;
pub use marker::{CompletedMarker, Marker};
pub(crate) use sink::Sink;

use marker::MarkerState;

/// A saved parser position. See [`Parser::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Checkpoint {
    pos: usize,
    events: usize,
    markers: usize,
    open: usize,
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    text_len: TextSize,
    pub(crate) events: Vec<Event>,
    markers: Vec<MarkerState>,
    open: Vec<usize>,
}

impl Parser {
    /// Constructs a new `Parser` over `tokens`. Trivia is skipped here and
    /// re-attached by the sink.
    pub fn new(tokens: &[Token], text_len: TextSize) -> Self {
        Self {
            tokens: tokens
                .iter()
                .copied()
                .filter(|token| !token.kind.is_trivia())
                .collect(),
            pos: 0,
            text_len,
            events: Vec::new(),
            markers: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Starts a new node in the syntax tree. All nodes and tokens
    /// consumed between the `start` and the corresponding `Marker::complete`
    /// belong to the same node.
    pub fn start(&mut self) -> Marker {
        let id = self.markers.len();
        let pos = self.events.len();
        self.markers.push(MarkerState::Open);
        self.open.push(id);
        self.events.push(Event::Placeholder);
        Marker::new(id, pos)
    }

    /// Closes marker `id`, which must be the innermost open marker.
    fn close_marker(&mut self, id: usize, state: MarkerState) {
        assert_eq!(
            self.markers[id],
            MarkerState::Open,
            "marker {id} was already closed"
        );
        assert_eq!(
            self.open.last(),
            Some(&id),
            "marker {id} is not the innermost open marker"
        );
        self.open.pop();
        self.markers[id] = state;
    }

    /// Saves the current position for a later [`Parser::rollback`].
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            events: self.events.len(),
            markers: self.markers.len(),
            open: self.open.len(),
        }
    }

    /// Restores the position saved in `checkpoint`, discarding every token
    /// consumed, node built and error recorded since.
    ///
    /// Markers opened after the checkpoint must all be closed, and markers
    /// opened before it must still be open.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        assert_eq!(
            self.open.len(),
            checkpoint.open,
            "rollback across an unbalanced marker"
        );
        trace!(
            "rollback from token {} to token {}",
            self.pos,
            checkpoint.pos
        );
        self.pos = checkpoint.pos;
        self.events.truncate(checkpoint.events);
        self.markers.truncate(checkpoint.markers);
    }

    /// Checks if an error was recorded since `checkpoint` was taken.
    pub fn has_errors_since(&self, checkpoint: Checkpoint) -> bool {
        self.events.get(checkpoint.events..).is_some_and(|events| {
            events
                .iter()
                .any(|event| matches!(event, Event::Error { .. }))
        })
    }

    /// Returns the kind of the current token, `None` at the end of input.
    pub fn current(&self) -> Option<TokenKind> {
        self.nth(0)
    }

    /// Returns the kind of the `n`th token ahead.
    pub fn nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|token| token.kind)
    }

    /// Checks if the current token is `kind`.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// Checks if the `n`th token ahead is `kind`.
    pub fn nth_at(&self, n: usize, kind: TokenKind) -> bool {
        self.nth(n) == Some(kind)
    }

    /// Checks if the tokens ahead are exactly `kinds`, with no trivia between them.
    pub fn at_composite(&self, kinds: &[TokenKind]) -> bool {
        let Some(tokens) = self.tokens.get(self.pos..self.pos + kinds.len()) else {
            return false;
        };
        tokens.iter().zip(kinds).all(|(token, kind)| token.kind == *kind)
            && tokens
                .windows(2)
                .all(|pair| pair[0].range.end() == pair[1].range.start())
    }

    pub fn at_end(&self) -> bool {
        self.current().is_none()
    }

    /// Returns the start of the current token, or the end of input.
    fn current_offset(&self) -> TextSize {
        self.tokens
            .get(self.pos)
            .map_or(self.text_len, |token| token.range.start())
    }

    /// Moves to the next token. Does nothing at the end of input.
    pub fn bump(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            self.events.push(Event::Token { kind: token.kind });
            self.pos += 1;
        }
    }

    /// Consumes the next `n` tokens, e.g. both halves of a `>>` operator.
    pub fn bump_composite(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Consumes a token `kind` if it exists. Returns whether the given token was present.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        let is_present = self.at(kind);
        if is_present {
            self.bump();
        }
        is_present
    }

    /// Consumes the token `kind`, or records `error` if the current token is not `kind`.
    pub fn expect(&mut self, kind: TokenKind, error: SyntaxErrorKind) -> bool {
        let is_present = self.eat(kind);
        if !is_present {
            self.error(error);
        }
        is_present
    }

    /// Records a recoverable error at the current position.
    pub fn error(&mut self, kind: SyntaxErrorKind) {
        let range = TextRange::empty(self.current_offset());
        debug!("error `{kind}` at {range:?}");
        self.events.push(Event::Error {
            error: ParseError::new(kind, range),
        });
    }

    /// Records an unexpected token error.
    pub fn unexpected(&mut self) {
        let found = self.current();
        self.error(SyntaxErrorKind::UnexpectedToken { found });
    }

    /// Returns the events recorded so far. Every marker must be closed.
    pub(crate) fn finish(self) -> Vec<Event> {
        assert!(self.open.is_empty(), "unclosed marker at end of parse");
        self.events
    }
}
