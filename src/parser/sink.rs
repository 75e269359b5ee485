use std::mem;

use rowan::{GreenNode, GreenNodeBuilder, Language};

use super::event::Event;
use crate::{
    error::ParseError,
    syntax::{JavaLanguage, SyntaxKind},
    token::Token,
};

/// Replays parser events into a lossless rowan tree, re-attaching the
/// trivia the parser skipped.
///
/// Trivia before a node start or a token is attached to the enclosing node,
/// trailing trivia goes to the root.
pub(crate) struct Sink<'t, 'input> {
    builder: GreenNodeBuilder<'static>,
    input: &'input str,
    tokens: &'t [Token],
    cursor: usize,
    depth: usize,
    events: Vec<Event>,
    errors: Vec<ParseError>,
}

impl<'t, 'input> Sink<'t, 'input> {
    pub(crate) fn new(input: &'input str, tokens: &'t [Token], events: Vec<Event>) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            input,
            tokens,
            cursor: 0,
            depth: 0,
            events,
            errors: Vec::new(),
        }
    }

    pub(crate) fn finish(mut self) -> (GreenNode, Vec<ParseError>) {
        for idx in 0..self.events.len() {
            match mem::replace(&mut self.events[idx], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    let mut kinds = vec![kind];

                    let mut idx = idx;
                    let mut forward_parent = forward_parent;

                    // Walk through the forward parent of the forward parent and the forward parent
                    // of that, and of that, etc. until we reach a Start event without a forward
                    // parent.
                    while let Some(fp) = forward_parent {
                        idx += fp;

                        forward_parent = match self
                            .events
                            .get_mut(idx)
                            .map(|event| mem::replace(event, Event::Placeholder))
                        {
                            Some(Event::Start {
                                kind,
                                forward_parent,
                            }) => {
                                kinds.push(kind);
                                forward_parent
                            }
                            _ => None,
                        };
                    }

                    if self.depth > 0 {
                        self.eat_trivia();
                    }
                    for kind in kinds.into_iter().rev() {
                        self.builder.start_node(JavaLanguage::kind_to_raw(kind));
                        self.depth += 1;
                    }
                }
                Event::Token { kind } => {
                    self.eat_trivia();
                    debug_assert_eq!(self.tokens.get(self.cursor).map(|t| t.kind), Some(kind));
                    self.token();
                }
                Event::Finish => {
                    if self.depth == 1 {
                        self.eat_trivia();
                    }
                    self.builder.finish_node();
                    self.depth -= 1;
                }
                Event::Error { error } => {
                    self.eat_trivia();
                    self.builder
                        .start_node(JavaLanguage::kind_to_raw(SyntaxKind::Error));
                    self.builder.finish_node();
                    self.errors.push(error);
                }
                Event::Placeholder => (),
            }
        }

        (self.builder.finish(), self.errors)
    }

    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }

            self.token();
        }
    }

    fn token(&mut self) {
        if let Some(Token { kind, range }) = self.tokens.get(self.cursor).copied() {
            self.builder
                .token(JavaLanguage::kind_to_raw(kind.into()), &self.input[range]);
            self.cursor += 1;
        }
    }
}
