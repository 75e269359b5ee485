use super::{event::Event, Parser};
use crate::syntax::SyntaxKind;

/// Lifecycle of a marker. Every marker starts `Open` and is closed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkerState {
    Open,
    Completed,
    Abandoned,
}

/// An open syntax tree node. It must be either completed or abandoned
/// before it goes out of scope.
#[must_use = "a marker must be completed or abandoned"]
#[derive(Debug)]
pub struct Marker {
    id: usize,
    pos: usize,
    closed: bool,
}

impl Marker {
    pub(super) fn new(id: usize, pos: usize) -> Marker {
        Marker {
            id,
            pos,
            closed: false,
        }
    }

    /// Closes the node as `kind`. The returned `CompletedMarker` can still
    /// be wrapped in an outer node with [`CompletedMarker::precede`].
    pub fn complete(mut self, p: &mut Parser, kind: SyntaxKind) -> CompletedMarker {
        self.closed = true;
        p.close_marker(self.id, MarkerState::Completed);
        let event_at_pos = &mut p.events[self.pos];
        match event_at_pos {
            Event::Placeholder => {
                *event_at_pos = Event::Start {
                    kind,
                    forward_parent: None,
                };
            }
            _ => unreachable!(),
        }
        p.events.push(Event::Finish);
        CompletedMarker::new(self.pos, kind)
    }

    /// Discards the node. Everything parsed since the marker was started
    /// stays in the tree and is attached to the enclosing node.
    pub fn abandon(mut self, p: &mut Parser) {
        self.closed = true;
        p.close_marker(self.id, MarkerState::Abandoned);
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => (),
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.closed && !std::thread::panicking() {
            panic!("Marker must be completed or abandoned")
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompletedMarker {
    pos: usize,
    kind: SyntaxKind,
}

impl CompletedMarker {
    fn new(pos: usize, kind: SyntaxKind) -> Self {
        CompletedMarker { pos, kind }
    }

    /// Starts a node that will wrap this completed one, as in `a + b` where
    /// the `BinaryExpression` is only known once `a` is done.
    ///
    /// The new `Start` event is appended and linked from the old one through
    /// `forward_parent`, holding the distance between the two.
    pub fn precede(self, p: &mut Parser) -> Marker {
        let new_pos = p.start();
        match &mut p.events[self.pos] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.pos - self.pos);
            }
            _ => unreachable!(),
        }
        new_pos
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }
}
