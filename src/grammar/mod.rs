//! The Java grammars.
//!
//! [`PatternParser`] is the grammar for pattern matching syntax. It delegates
//! three sub-grammars through narrow seams, so that each can be substituted
//! independently:
//!
//! - [`ModifierListGrammar`], implemented by [`DeclarationParser`],
//! - [`TypeGrammar`], implemented by [`ReferenceParser`],
//! - [`ConditionalAndGrammar`], implemented by [`ExpressionParser`].

mod declaration;
mod expression;
mod pattern;
mod reference;
mod statement;

use std::ops::BitOr;

use crate::{
    parser::{CompletedMarker, Parser},
    token::TokenSet,
};

pub use declaration::DeclarationParser;
pub use expression::ExpressionParser;
pub use pattern::{PatternParser, PATTERN_MODIFIERS};
pub use reference::ReferenceParser;
pub use statement::StatementParser;

/// Parses a modifier list.
pub trait ModifierListGrammar {
    /// Always produces a `ModifierList` node, possibly empty, holding every
    /// consecutive modifier in `modifiers` and every annotation.
    fn parse_modifier_list(&self, p: &mut Parser, modifiers: TokenSet) -> CompletedMarker;
}

/// Parses a type reference.
pub trait TypeGrammar {
    /// Parses a `Type` node, or returns `None` without leaving any events
    /// behind if no type starts at the current token.
    fn parse_type(&self, p: &mut Parser, flags: TypeFlags) -> Option<CompletedMarker>;
}

/// Parses a conditional-AND expression (`a && b`) and everything binding
/// tighter.
pub trait ConditionalAndGrammar {
    /// Returns `None` without leaving any events behind if no expression
    /// starts at the current token.
    fn parse_conditional_and(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker>;
}

/// Options of [`TypeGrammar::parse_type`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFlags {
    /// Consume a trailing `.` that is not followed by an identifier,
    /// reporting the missing identifier.
    pub eat_last_dot: bool,
    /// Accept a `?` wildcard as the type itself.
    pub wildcard: bool,
    /// Accept a `...` after the type.
    pub ellipsis: bool,
}

impl TypeFlags {
    pub const NONE: TypeFlags = TypeFlags {
        eat_last_dot: false,
        wildcard: false,
        ellipsis: false,
    };
    pub const EAT_LAST_DOT: TypeFlags = TypeFlags {
        eat_last_dot: true,
        ..TypeFlags::NONE
    };
    pub const WILDCARD: TypeFlags = TypeFlags {
        wildcard: true,
        ..TypeFlags::NONE
    };
    pub const ELLIPSIS: TypeFlags = TypeFlags {
        ellipsis: true,
        ..TypeFlags::NONE
    };
}

impl BitOr for TypeFlags {
    type Output = TypeFlags;

    fn bitor(self, rhs: TypeFlags) -> TypeFlags {
        TypeFlags {
            eat_last_dot: self.eat_last_dot || rhs.eat_last_dot,
            wildcard: self.wildcard || rhs.wildcard,
            ellipsis: self.ellipsis || rhs.ellipsis,
        }
    }
}

/// Options of [`ConditionalAndGrammar::parse_conditional_and`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExprFlags {
    /// Do not treat `x -> ...` as a lambda expression.
    pub forbid_lambda: bool,
}

impl ExprFlags {
    pub const NONE: ExprFlags = ExprFlags {
        forbid_lambda: false,
    };
    pub const FORBID_LAMBDA: ExprFlags = ExprFlags {
        forbid_lambda: true,
    };
}
