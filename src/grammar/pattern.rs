//! Patterns of `instanceof` expressions and switch labels.
//!
//! ```txt
//! Pattern         = PrimaryPattern [ "&&" ConditionalAndExpression ]
//! PrimaryPattern  = "(" Pattern ")"
//!                 | Modifiers Type RecordStructure [ Identifier ]
//!                 | Modifiers Type Identifier
//! RecordStructure = "(" [ Pattern { "," Pattern } ] ")"
//! ```

use log::trace;

use super::{
    ConditionalAndGrammar, DeclarationParser, ExprFlags, ExpressionParser, ModifierListGrammar,
    ReferenceParser, TypeFlags, TypeGrammar,
};
use crate::{
    error::SyntaxErrorKind,
    parser::{CompletedMarker, Parser},
    syntax::SyntaxKind,
    token::{TokenKind, TokenSet},
};

/// The only modifier a pattern variable accepts.
pub const PATTERN_MODIFIERS: TokenSet = TokenSet::new(&[TokenKind::Final]);

const PATTERN_TYPE: TypeFlags = TypeFlags {
    eat_last_dot: true,
    wildcard: true,
    ellipsis: false,
};

/// Recursive descent parser for patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser<M = DeclarationParser, T = ReferenceParser, E = ExpressionParser> {
    modifiers: M,
    types: T,
    expressions: E,
}

impl PatternParser {
    /// The pattern parser backed by the Java sub-grammars of this crate.
    pub const fn java() -> Self {
        PatternParser {
            modifiers: DeclarationParser,
            types: ReferenceParser,
            expressions: ExpressionParser,
        }
    }
}

impl<M, T, E> PatternParser<M, T, E>
where
    M: ModifierListGrammar,
    T: TypeGrammar,
    E: ConditionalAndGrammar,
{
    pub const fn new(modifiers: M, types: T, expressions: E) -> Self {
        PatternParser {
            modifiers,
            types,
            expressions,
        }
    }

    /// Checks whether the tokens ahead can be parsed as a pattern.
    ///
    /// The answer only makes sense where a pattern may appear, that is a
    /// switch label or the right operand of `instanceof`. The parser is left
    /// exactly as it was found.
    pub fn is_pattern(&self, p: &mut Parser) -> bool {
        let checkpoint = p.checkpoint();
        while p.at(TokenKind::OpenParen) {
            p.bump();
        }
        self.modifiers.parse_modifier_list(p, PATTERN_MODIFIERS);
        let ty = self.types.parse_type(p, PATTERN_TYPE);
        let is_pattern =
            ty.is_some() && (p.at(TokenKind::Ident) || p.at(TokenKind::OpenParen));
        p.rollback(checkpoint);
        trace!("is_pattern: {is_pattern}");
        is_pattern
    }

    /// Parses a pattern, guarded or not.
    ///
    /// Must be called only if [`PatternParser::is_pattern`] returned true.
    pub fn parse_pattern(&self, p: &mut Parser) -> CompletedMarker {
        let guarded = p.start();
        let primary = self.parse_primary_pattern(p);
        if !p.at(TokenKind::AndAnd) {
            guarded.abandon(p);
            return primary;
        }
        p.bump();
        let guard = self
            .expressions
            .parse_conditional_and(p, ExprFlags::FORBID_LAMBDA);
        if guard.is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
        guarded.complete(p, SyntaxKind::GuardedPattern)
    }

    /// Parses a pattern without a guard at the top level.
    ///
    /// Must be called only if [`PatternParser::is_pattern`] returned true.
    pub fn parse_primary_pattern(&self, p: &mut Parser) -> CompletedMarker {
        if p.at(TokenKind::OpenParen) {
            let m = p.start();
            p.bump();
            self.parse_pattern(p);
            p.expect(TokenKind::CloseParen, SyntaxErrorKind::ExpectedRParen);
            return m.complete(p, SyntaxKind::ParenthesizedPattern);
        }
        self.parse_type_or_record_pattern(p)
    }

    fn parse_record_structure_pattern(&self, p: &mut Parser) {
        let m = p.start();
        let has_lparen = p.eat(TokenKind::OpenParen);
        assert!(has_lparen, "record structure must start with '('");

        let mut is_first = true;
        while !p.at(TokenKind::CloseParen) {
            if !is_first {
                p.expect(TokenKind::Comma, SyntaxErrorKind::ExpectedComma);
            }

            if p.at_end() {
                break;
            }

            if self.is_pattern(p) {
                self.parse_pattern(p);
                is_first = false;
            } else {
                p.error(SyntaxErrorKind::ExpectedPattern);
                if p.at(TokenKind::CloseParen) {
                    break;
                }
                p.bump();
            }
        }
        p.expect(TokenKind::CloseParen, SyntaxErrorKind::ExpectedRParen);
        m.complete(p, SyntaxKind::RecordStructurePattern);
    }

    fn parse_type_or_record_pattern(&self, p: &mut Parser) -> CompletedMarker {
        let pattern = p.start();
        let pattern_variable = p.start();
        self.modifiers.parse_modifier_list(p, PATTERN_MODIFIERS);

        let ty = self.types.parse_type(p, PATTERN_TYPE);
        assert!(ty.is_some(), "pattern without a type, guarded by is_pattern");

        let is_record = p.at(TokenKind::OpenParen);
        if is_record {
            self.parse_record_structure_pattern(p);
        }

        // a record pattern may be named, a type test pattern must be
        let has_identifier = p.at(TokenKind::Ident);
        if has_identifier {
            if is_record {
                let variable = p.start();
                p.bump();
                variable.complete(p, SyntaxKind::RecordPatternVariable);
            } else {
                p.bump();
            }
        }

        if is_record {
            pattern_variable.abandon(p);
            pattern.complete(p, SyntaxKind::RecordPattern)
        } else {
            assert!(has_identifier, "type test pattern without a name, guarded by is_pattern");
            pattern_variable.complete(p, SyntaxKind::PatternVariable);
            pattern.complete(p, SyntaxKind::TypeTestPattern)
        }
    }
}
