//! Type references.

use super::{DeclarationParser, TypeFlags, TypeGrammar};
use crate::{
    error::SyntaxErrorKind,
    parser::{CompletedMarker, Marker, Parser},
    syntax::SyntaxKind,
    token::TokenKind,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceParser;

impl TypeGrammar for ReferenceParser {
    fn parse_type(&self, p: &mut Parser, flags: TypeFlags) -> Option<CompletedMarker> {
        let checkpoint = p.checkpoint();
        let m = p.start();
        while p.at(TokenKind::At) && p.nth_at(1, TokenKind::Ident) {
            DeclarationParser.parse_annotation(p);
        }

        if p.current().is_some_and(TokenKind::is_primitive_type) {
            p.bump();
        } else if p.at(TokenKind::Ident) {
            self.parse_java_code_reference(p, flags.eat_last_dot, true);
        } else if flags.wildcard && p.at(TokenKind::Question) {
            return Some(self.parse_wildcard(p, m));
        } else {
            m.abandon(p);
            p.rollback(checkpoint);
            return None;
        }

        let mut ty = m.complete(p, SyntaxKind::Type);
        while p.at(TokenKind::OpenBracket) && p.nth_at(1, TokenKind::CloseBracket) {
            let m = ty.precede(p);
            p.bump();
            p.bump();
            ty = m.complete(p, SyntaxKind::Type);
        }
        if flags.ellipsis && p.at(TokenKind::Ellipsis) {
            let m = ty.precede(p);
            p.bump();
            ty = m.complete(p, SyntaxKind::Type);
        }
        Some(ty)
    }
}

impl ReferenceParser {
    /// Parses a possibly qualified name, `a.b.C`, nesting one
    /// `JavaCodeReference` per segment.
    ///
    /// The current token must be an identifier.
    pub fn parse_java_code_reference(
        &self,
        p: &mut Parser,
        eat_last_dot: bool,
        type_args: bool,
    ) -> CompletedMarker {
        let m = p.start();
        p.bump();
        if type_args && p.at(TokenKind::Lt) {
            self.parse_reference_parameter_list(p);
        }
        let mut reference = m.complete(p, SyntaxKind::JavaCodeReference);

        while p.at(TokenKind::Dot) {
            if p.nth_at(1, TokenKind::Ident) {
                let m = reference.precede(p);
                p.bump();
                p.bump();
                if type_args && p.at(TokenKind::Lt) {
                    self.parse_reference_parameter_list(p);
                }
                reference = m.complete(p, SyntaxKind::JavaCodeReference);
            } else if eat_last_dot {
                let m = reference.precede(p);
                p.bump();
                p.error(SyntaxErrorKind::ExpectedIdentifier);
                reference = m.complete(p, SyntaxKind::JavaCodeReference);
                break;
            } else {
                break;
            }
        }
        reference
    }

    /// Parses `<A, ? extends B>` or the diamond `<>`.
    fn parse_reference_parameter_list(&self, p: &mut Parser) {
        let m = p.start();
        p.bump();
        if !p.eat(TokenKind::Gt) {
            let mut complete = true;
            loop {
                if self.parse_type(p, TypeFlags::WILDCARD).is_none() {
                    p.error(SyntaxErrorKind::ExpectedType);
                    complete = false;
                    break;
                }
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            if complete {
                p.expect(TokenKind::Gt, SyntaxErrorKind::ExpectedGt);
            } else {
                p.eat(TokenKind::Gt);
            }
        }
        m.complete(p, SyntaxKind::ReferenceParameterList);
    }

    /// Parses `?`, `? extends T` or `? super T` inside the already started
    /// type marker `m`.
    fn parse_wildcard(&self, p: &mut Parser, m: Marker) -> CompletedMarker {
        p.bump();
        if p.at(TokenKind::Extends) || p.at(TokenKind::Super) {
            p.bump();
            if self.parse_type(p, TypeFlags::NONE).is_none() {
                p.error(SyntaxErrorKind::ExpectedType);
            }
        }
        m.complete(p, SyntaxKind::Type)
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_expression, syntax::SyntaxKind};

    fn type_texts(input: &str) -> Vec<String> {
        let parse = parse_expression(input);
        assert!(parse.errors().is_empty(), "{:?}", parse.errors());
        parse
            .syntax()
            .descendants()
            .filter(|node| {
                node.kind() == SyntaxKind::Type
                    && node
                        .ancestors()
                        .skip(1)
                        .all(|ancestor| ancestor.kind() != SyntaxKind::Type)
            })
            .map(|node| node.text().to_string())
            .collect()
    }

    #[test]
    fn test_generic_and_array_types() {
        assert_eq!(
            type_texts("o instanceof Map<String, List<? extends Number>>[] m"),
            vec!["Map<String, List<? extends Number>>[]"]
        );
    }

    #[test]
    fn test_qualified_type() {
        assert_eq!(
            type_texts("o instanceof java.util.List<?> l"),
            vec!["java.util.List<?>"]
        );
    }

    #[test]
    fn test_diamond_in_new() {
        let parse = parse_expression("new ArrayList<>()");
        assert!(parse.errors().is_empty(), "{:?}", parse.errors());
    }
}
