//! Modifier lists and annotations.

use super::{ExpressionParser, ModifierListGrammar, ReferenceParser};
use crate::{
    error::SyntaxErrorKind,
    parser::{CompletedMarker, Parser},
    syntax::SyntaxKind,
    token::{TokenKind, TokenSet},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationParser;

impl ModifierListGrammar for DeclarationParser {
    fn parse_modifier_list(&self, p: &mut Parser, modifiers: TokenSet) -> CompletedMarker {
        let m = p.start();
        loop {
            match p.current() {
                Some(kind) if modifiers.contains(kind) => p.bump(),
                Some(TokenKind::At) if p.nth_at(1, TokenKind::Ident) => {
                    self.parse_annotation(p);
                }
                _ => break,
            }
        }
        m.complete(p, SyntaxKind::ModifierList)
    }
}

impl DeclarationParser {
    /// Parses `@Name`, `@a.b.Name`, `@Name(value)` or `@Name(key = value, ...)`.
    ///
    /// The current token must be `@`.
    pub fn parse_annotation(&self, p: &mut Parser) -> CompletedMarker {
        let m = p.start();
        p.bump();
        if p.at(TokenKind::Ident) {
            ReferenceParser.parse_java_code_reference(p, false, false);
        } else {
            p.error(SyntaxErrorKind::ExpectedIdentifier);
        }
        if p.at(TokenKind::OpenParen) {
            self.parse_annotation_parameter_list(p);
        }
        m.complete(p, SyntaxKind::Annotation)
    }

    fn parse_annotation_parameter_list(&self, p: &mut Parser) {
        let m = p.start();
        p.bump();
        if !p.at(TokenKind::CloseParen) {
            loop {
                if p.at(TokenKind::Ident) && p.nth_at(1, TokenKind::Assign) {
                    let pair = p.start();
                    p.bump();
                    p.bump();
                    self.parse_annotation_value(p);
                    pair.complete(p, SyntaxKind::NameValuePair);
                } else {
                    self.parse_annotation_value(p);
                }
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        p.expect(TokenKind::CloseParen, SyntaxErrorKind::ExpectedRParen);
        m.complete(p, SyntaxKind::AnnotationParameterList);
    }

    fn parse_annotation_value(&self, p: &mut Parser) {
        if p.at(TokenKind::At) {
            self.parse_annotation(p);
        } else if p.at(TokenKind::OpenBrace) {
            ExpressionParser.parse_array_initializer(p);
        } else if ExpressionParser.parse_expression(p).is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
    }
}
