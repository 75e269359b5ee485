//! Switch labels.

use super::{ExprFlags, ExpressionParser, PatternParser};
use crate::{
    error::SyntaxErrorKind,
    parser::{CompletedMarker, Parser},
    syntax::SyntaxKind,
    token::TokenKind,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StatementParser;

impl StatementParser {
    /// Parses `case a, b ->`, `case Point(var x, var y) p && ... :` or
    /// `default:`.
    ///
    /// Records an unexpected token if the current token is neither `case`
    /// nor `default`.
    pub fn parse_switch_label(&self, p: &mut Parser) -> Option<CompletedMarker> {
        let m = p.start();
        if p.eat(TokenKind::Default) {
            expect_colon_or_arrow(p);
            return Some(m.complete(p, SyntaxKind::SwitchLabel));
        }
        if !p.eat(TokenKind::Case) {
            m.abandon(p);
            p.unexpected();
            return None;
        }

        let elements = p.start();
        loop {
            if !self.parse_case_label_element(p) {
                p.error(SyntaxErrorKind::ExpectedExpression);
                break;
            }
            if !p.eat(TokenKind::Comma) {
                break;
            }
        }
        elements.complete(p, SyntaxKind::CaseLabelElementList);
        expect_colon_or_arrow(p);
        Some(m.complete(p, SyntaxKind::SwitchLabel))
    }

    fn parse_case_label_element(&self, p: &mut Parser) -> bool {
        if p.at(TokenKind::Default) {
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::DefaultCaseLabelElement);
            return true;
        }
        let patterns = PatternParser::java();
        if patterns.is_pattern(p) {
            patterns.parse_pattern(p);
            return true;
        }
        ExpressionParser
            .parse_conditional(p, ExprFlags::FORBID_LAMBDA)
            .is_some()
    }
}

fn expect_colon_or_arrow(p: &mut Parser) {
    if !p.eat(TokenKind::Colon) && !p.eat(TokenKind::Arrow) {
        p.error(SyntaxErrorKind::ExpectedColonOrArrow);
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_switch_label, syntax::SyntaxKind};

    fn element_kinds(input: &str) -> Vec<SyntaxKind> {
        let parse = parse_switch_label(input);
        assert!(parse.errors().is_empty(), "{input:?}: {:?}", parse.errors());
        parse
            .syntax()
            .descendants()
            .find(|node| node.kind() == SyntaxKind::CaseLabelElementList)
            .map(|list| list.children().map(|node| node.kind()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_constant_labels() {
        assert_eq!(
            element_kinds("case 1, 2 ->"),
            vec![SyntaxKind::LiteralExpression, SyntaxKind::LiteralExpression]
        );
        assert_eq!(
            element_kinds("case null, default:"),
            vec![
                SyntaxKind::LiteralExpression,
                SyntaxKind::DefaultCaseLabelElement
            ]
        );
    }

    #[test]
    fn test_pattern_labels() {
        assert_eq!(
            element_kinds("case Point(int x, int y) p && x > 0 ->"),
            vec![SyntaxKind::GuardedPattern]
        );
        assert_eq!(
            element_kinds("case String s:"),
            vec![SyntaxKind::TypeTestPattern]
        );
    }

    #[test]
    fn test_arrow_is_not_a_lambda() {
        assert_eq!(
            element_kinds("case FOO -> "),
            vec![SyntaxKind::ReferenceExpression]
        );
    }

    #[test]
    fn test_default_label() {
        let parse = parse_switch_label("default ->");
        assert!(parse.errors().is_empty());
        assert_eq!(
            parse.syntax().first_child().map(|node| node.kind()),
            Some(SyntaxKind::SwitchLabel)
        );
        let parse = parse_switch_label("default");
        assert_eq!(parse.errors().len(), 1);
    }

    #[test]
    fn test_not_a_label() {
        let parse = parse_switch_label("x ->");
        assert!(!parse.errors().is_empty());
        assert_eq!(parse.syntax().text().to_string(), "x ->");
    }
}
