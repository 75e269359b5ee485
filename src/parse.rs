//! Entry points: source text in, lossless syntax tree and errors out.

use std::fmt::Write;

use log::debug;
use rowan::{GreenNode, NodeOrToken, WalkEvent};
use text_size::TextSize;

use crate::{
    error::{ParseError, SyntaxErrorKind},
    grammar::{ExpressionParser, PatternParser, StatementParser},
    lexer::tokenize,
    parser::{Event, Parser, Sink},
    syntax::{SyntaxKind, SyntaxNode},
    utils::{Join, LineIndex, Locatable},
};

/// The result of a parse: a `Root` node covering the whole input, and every
/// error recorded, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    green_node: GreenNode,
    errors: Vec<ParseError>,
}

impl Parse {
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    pub fn green_node(&self) -> &GreenNode {
        &self.green_node
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Dumps the tree, one element per line:
    ///
    /// ```txt
    /// Root@0..8
    ///   TypeTestPattern@0..8
    ///     PatternVariable@0..8
    /// ...
    /// ```
    pub fn debug_tree(&self) -> String {
        let mut buf = String::new();
        let mut indent = 0;
        for event in self.syntax().preorder_with_tokens() {
            match event {
                WalkEvent::Enter(element) => {
                    let _ = write!(buf, "{:indent$}{:?}@{:?}", "", element.kind(), element.text_range());
                    if let NodeOrToken::Token(token) = &element {
                        let _ = write!(buf, " {:?}", token.text());
                    }
                    buf.push('\n');
                    indent += 2;
                }
                WalkEvent::Leave(_) => indent -= 2,
            }
        }
        buf
    }

    /// Renders every error as `line:col: message`, one per line.
    pub fn diagnostics(&self) -> String {
        let text = self.syntax().text().to_string();
        let index = LineIndex::new(&text);
        self.errors
            .iter()
            .map(|error| {
                let (line, col) = index.line_col(error.start());
                format!("{line}:{col}: {}", error.kind)
            })
            .join("\n")
    }
}

/// Parses `input` as a single pattern, e.g. `Point(int x, int y) p && x > 0`.
///
/// Input that does not start with a pattern is reported as `expected pattern`
/// and kept in an `Error` node.
pub fn parse_pattern(input: &str) -> Parse {
    parse_with(input, |p| {
        let patterns = PatternParser::java();
        if patterns.is_pattern(p) {
            patterns.parse_pattern(p);
        } else {
            let m = p.start();
            p.error(SyntaxErrorKind::ExpectedPattern);
            while !p.at_end() {
                p.bump();
            }
            m.complete(p, SyntaxKind::Error);
        }
    })
}

/// Parses `input` as a single expression.
pub fn parse_expression(input: &str) -> Parse {
    parse_with(input, |p| {
        if ExpressionParser.parse_expression(p).is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
    })
}

/// Parses `input` as a single switch label, `case ...:` or `default ->`.
pub fn parse_switch_label(input: &str) -> Parse {
    parse_with(input, |p| {
        StatementParser.parse_switch_label(p);
    })
}

fn parse_with(input: &str, f: impl FnOnce(&mut Parser)) -> Parse {
    let tokens: Vec<_> = tokenize(input).collect();
    let mut p = Parser::new(&tokens, TextSize::of(input));
    let root = p.start();
    f(&mut p);

    if !p.at_end() {
        // an error recorded since the last token was reported at this position
        let reported = p
            .events
            .iter()
            .rev()
            .take_while(|event| !matches!(event, Event::Token { .. }))
            .any(|event| matches!(event, Event::Error { .. }));
        let m = p.start();
        if !reported {
            p.unexpected();
        }
        while !p.at_end() {
            p.bump();
        }
        m.complete(&mut p, SyntaxKind::Error);
    }
    root.complete(&mut p, SyntaxKind::Root);

    let (green_node, errors) = Sink::new(input, &tokens, p.finish()).finish();
    debug!("parsed {} bytes with {} errors", input.len(), errors.len());
    Parse { green_node, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_tree() {
        let parse = parse_pattern("String s");
        assert_eq!(
            parse.debug_tree(),
            r#"Root@0..8
  TypeTestPattern@0..8
    PatternVariable@0..8
      ModifierList@0..0
      Type@0..6
        JavaCodeReference@0..6
          Ident@0..6 "String"
      Whitespace@6..7 " "
      Ident@7..8 "s"
"#
        );
    }

    #[test]
    fn test_trailing_tokens_reported_once() {
        let parse = parse_expression("a b c");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(
            parse.errors()[0].kind,
            SyntaxErrorKind::UnexpectedToken {
                found: Some(crate::token::TokenKind::Ident)
            }
        );
        let error = parse.syntax().last_child().unwrap();
        assert_eq!(error.kind(), SyntaxKind::Error);
        assert_eq!(error.text().to_string(), "b c");
    }

    #[test]
    fn test_not_a_pattern() {
        let parse = parse_pattern("1 + 2");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(parse.errors()[0].kind, SyntaxErrorKind::ExpectedPattern);
        assert_eq!(parse.syntax().text().to_string(), "1 + 2");
    }

    #[test]
    fn test_diagnostics() {
        let parse = parse_expression("a +\n");
        assert_eq!(parse.diagnostics(), "2:1: expected expression");
    }
}
