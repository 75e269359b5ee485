//! Expressions, from conditional expressions down to primaries.

use super::{
    ConditionalAndGrammar, DeclarationParser, ExprFlags, ModifierListGrammar, PatternParser,
    ReferenceParser, TypeFlags, TypeGrammar,
};
use crate::{
    error::SyntaxErrorKind,
    parser::{CompletedMarker, Parser},
    syntax::SyntaxKind,
    token::{TokenKind, TokenSet},
};

const LAMBDA_PARAMETER_MODIFIERS: TokenSet = TokenSet::new(&[TokenKind::Final]);

/// Binding power of `&&`; parsing from here excludes `||` and `?:`.
const CONDITIONAL_AND_BP: u8 = 3;
const PREFIX_BP: u8 = 21;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionParser;

impl ConditionalAndGrammar for ExpressionParser {
    fn parse_conditional_and(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker> {
        self.parse_expr_bp(p, CONDITIONAL_AND_BP, flags)
    }
}

impl ExpressionParser {
    /// Parses a full expression, including lambdas and `?:`.
    pub fn parse_expression(&self, p: &mut Parser) -> Option<CompletedMarker> {
        self.parse_conditional(p, ExprFlags::NONE)
    }

    /// Parses `a ? b : c` and everything binding tighter.
    pub fn parse_conditional(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker> {
        let condition = self.parse_expr_bp(p, 0, flags)?;
        if !p.at(TokenKind::Question) {
            return Some(condition);
        }
        let m = condition.precede(p);
        p.bump();
        if self.parse_expression(p).is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
        p.expect(TokenKind::Colon, SyntaxErrorKind::ExpectedColon);
        if self.parse_conditional(p, flags).is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
        Some(m.complete(p, SyntaxKind::ConditionalExpression))
    }

    fn parse_expr_bp(&self, p: &mut Parser, min_bp: u8, flags: ExprFlags) -> Option<CompletedMarker> {
        let mut lhs = self.parse_unary(p, flags)?;

        while let Some((l_bp, r_bp, n_tokens)) = infix_binding_power(p) {
            if l_bp < min_bp {
                break;
            }
            let m = lhs.precede(p);
            if p.eat(TokenKind::Instanceof) {
                self.parse_instanceof_rhs(p);
                lhs = m.complete(p, SyntaxKind::InstanceofExpression);
                continue;
            }
            p.bump_composite(n_tokens);
            let parsed_rhs = self.parse_expr_bp(p, r_bp, flags).is_some();
            if !parsed_rhs {
                p.error(SyntaxErrorKind::ExpectedExpression);
            }
            lhs = m.complete(p, SyntaxKind::BinaryExpression);
            if !parsed_rhs {
                break;
            }
        }

        Some(lhs)
    }

    /// The right operand of `instanceof`: a pattern, or a plain type.
    fn parse_instanceof_rhs(&self, p: &mut Parser) {
        let patterns = PatternParser::java();
        if patterns.is_pattern(p) {
            patterns.parse_primary_pattern(p);
        } else if ReferenceParser.parse_type(p, TypeFlags::NONE).is_none() {
            p.error(SyntaxErrorKind::ExpectedType);
        }
    }

    fn parse_unary(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker> {
        match p.current()? {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Bang
            | TokenKind::Tilde => {
                let m = p.start();
                p.bump();
                if self.parse_expr_bp(p, PREFIX_BP, flags).is_none() {
                    p.error(SyntaxErrorKind::ExpectedExpression);
                }
                Some(m.complete(p, SyntaxKind::PrefixExpression))
            }
            TokenKind::OpenParen => self
                .try_parse_cast(p, flags)
                .or_else(|| self.parse_postfix(p, flags)),
            _ => self.parse_postfix(p, flags),
        }
    }

    /// Parses `(Type) operand`, or returns `None` leaving the parser untouched
    /// if the parenthesis does not open a cast.
    fn try_parse_cast(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker> {
        let checkpoint = p.checkpoint();
        let m = p.start();
        p.bump();
        let is_primitive = p.current().is_some_and(TokenKind::is_primitive_type);
        let ty = ReferenceParser.parse_type(p, TypeFlags::NONE);
        let is_cast = ty.is_some()
            && p.at(TokenKind::CloseParen)
            && !p.has_errors_since(checkpoint)
            && p.nth(1).is_some_and(|next| starts_cast_operand(next, is_primitive));
        if !is_cast {
            m.abandon(p);
            p.rollback(checkpoint);
            return None;
        }
        p.bump();
        if self.parse_unary(p, flags).is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
        Some(m.complete(p, SyntaxKind::TypeCastExpression))
    }

    fn parse_postfix(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker> {
        let mut operand = self.parse_primary(p, flags)?;
        while p.at(TokenKind::PlusPlus) || p.at(TokenKind::MinusMinus) {
            let m = operand.precede(p);
            p.bump();
            operand = m.complete(p, SyntaxKind::PostfixExpression);
        }
        Some(operand)
    }

    fn parse_primary(&self, p: &mut Parser, flags: ExprFlags) -> Option<CompletedMarker> {
        let kind = p.current()?;
        let mut lhs = if kind.is_literal() {
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::LiteralExpression)
        } else if kind == TokenKind::Ident {
            if !flags.forbid_lambda && p.nth_at(1, TokenKind::Arrow) {
                return Some(self.parse_lambda(p));
            }
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::ReferenceExpression)
        } else if kind == TokenKind::This {
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::ThisExpression)
        } else if kind == TokenKind::Super {
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::SuperExpression)
        } else if kind == TokenKind::OpenParen {
            if !flags.forbid_lambda && at_parenthesized_lambda(p) {
                return Some(self.parse_lambda(p));
            }
            let m = p.start();
            p.bump();
            if self.parse_expression(p).is_none() {
                p.error(SyntaxErrorKind::ExpectedExpression);
            }
            p.expect(TokenKind::CloseParen, SyntaxErrorKind::ExpectedRParen);
            m.complete(p, SyntaxKind::ParenthesizedExpression)
        } else if kind == TokenKind::New {
            self.parse_new(p)
        } else if kind.is_primitive_type() {
            // `int.class`, `int[].class`
            let m = p.start();
            ReferenceParser.parse_type(p, TypeFlags::NONE);
            p.expect(TokenKind::Dot, SyntaxErrorKind::ExpectedExpression);
            p.expect(TokenKind::Class, SyntaxErrorKind::ExpectedIdentifier);
            m.complete(p, SyntaxKind::ClassObjectAccessExpression)
        } else {
            return None;
        };

        loop {
            if p.at(TokenKind::Dot) {
                let m = lhs.precede(p);
                p.bump();
                if p.eat(TokenKind::Class) {
                    lhs = m.complete(p, SyntaxKind::ClassObjectAccessExpression);
                } else if p.eat(TokenKind::Ident) {
                    lhs = m.complete(p, SyntaxKind::ReferenceExpression);
                } else {
                    p.error(SyntaxErrorKind::ExpectedIdentifier);
                    lhs = m.complete(p, SyntaxKind::ReferenceExpression);
                    break;
                }
            } else if p.at(TokenKind::OpenParen) && lhs.kind() == SyntaxKind::ReferenceExpression {
                let m = lhs.precede(p);
                self.parse_argument_list(p);
                lhs = m.complete(p, SyntaxKind::MethodCallExpression);
            } else if p.at(TokenKind::OpenBracket) {
                let m = lhs.precede(p);
                p.bump();
                if self.parse_expression(p).is_none() {
                    p.error(SyntaxErrorKind::ExpectedExpression);
                }
                p.expect(TokenKind::CloseBracket, SyntaxErrorKind::ExpectedRBracket);
                lhs = m.complete(p, SyntaxKind::ArrayAccessExpression);
            } else {
                break;
            }
        }

        Some(lhs)
    }

    /// Parses `(a, b, c)`.
    fn parse_argument_list(&self, p: &mut Parser) {
        let m = p.start();
        p.bump();
        if !p.at(TokenKind::CloseParen) {
            loop {
                if self.parse_expression(p).is_none() {
                    p.error(SyntaxErrorKind::ExpectedExpression);
                    break;
                }
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        p.expect(TokenKind::CloseParen, SyntaxErrorKind::ExpectedRParen);
        m.complete(p, SyntaxKind::ExpressionList);
    }

    /// Parses `new Foo<>(args) { ... }`, `new int[n][]` or `new int[] {1, 2}`.
    fn parse_new(&self, p: &mut Parser) -> CompletedMarker {
        let m = p.start();
        p.bump();
        let is_primitive = p.current().is_some_and(TokenKind::is_primitive_type);
        if is_primitive {
            let ty = p.start();
            p.bump();
            ty.complete(p, SyntaxKind::Type);
        } else if p.at(TokenKind::Ident) {
            ReferenceParser.parse_java_code_reference(p, false, true);
        } else {
            p.error(SyntaxErrorKind::ExpectedType);
            return m.complete(p, SyntaxKind::NewExpression);
        }

        if p.at(TokenKind::OpenBracket) {
            while p.eat(TokenKind::OpenBracket) {
                if !p.at(TokenKind::CloseBracket) && self.parse_expression(p).is_none() {
                    p.error(SyntaxErrorKind::ExpectedExpression);
                }
                p.expect(TokenKind::CloseBracket, SyntaxErrorKind::ExpectedRBracket);
            }
            if p.at(TokenKind::OpenBrace) {
                self.parse_array_initializer(p);
            }
        } else if !is_primitive && p.at(TokenKind::OpenParen) {
            self.parse_argument_list(p);
            if p.at(TokenKind::OpenBrace) {
                parse_code_block(p);
            }
        } else {
            p.error(SyntaxErrorKind::ExpectedLParen);
        }
        m.complete(p, SyntaxKind::NewExpression)
    }

    /// Parses `{a, {b, c},}`.
    ///
    /// The current token must be `{`.
    pub fn parse_array_initializer(&self, p: &mut Parser) -> CompletedMarker {
        let m = p.start();
        p.bump();
        while !p.at(TokenKind::CloseBrace) && !p.at_end() {
            if p.at(TokenKind::OpenBrace) {
                self.parse_array_initializer(p);
            } else if self.parse_expression(p).is_none() {
                p.error(SyntaxErrorKind::ExpectedExpression);
                break;
            }
            if !p.eat(TokenKind::Comma) {
                break;
            }
        }
        p.expect(TokenKind::CloseBrace, SyntaxErrorKind::ExpectedRBrace);
        m.complete(p, SyntaxKind::ArrayInitializerExpression)
    }

    /// Parses `x -> body` or `(params) -> body`.
    fn parse_lambda(&self, p: &mut Parser) -> CompletedMarker {
        let m = p.start();
        let params = p.start();
        if p.at(TokenKind::Ident) {
            let param = p.start();
            p.bump();
            param.complete(p, SyntaxKind::Parameter);
        } else {
            p.bump();
            if !p.at(TokenKind::CloseParen) {
                loop {
                    self.parse_lambda_parameter(p);
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            p.expect(TokenKind::CloseParen, SyntaxErrorKind::ExpectedRParen);
        }
        params.complete(p, SyntaxKind::ParameterList);

        p.eat(TokenKind::Arrow);
        if p.at(TokenKind::OpenBrace) {
            parse_code_block(p);
        } else if self.parse_expression(p).is_none() {
            p.error(SyntaxErrorKind::ExpectedExpression);
        }
        m.complete(p, SyntaxKind::LambdaExpression)
    }

    /// Parses `x` or `final Type... x`.
    fn parse_lambda_parameter(&self, p: &mut Parser) {
        let m = p.start();
        let is_inferred = p.at(TokenKind::Ident)
            && (p.nth_at(1, TokenKind::Comma) || p.nth_at(1, TokenKind::CloseParen));
        if is_inferred {
            p.bump();
        } else {
            DeclarationParser.parse_modifier_list(p, LAMBDA_PARAMETER_MODIFIERS);
            if ReferenceParser.parse_type(p, TypeFlags::ELLIPSIS).is_none() {
                p.error(SyntaxErrorKind::ExpectedType);
            }
            p.expect(TokenKind::Ident, SyntaxErrorKind::ExpectedIdentifier);
        }
        m.complete(p, SyntaxKind::Parameter);
    }
}

/// Returns `(left, right, tokens)` for the binary operator at the current
/// token, where `tokens` is how many tokens spell the operator.
fn infix_binding_power(p: &Parser) -> Option<(u8, u8, usize)> {
    if p.at(TokenKind::Gt) {
        let res = if p.at_composite(&[TokenKind::Gt, TokenKind::Gt, TokenKind::Gt]) {
            (15, 16, 3)
        } else if p.at_composite(&[TokenKind::Gt, TokenKind::Gt]) {
            (15, 16, 2)
        } else if p.at_composite(&[TokenKind::Gt, TokenKind::Assign]) {
            (13, 14, 2)
        } else {
            (13, 14, 1)
        };
        return Some(res);
    }
    let (l_bp, r_bp) = match p.current()? {
        TokenKind::OrOr => (1, 2),
        TokenKind::AndAnd => (3, 4),
        TokenKind::VBar => (5, 6),
        TokenKind::Caret => (7, 8),
        TokenKind::Ampersand => (9, 10),
        TokenKind::Eq | TokenKind::NotEq => (11, 12),
        TokenKind::Lt | TokenKind::LtEq | TokenKind::Instanceof => (13, 14),
        TokenKind::Shl => (15, 16),
        TokenKind::Plus | TokenKind::Minus => (17, 18),
        TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => (19, 20),
        _ => return None,
    };
    Some((l_bp, r_bp, 1))
}

/// Whether `next`, the token after `(Type)`, makes the parenthesis a cast.
fn starts_cast_operand(next: TokenKind, is_primitive: bool) -> bool {
    match next {
        TokenKind::Ident
        | TokenKind::OpenParen
        | TokenKind::Bang
        | TokenKind::Tilde
        | TokenKind::This
        | TokenKind::Super
        | TokenKind::New => true,
        TokenKind::Plus | TokenKind::Minus | TokenKind::PlusPlus | TokenKind::MinusMinus => {
            is_primitive
        }
        kind => kind.is_literal() || kind.is_primitive_type(),
    }
}

/// Checks for `( ... ) ->` with balanced parentheses.
fn at_parenthesized_lambda(p: &Parser) -> bool {
    let mut depth = 0usize;
    let mut n = 0;
    loop {
        match p.nth(n) {
            Some(TokenKind::OpenParen) => depth += 1,
            Some(TokenKind::CloseParen) => {
                depth -= 1;
                if depth == 0 {
                    return p.nth_at(n + 1, TokenKind::Arrow);
                }
            }
            Some(_) => (),
            None => return false,
        }
        n += 1;
    }
}

/// Parses a balanced `{ ... }` as an opaque `CodeBlock`; statements are not
/// parsed.
///
/// The current token must be `{`.
fn parse_code_block(p: &mut Parser) -> CompletedMarker {
    let m = p.start();
    let mut depth = 0usize;
    while let Some(kind) = p.current() {
        p.bump();
        match kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => {
                depth -= 1;
                if depth == 0 {
                    return m.complete(p, SyntaxKind::CodeBlock);
                }
            }
            _ => (),
        }
    }
    p.error(SyntaxErrorKind::ExpectedRBrace);
    m.complete(p, SyntaxKind::CodeBlock)
}

#[cfg(test)]
mod tests {
    use crate::{parse_expression, syntax::SyntaxKind};

    fn root_kind(input: &str) -> SyntaxKind {
        let parse = parse_expression(input);
        assert!(parse.errors().is_empty(), "{input:?}: {:?}", parse.errors());
        parse.syntax().first_child().unwrap().kind()
    }

    #[test]
    fn test_precedence() {
        let parse = parse_expression("a || b && c == d + e * f");
        assert!(parse.errors().is_empty());
        let or = parse.syntax().first_child().unwrap();
        assert_eq!(or.kind(), SyntaxKind::BinaryExpression);
        let children: Vec<_> = or.children().map(|n| n.text().to_string()).collect();
        assert_eq!(children, vec!["a", "b && c == d + e * f"]);
    }

    #[test]
    fn test_left_associative() {
        let parse = parse_expression("a - b - c");
        let outer = parse.syntax().first_child().unwrap();
        let first = outer.first_child().unwrap();
        assert_eq!(first.text().to_string(), "a - b");
    }

    #[test]
    fn test_composite_operators() {
        for input in ["a >> 2", "a >>> 2", "a >= 2", "a << 2", "a > 2"] {
            assert_eq!(root_kind(input), SyntaxKind::BinaryExpression, "{input}");
        }
        let parse = parse_expression("a > > 2");
        assert!(!parse.errors().is_empty());
    }

    #[test]
    fn test_primaries() {
        assert_eq!(root_kind("s.length()"), SyntaxKind::MethodCallExpression);
        assert_eq!(root_kind("a.b.c"), SyntaxKind::ReferenceExpression);
        assert_eq!(root_kind("a[0]"), SyntaxKind::ArrayAccessExpression);
        assert_eq!(root_kind("String.class"), SyntaxKind::ClassObjectAccessExpression);
        assert_eq!(root_kind("int[].class"), SyntaxKind::ClassObjectAccessExpression);
        assert_eq!(root_kind("new Foo(1, \"a\")"), SyntaxKind::NewExpression);
        assert_eq!(root_kind("new int[] {1, 2}"), SyntaxKind::NewExpression);
        assert_eq!(root_kind("new Runnable() { public void run() {} }"), SyntaxKind::NewExpression);
        assert_eq!(root_kind("this"), SyntaxKind::ThisExpression);
        assert_eq!(root_kind("i++"), SyntaxKind::PostfixExpression);
        assert_eq!(root_kind("!done"), SyntaxKind::PrefixExpression);
        assert_eq!(root_kind("a ? b : c"), SyntaxKind::ConditionalExpression);
    }

    #[test]
    fn test_casts() {
        assert_eq!(root_kind("(String) o"), SyntaxKind::TypeCastExpression);
        assert_eq!(root_kind("(int) -x"), SyntaxKind::TypeCastExpression);
        assert_eq!(root_kind("(a) + b"), SyntaxKind::BinaryExpression);
        assert_eq!(root_kind("(a < b)"), SyntaxKind::ParenthesizedExpression);
    }

    #[test]
    fn test_lambdas() {
        assert_eq!(root_kind("x -> x + 1"), SyntaxKind::LambdaExpression);
        assert_eq!(root_kind("(a, b) -> a"), SyntaxKind::LambdaExpression);
        assert_eq!(root_kind("(final String... s) -> s"), SyntaxKind::LambdaExpression);
        assert_eq!(root_kind("() -> { return; }"), SyntaxKind::LambdaExpression);
        assert_eq!(root_kind("f(x -> x)"), SyntaxKind::MethodCallExpression);
    }

    #[test]
    fn test_unclosed_braces() {
        for input in ["new int[] {1, 2", "() -> { return;"] {
            let parse = parse_expression(input);
            assert_eq!(parse.errors().len(), 1, "{input:?}");
            assert_eq!(parse.errors()[0].kind.to_string(), "expected '}'");
            assert_eq!(parse.syntax().text().to_string(), input);
        }
    }

    #[test]
    fn test_missing_operand() {
        let parse = parse_expression("a +");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(parse.errors()[0].to_string(), "expected expression 3..3");
    }
}
