//! The syntax tree vocabulary.

use crate::token::TokenKind;

/// Kinds of tokens and nodes in the lossless syntax tree.
///
/// The token kinds mirror [`TokenKind`] one to one, the node kinds are what
/// the grammars in [`crate::grammar`] produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens.
    FinalKw,
    InstanceofKw,
    NewKw,
    ThisKw,
    SuperKw,
    ExtendsKw,
    ClassKw,
    CaseKw,
    DefaultKw,
    NullKw,
    TrueKw,
    FalseKw,
    BooleanKw,
    ByteKw,
    CharKw,
    ShortKw,
    IntKw,
    LongKw,
    FloatKw,
    DoubleKw,
    VoidKw,
    AndAnd,
    OrOr,
    Eq,
    NotEq,
    LtEq,
    Shl,
    PlusPlus,
    MinusMinus,
    Arrow,
    DoubleColon,
    Ellipsis,
    Comma,
    Dot,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    At,
    Question,
    Colon,
    Assign,
    Bang,
    Tilde,
    Lt,
    Gt,
    Ampersand,
    VBar,
    Caret,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    IntLiteral,
    LongLiteral,
    FloatLiteral,
    DoubleLiteral,
    CharLiteral,
    StringLiteral,
    UnterminatedLiteral,
    Ident,
    LineComment,
    BlockComment,
    UnterminatedBlockComment,
    Whitespace,
    Unknown,

    // Nodes.
    Root,
    Error,

    // Declarations.
    ModifierList,
    Annotation,
    AnnotationParameterList,
    NameValuePair,

    // Types.
    Type,
    JavaCodeReference,
    ReferenceParameterList,

    // Expressions.
    LiteralExpression,
    ReferenceExpression,
    ThisExpression,
    SuperExpression,
    ParenthesizedExpression,
    MethodCallExpression,
    ExpressionList,
    ArrayAccessExpression,
    NewExpression,
    ClassObjectAccessExpression,
    PrefixExpression,
    PostfixExpression,
    TypeCastExpression,
    BinaryExpression,
    InstanceofExpression,
    ConditionalExpression,
    LambdaExpression,
    ArrayInitializerExpression,
    ParameterList,
    Parameter,
    CodeBlock,

    // Switch labels.
    SwitchLabel,
    CaseLabelElementList,
    DefaultCaseLabelElement,

    // Patterns.
    TypeTestPattern,
    PatternVariable,
    RecordPattern,
    RecordStructurePattern,
    RecordPatternVariable,
    ParenthesizedPattern,
    GuardedPattern,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::LineComment | SyntaxKind::BlockComment | SyntaxKind::Whitespace
        )
    }

    /// True for the seven node kinds the pattern grammar produces.
    #[inline]
    pub fn is_pattern(self) -> bool {
        matches!(
            self,
            SyntaxKind::TypeTestPattern
                | SyntaxKind::PatternVariable
                | SyntaxKind::RecordPattern
                | SyntaxKind::RecordStructurePattern
                | SyntaxKind::RecordPatternVariable
                | SyntaxKind::ParenthesizedPattern
                | SyntaxKind::GuardedPattern
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= (SyntaxKind::Unknown as u16)
    }
}

impl From<u16> for SyntaxKind {
    #[inline]
    fn from(d: u16) -> SyntaxKind {
        assert!(d <= (SyntaxKind::__LAST as u16));
        // SAFETY: `SyntaxKind` is `repr(u16)` with contiguous discriminants
        // starting at zero, and `d` was checked to be in range.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(d) }
    }
}

impl From<SyntaxKind> for u16 {
    #[inline]
    fn from(k: SyntaxKind) -> u16 {
        k as u16
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(kind: TokenKind) -> SyntaxKind {
        match kind {
            TokenKind::Final => SyntaxKind::FinalKw,
            TokenKind::Instanceof => SyntaxKind::InstanceofKw,
            TokenKind::New => SyntaxKind::NewKw,
            TokenKind::This => SyntaxKind::ThisKw,
            TokenKind::Super => SyntaxKind::SuperKw,
            TokenKind::Extends => SyntaxKind::ExtendsKw,
            TokenKind::Class => SyntaxKind::ClassKw,
            TokenKind::Case => SyntaxKind::CaseKw,
            TokenKind::Default => SyntaxKind::DefaultKw,
            TokenKind::Null => SyntaxKind::NullKw,
            TokenKind::True => SyntaxKind::TrueKw,
            TokenKind::False => SyntaxKind::FalseKw,
            TokenKind::Boolean => SyntaxKind::BooleanKw,
            TokenKind::Byte => SyntaxKind::ByteKw,
            TokenKind::Char => SyntaxKind::CharKw,
            TokenKind::Short => SyntaxKind::ShortKw,
            TokenKind::Int => SyntaxKind::IntKw,
            TokenKind::Long => SyntaxKind::LongKw,
            TokenKind::Float => SyntaxKind::FloatKw,
            TokenKind::Double => SyntaxKind::DoubleKw,
            TokenKind::Void => SyntaxKind::VoidKw,
            TokenKind::AndAnd => SyntaxKind::AndAnd,
            TokenKind::OrOr => SyntaxKind::OrOr,
            TokenKind::Eq => SyntaxKind::Eq,
            TokenKind::NotEq => SyntaxKind::NotEq,
            TokenKind::LtEq => SyntaxKind::LtEq,
            TokenKind::Shl => SyntaxKind::Shl,
            TokenKind::PlusPlus => SyntaxKind::PlusPlus,
            TokenKind::MinusMinus => SyntaxKind::MinusMinus,
            TokenKind::Arrow => SyntaxKind::Arrow,
            TokenKind::DoubleColon => SyntaxKind::DoubleColon,
            TokenKind::Ellipsis => SyntaxKind::Ellipsis,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::OpenParen => SyntaxKind::OpenParen,
            TokenKind::CloseParen => SyntaxKind::CloseParen,
            TokenKind::OpenBrace => SyntaxKind::OpenBrace,
            TokenKind::CloseBrace => SyntaxKind::CloseBrace,
            TokenKind::OpenBracket => SyntaxKind::OpenBracket,
            TokenKind::CloseBracket => SyntaxKind::CloseBracket,
            TokenKind::At => SyntaxKind::At,
            TokenKind::Question => SyntaxKind::Question,
            TokenKind::Colon => SyntaxKind::Colon,
            TokenKind::Assign => SyntaxKind::Assign,
            TokenKind::Bang => SyntaxKind::Bang,
            TokenKind::Tilde => SyntaxKind::Tilde,
            TokenKind::Lt => SyntaxKind::Lt,
            TokenKind::Gt => SyntaxKind::Gt,
            TokenKind::Ampersand => SyntaxKind::Ampersand,
            TokenKind::VBar => SyntaxKind::VBar,
            TokenKind::Caret => SyntaxKind::Caret,
            TokenKind::Plus => SyntaxKind::Plus,
            TokenKind::Minus => SyntaxKind::Minus,
            TokenKind::Asterisk => SyntaxKind::Asterisk,
            TokenKind::Slash => SyntaxKind::Slash,
            TokenKind::Percent => SyntaxKind::Percent,
            TokenKind::IntLiteral => SyntaxKind::IntLiteral,
            TokenKind::LongLiteral => SyntaxKind::LongLiteral,
            TokenKind::FloatLiteral => SyntaxKind::FloatLiteral,
            TokenKind::DoubleLiteral => SyntaxKind::DoubleLiteral,
            TokenKind::CharLiteral => SyntaxKind::CharLiteral,
            TokenKind::StringLiteral => SyntaxKind::StringLiteral,
            TokenKind::UnterminatedLiteral => SyntaxKind::UnterminatedLiteral,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::LineComment => SyntaxKind::LineComment,
            TokenKind::BlockComment => SyntaxKind::BlockComment,
            TokenKind::UnterminatedBlockComment => SyntaxKind::UnterminatedBlockComment,
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::Unknown => SyntaxKind::Unknown,
        }
    }
}

pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<JavaLanguage>;
pub type SyntaxElementChildren = rowan::SyntaxElementChildren<JavaLanguage>;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from(raw.0)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip_bounds() {
        assert_eq!(SyntaxKind::from(0), SyntaxKind::FinalKw);
        let last = SyntaxKind::GuardedPattern as u16;
        assert_eq!(SyntaxKind::from(last), SyntaxKind::GuardedPattern);
        assert!(SyntaxKind::Unknown.is_token());
        assert!(!SyntaxKind::Root.is_token());
    }

    #[test]
    fn test_token_kinds_map_to_tokens() {
        for kind in [TokenKind::Final, TokenKind::Ident, TokenKind::Gt, TokenKind::Unknown] {
            assert!(SyntaxKind::from(kind).is_token());
        }
    }
}
