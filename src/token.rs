//! The token.

use std::fmt;

use text_size::TextRange;

/// Parsed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

impl Token {
    pub const fn new(kind: TokenKind, range: TextRange) -> Self {
        Token { kind, range }
    }
}

/// Enum representing common lexeme types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // Keywords:
    /// "final"
    Final,
    /// "instanceof"
    Instanceof,
    /// "new"
    New,
    /// "this"
    This,
    /// "super"
    Super,
    /// "extends"
    Extends,
    /// "class"
    Class,
    /// "case"
    Case,
    /// "default"
    Default,
    /// "null"
    Null,
    /// "true"
    True,
    /// "false"
    False,

    // Primitive type keywords:
    /// "boolean"
    Boolean,
    /// "byte"
    Byte,
    /// "char"
    Char,
    /// "short"
    Short,
    /// "int"
    Int,
    /// "long"
    Long,
    /// "float"
    Float,
    /// "double"
    Double,
    /// "void"
    Void,

    // Multi-char tokens:
    /// "&&"
    AndAnd,
    /// "||"
    OrOr,
    /// "=="
    Eq,
    /// "!="
    NotEq,
    /// "<="
    LtEq,
    /// "<<"
    Shl,
    /// "++"
    PlusPlus,
    /// "--"
    MinusMinus,
    /// "->"
    Arrow,
    /// "::"
    DoubleColon,
    /// "..."
    Ellipsis,

    // One-char tokens:
    /// ","
    Comma,
    /// "."
    Dot,
    /// ";"
    Semicolon,
    /// "("
    OpenParen,
    /// ")"
    CloseParen,
    /// "{"
    OpenBrace,
    /// "}"
    CloseBrace,
    /// "["
    OpenBracket,
    /// "]"
    CloseBracket,
    /// "@"
    At,
    /// "?"
    Question,
    /// ":"
    Colon,
    /// "="
    Assign,
    /// "!"
    Bang,
    /// "~"
    Tilde,
    /// "<"
    Lt,
    /// ">"
    ///
    /// Never merged by the lexer, so that nested type arguments close one at
    /// a time. `>=`, `>>` and `>>>` are composed by the expression grammar.
    Gt,
    /// "&"
    Ampersand,
    /// "|"
    VBar,
    /// "^"
    Caret,
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Asterisk,
    /// "/"
    Slash,
    /// "%"
    Percent,

    // Literals:
    /// "12", "0x1F", "0b1010"
    IntLiteral,
    /// "12L"
    LongLiteral,
    /// "1.0f"
    FloatLiteral,
    /// "1.0", "1e10", "1d"
    DoubleLiteral,
    /// "'a'"
    CharLiteral,
    /// "\"abc\""
    StringLiteral,
    /// "\"abc" or "'a"
    UnterminatedLiteral,

    // Other:
    /// Ident
    Ident,
    /// "// comment"
    LineComment,
    /// `/* block comment */`
    BlockComment,
    /// `/* block comment`
    UnterminatedBlockComment,
    /// Any whitespace characters sequence.
    Whitespace,
    /// Unknown token, not expected by the lexer, e.g. "#"
    Unknown,
}

impl TokenKind {
    /// Tokens the parser skips and the sink re-attaches.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub const fn is_primitive_type(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Byte
                | TokenKind::Char
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Void
        )
    }

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::LongLiteral
                | TokenKind::FloatLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Returns the keyword for `ident`, if any.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident {
            "final" => TokenKind::Final,
            "instanceof" => TokenKind::Instanceof,
            "new" => TokenKind::New,
            "this" => TokenKind::This,
            "super" => TokenKind::Super,
            "extends" => TokenKind::Extends,
            "class" => TokenKind::Class,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,
            "null" => TokenKind::Null,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "boolean" => TokenKind::Boolean,
            "byte" => TokenKind::Byte,
            "char" => TokenKind::Char,
            "short" => TokenKind::Short,
            "int" => TokenKind::Int,
            "long" => TokenKind::Long,
            "float" => TokenKind::Float,
            "double" => TokenKind::Double,
            "void" => TokenKind::Void,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Final => "'final'",
            TokenKind::Instanceof => "'instanceof'",
            TokenKind::New => "'new'",
            TokenKind::This => "'this'",
            TokenKind::Super => "'super'",
            TokenKind::Extends => "'extends'",
            TokenKind::Class => "'class'",
            TokenKind::Case => "'case'",
            TokenKind::Default => "'default'",
            TokenKind::Null => "'null'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Boolean => "'boolean'",
            TokenKind::Byte => "'byte'",
            TokenKind::Char => "'char'",
            TokenKind::Short => "'short'",
            TokenKind::Int => "'int'",
            TokenKind::Long => "'long'",
            TokenKind::Float => "'float'",
            TokenKind::Double => "'double'",
            TokenKind::Void => "'void'",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Eq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::LtEq => "'<='",
            TokenKind::Shl => "'<<'",
            TokenKind::PlusPlus => "'++'",
            TokenKind::MinusMinus => "'--'",
            TokenKind::Arrow => "'->'",
            TokenKind::DoubleColon => "'::'",
            TokenKind::Ellipsis => "'...'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Semicolon => "';'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::At => "'@'",
            TokenKind::Question => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::Assign => "'='",
            TokenKind::Bang => "'!'",
            TokenKind::Tilde => "'~'",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Ampersand => "'&'",
            TokenKind::VBar => "'|'",
            TokenKind::Caret => "'^'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Asterisk => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::LongLiteral => "long literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::DoubleLiteral => "double literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::UnterminatedLiteral => "unterminated literal",
            TokenKind::Ident => "identifier",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::UnterminatedBlockComment => "unterminated block comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unknown => "unknown token",
        };
        f.write_str(s)
    }
}

/// A fixed set of token kinds, e.g. the modifiers a context accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(&'static [TokenKind]);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(&[]);

    pub const fn new(kinds: &'static [TokenKind]) -> Self {
        TokenSet(kinds)
    }

    pub fn contains(self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        self.0.iter().copied()
    }
}
