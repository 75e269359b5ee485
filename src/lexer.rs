//! The lexer.

use std::str::Chars;

use text_size::{TextRange, TextSize};

use crate::token::{
    Token,
    TokenKind::{self, *},
};

/// Peekable iterator over a char sequence.
///
/// Next characters can be peeked via `first` method,
/// and position can be shifted forward via `bump` method.
struct Cursor<'a> {
    /// The input string.
    input: &'a str,
    /// Iterator over chars. Slightly faster than a &str.
    chars: Chars<'a>,
    #[cfg(debug_assertions)]
    prev: char,
}

const EOF_CHAR: char = '\0';

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Cursor<'a> {
        Cursor {
            input,
            chars: input.chars(),
            #[cfg(debug_assertions)]
            prev: EOF_CHAR,
        }
    }

    /// Returns the last eaten symbol (or `'\0'` in release builds).
    /// (For debug assertions only.)
    fn prev(&self) -> char {
        #[cfg(debug_assertions)]
        {
            self.prev
        }

        #[cfg(not(debug_assertions))]
        {
            EOF_CHAR
        }
    }

    /// Peeks the next symbol from the input stream without consuming it.
    /// If requested position doesn't exist, `EOF_CHAR` is returned.
    /// However, getting `EOF_CHAR` doesn't always mean actual end of file,
    /// it should be checked with `is_eof` method.
    fn first(&self) -> char {
        // `.next()` optimizes better than `.nth(0)`
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    /// Peeks the second symbol from the input stream without consuming it.
    fn second(&self) -> char {
        // `.next()` optimizes better than `.nth(1)`
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().unwrap_or(EOF_CHAR)
    }

    /// Checks if there is nothing more to consume.
    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Returns position of cursor.
    fn pos(&self) -> TextSize {
        TextSize::try_from(self.input.len() - self.chars.as_str().len())
            .expect("input larger than 4GiB")
    }

    /// Moves to the next character.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;

        #[cfg(debug_assertions)]
        {
            self.prev = c;
        }

        Some(c)
    }

    /// Eats `c` if it matches.
    fn eat(&mut self, c: char) -> bool {
        if self.first() == c {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Eats symbols while predicate returns true or until the end of file is reached.
    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
}

/// Creates an iterator that produces tokens from the input string.
///
/// Trivia is included, so concatenating the token texts gives back `input`.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ {
    let mut cursor = Cursor::new(input);
    std::iter::from_fn(move || cursor.advance_token())
}

/// True if `c` is considered a whitespace according to the Java language definition.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space
    )
}

/// True if `c` is valid as a first character of an identifier.
pub fn is_id_start(c: char) -> bool {
    c == '_' || c == '$' || unicode_ident::is_xid_start(c)
}

/// True if `c` is valid as a non-first character of an identifier.
pub fn is_id_continue(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}

/// The passed string is lexically an identifier (and not a keyword).
pub fn is_ident(string: &str) -> bool {
    let mut chars = string.chars();
    if let Some(start) = chars.next() {
        is_id_start(start) && chars.all(is_id_continue) && TokenKind::keyword(string).is_none()
    } else {
        false
    }
}

/// Base of numeric literal encoding according to its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Base {
    /// Literal starts with "0b".
    Binary,
    /// Literal starts with "0x".
    Hexadecimal,
    /// Literal doesn't contain a prefix.
    Decimal,
}

impl Cursor<'_> {
    /// Parses a token from the input string.
    fn advance_token(&mut self) -> Option<Token> {
        let start = self.pos();
        let first_char = self.bump()?;
        let token_kind = match first_char {
            // Slash, line comment or block comment.
            '/' => match self.first() {
                '/' => self.line_comment(),
                '*' => self.block_comment(),
                _ => Slash,
            },

            // Minus, MinusMinus or Arrow.
            '-' => {
                if self.eat('>') {
                    Arrow
                } else if self.eat('-') {
                    MinusMinus
                } else {
                    Minus
                }
            }

            // Dot, Ellipsis or a fraction-only floating literal.
            '.' => {
                if self.first() == '.' && self.second() == '.' {
                    self.bump();
                    self.bump();
                    Ellipsis
                } else if self.first().is_ascii_digit() {
                    self.fraction()
                } else {
                    Dot
                }
            }

            // Whitespace sequence.
            c if is_whitespace(c) => self.whitespace(),

            // Identifier or keyword.
            c if is_id_start(c) => self.ident_or_keyword(start),

            // Numeric literal.
            c @ '0'..='9' => self.number(c),

            // String or text block literal.
            '"' => self.string(),

            // Character literal.
            '\'' => self.char(),

            // Two-char tokens.
            '&' if self.eat('&') => AndAnd,
            '|' if self.eat('|') => OrOr,
            '=' if self.eat('=') => Eq,
            '!' if self.eat('=') => NotEq,
            '<' if self.eat('=') => LtEq,
            '<' if self.eat('<') => Shl,
            '+' if self.eat('+') => PlusPlus,
            ':' if self.eat(':') => DoubleColon,

            // One-symbol tokens.
            ',' => Comma,
            ';' => Semicolon,
            '(' => OpenParen,
            ')' => CloseParen,
            '{' => OpenBrace,
            '}' => CloseBrace,
            '[' => OpenBracket,
            ']' => CloseBracket,
            '@' => At,
            '?' => Question,
            ':' => Colon,
            '=' => Assign,
            '!' => Bang,
            '~' => Tilde,
            '<' => Lt,
            '>' => Gt,
            '&' => Ampersand,
            '|' => VBar,
            '^' => Caret,
            '+' => Plus,
            '*' => Asterisk,
            '%' => Percent,

            // Unknown character.
            _ => Unknown,
        };
        let end = self.pos();
        Some(Token::new(token_kind, TextRange::new(start, end)))
    }

    fn line_comment(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '/' && self.first() == '/');
        self.bump();
        self.eat_while(|c| c != '\n');
        LineComment
    }

    fn block_comment(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '/' && self.first() == '*');
        self.bump();

        // Java block comments do not nest.
        while let Some(c) = self.bump() {
            if c == '*' && self.eat('/') {
                return BlockComment;
            }
        }

        UnterminatedBlockComment
    }

    fn whitespace(&mut self) -> TokenKind {
        debug_assert!(is_whitespace(self.prev()));
        self.eat_while(is_whitespace);
        Whitespace
    }

    fn ident_or_keyword(&mut self, start: TextSize) -> TokenKind {
        debug_assert!(is_id_start(self.prev()));
        self.eat_while(is_id_continue);

        let range = TextRange::new(start, self.pos());
        TokenKind::keyword(&self.input[range]).unwrap_or(Ident)
    }

    fn number(&mut self, first_digit: char) -> TokenKind {
        debug_assert!(self.prev().is_ascii_digit());
        let mut base = Base::Decimal;
        if first_digit == '0' {
            // Attempt to parse encoding base.
            match self.first() {
                'b' | 'B' => {
                    base = Base::Binary;
                    self.bump();
                    self.eat_decimal_digits();
                }
                'x' | 'X' => {
                    base = Base::Hexadecimal;
                    self.bump();
                    self.eat_hexadecimal_digits();
                }
                // Octal or plain decimal; the digits are the same shape here.
                '0'..='9' | '_' => {
                    self.eat_decimal_digits();
                }
                _ => (),
            }
        } else {
            self.eat_decimal_digits();
        }

        if base != Base::Decimal {
            return self.integer_suffix();
        }

        match self.first() {
            // Don't be greedy if this is actually an
            // integer literal followed by a member access (`1.toString`).
            '.' if !is_id_start(self.second()) => {
                self.bump();
                if self.first().is_ascii_digit() {
                    self.eat_decimal_digits();
                }
                self.exponent_and_suffix()
            }
            'e' | 'E' | 'f' | 'F' | 'd' | 'D' => self.exponent_and_suffix(),
            _ => self.integer_suffix(),
        }
    }

    /// Lexes `.5e3f`-style literals after the leading dot.
    fn fraction(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '.');
        self.eat_decimal_digits();
        self.exponent_and_suffix()
    }

    fn integer_suffix(&mut self) -> TokenKind {
        if self.eat('l') || self.eat('L') {
            LongLiteral
        } else {
            IntLiteral
        }
    }

    fn exponent_and_suffix(&mut self) -> TokenKind {
        if matches!(self.first(), 'e' | 'E') {
            self.bump();
            if matches!(self.first(), '+' | '-') {
                self.bump();
            }
            self.eat_decimal_digits();
        }
        if self.eat('f') || self.eat('F') {
            FloatLiteral
        } else {
            if !self.eat('d') {
                self.eat('D');
            }
            DoubleLiteral
        }
    }

    fn string(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '"');
        if self.first() == '"' && self.second() == '"' {
            self.bump();
            self.bump();
            return self.text_block();
        }
        self.quoted('"')
    }

    fn char(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '\'');
        match self.quoted('\'') {
            StringLiteral => CharLiteral,
            kind => kind,
        }
    }

    /// Eats the rest of a single line literal delimited by `quote`.
    fn quoted(&mut self, quote: char) -> TokenKind {
        loop {
            match self.first() {
                '\n' | '\r' => return UnterminatedLiteral,
                c if c == quote => {
                    self.bump();
                    return StringLiteral;
                }
                '\\' => {
                    self.bump();
                    // Bump again to skip escaped character.
                    if !matches!(self.first(), '\n' | '\r') {
                        self.bump();
                    }
                }
                _ => {
                    if self.bump().is_none() {
                        return UnterminatedLiteral;
                    }
                }
            }
        }
    }

    fn text_block(&mut self) -> TokenKind {
        while let Some(c) = self.bump() {
            match c {
                '\\' => {
                    self.bump();
                }
                '"' if self.first() == '"' && self.second() == '"' => {
                    self.bump();
                    self.bump();
                    return StringLiteral;
                }
                _ => (),
            }
        }
        UnterminatedLiteral
    }

    fn eat_decimal_digits(&mut self) -> bool {
        let mut has_digits = false;
        loop {
            match self.first() {
                '_' => {
                    self.bump();
                }
                '0'..='9' => {
                    has_digits = true;
                    self.bump();
                }
                _ => break,
            }
        }
        has_digits
    }

    fn eat_hexadecimal_digits(&mut self) -> bool {
        let mut has_digits = false;
        loop {
            match self.first() {
                '_' => {
                    self.bump();
                }
                '0'..='9' | 'a'..='f' | 'A'..='F' => {
                    has_digits = true;
                    self.bump();
                }
                _ => break,
            }
        }
        has_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .map(|token| token.kind)
            .filter(|kind| !kind.is_trivia())
            .collect()
    }

    macro_rules! check_first_token {
        ($input:expr, $kind:expr $(,)?) => {
            assert_eq!(tokenize($input).next().map(|token| token.kind), Some($kind))
        };
    }

    #[test]
    fn test_keywords_and_idents() {
        assert_eq!(
            kinds("final int x instanceof var $y _z"),
            vec![Final, Int, Ident, Instanceof, Ident, Ident, Ident]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("&& || == != <= << ++ -- -> :: ... & | ^ >> >="),
            vec![
                AndAnd, OrOr, Eq, NotEq, LtEq, Shl, PlusPlus, MinusMinus, Arrow, DoubleColon,
                Ellipsis, Ampersand, VBar, Caret, Gt, Gt, Gt, Assign,
            ]
        );
    }

    #[test]
    fn test_number_literals() {
        check_first_token!("0", IntLiteral);
        check_first_token!("100_000", IntLiteral);
        check_first_token!("0x1F", IntLiteral);
        check_first_token!("0b1010L", LongLiteral);
        check_first_token!("12l", LongLiteral);
        check_first_token!("1.5", DoubleLiteral);
        check_first_token!("1e10", DoubleLiteral);
        check_first_token!("1.5f", FloatLiteral);
        check_first_token!("2d", DoubleLiteral);
        check_first_token!(".5", DoubleLiteral);
    }

    #[test]
    fn test_string_literals() {
        check_first_token!(r#""abc""#, StringLiteral);
        check_first_token!(r#""a\"b""#, StringLiteral);
        check_first_token!("'a'", CharLiteral);
        check_first_token!(r"'\n'", CharLiteral);
        check_first_token!("\"abc\n\"", UnterminatedLiteral);
        check_first_token!("\"\"\"\n  text\n  \"\"\"", StringLiteral);
    }

    #[test]
    fn test_comments() {
        assert_eq!(kinds("a // c\n b /* c */ c"), vec![Ident, Ident, Ident]);
        check_first_token!("/* open", UnterminatedBlockComment);
    }

    #[test]
    fn test_unknown_and_lossless() {
        let input = "Point(int x, # int y) p";
        assert!(kinds(input).contains(&Unknown));
        let text: String = tokenize(input).map(|t| &input[t.range]).collect();
        assert_eq!(text, input);
    }

    #[test]
    fn test_member_access_on_int() {
        assert_eq!(kinds("1.foo"), vec![IntLiteral, Dot, Ident]);
    }
}
