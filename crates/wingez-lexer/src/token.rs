//! Tokens for the Wingez language
//!
//! Defines all token types that the tokenizer can produce.

use std::fmt;
use wingez_error::span::{Span, Spanned};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All token types for the Wingez language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    // =========================================
    // Keywords
    // =========================================
    /// `def` - function definition
    Def,
    /// `print` - builtin print statement
    Print,
    /// `while` - while loop
    While,
    /// `if` - conditional
    If,
    /// `else` - if alternative
    Else,
    /// `return` - function return
    Return,
    /// `struct` - struct definition
    Struct,
    /// `new` - struct instantiation
    New,
    /// `break` - exit loop
    Break,
    /// `val` - value declaration
    Val,

    // =========================================
    // Literals
    // =========================================
    /// Integer literal: `42`
    IntLit(i64),
    /// String literal: `"hello"` (payload without quotes)
    StringLit(String),
    /// Identifier: `foo`, `hello_world`, `_tmp`
    Ident(String),

    // =========================================
    // Operators
    // =========================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `&`
    Ampersand,
    /// `->`
    Arrow,

    // =========================================
    // Punctuation
    // =========================================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,

    // =========================================
    // Layout tokens (synthetic)
    // =========================================
    /// End of a statement line
    Newline,
    /// Opens a nested block
    Indent,
    /// Closes a nested block
    Dedent,
    /// End of input (only with `TokenizerConfig::emit_eof`)
    Eof,
}

impl TokenKind {
    /// Returns true if the token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Def
                | TokenKind::Print
                | TokenKind::While
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::Struct
                | TokenKind::New
                | TokenKind::Break
                | TokenKind::Val
        )
    }

    /// Returns true if the token is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::IntLit(_) | TokenKind::StringLit(_))
    }

    /// Returns true for tokens inferred from line structure rather than read from content
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Keywords
            TokenKind::Def => write!(f, "def"),
            TokenKind::Print => write!(f, "print"),
            TokenKind::While => write!(f, "while"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::Return => write!(f, "return"),
            TokenKind::Struct => write!(f, "struct"),
            TokenKind::New => write!(f, "new"),
            TokenKind::Break => write!(f, "break"),
            TokenKind::Val => write!(f, "val"),

            // Literals
            TokenKind::IntLit(n) => write!(f, "{}", n),
            TokenKind::StringLit(s) => write!(f, "\"{}\"", s),
            TokenKind::Ident(s) => write!(f, "{}", s),

            // Operators
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::EqEq => write!(f, "=="),
            TokenKind::Ne => write!(f, "!="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Ampersand => write!(f, "&"),
            TokenKind::Arrow => write!(f, "->"),

            // Punctuation
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Dot => write!(f, "."),

            // Layout
            TokenKind::Newline => write!(f, "NEWLINE"),
            TokenKind::Indent => write!(f, "INDENT"),
            TokenKind::Dedent => write!(f, "DEDENT"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// A token with its location in the source code
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Checks if the token is of a specific type, ignoring payloads
    pub fn is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(kind)
    }

    /// Checks if it is end of file
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.kind, self.span.start.line, self.span.start.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wingez_error::span::Position;

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Arrow.to_string(), "->");
        assert_eq!(TokenKind::Ne.to_string(), "!=");
        assert_eq!(TokenKind::StringLit("hi".into()).to_string(), "\"hi\"");
        assert_eq!(TokenKind::Indent.to_string(), "INDENT");
        assert_eq!(TokenKind::Dedent.to_string(), "DEDENT");
    }

    #[test]
    fn test_classification() {
        assert!(TokenKind::Def.is_keyword());
        assert!(!TokenKind::Ident("def2".into()).is_keyword());
        assert!(TokenKind::IntLit(3).is_literal());
        assert!(TokenKind::Newline.is_layout());
        assert!(!TokenKind::Colon.is_layout());
    }

    #[test]
    fn test_is_ignores_payload() {
        let span = Span::point(Position::new(1, 1, 0), 0);
        let token = Token::new(TokenKind::Ident("a".into()), span);
        assert!(token.is(&TokenKind::Ident(String::new())));
        assert!(!token.is(&TokenKind::IntLit(0)));
        assert_eq!(token.to_string(), "a at 1:1");
    }
}
