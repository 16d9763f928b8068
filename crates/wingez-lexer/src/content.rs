//! Content lexer
//!
//! Lexes the part of a line that follows its indentation. The raw
//! grammar is a logos automaton; this module only attaches positions
//! and turns logos errors into [`LexicalError`]s.

use crate::token::{Token, TokenKind};
use logos::Logos;
use wingez_error::{LexicalError, Position, Result, Span};

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+|#[^\n]*")]
enum RawToken {
    #[token("def")]
    Def,
    #[token("print")]
    Print,
    #[token("while")]
    While,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("struct")]
    Struct,
    #[token("new")]
    New,
    #[token("break")]
    Break,
    #[token("val")]
    Val,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
    // Overflowing literals fail the callback and surface as an error
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    IntLit(i64),
    #[regex(r#""[^"\n]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_owned()
    })]
    StringLit(String),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    Ne,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("&")]
    Ampersand,
    #[token("->")]
    Arrow,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Def => TokenKind::Def,
            RawToken::Print => TokenKind::Print,
            RawToken::While => TokenKind::While,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Return => TokenKind::Return,
            RawToken::Struct => TokenKind::Struct,
            RawToken::New => TokenKind::New,
            RawToken::Break => TokenKind::Break,
            RawToken::Val => TokenKind::Val,
            RawToken::Ident(name) => TokenKind::Ident(name),
            RawToken::IntLit(value) => TokenKind::IntLit(value),
            RawToken::StringLit(value) => TokenKind::StringLit(value),
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Ne => TokenKind::Ne,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Ampersand => TokenKind::Ampersand,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Dot => TokenKind::Dot,
        }
    }
}

/// Lexes one line of content into tokens, without a trailing NEWLINE.
///
/// `origin` is the position of the first character of `content` in the
/// source unit. A comment-only or empty content yields no tokens.
pub fn lex_content(content: &str, origin: Position, file_id: u32) -> Result<Vec<Token>> {
    let mut lexer = RawToken::lexer(content);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let start = position_in(content, origin, range.start);

        match result {
            Ok(raw) => {
                let end = position_in(content, origin, range.end);
                tokens.push(Token::new(raw.into(), Span::new(start, end, file_id)));
            }
            Err(()) => {
                return Err(LexicalError::invalid_token(
                    start.line,
                    start.column,
                    describe_invalid(lexer.slice()),
                ));
            }
        }
    }

    Ok(tokens)
}

fn position_in(content: &str, origin: Position, byte: usize) -> Position {
    let chars = content[..byte].chars().count() as u32;
    Position::new(origin.line, origin.column + chars, origin.offset + byte)
}

fn describe_invalid(slice: &str) -> String {
    if slice.starts_with('"') {
        "unterminated string literal".to_string()
    } else if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        format!("integer literal {} does not fit in 64 bits", slice)
    } else {
        format!("unexpected character '{}'", slice)
    }
}
