//! wingez-lexer - Tokenizer for the Wingez language
//!
//! This crate converts Wingez source code into a sequence of tokens.
//!
//! # Features
//!
//! - Significant indentation (like Python): one tab or two spaces per level
//! - Synthetic INDENT/DEDENT/NEWLINE tokens driven by a stack of open levels
//! - Lazy token stream with a typed [`LexicalError`](wingez_error::LexicalError) on failure
//! - Literals: integers, strings
//!
//! # Example
//!
//! ```rust
//! use wingez_lexer::{tokenize, TokenKind};
//!
//! let source = "def main():\n\tprint(1)\n";
//! let tokens = tokenize(source).unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Def);
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Indent));
//! ```

pub mod config;
pub mod content;
pub mod indent;
pub mod lexer;
pub mod token;

pub use config::TokenizerConfig;
pub use content::lex_content;
pub use indent::{measure, Indentation};
pub use lexer::{tokenize, tokenize_partial, tokenize_with, Tokenizer};
pub use token::{Token, TokenKind};
