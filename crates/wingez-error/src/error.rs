//! LexicalError - the failure type of the tokenizer
//!
//! Every error is terminal for the source unit being tokenized. The
//! error keeps the line and column of the offending character so a
//! driver can render it with [`DiagnosticRenderer`](crate::DiagnosticRenderer).

use crate::diagnostic::{Diagnostic, ErrorCode};
use crate::span::{Position, Span};
use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a lexical error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LexicalErrorKind {
    /// Leading whitespace is not a run of whole indentation units
    InvalidIndentation,
    /// A dedent landed on a level that no enclosing block opened
    InconsistentDedent,
    /// Line content is not part of the token grammar
    InvalidToken,
}

impl LexicalErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexicalErrorKind::InvalidIndentation => ErrorCode::INVALID_INDENTATION,
            LexicalErrorKind::InconsistentDedent => ErrorCode::INCONSISTENT_DEDENT,
            LexicalErrorKind::InvalidToken => ErrorCode::INVALID_TOKEN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LexicalErrorKind::InvalidIndentation => "invalid indentation",
            LexicalErrorKind::InconsistentDedent => "inconsistent dedent",
            LexicalErrorKind::InvalidToken => "invalid token",
        }
    }

    fn help(self) -> &'static str {
        match self {
            LexicalErrorKind::InvalidIndentation => {
                "indent with tabs or with pairs of spaces, never both on one line"
            }
            LexicalErrorKind::InconsistentDedent => {
                "dedent to the indentation of an enclosing block"
            }
            LexicalErrorKind::InvalidToken => "remove or replace the unrecognized text",
        }
    }
}

impl fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error raised while tokenizing, located at a line and column
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{line}:{column}: {message}")]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed, in characters)
    pub column: u32,
    pub message: String,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            column,
            message: message.into(),
        }
    }

    pub fn invalid_indentation(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(LexicalErrorKind::InvalidIndentation, line, column, message)
    }

    pub fn inconsistent_dedent(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(LexicalErrorKind::InconsistentDedent, line, column, message)
    }

    pub fn invalid_token(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(LexicalErrorKind::InvalidToken, line, column, message)
    }

    /// Places a line-local error on its line within the source unit
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// The error carries no byte offset, so the span offsets are zero;
    /// rendering only looks at lines and columns.
    pub fn to_diagnostic(&self, file_id: u32) -> Diagnostic {
        let start = Position::new(self.line, self.column, 0);
        let end = Position::new(self.line, self.column + 1, 0);

        Diagnostic::error(self.message.clone())
            .with_code(self.kind.code())
            .with_label(Span::new(start, end, file_id), self.kind.as_str())
            .with_help(self.kind.help())
    }
}
