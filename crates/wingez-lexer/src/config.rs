//! Tokenizer configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for a [`Tokenizer`](crate::Tokenizer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TokenizerConfig {
    /// Source file ID stamped into every span
    pub file_id: u32,
    /// Append an `Eof` token after the closing DEDENTs
    pub emit_eof: bool,
    /// Reject lines that open more than one level at once
    pub strict_indent_step: bool,
}

impl TokenizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_id(mut self, file_id: u32) -> Self {
        self.file_id = file_id;
        self
    }

    pub fn with_eof(mut self) -> Self {
        self.emit_eof = true;
        self
    }

    pub fn with_strict_indent_step(mut self) -> Self {
        self.strict_indent_step = true;
        self
    }
}
