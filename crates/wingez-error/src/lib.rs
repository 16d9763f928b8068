//! wingez-error - Locations and lexical errors for the Wingez language
//!
//! This crate provides source positions for tokens, the [`LexicalError`]
//! type the tokenizer fails with, and a renderer that turns errors into
//! compiler-style messages.
//!
//! # Example
//!
//! ```rust
//! use wingez_error::{DiagnosticRenderer, LexicalError, SourceCache};
//!
//! let mut cache = SourceCache::new();
//! let file_id = cache.add("example.wz", "if a:\n print(a)");
//!
//! let error = LexicalError::invalid_indentation(
//!     2,
//!     1,
//!     "single leading space is not a valid indentation unit",
//! );
//!
//! let renderer = DiagnosticRenderer::new(&cache);
//! println!("{}", renderer.render(&error.to_diagnostic(file_id)));
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceCache, SourceFile};
pub use error::{LexicalError, LexicalErrorKind};
pub use span::{Position, Span, Spanned};

/// Result type for operations that may fail with a lexical error
pub type Result<T> = std::result::Result<T, LexicalError>;
