//! End-to-end tests for the Wingez tokenizer
//!
//! Drives the public API the way a parser or compiler driver does:
//! Source → Tokenizer → token stream, or Source → LexicalError → rendered diagnostic

use wingez_error::{DiagnosticRenderer, LexicalError, LexicalErrorKind, SourceCache};
use wingez_lexer::{tokenize_partial, Token, TokenKind, TokenizerConfig};

/// Result of tokenizing a Wingez source file
#[derive(Debug)]
pub struct LexResult {
    /// Tokens produced (only those before the failure, if any)
    pub tokens: Vec<Token>,
    /// The error that aborted tokenization
    pub error: Option<LexicalError>,
    /// The error rendered as a diagnostic, without colors
    pub rendered: Option<String>,
}

impl LexResult {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

/// Installs a test-friendly tracing subscriber; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Tokenizes a named source file the way a driver would
pub fn lex_file(name: &str, source: &str) -> LexResult {
    let mut cache = SourceCache::new();
    let file_id = cache.add(name, source);

    let config = TokenizerConfig::new().with_file_id(file_id);
    let (tokens, error) = tokenize_partial(source, config);

    let rendered = error.as_ref().map(|err| {
        DiagnosticRenderer::new(&cache)
            .without_colors()
            .render(&err.to_diagnostic(file_id))
    });

    LexResult {
        tokens,
        error,
        rendered,
    }
}

/// Returns the token kinds of `source`, panicking on a lexical error
pub fn kinds(source: &str) -> Vec<TokenKind> {
    let result = lex_file("test.wz", source);
    if let Some(rendered) = result.rendered {
        panic!("Expected source to tokenize, but got:\n{}", rendered);
    }
    result.kinds()
}

/// Asserts that tokenizing fails with the given kind, returning the error
pub fn assert_lex_fails(source: &str, kind: LexicalErrorKind) -> LexicalError {
    let result = lex_file("test.wz", source);
    match result.error {
        Some(err) if err.kind == kind => err,
        Some(err) => panic!("Expected {:?}, but got {:?}: {}", kind, err.kind, err),
        None => panic!("Expected source to fail with {:?}, but it succeeded", kind),
    }
}
