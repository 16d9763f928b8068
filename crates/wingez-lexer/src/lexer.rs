//! Tokenizer for the Wingez language
//!
//! Converts source code into a sequence of tokens, line by line.
//! Block structure comes from indentation: a stack of open levels
//! turns level changes into INDENT and DEDENT tokens.

use crate::config::TokenizerConfig;
use crate::content::lex_content;
use crate::indent::measure;
use crate::token::{Token, TokenKind};
use std::collections::VecDeque;
use std::iter::{Enumerate, FusedIterator};
use std::str::SplitInclusive;
use tracing::{debug, trace};
use wingez_error::{LexicalError, Position, Result, Span};

/// How the level stack changes for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Stay,
    Indent,
    /// Number of levels to pop
    Dedent(usize),
}

/// The Wingez tokenizer.
///
/// Yields tokens lazily; each instance walks its source once. After an
/// error has been yielded the iterator is exhausted.
pub struct Tokenizer<'src> {
    /// Remaining physical lines, with their index
    lines: Enumerate<SplitInclusive<'src, char>>,
    /// Byte offset of the next line
    offset: usize,
    config: TokenizerConfig,
    /// Open nesting levels, strictly increasing, bottom is always 0
    level_stack: Vec<u32>,
    /// Tokens of the current line waiting to be yielded
    pending: VecDeque<Token>,
    /// End of the last physical line seen
    end: Position,
    finished: bool,
    emitted: usize,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer with the default configuration
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, TokenizerConfig::default())
    }

    pub fn with_config(source: &'src str, config: TokenizerConfig) -> Self {
        Self {
            lines: source.split_inclusive('\n').enumerate(),
            offset: 0,
            config,
            level_stack: vec![0],
            pending: VecDeque::new(),
            end: Position::new(1, 1, 0),
            finished: false,
            emitted: 0,
        }
    }

    /// Currently open levels, outermost first
    pub fn level_stack(&self) -> &[u32] {
        &self.level_stack
    }

    fn top(&self) -> u32 {
        self.level_stack.last().copied().unwrap_or(0)
    }

    /// Scans physical lines until one produces tokens or input runs out
    fn scan_next_line(&mut self) -> Result<()> {
        while let Some((index, raw)) = self.lines.next() {
            let line_no = index as u32 + 1;
            let start = self.offset;
            self.offset += raw.len();

            let line = raw.strip_suffix('\n').unwrap_or(raw);
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.end = Position::new(
                line_no,
                line.chars().count() as u32 + 1,
                start + line.len(),
            );

            if line.trim_matches(|c| c == ' ' || c == '\t').is_empty() {
                continue;
            }

            let indentation = measure(line).map_err(|e| e.at_line(line_no))?;
            let origin = Position::new(
                line_no,
                indentation.width as u32 + 1,
                start + indentation.width,
            );
            let transition = self.plan_transition(indentation.level, origin)?;
            let tokens = lex_content(indentation.remainder, origin, self.config.file_id)?;

            self.apply_transition(transition, indentation.level, origin);

            // Content that lexes to nothing (a comment) ends no statement
            if !tokens.is_empty() {
                self.pending.extend(tokens);
                self.pending
                    .push_back(Token::new(TokenKind::Newline, Span::point(self.end, self.config.file_id)));
            }

            if !self.pending.is_empty() {
                return Ok(());
            }
        }

        self.close_blocks();
        Ok(())
    }

    /// Decides the stack change for a line at `level` without touching the stack
    fn plan_transition(&self, level: u32, origin: Position) -> Result<Transition> {
        let top = self.top();

        if level == top {
            return Ok(Transition::Stay);
        }

        if level > top {
            if self.config.strict_indent_step && level - top > 1 {
                return Err(LexicalError::invalid_indentation(
                    origin.line,
                    origin.column,
                    format!(
                        "indentation may only increase by one level at a time (from {} to {})",
                        top, level
                    ),
                ));
            }
            return Ok(Transition::Indent);
        }

        match self.level_stack.iter().rposition(|&open| open == level) {
            Some(index) => Ok(Transition::Dedent(self.level_stack.len() - 1 - index)),
            None => Err(LexicalError::inconsistent_dedent(
                origin.line,
                origin.column,
                format!(
                    "dedent to level {} does not match any enclosing block (open levels: {:?})",
                    level, self.level_stack
                ),
            )),
        }
    }

    fn apply_transition(&mut self, transition: Transition, level: u32, origin: Position) {
        let span = Span::point(origin, self.config.file_id);

        match transition {
            Transition::Stay => {}
            Transition::Indent => {
                self.level_stack.push(level);
                trace!(line = origin.line, level, depth = self.level_stack.len(), "indent");
                self.pending.push_back(Token::new(TokenKind::Indent, span));
            }
            Transition::Dedent(count) => {
                for _ in 0..count {
                    self.level_stack.pop();
                    self.pending.push_back(Token::new(TokenKind::Dedent, span));
                }
                trace!(line = origin.line, level, closed = count, "dedent");
            }
        }
    }

    /// Closes every open block at end of input
    fn close_blocks(&mut self) {
        let span = Span::point(self.end, self.config.file_id);

        while self.level_stack.len() > 1 {
            self.level_stack.pop();
            self.pending.push_back(Token::new(TokenKind::Dedent, span));
        }

        if self.config.emit_eof {
            self.pending.push_back(Token::new(TokenKind::Eof, span));
        }

        self.finished = true;
        debug!(
            tokens = self.emitted + self.pending.len(),
            lines = self.end.line,
            "tokenized source unit"
        );
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.emitted += 1;
                return Some(Ok(token));
            }

            if self.finished {
                return None;
            }

            if let Err(err) = self.scan_next_line() {
                debug!(line = err.line, column = err.column, kind = %err.kind, "tokenization aborted");
                self.finished = true;
                return Some(Err(err));
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenizes source code with the default configuration
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    tokenize_with(source, TokenizerConfig::default())
}

/// Tokenizes source code with the given configuration
pub fn tokenize_with(source: &str, config: TokenizerConfig) -> Result<Vec<Token>> {
    Tokenizer::with_config(source, config).collect()
}

/// Tokenizes source code, keeping the tokens produced before a failure.
///
/// The tokens are only meant for diagnostics; once an error is
/// returned the stream is not a valid program.
pub fn tokenize_partial(source: &str, config: TokenizerConfig) -> (Vec<Token>, Option<LexicalError>) {
    let mut tokens = Vec::new();

    for item in Tokenizer::with_config(source, config) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => return (tokens, Some(err)),
        }
    }

    (tokens, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wingez_error::LexicalErrorKind;

    fn lex(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Ident(name.into())
    }

    use TokenKind::{Dedent, Indent, Newline};

    #[test]
    fn test_flat_lines() {
        assert_eq!(
            lex("var\nprint\n"),
            vec![ident("var"), Newline, TokenKind::Print, Newline]
        );
    }

    #[test]
    fn test_nested_tabs() {
        assert_eq!(
            lex("a\n\tb\n\t\tc\nb2"),
            vec![
                ident("a"),
                Newline,
                Indent,
                ident("b"),
                Newline,
                Indent,
                ident("c"),
                Newline,
                Dedent,
                Dedent,
                ident("b2"),
                Newline,
            ]
        );
    }

    #[test]
    fn test_block_closed_at_end_of_input() {
        assert_eq!(
            lex("test\n  print\n  \n\n"),
            vec![ident("test"), Newline, Indent, TokenKind::Print, Newline, Dedent]
        );
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_skipped() {
        assert_eq!(
            lex("print\n  print\n    print\n \n\t \nval\n"),
            vec![
                TokenKind::Print,
                Newline,
                Indent,
                TokenKind::Print,
                Newline,
                Indent,
                TokenKind::Print,
                Newline,
                Dedent,
                Dedent,
                TokenKind::Val,
                Newline,
            ]
        );
    }

    #[test]
    fn test_comment_lines_take_part_in_levels() {
        assert_eq!(
            lex("a\n\tb\n# c\n\tc\n"),
            vec![
                ident("a"),
                Newline,
                Indent,
                ident("b"),
                Newline,
                Dedent,
                Indent,
                ident("c"),
                Newline,
                Dedent,
            ]
        );
    }

    #[test]
    fn test_comment_at_same_level_adds_nothing() {
        assert_eq!(
            lex("if a:\n\tb\n\t# note\n\tc\n"),
            vec![
                TokenKind::If,
                ident("a"),
                TokenKind::Colon,
                Newline,
                Indent,
                ident("b"),
                Newline,
                ident("c"),
                Newline,
                Dedent,
            ]
        );
    }

    #[test]
    fn test_comment_at_absent_level() {
        let err = tokenize("a\n\t\tb\n\t# c\n\t\tc\n").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InconsistentDedent);
        assert_eq!((err.line, err.column), (3, 2));
    }

    #[test]
    fn test_content_skipped_entirely_has_no_newline() {
        assert_eq!(
            lex("a\n\x0c\nb\n"),
            vec![ident("a"), Newline, ident("b"), Newline]
        );
        assert_eq!(
            lex("a\n\r\r\nb\n"),
            vec![ident("a"), Newline, ident("b"), Newline]
        );
    }

    #[test]
    fn test_dedent_to_intermediate_level() {
        assert_eq!(
            lex("a\n\tb\n\t\tc\n\td"),
            vec![
                ident("a"),
                Newline,
                Indent,
                ident("b"),
                Newline,
                Indent,
                ident("c"),
                Newline,
                Dedent,
                ident("d"),
                Newline,
                Dedent,
            ]
        );
    }

    #[test]
    fn test_indent_may_skip_levels() {
        let mut tokenizer = Tokenizer::new("a\n\t\tb\n");
        let kinds: Vec<_> = tokenizer.by_ref().take(3).map(|t| t.unwrap().kind).collect();
        assert_eq!(kinds, vec![ident("a"), Newline, Indent]);
        assert_eq!(tokenizer.level_stack(), &[0, 2]);
    }

    #[test]
    fn test_inconsistent_dedent() {
        let err = tokenize("a\n\t\tb\n\tc\n").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InconsistentDedent);
        assert_eq!(err.line, 3);
        assert_eq!(err.column, 2);
    }

    #[test]
    fn test_strict_indent_step() {
        let config = TokenizerConfig::new().with_strict_indent_step();
        let err = tokenize_with("var\n    print\n", config).unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InvalidIndentation);
        assert_eq!(err.line, 2);

        assert!(tokenize_with("var\n  print\n", config).is_ok());
    }

    #[test]
    fn test_invalid_indentation_reports_line() {
        let err = tokenize("def main():\n print(1)\n").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InvalidIndentation);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 1);
    }

    #[test]
    fn test_invalid_token_reports_position() {
        let err = tokenize("a = 1\n\tb = $\n").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InvalidToken);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 6);
    }

    #[test]
    fn test_fused_after_error() {
        let mut tokenizer = Tokenizer::new(" bad\ngood\n");
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert!(tokenizer.next().is_none());
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_invalid_token_leaves_stack_untouched() {
        let mut tokenizer = Tokenizer::new("a\n\tb ?\n");
        let items: Vec<_> = tokenizer.by_ref().collect();
        assert_eq!(items.len(), 3);
        assert!(items[2].is_err());
        assert_eq!(tokenizer.level_stack(), &[0]);
    }

    #[test]
    fn test_partial_tokens() {
        let (tokens, err) = tokenize_partial("a\n\tb\n c\n", TokenizerConfig::default());
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ident("a"), Newline, Indent, ident("b"), Newline]);
        assert_eq!(err.map(|e| e.kind), Some(LexicalErrorKind::InvalidIndentation));
    }

    #[test]
    fn test_eof_token() {
        let config = TokenizerConfig::new().with_eof();
        let kinds: Vec<_> = tokenize_with("a\n\tb", config)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ident("a"), Newline, Indent, ident("b"), Newline, Dedent, TokenKind::Eof]
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex(""), vec![]);
        assert_eq!(lex("\n\n  \n"), vec![]);
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize_with("x\r\n\tyy\n", TokenizerConfig::new().with_file_id(3)).unwrap();

        // x NEWLINE INDENT yy NEWLINE DEDENT
        assert_eq!(tokens[0].span.start, Position::new(1, 1, 0));
        assert_eq!(tokens[1].span, Span::point(Position::new(1, 2, 1), 3));
        assert_eq!(tokens[2].span, Span::point(Position::new(2, 2, 4), 3));
        assert_eq!(tokens[3].span.start, Position::new(2, 2, 4));
        assert_eq!(tokens[3].span.end, Position::new(2, 4, 6));
        assert_eq!(tokens[4].span, Span::point(Position::new(2, 4, 6), 3));
        assert_eq!(tokens[5].span, Span::point(Position::new(2, 4, 6), 3));
    }

    #[test]
    fn test_independent_runs_are_identical() {
        let source = "def f(a):\n  if a > 1:\n    return a\n  return 0\nprint(f(3))\n";
        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }
}
