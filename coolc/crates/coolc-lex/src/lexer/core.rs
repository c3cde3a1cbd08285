//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the whitespace/comment
//! skipping loop, and the dispatch on the byte that starts each token.

use std::io::Read;

use crate::classify;
use crate::error::LexError;
use crate::stream::SourceStream;
use crate::token::Token;

/// Which keywords the first-letter capitalization restriction applies to.
///
/// The keyword matcher is case-insensitive, but a matched keyword whose
/// first character is uppercase can be rejected. Historically the
/// restriction was meant for the boolean literals only, yet the shipped
/// scanner applied it to every keyword; both behaviors are kept
/// selectable so downstream consumers can rely on either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapitalPolicy {
    /// Reject any keyword starting with an uppercase letter. This is the
    /// historical behavior and the default.
    AllKeywords,

    /// Reject only `true` and `false` when they start with an uppercase
    /// letter; other keywords pass.
    BooleanOnly,
}

/// Scanner for Cool source files.
///
/// The lexer pulls bytes from its [`SourceStream`], skips whitespace and
/// comments, and produces one [`Token`] per call to
/// [`next_token`](Lexer::next_token). Each lexer owns its stream and its
/// lexeme accumulator, so independent files can be scanned concurrently.
///
/// # Example
///
/// ```
/// use coolc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new(&b"while x <- 3"[..]);
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.kind, TokenKind::While);
/// ```
pub struct Lexer<R> {
    /// Buffered byte source.
    pub(crate) stream: SourceStream<R>,

    /// Reused lexeme accumulator for names.
    pub(crate) buf: String,

    /// Reused accumulator for string literal content, kept as raw bytes
    /// so non-ASCII content passes through unchanged.
    pub(crate) raw: Vec<u8>,

    /// Keyword capitalization policy.
    pub(crate) policy: CapitalPolicy,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer over the given byte source with the default
    /// capitalization policy ([`CapitalPolicy::AllKeywords`]).
    pub fn new(source: R) -> Self {
        Self::with_policy(source, CapitalPolicy::AllKeywords)
    }

    /// Creates a lexer with an explicit capitalization policy.
    pub fn with_policy(source: R, policy: CapitalPolicy) -> Self {
        Self {
            stream: SourceStream::new(source),
            buf: String::new(),
            raw: Vec::new(),
            policy,
        }
    }

    /// Returns the next token, or `Ok(None)` at end of input.
    ///
    /// Skips any run of whitespace and comments first, then dispatches on
    /// the triggering byte: `"` starts a string literal, a non-name byte
    /// is a terminal, and anything else is a name (integer, keyword, type
    /// or identifier). Each token is fully resolved before the next one
    /// begins; there is no backtracking across tokens.
    ///
    /// # Errors
    ///
    /// The first lexical or I/O error ends the scan; see [`LexError`] for
    /// the error kinds and their exit codes.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(byte) = self.stream.advance()? else {
                return Ok(None);
            };

            if classify::is_whitespace(byte) {
                continue;
            }

            if self.skip_comment(byte)? {
                continue;
            }

            let line = self.stream.line();
            let kind = match byte {
                b'"' => self.lex_string()?,
                b if !classify::is_name_char(b) => self.lex_terminal(b)?,
                b => self.lex_name(b)?,
            };

            return Ok(Some(Token { kind, line }));
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.stream.line()
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source.as_bytes())
            .map(|t| t.unwrap().kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(kinds("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(kinds(" \t\r\n \x0b\x0c ").is_empty());
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(
            kinds("x <- 3;"),
            vec![
                TokenKind::Ident("x".to_string()),
                TokenKind::Larrow,
                TokenKind::Integer("3".to_string()),
                TokenKind::Semi,
            ]
        );
    }

    #[test]
    fn test_tokens_carry_lines() {
        let tokens: Vec<_> = Lexer::new(&b"a\nb\n\nc"[..]).map(|t| t.unwrap()).collect();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn test_no_token_list_needed() {
        // Tokens stream one at a time.
        let mut lexer = Lexer::new(&b"if x then y else z fi"[..]);
        let mut count = 0;
        while let Some(token) = lexer.next_token().unwrap() {
            assert!(token.line >= 1);
            count += 1;
        }
        assert_eq!(count, 7);
    }
}
