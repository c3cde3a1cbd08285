//! String literal extraction.
//!
//! Accumulates the bytes between an opening and closing double quote,
//! verbatim: content is not re-encoded, so bytes outside the ASCII range
//! pass through unchanged and count once toward the length bound. The
//! backslash is only special in front of a quote (literal quote), a
//! newline (line continuation) or another backslash (two literal
//! backslashes); escape parity is tracked, so a literal ending in an even
//! run of backslashes closes normally.

use std::io::Read;

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;
use crate::MAX_STRING_LEN;

impl<R: Read> Lexer<R> {
    /// Extracts a string literal. The opening quote has already been
    /// consumed by the dispatch loop.
    ///
    /// Rules, checked per consumed byte:
    /// - `\"` keeps the quote as literal content instead of closing;
    /// - `\` before a newline is a line continuation, both bytes are
    ///   dropped and the literal continues on the next line;
    /// - `\\` yields two literal backslashes (consuming both keeps the
    ///   escape parity right in front of a closing quote);
    /// - a raw newline, a null byte, or end of input before the closing
    ///   quote is fatal, as is exceeding [`MAX_STRING_LEN`]. The bound
    ///   check is `>=` because the backslash-pair arm grows the content
    ///   by two bytes and may step over the exact bound.
    pub(crate) fn lex_string(&mut self) -> Result<TokenKind, LexError> {
        self.raw.clear();

        loop {
            let line = self.stream.line();

            if self.raw.len() >= MAX_STRING_LEN {
                return Err(LexError::StringTooLong { line });
            }

            match self.stream.advance()? {
                None | Some(0) => return Err(LexError::InvalidStringCharacter { line }),
                Some(b'"') => break,
                Some(b'\n') => return Err(LexError::UnescapedNewline { line }),
                Some(b'\\') => match self.stream.peek_next()? {
                    Some(b'\n') => {
                        // Line continuation; the newline is excluded.
                        self.stream.advance()?;
                    },
                    Some(b'"') => {
                        self.stream.advance()?;
                        self.raw.push(b'"');
                    },
                    Some(b'\\') => {
                        self.stream.advance()?;
                        self.raw.extend_from_slice(b"\\\\");
                    },
                    _ => self.raw.push(b'\\'),
                },
                Some(byte) => self.raw.push(byte),
            }
        }

        Ok(TokenKind::Str(self.raw.clone()))
    }
}
