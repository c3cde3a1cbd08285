//! Comment elision.
//!
//! This module handles skipping line comments (`-- ...`) and block
//! comments (`(* ... *)`, non-nesting).

use std::io::Read;

use crate::error::LexError;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Skips a comment starting at the already-consumed `first` byte.
    ///
    /// Returns true if a comment was consumed, in which case the caller
    /// restarts its dispatch from the current position. Returns false when
    /// `first` does not open a comment (it is then an ordinary `-` or `(`
    /// terminal).
    ///
    /// A `--` comment runs through the next newline or end of input. A
    /// `(*` comment runs to the matching `*)`; reaching end of input
    /// before the closer ends the comment silently, a long-standing
    /// behavior kept for compatibility.
    pub(crate) fn skip_comment(&mut self, first: u8) -> Result<bool, LexError> {
        if first == b'-' && self.stream.peek_next()? == Some(b'-') {
            while let Some(byte) = self.stream.advance()? {
                if byte == b'\n' {
                    break;
                }
            }
            return Ok(true);
        }

        if first == b'(' && self.stream.peek_next()? == Some(b'*') {
            let mut current = Some(first);
            while let Some(byte) = current {
                if byte == b'*' && self.stream.peek_next()? == Some(b')') {
                    break;
                }
                current = self.stream.advance()?;
            }

            // Consume the closer's ')'; a no-op at end of input.
            self.stream.advance()?;
            return Ok(true);
        }

        Ok(false)
    }
}
