//! Buffered byte stream for traversing source code.
//!
//! This module provides the `SourceStream` struct which reads a source file
//! in fixed-size blocks and hands out one byte at a time. It tracks the
//! 1-based line number for error reporting and supports a one-byte
//! lookahead that never disturbs the reading position.

use std::io::{self, Read};

/// Number of bytes fetched from the underlying reader per refill.
pub const BLOCK_SIZE: usize = 4096;

/// A buffered, forward-only byte stream over a source file.
///
/// The stream owns the underlying reader and a fixed-size block. Bytes are
/// consumed with [`advance`](SourceStream::advance); the upcoming byte can
/// be inspected with [`peek_next`](SourceStream::peek_next) and the most
/// recently consumed byte with [`peek_current`](SourceStream::peek_current).
/// When the block runs dry it is refilled from the reader, so lookahead
/// never needs to seek or reposition the source.
///
/// # Example
///
/// ```
/// use coolc_lex::stream::SourceStream;
///
/// let mut stream = SourceStream::new(&b"ab"[..]);
/// assert_eq!(stream.advance().unwrap(), Some(b'a'));
/// assert_eq!(stream.peek_next().unwrap(), Some(b'b'));
/// assert_eq!(stream.advance().unwrap(), Some(b'b'));
/// assert_eq!(stream.advance().unwrap(), None);
/// ```
pub struct SourceStream<R> {
    /// The underlying byte source.
    source: R,

    /// Fixed-size read block.
    block: [u8; BLOCK_SIZE],

    /// Position of the next unread byte within the block.
    cursor: usize,

    /// Number of valid bytes currently in the block.
    valid: usize,

    /// Current line number (1-based). Incremented each time a consumed
    /// byte is a newline.
    line: u32,

    /// The most recently consumed byte, if any.
    last: Option<u8>,

    /// Whether the underlying reader has been exhausted.
    eof: bool,
}

impl<R: Read> SourceStream<R> {
    /// Creates a new stream over the given reader.
    ///
    /// No bytes are read until the first [`advance`](SourceStream::advance)
    /// or [`peek_next`](SourceStream::peek_next) call.
    pub fn new(source: R) -> Self {
        Self {
            source,
            block: [0; BLOCK_SIZE],
            cursor: 0,
            valid: 0,
            line: 1,
            last: None,
            eof: false,
        }
    }

    /// Consumes and returns the next byte.
    ///
    /// Refills the internal block from the reader when it is exhausted.
    /// Returns `Ok(None)` at end of input. The line counter is incremented
    /// exactly when the consumed byte is a newline.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error raised while refilling the block. Such an
    /// error is fatal to the enclosing scan.
    pub fn advance(&mut self) -> io::Result<Option<u8>> {
        if !self.ensure_available()? {
            return Ok(None);
        }

        let byte = self.block[self.cursor];
        self.cursor += 1;
        self.last = Some(byte);

        if byte == b'\n' {
            self.line += 1;
        }

        Ok(Some(byte))
    }

    /// Returns the byte the next [`advance`](SourceStream::advance) would
    /// return, without consuming it.
    ///
    /// When the block is exhausted the next block is fetched eagerly, so
    /// peeking across a block boundary needs no save/restore of the reader
    /// position. Neither the cursor's logical position nor the line counter
    /// is affected. Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error raised while refilling the block.
    pub fn peek_next(&mut self) -> io::Result<Option<u8>> {
        if !self.ensure_available()? {
            return Ok(None);
        }

        Ok(Some(self.block[self.cursor]))
    }

    /// Returns the most recently consumed byte without advancing.
    ///
    /// Returns `None` if nothing has been consumed yet.
    pub fn peek_current(&self) -> Option<u8> {
        self.last
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Makes sure at least one unread byte is available in the block,
    /// refilling from the reader if needed. Returns false at end of input.
    fn ensure_available(&mut self) -> io::Result<bool> {
        if self.cursor < self.valid {
            return Ok(true);
        }
        if self.eof {
            return Ok(false);
        }

        self.cursor = 0;
        self.valid = loop {
            match self.source.read(&mut self.block) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if self.valid == 0 {
            self.eof = true;
            return Ok(false);
        }

        Ok(true)
    }
}
