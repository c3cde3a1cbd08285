//! Lexical error types.
//!
//! Every lexical and resource error is unrecoverable: the first one
//! encountered ends the scan. Each variant carries the 1-based source
//! line where it was detected so callers can format a `file:line:`
//! diagnostic, and maps to the documented process exit code via
//! [`LexError::exit_code`].

use thiserror::Error;

use crate::{MAX_NAME_LEN, MAX_STRING_LEN};

/// An unrecoverable error raised during a scan.
#[derive(Debug, Error)]
pub enum LexError {
    /// An I/O failure while reading the source.
    #[error("could not read source file: {0}")]
    Io(#[from] std::io::Error),

    /// An identifier or keyword exceeded [`MAX_NAME_LEN`].
    #[error("identifier or keyword name too long (max {MAX_NAME_LEN} chars allowed)")]
    NameTooLong {
        /// Line on which the overlong name starts.
        line: u32,
    },

    /// A string literal exceeded [`MAX_STRING_LEN`].
    #[error("literal string too long (max {MAX_STRING_LEN} chars allowed)")]
    StringTooLong {
        /// Line reached when the bound was exceeded.
        line: u32,
    },

    /// A digit-led lexeme that is not a valid positive 32-bit signed
    /// integer.
    #[error("{text} is not a positive 32-bit signed integer (max value allowed {max})", max = i32::MAX)]
    BadInteger {
        /// Line of the malformed literal.
        line: u32,
        /// The offending lexeme text.
        text: String,
    },

    /// A keyword rejected by the capitalization rule.
    #[error("keyword {keyword} may not start with a capital letter")]
    CapitalizedKeyword {
        /// Line of the rejected keyword.
        line: u32,
        /// Canonical (lowercase) name of the keyword.
        keyword: &'static str,
    },

    /// A character that starts no token.
    #[error("invalid character {ch}")]
    InvalidCharacter {
        /// Line of the character.
        line: u32,
        /// The offending character.
        ch: char,
    },

    /// A string literal containing a null byte, or left open at end of
    /// input.
    #[error("literal string may not contain null character or EOF")]
    InvalidStringCharacter {
        /// Line reached inside the string.
        line: u32,
    },

    /// A raw (non-escaped) newline inside a string literal.
    #[error("non-escaped newline character inside literal string")]
    UnescapedNewline {
        /// Line the string content sits on.
        line: u32,
    },
}

impl LexError {
    /// The process exit code documented for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            LexError::Io(_) => 2,
            LexError::NameTooLong { .. } => 3,
            LexError::StringTooLong { .. } => 4,
            LexError::BadInteger { .. } => 5,
            LexError::CapitalizedKeyword { .. } => 6,
            LexError::InvalidCharacter { .. } => 7,
            LexError::InvalidStringCharacter { .. } => 8,
            LexError::UnescapedNewline { .. } => 9,
        }
    }

    /// The source line the error was detected on, if it has one.
    ///
    /// I/O failures are not tied to a token position and return `None`.
    pub fn line(&self) -> Option<u32> {
        match self {
            LexError::Io(_) => None,
            LexError::NameTooLong { line }
            | LexError::StringTooLong { line }
            | LexError::BadInteger { line, .. }
            | LexError::CapitalizedKeyword { line, .. }
            | LexError::InvalidCharacter { line, .. }
            | LexError::InvalidStringCharacter { line }
            | LexError::UnescapedNewline { line } => Some(*line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = LexError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert_eq!(io.exit_code(), 2);
        assert_eq!(LexError::NameTooLong { line: 1 }.exit_code(), 3);
        assert_eq!(LexError::StringTooLong { line: 1 }.exit_code(), 4);
        let bad = LexError::BadInteger {
            line: 1,
            text: "99999999999".to_string(),
        };
        assert_eq!(bad.exit_code(), 5);
        let cap = LexError::CapitalizedKeyword {
            line: 1,
            keyword: "class",
        };
        assert_eq!(cap.exit_code(), 6);
        assert_eq!(LexError::InvalidCharacter { line: 1, ch: '#' }.exit_code(), 7);
        assert_eq!(LexError::InvalidStringCharacter { line: 1 }.exit_code(), 8);
        assert_eq!(LexError::UnescapedNewline { line: 1 }.exit_code(), 9);
    }

    #[test]
    fn test_line_accessor() {
        assert_eq!(LexError::NameTooLong { line: 7 }.line(), Some(7));
        let io = LexError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert_eq!(io.line(), None);
    }

    #[test]
    fn test_message_wording() {
        let err = LexError::BadInteger {
            line: 3,
            text: "9999999999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "9999999999 is not a positive 32-bit signed integer (max value allowed 2147483647)"
        );

        let err = LexError::CapitalizedKeyword {
            line: 3,
            keyword: "while",
        };
        assert_eq!(
            err.to_string(),
            "keyword while may not start with a capital letter"
        );

        let err = LexError::NameTooLong { line: 1 };
        assert_eq!(
            err.to_string(),
            "identifier or keyword name too long (max 1024 chars allowed)"
        );
    }
}
