//! coolc-lex - Lexical Analyzer for the Cool Programming Language
//!
//! This crate provides the complete scanner for Cool source files. It
//! transforms a byte stream into a sequence of tokens annotated with
//! 1-based source line numbers, ready for a downstream parser.
//!
//! # Overview
//!
//! The scanner is a single forward pass. A [`SourceStream`] reads the
//! source in fixed-size blocks and offers one byte of lookahead; the
//! [`Lexer`] pulls bytes from it, elides whitespace and comments, and
//! classifies each lexeme into a [`Token`].
//!
//! All errors are unrecoverable: the first lexical or I/O problem ends
//! the scan with a [`LexError`] describing the kind, the source line and
//! the documented process exit code. The crate itself never prints and
//! never exits the process; that is the driver's job.
//!
//! # Example
//!
//! ```
//! use coolc_lex::{Lexer, TokenKind};
//!
//! let source = &b"class Main { main() : Int { 42 }; };"[..];
//! let mut lexer = Lexer::new(source);
//!
//! while let Some(token) = lexer.next_token().unwrap() {
//!     println!("{} {}", token.line, token.kind);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`stream`] - Buffered byte source with lookahead and line counting
//! - [`classify`] - Byte predicates and the integer literal validator
//! - [`token`] - Token type definitions
//! - [`lexer`] - The scanning state machine
//! - [`error`] - Error kinds and exit-code mapping

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

// Re-export main types for convenience
pub use error::LexError;
pub use lexer::{CapitalPolicy, Lexer};
pub use stream::SourceStream;
pub use token::{keyword_from_name, Token, TokenKind};

/// Maximum length, in bytes, of an identifier or keyword lexeme.
pub const MAX_NAME_LEN: usize = 1024;

/// Maximum length, in bytes, of a string literal's content.
pub const MAX_STRING_LEN: usize = 1024;
