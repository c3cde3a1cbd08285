//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Main Lexer struct, whitespace skipping and dispatch
//! - `comment` - Line and block comment elision
//! - `string` - String literal extraction
//! - `name` - Name extraction and integer/keyword/type/identifier classification
//! - `terminal` - Operator and punctuation extraction

mod comment;
mod core;
mod name;
mod string;
mod terminal;

pub use self::core::{CapitalPolicy, Lexer};
