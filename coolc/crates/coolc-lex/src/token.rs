//! Token type definitions.
//!
//! A [`Token`] is a classified lexeme together with the 1-based source
//! line it starts on. [`TokenKind`] covers the 19 Cool keywords, the
//! fixed terminal set, and the four valued kinds (integer, string,
//! identifier, type identifier) which carry their lexeme text.

use std::fmt;

/// A classified lexeme with its source line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the lexeme was classified as.
    pub kind: TokenKind,

    /// The 1-based line on which the token starts.
    pub line: u32,
}

/// The kind of a token.
///
/// Keyword and terminal variants carry no payload; integer, string,
/// identifier and type tokens keep their lexeme text verbatim (an
/// integer literal like `007` is emitted exactly as written).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fi`
    Fi,
    /// `if`
    If,
    /// `in`
    In,
    /// `inherits`
    Inherits,
    /// `isvoid`
    Isvoid,
    /// `let`
    Let,
    /// `loop`
    Loop,
    /// `pool`
    Pool,
    /// `then`
    Then,
    /// `while`
    While,
    /// `case`
    Case,
    /// `esac`
    Esac,
    /// `new`
    New,
    /// `of`
    Of,
    /// `not`
    Not,
    /// `true`
    True,

    // Terminals
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `*`
    Times,
    /// `+`
    Plus,
    /// `,`
    Comma,
    /// `-`
    Minus,
    /// `.`
    Dot,
    /// `/`
    Divide,
    /// `:`
    Colon,
    /// `;`
    Semi,
    /// `@`
    At,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `~`
    Tilde,
    /// `<-` assignment arrow
    Larrow,
    /// `<=`
    Le,
    /// `<`
    Lt,
    /// `=>` case arrow
    Rarrow,
    /// `=`
    Equals,

    // Valued kinds
    /// An integer literal, lexeme text kept verbatim.
    Integer(String),
    /// A string literal, with escapes already resolved. Content is kept
    /// as raw bytes so values outside the ASCII range survive verbatim.
    Str(Vec<u8>),
    /// An object identifier (first character lowercase).
    Ident(String),
    /// A type identifier (first character uppercase).
    Type(String),
}

impl TokenKind {
    /// Returns the canonical lowercase name used in the token stream
    /// output (`lparen`, `if`, `larrow`, `identifier`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fi => "fi",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Inherits => "inherits",
            TokenKind::Isvoid => "isvoid",
            TokenKind::Let => "let",
            TokenKind::Loop => "loop",
            TokenKind::Pool => "pool",
            TokenKind::Then => "then",
            TokenKind::While => "while",
            TokenKind::Case => "case",
            TokenKind::Esac => "esac",
            TokenKind::New => "new",
            TokenKind::Of => "of",
            TokenKind::Not => "not",
            TokenKind::True => "true",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Times => "times",
            TokenKind::Plus => "plus",
            TokenKind::Comma => "comma",
            TokenKind::Minus => "minus",
            TokenKind::Dot => "dot",
            TokenKind::Divide => "divide",
            TokenKind::Colon => "colon",
            TokenKind::Semi => "semi",
            TokenKind::At => "at",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Tilde => "tilde",
            TokenKind::Larrow => "larrow",
            TokenKind::Le => "le",
            TokenKind::Lt => "lt",
            TokenKind::Rarrow => "rarrow",
            TokenKind::Equals => "equals",
            TokenKind::Integer(_) => "integer",
            TokenKind::Str(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Type(_) => "type",
        }
    }

    /// Returns the lexeme text for the guaranteed-ASCII valued kinds
    /// (integer, identifier, type), `None` otherwise. String content may
    /// carry arbitrary bytes and is reached through
    /// [`text_bytes`](TokenKind::text_bytes) instead.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Integer(text)
            | TokenKind::Ident(text)
            | TokenKind::Type(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the lexeme bytes for valued kinds, `None` for keywords and
    /// terminals. String content is the stored bytes verbatim.
    pub fn text_bytes(&self) -> Option<&[u8]> {
        match self {
            TokenKind::Str(bytes) => Some(bytes),
            TokenKind::Integer(text)
            | TokenKind::Ident(text)
            | TokenKind::Type(text) => Some(text.as_bytes()),
            _ => None,
        }
    }

    /// Returns true for the boolean literal keywords `true` and `false`.
    pub fn is_boolean_keyword(&self) -> bool {
        matches!(self, TokenKind::True | TokenKind::False)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a name against the fixed keyword set, case-insensitively.
///
/// Returns the keyword kind on a match, `None` otherwise. The caller is
/// responsible for the capitalization restriction; this function only
/// recognizes.
pub fn keyword_from_name(name: &str) -> Option<TokenKind> {
    let lower = name.to_ascii_lowercase();
    let kind = match lower.as_str() {
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "fi" => TokenKind::Fi,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "inherits" => TokenKind::Inherits,
        "isvoid" => TokenKind::Isvoid,
        "let" => TokenKind::Let,
        "loop" => TokenKind::Loop,
        "pool" => TokenKind::Pool,
        "then" => TokenKind::Then,
        "while" => TokenKind::While,
        "case" => TokenKind::Case,
        "esac" => TokenKind::Esac,
        "new" => TokenKind::New,
        "of" => TokenKind::Of,
        "not" => TokenKind::Not,
        "true" => TokenKind::True,
        _ => return None,
    };
    Some(kind)
}
