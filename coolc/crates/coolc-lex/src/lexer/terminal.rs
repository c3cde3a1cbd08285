//! Terminal (operator and punctuation) extraction.
//!
//! Most terminals are a single byte. `<` and `=` need one byte of
//! lookahead to pick between `<-` / `<=` / `<` and `=>` / `=`.

use std::io::Read;

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Maps the already-consumed `first` byte to a terminal token,
    /// consuming a second byte for the two-character terminals.
    ///
    /// Any byte outside the terminal set is fatal
    /// ([`LexError::InvalidCharacter`]).
    pub(crate) fn lex_terminal(&mut self, first: u8) -> Result<TokenKind, LexError> {
        let kind = match first {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'*' => TokenKind::Times,
            b'+' => TokenKind::Plus,
            b',' => TokenKind::Comma,
            b'-' => TokenKind::Minus,
            b'.' => TokenKind::Dot,
            b'/' => TokenKind::Divide,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semi,
            b'@' => TokenKind::At,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'~' => TokenKind::Tilde,
            b'<' => match self.stream.peek_next()? {
                Some(b'-') => {
                    self.stream.advance()?;
                    TokenKind::Larrow
                },
                Some(b'=') => {
                    self.stream.advance()?;
                    TokenKind::Le
                },
                _ => TokenKind::Lt,
            },
            b'=' => match self.stream.peek_next()? {
                Some(b'>') => {
                    self.stream.advance()?;
                    TokenKind::Rarrow
                },
                _ => TokenKind::Equals,
            },
            other => {
                return Err(LexError::InvalidCharacter {
                    line: self.stream.line(),
                    ch: other as char,
                });
            },
        };

        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_one(source: &str) -> Result<TokenKind, LexError> {
        let mut lexer = Lexer::new(source.as_bytes());
        lexer
            .next_token()
            .map(|t| t.expect("expected a token").kind)
    }

    #[test]
    fn test_single_byte_terminals() {
        let cases: &[(&str, TokenKind)] = &[
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
            ("*", TokenKind::Times),
            ("+", TokenKind::Plus),
            (",", TokenKind::Comma),
            ("-", TokenKind::Minus),
            (".", TokenKind::Dot),
            ("/", TokenKind::Divide),
            (":", TokenKind::Colon),
            (";", TokenKind::Semi),
            ("@", TokenKind::At),
            ("{", TokenKind::LBrace),
            ("}", TokenKind::RBrace),
            ("~", TokenKind::Tilde),
        ];
        for (source, expected) in cases {
            assert_eq!(&lex_one(source).unwrap(), expected, "lexing {:?}", source);
        }
    }

    #[test]
    fn test_less_disambiguation() {
        assert_eq!(lex_one("<-").unwrap(), TokenKind::Larrow);
        assert_eq!(lex_one("<=").unwrap(), TokenKind::Le);
        assert_eq!(lex_one("<").unwrap(), TokenKind::Lt);
        assert_eq!(lex_one("<x").unwrap(), TokenKind::Lt);
    }

    #[test]
    fn test_equals_disambiguation() {
        assert_eq!(lex_one("=>").unwrap(), TokenKind::Rarrow);
        assert_eq!(lex_one("=").unwrap(), TokenKind::Equals);
        assert_eq!(lex_one("==").unwrap(), TokenKind::Equals);
    }

    #[test]
    fn test_two_char_terminal_consumes_both() {
        let mut lexer = Lexer::new(&b"<-x"[..]);
        assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Larrow);
        assert_eq!(
            lexer.next_token().unwrap().unwrap().kind,
            TokenKind::Ident("x".to_string())
        );
    }

    #[test]
    fn test_invalid_character() {
        for source in ["#", "$", "!", "?", "&", "["] {
            let err = lex_one(source).unwrap_err();
            assert!(
                matches!(err, LexError::InvalidCharacter { .. }),
                "{:?} should be invalid",
                source
            );
            assert_eq!(err.exit_code(), 7);
        }
    }
}
