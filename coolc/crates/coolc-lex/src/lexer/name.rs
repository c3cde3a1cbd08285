//! Name extraction and classification.
//!
//! A name is the maximal run of alphanumeric-or-underscore bytes starting
//! at the triggering byte. A completed name is classified, in order, as
//! an integer literal (digit-led), a keyword, a type identifier
//! (uppercase-led) or a plain identifier.

use std::io::Read;

use crate::classify;
use crate::error::LexError;
use crate::lexer::CapitalPolicy;
use crate::token::{keyword_from_name, TokenKind};
use crate::Lexer;
use crate::MAX_NAME_LEN;

impl<R: Read> Lexer<R> {
    /// Extracts and classifies a name starting at the already-consumed
    /// `first` byte.
    ///
    /// Exceeding [`MAX_NAME_LEN`] is fatal. A digit-led name must be a
    /// valid positive 32-bit signed integer. A keyword match is
    /// case-insensitive, subject to the lexer's [`CapitalPolicy`].
    pub(crate) fn lex_name(&mut self, first: u8) -> Result<TokenKind, LexError> {
        self.buf.clear();
        self.buf.push(first as char);

        while let Some(byte) = self.stream.peek_next()? {
            if !classify::is_name_char(byte) {
                break;
            }
            if self.buf.len() == MAX_NAME_LEN {
                return Err(LexError::NameTooLong {
                    line: self.stream.line(),
                });
            }
            self.stream.advance()?;
            self.buf.push(byte as char);
        }

        let line = self.stream.line();

        if first.is_ascii_digit() {
            if classify::is_integer_literal(&self.buf) {
                return Ok(TokenKind::Integer(self.buf.clone()));
            }
            return Err(LexError::BadInteger {
                line,
                text: self.buf.clone(),
            });
        }

        if let Some(keyword) = keyword_from_name(&self.buf) {
            let restricted = match self.policy {
                CapitalPolicy::AllKeywords => true,
                CapitalPolicy::BooleanOnly => keyword.is_boolean_keyword(),
            };
            if restricted && first.is_ascii_uppercase() {
                return Err(LexError::CapitalizedKeyword {
                    line,
                    keyword: keyword.name(),
                });
            }
            return Ok(keyword);
        }

        if first.is_ascii_uppercase() {
            return Ok(TokenKind::Type(self.buf.clone()));
        }

        Ok(TokenKind::Ident(self.buf.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::{CapitalPolicy, Lexer};

    fn lex_one(source: &str) -> Result<TokenKind, LexError> {
        let mut lexer = Lexer::new(source.as_bytes());
        lexer
            .next_token()
            .map(|t| t.expect("expected a token").kind)
    }

    fn lex_one_with(source: &str, policy: CapitalPolicy) -> Result<TokenKind, LexError> {
        let mut lexer = Lexer::with_policy(source.as_bytes(), policy);
        lexer
            .next_token()
            .map(|t| t.expect("expected a token").kind)
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_one("3").unwrap(), TokenKind::Integer("3".to_string()));
        assert_eq!(
            lex_one("2147483647").unwrap(),
            TokenKind::Integer("2147483647".to_string())
        );
    }

    #[test]
    fn test_integer_keeps_lexeme_verbatim() {
        assert_eq!(lex_one("007").unwrap(), TokenKind::Integer("007".to_string()));
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = lex_one("2147483648").unwrap_err();
        assert!(matches!(err, LexError::BadInteger { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_digit_led_name_is_a_bad_integer() {
        // "12abc" is one name; the digit lead forces the integer path.
        let err = lex_one("12abc").unwrap_err();
        match err {
            LexError::BadInteger { text, .. } => assert_eq!(text, "12abc"),
            other => panic!("expected BadInteger, got {:?}", other),
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(lex_one("x").unwrap(), TokenKind::Ident("x".to_string()));
        assert_eq!(
            lex_one("self_type7").unwrap(),
            TokenKind::Ident("self_type7".to_string())
        );
    }

    #[test]
    fn test_type_identifier() {
        assert_eq!(lex_one("Foo").unwrap(), TokenKind::Type("Foo".to_string()));
        assert_eq!(lex_one("IO").unwrap(), TokenKind::Type("IO".to_string()));
    }

    #[test]
    fn test_keyword_lowercase() {
        assert_eq!(lex_one("class").unwrap(), TokenKind::Class);
        assert_eq!(lex_one("esac").unwrap(), TokenKind::Esac);
        assert_eq!(lex_one("true").unwrap(), TokenKind::True);
    }

    #[test]
    fn test_keyword_mixed_case_lowercase_lead() {
        // Recognition is case-insensitive; a lowercase first letter passes
        // either policy.
        assert_eq!(lex_one("cLaSS").unwrap(), TokenKind::Class);
        assert_eq!(lex_one("wHILE").unwrap(), TokenKind::While);
    }

    #[test]
    fn test_all_keywords_policy_rejects_uppercase_lead() {
        // Default policy: every keyword is rejected on an uppercase first
        // letter, not just the boolean literals.
        for source in ["Class", "While", "True", "False", "INHERITS"] {
            let err = lex_one(source).unwrap_err();
            assert!(
                matches!(err, LexError::CapitalizedKeyword { .. }),
                "{} should be rejected",
                source
            );
            assert_eq!(err.exit_code(), 6);
        }
    }

    #[test]
    fn test_boolean_only_policy_restricts_booleans() {
        for source in ["True", "False"] {
            let err = lex_one_with(source, CapitalPolicy::BooleanOnly).unwrap_err();
            assert!(matches!(err, LexError::CapitalizedKeyword { .. }));
        }
    }

    #[test]
    fn test_boolean_only_policy_passes_other_keywords() {
        assert_eq!(
            lex_one_with("Class", CapitalPolicy::BooleanOnly).unwrap(),
            TokenKind::Class
        );
        assert_eq!(
            lex_one_with("WHILE", CapitalPolicy::BooleanOnly).unwrap(),
            TokenKind::While
        );
    }

    #[test]
    fn test_uppercase_non_keyword_is_a_type() {
        // "Classes" is not a keyword, so no policy applies.
        assert_eq!(
            lex_one("Classes").unwrap(),
            TokenKind::Type("Classes".to_string())
        );
    }

    #[test]
    fn test_name_at_max_length_is_accepted() {
        let source = "a".repeat(crate::MAX_NAME_LEN);
        assert_eq!(
            lex_one(&source).unwrap(),
            TokenKind::Ident(source.clone())
        );
    }

    #[test]
    fn test_name_too_long() {
        let source = "a".repeat(crate::MAX_NAME_LEN + 1);
        let err = lex_one(&source).unwrap_err();
        assert!(matches!(err, LexError::NameTooLong { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_name_stops_at_non_name_byte() {
        let mut lexer = Lexer::new(&b"foo.bar"[..]);
        assert_eq!(
            lexer.next_token().unwrap().unwrap().kind,
            TokenKind::Ident("foo".to_string())
        );
        assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Dot);
        assert_eq!(
            lexer.next_token().unwrap().unwrap().kind,
            TokenKind::Ident("bar".to_string())
        );
    }
}
