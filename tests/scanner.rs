#[cfg(test)]
mod scanner_tests {
    use emolang as emo;

    use emo::error::LangError;
    use emo::scanner::*;
    use emo::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenKind, &str)]) {
        let tokens = tokenize(source).expect("source should tokenize");

        assert_eq!(tokens.len(), expected.len(), "tokens: {:?}", tokens);

        for (actual, (expected_kind, expected_text)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.kind, *expected_kind);
            assert_eq!(actual.text, *expected_text);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "=+-()#;",
            &[
                (TokenKind::ASSIGN, "="),
                (TokenKind::PLUS, "+"),
                (TokenKind::MINUS, "-"),
                (TokenKind::LPAR, "("),
                (TokenKind::RPAR, ")"),
                (TokenKind::HASH, "#"),
                (TokenKind::SEMICOLON, ";"),
            ],
        );
    }

    #[test]
    fn test_scanner_02_assignment_statement() {
        assert_token_sequence(
            "cat = 5 + 9 + (4 - 6)#;",
            &[
                (TokenKind::VARIABLE, "cat"),
                (TokenKind::ASSIGN, "="),
                (TokenKind::NUMBER, "5"),
                (TokenKind::PLUS, "+"),
                (TokenKind::NUMBER, "9"),
                (TokenKind::PLUS, "+"),
                (TokenKind::LPAR, "("),
                (TokenKind::NUMBER, "4"),
                (TokenKind::MINUS, "-"),
                (TokenKind::NUMBER, "6"),
                (TokenKind::RPAR, ")"),
                (TokenKind::HASH, "#"),
                (TokenKind::SEMICOLON, ";"),
            ],
        );
    }

    #[test]
    fn test_scanner_03_keywords_strings_and_emoji() {
        assert_token_sequence(
            "ejkey cat 😺#; ejkey valentine \"i love you\"#; ejprint cat#;",
            &[
                (TokenKind::EJKEY, "ejkey"),
                (TokenKind::VARIABLE, "cat"),
                (TokenKind::EMOJI, "😺"),
                (TokenKind::HASH, "#"),
                (TokenKind::SEMICOLON, ";"),
                (TokenKind::EJKEY, "ejkey"),
                (TokenKind::VARIABLE, "valentine"),
                (TokenKind::STRING, "\"i love you\""),
                (TokenKind::HASH, "#"),
                (TokenKind::SEMICOLON, ";"),
                (TokenKind::EJPRINT, "ejprint"),
                (TokenKind::VARIABLE, "cat"),
                (TokenKind::HASH, "#"),
                (TokenKind::SEMICOLON, ";"),
            ],
        );
    }

    #[test]
    fn test_catalog_order_wins_over_longest_match() {
        // `print` is tried before VARIABLE, so it splits the identifier.
        assert_token_sequence(
            "printer",
            &[(TokenKind::PRINT, "print"), (TokenKind::VARIABLE, "er")],
        );
    }

    #[test]
    fn test_positions_and_lines() {
        let tokens = tokenize("x = 1#;\n  print x#;").unwrap();

        let print = tokens
            .iter()
            .find(|t| t.kind == TokenKind::PRINT)
            .unwrap();

        assert_eq!(print.position, 10);
        assert_eq!(print.line, 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn test_emoji_position_is_a_byte_offset() {
        let tokens = tokenize("ejkey a 🎃 b").unwrap();

        assert_eq!(tokens[2].kind, TokenKind::EMOJI);
        assert_eq!(tokens[3].position, 8 + '🎃'.len_utf8() + 1);
    }

    #[test]
    fn test_unexpected_character_is_fatal() {
        let err = tokenize("x = 1#; X = 2#;").unwrap_err();

        match err {
            LangError::Lex {
                position,
                line,
                found,
            } => {
                assert_eq!(position, 8);
                assert_eq!(line, 1);
                assert_eq!(found, 'X');
            }
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_iterator_stops_after_first_error() {
        let results: Vec<_> = Scanner::new("a $ b").collect();

        assert_eq!(results.len(), 2, "results: {:?}", results);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_unterminated_string_does_not_lex() {
        let err = tokenize("print \"open").unwrap_err();

        assert!(matches!(err, LangError::Lex { position: 6, found: '"', .. }));
    }

    #[test]
    fn test_bmp_symbol_is_not_an_emoji() {
        // U+2764 HEAVY BLACK HEART sits inside the BMP.
        assert!(tokenize("ejkey a \u{2764}").is_err());
    }

    #[test]
    fn test_uppercase_and_digits_are_not_identifiers() {
        assert_token_sequence(
            "ab12",
            &[(TokenKind::VARIABLE, "ab"), (TokenKind::NUMBER, "12")],
        );
    }

    #[test]
    fn test_empty_and_blank_sources() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("ejprint \"hi\"").unwrap();

        assert_eq!(tokens[0].to_string(), "EJPRINT ejprint");
        assert_eq!(tokens[1].to_string(), "STRING \"hi\"");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        let tokens = tokenize("\u{FEFF}print 1#;").unwrap();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::PRINT);
        assert_eq!(tokens[0].position, '\u{FEFF}'.len_utf8());
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        let err = tokenize("print\u{0085}1#;").unwrap_err();

        assert!(matches!(err, LangError::Lex { position: 5, found: '\u{0085}', .. }));
    }

    #[test]
    fn test_space_set() {
        for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{2028}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_space(c), "{:?} should be whitespace", c);
        }

        for c in ['\u{0085}', '\u{200B}', 'a', '#'] {
            assert!(!is_space(c), "{:?} should not be whitespace", c);
        }
    }
}
