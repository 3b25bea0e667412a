use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_keyword_lookup() {
    assert_eq!(keyword("var"), Some(TokenKind::Var));
    assert_eq!(keyword("while"), Some(TokenKind::While));
    assert_eq!(keyword("nil"), Some(TokenKind::Nil));
    assert_eq!(keyword("variable"), None);
}

#[test]
fn test_keyword_lookup_is_case_sensitive() {
    assert_eq!(keyword("Print"), None);
    assert_eq!(keyword("TRUE"), None);
}

#[test]
fn test_every_keyword_round_trips_through_name() {
    let spellings = [
        "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
        "super", "this", "true", "var", "while",
    ];
    for spelling in spellings {
        let Some(kind) = keyword(spelling) else {
            panic!("`{spelling}` should be a keyword");
        };
        assert_eq!(kind.name(), spelling.to_ascii_uppercase());
    }
}

#[test]
fn test_token_display_without_literal() {
    let token = Token::simple(TokenKind::EqualEqual, "==", 1);
    assert_eq!(token.to_string(), "EQUAL_EQUAL == nil");
}

#[test]
fn test_token_display_with_literals() {
    let string = Token::new(
        TokenKind::String,
        "\"Ta Tb\"",
        Some(Literal::Str("Ta Tb".to_string())),
        1,
    );
    assert_eq!(string.to_string(), "STRING \"Ta Tb\" Ta Tb");

    let number = Token::new(TokenKind::Number, "12.5", Some(Literal::Number(12.5)), 1);
    assert_eq!(number.to_string(), "NUMBER 12.5 12.5");

    let whole = Token::new(TokenKind::Number, "7.0", Some(Literal::Number(7.0)), 1);
    assert_eq!(whole.to_string(), "NUMBER 7.0 7");
}

#[test]
fn test_eof_display_has_empty_lexeme() {
    let eof = Token::eof(3);
    assert!(eof.is_eof());
    assert_eq!(eof.line, 3);
    assert_eq!(eof.to_string(), "EOF  nil");
}
