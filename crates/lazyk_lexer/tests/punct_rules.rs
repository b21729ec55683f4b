use lazyk_lexer::Lexer;
use lazyk_syntax::{Severity, TokenKind};

#[test]
fn invalid_character_is_error() {
    let lex = Lexer::new("`k x").lex();
    assert!(
        lex.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error && d.message.contains("Invalid character")),
        "diagnostics={:?}",
        lex.diagnostics
    );
}

#[test]
fn non_ascii_is_error() {
    let lex = Lexer::new("`kλ").lex();
    assert!(lex.has_errors());
    let span = lex.diagnostics[0].span.unwrap();
    assert_eq!(span.len(), 'λ'.len_utf8() as u32);
}

#[test]
fn parens_are_tokens() {
    let lex = Lexer::new("((sk)k)").lex();
    assert!(lex.diagnostics.is_empty());
    assert_eq!(
        lex.tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::LParen))
            .count(),
        2
    );
}

#[test]
fn unmatched_close_paren_is_warning() {
    let lex = Lexer::new("`kk)").lex();
    assert_eq!(lex.diagnostics.len(), 1);
    assert_eq!(lex.diagnostics[0].severity, Severity::Warning);
    assert!(!lex.has_errors());
}

#[test]
fn unclosed_paren_is_warning() {
    let lex = Lexer::new("((kk").lex();
    assert!(!lex.has_errors());
    assert!(
        lex.diagnostics
            .iter()
            .any(|d| d.message.contains("unclosed"))
    );
}

#[test]
fn unterminated_numeral_is_error() {
    let lex = Lexer::new("[12 k").lex();
    assert!(lex.has_errors());
    assert!(lex.diagnostics[0].message.contains("Unterminated numeral"));
}

#[test]
fn numeral_digit_errors() {
    for (src, needle) in [
        ("[]", "no digits"),
        ("[12z]", "while parsing number"),
        ("[$fg]", "while parsing number"),
        ("[4294967296]", "32 bits"),
    ] {
        let lex = Lexer::new(src).lex();
        assert!(
            lex.diagnostics.iter().any(|d| d.message.contains(needle)),
            "{src}: {:?}",
            lex.diagnostics
        );
    }
}

#[test]
fn largest_numeral_is_accepted() {
    let lex = Lexer::new("[4294967295] [$ffffffff]").lex();
    assert!(lex.diagnostics.is_empty(), "{:?}", lex.diagnostics);
}
