use lazyk_lexer::{Lexer, normalize_source};
use lazyk_syntax::TokenKind;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn any_program_like() -> impl Strategy<Value = String> {
    let ascii =
        proptest::collection::vec(any::<char>().prop_filter("ascii", |c| c.is_ascii()), 0..40)
            .prop_map(|v| v.into_iter().collect::<String>());
    let unicode = proptest::collection::vec(
        any::<char>().prop_filter("non-ascii", |c| !c.is_ascii()),
        0..20,
    )
    .prop_map(|v| v.into_iter().collect::<String>());
    let sym = "``s`k``s``s`kski ( ) [ ] [$ [12 # c\r\n + i [4294967296] \0".to_string();
    (ascii, unicode, any::<bool>(), any::<bool>()).prop_map(move |(a, b, f1, f2)| {
        let mut s = String::new();
        if f1 {
            s.push_str(&sym);
        }
        s.push_str(&a);
        s.push_str(&b);
        if f2 {
            s.push_str(&sym);
        }
        s.chars().take(200).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16, max_shrink_iters: 200, .. ProptestConfig::default()
    })]
    #[ignore]
    #[test]
    fn lex_random_input_should_not_panic(s in any_program_like()) {
        let normalized = normalize_source(&s);
        let result = Lexer::new(&normalized.text).lex();
        assert!(matches!(result.tokens.last().map(|t| t.kind), Some(TokenKind::Eof)));
        for t in &result.tokens {
            assert!(t.span.end.0 as usize <= normalized.text.len());
        }
    }
}
