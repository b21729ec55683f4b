use crate::codes;

pub enum DiagnosticKind {
    // Lexer
    InvalidCharacter(char),
    UnterminatedNumeral,
    EmptyNumeral,
    BadNumeralDigit(char),
    NumeralOverflow,
    UnmatchedParen,
    UnclosedParen(usize),

    // Parser
    UnexpectedEof,
    TrailingInput,

    // Custom
    Raw(String),
}

impl DiagnosticKind {
    pub fn code(&self) -> Option<&'static str> {
        match self {
            DiagnosticKind::InvalidCharacter(_) => Some(codes::INVALID_CHARACTER),
            DiagnosticKind::UnterminatedNumeral
            | DiagnosticKind::EmptyNumeral
            | DiagnosticKind::BadNumeralDigit(_) => Some(codes::BAD_NUMERAL),
            DiagnosticKind::NumeralOverflow => Some(codes::NUMERAL_OVERFLOW),
            DiagnosticKind::UnmatchedParen | DiagnosticKind::UnclosedParen(_) => {
                Some(codes::UNMATCHED_PAREN)
            }
            DiagnosticKind::UnexpectedEof => Some(codes::UNEXPECTED_EOF),
            DiagnosticKind::TrailingInput => Some(codes::TRAILING_INPUT),
            DiagnosticKind::Raw(_) => None,
        }
    }
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    pub fn format(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::InvalidCharacter(c) => format!("Invalid character {:?}", c),
            DiagnosticKind::UnterminatedNumeral => "Unterminated numeral; expected ']'".into(),
            DiagnosticKind::EmptyNumeral => "Numeral has no digits".into(),
            DiagnosticKind::BadNumeralDigit(c) => {
                format!("Unexpected character {:?} while parsing number", c)
            }
            DiagnosticKind::NumeralOverflow => "Numeral does not fit in 32 bits".into(),
            DiagnosticKind::UnmatchedParen => "Unmatched ')'".into(),
            DiagnosticKind::UnclosedParen(n) => {
                if *n == 1 {
                    "Unclosed '('".into()
                } else {
                    format!("{} unclosed '('", n)
                }
            }
            DiagnosticKind::UnexpectedEof => "Unexpected end of input; expected a term".into(),
            DiagnosticKind::TrailingInput => "Input after the program term is ignored".into(),
            DiagnosticKind::Raw(s) => s.clone(),
        }
    }
}
