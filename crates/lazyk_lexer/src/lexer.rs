//! Lexer implementation.
//!
//! Single linear pass over normalized text. Whitespace and `#` comments are
//! dropped, numerals become one token, and parenthesis balance is tracked
//! only to warn: the parser treats `(` as an application and skips `)`.
use crate::combinators::COMBINATORS;
use lazyk_syntax::{
    Diagnostic, DiagnosticKind, NumeralError, Span, Token, TokenKind, parse_numeral,
};

/// Lexing result.
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    i: usize,
    diagnostics: Vec<Diagnostic>,
    tokens: Vec<Token>,
    paren_depth: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            i: 0,
            diagnostics: Vec::new(),
            tokens: Vec::new(),
            paren_depth: 0,
        }
    }

    /// Run the lexer and return tokens + diagnostics.
    pub fn lex(mut self) -> LexResult {
        let hint = (self.bytes.len() / 2).max(16);
        self.tokens.reserve(hint);
        while let Some(c) = self.peek_char() {
            let start = self.i;
            match c {
                ' ' | '\n' | '\t' | '\r' => self.i += 1,
                '#' => {
                    while self.i < self.bytes.len() && self.bytes[self.i] != b'\n' {
                        self.i += 1;
                    }
                }
                '(' => {
                    self.i += 1;
                    self.paren_depth += 1;
                    self.push(TokenKind::LParen, start);
                }
                ')' => {
                    self.i += 1;
                    if self.paren_depth == 0 {
                        self.diagnostics.push(Diagnostic::warning_kind(
                            DiagnosticKind::UnmatchedParen,
                            Some(Span::new(start as u32, self.i as u32)),
                        ));
                    } else {
                        self.paren_depth -= 1;
                    }
                    self.push(TokenKind::RParen, start);
                }
                '[' => self.lex_bracket_numeral(),
                '0'..='9' => self.lex_bare_numeral(),
                other => {
                    self.i += other.len_utf8();
                    match COMBINATORS.get(&other) {
                        Some(&kind) => self.push(kind, start),
                        None => self.diagnostics.push(Diagnostic::error_kind(
                            DiagnosticKind::InvalidCharacter(other),
                            Some(Span::new(start as u32, self.i as u32)),
                        )),
                    }
                }
            }
        }

        let end = self.i as u32;
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::point(end),
        });
        if self.paren_depth > 0 {
            self.diagnostics.push(Diagnostic::warning_kind(
                DiagnosticKind::UnclosedParen(self.paren_depth),
                Some(Span::point(end)),
            ));
        }

        LexResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn lex_bracket_numeral(&mut self) {
        let start = self.i;
        self.i += 1;
        while self.i < self.bytes.len()
            && (self.bytes[self.i].is_ascii_alphanumeric() || self.bytes[self.i] == b'$')
        {
            self.i += 1;
        }
        if self.bytes.get(self.i) == Some(&b']') {
            self.i += 1;
            self.finish_numeral(start);
        } else {
            let help = match self.peek_char() {
                Some(ch) => format!("found {:?}", ch),
                None => "found end of input".to_string(),
            };
            self.diagnostics.push(
                Diagnostic::error_kind(
                    DiagnosticKind::UnterminatedNumeral,
                    Some(Span::new(start as u32, self.i as u32)),
                )
                .with_help(help),
            );
            self.push(TokenKind::Num, start);
        }
    }

    fn lex_bare_numeral(&mut self) {
        let start = self.i;
        while self.i < self.bytes.len() && self.bytes[self.i].is_ascii_digit() {
            self.i += 1;
        }
        self.finish_numeral(start);
    }

    fn finish_numeral(&mut self, start: usize) {
        let kind = match parse_numeral(&self.input[start..self.i]) {
            Ok(_) => None,
            Err(NumeralError::Empty) => Some(DiagnosticKind::EmptyNumeral),
            Err(NumeralError::BadDigit(ch)) => Some(DiagnosticKind::BadNumeralDigit(ch)),
            Err(NumeralError::Overflow) => Some(DiagnosticKind::NumeralOverflow),
        };
        if let Some(kind) = kind {
            self.diagnostics.push(Diagnostic::error_kind(
                kind,
                Some(Span::new(start as u32, self.i as u32)),
            ));
        }
        self.push(TokenKind::Num, start);
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start as u32, self.i as u32),
        });
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.i..].chars().next()
    }
}
