//! Parser.
//!
//! Prefix application syntax: `` `fa `` applies `f` to `a`. Terms nest
//! arbitrarily deep, so the parser keeps its own frame stack instead of
//! recursing.
use bumpalo::collections::Vec as BumpVec;
use lazyk_ir::{Combinator, Node, Program, TermId};
use lazyk_syntax::{Diagnostic, DiagnosticKind, Span, Token, TokenKind, parse_numeral};

use crate::optimize::match_numeral;

/// Parse result. `program.root()` is `None` when the input held no complete
/// term.
pub struct ParseResult {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

enum Atom {
    Term(TermId),
    /// An application marker; its two terms follow.
    Open,
    Skip,
}

/// An application whose function or argument is still being parsed.
struct Frame {
    start: u32,
    fun: Option<TermId>,
}

pub struct Parser<'a, 'b> {
    pub input: &'a str,
    pub tokens: &'a [Token],
    pub i: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub optimize: bool,
    frames: BumpVec<'b, Frame>,
    program: Program,
}

impl<'a, 'b> Parser<'a, 'b> {
    pub fn new(input: &'a str, tokens: &'a [Token], bump: &'b bumpalo::Bump) -> Self {
        Self {
            input,
            tokens,
            i: 0,
            diagnostics: Vec::new(),
            optimize: false,
            frames: BumpVec::with_capacity_in(64, bump),
            program: Program::new(),
        }
    }

    /// Replace known Church-numeral encodings with literals while parsing.
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn parse(mut self) -> ParseResult {
        if let Some(root) = self.parse_term() {
            self.program.set_root(root);
            self.skip_close_parens();
            let tok = self.cur();
            if tok.kind != TokenKind::Eof {
                let end = self
                    .tokens
                    .last()
                    .map_or(tok.span.end.0, |t| t.span.end.0);
                self.diagnostics.push(Diagnostic::warning_kind(
                    DiagnosticKind::TrailingInput,
                    Some(Span::new(tok.span.start.0, end)),
                ));
            }
        }
        ParseResult {
            program: self.program,
            diagnostics: self.diagnostics,
        }
    }

    fn parse_term(&mut self) -> Option<TermId> {
        loop {
            let mut term = match self.parse_atom()? {
                Atom::Term(term) => term,
                Atom::Open | Atom::Skip => continue,
            };
            loop {
                let Some(frame) = self.frames.last_mut() else {
                    return Some(term);
                };
                match frame.fun {
                    None => {
                        frame.fun = Some(term);
                        break;
                    }
                    Some(fun) => {
                        let start = frame.start;
                        self.frames.pop();
                        let end = self.program.span(term).end.0;
                        term = self
                            .program
                            .push(Node::Apply(fun, term), Span::new(start, end));
                    }
                }
            }
        }
    }

    /// Consume one token's worth of term. `None` means input ended.
    fn parse_atom(&mut self) -> Option<Atom> {
        if self.optimize {
            if let Some((value, last)) = match_numeral(self.tokens, self.i) {
                let span = self.tokens[self.i].span.merge(self.tokens[last].span);
                self.i = last + 1;
                return Some(Atom::Term(self.program.push(Node::Num(value), span)));
            }
        }

        let tok = self.cur();
        let node = match tok.kind.canonical() {
            TokenKind::Eof => {
                let mut diag =
                    Diagnostic::error_kind(DiagnosticKind::UnexpectedEof, Some(tok.span));
                if !self.frames.is_empty() {
                    diag = diag.with_help(format!(
                        "{} application(s) still need a term",
                        self.frames.len()
                    ));
                }
                self.diagnostics.push(diag);
                return None;
            }
            TokenKind::RParen => {
                self.i += 1;
                return Some(Atom::Skip);
            }
            TokenKind::Backtick | TokenKind::LParen => {
                self.i += 1;
                self.frames.push(Frame {
                    start: tok.span.start.0,
                    fun: None,
                });
                return Some(Atom::Open);
            }
            TokenKind::K => Node::Comb(Combinator::K),
            TokenKind::S => Node::Comb(Combinator::S),
            TokenKind::C => Node::Comb(Combinator::C),
            TokenKind::Inc => Node::Comb(Combinator::Inc),
            TokenKind::I => Node::Num(1),
            // Malformed numerals were reported by the lexer.
            TokenKind::Num => Node::Num(parse_numeral(self.text(tok.span)).unwrap_or(0)),
        };
        self.i += 1;
        Some(Atom::Term(self.program.push(node, tok.span)))
    }

    fn skip_close_parens(&mut self) {
        while self.cur().kind == TokenKind::RParen {
            self.i += 1;
        }
    }

    fn cur(&self) -> Token {
        self.tokens.get(self.i).copied().unwrap_or(Token {
            kind: TokenKind::Eof,
            span: Span::point(self.input.len() as u32),
        })
    }

    fn text(&self, span: Span) -> &'a str {
        let end = (span.end.0 as usize).min(self.input.len());
        let start = (span.start.0 as usize).min(end);
        &self.input[start..end]
    }
}
