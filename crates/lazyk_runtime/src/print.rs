//! Debug rendering of heap graphs in source syntax.

use lazyk_core::{Cell, CellRef, Rule};
use smallvec::SmallVec;

use crate::Runtime;

enum Piece {
    Cell(CellRef),
    Text(&'static str),
}

impl Runtime {
    /// Render the graph under `root`, visiting at most `budget` cells.
    /// Shared subgraphs print once per path.
    pub fn render(&self, root: CellRef, budget: usize) -> String {
        let mut out = String::new();
        let mut left = budget;
        let mut stack: SmallVec<[Piece; 32]> = SmallVec::new();
        stack.push(Piece::Cell(root));
        while let Some(piece) = stack.pop() {
            let r = match piece {
                Piece::Text(s) => {
                    out.push_str(s);
                    continue;
                }
                Piece::Cell(r) => r,
            };
            if left == 0 {
                out.push_str("...");
                break;
            }
            left -= 1;
            let (prefix, children) = match self.heap.get(r) {
                Cell::Apply(f, a) | Cell::NumIter(f, a) => ("`", [Some(f), Some(a)]),
                Cell::S2(x, y) => ("``s", [Some(x), Some(y)]),
                Cell::Cons(x, y) => ("``c", [Some(x), Some(y)]),
                Cell::Prim(rule, arg) => match rule {
                    Rule::K => ("k", [None, None]),
                    Rule::S => ("s", [None, None]),
                    Rule::C => ("c", [None, None]),
                    Rule::KI => ("`ki", [None, None]),
                    Rule::Inc => ("+", [None, None]),
                    Rule::Read => ("<read>", [None, None]),
                    Rule::K1 => ("`k", [arg, None]),
                    Rule::S1 => ("`s", [arg, None]),
                    Rule::C1 => ("`c", [arg, None]),
                },
                Cell::Num(1) => ("i", [None, None]),
                Cell::Num(n) => {
                    let mut buf = itoa::Buffer::new();
                    out.push('[');
                    out.push_str(buf.format(n));
                    out.push(']');
                    continue;
                }
                Cell::Free { .. } | Cell::Pending => ("?", [None, None]),
            };
            out.push_str(prefix);
            if let Cell::Prim(rule, None) = self.heap.get(r) {
                if rule.has_arg() {
                    stack.push(Piece::Text("?"));
                }
            }
            for child in children.into_iter().rev().flatten() {
                stack.push(Piece::Cell(child));
            }
        }
        out
    }
}
