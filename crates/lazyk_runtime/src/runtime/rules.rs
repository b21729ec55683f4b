//! Reduction rules.
//!
//! `apply_rule(target, fun, arg)` reduces the application `target`, whose
//! function position has already reduced to `fun`. New shapes overwrite
//! `target` in place; rules whose result already exists return that cell and
//! leave `target` alone. All cells a rule needs are allocated before any of
//! them is tagged.

use lazyk_core::{Cell, CellRef, Rule};

use crate::{Fault, Runtime};

impl Runtime {
    pub(crate) fn apply_rule(
        &mut self,
        target: CellRef,
        fun: CellRef,
        arg: CellRef,
    ) -> Result<CellRef, Fault> {
        self.reductions += 1;
        let cell = self.heap.get(fun);
        log::trace!("reduce {:?} applied to {}", cell.tag(), arg.0);
        match cell {
            Cell::Prim(rule, captured) => self.apply_prim(target, fun, rule, captured, arg),
            Cell::S2(x, y) => {
                let [xz, yz] = self.alloc_n()?;
                self.heap.set(xz, Cell::Apply(x, arg));
                self.heap.set(yz, Cell::Apply(y, arg));
                self.heap.set(target, Cell::Apply(xz, yz));
                Ok(target)
            }
            Cell::Cons(x, y) => {
                let [fx] = self.alloc_n()?;
                self.heap.set(fx, Cell::Apply(arg, x));
                self.heap.set(target, Cell::Apply(fx, y));
                Ok(target)
            }
            Cell::Num(0) => {
                self.heap.set(target, Cell::Num(1));
                Ok(target)
            }
            Cell::Num(1) => Ok(arg),
            Cell::Num(_) => {
                self.heap.set(target, Cell::NumIter(fun, arg));
                Ok(target)
            }
            Cell::NumIter(count, f) => self.apply_numiter(target, count, f, arg),
            Cell::Apply(..) | Cell::Free { .. } | Cell::Pending => Err(Fault::NotApplicable {
                cell: fun.0,
                tag: cell.tag().name(),
            }),
        }
    }

    fn apply_prim(
        &mut self,
        target: CellRef,
        fun: CellRef,
        rule: Rule,
        captured: Option<CellRef>,
        arg: CellRef,
    ) -> Result<CellRef, Fault> {
        let captured = || {
            captured.ok_or(Fault::NotApplicable {
                cell: fun.0,
                tag: rule.name(),
            })
        };
        let next = match rule {
            Rule::K => Cell::Prim(Rule::K1, Some(arg)),
            Rule::K1 => return captured(),
            Rule::S => Cell::Prim(Rule::S1, Some(arg)),
            Rule::S1 => Cell::S2(captured()?, arg),
            Rule::C => Cell::Prim(Rule::C1, Some(arg)),
            Rule::C1 => Cell::Cons(captured()?, arg),
            Rule::KI => Cell::Num(1),
            Rule::Inc => {
                let value = self.whnf(arg)?;
                match self.heap.get(value) {
                    Cell::Num(n) => {
                        let next = n.checked_add(1).ok_or(Fault::NumeralOverflow)?;
                        Cell::Num(next)
                    }
                    other => {
                        return Err(Fault::IncOnNonNumber {
                            tag: other.tag().name(),
                        });
                    }
                }
            }
            Rule::Read => {
                let byte = self.read_input()?;
                let [num, read, tail] = self.alloc_n()?;
                self.heap.set(num, Cell::Num(byte));
                self.heap.set(read, Cell::Prim(Rule::Read, None));
                self.heap.set(tail, Cell::Apply(read, arg));
                Cell::Cons(num, tail)
            }
        };
        self.heap.set(target, next);
        Ok(target)
    }

    /// `NUMITER(count, f)` applied to `x`: `f` applied `count` times.
    fn apply_numiter(
        &mut self,
        target: CellRef,
        count: CellRef,
        f: CellRef,
        x: CellRef,
    ) -> Result<CellRef, Fault> {
        let Cell::Num(n) = self.heap.get(count) else {
            return Err(Fault::NumIterWithoutNum);
        };
        if n == 0 {
            return Ok(x);
        }
        let (fun, start) = (self.heap.get(f), self.heap.get(x));
        if let (Cell::Prim(Rule::Inc, _), Cell::Num(start)) = (fun, start) {
            let sum = start.checked_add(n).ok_or(Fault::NumeralOverflow)?;
            self.heap.set(target, Cell::Num(sum));
            return Ok(target);
        }
        if n == 1 {
            self.heap.set(target, Cell::Apply(f, x));
            return Ok(target);
        }
        let [rest, iter, inner] = self.alloc_n()?;
        self.heap.set(rest, Cell::Num(n - 1));
        self.heap.set(iter, Cell::NumIter(rest, f));
        self.heap.set(inner, Cell::Apply(iter, x));
        self.heap.set(target, Cell::Apply(f, inner));
        Ok(target)
    }

    /// Next input byte, 256 at end of input. Pending output is flushed first
    /// so interactive programs show their prompt before blocking.
    fn read_input(&mut self) -> Result<u32, Fault> {
        self.caps.output.flush()?;
        let byte = self.caps.input.next_byte()?;
        if byte.is_some() {
            self.bytes_read += 1;
        }
        Ok(byte.map_or(256, u32::from))
    }
}
