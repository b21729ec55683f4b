//! Parsed program to heap graph.

use lazyk_core::{Cell, CellRef, Rule};
use lazyk_ir::{Combinator, Node, Program};

use crate::{Fault, Runtime};

impl Runtime {
    /// Build `program` in the store, append the lazy input list and make the
    /// result the program root.
    ///
    /// The free list is topped up first, so no collection can run while the
    /// partially built graph is unrooted.
    pub fn load(&mut self, program: &Program) -> Result<CellRef, Fault> {
        let root = program.root().ok_or(Fault::NoProgram)?;
        let needed = program.stats().cells_needed();
        if self.heap.free_count() < needed {
            self.collect()?;
        }
        if self.heap.free_count() < needed {
            return Err(Fault::HeapExhausted {
                capacity: self.heap.capacity(),
            });
        }

        let k = self.alloc_cell(Cell::Prim(Rule::K, None))?;
        let s = self.alloc_cell(Cell::Prim(Rule::S, None))?;
        let c = self.alloc_cell(Cell::Prim(Rule::C, None))?;
        let inc = self.alloc_cell(Cell::Prim(Rule::Inc, None))?;
        let i = self.alloc_cell(Cell::Num(1))?;

        let mut cells: Vec<CellRef> = Vec::with_capacity(program.len());
        for node in program.nodes() {
            let cell = match *node {
                Node::Apply(f, a) => {
                    self.alloc_cell(Cell::Apply(cells[f.index()], cells[a.index()]))?
                }
                Node::Comb(Combinator::K) => k,
                Node::Comb(Combinator::S) => s,
                Node::Comb(Combinator::C) => c,
                Node::Comb(Combinator::Inc) => inc,
                Node::Num(1) => i,
                Node::Num(n) => self.alloc_cell(Cell::Num(n))?,
            };
            cells.push(cell);
        }

        let zero = self.alloc_cell(Cell::Num(0))?;
        let read = self.alloc_cell(Cell::Prim(Rule::Read, None))?;
        let input = self.alloc_cell(Cell::Apply(read, zero))?;
        let top = self.alloc_cell(Cell::Apply(cells[root.index()], input))?;
        self.program_root = Some(top);
        log::debug!(
            "loaded {} terms into {} cells ({} free)",
            program.len(),
            self.heap.live_count(),
            self.heap.free_count()
        );
        Ok(top)
    }
}
