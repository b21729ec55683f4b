//! Allocation and collection.
//!
//! Collection runs only when the free list is empty (or on request). Roots
//! are the program root and every root-stack entry; `Pending` cells survive
//! on their own.

use lazyk_core::{Cell, CellRef, Rule};

use crate::{Fault, Runtime};

impl Runtime {
    /// Full mark-sweep cycle.
    pub fn collect(&mut self) -> Result<(), Fault> {
        let marked = self.heap.mark_all(
            self.program_root
                .into_iter()
                .chain(self.roots.as_slice().iter().copied()),
        )?;
        let report = self.heap.sweep(self.config.max_pending)?;
        log::debug!(
            "gc: marked={} live={} pending={} free={} reclaimed={} roots={}",
            marked,
            report.live,
            report.pending,
            report.free,
            report.reclaimed,
            self.roots.len()
        );
        Ok(())
    }

    /// Allocate one `Pending` cell, collecting once if the store is full.
    pub fn alloc(&mut self) -> Result<CellRef, Fault> {
        if let Some(r) = self.heap.pop_free() {
            return Ok(r);
        }
        self.collect()?;
        self.heap.pop_free().ok_or(Fault::HeapExhausted {
            capacity: self.heap.capacity(),
        })
    }

    /// Allocate `N` cells before tagging any of them, so each survives a
    /// collection triggered by the next.
    pub(crate) fn alloc_n<const N: usize>(&mut self) -> Result<[CellRef; N], Fault> {
        let mut out = [CellRef(0); N];
        for slot in &mut out {
            *slot = self.alloc()?;
        }
        Ok(out)
    }

    /// Allocate and tag. The result is unrooted.
    pub fn alloc_cell(&mut self, cell: Cell) -> Result<CellRef, Fault> {
        let r = self.alloc()?;
        self.heap.set(r, cell);
        Ok(r)
    }

    pub fn alloc_num(&mut self, n: u32) -> Result<CellRef, Fault> {
        self.alloc_cell(Cell::Num(n))
    }

    pub fn alloc_prim(&mut self, rule: Rule) -> Result<CellRef, Fault> {
        self.alloc_cell(Cell::Prim(rule, None))
    }

    /// `f` and `a` must already be reachable.
    pub fn alloc_apply(&mut self, f: CellRef, a: CellRef) -> Result<CellRef, Fault> {
        self.alloc_cell(Cell::Apply(f, a))
    }

    /// Retag a cell in place. Used by builders outside the rule set.
    pub fn set_cell(&mut self, r: CellRef, cell: Cell) {
        self.heap.set(r, cell);
    }
}
