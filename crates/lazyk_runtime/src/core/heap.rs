//! Fixed-capacity cell store with a free list and a mark bitset.

use lazyk_core::{Cell, CellRef};

use crate::Fault;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub allocations: u64,
    pub collections: u64,
    pub reclaimed: u64,
    pub peak_live: usize,
}

/// Result of one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub live: usize,
    pub pending: usize,
    pub free: usize,
    pub reclaimed: usize,
}

pub struct Heap {
    cells: Vec<Cell>,
    free_head: Option<CellRef>,
    free_count: usize,
    marks: Vec<u64>,
    pub(crate) stats: HeapStats,
}

impl Heap {
    /// A store of `capacity` cells, all on the free list in ascending order.
    pub fn new(capacity: usize) -> Self {
        let cells = (0..capacity)
            .map(|i| Cell::Free {
                next: (i + 1 < capacity).then(|| CellRef((i + 1) as u32)),
            })
            .collect();
        Self {
            cells,
            free_head: (capacity > 0).then_some(CellRef(0)),
            free_count: capacity,
            marks: vec![0; capacity.div_ceil(64)],
            stats: HeapStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn free_count(&self) -> usize {
        self.free_count
    }

    pub fn live_count(&self) -> usize {
        self.cells.len() - self.free_count
    }

    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    #[inline]
    pub fn get(&self, r: CellRef) -> Cell {
        self.cells[r.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: CellRef, cell: Cell) {
        self.cells[r.index()] = cell;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Pop the free list. The cell comes back `Pending`.
    pub(crate) fn pop_free(&mut self) -> Option<CellRef> {
        let r = self.free_head?;
        let Cell::Free { next } = self.cells[r.index()] else {
            return None;
        };
        self.free_head = next;
        self.free_count -= 1;
        self.cells[r.index()] = Cell::Pending;
        self.stats.allocations += 1;
        self.stats.peak_live = self.stats.peak_live.max(self.live_count());
        Some(r)
    }

    pub fn is_marked(&self, r: CellRef) -> bool {
        let idx = r.index();
        self.marks
            .get(idx >> 6)
            .is_some_and(|w| (w & (1 << (idx & 63))) != 0)
    }

    fn set_mark(&mut self, r: CellRef) -> bool {
        let idx = r.index();
        let w = &mut self.marks[idx >> 6];
        let mask = 1 << (idx & 63);
        if (*w & mask) != 0 {
            return false;
        }
        *w |= mask;
        true
    }

    /// Mark everything reachable from `roots` with an explicit work stack.
    pub(crate) fn mark_all(
        &mut self,
        roots: impl IntoIterator<Item = CellRef>,
    ) -> Result<usize, Fault> {
        let mut work: Vec<CellRef> = roots.into_iter().collect();
        let mut marked = 0;
        while let Some(r) = work.pop() {
            if !self.set_mark(r) {
                continue;
            }
            marked += 1;
            let cell = self.cells[r.index()];
            if cell.is_free() {
                self.marks.fill(0);
                return Err(Fault::ReachableFreeCell(r.0));
            }
            work.extend(cell.children().into_iter().flatten());
        }
        Ok(marked)
    }

    /// Rebuild the free list from unmarked cells and clear all marks.
    /// `Pending` cells are kept; more than `max_pending` of them is a fault.
    pub(crate) fn sweep(&mut self, max_pending: usize) -> Result<SweepReport, Fault> {
        let mut report = SweepReport::default();
        let mut head = None;
        for idx in (0..self.cells.len()).rev() {
            let r = CellRef(idx as u32);
            if self.is_marked(r) {
                report.live += 1;
                continue;
            }
            match self.cells[idx] {
                Cell::Pending => {
                    report.pending += 1;
                    continue;
                }
                Cell::Free { .. } => {}
                _ => report.reclaimed += 1,
            }
            self.cells[idx] = Cell::Free { next: head };
            head = Some(r);
            report.free += 1;
        }
        self.marks.fill(0);
        self.free_head = head;
        self.free_count = report.free;
        self.stats.collections += 1;
        self.stats.reclaimed += report.reclaimed as u64;
        if report.pending > max_pending {
            return Err(Fault::TooManyPending {
                count: report.pending,
                max: max_pending,
            });
        }
        Ok(report)
    }

    pub fn any_marked(&self) -> bool {
        self.marks.iter().any(|w| *w != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_heap_is_all_free() {
        let mut heap = Heap::new(3);
        assert_eq!(heap.free_count(), 3);
        assert_eq!(heap.pop_free(), Some(CellRef(0)));
        assert_eq!(heap.pop_free(), Some(CellRef(1)));
        assert_eq!(heap.pop_free(), Some(CellRef(2)));
        assert_eq!(heap.pop_free(), None);
        assert_eq!(heap.get(CellRef(1)), Cell::Pending);
    }

    #[test]
    fn sweep_keeps_marked_and_pending() {
        let mut heap = Heap::new(4);
        let a = heap.pop_free().unwrap();
        let b = heap.pop_free().unwrap();
        let _pending = heap.pop_free().unwrap();
        heap.set(a, Cell::Num(5));
        heap.set(b, Cell::Apply(a, a));
        heap.mark_all([b]).unwrap();
        let report = heap.sweep(8).unwrap();
        assert_eq!(report.live, 2);
        assert_eq!(report.pending, 1);
        assert_eq!(report.free, 1);
        assert!(!heap.any_marked());
    }

    #[test]
    fn marking_a_free_cell_is_a_fault() {
        let mut heap = Heap::new(2);
        assert!(matches!(
            heap.mark_all([CellRef(1)]),
            Err(Fault::ReachableFreeCell(1))
        ));
    }
}
