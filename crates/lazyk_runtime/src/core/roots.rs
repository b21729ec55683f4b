//! Bounded stack of cell references that the collector treats as live.

use lazyk_core::CellRef;

use crate::Fault;

pub struct RootStack {
    slots: Vec<CellRef>,
    limit: usize,
    peak: usize,
}

impl RootStack {
    pub fn new(limit: usize) -> Self {
        Self {
            slots: Vec::with_capacity(limit.min(4096)),
            limit,
            peak: 0,
        }
    }

    pub fn push(&mut self, r: CellRef) -> Result<(), Fault> {
        if self.slots.len() >= self.limit {
            return Err(Fault::RootStackOverflow { limit: self.limit });
        }
        self.slots.push(r);
        self.peak = self.peak.max(self.slots.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Result<CellRef, Fault> {
        self.slots.pop().ok_or(Fault::RootStackUnderflow)
    }

    pub fn top(&self) -> Option<CellRef> {
        self.slots.last().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Drop everything above `mark`.
    pub fn truncate(&mut self, mark: usize) {
        self.slots.truncate(mark);
    }

    pub fn as_slice(&self) -> &[CellRef] {
        &self.slots
    }
}
