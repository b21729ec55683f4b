//! Weak-head normal form by iterative spine walking.
//!
//! The spine nodes live on the root stack between `base` and the top, so
//! they stay reachable while rules allocate and the walk never recurses.
//! Reentrant calls (increment forcing its argument) stack their own spine
//! above the caller's.

use lazyk_core::{Cell, CellRef};

use crate::{Fault, Runtime};

impl Runtime {
    /// Reduce `node` to weak-head normal form. The returned cell is unrooted.
    pub fn whnf(&mut self, node: CellRef) -> Result<CellRef, Fault> {
        let base = self.roots.len();
        let result = self.walk_spine(node, base);
        self.roots.truncate(base);
        result
    }

    fn walk_spine(&mut self, mut cur: CellRef, base: usize) -> Result<CellRef, Fault> {
        loop {
            while let Cell::Apply(f, _) = self.heap.get(cur) {
                self.roots.push(cur)?;
                cur = f;
            }
            let Some(target) = self.roots.top().filter(|_| self.roots.len() > base) else {
                return Ok(cur);
            };
            if log::log_enabled!(log::Level::Trace) {
                log::trace!(
                    "spine depth={} {}",
                    self.roots.len() - base,
                    self.render(target, 64)
                );
            }
            let Cell::Apply(_, arg) = self.heap.get(target) else {
                return Err(Fault::NotApplicable {
                    cell: target.0,
                    tag: self.heap.get(target).tag().name(),
                });
            };
            let result = self.apply_rule(target, cur, arg)?;
            self.roots.pop()?;
            if self.roots.len() > base {
                if let Some(parent) = self.roots.top() {
                    if let Cell::Apply(_, parent_arg) = self.heap.get(parent) {
                        self.heap.set(parent, Cell::Apply(result, parent_arg));
                    }
                }
            }
            cur = result;
        }
    }
}
