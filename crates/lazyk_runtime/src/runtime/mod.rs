//! The interpreter instance and its operations.

mod config;
mod eval;
mod gc;
mod load;
mod program;
mod rules;

pub use config::{RunOutcome, RuntimeConfig};

use lazyk_core::{Cell, CellRef};

use crate::core::heap::{Heap, HeapStats};
use crate::core::roots::RootStack;
use crate::{Capabilities, Fault};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    pub heap: HeapStats,
    pub reductions: u64,
    pub peak_roots: usize,
    pub bytes_read: u64,
}

/// One interpreter: store, root stack, program root and I/O.
pub struct Runtime {
    pub(crate) heap: Heap,
    pub(crate) roots: RootStack,
    pub(crate) program_root: Option<CellRef>,
    pub(crate) config: RuntimeConfig,
    pub(crate) caps: Capabilities,
    pub(crate) reductions: u64,
    pub(crate) bytes_read: u64,
}

impl Runtime {
    /// Runtime wired to the process's stdin and stdout.
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_capabilities(config, Capabilities::default())
    }

    pub fn with_capabilities(config: RuntimeConfig, caps: Capabilities) -> Self {
        Self {
            heap: Heap::new(config.heap_cells),
            roots: RootStack::new(config.root_stack_size),
            program_root: None,
            config,
            caps,
            reductions: 0,
            bytes_read: 0,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn cell(&self, r: CellRef) -> Cell {
        self.heap.get(r)
    }

    pub fn program_root(&self) -> Option<CellRef> {
        self.program_root
    }

    pub fn set_program_root(&mut self, root: Option<CellRef>) {
        self.program_root = root;
    }

    pub fn root_depth(&self) -> usize {
        self.roots.len()
    }

    pub fn push_root(&mut self, r: CellRef) -> Result<(), Fault> {
        self.roots.push(r)
    }

    pub fn pop_root(&mut self) -> Result<CellRef, Fault> {
        self.roots.pop()
    }

    /// Run `f` with `refs` rooted. The root stack is restored to its prior
    /// depth on every exit path.
    pub fn rooted<T>(
        &mut self,
        refs: &[CellRef],
        f: impl FnOnce(&mut Self) -> Result<T, Fault>,
    ) -> Result<T, Fault> {
        let mark = self.roots.len();
        let mut result = Ok(());
        for &r in refs {
            result = self.roots.push(r);
            if result.is_err() {
                break;
            }
        }
        let out = match result {
            Ok(()) => f(self),
            Err(e) => Err(e),
        };
        self.roots.truncate(mark);
        out
    }

    pub fn stats(&self) -> RuntimeStats {
        RuntimeStats {
            heap: self.heap.stats(),
            reductions: self.reductions,
            peak_roots: self.roots.peak(),
            bytes_read: self.bytes_read,
        }
    }

    pub fn flush(&mut self) -> Result<(), Fault> {
        self.caps.output.flush()?;
        Ok(())
    }
}
