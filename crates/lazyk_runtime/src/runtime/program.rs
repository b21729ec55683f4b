//! Whole-program driver: the output list is walked one element at a time.

use lazyk_core::{Cell, CellRef, Rule};

use crate::{Fault, RunOutcome, Runtime};

impl Runtime {
    /// Run the loaded program until it yields a value of 256 or more.
    pub fn run(&mut self) -> Result<RunOutcome, Fault> {
        let mut bytes_written = 0u64;
        let mut steps = 0u64;
        loop {
            if self.config.step_limit.is_some_and(|limit| steps >= limit) {
                self.flush()?;
                return Ok(RunOutcome {
                    exit_code: None,
                    bytes_written,
                });
            }
            let value = self.next_output()?;
            if value >= 256 {
                self.flush()?;
                log::debug!("exit {} after {} bytes", value - 256, bytes_written);
                return Ok(RunOutcome {
                    exit_code: Some(value - 256),
                    bytes_written,
                });
            }
            self.caps.output.write_all(&[value as u8])?;
            bytes_written += 1;
            steps += 1;
            self.advance()?;
        }
    }

    /// Reduce the program root and force its head to an integer.
    pub fn next_output(&mut self) -> Result<u32, Fault> {
        let root = self.program_root.ok_or(Fault::NoProgram)?;
        let root = self.whnf(root)?;
        self.program_root = Some(root);
        let head = self.select(root, Rule::K)?;
        self.int_value(head)
    }

    /// Replace the program root with its tail.
    pub fn advance(&mut self) -> Result<(), Fault> {
        let root = self.program_root.ok_or(Fault::NoProgram)?;
        self.program_root = Some(self.select(root, Rule::KI)?);
        Ok(())
    }

    /// `list` applied to a fresh selector primitive, unreduced. `list` must be
    /// reachable.
    pub fn select(&mut self, list: CellRef, selector: Rule) -> Result<CellRef, Fault> {
        let [app, sel] = self.alloc_n()?;
        self.heap.set(sel, Cell::Prim(selector, None));
        self.heap.set(app, Cell::Apply(list, sel));
        Ok(app)
    }

    /// Evaluate `((x +) 0)` and return the numeral.
    pub fn int_value(&mut self, x: CellRef) -> Result<u32, Fault> {
        self.rooted(&[x], |rt| {
            let [outer, inner, inc, zero] = rt.alloc_n()?;
            rt.heap.set(zero, Cell::Num(0));
            rt.heap.set(inc, Cell::Prim(Rule::Inc, None));
            rt.heap.set(inner, Cell::Apply(x, inc));
            rt.heap.set(outer, Cell::Apply(inner, zero));
            let value = rt.whnf(outer)?;
            match rt.heap.get(value) {
                Cell::Num(n) => Ok(n),
                other => Err(Fault::NotAnInteger {
                    tag: other.tag().name(),
                }),
            }
        })
    }
}
