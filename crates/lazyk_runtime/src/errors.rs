//! Fatal runtime faults.
//!
//! Every fault ends the program. They are propagated with `?` so the root
//! stack unwinds on the way out and the caller decides how to report.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Fault {
    #[error("heap exhausted: all {capacity} cells are live")]
    HeapExhausted { capacity: usize },
    #[error("root stack overflow (limit {limit})")]
    RootStackOverflow { limit: usize },
    #[error("root stack underflow")]
    RootStackUnderflow,
    #[error("too many pending cells ({count} > {max})")]
    TooManyPending { count: usize, max: usize },
    #[error("cell {cell} ({tag}) cannot be applied")]
    NotApplicable { cell: u32, tag: &'static str },
    #[error("increment applied to a non-number ({tag})")]
    IncOnNonNumber { tag: &'static str },
    #[error("numeral iterator has no numeral count")]
    NumIterWithoutNum,
    #[error("output element evaluated to a non-integer ({tag})")]
    NotAnInteger { tag: &'static str },
    #[error("numeral overflow")]
    NumeralOverflow,
    #[error("reachable free cell {0}")]
    ReachableFreeCell(u32),
    #[error("no program loaded")]
    NoProgram,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
