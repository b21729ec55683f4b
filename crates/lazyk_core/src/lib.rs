//! Core types for the lazyk runtime.
//!
//! This crate contains the heap cell model that is independent of the
//! allocator and evaluator:
//! - `CellRef` - index of a cell in the store
//! - `Cell` - tagged cell contents
//! - `Rule` - built-in combinators and their partial applications

pub mod cell;
pub mod rule;

pub use cell::{Cell, CellRef, CellTag};
pub use rule::Rule;
