//! lazyk runtime: cell store, collector, reduction engine and program loop.

pub mod core;
pub mod errors;
pub mod image;
mod print;
mod runtime;
mod util;

pub use core::heap::{Heap, HeapStats};
pub use core::roots::RootStack;
pub use errors::Fault;
pub use image::{EntryTable, Image, ImageError, ImageLayout};
pub use lazyk_core::{Cell, CellRef, CellTag, Rule};
pub use runtime::{RunOutcome, Runtime, RuntimeConfig, RuntimeStats};
pub use util::{ByteSource, Capabilities, ReaderSource, SliceSource};
