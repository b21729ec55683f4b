//! Parsed program representation shared by the parser, driver and runtime
//! loader.
mod display;
mod program;

pub use program::*;
