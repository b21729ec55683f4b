mod capabilities;

pub use capabilities::{ByteSource, Capabilities, ReaderSource, SliceSource};
