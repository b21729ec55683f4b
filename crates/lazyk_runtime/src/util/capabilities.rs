//! Injectable program input and output.

use std::io::{self, BufWriter, Read, Write};

/// Source of program input bytes.
pub trait ByteSource {
    /// Next byte, or `None` at end of input. May block.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Reads one byte at a time from any reader.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// In-memory input.
pub struct SliceSource {
    data: Vec<u8>,
    pos: usize,
}

impl SliceSource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let b = self.data.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        Ok(b)
    }
}

pub struct Capabilities {
    pub input: Box<dyn ByteSource>,
    pub output: Box<dyn Write>,
}

impl Capabilities {
    pub fn new(input: impl ByteSource + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            input: Box::new(ReaderSource::new(io::stdin())),
            output: Box::new(BufWriter::new(io::stdout())),
        }
    }
}
