//! Packed memory image for the 32-bit embedded runtime.
//!
//! Word layout, little-endian:
//! - bits 0..3: cell tag (`CellTag` discriminant)
//! - bit 3: collector mark, always clear in an image
//! - pairs: bits 4..18 left reference, bits 18..32 right reference
//! - numerals: bits 4..32 value
//!
//! A reference is the cell's byte address divided by four; cell `i` lives at
//! `base + 4 + 4 * i`, after the word holding the root pointer at `base`.
//! The image ends with one byte that brings the byte sum to the checksum
//! target.

use ahash::RandomState;
use hashbrown::HashMap;
use lazyk_core::{Cell, CellRef, CellTag, Rule};
use thiserror::Error;

use crate::{Fault, Runtime};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("no entry point for primitive {0}")]
    UnknownEntryPoint(&'static str),
    #[error("cell {cell}: {field} value {value:#x} does not fit in {bits} bits")]
    PackOverflow {
        cell: u32,
        field: &'static str,
        value: u32,
        bits: u32,
    },
    #[error("entry point {addr:#x} for {rule} is not word aligned")]
    MisalignedEntryPoint { rule: &'static str, addr: u32 },
    #[error("cell {0} is still pending")]
    PendingCell(u32),
    #[error("runtime blob is {len} bytes but the heap starts at {base}")]
    RuntimeTooLarge { len: usize, base: u32 },
    #[error(transparent)]
    Fault(#[from] Fault),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageLayout {
    /// Address of the root pointer word; cells follow it.
    pub base: u32,
    pub ref_bits: u32,
    pub num_bits: u32,
    /// Required byte sum of the whole image, modulo 256.
    pub checksum_target: u8,
}

impl Default for ImageLayout {
    fn default() -> Self {
        Self {
            base: 8192,
            ref_bits: 14,
            num_bits: 28,
            checksum_target: 0x14,
        }
    }
}

impl ImageLayout {
    pub fn cell_address(&self, r: CellRef) -> u32 {
        self.base + 4 + 4 * r.0
    }

    /// Largest cell count whose references fit the reference field.
    pub fn max_cells(&self) -> usize {
        let max_ref = (1u64 << self.ref_bits) - 1;
        let first = u64::from(self.base + 4) / 4;
        max_ref.saturating_sub(first) as usize + 1
    }

    /// Split a word into (tag, left, right). Numerals read as `left | right << ref_bits`.
    pub fn unpack(&self, word: u32) -> (u8, u32, u32) {
        let mask = (1u32 << self.ref_bits) - 1;
        ((word & 0x7) as u8, (word >> 4) & mask, word >> (4 + self.ref_bits))
    }

    /// Numeral payload of a word.
    pub fn unpack_num(&self, word: u32) -> u32 {
        word >> 4
    }
}

/// Primitive entry-point addresses in the target runtime.
#[derive(Clone, Debug, Default)]
pub struct EntryTable {
    entries: HashMap<Rule, u32, RandomState>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rule: Rule, addr: u32) -> Option<u32> {
        self.entries.insert(rule, addr)
    }

    pub fn get(&self, rule: Rule) -> Option<u32> {
        self.entries.get(&rule).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rules with no entry.
    pub fn missing(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|r| !self.entries.contains_key(r))
            .collect()
    }
}

impl FromIterator<(Rule, u32)> for EntryTable {
    fn from_iter<I: IntoIterator<Item = (Rule, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub bytes: Vec<u8>,
    /// Cell words emitted, including free cells below the highest live one.
    pub cells: usize,
    /// Offset of the root pointer word within `bytes`.
    pub header_offset: usize,
}

impl Image {
    pub fn byte_sum(&self) -> u8 {
        self.bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
    }

    pub fn word(&self, index: usize) -> Option<u32> {
        let at = self.header_offset + 4 * index;
        let bytes = self.bytes.get(at..at + 4)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Word of cell `i`.
    pub fn cell_word(&self, i: usize) -> Option<u32> {
        if i >= self.cells {
            return None;
        }
        self.word(i + 1)
    }
}

struct Packer<'a> {
    layout: &'a ImageLayout,
    entries: &'a EntryTable,
}

impl Packer<'_> {
    fn field(
        &self,
        cell: u32,
        field: &'static str,
        value: u32,
        bits: u32,
    ) -> Result<u32, ImageError> {
        if u64::from(value) >= 1u64 << bits {
            return Err(ImageError::PackOverflow {
                cell,
                field,
                value,
                bits,
            });
        }
        Ok(value)
    }

    fn reference(
        &self,
        cell: u32,
        field: &'static str,
        r: Option<CellRef>,
    ) -> Result<u32, ImageError> {
        let value = r.map_or(0, |r| self.layout.cell_address(r) >> 2);
        self.field(cell, field, value, self.layout.ref_bits)
    }

    fn pair(&self, tag: CellTag, left: u32, right: u32) -> u32 {
        tag as u32 | left << 4 | right << (4 + self.layout.ref_bits)
    }

    fn pack(&self, idx: u32, cell: Cell) -> Result<u32, ImageError> {
        let refs = |tag, a: CellRef, b: CellRef| -> Result<u32, ImageError> {
            let left = self.reference(idx, "left", Some(a))?;
            let right = self.reference(idx, "right", Some(b))?;
            Ok(self.pair(tag, left, right))
        };
        match cell {
            Cell::Free { .. } => Ok(CellTag::Free as u32),
            Cell::Pending => Err(ImageError::PendingCell(idx)),
            Cell::Apply(a, b) => refs(CellTag::Apply, a, b),
            Cell::S2(a, b) => refs(CellTag::S2, a, b),
            Cell::Cons(a, b) => refs(CellTag::Cons, a, b),
            Cell::NumIter(a, b) => refs(CellTag::NumIter, a, b),
            Cell::Num(n) => {
                let n = self.field(idx, "numeral", n, self.layout.num_bits)?;
                Ok(CellTag::Num as u32 | n << 4)
            }
            Cell::Prim(rule, arg) => {
                let addr = self
                    .entries
                    .get(rule)
                    .ok_or(ImageError::UnknownEntryPoint(rule.name()))?;
                if addr % 4 != 0 {
                    return Err(ImageError::MisalignedEntryPoint {
                        rule: rule.name(),
                        addr,
                    });
                }
                let left = self.field(idx, "entry", addr >> 2, self.layout.ref_bits)?;
                let right = self.reference(idx, "argument", arg)?;
                Ok(self.pair(CellTag::Prim, left, right))
            }
        }
    }
}

impl Runtime {
    /// Collect, then serialize the live heap and program root.
    ///
    /// `runtime` is the target interpreter binary; it is placed first and
    /// padded with zeros up to the layout base.
    pub fn encode_image(
        &mut self,
        layout: &ImageLayout,
        entries: &EntryTable,
        runtime: Option<&[u8]>,
    ) -> Result<Image, ImageError> {
        let root = self.program_root.ok_or(Fault::NoProgram)?;
        self.collect()?;

        let cells = self
            .heap
            .cells()
            .iter()
            .rposition(|c| !c.is_free())
            .map_or(0, |last| last + 1);

        let mut bytes = Vec::with_capacity(layout.base as usize + 4 * (cells + 1) + 1);
        if let Some(blob) = runtime {
            if blob.len() > layout.base as usize {
                return Err(ImageError::RuntimeTooLarge {
                    len: blob.len(),
                    base: layout.base,
                });
            }
            bytes.extend_from_slice(blob);
            bytes.resize(layout.base as usize, 0);
        }
        let header_offset = bytes.len();
        bytes.extend_from_slice(&layout.cell_address(root).to_le_bytes());

        let packer = Packer { layout, entries };
        for (idx, cell) in self.heap.cells()[..cells].iter().enumerate() {
            let word = packer.pack(idx as u32, *cell)?;
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        let sum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        bytes.push(layout.checksum_target.wrapping_sub(sum));
        log::debug!("image: {} cells, {} bytes", cells, bytes.len());
        Ok(Image {
            bytes,
            cells,
            header_offset,
        })
    }
}
