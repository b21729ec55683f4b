//! Heap cell representation.

use crate::Rule;

/// Index of a cell in the store. References never own their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef(pub u32);

impl CellRef {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One heap slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// On the free list; `next` is the following free cell.
    Free { next: Option<CellRef> },
    /// Allocated but not yet tagged. Always survives collection.
    Pending,
    /// Unevaluated application of the first cell to the second.
    Apply(CellRef, CellRef),
    /// `S x y` waiting for its third argument.
    S2(CellRef, CellRef),
    /// Pair; applying it to a selector `f` gives `f x y`.
    Cons(CellRef, CellRef),
    /// Numeral. `Num(1)` is also the identity function.
    Num(u32),
    /// Deferred `f` applied `n` times. The first field refers to a `Num` cell.
    NumIter(CellRef, CellRef),
    /// Built-in combinator with its captured argument, if any.
    Prim(Rule, Option<CellRef>),
}

/// Cell shape without payload. Discriminants are the on-image tag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellTag {
    Free = 0,
    Apply = 1,
    S2 = 2,
    Cons = 3,
    NumIter = 4,
    Prim = 5,
    Num = 6,
    Pending = 7,
}

impl CellTag {
    pub fn name(self) -> &'static str {
        match self {
            CellTag::Free => "free",
            CellTag::Apply => "apply",
            CellTag::S2 => "s2",
            CellTag::Cons => "cons",
            CellTag::NumIter => "numiter",
            CellTag::Prim => "prim",
            CellTag::Num => "num",
            CellTag::Pending => "pending",
        }
    }
}

impl Cell {
    pub fn tag(&self) -> CellTag {
        match self {
            Cell::Free { .. } => CellTag::Free,
            Cell::Pending => CellTag::Pending,
            Cell::Apply(..) => CellTag::Apply,
            Cell::S2(..) => CellTag::S2,
            Cell::Cons(..) => CellTag::Cons,
            Cell::Num(_) => CellTag::Num,
            Cell::NumIter(..) => CellTag::NumIter,
            Cell::Prim(..) => CellTag::Prim,
        }
    }

    /// Outgoing references traced by the collector.
    pub fn children(&self) -> [Option<CellRef>; 2] {
        match *self {
            Cell::Apply(a, b) | Cell::S2(a, b) | Cell::Cons(a, b) | Cell::NumIter(a, b) => {
                [Some(a), Some(b)]
            }
            Cell::Prim(_, arg) => [arg, None],
            Cell::Free { .. } | Cell::Pending | Cell::Num(_) => [None, None],
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free { .. })
    }

    pub fn as_num(&self) -> Option<u32> {
        match *self {
            Cell::Num(n) => Some(n),
            _ => None,
        }
    }
}
