use lazyk_syntax::Span;

/// Index of a term inside a [`Program`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub u32);

impl TermId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Built-in constants that can appear in source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    K,
    S,
    C,
    Inc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Apply(TermId, TermId),
    Comb(Combinator),
    /// Numeral literal; `i` in source is `Num(1)`.
    Num(u32),
}

/// Flat term tree. Children always precede their parents, so walking `nodes`
/// in order visits every subterm before any term that uses it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    nodes: Vec<Node>,
    spans: Vec<Span>,
    root: Option<TermId>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node, span: Span) -> TermId {
        if let Node::Apply(f, a) = node {
            debug_assert!(f.index() < self.nodes.len());
            debug_assert!(a.index() < self.nodes.len());
        }
        let id = TermId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.spans.push(span);
        id
    }

    pub fn set_root(&mut self, root: TermId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<TermId> {
        self.root
    }

    pub fn node(&self, id: TermId) -> Node {
        self.nodes[id.index()]
    }

    pub fn span(&self, id: TermId) -> Span {
        self.spans[id.index()]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stats(&self) -> ProgramStats {
        let mut stats = ProgramStats::default();
        for node in &self.nodes {
            match node {
                Node::Apply(..) => stats.applications += 1,
                Node::Comb(_) => stats.combinators += 1,
                Node::Num(_) => stats.numerals += 1,
            }
        }
        stats
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramStats {
    pub applications: usize,
    pub combinators: usize,
    pub numerals: usize,
}

impl ProgramStats {
    /// Heap cells needed to load the program: one per application and numeral
    /// plus the shared constants and the input-list suffix.
    pub fn cells_needed(&self) -> usize {
        self.applications + self.numerals + crate::LOAD_OVERHEAD_CELLS
    }
}

/// Shared `k`, `s`, `c`, `+` and `i` cells, plus `Read`, `NUM(0)` and two
/// applications for the input list.
pub const LOAD_OVERHEAD_CELLS: usize = 9;
