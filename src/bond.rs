#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondKind {
    /// Bond from sequential adjacency in the token stream.
    #[default]
    Chain,
    /// Bond from a paired `[n]` ring-closure tag.
    Ring,
    /// Bond spliced across a monomer span boundary (HEAD/TAIL).
    Splice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bond {
    pub kind: BondKind,
}

impl Bond {
    pub fn chain() -> Self {
        Self {
            kind: BondKind::Chain,
        }
    }

    pub fn ring() -> Self {
        Self {
            kind: BondKind::Ring,
        }
    }

    pub fn splice() -> Self {
        Self {
            kind: BondKind::Splice,
        }
    }
}
