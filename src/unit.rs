use crate::bond::BondKind;
use crate::notation::tokenizer::Token;
use crate::notation::writer;
use crate::structure::Structure;

/// A fully resolved SPICES part.
///
/// Holds the particle graph plus the derived per-particle tables that the
/// graph walks and the matrix renderer consume: sorted adjacency lists,
/// backbone indices, terminal flags, and the resolved `[START]`/`[END]`
/// ordinals. Particles are numbered 0..n in order of appearance in the
/// expanded notation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    source: String,
    tokens: Vec<Token>,
    structure: Structure,
    names: Vec<String>,
    adjacency: Vec<Vec<usize>>,
    backbone: Vec<u32>,
    start: Option<usize>,
    end: Option<usize>,
    terminal: Vec<bool>,
    monomer_names: Vec<String>,
}

impl ParsedUnit {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        source: String,
        tokens: Vec<Token>,
        structure: Structure,
        names: Vec<String>,
        adjacency: Vec<Vec<usize>>,
        backbone: Vec<u32>,
        start: Option<usize>,
        end: Option<usize>,
        terminal: Vec<bool>,
        monomer_names: Vec<String>,
    ) -> Self {
        Self {
            source,
            tokens,
            structure,
            names,
            adjacency,
            backbone,
            start,
            end,
            terminal,
            monomer_names,
        }
    }

    /// The notation string this part was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The expanded token stream (all repeat shorthand rewritten out).
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The underlying particle graph.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn particle_count(&self) -> usize {
        self.names.len()
    }

    /// Name of particle `i`. Monomer references carry their name without
    /// the `#` marker.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Neighbors of particle `i`, ascending.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjacency[i]
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }

    /// Whether particle `i` has exactly one neighbor.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    /// Backbone index of particle `i`, or 0 when the particle carries none.
    pub fn backbone_index(&self, i: usize) -> u32 {
        self.backbone[i]
    }

    /// Ordinal of the `[START]`-tagged particle, if any.
    pub fn start_particle(&self) -> Option<usize> {
        self.start
    }

    /// Ordinal of the `[END]`-tagged particle, if any.
    pub fn end_particle(&self) -> Option<usize> {
        self.end
    }

    pub fn first_particle(&self) -> Option<usize> {
        if self.names.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn last_particle(&self) -> Option<usize> {
        self.names.len().checked_sub(1)
    }

    /// Whether any bond came from a ring-closure tag.
    pub fn has_rings(&self) -> bool {
        self.structure
            .bonds()
            .any(|e| self.structure.bond(e).kind == BondKind::Ring)
    }

    /// Names of monomer references appearing in this part, in order of
    /// first appearance.
    pub fn monomer_names(&self) -> &[String] {
        &self.monomer_names
    }

    /// The part rendered back to notation text with every repeat written
    /// out explicitly.
    pub fn expanded_notation(&self) -> String {
        writer::write_tokens(&self.tokens)
    }
}
