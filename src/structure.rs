use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

use crate::bond::Bond;
use crate::particle::Particle;

/// Undirected particle/connection graph for one structure.
///
/// Thin wrapper over a petgraph [`UnGraph`] exposing only the operations the
/// engine needs. Node indices are dense and assigned in particle-ordinal
/// order, so `NodeIndex::new(i)` is the node of particle ordinal `i`.
pub struct Structure {
    graph: UnGraph<Particle, Bond>,
}

impl Structure {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn graph(&self) -> &UnGraph<Particle, Bond> {
        &self.graph
    }

    pub fn particle(&self, idx: NodeIndex) -> &Particle {
        &self.graph[idx]
    }

    pub fn particle_mut(&mut self, idx: NodeIndex) -> &mut Particle {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &Bond {
        &self.graph[idx]
    }

    pub fn add_particle(&mut self, particle: Particle) -> NodeIndex {
        self.graph.add_node(particle)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: Bond) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn particle_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn particles(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }
}

impl Clone for Structure {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl Default for Structure {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        if self.particle_count() != other.particle_count()
            || self.bond_count() != other.bond_count()
        {
            return false;
        }
        for idx in self.particles() {
            if self.particle(idx) != other.particle(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx)
                || self.bond_endpoints(idx) != other.bond_endpoints(idx)
            {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Debug for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Structure")
            .field("particle_count", &self.particle_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_query() {
        let mut s = Structure::new();
        let a = s.add_particle(Particle::named("A"));
        let b = s.add_particle(Particle::named("B"));
        let e = s.add_bond(a, b, Bond::chain());

        assert_eq!(s.particle_count(), 2);
        assert_eq!(s.bond_count(), 1);
        assert_eq!(s.particle(a).name, "A");
        assert_eq!(s.bond_between(a, b), Some(e));
        assert_eq!(s.degree(a), 1);
    }

    #[test]
    fn bond_between_absent() {
        let mut s = Structure::new();
        let a = s.add_particle(Particle::named("A"));
        let b = s.add_particle(Particle::named("B"));
        assert_eq!(s.bond_between(a, b), None);
    }
}
