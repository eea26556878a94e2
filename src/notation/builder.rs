use std::collections::HashMap;

use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;

use crate::bond::Bond;
use crate::notation::error::SpicesError;
use crate::notation::tokenizer::Token;
use crate::particle::Particle;
use crate::structure::Structure;
use crate::unit::ParsedUnit;

/// State of the currently open monomer span.
struct SpanFrame {
    /// Particle ordinal the span hangs off (the anchor before `{`).
    outside: Option<usize>,
    /// First particle created inside the span; the HEAD default.
    first_inside: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

/// Indexes particles and derives connectivity from an expanded, validated
/// token stream.
///
/// The scan keeps one "anchor" ordinal (the particle a new bond attaches
/// to), a branch stack for `(`/`)`, a table
/// of open ring closures, and the open monomer span. Ring tags pair
/// consecutive occurrences of a value; monomer spans bond
/// outside-anchor→HEAD on entry and continue from TAIL after `}`.
pub fn build_unit(source: &str, tokens: Vec<Token>) -> Result<ParsedUnit, SpicesError> {
    let mut structure = Structure::new();
    let mut names: Vec<String> = Vec::new();
    let mut backbone: Vec<u32> = Vec::new();
    let mut monomer_names: Vec<String> = Vec::new();
    let mut start: Option<usize> = None;
    let mut end: Option<usize> = None;

    let mut anchor: Option<usize> = None;
    let mut branches: Vec<Option<usize>> = Vec::new();
    let mut span: Option<SpanFrame> = None;
    let mut ring_opens: HashMap<u32, usize> = HashMap::new();

    for token in &tokens {
        match token {
            Token::Particle { name, .. } | Token::Monomer { name, .. } => {
                let is_monomer = matches!(token, Token::Monomer { .. });
                let idx = names.len();
                structure.add_particle(Particle {
                    name: name.clone(),
                    backbone_index: 0,
                    is_monomer,
                });
                names.push(name.clone());
                backbone.push(0);
                if is_monomer && !monomer_names.contains(name) {
                    monomer_names.push(name.clone());
                }
                if let Some(frame) = span.as_mut() {
                    if frame.first_inside.is_none() {
                        frame.first_inside = Some(idx);
                    }
                }
                if let Some(a) = anchor {
                    add_bond_once(&mut structure, a, idx, Bond::chain());
                }
                anchor = Some(idx);
            }
            Token::Connection(_) => {}
            Token::OpenParen(_) => {
                branches.push(anchor);
            }
            Token::CloseParen(_) => {
                anchor = branches.pop().unwrap_or(None);
            }
            Token::OpenCurly(_) => {
                span = Some(SpanFrame {
                    outside: anchor.take(),
                    first_inside: None,
                    head: None,
                    tail: None,
                });
            }
            Token::CloseCurly(_) => {
                if let Some(frame) = span.take() {
                    // Untagged spans splice at their first and last particle.
                    let head = frame.head.or(frame.first_inside);
                    let tail = frame.tail.or(anchor);
                    if let (Some(outside), Some(head)) = (frame.outside, head) {
                        add_bond_once(&mut structure, outside, head, Bond::splice());
                    }
                    anchor = tail;
                }
            }
            Token::Head(_) => {
                if let Some(frame) = span.as_mut() {
                    frame.head = anchor;
                }
            }
            Token::Tail(_) => {
                if let Some(frame) = span.as_mut() {
                    frame.tail = anchor;
                }
            }
            Token::Start(_) => {
                start = anchor;
            }
            Token::End(_) => {
                end = anchor;
            }
            Token::RingClosure { tag, .. } => {
                if let Some(current) = anchor {
                    match ring_opens.remove(tag) {
                        Some(open) => {
                            if open != current {
                                add_bond_once(&mut structure, open, current, Bond::ring());
                            }
                        }
                        None => {
                            ring_opens.insert(*tag, current);
                        }
                    }
                }
            }
            Token::BackboneIndex { index, .. } => {
                if let Some(a) = anchor {
                    backbone[a] = *index;
                    structure.particle_mut(NodeIndex::new(a)).backbone_index = *index;
                }
            }
            // Numbers are gone after expansion; angles never reach a part
            // body. Both are dead arms on validated input.
            Token::Number { .. } | Token::OpenAngle(_) | Token::CloseAngle(_) => {}
        }
    }

    if let Some(tag) = ring_opens.keys().min().copied() {
        return Err(SpicesError::MissingRingClosure { tag });
    }

    if !names.is_empty() && connected_components(structure.graph()) > 1 {
        return Err(SpicesError::DisconnectedStructure);
    }

    let count = names.len();
    let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(count);
    for i in 0..count {
        let mut neighbors: Vec<usize> = structure
            .neighbors(NodeIndex::new(i))
            .map(|n| n.index())
            .collect();
        neighbors.sort_unstable();
        adjacency.push(neighbors);
    }
    let terminal: Vec<bool> = adjacency.iter().map(|n| n.len() == 1).collect();

    Ok(ParsedUnit::from_parts(
        source.to_string(),
        tokens,
        structure,
        names,
        adjacency,
        backbone,
        start,
        end,
        terminal,
        monomer_names,
    ))
}

fn add_bond_once(structure: &mut Structure, a: usize, b: usize, bond: Bond) {
    let (na, nb) = (NodeIndex::new(a), NodeIndex::new(b));
    if structure.bond_between(na, nb).is_none() {
        structure.add_bond(na, nb, bond);
    }
}
