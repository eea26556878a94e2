//! Enumeration of connected n-mer segments.

use std::collections::BTreeSet;

use crate::unit::ParsedUnit;

/// Lists every distinct chain segment of up to `max_length` particles.
///
/// Entry `k - 1` of the result holds the segments of `k` particles as
/// `-`-joined name sequences, deduplicated and sorted. A segment and its
/// reversal are the same walk read from either end, so by default each is
/// reported once under the lexicographically smaller rendering;
/// `both_directions` keeps the two readings as separate entries. Levels
/// stop early once no chain can be extended.
pub fn enumerate(
    unit: &ParsedUnit,
    max_length: usize,
    both_directions: bool,
) -> Vec<Vec<String>> {
    let mut levels = Vec::new();
    if max_length == 0 || unit.particle_count() == 0 {
        return levels;
    }

    let mut chains: Vec<Vec<usize>> = (0..unit.particle_count()).map(|i| vec![i]).collect();
    levels.push(render(unit, &chains, both_directions));

    for _ in 1..max_length {
        let mut next: Vec<Vec<usize>> = Vec::new();
        for chain in &chains {
            let last = chain[chain.len() - 1];
            for &nb in unit.neighbors(last) {
                if chain.contains(&nb) {
                    continue;
                }
                let mut extended = chain.clone();
                extended.push(nb);
                next.push(extended);
            }
        }
        if next.is_empty() {
            break;
        }
        levels.push(render(unit, &next, both_directions));
        chains = next;
    }
    levels
}

fn render(unit: &ParsedUnit, chains: &[Vec<usize>], both_directions: bool) -> Vec<String> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for chain in chains {
        let forward = join_names(unit, chain.iter().copied());
        if both_directions {
            seen.insert(forward);
        } else {
            let reverse = join_names(unit, chain.iter().rev().copied());
            seen.insert(forward.min(reverse));
        }
    }
    seen.into_iter().collect()
}

fn join_names(unit: &ParsedUnit, chain: impl Iterator<Item = usize>) -> String {
    chain
        .map(|i| unit.name(i).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_part;

    #[test]
    fn chain_levels() {
        let unit = parse_part("A-B-C").unwrap();
        let levels = enumerate(&unit, 3, false);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0], vec!["A", "B", "C"]);
        assert_eq!(levels[1], vec!["A-B", "B-C"]);
        assert_eq!(levels[2], vec!["A-B-C"]);
    }

    #[test]
    fn both_directions_kept_apart() {
        let unit = parse_part("A-B-C").unwrap();
        let levels = enumerate(&unit, 2, true);
        assert_eq!(levels[1], vec!["A-B", "B-A", "B-C", "C-B"]);
    }

    #[test]
    fn repeated_names_collapse() {
        let unit = parse_part("3A").unwrap();
        let levels = enumerate(&unit, 2, false);
        assert_eq!(levels[0], vec!["A"]);
        assert_eq!(levels[1], vec!["A-A"]);
    }

    #[test]
    fn branch_segments() {
        let unit = parse_part("A(B)C").unwrap();
        let levels = enumerate(&unit, 3, false);
        assert_eq!(levels[1], vec!["A-B", "A-C"]);
        assert_eq!(levels[2], vec!["B-A-C"]);
    }

    #[test]
    fn ring_segments() {
        // Triangle A-B-C: three distinct trimers up to reversal.
        let unit = parse_part("A[1]B-C[1]").unwrap();
        let levels = enumerate(&unit, 3, false);
        assert_eq!(levels[2], vec!["A-B-C", "A-C-B", "B-A-C"]);
    }

    #[test]
    fn levels_stop_at_graph_extent() {
        let unit = parse_part("A-B").unwrap();
        let levels = enumerate(&unit, 5, false);
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn zero_length_is_empty() {
        let unit = parse_part("A-B").unwrap();
        assert!(enumerate(&unit, 0, false).is_empty());
    }
}
