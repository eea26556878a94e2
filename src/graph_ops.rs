//! Path finding over parsed parts.

use std::collections::VecDeque;

use crate::unit::ParsedUnit;

/// Longest-chain estimate through the particle graph.
///
/// Runs the double sweep: DFS from particle 0 to the deepest particle, then
/// DFS from there to its own deepest particle, and returns that second
/// path. Exact on acyclic parts; on parts with rings it is the usual
/// heuristic and still returns a real path. The path is oriented to put a
/// `[START]`-tagged endpoint first when one exists, otherwise the endpoint
/// with the lexicographically smaller name (smaller ordinal on ties).
pub fn diameter_path(unit: &ParsedUnit) -> Vec<usize> {
    let count = unit.particle_count();
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }

    let (far, _) = deepest_from(unit, 0);
    let (end, parent) = deepest_from(unit, far);

    let mut path = Vec::new();
    let mut node = Some(end);
    while let Some(n) = node {
        path.push(n);
        node = parent[n];
    }
    path.reverse(); // far .. end

    orient(unit, path)
}

/// The path from the `[START]` particle to the `[END]` particle, or `None`
/// when the part carries no tag pair. Shortest by bond count (BFS).
pub fn tagged_path(unit: &ParsedUnit) -> Option<Vec<usize>> {
    let start = unit.start_particle()?;
    let end = unit.end_particle()?;
    bfs_path(unit, start, end)
}

/// Shortest path between two particles by bond count.
pub fn bfs_path(unit: &ParsedUnit, from: usize, to: usize) -> Option<Vec<usize>> {
    let count = unit.particle_count();
    if from >= count || to >= count {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let mut parent: Vec<Option<usize>> = vec![None; count];
    let mut visited = vec![false; count];
    let mut queue = VecDeque::new();
    visited[from] = true;
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        for &nb in unit.neighbors(node) {
            if visited[nb] {
                continue;
            }
            visited[nb] = true;
            parent[nb] = Some(node);
            if nb == to {
                let mut path = vec![to];
                let mut cur = node;
                loop {
                    path.push(cur);
                    match parent[cur] {
                        Some(p) => cur = p,
                        None => break,
                    }
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(nb);
        }
    }
    None
}

/// Deepest particle reachable from `root` with DFS parent pointers.
/// Iterative; notation depth is unbounded so the walk must not recurse.
fn deepest_from(unit: &ParsedUnit, root: usize) -> (usize, Vec<Option<usize>>) {
    let count = unit.particle_count();
    let mut parent: Vec<Option<usize>> = vec![None; count];
    let mut visited = vec![false; count];
    let mut best = (root, 0usize);

    let mut stack = vec![(root, 0usize)];
    visited[root] = true;
    while let Some((node, depth)) = stack.pop() {
        if depth > best.1 {
            best = (node, depth);
        }
        for &nb in unit.neighbors(node) {
            if !visited[nb] {
                visited[nb] = true;
                parent[nb] = Some(node);
                stack.push((nb, depth + 1));
            }
        }
    }
    (best.0, parent)
}

fn orient(unit: &ParsedUnit, mut path: Vec<usize>) -> Vec<usize> {
    let (first, last) = (path[0], path[path.len() - 1]);
    if let Some(start) = unit.start_particle() {
        if last == start && first != start {
            path.reverse();
        }
        if first == start || last == start {
            return path;
        }
    }
    let flip = match unit.name(last).cmp(unit.name(first)) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Equal => last < first,
        std::cmp::Ordering::Greater => false,
    };
    if flip {
        path.reverse();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_part;

    #[test]
    fn chain_diameter_is_whole_chain() {
        let unit = parse_part("A-B-C-D").unwrap();
        let path = diameter_path(&unit);
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn branch_on_backbone() {
        // B-A-C-D-E threads every particle; the branch point is interior.
        let unit = parse_part("A(B)C-D-E").unwrap();
        let path = diameter_path(&unit);
        assert_eq!(path, vec![1, 0, 2, 3, 4]);
    }

    #[test]
    fn star_diameter() {
        let unit = parse_part("A(B)(C)D").unwrap();
        assert_eq!(diameter_path(&unit).len(), 3);
    }

    #[test]
    fn single_particle_diameter() {
        let unit = parse_part("A").unwrap();
        assert_eq!(diameter_path(&unit), vec![0]);
    }

    #[test]
    fn diameter_starts_at_start_tag() {
        let unit = parse_part("C[START]-B-A").unwrap();
        let path = diameter_path(&unit);
        assert_eq!(path[0], unit.start_particle().unwrap());
    }

    #[test]
    fn diameter_orientation_by_name() {
        let unit = parse_part("Z-M-A").unwrap();
        let path = diameter_path(&unit);
        assert_eq!(unit.name(path[0]), "A");
    }

    #[test]
    fn tagged_path_through_chain() {
        let unit = parse_part("A[START]-B-C[END]").unwrap();
        assert_eq!(tagged_path(&unit), Some(vec![0, 1, 2]));
    }

    #[test]
    fn tagged_path_takes_short_way_around_ring() {
        // Ring A-B-C-D-A; START on A, END on D. Direct ring bond wins.
        let unit = parse_part("A[1][START]-B-C-D[1][END]").unwrap();
        assert_eq!(tagged_path(&unit), Some(vec![0, 3]));
    }

    #[test]
    fn untagged_part_has_no_tagged_path() {
        let unit = parse_part("A-B").unwrap();
        assert_eq!(tagged_path(&unit), None);
    }

    #[test]
    fn bfs_same_node() {
        let unit = parse_part("A-B").unwrap();
        assert_eq!(bfs_path(&unit, 1, 1), Some(vec![1]));
    }
}
