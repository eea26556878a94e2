//! Cartesian coordinate assignment for parsed parts.

use std::collections::VecDeque;

use crate::graph_ops;
use crate::unit::ParsedUnit;

/// Places every particle of a part in space.
///
/// The backbone path (the `[START]`..`[END]` path when tagged, otherwise
/// the diameter path) is laid out from `first` along the `first`..`last`
/// axis at `bond_length` spacing. Remaining particles grow off the backbone
/// perpendicular to that axis, one bond length per bond, alternating sides
/// so neighboring branches spread apart.
pub fn assign(
    unit: &ParsedUnit,
    first: [f64; 3],
    last: [f64; 3],
    bond_length: f64,
) -> Vec<[f64; 3]> {
    let count = unit.particle_count();
    let mut coords = vec![first; count];
    if count == 0 {
        return coords;
    }

    let path = graph_ops::tagged_path(unit).unwrap_or_else(|| graph_ops::diameter_path(unit));
    let axis = direction(first, last);
    let perp = perpendicular(axis);

    let mut placed = vec![false; count];
    for (k, &node) in path.iter().enumerate() {
        let d = bond_length * k as f64;
        coords[node] = [
            first[0] + axis[0] * d,
            first[1] + axis[1] * d,
            first[2] + axis[2] * d,
        ];
        placed[node] = true;
    }

    let mut queue: VecDeque<usize> = path.iter().copied().collect();
    let mut side = 1.0f64;
    while let Some(node) = queue.pop_front() {
        for &nb in unit.neighbors(node) {
            if placed[nb] {
                continue;
            }
            placed[nb] = true;
            let d = bond_length * side;
            coords[nb] = [
                coords[node][0] + perp[0] * d,
                coords[node][1] + perp[1] * d,
                coords[node][2] + perp[2] * d,
            ];
            side = -side;
            queue.push_back(nb);
        }
    }

    coords
}

/// Unit vector from `a` to `b`, falling back to the x axis when the two
/// anchors coincide.
fn direction(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    let v = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len < 1e-12 {
        return [1.0, 0.0, 0.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Some unit vector orthogonal to `axis`.
fn perpendicular(axis: [f64; 3]) -> [f64; 3] {
    // Cross with whichever basis vector the axis leans away from.
    let basis = if axis[2].abs() < 0.9 {
        [0.0, 0.0, 1.0]
    } else {
        [0.0, 1.0, 0.0]
    };
    let v = [
        axis[1] * basis[2] - axis[2] * basis[1],
        axis[2] * basis[0] - axis[0] * basis[2],
        axis[0] * basis[1] - axis[1] * basis[0],
    ];
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}
