//! Cross-module checks against the public surface.

use crate::{
    graph_ops, parse_part, parse_spices, segments, CoordinateSpec, MatrixOptions, SpicesError,
};

#[test]
fn polymer_round_trip() {
    let unit = parse_part("3A-2{4B[HEAD]C[TAIL]}-2D").unwrap();
    assert_eq!(unit.particle_count(), 15);
    assert_eq!(
        unit.expanded_notation(),
        "A-A-A-{B-B-B-B[HEAD]C[TAIL]}{B-B-B-B[HEAD]C[TAIL]}-D-D"
    );
    // One connected piece, no rings.
    assert!(!unit.has_rings());
    assert_eq!(unit.first_particle(), Some(0));
    assert_eq!(unit.last_particle(), Some(14));
}

#[test]
fn ring_flag() {
    assert!(parse_part("A[1]B-C[1]").unwrap().has_rings());
    assert!(!parse_part("A-B-C").unwrap().has_rings());
}

#[test]
fn diameter_of_polymer() {
    // The span splice hangs three B beads off each spliced-in fourth B, so
    // the longest chain runs A-A-A plus B..C per span copy plus D-D.
    let unit = parse_part("3A-2{4B[HEAD]C[TAIL]}-2D").unwrap();
    let path = graph_ops::diameter_path(&unit);
    assert!(path.len() >= 9);
}

#[test]
fn dimers_of_simple_chain() {
    let unit = parse_part("A-B-A").unwrap();
    let levels = segments::enumerate(&unit, 2, false);
    assert_eq!(levels[0], vec!["A", "B"]);
    assert_eq!(levels[1], vec!["A-B"]);
}

#[test]
fn assembly_matrix_with_coordinates() {
    let spices = parse_spices("<A-B>2<C>").unwrap();
    let rows = spices.matrix_with(&MatrixOptions {
        start_number: 1,
        coordinates: Some(CoordinateSpec {
            first: [0.0, 0.0, 0.0],
            last: [4.0, 0.0, 0.0],
            bond_length: 1.0,
        }),
    });
    assert_eq!(rows.len(), 4);
    // Every row carries number, name, backbone, x, y, z.
    assert!(rows.iter().all(|r| r.len() >= 6));
    // Part anchors advance along the axis.
    let x0: f64 = rows[0][3].parse().unwrap();
    let x2: f64 = rows[2][3].parse().unwrap();
    assert!(x2 > x0);
}

#[test]
fn error_messages_read_well() {
    let cases = [
        ("", "empty SPICES string"),
        ("A(B", "missing closing normal bracket for '(' at position 1"),
        ("A[1]B", "missing ring closure for tag 1"),
        ("A--B", "a connection '-' may not follow a connection '-' at position 2"),
    ];
    for (input, message) in cases {
        assert_eq!(parse_part(input).unwrap_err().to_string(), message);
    }
}

#[test]
fn error_type_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    let err = parse_part("").unwrap_err();
    takes_error(&err);
    assert_eq!(err, SpicesError::EmptyInput);
}
