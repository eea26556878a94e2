//! Randomized invariants over generated notation strings.

use proptest::prelude::*;

use spices::{graph_ops, parse_part, parse_spices, SpicesError};

fn particle_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z0-9]{0,3}"
}

fn chain() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(particle_name(), 1..12)
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(names in chain()) {
        let unit = parse_part(&names.join("-")).unwrap();
        for i in 0..unit.particle_count() {
            for &nb in unit.neighbors(i) {
                prop_assert!(unit.neighbors(nb).contains(&i));
            }
        }
    }

    #[test]
    fn degree_sum_is_twice_edge_count(names in chain()) {
        let unit = parse_part(&names.join("-")).unwrap();
        let degree_sum: usize = (0..unit.particle_count()).map(|i| unit.degree(i)).sum();
        prop_assert_eq!(degree_sum, 2 * unit.structure().bond_count());
    }

    #[test]
    fn reparse_is_identical(names in chain()) {
        let input = names.join("-");
        let unit = parse_part(&input).unwrap();
        let again = parse_part(&unit.expanded_notation()).unwrap();
        prop_assert_eq!(unit.names(), again.names());
        prop_assert_eq!(unit.adjacency(), again.adjacency());
    }

    #[test]
    fn assembly_is_pure(names in chain()) {
        let input = format!("<{}>", names.join("-"));
        let a = parse_spices(&input).unwrap();
        let b = parse_spices(&input).unwrap();
        prop_assert_eq!(a.frequencies(), b.frequencies());
        prop_assert_eq!(a.matrix(), b.matrix());
    }

    #[test]
    fn numeric_repeat_expands(count in 1u32..30, name in particle_name()) {
        let unit = parse_part(&format!("{}{}", count, name)).unwrap();
        prop_assert_eq!(unit.particle_count(), count as usize);
        for i in 0..unit.particle_count() {
            prop_assert_eq!(unit.name(i), name.as_str());
        }
    }

    #[test]
    fn lone_ring_tag_is_rejected(names in chain(), tag in 1u32..50) {
        let input = format!("{}[{}]", names.join("-"), tag);
        prop_assert_eq!(
            parse_part(&input).unwrap_err(),
            SpicesError::MissingRingClosure { tag }
        );
    }

    #[test]
    fn diameter_path_walks_bonds(names in chain()) {
        let unit = parse_part(&names.join("-")).unwrap();
        let path = graph_ops::diameter_path(&unit);
        prop_assert_eq!(path.len(), unit.particle_count());
        for pair in path.windows(2) {
            prop_assert!(unit.neighbors(pair[0]).contains(&pair[1]));
        }
    }
}
