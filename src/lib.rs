//! SPICES, a line notation for coarse-grained particle structures.
//!
//! A SPICES string names particles (`A`, `Bb2`), joins them with `-` or by
//! adjacency, branches with `(...)`, closes rings with `[n]` tags, and
//! defines repeatable monomer spans with `{...[HEAD]...[TAIL]...}`. Repeat
//! counts multiply the following particle or span, and `<...>` blocks
//! compose several parts into one assembly:
//!
//! ```
//! use spices::parse_spices;
//!
//! let spices = parse_spices("<A-B(C)D>2<E>").unwrap();
//! assert_eq!(spices.particle_count(), 6);
//! assert_eq!(spices.frequencies().get("E"), Some(&2));
//! ```
//!
//! Single parts parse to a [`ParsedUnit`], a particle graph with derived
//! adjacency, terminal flags and backbone indices. [`graph_ops`] finds
//! backbone paths through a part, [`segments`] enumerates its n-mer chain
//! segments, and [`coords`] places particles in space.

mod bond;
mod composite;
pub mod coords;
pub mod graph_ops;
mod notation;
mod particle;
pub mod segments;
mod structure;
mod unit;

pub use bond::{Bond, BondKind};
pub use composite::{parse_spices, CoordinateSpec, MatrixOptions, Spices, SpicesParser};
pub use notation::{parse_part, parse_part_with, SpicesError, Token, TokenKind};
pub use particle::Particle;
pub use structure::Structure;
pub use unit::ParsedUnit;

#[cfg(test)]
mod tests;
