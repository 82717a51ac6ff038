//! # polya
//!
//! Combinatorial enumeration under group symmetry.
//!
//! Given a finite permutation group acting on a set of positions, this crate
//! counts or enumerates the distinct ways to colour those positions up to the
//! group's symmetry:
//!
//! - [`orbit::count_orbits`] — Burnside's orbit-counting theorem
//! - [`enumeration::cycle_index_polynomial`] — the cycle index `Z(G)`
//! - [`enumeration::evaluate_uniform`] — `Z(G)` at a constant, which must
//!   agree with the orbit count
//! - [`enumeration::evaluate_colours`] — the full Pólya pattern inventory
//!
//! All arithmetic is exact; intermediate Burnside terms are genuinely
//! fractional even though the final counts are integers.
//!
//! ## Quick start
//!
//! ```
//! use polya::enumeration::{cycle_index_polynomial, evaluate_uniform};
//! use polya::{groups, orbit};
//!
//! let necklace = groups::cyclic(4).unwrap();
//! let orbits = orbit::count_orbits(&necklace, 2).unwrap();
//! assert_eq!(orbits, 6);
//!
//! let z = cycle_index_polynomial(&necklace, None).unwrap();
//! assert_eq!(evaluate_uniform(&z, 2).unwrap(), orbits);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polya_perm as perm;
pub use polya_poly as poly;
pub use polya_rational as rational;

pub mod enumeration;
pub mod groups;
pub mod orbit;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::enumeration::{
        cycle_index_polynomial, evaluate_colours, evaluate_uniform, CycleIndex, EnumerationError,
    };
    pub use crate::orbit::count_orbits;
    pub use polya_perm::{CycleStructure, Permutation, PermutationGroup};
    pub use polya_poly::{Polynomial, Term};
    pub use polya_rational::Rational;
}
