//! # polya-perm
//!
//! Permutations of `{0, ..., d - 1}` and finite permutation groups.
//!
//! This crate provides:
//! - Bijection-array permutations with composition, inversion, integer
//!   powers, and cycle decomposition
//! - Permutation groups built from explicit element lists or from a
//!   generator set via worklist closure
//! - Group-axiom diagnostics (closure, identity, inverses)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod group;
pub mod permutation;

#[cfg(test)]
mod proptests;

pub use group::{GroupError, PermutationGroup};
pub use permutation::{
    reflection, rotation, transposition, CycleStructure, Permutation, PermutationError,
};
