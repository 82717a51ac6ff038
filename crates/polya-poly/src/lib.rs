//! # polya-poly
//!
//! Sparse multivariate polynomials over exact rationals.
//!
//! Terms are exponent vectors ordered by total degree, with ties broken
//! lexicographically. The ordering is baked into [`Term`]'s `Ord`, so the
//! `BTreeMap` storage iterates in canonical order and rendering needs no
//! separate sort step.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use polynomial::{Polynomial, PolynomialError};
pub use term::Term;
