//! # polya-rational
//!
//! Exact rational arithmetic for combinatorial enumeration.
//!
//! This crate wraps `dashu` to provide rationals that are always stored in
//! lowest terms with a positive denominator. Burnside sums average integer
//! powers over a group, so the intermediate values are genuinely fractional
//! and only the final sum is integral; everything here stays exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{Rational, RationalError};
