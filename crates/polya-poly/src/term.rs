//! Exponent vectors with the canonical graded-lexicographic order.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// A single monomial's exponents, one per polynomial variable, in variable
/// declaration order.
///
/// The `Ord` implementation is the canonical term order: total degree
/// ascending, ties broken by lexicographic comparison of the exponent array.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Term(SmallVec<[u32; 8]>);

impl Term {
    /// Creates a term from a slice of exponents.
    #[must_use]
    pub fn new(exponents: &[u32]) -> Self {
        Self(SmallVec::from_slice(exponents))
    }

    /// The constant term of the given arity (all exponents zero).
    #[must_use]
    pub fn constant(arity: usize) -> Self {
        Self(SmallVec::from_elem(0, arity))
    }

    /// The number of exponent slots, i.e. the arity this term fits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the term has no exponent slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The exponent of the variable at the given position, zero when out of
    /// range.
    #[must_use]
    pub fn exponent(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// All exponents in variable order.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// The sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// The term of the monomial product: element-wise exponent addition.
    ///
    /// Both terms must share an arity; this is guaranteed by the polynomial
    /// operations that call it.
    #[must_use]
    pub fn product(&self, other: &Self) -> Self {
        debug_assert_eq!(self.0.len(), other.0.len());
        Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl From<Vec<u32>> for Term {
    fn from(exponents: Vec<u32>) -> Self {
        Self(SmallVec::from_vec(exponents))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_degree()
            .cmp(&other.total_degree())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
