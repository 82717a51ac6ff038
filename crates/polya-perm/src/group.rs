//! Finite permutation groups.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::permutation::{Permutation, PermutationError};

/// Errors raised by group construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// A group was constructed from an empty element list.
    #[error("a permutation group needs at least one element")]
    Empty,

    /// An element or generator does not match the declared degree.
    #[error("expected degree {expected}, but received a permutation of degree {found}")]
    DegreeMismatch {
        /// The declared degree.
        expected: usize,
        /// The degree actually found.
        found: usize,
    },

    /// A permutation-level failure during construction.
    #[error(transparent)]
    Permutation(#[from] PermutationError),
}

/// A finite set of permutations of a common degree, labelled with a name.
///
/// The element order is preserved as given (or as discovered during closure).
/// Whether the set actually satisfies the group axioms is checked on demand
/// by [`PermutationGroup::is_valid_group`], not enforced at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationGroup {
    name: String,
    elements: Vec<Permutation>,
}

impl PermutationGroup {
    /// Builds a group from a complete element list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Empty`] for an empty list and
    /// [`GroupError::DegreeMismatch`] when the elements do not share a degree.
    pub fn from_elements(
        name: impl Into<String>,
        elements: Vec<Permutation>,
    ) -> Result<Self, GroupError> {
        let Some(first) = elements.first() else {
            return Err(GroupError::Empty);
        };
        let expected = first.degree();
        for element in &elements {
            if element.degree() != expected {
                return Err(GroupError::DegreeMismatch {
                    expected,
                    found: element.degree(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            elements,
        })
    }

    /// Builds a group of the declared degree as the closure of a generator
    /// set.
    ///
    /// The closure is a worklist fixed point: starting from the identity,
    /// every discovered element is multiplied by every generator until no new
    /// permutation appears. Termination is guaranteed because the ambient
    /// symmetric group is finite (at most `degree!` elements).
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::DegreeMismatch`] if any generator's degree
    /// differs from `degree`.
    pub fn from_generators(
        name: impl Into<String>,
        degree: usize,
        generators: &[Permutation],
    ) -> Result<Self, GroupError> {
        for generator in generators {
            if generator.degree() != degree {
                return Err(GroupError::DegreeMismatch {
                    expected: degree,
                    found: generator.degree(),
                });
            }
        }

        let name = name.into();
        let identity = Permutation::identity(degree);
        let mut seen = FxHashSet::default();
        seen.insert(identity.clone());
        let mut elements = vec![identity.clone()];
        let mut worklist = VecDeque::from([identity]);

        while let Some(current) = worklist.pop_front() {
            for generator in generators {
                let product = current.compose(generator)?;
                if seen.insert(product.clone()) {
                    elements.push(product.clone());
                    worklist.push_back(product);
                }
            }
        }

        debug!(
            name = %name,
            order = elements.len(),
            degree,
            "generator closure reached a fixed point"
        );
        Ok(Self { name, elements })
    }

    /// The group's label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The common degree of all elements.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.elements[0].degree()
    }

    /// The stored elements, in construction order.
    #[must_use]
    pub fn elements(&self) -> &[Permutation] {
        &self.elements
    }

    /// Membership test by value equality.
    #[must_use]
    pub fn contains(&self, permutation: &Permutation) -> bool {
        self.elements.contains(permutation)
    }

    /// Checks the group axioms against the stored element set: closure under
    /// composition, presence of the identity, and presence of every inverse.
    ///
    /// This is a diagnostic, not a precondition; an invalid set reports
    /// `false` rather than failing.
    #[must_use]
    pub fn is_valid_group(&self) -> bool {
        self.has_closure() && self.has_identity() && self.has_inverses()
    }

    fn has_closure(&self) -> bool {
        self.elements.iter().all(|left| {
            self.elements.iter().all(|right| {
                left.compose(right)
                    .is_ok_and(|product| self.contains(&product))
            })
        })
    }

    fn has_identity(&self) -> bool {
        self.contains(&Permutation::identity(self.degree()))
    }

    fn has_inverses(&self) -> bool {
        self.elements
            .iter()
            .all(|element| self.contains(&element.inverse()))
    }
}

impl fmt::Display for PermutationGroup {
    /// Renders as `name(order: o, degree: d) { ... }` with one element in
    /// cycle notation per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(order: {}, degree: {}) {{",
            self.name,
            self.order(),
            self.degree()
        )?;
        for element in &self.elements {
            write!(f, "\n\t{element}")?;
        }
        write!(f, "\n}}")
    }
}
