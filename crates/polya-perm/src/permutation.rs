//! Bijections on `{0, ..., d - 1}` and their cycle decompositions.

use std::fmt;
use thiserror::Error;

/// Errors raised by permutation construction and application.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PermutationError {
    /// An element lies outside the permutation's domain.
    #[error("element {element} is not in the domain of a permutation with degree {degree}")]
    ElementOutOfDomain {
        /// The offending element.
        element: usize,
        /// The degree of the permutation.
        degree: usize,
    },

    /// Two permutations of different degrees were combined.
    #[error("cannot compose permutations of degrees {left} and {right}")]
    DegreeMismatch {
        /// Degree of the left operand.
        left: usize,
        /// Degree of the right operand.
        right: usize,
    },
}

/// A permutation of the index set `{0, ..., degree - 1}`, stored as the array
/// mapping each index to its image.
///
/// The degree is fixed at construction. Ordering is lexicographic over the
/// image array, which gives groups a stable element order to sort by.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Permutation {
    images: Vec<usize>,
}

/// The multiset of cycle lengths of a permutation, stored as a distribution
/// indexed by length (index 0 is unused).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleStructure {
    distribution: Vec<usize>,
}

impl CycleStructure {
    /// The number of cycles of the given length.
    #[must_use]
    pub fn count_of(&self, length: usize) -> usize {
        self.distribution.get(length).copied().unwrap_or(0)
    }

    /// The total number of cycles, fixed points included.
    #[must_use]
    pub fn total_cycle_count(&self) -> usize {
        self.distribution.iter().sum()
    }

    /// Recovers the degree of the originating permutation as
    /// `sum(length * count)`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.distribution
            .iter()
            .enumerate()
            .map(|(length, count)| length * count)
            .sum()
    }

    /// The raw length distribution.
    #[must_use]
    pub fn distribution(&self) -> &[usize] {
        &self.distribution
    }
}

impl Permutation {
    /// The identity permutation of the given degree.
    #[must_use]
    pub fn identity(degree: usize) -> Self {
        Self {
            images: (0..degree).collect(),
        }
    }

    /// Builds a permutation directly from an image array.
    ///
    /// The array is trusted to describe a bijection; this mirrors the cycle
    /// constructor, which may also produce a degenerate mapping when cycles
    /// overlap.
    #[must_use]
    pub fn from_images(images: Vec<usize>) -> Self {
        Self { images }
    }

    /// Builds a permutation of the given degree from a list of cycles,
    /// applied left to right.
    ///
    /// Later cycles overwrite earlier mappings on shared elements; callers
    /// must avoid unintended overlap.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::ElementOutOfDomain`] if any cycle element
    /// is `>= degree`.
    pub fn from_cycles(degree: usize, cycles: &[Vec<usize>]) -> Result<Self, PermutationError> {
        let mut permutation = Self::identity(degree);
        for cycle in cycles {
            for (index, &element) in cycle.iter().enumerate() {
                if element >= degree {
                    return Err(PermutationError::ElementOutOfDomain { element, degree });
                }
                permutation.images[element] = cycle[(index + 1) % cycle.len()];
            }
        }
        Ok(permutation)
    }

    /// Applies the permutation to a single element.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::ElementOutOfDomain`] if `element` is
    /// `>= degree`.
    pub fn apply(&self, element: usize) -> Result<usize, PermutationError> {
        self.images
            .get(element)
            .copied()
            .ok_or(PermutationError::ElementOutOfDomain {
                element,
                degree: self.degree(),
            })
    }

    /// Composes two permutations as `self ∘ other`: the result maps
    /// `i` to `self(other(i))`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::DegreeMismatch`] if the degrees differ.
    pub fn compose(&self, other: &Self) -> Result<Self, PermutationError> {
        if self.degree() != other.degree() {
            return Err(PermutationError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            });
        }
        Ok(self.compose_unchecked(other))
    }

    /// Composition for operands already known to share a degree.
    fn compose_unchecked(&self, other: &Self) -> Self {
        Self {
            images: other.images.iter().map(|&image| self.images[image]).collect(),
        }
    }

    /// The inverse permutation, built by index/value swap in O(degree).
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.degree()];
        for (index, &image) in self.images.iter().enumerate() {
            images[image] = index;
        }
        Self { images }
    }

    /// Raises the permutation to an integer power by binary exponentiation.
    ///
    /// A negative exponent inverts first; exponent zero yields the identity
    /// of the same degree.
    #[must_use]
    pub fn power(&self, exponent: i32) -> Self {
        let mut base = if exponent < 0 {
            self.inverse()
        } else {
            self.clone()
        };
        let mut remaining = exponent.unsigned_abs();
        let mut result = Self::identity(self.degree());
        while remaining > 0 {
            if remaining % 2 == 1 {
                result = result.compose_unchecked(&base);
            }
            base = base.compose_unchecked(&base);
            remaining /= 2;
        }
        result
    }

    /// The size of the underlying index set.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// Returns true if every element maps to itself.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(index, &image)| index == image)
    }

    /// Decomposes the permutation into disjoint cycles.
    ///
    /// Cycles appear in order of their smallest element, and each cycle
    /// starts at that smallest element.
    #[must_use]
    pub fn as_cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                cycle.push(current);
                current = self.images[current];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// The distribution of cycle lengths.
    #[must_use]
    pub fn cycle_structure(&self) -> CycleStructure {
        let mut distribution = vec![0; self.degree() + 1];
        for cycle in self.as_cycles() {
            distribution[cycle.len()] += 1;
        }
        CycleStructure { distribution }
    }
}

impl fmt::Display for Permutation {
    /// Renders as concatenated parenthesized cycles, e.g. `(0 1 2)(3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in self.as_cycles() {
            let elements: Vec<String> = cycle.iter().map(ToString::to_string).collect();
            write!(f, "({})", elements.join(" "))?;
        }
        Ok(())
    }
}

/// The rotation-by-one permutation of the given degree: `i -> (i + 1) % d`.
#[must_use]
pub fn rotation(degree: usize) -> Permutation {
    if degree == 0 {
        return Permutation::identity(0);
    }
    Permutation::from_images((0..degree).map(|index| (index + 1) % degree).collect())
}

/// The reflection over index 0 of the given degree: `i -> (d - i) % d`.
#[must_use]
pub fn reflection(degree: usize) -> Permutation {
    if degree == 0 {
        return Permutation::identity(0);
    }
    Permutation::from_images((0..degree).map(|index| (degree - index) % degree).collect())
}

/// The permutation of the given degree that swaps `first` and `second`.
///
/// # Errors
///
/// Returns [`PermutationError::ElementOutOfDomain`] if either element is
/// `>= degree`.
pub fn transposition(
    degree: usize,
    first: usize,
    second: usize,
) -> Result<Permutation, PermutationError> {
    Permutation::from_cycles(degree, &[vec![first, second]])
}
