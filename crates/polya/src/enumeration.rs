//! Cycle index polynomials and their two evaluations.
//!
//! The cycle index `Z(G)` averages, over the group's elements, a monomial
//! recording each element's cycle-length distribution. Substituting a
//! constant for every variable recovers Burnside's orbit count; substituting
//! power sums of colour variables yields the Pólya pattern inventory.

use num_traits::{One, Zero};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use polya_perm::PermutationGroup;
use polya_poly::{Polynomial, PolynomialError, Term};
use polya_rational::{Rational, RationalError};

/// Errors raised by the enumeration algorithms.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnumerationError {
    /// The supplied variable names do not match the group's degree.
    #[error("expected {expected} variable names to match the degree, but received {found}")]
    VariableCountMismatch {
        /// The group's degree.
        expected: usize,
        /// The number of names supplied.
        found: usize,
    },

    /// The supplied colour names do not match the colour count.
    #[error("expected {expected} colour names to match the colour count, but received {found}")]
    ColourCountMismatch {
        /// The declared colour count.
        expected: usize,
        /// The number of names supplied.
        found: usize,
    },

    /// A count that the theory guarantees to be integral was not; this
    /// indicates a defective group, not a numeric failure.
    #[error("expected an integral count, but the sum reduced to {0}")]
    NonIntegralCount(Rational),

    /// A rational-arithmetic failure.
    #[error(transparent)]
    Rational(#[from] RationalError),

    /// A polynomial-arity failure.
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// The cycle index polynomial `Z(G)` of a permutation group.
///
/// A newtype so that an arbitrary polynomial cannot be passed where a cycle
/// index is required; the evaluation functions rely on the variable at
/// position `k - 1` standing for `x_k`, the k-length cycle count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleIndex(Polynomial);

impl CycleIndex {
    /// The underlying polynomial.
    #[must_use]
    pub fn as_polynomial(&self) -> &Polynomial {
        &self.0
    }

    /// Unwraps into the underlying polynomial.
    #[must_use]
    pub fn into_polynomial(self) -> Polynomial {
        self.0
    }
}

impl fmt::Display for CycleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Builds the cycle index polynomial of a group.
///
/// Variable `i` (1-indexed) receives, for each group element, the count of
/// i-length cycles in that element's decomposition as its exponent; every
/// element contributes coefficient `1/|G|` to its term, and elements sharing
/// a cycle-type signature accumulate onto the same term.
///
/// When `variable_names` is `None`, the names default to `x_1..x_d`.
///
/// # Errors
///
/// Returns [`EnumerationError::VariableCountMismatch`] if a supplied name
/// list's length differs from the group's degree.
pub fn cycle_index_polynomial(
    group: &PermutationGroup,
    variable_names: Option<Vec<String>>,
) -> Result<CycleIndex, EnumerationError> {
    let degree = group.degree();
    let variables = variable_names
        .unwrap_or_else(|| (1..=degree).map(|position| format!("x_{position}")).collect());
    if variables.len() != degree {
        return Err(EnumerationError::VariableCountMismatch {
            expected: degree,
            found: variables.len(),
        });
    }

    let weight = Rational::new(1, i64::try_from(group.order()).unwrap_or(i64::MAX))?;
    let mut polynomial = Polynomial::new(variables);
    for element in group.elements() {
        let structure = element.cycle_structure();
        let exponents: Vec<u32> = (1..=degree)
            .map(|length| u32::try_from(structure.count_of(length)).unwrap_or(u32::MAX))
            .collect();
        let term = Term::new(&exponents);
        let accumulated = polynomial.coefficient(&term) + &weight;
        polynomial.set(term, accumulated)?;
    }

    debug!(
        group = group.name(),
        order = group.order(),
        terms = polynomial.terms().len(),
        "built cycle index polynomial"
    );
    Ok(CycleIndex(polynomial))
}

/// Evaluates a cycle index with the same constant substituted for every
/// variable.
///
/// Each term contributes `coefficient * colour_count^(total degree)`; the sum
/// equals the Burnside orbit count for the same group and colour count.
///
/// # Errors
///
/// Returns [`EnumerationError::NonIntegralCount`] if the sum is not an
/// integer, which indicates the polynomial did not come from a valid group.
pub fn evaluate_uniform(
    cycle_index: &CycleIndex,
    colour_count: u32,
) -> Result<u64, EnumerationError> {
    let base = Rational::from(colour_count);
    let total = cycle_index
        .as_polynomial()
        .terms()
        .iter()
        .fold(Rational::zero(), |sum, (term, coefficient)| {
            sum + coefficient * &base.pow(term.total_degree())
        });
    integral_count(total)
}

/// Expands a cycle index into the Pólya pattern inventory.
///
/// Each cycle-index variable `x_k` is replaced by the degree-k power sum of
/// the colour variables, `sum_c colour_c^k`; the coefficient of
/// `colour_1^e1 * ... * colour_n^en` in the result counts the colourings
/// with exactly that colour distribution, up to symmetry.
///
/// When `colour_names` is `None`, the names default to `c_1..c_n`.
///
/// # Errors
///
/// Returns [`EnumerationError::ColourCountMismatch`] if a supplied name
/// list's length differs from `colour_count`.
pub fn evaluate_colours(
    cycle_index: &CycleIndex,
    colour_count: u32,
    colour_names: Option<Vec<String>>,
) -> Result<Polynomial, EnumerationError> {
    let count = colour_count as usize;
    let colours = colour_names
        .unwrap_or_else(|| (1..=count).map(|position| format!("c_{position}")).collect());
    if colours.len() != count {
        return Err(EnumerationError::ColourCountMismatch {
            expected: count,
            found: colours.len(),
        });
    }

    let mut inventory = Polynomial::new(colours.clone());
    for (term, coefficient) in cycle_index.as_polynomial().terms() {
        let mut expanded = Polynomial::new(colours.clone());
        expanded.set(Term::constant(count), coefficient.clone())?;
        for (position, &exponent) in term.exponents().iter().enumerate() {
            if exponent == 0 {
                continue;
            }
            let cycle_length = u32::try_from(position + 1).unwrap_or(u32::MAX);
            let substituted = power_sum(&colours, cycle_length)?;
            for _ in 0..exponent {
                expanded = expanded.mul(&substituted)?;
            }
        }
        inventory = inventory.add(&expanded)?;
    }
    Ok(inventory)
}

/// The degree-`power` power sum of the colour variables,
/// `colour_1^power + ... + colour_n^power`.
fn power_sum(colours: &[String], power: u32) -> Result<Polynomial, EnumerationError> {
    let mut polynomial = Polynomial::new(colours.to_vec());
    for position in 0..colours.len() {
        let mut exponents = vec![0; colours.len()];
        exponents[position] = power;
        polynomial.set(Term::new(&exponents), Rational::one())?;
    }
    Ok(polynomial)
}

/// Converts an exactly-accumulated sum to the integer the theory promises.
pub(crate) fn integral_count(total: Rational) -> Result<u64, EnumerationError> {
    let Ok(value) = total.as_integer() else {
        return Err(EnumerationError::NonIntegralCount(total));
    };
    u64::try_from(value).map_err(|_| EnumerationError::NonIntegralCount(total))
}
