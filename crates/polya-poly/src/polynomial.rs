//! Sparse multivariate polynomials over exact rationals.

use num_traits::Zero;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use polya_rational::Rational;

use crate::term::Term;

/// Errors raised by polynomial operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolynomialError {
    /// A term's exponent count does not match the variable count.
    #[error("expected a term with {expected} exponents, but received {found}")]
    ArityMismatch {
        /// The polynomial's variable count.
        expected: usize,
        /// The exponent count actually received.
        found: usize,
    },

    /// Two polynomials over different variable lists were combined.
    #[error("cannot combine polynomials with different variables")]
    VariableMismatch,
}

/// A sparse multivariate polynomial with rational coefficients.
///
/// The variable list fixes the arity of every term. Zero coefficients are
/// never stored; absence means zero, and setting a coefficient to zero
/// removes the term. The `BTreeMap` keyed by [`Term`] keeps terms in
/// canonical order at all times.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    variables: Vec<String>,
    terms: BTreeMap<Term, Rational>,
}

impl Polynomial {
    /// Creates the zero polynomial over the given variables.
    #[must_use]
    pub fn new(variables: Vec<String>) -> Self {
        Self {
            variables,
            terms: BTreeMap::new(),
        }
    }

    /// The coefficient of the given term; zero when absent.
    #[must_use]
    pub fn coefficient(&self, term: &Term) -> Rational {
        self.terms.get(term).cloned().unwrap_or_else(Rational::zero)
    }

    /// Sets the coefficient of a term, removing the entry when the
    /// coefficient is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::ArityMismatch`] if the term's exponent
    /// count differs from the variable count.
    pub fn set(&mut self, term: Term, coefficient: Rational) -> Result<(), PolynomialError> {
        if term.len() != self.variables.len() {
            return Err(PolynomialError::ArityMismatch {
                expected: self.variables.len(),
                found: term.len(),
            });
        }
        if coefficient.is_zero() {
            self.terms.remove(&term);
        } else {
            self.terms.insert(term, coefficient);
        }
        Ok(())
    }

    /// Returns true if no terms are stored.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The variable names, in declaration order.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The stored terms in canonical order.
    #[must_use]
    pub fn terms(&self) -> &BTreeMap<Term, Rational> {
        &self.terms
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::VariableMismatch`] if the variable lists
    /// differ.
    pub fn add(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.combine(other, |ours, theirs| ours + theirs)
    }

    /// Subtracts another polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::VariableMismatch`] if the variable lists
    /// differ.
    pub fn sub(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.combine(other, |ours, theirs| ours - theirs)
    }

    fn combine(
        &self,
        other: &Self,
        op: impl Fn(Rational, &Rational) -> Rational,
    ) -> Result<Self, PolynomialError> {
        if self.variables != other.variables {
            return Err(PolynomialError::VariableMismatch);
        }
        let mut result = self.clone();
        for (term, coefficient) in &other.terms {
            let updated = op(result.coefficient(term), coefficient);
            result.set(term.clone(), updated)?;
        }
        Ok(result)
    }

    /// Multiplies two polynomials by distributive expansion, costing
    /// O(terms × terms).
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::VariableMismatch`] if the variable lists
    /// differ.
    pub fn mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        if self.variables != other.variables {
            return Err(PolynomialError::VariableMismatch);
        }
        let mut result = Self::new(self.variables.clone());
        for (term, coefficient) in &self.terms {
            for (other_term, other_coefficient) in &other.terms {
                let product = term.product(other_term);
                let accumulated = result.coefficient(&product) + coefficient * other_coefficient;
                result.set(product, accumulated)?;
            }
        }
        Ok(result)
    }

    /// Multiplies every coefficient by a rational scalar; a zero scalar
    /// yields the zero polynomial.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        if factor.is_zero() {
            return Self::new(self.variables.clone());
        }
        Self {
            variables: self.variables.clone(),
            terms: self
                .terms
                .iter()
                .map(|(term, coefficient)| (term.clone(), coefficient * factor))
                .collect(),
        }
    }

    fn format_term(&self, term: &Term, coefficient: &Rational) -> String {
        let factors: Vec<String> = self
            .variables
            .iter()
            .zip(term.exponents())
            .filter(|(_, &exponent)| exponent != 0)
            .map(|(name, &exponent)| format!("{name}^{exponent}"))
            .collect();
        format!("+{coefficient}{}", factors.join("*"))
    }
}

impl fmt::Display for Polynomial {
    /// Renders terms in canonical order as `+(coeff)var^exp*...`, separated
    /// by spaces; the zero polynomial renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|(term, coefficient)| self.format_term(term, coefficient))
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}
