//! Exact rational numbers, always reduced to lowest terms.

use dashu::base::Signed as DashuSigned;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors raised by rational arithmetic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    /// A rational was constructed with a zero denominator.
    #[error("cannot construct a rational with a zero denominator")]
    ZeroDenominator,

    /// Division by a zero-valued rational.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// An integer conversion was requested for a non-integral value.
    #[error("cannot convert {0} to an integer")]
    NotIntegral(Rational),

    /// An integral value does not fit in a signed 64-bit integer.
    #[error("integer value {0} does not fit in 64 bits")]
    Overflow(Rational),
}

/// An exact rational number.
///
/// The representation is canonical at all times: lowest terms, positive
/// denominator, and zero stored as `0/1`. Equality and ordering are therefore
/// both numeric and structural.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from a numerator and denominator.
    ///
    /// The sign is normalized onto the numerator and the fraction is reduced.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        let mut top = IBig::from(numerator);
        if denominator < 0 {
            top = -top;
        }
        Ok(Self(RBig::from_parts(
            top,
            UBig::from(denominator.unsigned_abs()),
        )))
    }

    /// The numerator of the reduced fraction; carries the sign.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// The denominator of the reduced fraction; always positive.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Returns true if the denominator is one, i.e. the value is an integer.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an i64.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NotIntegral`] when the denominator is not one,
    /// and [`RationalError::Overflow`] when the numerator does not fit.
    pub fn as_integer(&self) -> Result<i64, RationalError> {
        if !self.is_integral() {
            return Err(RationalError::NotIntegral(self.clone()));
        }
        self.numerator()
            .try_into()
            .map_err(|_| RationalError::Overflow(self.clone()))
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> Result<Self, RationalError> {
        if divisor.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self(&self.0 / &divisor.0))
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns true if the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self(RBig::from(value))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self(RBig::from(value))
    }
}

impl From<u32> for Rational {
    fn from(value: u32) -> Self {
        Self(RBig::from(value))
    }
}

impl fmt::Display for Rational {
    /// Renders as `(numerator/denominator)`, including a denominator of one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.0.numerator(), self.0.denominator())
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}
