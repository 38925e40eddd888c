//! Exact rational coefficients.
//!
//! Every literal in an expression tree is a [`Fraction`]: a normalized
//! numerator/denominator pair of 64-bit integers. No floating point is ever
//! involved in building or differentiating a tree.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_integer::Integer;
use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};

use crate::error::ArithmeticError;

/// A normalized rational number.
///
/// Invariants, upheld by every constructor and operation:
/// - the denominator is strictly positive
/// - numerator and denominator are coprime
/// - zero is always stored as `0/1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(Rational64);

impl Fraction {
    /// Builds `numer/denom`, reducing to lowest terms.
    ///
    /// Fails with [`ArithmeticError::ZeroDenominator`] when `denom == 0`.
    pub fn new(numer: i64, denom: i64) -> Result<Self, ArithmeticError> {
        if denom == 0 {
            return Err(ArithmeticError::ZeroDenominator);
        }
        if numer == 0 {
            return Ok(Self::zero());
        }

        // Widen so that negating or reducing i64::MIN cannot overflow.
        let (mut n, mut d) = (i128::from(numer), i128::from(denom));
        if d < 0 {
            n = -n;
            d = -d;
        }
        let g = n.abs().gcd(&d);
        n /= g;
        d /= g;

        let numer = i64::try_from(n).map_err(|_| ArithmeticError::Overflow)?;
        let denom = i64::try_from(d).map_err(|_| ArithmeticError::Overflow)?;
        Ok(Fraction(Rational64::new_raw(numer, denom)))
    }

    pub fn from_integer(n: i64) -> Self {
        Fraction(Rational64::from_integer(n))
    }

    pub fn zero() -> Self {
        Fraction(Rational64::zero())
    }

    pub fn one() -> Self {
        Fraction(Rational64::one())
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Nearest `f64`, for diagnostics and numeric spot checks.
    pub fn to_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }

    pub fn checked_add(&self, rhs: &Fraction) -> Result<Fraction, ArithmeticError> {
        self.0
            .checked_add(&rhs.0)
            .map(Fraction)
            .ok_or(ArithmeticError::Overflow)
    }

    pub fn checked_sub(&self, rhs: &Fraction) -> Result<Fraction, ArithmeticError> {
        self.0
            .checked_sub(&rhs.0)
            .map(Fraction)
            .ok_or(ArithmeticError::Overflow)
    }

    pub fn checked_mul(&self, rhs: &Fraction) -> Result<Fraction, ArithmeticError> {
        self.0
            .checked_mul(&rhs.0)
            .map(Fraction)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Exact division. Dividing by the zero fraction is an error.
    pub fn checked_div(&self, rhs: &Fraction) -> Result<Fraction, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.0
            .checked_div(&rhs.0)
            .map(Fraction)
            .ok_or(ArithmeticError::Overflow)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 + rhs.0)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 - rhs.0)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 * rhs.0)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_new_reduces() {
        let f = frac(6, 8);
        assert_eq!((f.numer(), f.denom()), (3, 4));
    }

    #[test]
    fn test_new_moves_sign_to_numerator() {
        let f = frac(3, -9);
        assert_eq!((f.numer(), f.denom()), (-1, 3));
        let g = frac(-4, -6);
        assert_eq!((g.numer(), g.denom()), (2, 3));
    }

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(frac(0, -17), Fraction::zero());
        assert_eq!(frac(0, 5).denom(), 1);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert_eq!(Fraction::new(1, 0), Err(ArithmeticError::ZeroDenominator));
        assert_eq!(Fraction::new(0, 0), Err(ArithmeticError::ZeroDenominator));
    }

    #[test]
    fn test_extreme_values_do_not_panic() {
        assert_eq!(Fraction::new(i64::MIN, -1), Err(ArithmeticError::Overflow));
        let f = frac(i64::MIN, i64::MIN);
        assert!(f.is_one());
        let g = frac(i64::MIN, 2);
        assert_eq!(g.numer(), i64::MIN / 2);
    }

    #[test]
    fn test_arithmetic() {
        let half = frac(1, 2);
        let third = frac(1, 3);
        assert_eq!(half + third, frac(5, 6));
        assert_eq!(half - third, frac(1, 6));
        assert_eq!(half * third, frac(1, 6));
        assert_eq!(-half, frac(-1, 2));
        assert_eq!(half.checked_div(&third), Ok(frac(3, 2)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Fraction::one().checked_div(&Fraction::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_overflow() {
        let big = Fraction::from_integer(i64::MAX);
        assert_eq!(big.checked_add(&Fraction::one()), Err(ArithmeticError::Overflow));
        assert_eq!(
            Fraction::from_integer(i64::MIN).checked_sub(&Fraction::one()),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_ordering() {
        let a = frac(1, 3);
        let b = frac(1, 2);
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert!(frac(-1, 2) < Fraction::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(3, 7).to_string(), "3/7");
        assert_eq!(frac(-3, 7).to_string(), "-3/7");
        assert_eq!(frac(8, 4).to_string(), "2");
        assert_eq!(Fraction::zero().to_string(), "0");
    }
}
