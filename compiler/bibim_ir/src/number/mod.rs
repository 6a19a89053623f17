//! Exact rational numbers.
//!
//! Every Bibim number is a fraction of two arbitrary precision integers.
//! Construction reduces by the gcd and moves the sign onto the numerator,
//! so structural equality is numeric equality.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Construction failed because the denominator was zero.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("zero cannot be a denominator")]
pub struct ZeroDenominator;

/// A reduced fraction `numerator / denominator`.
///
/// # Invariants
///
/// - `denominator > 0`
/// - `gcd(numerator, denominator) == 1`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Number {
    numerator: BigInt,
    denominator: BigInt,
}

impl Number {
    /// Create a number from a numerator and denominator.
    ///
    /// Fails only when `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, ZeroDenominator> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Create an integer (`n/1`).
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Number {
            numerator: n.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::integer(0)
    }

    pub fn one() -> Self {
        Self::integer(1)
    }

    /// `1` for true, `0` for false. Logic and comparison results use this.
    pub fn from_bool(value: bool) -> Self {
        if value {
            Self::one()
        } else {
            Self::zero()
        }
    }

    /// Reduce a fraction whose denominator is already known to be nonzero.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        if denominator.is_one() {
            return Number {
                numerator,
                denominator,
            };
        }
        // `gcd` is non-negative and nonzero here since the denominator is nonzero.
        let divisor = numerator.gcd(&denominator);
        let mut numerator = numerator / &divisor;
        let mut denominator = denominator / &divisor;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Number {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// The denominator as a new `Number` (the `^` operator).
    pub fn denominator_number(&self) -> Number {
        Self::integer(self.denominator.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Interpret an integral number as a Unicode scalar value.
    pub fn to_char(&self) -> Option<char> {
        if !self.is_integer() {
            return None;
        }
        self.numerator.to_u32().and_then(char::from_u32)
    }

    #[must_use]
    pub fn neg(&self) -> Number {
        Number {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    #[must_use]
    pub fn add(&self, other: &Number) -> Number {
        Self::reduced(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    #[must_use]
    pub fn sub(&self, other: &Number) -> Number {
        self.add(&other.neg())
    }

    #[must_use]
    pub fn mul(&self, other: &Number) -> Number {
        Self::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Cross construction: `(a.n * b.d) / (a.d * b.n)`.
    pub fn div(&self, other: &Number) -> Result<Number, ZeroDenominator> {
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// One iff both operands are nonzero.
    #[must_use]
    pub fn and(&self, other: &Number) -> Number {
        Self::from_bool(!self.is_zero() && !other.is_zero())
    }

    /// One if `self` is nonzero, otherwise the boolean cast of `other`.
    #[must_use]
    pub fn or(&self, other: &Number) -> Number {
        if self.is_zero() {
            other.bool_cast()
        } else {
            Self::one()
        }
    }

    #[must_use]
    pub fn not(&self) -> Number {
        Self::from_bool(self.is_zero())
    }

    /// Zero stays zero, anything else becomes one.
    #[must_use]
    pub fn bool_cast(&self) -> Number {
        Self::from_bool(!self.is_zero())
    }

    #[must_use]
    pub fn eq_number(&self, other: &Number) -> Number {
        Self::from_bool(self == other)
    }

    #[must_use]
    pub fn gt_number(&self, other: &Number) -> Number {
        Self::from_bool(self > other)
    }

    #[must_use]
    pub fn lt_number(&self, other: &Number) -> Number {
        Self::from_bool(self < other)
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::integer(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
