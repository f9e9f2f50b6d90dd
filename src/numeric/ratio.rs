// ============================================================================
// Canonical Ratio
// Fixed-width rational number kept in lowest terms with checked arithmetic
// ============================================================================

use super::errors::{RatioError, RatioResult};
use super::gcd::{binary_gcd, lcm};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number `numerator / denominator` over `i64`.
///
/// Every live value is canonical:
/// - `denominator >= 1`, the sign lives in the numerator
/// - `gcd(|numerator|, denominator) == 1`
/// - zero is always `0/1`
///
/// Because the representation is unique, equality and hashing compare the
/// stored fields directly.
///
/// The denominator is stored shifted by one so that the all-zero bit pattern
/// (and therefore `Ratio::default()`) is `0/1`.
///
/// # Value Range
/// - Numerator: `i64::MIN..=i64::MAX`
/// - Denominator: `1..=i64::MAX`
///
/// # Example
/// ```
/// use canonical_ratio::numeric::Ratio;
///
/// let third = Ratio::new(2, 6)?;
/// assert_eq!(third.numerator(), 1);
/// assert_eq!(third.denominator(), 3);
///
/// let sum = third.checked_add(Ratio::new(1, 2)?)?;
/// assert_eq!(sum, Ratio::new(5, 6)?);
/// # Ok::<(), canonical_ratio::numeric::RatioError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RatioParts", into = "RatioParts")
)]
pub struct Ratio {
    numerator: i64,
    denominator_less_one: i64,
}

impl Ratio {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_reduced(0, 1);

    /// One (1/1)
    pub const ONE: Self = Self::from_reduced(1, 1);

    /// Largest whole value
    pub const MAX: Self = Self::from_reduced(i64::MAX, 1);

    /// Smallest whole value
    pub const MIN: Self = Self::from_reduced(i64::MIN, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a pair that is already in canonical form.
    ///
    /// Callers guarantee `denominator >= 1` and coprime operands.
    #[inline]
    const fn from_reduced(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator_less_one: denominator - 1,
        }
    }

    /// Create the canonical ratio for `numerator / denominator`.
    ///
    /// The denominator may have either sign; the sign of the result is the
    /// product of the operand signs. Reduction works on unsigned magnitudes,
    /// so `i64::MIN` operands are accepted whenever the reduced value fits.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator == 0`
    /// - `Overflow` if the reduced numerator or denominator does not fit in
    ///   i64 (e.g. `1 / i64::MIN`, whose denominator would be `2^63`)
    pub fn new(numerator: i64, denominator: i64) -> RatioResult<Self> {
        if denominator == 0 {
            tracing::trace!(numerator, "ratio constructed with a zero denominator");
            return Err(RatioError::DivisionByZero);
        }

        let negative = (numerator < 0) != (denominator < 0);
        let numerator_abs = numerator.unsigned_abs();
        let denominator_abs = denominator.unsigned_abs();

        // denominator_abs > 0, so the divisor is never zero
        let divisor = binary_gcd(numerator_abs, denominator_abs);
        let reduced_numerator = (numerator_abs / divisor) as i128;
        let reduced_denominator = denominator_abs / divisor;

        let signed_numerator = if negative {
            -reduced_numerator
        } else {
            reduced_numerator
        };

        match (
            i64::try_from(signed_numerator),
            i64::try_from(reduced_denominator),
        ) {
            (Ok(n), Ok(d)) => Ok(Self::from_reduced(n, d)),
            _ => Err(overflow("new", (numerator, denominator))),
        }
    }

    /// Create a whole-number ratio `value / 1`.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self::from_reduced(value, 1)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The signed numerator.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// The denominator, always at least 1.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator_less_one + 1
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// Check if value is a whole number.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denominator_less_one == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.numerator > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// -1, 0 or 1 according to the sign.
    #[inline]
    pub const fn signum(self) -> i64 {
        self.numerator.signum()
    }

    /// Approximate value as `f64`.
    ///
    /// Never fails; precision is lost for large operands.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator() as f64
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> RatioResult<Self> {
        self.numerator
            .checked_neg()
            .map(|n| Self::from_reduced(n, self.denominator()))
            .ok_or_else(|| overflow("neg", self))
    }

    /// Checked absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_abs(self) -> RatioResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Multiplicative inverse, sign preserved.
    ///
    /// # Errors
    /// - `DivisionByZero` if the ratio is zero
    /// - `Overflow` if the numerator is `i64::MIN`
    pub fn reciprocal(self) -> RatioResult<Self> {
        if self.is_zero() {
            tracing::trace!("reciprocal of zero requested");
            return Err(RatioError::DivisionByZero);
        }

        let denominator = self
            .numerator
            .checked_abs()
            .ok_or_else(|| overflow("reciprocal", self))?;
        // |signum| == 1 and denominator() <= i64::MAX
        let numerator = self.denominator() * self.numerator.signum();
        Ok(Self::from_reduced(numerator, denominator))
    }

    /// Add one whole unit.
    ///
    /// # Errors
    /// Returns `Overflow` if `numerator + denominator` exceeds i64.
    pub fn checked_increment(self) -> RatioResult<Self> {
        let numerator = self
            .numerator
            .checked_add(self.denominator())
            .ok_or_else(|| overflow("increment", self))?;
        Self::new(numerator, self.denominator())
    }

    /// Subtract one whole unit.
    ///
    /// # Errors
    /// Returns `Overflow` if `numerator - denominator` is below i64::MIN.
    pub fn checked_decrement(self) -> RatioResult<Self> {
        let numerator = self
            .numerator
            .checked_sub(self.denominator())
            .ok_or_else(|| overflow("decrement", self))?;
        Self::new(numerator, self.denominator())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition over the least common denominator.
    ///
    /// # Errors
    /// Returns `Overflow` if the common denominator, either scaled
    /// numerator, or their sum does not fit in i64.
    pub fn checked_add(self, rhs: Self) -> RatioResult<Self> {
        let (common, divisor) = lcm(self.denominator(), rhs.denominator())
            .map_err(|_| overflow("add", (self, rhs)))?;

        let left = self.numerator.checked_mul(rhs.denominator() / divisor);
        let right = rhs.numerator.checked_mul(self.denominator() / divisor);
        let sum = left
            .zip(right)
            .and_then(|(l, r)| l.checked_add(r))
            .ok_or_else(|| overflow("add", (self, rhs)))?;

        Self::new(sum, common)
    }

    /// Checked subtraction, defined as `self + (-rhs)`.
    ///
    /// # Errors
    /// Returns `Overflow` if `rhs` cannot be negated or the sum overflows.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> RatioResult<Self> {
        self.checked_add(rhs.checked_neg()?)
    }

    /// Checked multiplication.
    ///
    /// Common factors between each numerator and the opposite denominator
    /// are cancelled before multiplying, so only products whose reduced
    /// result is out of range fail.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator or denominator product exceeds i64.
    pub fn checked_mul(self, rhs: Self) -> RatioResult<Self> {
        // Both divisors are >= 1 and <= i64::MAX since denominators are.
        let left_cross =
            binary_gcd(self.numerator.unsigned_abs(), rhs.denominator() as u64) as i64;
        let right_cross =
            binary_gcd(rhs.numerator.unsigned_abs(), self.denominator() as u64) as i64;

        let numerator = (self.numerator / left_cross).checked_mul(rhs.numerator / right_cross);
        let denominator =
            (self.denominator() / right_cross).checked_mul(rhs.denominator() / left_cross);

        match (numerator, denominator) {
            (Some(n), Some(d)) => Self::new(n, d),
            _ => Err(overflow("mul", (self, rhs))),
        }
    }

    /// Checked division, defined as `self * rhs.reciprocal()`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the reciprocal or the product overflows
    #[inline]
    pub fn checked_div(self, rhs: Self) -> RatioResult<Self> {
        self.checked_mul(rhs.reciprocal()?)
    }

    /// Sum an iterator of ratios, stopping at the first error.
    pub fn checked_sum<I>(values: I) -> RatioResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::ZERO, |acc, value| acc.checked_add(value))
    }

    /// Multiply an iterator of ratios, stopping at the first error.
    pub fn checked_product<I>(values: I) -> RatioResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::ONE, |acc, value| acc.checked_mul(value))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare by the sign of `(self - other).numerator`.
    ///
    /// This goes through subtraction, so comparing ratios of extreme
    /// magnitude can fail with `Overflow`. The `Ord` implementation compares
    /// widened cross products instead and never fails; both agree whenever
    /// this method succeeds.
    ///
    /// # Errors
    /// Returns `Overflow` if the subtraction overflows.
    #[inline]
    pub fn checked_cmp(self, other: Self) -> RatioResult<Ordering> {
        Ok(self.checked_sub(other)?.numerator.cmp(&0))
    }
}

#[cold]
fn overflow(operation: &'static str, operands: impl fmt::Debug) -> RatioError {
    tracing::trace!(operation, ?operands, "ratio arithmetic overflowed");
    RatioError::Overflow
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Ratio {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    /// Total order by `a/b <=> c/d  iff  a*d <=> c*b` in i128.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.numerator as i128 * other.denominator() as i128;
        let right = other.numerator as i128 * self.denominator() as i128;
        left.cmp(&right)
    }
}

impl fmt::Debug for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio({}/{})", self.numerator, self.denominator())
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Wire shape of a ratio; deserialization re-canonicalizes through `Ratio::new`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RatioParts {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RatioParts> for Ratio {
    type Error = RatioError;

    fn try_from(parts: RatioParts) -> Result<Self, Self::Error> {
        Ratio::new(parts.numerator, parts.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<Ratio> for RatioParts {
    fn from(ratio: Ratio) -> Self {
        Self {
            numerator: ratio.numerator(),
            denominator: ratio.denominator(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
