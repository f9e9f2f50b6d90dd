// ============================================================================
// Operators and Conversions
// std operator traits, widening conversions and decimal interop for Ratio
// ============================================================================

use super::errors::{RatioError, RatioResult};
use super::ratio::Ratio;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// Operators
// ============================================================================

// Infallible operators for ergonomics (panic on failure - use checked_* in production)
impl Neg for Ratio {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Ratio negation overflow")
    }
}

impl Add for Ratio {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Ratio addition overflow")
    }
}

impl Sub for Ratio {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Ratio subtraction overflow")
    }
}

impl Mul for Ratio {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Ratio multiplication overflow")
    }
}

impl Div for Ratio {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("Ratio division failed")
    }
}

// ============================================================================
// Widening Conversions
// ============================================================================

macro_rules! ratio_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Ratio {
                #[inline]
                fn from(value: $t) -> Self {
                    Ratio::from_integer(i64::from(value))
                }
            }
        )*
    };
}

ratio_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<Ratio> for f64 {
    #[inline]
    fn from(ratio: Ratio) -> Self {
        ratio.to_f64()
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Ratio {
    /// Convert a `rust_decimal::Decimal` exactly.
    ///
    /// The decimal is read as `mantissa / 10^scale` after trailing zeros are
    /// stripped, then reduced.
    ///
    /// # Errors
    /// Returns `Overflow` if the mantissa or `10^scale` does not fit in i64.
    ///
    /// # Example
    /// ```
    /// use canonical_ratio::numeric::Ratio;
    /// use rust_decimal::Decimal;
    ///
    /// let x = Ratio::from_decimal(Decimal::new(125, 2))?; // 1.25
    /// assert_eq!(x, Ratio::new(5, 4)?);
    /// # Ok::<(), canonical_ratio::numeric::RatioError>(())
    /// ```
    pub fn from_decimal(d: rust_decimal::Decimal) -> RatioResult<Self> {
        let d = d.normalize();

        let mantissa = i64::try_from(d.mantissa()).map_err(|_| {
            tracing::trace!(decimal = %d, "decimal mantissa exceeds i64");
            RatioError::Overflow
        })?;
        let scale = 10i64.checked_pow(d.scale()).ok_or_else(|| {
            tracing::trace!(decimal = %d, "decimal scale exceeds i64");
            RatioError::Overflow
        })?;

        Ratio::new(mantissa, scale)
    }
}

impl TryFrom<rust_decimal::Decimal> for Ratio {
    type Error = RatioError;

    #[inline]
    fn try_from(d: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        Ratio::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn r(n: i64, d: i64) -> Ratio {
        Ratio::new(n, d).unwrap()
    }

    #[test]
    fn test_operators() {
        assert_eq!(r(1, 3) + r(1, 3), r(2, 3));
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(r(1, 2) / r(1, 4), Ratio::from(2));
        assert_eq!(-r(1, 2), r(-1, 2));
    }

    #[test]
    #[should_panic(expected = "Ratio addition overflow")]
    fn test_add_operator_panics_on_overflow() {
        let _ = Ratio::MAX + Ratio::ONE;
    }

    #[test]
    #[should_panic(expected = "Ratio negation overflow")]
    fn test_neg_operator_panics_on_overflow() {
        let _ = -Ratio::MIN;
    }

    #[test]
    #[should_panic(expected = "Ratio division failed")]
    fn test_div_operator_panics_on_zero() {
        let _ = Ratio::ONE / Ratio::ZERO;
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Ratio::from(7i8), Ratio::from_integer(7));
        assert_eq!(Ratio::from(-7i16), Ratio::from_integer(-7));
        assert_eq!(Ratio::from(u32::MAX), Ratio::from_integer(u32::MAX as i64));
        assert_eq!(Ratio::from(i64::MIN), Ratio::MIN);
        assert_eq!(Ratio::from(0u8), Ratio::default());
        assert!(Ratio::from(42i32).is_integer());
    }

    #[test]
    fn test_into_f64() {
        let x: f64 = r(5, 8).into();
        assert_eq!(x, 0.625);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Ratio::from_decimal(Decimal::new(12345, 2)).unwrap(), r(2469, 20));
        assert_eq!(Ratio::from_decimal(Decimal::new(-5, 1)).unwrap(), r(-1, 2));
        assert_eq!(Ratio::from_decimal(Decimal::new(1500, 3)).unwrap(), r(3, 2));
        assert_eq!(Ratio::from_decimal(Decimal::ZERO).unwrap(), Ratio::ZERO);
        assert_eq!(Ratio::try_from(Decimal::from(42)).unwrap(), Ratio::from(42));
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert_eq!(Ratio::from_decimal(Decimal::MAX), Err(RatioError::Overflow));
        // 1e-20 needs a denominator of 10^20
        let tiny = Decimal::from_i128_with_scale(1, 20);
        assert_eq!(Ratio::from_decimal(tiny), Err(RatioError::Overflow));
    }
}
