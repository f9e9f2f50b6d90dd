// ============================================================================
// Greatest Common Divisor
// Division-free binary GCD used by ratio reduction
// ============================================================================

use super::errors::{RatioError, RatioResult};

/// Binary (Stein) GCD over unsigned magnitudes.
///
/// `gcd(0, n) == n` for every `n`, so reducing `0/d` yields `0/1`.
/// Works on `u64` so that `|i64::MIN|` can be reduced without overflow.
#[inline]
pub(crate) fn binary_gcd(a: u64, b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let i = a.trailing_zeros();
    let k = b.trailing_zeros();
    let x = a >> i;
    let y = b >> k;

    let mut max = x.max(y);
    let mut min = x.min(y);
    while min != 0 {
        max -= min;
        if max != 0 {
            max >>= max.trailing_zeros();
        }
        if max < min {
            std::mem::swap(&mut max, &mut min);
        }
    }

    max << i.min(k)
}

/// Greatest common divisor of two non-negative integers.
///
/// # Errors
/// Returns `InvalidInput` if either operand is negative.
///
/// # Example
/// ```
/// use canonical_ratio::numeric::gcd;
///
/// assert_eq!(gcd(48, 18), Ok(6));
/// assert_eq!(gcd(0, 7), Ok(7));
/// assert!(gcd(-4, 2).is_err());
/// ```
pub fn gcd(a: i64, b: i64) -> RatioResult<i64> {
    if a < 0 || b < 0 {
        tracing::trace!(a, b, "gcd called with a negative operand");
        return Err(RatioError::InvalidInput);
    }
    // Both operands fit in i64, so their divisor does too.
    Ok(binary_gcd(a as u64, b as u64) as i64)
}

/// Least common multiple of two non-negative integers.
///
/// Returns `(lcm, gcd)` so callers can reuse the divisor when cross-scaling.
/// `lcm(0, 0)` is defined as `(0, 0)`.
///
/// # Errors
/// - `InvalidInput` if either operand is negative
/// - `Overflow` if the multiple does not fit in i64
pub fn lcm(a: i64, b: i64) -> RatioResult<(i64, i64)> {
    let divisor = gcd(a, b)?;
    if divisor == 0 {
        return Ok((0, 0));
    }

    let multiple = (a / divisor)
        .checked_mul(b)
        .ok_or(RatioError::Overflow)?;
    Ok((multiple, divisor))
}
