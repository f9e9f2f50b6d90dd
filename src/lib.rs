// ============================================================================
// Canonical Ratio Library
// Exact fixed-width rational numbers with overflow-checked arithmetic
// ============================================================================

//! # Canonical Ratio
//!
//! An exact rational number type over `i64`, always stored in lowest terms.
//!
//! ## Features
//!
//! - **Canonical form**: positive denominator, coprime terms, zero is `0/1`
//! - **Binary GCD reduction**: division-free, works on the full `i64` range
//! - **Checked arithmetic**: every operation reports `Overflow` or
//!   `DivisionByZero` instead of wrapping
//! - **Total ordering** that never overflows, plus a subtraction-based
//!   `checked_cmp`
//! - **Zero default**: `Ratio::default()` is `0/1`
//!
//! ## Example
//!
//! ```rust
//! use canonical_ratio::prelude::*;
//!
//! let a = Ratio::new(1, 2)?;
//! let b = Ratio::new(-2, -6)?; // reduces to 1/3
//!
//! let sum = a.checked_add(b)?;
//! assert_eq!(sum.to_string(), "5/6");
//!
//! let whole = Ratio::from(3);
//! assert_eq!(whole.render(RenderStyle::Fraction).to_string(), "3/1");
//!
//! assert_eq!(Ratio::new(1, 0), Err(RatioError::DivisionByZero));
//! assert_eq!(Ratio::MAX.checked_increment(), Err(RatioError::Overflow));
//! # Ok::<(), RatioError>(())
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{RenderStyle, Rendered};
    pub use crate::interfaces::DynCompare;
    pub use crate::numeric::{gcd, lcm, Ratio, RatioError, RatioResult};
}
