// ============================================================================
// Numeric Module
// Exact fixed-width rational arithmetic
// ============================================================================
//
// This module provides:
// - Ratio: canonical numerator/denominator pair over i64
// - gcd/lcm: binary GCD used for reduction
// - RatioError: Error types for ratio operations
//
// Design principles:
// - Every value is in lowest terms with a positive denominator
// - All arithmetic is checked and returns Result (operators panic)
// - Default value is 0/1
// - No floating-point except the explicit approximation

mod errors;
mod gcd;
mod ops;
mod ratio;

#[cfg(test)]
mod properties;

pub use errors::{RatioError, RatioResult};
pub use gcd::{gcd, lcm};
pub use ratio::Ratio;
