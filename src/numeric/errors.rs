// ============================================================================
// Ratio Errors
// Error taxonomy for canonical rational arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or combining ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// A zero denominator was supplied, or a zero ratio was inverted
    DivisionByZero,
    /// An intermediate or final value does not fit in i64
    Overflow,
    /// A negative operand reached the GCD routine
    InvalidInput,
    /// Dynamic comparison against a value that is not a ratio
    TypeMismatch,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioError::DivisionByZero => write!(f, "division by zero"),
            RatioError::Overflow => {
                write!(f, "arithmetic overflow: result does not fit in a 64-bit ratio")
            },
            RatioError::InvalidInput => {
                write!(f, "invalid input: gcd operands must be non-negative")
            },
            RatioError::TypeMismatch => write!(f, "type mismatch: object must be of type Ratio"),
        }
    }
}

impl std::error::Error for RatioError {}

/// Result type alias for ratio operations
pub type RatioResult<T> = Result<T, RatioError>;
