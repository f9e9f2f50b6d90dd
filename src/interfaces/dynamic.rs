// ============================================================================
// Dynamic Comparison Interface
// Ordering and equality against untyped values
// ============================================================================

use crate::numeric::{Ratio, RatioError, RatioResult};
use std::any::Any;
use std::cmp::Ordering;

/// Comparison against a value whose type is only known at runtime.
///
/// Intended for interop with heterogeneous collections; typed code should use
/// `Ord` or [`Ratio::checked_cmp`] directly.
pub trait DynCompare {
    /// Compare against an optional untyped value.
    ///
    /// An absent value orders below every ratio.
    ///
    /// # Errors
    /// - `TypeMismatch` if `other` is present but not the same type
    /// - any error of the typed comparison
    fn compare_dyn(&self, other: Option<&dyn Any>) -> RatioResult<Ordering>;

    /// Equality against an untyped value; values of other types are unequal.
    fn equals_dyn(&self, other: &dyn Any) -> bool;
}

impl DynCompare for Ratio {
    fn compare_dyn(&self, other: Option<&dyn Any>) -> RatioResult<Ordering> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };

        match other.downcast_ref::<Ratio>() {
            Some(ratio) => self.checked_cmp(*ratio),
            None => {
                tracing::trace!(ratio = %self, "dynamic comparison against a non-ratio value");
                Err(RatioError::TypeMismatch)
            }
        }
    }

    fn equals_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Ratio>()
            .is_some_and(|ratio| ratio == self)
    }
}
