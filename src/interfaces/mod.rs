// ============================================================================
// Interfaces Module
// Entry points for callers working with untyped values
// ============================================================================

pub mod dynamic;

pub use dynamic::DynCompare;
