// ============================================================================
// Domain Module
// Presentation settings for ratios
// ============================================================================

pub mod render;

pub use render::{RenderStyle, Rendered};
