// ============================================================================
// Ratio Rendering
// Textual rendering policy for ratios
// ============================================================================

use crate::numeric::Ratio;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a ratio is written out as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderStyle {
    /// Whole numbers render as just the numerator ("3"), others as "n/d".
    /// Used by `Display`.
    #[default]
    Compact,

    /// Always "n/d", including "3/1".
    Fraction,
}

/// Display adapter returned by [`Ratio::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
    ratio: Ratio,
    style: RenderStyle,
}

impl Ratio {
    /// Render with an explicit style.
    ///
    /// # Example
    /// ```
    /// use canonical_ratio::domain::RenderStyle;
    /// use canonical_ratio::numeric::Ratio;
    ///
    /// let three = Ratio::from(3);
    /// assert_eq!(three.render(RenderStyle::Compact).to_string(), "3");
    /// assert_eq!(three.render(RenderStyle::Fraction).to_string(), "3/1");
    /// ```
    #[inline]
    pub fn render(self, style: RenderStyle) -> Rendered {
        Rendered { ratio: self, style }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ratio = self.ratio;
        match self.style {
            RenderStyle::Compact if ratio.is_integer() => write!(f, "{}", ratio.numerator()),
            _ => write!(f, "{}/{}", ratio.numerator(), ratio.denominator()),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(RenderStyle::Compact), f)
    }
}
