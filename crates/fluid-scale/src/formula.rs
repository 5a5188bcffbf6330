//! Fluid `clamp()` formula generation.
//!
//! A formula is linear in viewport width between the two bounds and
//! clamped to the descriptor's extremes outside them:
//!
//! ```text
//! size(vw) = clamp(min, intercept + slope * vw, max)
//! ```
//!
//! All lengths are converted to `rem` against a 16px root. The slope is
//! emitted as a `vw` coefficient, which is the per-rem slope times 100
//! because `1vw` is one hundredth of the viewport width.
//!
//! # Invariants
//!
//! 1. At `bounds.min_width_px` the preferred term equals `min_px`, and at
//!    `bounds.max_width_px` it equals `max_px`.
//! 2. Only the first and last descriptor points are read.
//! 3. Every number in the emitted text carries exactly four decimals, and a
//!    value that rounds to zero is never printed as `-0.0000`.

use std::fmt;

use crate::descriptor::SizeDescriptor;
use crate::viewport::ViewportBounds;

/// Root font size used for the px to rem conversion.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Coefficients of a fluid size expression, in `rem` and `vw`.
///
/// Displaying a formula yields the CSS text:
///
/// ```
/// use fluid_scale::{FluidFormula, SizeDescriptor, ViewportBounds};
///
/// let h1 = SizeDescriptor::new(28.0, 36.0).unwrap();
/// let formula = FluidFormula::new(&h1, &ViewportBounds::default());
/// assert_eq!(
///     formula.to_string(),
///     "clamp(1.7500rem, 1.5739rem + 0.7512vw, 2.2500rem)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidFormula {
    /// Lower clamp, in rem.
    pub min_rem: f64,
    /// Preferred-term constant, in rem.
    pub intercept_rem: f64,
    /// Preferred-term coefficient, in vw.
    pub slope_vw: f64,
    /// Upper clamp, in rem.
    pub max_rem: f64,
}

impl FluidFormula {
    /// Derive the coefficients for `descriptor` across `bounds`.
    pub fn new(descriptor: &SizeDescriptor, bounds: &ViewportBounds) -> Self {
        let min = descriptor.min_px() / ROOT_FONT_SIZE_PX;
        let max = descriptor.max_px() / ROOT_FONT_SIZE_PX;
        let min_width = bounds.min_width_px() / ROOT_FONT_SIZE_PX;
        let max_width = bounds.max_width_px() / ROOT_FONT_SIZE_PX;

        // ViewportBounds guarantees max_width > min_width.
        let slope = (max - min) / (max_width - min_width);
        let intercept = min - slope * min_width;

        Self {
            min_rem: min,
            intercept_rem: intercept,
            slope_vw: slope * 100.0,
            max_rem: max,
        }
    }
}

impl fmt::Display for FluidFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clamp({}rem, {}rem + {}vw, {}rem)",
            Fixed4(self.min_rem),
            Fixed4(self.intercept_rem),
            Fixed4(self.slope_vw),
            Fixed4(self.max_rem),
        )
    }
}

/// Four-decimal fixed-point formatting without a negative zero.
///
/// Ties round away from zero, so `0.90625` prints as `0.9063`.
struct Fixed4(f64);

impl fmt::Display for Fixed4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scaled = (self.0 * 10_000.0).round();
        let value = if scaled == 0.0 { 0.0 } else { scaled / 10_000.0 };
        write!(f, "{value:.4}")
    }
}

/// Build the CSS `clamp()` text for `descriptor` across `bounds`.
pub fn formula(descriptor: &SizeDescriptor, bounds: &ViewportBounds) -> String {
    FluidFormula::new(descriptor, bounds).to_string()
}
