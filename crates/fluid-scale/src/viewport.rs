//! Viewport width bounds for fluid interpolation.

use crate::error::FluidError;

/// Default lower bound (a small phone).
pub const DEFAULT_MIN_VIEWPORT_PX: f64 = 375.0;
/// Default upper bound (a laptop display).
pub const DEFAULT_MAX_VIEWPORT_PX: f64 = 1440.0;

/// The viewport width range over which a size interpolates.
///
/// Only constructible through [`ViewportBounds::new`], so a value of this
/// type always satisfies `0 < min < max`. The formula generator relies on
/// that to stay infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    min_width_px: f64,
    max_width_px: f64,
}

impl ViewportBounds {
    /// Default bounds: 375px to 1440px.
    pub const DEFAULT: Self = Self {
        min_width_px: DEFAULT_MIN_VIEWPORT_PX,
        max_width_px: DEFAULT_MAX_VIEWPORT_PX,
    };

    /// Validate a width range.
    ///
    /// Fails with [`FluidError::InvalidViewportBounds`] unless both widths
    /// are finite, positive, and `min_width_px < max_width_px`.
    pub fn new(min_width_px: f64, max_width_px: f64) -> Result<Self, FluidError> {
        let valid = min_width_px.is_finite()
            && max_width_px.is_finite()
            && min_width_px > 0.0
            && min_width_px < max_width_px;
        if !valid {
            return Err(FluidError::InvalidViewportBounds {
                min: min_width_px,
                max: max_width_px,
            });
        }
        Ok(Self {
            min_width_px,
            max_width_px,
        })
    }

    /// Resolve optional bounds, filling gaps with the defaults.
    pub fn from_options(
        min_width_px: Option<f64>,
        max_width_px: Option<f64>,
    ) -> Result<Self, FluidError> {
        Self::new(
            min_width_px.unwrap_or(DEFAULT_MIN_VIEWPORT_PX),
            max_width_px.unwrap_or(DEFAULT_MAX_VIEWPORT_PX),
        )
    }

    #[inline]
    pub const fn min_width_px(&self) -> f64 {
        self.min_width_px
    }

    #[inline]
    pub const fn max_width_px(&self) -> f64 {
        self.max_width_px
    }
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let b = ViewportBounds::default();
        assert_eq!(b.min_width_px(), 375.0);
        assert_eq!(b.max_width_px(), 1440.0);
    }

    #[test]
    fn test_equal_bounds_rejected() {
        assert_eq!(
            ViewportBounds::new(800.0, 800.0),
            Err(FluidError::InvalidViewportBounds {
                min: 800.0,
                max: 800.0
            })
        );
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(ViewportBounds::new(1440.0, 375.0).is_err());
    }

    #[test]
    fn test_non_positive_or_non_finite_rejected() {
        assert!(ViewportBounds::new(0.0, 1440.0).is_err());
        assert!(ViewportBounds::new(-10.0, 1440.0).is_err());
        assert!(ViewportBounds::new(f64::NAN, 1440.0).is_err());
        assert!(ViewportBounds::new(375.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_options_fills_defaults() {
        let b = ViewportBounds::from_options(Some(320.0), None).unwrap();
        assert_eq!(b.min_width_px(), 320.0);
        assert_eq!(b.max_width_px(), DEFAULT_MAX_VIEWPORT_PX);

        let b = ViewportBounds::from_options(None, None).unwrap();
        assert_eq!(b, ViewportBounds::DEFAULT);
    }

    #[test]
    fn test_from_options_validates_against_defaults() {
        // A lone max below the default min is still an inverted range.
        assert!(ViewportBounds::from_options(None, Some(300.0)).is_err());
    }
}
