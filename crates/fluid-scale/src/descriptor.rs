//! Pixel size descriptors.
//!
//! A descriptor holds two or three pixel sizes: the size at the minimum
//! viewport, an optional reference size, and the size at the maximum
//! viewport.
//!
//! # Invariants
//!
//! 1. Every point is finite and non-negative.
//! 2. Points never decrease from first to last.
//! 3. Only the first and last points take part in interpolation. The
//!    reference point is validated and exported but never changes a formula.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Why a size descriptor was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorError {
    /// The descriptor did not have two or three points.
    PointCount(usize),
    /// A point was NaN or infinite.
    NotFinite,
    /// A point was below zero.
    Negative(f64),
    /// A point was smaller than the one before it.
    Decreasing { from: f64, to: f64 },
}

impl std::fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointCount(n) => write!(f, "expected 2 or 3 points, got {n}"),
            Self::NotFinite => write!(f, "sizes must be finite numbers"),
            Self::Negative(v) => write!(f, "size {v}px is negative"),
            Self::Decreasing { from, to } => {
                write!(f, "sizes must not decrease ({from}px is followed by {to}px)")
            }
        }
    }
}

impl std::error::Error for DescriptorError {}

/// Pixel sizes bound to a scale name at the viewport extremes.
///
/// # Example
///
/// ```
/// use fluid_scale::SizeDescriptor;
///
/// let h1 = SizeDescriptor::new(28.0, 36.0).unwrap();
/// assert_eq!(h1.min_px(), 28.0);
/// assert_eq!(h1.max_px(), 36.0);
/// assert_eq!(h1.preferred_px(), None);
///
/// assert!(SizeDescriptor::from_points(&[36.0, 28.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDescriptor {
    min: f64,
    preferred: Option<f64>,
    max: f64,
}

impl SizeDescriptor {
    /// Two-point descriptor.
    pub fn new(min_px: f64, max_px: f64) -> Result<Self, DescriptorError> {
        Self::from_points(&[min_px, max_px])
    }

    /// Three-point descriptor with a reference size between the extremes.
    pub fn with_preferred(
        min_px: f64,
        preferred_px: f64,
        max_px: f64,
    ) -> Result<Self, DescriptorError> {
        Self::from_points(&[min_px, preferred_px, max_px])
    }

    /// Validate a raw point list.
    pub fn from_points(points: &[f64]) -> Result<Self, DescriptorError> {
        let (min, preferred, max) = match *points {
            [min, max] => (min, None, max),
            [min, preferred, max] => (min, Some(preferred), max),
            _ => return Err(DescriptorError::PointCount(points.len())),
        };

        let mut previous: Option<f64> = None;
        for &point in points {
            if !point.is_finite() {
                return Err(DescriptorError::NotFinite);
            }
            if point < 0.0 {
                return Err(DescriptorError::Negative(point));
            }
            match previous {
                Some(from) if point < from => {
                    return Err(DescriptorError::Decreasing { from, to: point });
                }
                _ => previous = Some(point),
            }
        }

        Ok(Self {
            min,
            preferred,
            max,
        })
    }

    /// Build a descriptor without validation, for the compiled-in base table.
    pub(crate) const fn fixed(min: f64, preferred: Option<f64>, max: f64) -> Self {
        Self {
            min,
            preferred,
            max,
        }
    }

    /// Size at the minimum viewport width.
    #[inline]
    pub const fn min_px(&self) -> f64 {
        self.min
    }

    /// Optional reference size.
    #[inline]
    pub const fn preferred_px(&self) -> Option<f64> {
        self.preferred
    }

    /// Size at the maximum viewport width.
    #[inline]
    pub const fn max_px(&self) -> f64 {
        self.max
    }

    /// Number of points (2 or 3).
    #[inline]
    pub const fn point_count(&self) -> usize {
        if self.preferred.is_some() { 3 } else { 2 }
    }

    /// The points in order, as they were supplied.
    pub fn points(&self) -> impl Iterator<Item = f64> {
        std::iter::once(self.min)
            .chain(self.preferred)
            .chain(std::iter::once(self.max))
    }
}

impl TryFrom<&[f64]> for SizeDescriptor {
    type Error = DescriptorError;

    fn try_from(points: &[f64]) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl TryFrom<[f64; 2]> for SizeDescriptor {
    type Error = DescriptorError;

    fn try_from(points: [f64; 2]) -> Result<Self, Self::Error> {
        Self::from_points(&points)
    }
}

impl TryFrom<[f64; 3]> for SizeDescriptor {
    type Error = DescriptorError;

    fn try_from(points: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_points(&points)
    }
}

impl Serialize for SizeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.point_count()))?;
        for point in self.points() {
            seq.serialize_element(&point)?;
        }
        seq.end()
    }
}
