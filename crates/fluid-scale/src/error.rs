//! Validation errors for scale tables and viewport bounds.

use crate::descriptor::DescriptorError;

/// Errors raised while building scale tables or viewport bounds.
///
/// Every variant is fatal for the configuration that produced it: callers
/// are expected to abort the whole build rather than drop the offending
/// entry, so no partial scale ever reaches an adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The minimum viewport width is not strictly below the maximum, or one
    /// of the bounds is not a finite positive number.
    InvalidViewportBounds { min: f64, max: f64 },
    /// A size descriptor bound to `name` was rejected.
    InvalidScaleDescriptor {
        name: String,
        reason: DescriptorError,
    },
    /// A scale name was empty.
    InvalidScaleName,
}

impl std::fmt::Display for FluidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidViewportBounds { min, max } => write!(
                f,
                "invalid viewport bounds: min width {min}px must be positive and below max width {max}px"
            ),
            Self::InvalidScaleDescriptor { name, reason } => {
                write!(f, "invalid size descriptor for scale '{name}': {reason}")
            }
            Self::InvalidScaleName => write!(f, "scale names must not be empty"),
        }
    }
}

impl std::error::Error for FluidError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidScaleDescriptor { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_names_the_scale() {
        let err = FluidError::InvalidScaleDescriptor {
            name: "h1".into(),
            reason: DescriptorError::PointCount(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("'h1'"), "{msg}");
        assert!(msg.contains("expected 2 or 3 points"), "{msg}");
    }

    #[test]
    fn test_descriptor_error_is_source() {
        let err = FluidError::InvalidScaleDescriptor {
            name: "body".into(),
            reason: DescriptorError::Negative(-1.0),
        };
        assert!(err.source().is_some());
        assert!(
            FluidError::InvalidViewportBounds {
                min: 10.0,
                max: 10.0
            }
            .source()
            .is_none()
        );
    }
}
