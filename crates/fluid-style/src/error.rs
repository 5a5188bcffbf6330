//! Errors from configuration parsing and rule building.

use fluid_scale::FluidError;

/// Errors raised while resolving a typography configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The JSON configuration could not be parsed.
    Config(String),
    /// A scale or viewport validation failure.
    Scale(FluidError),
    /// A custom scale supplied a line height that is not a finite positive number.
    InvalidLineHeight { name: String, value: f64 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Scale(err) => write!(f, "{err}"),
            Self::InvalidLineHeight { name, value } => {
                write!(f, "invalid line height {value} for scale '{name}'")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scale(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FluidError> for Error {
    fn from(err: FluidError) -> Self {
        Self::Scale(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
