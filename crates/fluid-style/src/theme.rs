//! Theme-value export of the raw effective scale.

use fluid_scale::ScaleTable;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::config::FluidTypeConfig;
use crate::error::Error;
use crate::resolved::ResolvedTypography;

/// Namespace key the scale is exported under.
pub const THEME_NAMESPACE: &str = "fluidTypography";

/// The effective scale table under [`THEME_NAMESPACE`].
///
/// Descriptors are exported as given (two or three pixel values); no
/// formula is computed here.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeExtension {
    scale: ScaleTable,
}

impl ThemeExtension {
    #[must_use]
    pub fn new(scale: ScaleTable) -> Self {
        Self { scale }
    }

    #[must_use]
    pub fn namespace(&self) -> &'static str {
        THEME_NAMESPACE
    }

    #[must_use]
    pub fn scale(&self) -> &ScaleTable {
        &self.scale
    }
}

impl Serialize for ThemeExtension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(THEME_NAMESPACE, &self.scale)?;
        map.end()
    }
}

/// Resolve `config` and export its effective scale.
pub fn theme(config: &FluidTypeConfig) -> Result<ThemeExtension, Error> {
    Ok(ResolvedTypography::resolve(config)?.theme())
}
