//! Class-conflict group for external class deduplication tools.
//!
//! Every generated class sets the same properties, so at most one of them
//! should survive on an element. The group table tells a deduplicator that
//! all of them conflict:
//!
//! ```json
//! { "text-fluid": ["text-fluid-display-2xl", "text-fluid-h1", "..."] }
//! ```

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::config::FluidTypeConfig;
use crate::error::Error;
use crate::resolved::ResolvedTypography;
use crate::safelist::safelist_for;

/// Key of the single conflict group.
pub const CLASS_GROUP: &str = "text-fluid";

/// One conflict group listing every generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroups {
    classes: Vec<String>,
}

impl ClassGroups {
    /// Group the classes for `names`, dropping repeated names.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            classes: safelist_for(names),
        }
    }

    /// The group key.
    #[must_use]
    pub fn group(&self) -> &'static str {
        CLASS_GROUP
    }

    /// Member classes in scale order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }
}

impl Serialize for ClassGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(CLASS_GROUP, &self.classes)?;
        map.end()
    }
}

/// Resolve `config` and build its conflict group.
pub fn class_groups(config: &FluidTypeConfig) -> Result<ClassGroups, Error> {
    Ok(ResolvedTypography::resolve(config)?.class_groups())
}
