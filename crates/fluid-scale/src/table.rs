//! Ordered scale tables and the base/addition merger.
//!
//! # Ordering
//!
//! A table iterates in insertion order. Replacing an existing name keeps
//! the entry where it was, so merging additions over the base table keeps
//! the base ordering and appends new names in the order they were given.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty name | `insert` with `""` | [`FluidError::InvalidScaleName`] |
//! | Bad points | `insert_points` with a malformed list | [`FluidError::InvalidScaleDescriptor`] |
//! | Name collision | same name inserted twice | Later descriptor wins |

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::descriptor::SizeDescriptor;
use crate::error::FluidError;

/// The compiled-in base scale, in display order.
pub const BASE_SCALE: &[(&str, SizeDescriptor)] = &[
    ("display-2xl", SizeDescriptor::fixed(48.0, Some(60.0), 72.0)),
    ("display-xl", SizeDescriptor::fixed(40.0, Some(52.0), 64.0)),
    ("display-lg", SizeDescriptor::fixed(36.0, None, 48.0)),
    ("h1", SizeDescriptor::fixed(28.0, None, 36.0)),
    ("h2", SizeDescriptor::fixed(24.0, None, 30.0)),
    ("h3", SizeDescriptor::fixed(20.0, None, 24.0)),
    ("h4", SizeDescriptor::fixed(18.0, None, 20.0)),
    ("body-lg", SizeDescriptor::fixed(18.0, None, 20.0)),
    ("body", SizeDescriptor::fixed(16.0, None, 18.0)),
    ("body-sm", SizeDescriptor::fixed(14.0, None, 16.0)),
    ("caption", SizeDescriptor::fixed(12.0, None, 13.0)),
    ("overline", SizeDescriptor::fixed(11.0, None, 12.0)),
];

/// Ordered mapping from scale name to size descriptor.
///
/// # Example
///
/// ```
/// use fluid_scale::{ScaleTable, merge};
///
/// let mut additions = ScaleTable::new();
/// additions.insert_points("h1", &[30.0, 40.0]).unwrap();
/// additions.insert_points("hero", &[56.0, 96.0]).unwrap();
///
/// let effective = merge(&ScaleTable::base(), Some(&additions));
/// assert_eq!(effective.get("h1").unwrap().max_px(), 40.0);
/// assert_eq!(effective.names().last(), Some("hero"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleTable {
    entries: Vec<(String, SizeDescriptor)>,
}

impl ScaleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The base scale as an owned table.
    #[must_use]
    pub fn base() -> Self {
        Self {
            entries: BASE_SCALE
                .iter()
                .map(|(name, descriptor)| ((*name).to_owned(), *descriptor))
                .collect(),
        }
    }

    /// Build a table from raw point lists, validating each entry.
    pub fn from_points<I, N, P>(entries: I) -> Result<Self, FluidError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<[f64]>,
    {
        let mut table = Self::new();
        for (name, points) in entries {
            table.insert_points(name, points.as_ref())?;
        }
        Ok(table)
    }

    /// Insert or replace a descriptor.
    ///
    /// Returns the descriptor previously bound to `name`, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: SizeDescriptor,
    ) -> Result<Option<SizeDescriptor>, FluidError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FluidError::InvalidScaleName);
        }
        Ok(self.upsert(name, descriptor))
    }

    /// Validate `points` and insert them under `name`.
    pub fn insert_points(
        &mut self,
        name: impl Into<String>,
        points: &[f64],
    ) -> Result<Option<SizeDescriptor>, FluidError> {
        let name = name.into();
        let descriptor = SizeDescriptor::from_points(points).map_err(|reason| {
            FluidError::InvalidScaleDescriptor {
                name: name.clone(),
                reason,
            }
        })?;
        self.insert(name, descriptor)
    }

    fn upsert(&mut self, name: String, descriptor: SizeDescriptor) -> Option<SizeDescriptor> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, descriptor)),
            None => {
                self.entries.push((name, descriptor));
                None
            }
        }
    }

    /// Look up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SizeDescriptor> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scale names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SizeDescriptor)> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Overlay `additions` on top of this table.
    ///
    /// Additions replace same-named entries wholesale. Merging the same
    /// additions twice yields the same table as merging them once.
    #[must_use]
    pub fn merge(&self, additions: &ScaleTable) -> ScaleTable {
        let mut merged = self.clone();
        for (name, descriptor) in &additions.entries {
            if merged.upsert(name.clone(), *descriptor).is_some() {
                trace_override(name);
            }
        }
        merged
    }
}

/// Combine `base` with optional `additions`; later entries win.
#[must_use]
pub fn merge(base: &ScaleTable, additions: Option<&ScaleTable>) -> ScaleTable {
    match additions {
        Some(additions) => base.merge(additions),
        None => base.clone(),
    }
}

impl Serialize for ScaleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, descriptor) in &self.entries {
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}

#[cfg(feature = "tracing")]
fn trace_override(name: &str) {
    tracing::trace!(scale = %name, "addition overrides base scale entry");
}

#[cfg(not(feature = "tracing"))]
fn trace_override(_name: &str) {}
