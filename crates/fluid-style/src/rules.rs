//! Rule table builder.
//!
//! Pairs every entry of the effective scale with its presentation:
//!
//! - a name supplied by the caller takes the caller's size and fields, with
//!   [`DEFAULT_LINE_HEIGHT`](crate::presentation::DEFAULT_LINE_HEIGHT) and
//!   [`DEFAULT_FONT_WEIGHT`](crate::presentation::DEFAULT_FONT_WEIGHT) as
//!   fallbacks;
//! - any other name takes the built-in presentation for that name.
//!
//! A caller entry that reuses a base name replaces the whole rule. Fields
//! are never merged with the built-in rule.

use fluid_scale::{FluidError, ScaleTable, SizeDescriptor};
use tracing::{debug, instrument, warn};

use crate::config::{CustomScale, CustomScales};
use crate::error::Error;
use crate::presentation::{BuiltinPresentation, Presentation, builtin_presentation};

/// Size plus presentation for one scale name.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub size: SizeDescriptor,
    pub line_height: f64,
    pub font_weight: String,
    pub letter_spacing: Option<String>,
    pub uppercase: bool,
}

impl RuleEntry {
    /// Attach `presentation` to `size`.
    #[must_use]
    pub fn new(size: SizeDescriptor, presentation: Presentation) -> Self {
        Self {
            size,
            line_height: presentation.line_height,
            font_weight: presentation.font_weight,
            letter_spacing: presentation.letter_spacing,
            uppercase: presentation.uppercase,
        }
    }
}

/// Ordered mapping from scale name to rule, in effective-table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    entries: Vec<(String, RuleEntry)>,
}

impl RuleTable {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rule)| rule)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

fn custom_rule(name: &str, scale: &CustomScale) -> Result<RuleEntry, Error> {
    let size = SizeDescriptor::from_points(&scale.size).map_err(|reason| {
        FluidError::InvalidScaleDescriptor {
            name: name.to_owned(),
            reason,
        }
    })?;
    if let Some(value) = scale
        .line_height
        .filter(|value| !(value.is_finite() && *value > 0.0))
    {
        return Err(Error::InvalidLineHeight {
            name: name.to_owned(),
            value,
        });
    }
    Ok(RuleEntry::new(size, Presentation::from(scale)))
}

/// Build the rule table for `effective`.
///
/// Names in `additions` are built from the caller's fields; all others use
/// `builtin`. Additions missing from `effective` are appended so that every
/// caller entry yields a rule.
#[instrument(
    level = "debug",
    skip_all,
    fields(scales = effective.len(), additions = additions.len())
)]
pub fn build_rules(
    effective: &ScaleTable,
    builtin: &[BuiltinPresentation],
    additions: &CustomScales,
) -> Result<RuleTable, Error> {
    let mut entries = Vec::with_capacity(effective.len());

    for (name, size) in effective.iter() {
        let rule = match additions.get(name) {
            Some(scale) => custom_rule(name, scale)?,
            None => {
                let presentation = match builtin_presentation(builtin, name) {
                    Some(entry) => Presentation::from(entry),
                    None => {
                        warn!(scale = name, "no built-in presentation; using defaults");
                        Presentation::default()
                    }
                };
                RuleEntry::new(*size, presentation)
            }
        };
        entries.push((name.to_owned(), rule));
    }

    for (name, scale) in additions.iter() {
        if !effective.contains(name) {
            entries.push((name.to_owned(), custom_rule(name, scale)?));
        }
    }

    debug!(rules = entries.len(), "built rule table");
    Ok(RuleTable { entries })
}
