//! Style emission: one presentation object per class selector.
//!
//! The output is what a host styling framework registers as component
//! styles. Serialized to JSON it reads:
//!
//! ```json
//! {
//!   ".text-fluid-h1": {
//!     "fontSize": "clamp(1.7500rem, 1.5739rem + 0.7512vw, 2.2500rem)",
//!     "lineHeight": "1.2",
//!     "fontWeight": "700",
//!     "letterSpacing": "-0.01em"
//!   }
//! }
//! ```
//!
//! [`StyleRules`] also renders as plain CSS through `Display`.

use std::fmt;

use fluid_scale::{ViewportBounds, formula};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::config::FluidTypeConfig;
use crate::error::Error;
use crate::naming::selector;
use crate::resolved::ResolvedTypography;
use crate::rules::{RuleEntry, RuleTable};

/// Presentation properties for one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDeclarations {
    pub font_size: String,
    pub line_height: String,
    pub font_weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<&'static str>,
}

impl StyleDeclarations {
    /// Declarations for `rule` interpolated across `bounds`.
    #[must_use]
    pub fn from_rule(rule: &RuleEntry, bounds: &ViewportBounds) -> Self {
        Self {
            font_size: formula(&rule.size, bounds),
            line_height: rule.line_height.to_string(),
            font_weight: rule.font_weight.clone(),
            letter_spacing: rule.letter_spacing.clone(),
            text_transform: rule.uppercase.then_some("uppercase"),
        }
    }

    /// CSS property/value pairs in emission order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            Some(("font-size", self.font_size.as_str())),
            Some(("line-height", self.line_height.as_str())),
            Some(("font-weight", self.font_weight.as_str())),
            self.letter_spacing
                .as_deref()
                .map(|value| ("letter-spacing", value)),
            self.text_transform.map(|value| ("text-transform", value)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Ordered mapping from class selector to declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRules {
    rules: Vec<(String, StyleDeclarations)>,
}

impl StyleRules {
    /// Emit one selector per rule, in rule-table order.
    #[must_use]
    pub fn from_rules(rules: &RuleTable, bounds: &ViewportBounds) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|(name, rule)| (selector(name), StyleDeclarations::from_rule(rule, bounds)))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&StyleDeclarations> {
        self.rules
            .iter()
            .find(|(existing, _)| existing == selector)
            .map(|(_, declarations)| declarations)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(selector, _)| selector.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleDeclarations)> {
        self.rules
            .iter()
            .map(|(selector, declarations)| (selector.as_str(), declarations))
    }

    /// Render as a CSS stylesheet.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (selector, declarations)) in self.rules.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{selector} {{")?;
            for (property, value) in declarations.properties() {
                writeln!(f, "  {property}: {value};")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

impl Serialize for StyleRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for (selector, declarations) in &self.rules {
            map.serialize_entry(selector, declarations)?;
        }
        map.end()
    }
}

/// Resolve `config` and emit its style rules.
pub fn components(config: &FluidTypeConfig) -> Result<StyleRules, Error> {
    Ok(ResolvedTypography::resolve(config)?.components())
}
