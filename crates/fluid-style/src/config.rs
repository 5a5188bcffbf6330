//! Caller-supplied configuration.
//!
//! A configuration can be built in code or parsed from JSON with camelCase
//! keys:
//!
//! ```json
//! {
//!   "customScales": {
//!     "hero": { "size": [56, 96], "lineHeight": 1.05, "fontWeight": "800" },
//!     "eyebrow": { "size": [11, 12], "letterSpacing": "0.1em", "textTransform": "uppercase" }
//!   },
//!   "minViewportWidth": 320,
//!   "maxViewportWidth": 1280
//! }
//! ```
//!
//! Unknown keys are ignored at every level. Custom scales keep the order in
//! which they appear in the document; a repeated key keeps its last value.

use std::fmt;

use fluid_scale::{FluidError, ScaleTable, ViewportBounds};
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::Error;

/// Text transform requested by a custom scale.
///
/// Only [`TextTransform::Uppercase`] changes the emitted rule. Other values
/// are accepted so that configurations written for richer hosts still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
    /// Any other keyword, kept verbatim.
    Other(String),
}

impl TextTransform {
    /// The CSS keyword.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Capitalize => "capitalize",
            Self::Other(keyword) => keyword,
        }
    }
}

impl From<String> for TextTransform {
    fn from(keyword: String) -> Self {
        match keyword.as_str() {
            "uppercase" => Self::Uppercase,
            "lowercase" => Self::Lowercase,
            "capitalize" => Self::Capitalize,
            _ => Self::Other(keyword),
        }
    }
}

/// One caller-supplied scale entry: a size plus optional presentation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomScale {
    /// Pixel sizes, `[min, max]` or `[min, preferred, max]`.
    pub size: Vec<f64>,
    pub line_height: Option<f64>,
    #[serde(default, deserialize_with = "weight_token")]
    pub font_weight: Option<String>,
    pub letter_spacing: Option<String>,
    pub text_transform: Option<TextTransform>,
}

impl CustomScale {
    /// Create an entry with only a size.
    #[must_use]
    pub fn new(size: impl Into<Vec<f64>>) -> Self {
        Self {
            size: size.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn line_height(mut self, line_height: f64) -> Self {
        self.line_height = Some(line_height);
        self
    }

    #[must_use]
    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    #[must_use]
    pub fn letter_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.letter_spacing = Some(spacing.into());
        self
    }

    #[must_use]
    pub fn text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    /// Shorthand for `text_transform(TextTransform::Uppercase)`.
    #[must_use]
    pub fn uppercase(self) -> Self {
        self.text_transform(TextTransform::Uppercase)
    }

    /// Whether the entry asks for an uppercase transform.
    #[must_use]
    pub fn is_uppercase(&self) -> bool {
        self.text_transform == Some(TextTransform::Uppercase)
    }
}

/// Accept `"700"` as well as `700` for a font weight.
fn weight_token<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Token {
        Text(String),
        Number(f64),
    }

    Ok(Option::<Token>::deserialize(deserializer)?.map(|token| match token {
        Token::Text(text) => text,
        Token::Number(number) => number.to_string(),
    }))
}

/// Ordered set of custom scales keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomScales {
    entries: Vec<(String, CustomScale)>,
}

impl CustomScales {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, scale: CustomScale) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = scale,
            None => self.entries.push((name, scale)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CustomScale> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, scale)| scale)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomScale)> {
        self.entries.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    /// Validate every size and collect them into a scale table.
    pub fn to_scale_table(&self) -> Result<ScaleTable, FluidError> {
        ScaleTable::from_points(
            self.entries
                .iter()
                .map(|(name, scale)| (name.as_str(), scale.size.as_slice())),
        )
    }
}

impl<N: Into<String>> FromIterator<(N, CustomScale)> for CustomScales {
    fn from_iter<I: IntoIterator<Item = (N, CustomScale)>>(iter: I) -> Self {
        let mut scales = Self::new();
        for (name, scale) in iter {
            scales.insert(name, scale);
        }
        scales
    }
}

impl<'de> Deserialize<'de> for CustomScales {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalesVisitor;

        impl<'de> Visitor<'de> for ScalesVisitor {
            type Value = CustomScales;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from scale name to custom scale")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut scales = CustomScales::new();
                while let Some((name, scale)) = map.next_entry::<String, CustomScale>()? {
                    scales.insert(name, scale);
                }
                Ok(scales)
            }
        }

        deserializer.deserialize_map(ScalesVisitor)
    }
}

/// Options for one typography build.
///
/// # Example
///
/// ```
/// use fluid_style::{CustomScale, FluidTypeConfig};
///
/// let config = FluidTypeConfig::new()
///     .scale("hero", CustomScale::new([56.0, 96.0]).font_weight("800"))
///     .min_viewport_width(320.0);
///
/// let bounds = config.viewport_bounds().unwrap();
/// assert_eq!(bounds.min_width_px(), 320.0);
/// assert_eq!(bounds.max_width_px(), 1440.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidTypeConfig {
    /// Additions and overrides on top of the base scale.
    pub custom_scales: CustomScales,
    /// Lower viewport bound in px; 375 when unset.
    pub min_viewport_width: Option<f64>,
    /// Upper viewport bound in px; 1440 when unset.
    pub max_viewport_width: Option<f64>,
}

impl FluidTypeConfig {
    /// Configuration with no additions and default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a custom scale.
    #[must_use]
    pub fn scale(mut self, name: impl Into<String>, scale: CustomScale) -> Self {
        self.custom_scales.insert(name, scale);
        self
    }

    #[must_use]
    pub fn min_viewport_width(mut self, px: f64) -> Self {
        self.min_viewport_width = Some(px);
        self
    }

    #[must_use]
    pub fn max_viewport_width(mut self, px: f64) -> Self {
        self.max_viewport_width = Some(px);
        self
    }

    /// Validated viewport bounds, defaults filled in.
    pub fn viewport_bounds(&self) -> Result<ViewportBounds, FluidError> {
        ViewportBounds::from_options(self.min_viewport_width, self.max_viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            FluidTypeConfig::from_json("{}").unwrap(),
            FluidTypeConfig::default()
        );
    }

    #[test]
    fn test_full_json() {
        let config = FluidTypeConfig::from_json(
            r#"{
                "customScales": {
                    "hero": { "size": [56, 96], "lineHeight": 1.05, "fontWeight": "800" },
                    "eyebrow": {
                        "size": [11, 12],
                        "letterSpacing": "0.1em",
                        "textTransform": "uppercase"
                    }
                },
                "minViewportWidth": 320,
                "maxViewportWidth": 1280
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_viewport_width, Some(320.0));
        assert_eq!(config.max_viewport_width, Some(1280.0));

        let hero = config.custom_scales.get("hero").unwrap();
        assert_eq!(hero.size, vec![56.0, 96.0]);
        assert_eq!(hero.line_height, Some(1.05));
        assert_eq!(hero.font_weight.as_deref(), Some("800"));
        assert!(!hero.is_uppercase());

        let eyebrow = config.custom_scales.get("eyebrow").unwrap();
        assert_eq!(eyebrow.letter_spacing.as_deref(), Some("0.1em"));
        assert!(eyebrow.is_uppercase());
    }

    #[test]
    fn test_custom_scales_keep_document_order() {
        let config = FluidTypeConfig::from_json(
            r#"{"customScales": {"zeta": {"size": [1, 2]}, "alpha": {"size": [3, 4]}, "mid": {"size": [5, 6]}}}"#,
        )
        .unwrap();
        let names = config
            .custom_scales
            .iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let config = FluidTypeConfig::from_json(
            r#"{"customScales": {"hero": {"size": [1, 2]}, "hero": {"size": [3, 4]}}}"#,
        )
        .unwrap();
        assert_eq!(config.custom_scales.len(), 1);
        assert_eq!(config.custom_scales.get("hero").unwrap().size, vec![3.0, 4.0]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config = FluidTypeConfig::from_json(
            r#"{
                "customScales": { "hero": { "size": [56, 96], "fontFamily": "Inter", "color": "red" } },
                "prefix": "tw-"
            }"#,
        )
        .unwrap();
        assert!(config.custom_scales.contains("hero"));
    }

    #[test]
    fn test_numeric_font_weight_accepted() {
        let config = FluidTypeConfig::from_json(
            r#"{"customScales": {"hero": {"size": [56, 96], "fontWeight": 700}}}"#,
        )
        .unwrap();
        assert_eq!(
            config.custom_scales.get("hero").unwrap().font_weight.as_deref(),
            Some("700")
        );
    }

    #[test]
    fn test_other_text_transforms_kept() {
        let config = FluidTypeConfig::from_json(
            r#"{"customScales": {
                "a": {"size": [1, 2], "textTransform": "capitalize"},
                "b": {"size": [1, 2], "textTransform": "full-width"}
            }}"#,
        )
        .unwrap();
        let a = config.custom_scales.get("a").unwrap();
        let b = config.custom_scales.get("b").unwrap();
        assert_eq!(a.text_transform, Some(TextTransform::Capitalize));
        assert_eq!(
            b.text_transform.as_ref().map(TextTransform::as_str),
            Some("full-width")
        );
        assert!(!a.is_uppercase() && !b.is_uppercase());
    }

    #[test]
    fn test_missing_size_is_config_error() {
        let err = FluidTypeConfig::from_json(r#"{"customScales": {"hero": {"lineHeight": 1.2}}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("size")), "{err}");
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            FluidTypeConfig::from_json("{ not json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_builder_matches_json() {
        let built = FluidTypeConfig::new()
            .scale(
                "hero",
                CustomScale::new([56.0, 96.0])
                    .line_height(1.05)
                    .font_weight("800"),
            )
            .scale(
                "eyebrow",
                CustomScale::new([11.0, 12.0]).letter_spacing("0.1em").uppercase(),
            )
            .min_viewport_width(320.0)
            .max_viewport_width(1280.0);

        let parsed = FluidTypeConfig::from_json(
            r#"{
                "customScales": {
                    "hero": { "size": [56, 96], "lineHeight": 1.05, "fontWeight": "800" },
                    "eyebrow": { "size": [11, 12], "letterSpacing": "0.1em", "textTransform": "uppercase" }
                },
                "minViewportWidth": 320,
                "maxViewportWidth": 1280
            }"#,
        )
        .unwrap();

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_viewport_bounds_validated() {
        let config = FluidTypeConfig::new()
            .min_viewport_width(800.0)
            .max_viewport_width(800.0);
        assert!(matches!(
            config.viewport_bounds(),
            Err(FluidError::InvalidViewportBounds { .. })
        ));
    }

    #[test]
    fn test_to_scale_table_names_bad_entry() {
        let scales: CustomScales = [
            ("ok", CustomScale::new([10.0, 12.0])),
            ("bad", CustomScale::new([12.0, 10.0])),
        ]
        .into_iter()
        .collect();
        let err = scales.to_scale_table().unwrap_err();
        assert!(matches!(
            err,
            FluidError::InvalidScaleDescriptor { ref name, .. } if name == "bad"
        ));
    }
}
