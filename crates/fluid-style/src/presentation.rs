//! Presentation metadata: line height, weight, tracking, and case.

use crate::config::CustomScale;

/// Line height applied to custom scales that do not set one.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.5;
/// Font weight applied to custom scales that do not set one.
pub const DEFAULT_FONT_WEIGHT: &str = "400";

/// Built-in presentation for one base scale name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinPresentation {
    pub name: &'static str,
    pub line_height: f64,
    pub font_weight: &'static str,
    pub letter_spacing: Option<&'static str>,
    pub uppercase: bool,
}

impl BuiltinPresentation {
    const fn new(name: &'static str, line_height: f64, font_weight: &'static str) -> Self {
        Self {
            name,
            line_height,
            font_weight,
            letter_spacing: None,
            uppercase: false,
        }
    }

    const fn tracking(mut self, letter_spacing: &'static str) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

/// Presentation for every name in [`fluid_scale::BASE_SCALE`].
pub const BUILTIN_PRESENTATION: &[BuiltinPresentation] = &[
    BuiltinPresentation::new("display-2xl", 1.1, "700").tracking("-0.02em"),
    BuiltinPresentation::new("display-xl", 1.1, "700").tracking("-0.02em"),
    BuiltinPresentation::new("display-lg", 1.15, "700").tracking("-0.01em"),
    BuiltinPresentation::new("h1", 1.2, "700").tracking("-0.01em"),
    BuiltinPresentation::new("h2", 1.25, "600"),
    BuiltinPresentation::new("h3", 1.3, "600"),
    BuiltinPresentation::new("h4", 1.35, "600"),
    BuiltinPresentation::new("body-lg", 1.6, "400"),
    BuiltinPresentation::new("body", 1.6, "400"),
    BuiltinPresentation::new("body-sm", 1.5, "400"),
    BuiltinPresentation::new("caption", 1.4, "400"),
    BuiltinPresentation::new("overline", 1.4, "600")
        .tracking("0.08em")
        .uppercase(),
];

/// Look up the built-in presentation for `name`.
#[must_use]
pub fn builtin_presentation<'a>(
    builtin: &'a [BuiltinPresentation],
    name: &str,
) -> Option<&'a BuiltinPresentation> {
    builtin.iter().find(|entry| entry.name == name)
}

/// Presentation fields of a rule, without its size.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub line_height: f64,
    pub font_weight: String,
    pub letter_spacing: Option<String>,
    pub uppercase: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            font_weight: DEFAULT_FONT_WEIGHT.to_owned(),
            letter_spacing: None,
            uppercase: false,
        }
    }
}

impl From<&BuiltinPresentation> for Presentation {
    fn from(builtin: &BuiltinPresentation) -> Self {
        Self {
            line_height: builtin.line_height,
            font_weight: builtin.font_weight.to_owned(),
            letter_spacing: builtin.letter_spacing.map(str::to_owned),
            uppercase: builtin.uppercase,
        }
    }
}

impl From<&CustomScale> for Presentation {
    /// Caller fields with fallbacks. Validation of the line height happens
    /// in the rule builder, which knows the scale name.
    fn from(scale: &CustomScale) -> Self {
        Self {
            line_height: scale.line_height.unwrap_or(DEFAULT_LINE_HEIGHT),
            font_weight: scale
                .font_weight
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_WEIGHT.to_owned()),
            letter_spacing: scale.letter_spacing.clone(),
            uppercase: scale.is_uppercase(),
        }
    }
}
