//! A validated typography build.
//!
//! # Invariants
//!
//! 1. **Bounds first**: viewport bounds are validated before any scale is
//!    touched, so an invalid range never yields a formula string.
//! 2. **All or nothing**: one malformed entry fails the whole resolution;
//!    no partial scale reaches an adapter.
//! 3. **Immutable**: a `ResolvedTypography` never changes after
//!    construction and is `Send + Sync`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Bad bounds | `min >= max`, zero, NaN | `Error::Scale(InvalidViewportBounds)` |
//! | Bad size | short, negative, decreasing | `Error::Scale(InvalidScaleDescriptor)` |
//! | Empty name | `""` as a custom scale key | `Error::Scale(InvalidScaleName)` |
//! | Bad line height | zero, negative, NaN | `Error::InvalidLineHeight` |

use fluid_scale::{FluidFormula, ScaleTable, ViewportBounds, merge};
use tracing::{debug, instrument};

use crate::class_groups::ClassGroups;
use crate::components::StyleRules;
use crate::config::FluidTypeConfig;
use crate::error::Error;
use crate::presentation::BUILTIN_PRESENTATION;
use crate::rules::{RuleTable, build_rules};
use crate::safelist::safelist_for;
use crate::theme::ThemeExtension;

/// Effective scale, rule table, and bounds for one configuration.
///
/// # Example
///
/// ```
/// use fluid_style::{CustomScale, FluidTypeConfig, ResolvedTypography};
///
/// let config = FluidTypeConfig::new().scale("hero", CustomScale::new([56.0, 96.0]));
/// let typography = ResolvedTypography::resolve(&config).unwrap();
///
/// assert!(typography.safelist().contains(&"text-fluid-hero".to_string()));
/// assert_eq!(
///     typography.formula("h1").as_deref(),
///     Some("clamp(1.7500rem, 1.5739rem + 0.7512vw, 2.2500rem)")
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTypography {
    bounds: ViewportBounds,
    scale: ScaleTable,
    rules: RuleTable,
}

impl ResolvedTypography {
    /// Validate `config` and derive the effective scale and rules.
    #[instrument(level = "debug", skip_all, fields(custom_scales = config.custom_scales.len()))]
    pub fn resolve(config: &FluidTypeConfig) -> Result<Self, Error> {
        let bounds = config.viewport_bounds()?;
        let additions = config.custom_scales.to_scale_table()?;
        let base = ScaleTable::base();

        let overrides = additions.names().filter(|name| base.contains(name)).count();
        let scale = merge(&base, Some(&additions));
        let rules = build_rules(&scale, BUILTIN_PRESENTATION, &config.custom_scales)?;

        debug!(
            base = base.len(),
            overrides,
            added = additions.len() - overrides,
            min_viewport = bounds.min_width_px(),
            max_viewport = bounds.max_width_px(),
            "resolved typography scale"
        );

        Ok(Self {
            bounds,
            scale,
            rules,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &ViewportBounds {
        &self.bounds
    }

    /// The effective (merged) scale table.
    #[must_use]
    pub fn scale(&self) -> &ScaleTable {
        &self.scale
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Formula coefficients for one scale name.
    #[must_use]
    pub fn fluid_formula(&self, name: &str) -> Option<FluidFormula> {
        self.scale
            .get(name)
            .map(|descriptor| FluidFormula::new(descriptor, &self.bounds))
    }

    /// Formula text for one scale name.
    #[must_use]
    pub fn formula(&self, name: &str) -> Option<String> {
        self.fluid_formula(name).map(|formula| formula.to_string())
    }

    /// Style rules keyed by class selector.
    #[must_use]
    pub fn components(&self) -> StyleRules {
        StyleRules::from_rules(&self.rules, &self.bounds)
    }

    /// Conflict group over every generated class.
    #[must_use]
    pub fn class_groups(&self) -> ClassGroups {
        ClassGroups::from_names(self.scale.names())
    }

    /// The raw effective scale under the theme namespace.
    #[must_use]
    pub fn theme(&self) -> ThemeExtension {
        ThemeExtension::new(self.scale.clone())
    }

    /// Every generated class name.
    #[must_use]
    pub fn safelist(&self) -> Vec<String> {
        safelist_for(self.scale.names())
    }
}
