#![forbid(unsafe_code)]

//! Rule tables and host integration surfaces for fluid typography.
//!
//! # Role
//! `fluid-style` turns a [`FluidTypeConfig`] into everything a host styling
//! framework consumes:
//! - [`StyleRules`]: one presentation object per class selector, with the
//!   fluid `clamp()` font size, line height, weight, and optional tracking
//!   and uppercase transform. Also renders as CSS text.
//! - [`ClassGroups`]: one conflict group over every generated class, for
//!   class deduplication tools.
//! - [`ThemeExtension`]: the raw effective scale under a theme namespace.
//! - a safelist of every generated class name.
//!
//! The numeric engine (descriptors, merge, formulas) lives in
//! [`fluid_scale`]. [`ResolvedTypography`] validates a configuration once
//! and serves every surface; the free functions ([`components`],
//! [`class_groups`], [`theme`], [`safelist`]) resolve from scratch per call.
//!
//! # Example
//!
//! ```
//! use fluid_style::{CustomScale, FluidTypeConfig, components, safelist};
//!
//! let config = FluidTypeConfig::new()
//!     .scale("eyebrow", CustomScale::new([11.0, 12.0]).letter_spacing("0.1em").uppercase());
//!
//! let rules = components(&config).unwrap();
//! let eyebrow = rules.get(".text-fluid-eyebrow").unwrap();
//! assert_eq!(eyebrow.text_transform, Some("uppercase"));
//! assert_eq!(eyebrow.line_height, "1.5");
//!
//! assert!(safelist(&config).unwrap().contains(&"text-fluid-eyebrow".to_string()));
//! ```

/// Class-conflict group adapter.
pub mod class_groups;
/// Style emission adapter.
pub mod components;
/// Caller configuration and JSON parsing.
pub mod config;
pub mod error;
/// Class names derived from scale names.
pub mod naming;
/// Built-in and caller presentation metadata.
pub mod presentation;
/// Validated configuration serving every adapter.
pub mod resolved;
/// Rule table builder.
pub mod rules;
pub mod safelist;
/// Theme-value adapter.
pub mod theme;

pub use class_groups::{CLASS_GROUP, ClassGroups, class_groups};
pub use components::{StyleDeclarations, StyleRules, components};
pub use config::{CustomScale, CustomScales, FluidTypeConfig, TextTransform};
pub use error::Error;
pub use naming::{CLASS_PREFIX, class_name, selector};
pub use presentation::{
    BUILTIN_PRESENTATION, BuiltinPresentation, DEFAULT_FONT_WEIGHT, DEFAULT_LINE_HEIGHT,
    Presentation,
};
pub use resolved::ResolvedTypography;
pub use rules::{RuleEntry, RuleTable, build_rules};
pub use safelist::{safelist, safelist_for};
pub use theme::{THEME_NAMESPACE, ThemeExtension, theme};
