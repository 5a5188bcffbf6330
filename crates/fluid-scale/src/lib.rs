#![forbid(unsafe_code)]

//! Scale resolution and fluid formula engine.
//!
//! # Role
//! `fluid-scale` owns the numeric side of a responsive typography scale:
//! - [`SizeDescriptor`]: pixel sizes at the viewport extremes.
//! - [`ScaleTable`]: ordered name to descriptor mapping, with the compiled-in
//!   [`BASE_SCALE`] and a last-write-wins [`merge`].
//! - [`ViewportBounds`]: the validated width range a size interpolates over.
//! - [`FluidFormula`] / [`formula`]: the CSS `clamp()` text for one entry.
//!
//! Everything here is a pure function of its inputs. Presentation metadata
//! and the integration surfaces live in `fluid-style`.
//!
//! # Example
//!
//! ```
//! use fluid_scale::{ScaleTable, ViewportBounds, formula};
//!
//! let base = ScaleTable::base();
//! let bounds = ViewportBounds::default();
//! let h1 = base.get("h1").unwrap();
//! assert_eq!(
//!     formula(h1, &bounds),
//!     "clamp(1.7500rem, 1.5739rem + 0.7512vw, 2.2500rem)"
//! );
//! ```

pub mod descriptor;
pub mod error;
pub mod formula;
pub mod table;
pub mod viewport;

pub use descriptor::{DescriptorError, SizeDescriptor};
pub use error::FluidError;
pub use formula::{FluidFormula, ROOT_FONT_SIZE_PX, formula};
pub use table::{BASE_SCALE, ScaleTable, merge};
pub use viewport::{DEFAULT_MAX_VIEWPORT_PX, DEFAULT_MIN_VIEWPORT_PX, ViewportBounds};
