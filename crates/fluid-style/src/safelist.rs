//! Safelist of generated class names.
//!
//! Hosts that tree-shake unused classes by scanning markup cannot see
//! classes chosen at runtime; the safelist names every generated class so
//! they are always kept.

use crate::config::FluidTypeConfig;
use crate::error::Error;
use crate::naming::class_name;
use crate::resolved::ResolvedTypography;

/// Class names for `names`, in order, without duplicates.
pub fn safelist_for<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for name in names {
        let class = class_name(name);
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    classes
}

/// Resolve `config` and list its generated classes.
pub fn safelist(config: &FluidTypeConfig) -> Result<Vec<String>, Error> {
    Ok(ResolvedTypography::resolve(config)?.safelist())
}
