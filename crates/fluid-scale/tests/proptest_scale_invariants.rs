//! Property-based invariant tests for scale merging and formula generation.
//!
//! These hold for any valid additions and any valid viewport range:
//!
//! 1. Merging no additions returns the base table.
//! 2. Merging is idempotent.
//! 3. Every addition wins over the base entry it shadows.
//! 4. Every base name survives a merge.
//! 5. The preferred term reaches the descriptor extremes at the bounds.
//! 6. Formula text is deterministic.

use fluid_scale::{FluidFormula, ScaleTable, SizeDescriptor, ViewportBounds, formula, merge};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("h1".to_owned()),
        Just("body".to_owned()),
        Just("caption".to_owned()),
        "[a-z][a-z0-9-]{0,11}",
    ]
}

fn points_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop_oneof![
        (0.0f64..120.0, 0.0f64..60.0).prop_map(|(min, grow)| vec![min, min + grow]),
        (0.0f64..120.0, 0.0f64..30.0, 0.0f64..30.0)
            .prop_map(|(min, a, b)| vec![min, min + a, min + a + b]),
    ]
}

fn additions_strategy() -> impl Strategy<Value = ScaleTable> {
    proptest::collection::vec((name_strategy(), points_strategy()), 0..8)
        .prop_map(|entries| ScaleTable::from_points(entries).unwrap())
}

fn bounds_strategy() -> impl Strategy<Value = ViewportBounds> {
    (100.0f64..1000.0, 1.0f64..2000.0)
        .prop_map(|(min, span)| ViewportBounds::new(min, min + span).unwrap())
}

// ═════════════════════════════════════════════════════════════════════════
// Merge
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_empty_is_identity(_seed in any::<u8>()) {
        let base = ScaleTable::base();
        prop_assert_eq!(merge(&base, Some(&ScaleTable::new())), base.clone());
        prop_assert_eq!(merge(&base, None), base);
    }

    #[test]
    fn merge_is_idempotent(additions in additions_strategy()) {
        let base = ScaleTable::base();
        let once = merge(&base, Some(&additions));
        let twice = merge(&once, Some(&additions));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn additions_always_win(additions in additions_strategy()) {
        let merged = merge(&ScaleTable::base(), Some(&additions));
        for (name, descriptor) in additions.iter() {
            prop_assert_eq!(merged.get(name), Some(descriptor));
        }
    }

    #[test]
    fn base_names_survive(additions in additions_strategy()) {
        let base = ScaleTable::base();
        let merged = merge(&base, Some(&additions));
        for name in base.names() {
            prop_assert!(merged.contains(name));
        }
        let fresh = additions.names().filter(|n| !base.contains(n)).count();
        prop_assert_eq!(merged.len(), base.len() + fresh);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Formula
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn formula_reaches_extremes(points in points_strategy(), bounds in bounds_strategy()) {
        let descriptor = SizeDescriptor::from_points(&points).unwrap();
        let f = FluidFormula::new(&descriptor, &bounds);
        let px_at = |viewport: f64| (f.intercept_rem + f.slope_vw * viewport / 1600.0) * 16.0;
        prop_assert!((px_at(bounds.min_width_px()) - descriptor.min_px()).abs() < 1e-6);
        prop_assert!((px_at(bounds.max_width_px()) - descriptor.max_px()).abs() < 1e-6);
    }

    #[test]
    fn formula_is_deterministic(points in points_strategy(), bounds in bounds_strategy()) {
        let descriptor = SizeDescriptor::from_points(&points).unwrap();
        prop_assert_eq!(formula(&descriptor, &bounds), formula(&descriptor, &bounds));
    }

    #[test]
    fn clamp_limits_match_descriptor(points in points_strategy(), bounds in bounds_strategy()) {
        let descriptor = SizeDescriptor::from_points(&points).unwrap();
        let text = formula(&descriptor, &bounds);
        let expected_min = format!("clamp({:.4}rem, ", descriptor.min_px() / 16.0);
        let expected_max = format!(", {:.4}rem)", descriptor.max_px() / 16.0);
        prop_assert!(text.starts_with(&expected_min), "{}", text);
        prop_assert!(text.ends_with(&expected_max), "{}", text);
    }
}
