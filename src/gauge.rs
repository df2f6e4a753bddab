//! Pure gauge rendering logic: value + threshold → visual descriptor.
//!
//! A gauge's fill is the raw value interpreted directly as a percentage of
//! the track width with no clamping. Values above 100 overflow the visual
//! track; negative values produce no visible fill. The icon tint flips at
//! the gauge's fixed threshold: at or below it the icon shows the light
//! tint (it sits over the dark track), above it the dark tint (it sits over
//! the bright fill).

use crate::thresholds::{ENGINE_TINT_FLIP, FUEL_TINT_FLIP, NITROUS_TINT_FLIP, NITROUS_VISIBLE_MIN};

/// Icon tint chosen per gauge so the icon keeps contrast against whichever
/// surface it overlaps at the current fill level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconTint {
    /// Icon over the dark track (low fill).
    Light,
    /// Icon over the bright fill (normal fill).
    Dark,
}

/// Visual descriptor for one sub-gauge bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeVisual {
    /// Fill as a percentage of the track width. Unclamped.
    pub fill_percent: f32,
    /// Tint for the icon overlapping the bar.
    pub icon_tint: IconTint,
}

/// Map a raw value and its tint-flip threshold to a visual descriptor.
/// The tie goes to the light tint: `value == threshold` is still "low".
pub fn gauge(value: f32, threshold: f32) -> GaugeVisual {
    GaugeVisual {
        fill_percent: value,
        icon_tint: if value <= threshold { IconTint::Light } else { IconTint::Dark },
    }
}

/// Engine health gauge. A missing value renders as zero fill; the row as a
/// whole only suppresses when every sub-gauge value is absent.
pub fn engine_gauge(value: Option<f32>) -> GaugeVisual {
    gauge(value.unwrap_or(0.0), ENGINE_TINT_FLIP)
}

/// Fuel gauge. Same missing-value behavior as the engine gauge.
pub fn fuel_gauge(value: Option<f32>) -> GaugeVisual {
    gauge(value.unwrap_or(0.0), FUEL_TINT_FLIP)
}

/// Nitrous gauge. Rendered only at or above the visibility floor; values in
/// (0, 1) and absence both suppress it.
pub fn nitrous_gauge(value: Option<f32>) -> Option<GaugeVisual> {
    match value {
        Some(v) if v >= NITROUS_VISIBLE_MIN => Some(gauge(v, NITROUS_TINT_FLIP)),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_flip_at_engine_threshold() {
        assert_eq!(gauge(26.0, ENGINE_TINT_FLIP).icon_tint, IconTint::Light, "26 is still low");
        assert_eq!(gauge(26.1, ENGINE_TINT_FLIP).icon_tint, IconTint::Dark, "just above 26 is dark");
        assert_eq!(gauge(100.0, ENGINE_TINT_FLIP).icon_tint, IconTint::Dark);
        assert_eq!(gauge(0.0, ENGINE_TINT_FLIP).icon_tint, IconTint::Light);
    }

    #[test]
    fn test_tint_flip_at_fuel_threshold() {
        assert_eq!(gauge(18.0, FUEL_TINT_FLIP).icon_tint, IconTint::Light);
        assert_eq!(gauge(18.5, FUEL_TINT_FLIP).icon_tint, IconTint::Dark);
    }

    #[test]
    fn test_tint_flip_at_nitrous_threshold() {
        assert_eq!(gauge(15.0, NITROUS_TINT_FLIP).icon_tint, IconTint::Light);
        assert_eq!(gauge(15.1, NITROUS_TINT_FLIP).icon_tint, IconTint::Dark);
    }

    #[test]
    fn test_fill_is_unclamped() {
        assert_eq!(gauge(140.0, FUEL_TINT_FLIP).fill_percent, 140.0, ">100 overflows the track");
        assert_eq!(gauge(-5.0, FUEL_TINT_FLIP).fill_percent, -5.0, "negatives pass through");
    }

    #[test]
    fn test_nitrous_visibility_floor() {
        assert!(nitrous_gauge(None).is_none(), "absent nitrous is suppressed");
        assert!(nitrous_gauge(Some(0.0)).is_none(), "0 is suppressed");
        assert!(nitrous_gauge(Some(0.5)).is_none(), "(0,1) is suppressed");
        assert!(nitrous_gauge(Some(1.0)).is_some(), "exactly 1 renders");
        assert!(nitrous_gauge(Some(50.0)).is_some());
    }

    #[test]
    fn test_missing_engine_fuel_render_as_zero_fill() {
        let engine = engine_gauge(None);
        assert_eq!(engine.fill_percent, 0.0);
        assert_eq!(engine.icon_tint, IconTint::Light);

        let fuel = fuel_gauge(None);
        assert_eq!(fuel.fill_percent, 0.0);
        assert_eq!(fuel.icon_tint, IconTint::Light);
    }
}
