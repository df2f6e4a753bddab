//! Overlay composition: snapshot → five positioned visual groups.
//!
//! The composer is a pure function of the current [`TelemetrySnapshot`]. It
//! produces a static arrangement with no state mutation, no animation:
//!
//! - Top-left: heading label.
//! - Top-right: street label (`street_name1`, then `| street_name2` only
//!   when the cross street is non-empty).
//! - Top, spanning full width above the rest: the gauge bar row, engine /
//!   fuel / nitrous left-to-right, nitrous per its suppression rule. The
//!   whole row is absent when all three sub-gauge values are absent.
//! - Bottom-left: gear label (`"R"` for the reverse sentinel `0`).
//! - Bottom-right: speed zero-padded to minimum width 3, then the
//!   upper-cased speed unit.
//!
//! Each optional group is either fully formed or absent; the draw path never
//! sees a partial shape.

use core::fmt::Write;

use heapless::String;

use crate::gauge::{GaugeVisual, engine_gauge, fuel_gauge, nitrous_gauge};
use crate::snapshot::{HEADING_LEN, TelemetrySnapshot};

// =============================================================================
// Label Capacities
// =============================================================================

/// Street label: two bounded names plus the ` | ` separator.
pub const STREET_LABEL_LEN: usize = 68;

/// Speed label: padded value, space, upper-cased unit.
pub const SPEED_LABEL_LEN: usize = 20;

/// Gear label: any `i32` as text, or `"R"`.
pub const GEAR_LABEL_LEN: usize = 12;

// =============================================================================
// Composed Layout
// =============================================================================

/// The gauge bar row: engine and fuel always form once the row exists,
/// nitrous only above its visibility floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeRow {
    pub engine: GaugeVisual,
    pub fuel: GaugeVisual,
    pub nitrous: Option<GaugeVisual>,
}

/// Fully composed overlay: five fixed groups, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Compass label, top-left.
    pub heading: String<HEADING_LEN>,
    /// Street label, top-right.
    pub street: String<STREET_LABEL_LEN>,
    /// Gauge bar row, absent when no sub-gauge value exists.
    pub gauges: Option<GaugeRow>,
    /// Gear label, bottom-left. Empty when the snapshot carries no gear.
    pub gear: String<GEAR_LABEL_LEN>,
    /// Speed label, bottom-right.
    pub speed: String<SPEED_LABEL_LEN>,
}

/// Compose the overlay from the current snapshot.
pub fn compose(snapshot: &TelemetrySnapshot) -> OverlayLayout {
    OverlayLayout {
        heading: snapshot.heading.clone(),
        street: street_label(snapshot),
        gauges: gauge_row(snapshot),
        gear: gear_label(snapshot.gear),
        speed: speed_label(snapshot.speed, &snapshot.speed_unit),
    }
}

/// Build the gauge row, or `None` when every sub-gauge value is absent.
/// Partial presence still renders: a missing engine or fuel value shows as
/// zero fill rather than suppressing the row.
fn gauge_row(snapshot: &TelemetrySnapshot) -> Option<GaugeRow> {
    if snapshot.vehicle_info_absent() {
        return None;
    }
    Some(GaugeRow {
        engine: engine_gauge(snapshot.engine_health),
        fuel: fuel_gauge(snapshot.fuel),
        nitrous: nitrous_gauge(snapshot.nitrous),
    })
}

/// `street_name1`, then ` | street_name2` only when the cross street is
/// non-empty, with no separator glyph otherwise.
fn street_label(snapshot: &TelemetrySnapshot) -> String<STREET_LABEL_LEN> {
    let mut label: String<STREET_LABEL_LEN> = String::new();
    let _ = label.push_str(&snapshot.street_name1);
    if !snapshot.street_name2.is_empty() {
        let _ = label.push_str(" | ");
        let _ = label.push_str(&snapshot.street_name2);
    }
    label
}

/// `"R"` for the reverse sentinel `0`; every other gear renders as-is.
/// A missing gear renders blank.
fn gear_label(gear: Option<i32>) -> String<GEAR_LABEL_LEN> {
    let mut label: String<GEAR_LABEL_LEN> = String::new();
    match gear {
        Some(0) => {
            let _ = label.push('R');
        }
        Some(g) => {
            let _ = write!(label, "{g}");
        }
        None => {}
    }
    label
}

/// Speed zero-padded to a minimum width of 3 digits (padding never
/// truncates), followed by the upper-cased unit. A `NaN` speed renders as
/// the literal text, a documented passthrough, not fixed here.
fn speed_label(speed: f32, unit: &str) -> String<SPEED_LABEL_LEN> {
    let mut label: String<SPEED_LABEL_LEN> = String::new();
    let _ = write!(label, "{speed:03.0}");
    if !unit.is_empty() {
        let _ = label.push(' ');
        for c in unit.chars() {
            let _ = label.push(c.to_ascii_uppercase());
        }
    }
    label
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::IconTint;
    use crate::snapshot::VehiclePayload;

    fn snapshot(payload: VehiclePayload<'_>) -> TelemetrySnapshot {
        TelemetrySnapshot::from_payload(&payload)
    }

    fn driving_payload() -> VehiclePayload<'static> {
        VehiclePayload {
            speed: Some(123.0),
            gear: Some(3),
            speed_unit: Some("kmh"),
            street_name1: Some("OSLO"),
            street_name2: Some("FROGNER"),
            heading: Some("N"),
            fuel: Some(40.0),
            engine_health: Some(50.0),
            nitrous: Some(50.0),
            is_in_vehicle: Some(true),
        }
    }

    // -------------------------------------------------------------------------
    // Gear Label
    // -------------------------------------------------------------------------

    #[test]
    fn test_gear_zero_is_reverse() {
        assert_eq!(gear_label(Some(0)).as_str(), "R");
    }

    #[test]
    fn test_gear_passthrough() {
        assert_eq!(gear_label(Some(3)).as_str(), "3");
        assert_eq!(gear_label(Some(-1)).as_str(), "-1", "no special-casing beyond zero");
        assert_eq!(gear_label(Some(10)).as_str(), "10");
    }

    #[test]
    fn test_gear_missing_is_blank() {
        assert!(gear_label(None).is_empty());
    }

    // -------------------------------------------------------------------------
    // Speed Label
    // -------------------------------------------------------------------------

    #[test]
    fn test_speed_zero_padding() {
        assert_eq!(speed_label(7.0, "kmh").as_str(), "007 KMH");
        assert_eq!(speed_label(123.0, "kmh").as_str(), "123 KMH");
        assert_eq!(speed_label(1000.0, "kmh").as_str(), "1000 KMH", "padding never truncates");
    }

    #[test]
    fn test_speed_unit_upper_cased() {
        assert_eq!(speed_label(50.0, "mph").as_str(), "050 MPH");
        assert_eq!(speed_label(50.0, "Kmh").as_str(), "050 KMH");
    }

    #[test]
    fn test_speed_blank_unit() {
        assert_eq!(speed_label(7.0, "").as_str(), "007", "no trailing separator for a blank unit");
    }

    #[test]
    fn test_speed_nan_renders() {
        let label = speed_label(f32::NAN, "kmh");
        assert!(label.as_str().starts_with("NaN"), "NaN passthrough renders as text");
    }

    // -------------------------------------------------------------------------
    // Street Label
    // -------------------------------------------------------------------------

    #[test]
    fn test_street_with_cross_street() {
        let snap = snapshot(driving_payload());
        assert_eq!(street_label(&snap).as_str(), "OSLO | FROGNER");
    }

    #[test]
    fn test_street_empty_cross_street_no_separator() {
        let snap = snapshot(VehiclePayload {
            street_name2: Some(""),
            ..driving_payload()
        });
        assert_eq!(street_label(&snap).as_str(), "OSLO", "empty cross street drops the separator");
    }

    // -------------------------------------------------------------------------
    // Gauge Row
    // -------------------------------------------------------------------------

    #[test]
    fn test_gauge_row_all_absent_is_suppressed() {
        // Only reachable on a hand-built snapshot; the defaulting step keeps
        // fuel and engine present after any real event.
        let mut snap = snapshot(driving_payload());
        snap.fuel = None;
        snap.engine_health = None;
        snap.nitrous = None;
        assert!(gauge_row(&snap).is_none(), "row omitted entirely when all three are absent");
    }

    #[test]
    fn test_gauge_row_partial_presence_renders() {
        let mut snap = snapshot(driving_payload());
        snap.engine_health = None;
        snap.nitrous = None;

        let row = gauge_row(&snap).expect("partial presence still renders");
        assert_eq!(row.engine.fill_percent, 0.0, "missing engine shows zero fill");
        assert_eq!(row.fuel.fill_percent, 40.0);
        assert!(row.nitrous.is_none());
    }

    #[test]
    fn test_gauge_row_nitrous_suppression() {
        for low in [0.0, 0.5] {
            let snap = snapshot(VehiclePayload {
                nitrous: Some(low),
                ..driving_payload()
            });
            let row = gauge_row(&snap).unwrap();
            assert!(row.nitrous.is_none(), "nitrous {low} should be suppressed");
        }

        let snap = snapshot(VehiclePayload {
            nitrous: Some(1.0),
            ..driving_payload()
        });
        assert!(gauge_row(&snap).unwrap().nitrous.is_some(), "nitrous 1 renders");
    }

    // -------------------------------------------------------------------------
    // Full Composition
    // -------------------------------------------------------------------------

    #[test]
    fn test_compose_full_snapshot() {
        let layout = compose(&snapshot(driving_payload()));
        assert_eq!(layout.heading.as_str(), "N");
        assert_eq!(layout.street.as_str(), "OSLO | FROGNER");
        assert_eq!(layout.gear.as_str(), "3");
        assert_eq!(layout.speed.as_str(), "123 KMH");

        let row = layout.gauges.expect("sub-gauge values present");
        assert_eq!(row.engine.icon_tint, IconTint::Dark, "50 is above the engine flip");
        assert_eq!(row.fuel.icon_tint, IconTint::Dark, "40 is above the fuel flip");
        assert_eq!(row.nitrous.unwrap().icon_tint, IconTint::Dark);
    }

    #[test]
    fn test_compose_is_pure() {
        let snap = snapshot(driving_payload());
        assert_eq!(compose(&snap), compose(&snap), "same snapshot, same layout");
    }

    #[test]
    fn test_compose_low_levels_flip_tints() {
        let layout = compose(&snapshot(VehiclePayload {
            fuel: Some(10.0),
            engine_health: Some(26.0),
            nitrous: Some(15.0),
            ..driving_payload()
        }));
        let row = layout.gauges.unwrap();
        assert_eq!(row.engine.icon_tint, IconTint::Light);
        assert_eq!(row.fuel.icon_tint, IconTint::Light);
        assert_eq!(row.nitrous.unwrap().icon_tint, IconTint::Light);
    }
}
