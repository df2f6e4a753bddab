//! Telemetry snapshot type and the payload defaulting step.
//!
//! Inbound payloads arrive with every field optional; the snapshot is the
//! complete record the render path reads. Building a snapshot applies fixed
//! defaults to the vehicle-info and navigation fields and passes the driving
//! fields through untouched:
//!
//! | Field | Missing payload value becomes |
//! |-------|-------------------------------|
//! | `fuel` | `100` |
//! | `engine_health` | `100` |
//! | `nitrous` | `0` |
//! | `street_name1` / `street_name2` | `"UNKNOWN"` |
//! | `heading` | `"N"` |
//! | `speed` | `f32::NAN` (passthrough, renders as `NaN`) |
//! | `gear` | `None` (renders blank) |
//! | `speed_unit` | empty (renders blank) |
//! | `is_in_vehicle` | `false` (overlay stays hidden) |
//!
//! No validation happens here: out-of-range or negative numerics are
//! forwarded unchanged. A snapshot is replaced wholesale on every event;
//! there is no field-level merge with its predecessor.

use heapless::String;

// =============================================================================
// Text Field Capacities
// =============================================================================

/// Maximum characters of a street name kept for display.
pub const STREET_NAME_LEN: usize = 32;

/// Maximum characters of the speed unit label.
pub const SPEED_UNIT_LEN: usize = 8;

/// Maximum characters of the compass heading label.
pub const HEADING_LEN: usize = 4;

// =============================================================================
// Inbound Payload
// =============================================================================

/// Raw body of a `"vehicle"` channel event. Every field is optional; the
/// host transport performs no validation before handing it over.
#[derive(Clone, Copy, Debug, Default)]
pub struct VehiclePayload<'a> {
    /// Current speed in the unit named by `speed_unit`. Expected non-negative,
    /// not clamped.
    pub speed: Option<f32>,
    /// Current gear. `0` is the reverse sentinel.
    pub gear: Option<i32>,
    /// Free-form speed unit label (e.g. "kmh", "mph").
    pub speed_unit: Option<&'a str>,
    /// Primary street name.
    pub street_name1: Option<&'a str>,
    /// Cross street name. Empty suppresses the street suffix.
    pub street_name2: Option<&'a str>,
    /// Short compass label ("N", "SW", ...).
    pub heading: Option<&'a str>,
    /// Fuel level, semantically a percentage in [0, 100].
    pub fuel: Option<f32>,
    /// Engine health, semantically a percentage in [0, 100].
    pub engine_health: Option<f32>,
    /// Nitrous level, semantically a percentage in [0, 100].
    pub nitrous: Option<f32>,
    /// Whether the player is currently inside a vehicle.
    pub is_in_vehicle: Option<bool>,
}

// =============================================================================
// Telemetry Snapshot
// =============================================================================

/// The single, fully-formed telemetry record currently displayed.
///
/// Created by [`TelemetrySnapshot::from_payload`]; one snapshot is live at a
/// time and every event overwrites it completely.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetrySnapshot {
    /// Speed as received. `NAN` when the payload carried no speed.
    pub speed: f32,
    /// Gear as received; `None` when the payload carried no gear.
    pub gear: Option<i32>,
    /// Speed unit label as received (upper-casing happens at layout time).
    pub speed_unit: String<SPEED_UNIT_LEN>,
    /// Primary street name, defaulted to `"UNKNOWN"`.
    pub street_name1: String<STREET_NAME_LEN>,
    /// Cross street name, defaulted to `"UNKNOWN"`. Suppressed when empty.
    pub street_name2: String<STREET_NAME_LEN>,
    /// Compass heading, defaulted to `"N"`.
    pub heading: String<HEADING_LEN>,
    /// Fuel percentage; the defaulting step makes this `Some(100)` when the
    /// payload carried none.
    pub fuel: Option<f32>,
    /// Engine health percentage; defaulted to `Some(100)`.
    pub engine_health: Option<f32>,
    /// Nitrous percentage; defaulted to `Some(0)`.
    pub nitrous: Option<f32>,
    /// Overlay visibility gate. Missing payload flag reads as `false`.
    pub is_in_vehicle: bool,
}

impl TelemetrySnapshot {
    /// Build a complete snapshot from a raw payload, applying the fixed
    /// defaults above. Never fails: malformed payloads degrade to defaulted
    /// or absent fields.
    pub fn from_payload(payload: &VehiclePayload<'_>) -> Self {
        Self {
            speed: payload.speed.unwrap_or(f32::NAN),
            gear: payload.gear,
            speed_unit: bounded(payload.speed_unit.unwrap_or("")),
            street_name1: bounded(payload.street_name1.unwrap_or("UNKNOWN")),
            street_name2: bounded(payload.street_name2.unwrap_or("UNKNOWN")),
            heading: bounded(payload.heading.unwrap_or("N")),
            fuel: Some(payload.fuel.unwrap_or(100.0)),
            engine_health: Some(payload.engine_health.unwrap_or(100.0)),
            nitrous: Some(payload.nitrous.unwrap_or(0.0)),
            is_in_vehicle: payload.is_in_vehicle.unwrap_or(false),
        }
    }

    /// True when every sub-gauge value (engine, fuel, nitrous) is absent.
    /// After the defaulting step this can only hold for snapshots built by
    /// hand; the gauge row checks it before rendering.
    pub const fn vehicle_info_absent(&self) -> bool {
        self.engine_health.is_none() && self.fuel.is_none() && self.nitrous.is_none()
    }
}

/// Copy a str into a bounded string, dropping characters past the capacity.
/// Silent truncation matches the no-failure contract of the listener.
fn bounded<const N: usize>(src: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in src.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
