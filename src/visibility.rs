//! Overlay visibility gate.
//!
//! Binary decision driven solely by each incoming event's in-vehicle flag:
//! the whole overlay is rendered if and only if the current snapshot says
//! the player is in a vehicle. Hidden initially (pre-first-event) and
//! whenever the flag is false or was missing from the payload. No debounce,
//! no fade, no hysteresis.

use crate::snapshot::TelemetrySnapshot;

/// Whether the overlay should be drawn at all.
pub fn overlay_visible(snapshot: Option<&TelemetrySnapshot>) -> bool {
    snapshot.is_some_and(|s| s.is_in_vehicle)
}
