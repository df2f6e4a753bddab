//! Fixed sub-gauge thresholds.
//!
//! Each sub-gauge flips its icon tint at a fixed fill percentage: at low
//! fill the icon sits over the track background rather than the fill color,
//! so the tint switches to keep contrast against whichever surface the icon
//! overlaps. The nitrous gauge additionally has a visibility floor below
//! which it is not drawn at all.
//!
//! Thresholds are compile-time constants with ordering assertions, so a bad
//! edit fails the build rather than shipping a wrong tint flip.

// =============================================================================
// Icon Tint Flip Thresholds
// =============================================================================

/// Engine health at or below this percentage shows the light icon tint.
pub const ENGINE_TINT_FLIP: f32 = 26.0;

/// Fuel at or below this percentage shows the light icon tint.
pub const FUEL_TINT_FLIP: f32 = 18.0;

/// Nitrous at or below this percentage shows the light icon tint.
pub const NITROUS_TINT_FLIP: f32 = 15.0;

// =============================================================================
// Nitrous Visibility Floor
// =============================================================================

/// Nitrous values below this are not drawn at all. Values in (0, 1) and
/// absence both suppress the bar; exactly 1 and above render it.
pub const NITROUS_VISIBLE_MIN: f32 = 1.0;

// Compile-time validation: every tint flip must sit inside the gauge range,
// and the nitrous flip must be above its own visibility floor.
const _: () = assert!(ENGINE_TINT_FLIP > 0.0 && ENGINE_TINT_FLIP < 100.0);
const _: () = assert!(FUEL_TINT_FLIP > 0.0 && FUEL_TINT_FLIP < 100.0);
const _: () = assert!(NITROUS_TINT_FLIP > 0.0 && NITROUS_TINT_FLIP < 100.0);
const _: () = assert!(NITROUS_VISIBLE_MIN < NITROUS_TINT_FLIP);

// =============================================================================
// Unit Tests
// =============================================================================
