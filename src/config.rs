//! Overlay layout constants.
//!
//! The overlay is a fixed arrangement over a bounded surface: the gauge row
//! spans the full width at the top, the four corner labels sit at fixed
//! anchors below it. Nothing reflows; everything here is computed at compile
//! time so the draw path does no layout arithmetic.

use embedded_graphics::prelude::Point;

// =============================================================================
// Surface
// =============================================================================

/// Overlay surface width in pixels (matches the simulator window).
pub const SURFACE_WIDTH: u32 = 320;

/// Overlay surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 240;

// =============================================================================
// Gauge Row
// =============================================================================

/// Top of the gauge bar row (spans the full surface width).
pub const GAUGE_ROW_Y: i32 = 0;

/// Height of each gauge bar, border included.
pub const GAUGE_HEIGHT: u32 = 20;

/// Border thickness around each gauge track.
pub const GAUGE_BORDER_W: u32 = 2;

/// Trailing gap to the right of each gauge bar.
pub const GAUGE_GAP: u32 = 2;

/// Gauge width when only engine and fuel are shown (nitrous suppressed).
/// Pre-computed so the draw path does no division.
pub const GAUGE_SLOT_W_PAIR: u32 = (SURFACE_WIDTH - 2 * GAUGE_GAP) / 2;

/// Gauge width when all three sub-gauges are shown.
pub const GAUGE_SLOT_W_TRIPLE: u32 = (SURFACE_WIDTH - 3 * GAUGE_GAP) / 3;

// =============================================================================
// Corner Label Anchors
// =============================================================================

/// Horizontal padding of the corner labels.
pub const PAD_X: i32 = 10;

/// Vertical padding of the corner labels.
pub const PAD_Y: i32 = 2;

/// Top edge of the navigation label line, clear of the gauge row.
const NAV_Y: i32 = GAUGE_HEIGHT as i32 + 10 + PAD_Y;

/// Top edge of the driving label line (`ProFont` 18pt is 24px tall).
const DRIVE_Y: i32 = SURFACE_HEIGHT as i32 - PAD_Y - 24;

/// Heading label anchor (top-left, left-aligned).
pub const HEADING_POS: Point = Point::new(PAD_X, NAV_Y);

/// Street label anchor (top-right, right-aligned).
pub const STREET_POS: Point = Point::new(SURFACE_WIDTH as i32 - PAD_X, NAV_Y);

/// Gear label anchor (bottom-left, left-aligned).
pub const GEAR_POS: Point = Point::new(PAD_X, DRIVE_Y);

/// Speed label anchor (bottom-right, right-aligned).
pub const SPEED_POS: Point = Point::new(SURFACE_WIDTH as i32 - PAD_X, DRIVE_Y);

// Compile-time validation: the gauge row and both label lines must fit the
// surface, and slot widths must leave room for the track inset.
const _: () = assert!(GAUGE_SLOT_W_PAIR > 4 * GAUGE_BORDER_W);
const _: () = assert!(GAUGE_SLOT_W_TRIPLE > 4 * GAUGE_BORDER_W);
const _: () = assert!(NAV_Y > GAUGE_ROW_Y + GAUGE_HEIGHT as i32);
const _: () = assert!(DRIVE_Y > NAV_Y);
