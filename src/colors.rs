//! Color constants for the HUD overlay.
//!
//! The palette mirrors the shared visual theme the overlay consumes: a dark
//! track with a darker border, one fill color per sub-gauge, a light gray
//! for the corner labels, and two icon tints.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Custom colors below are scaled from the theme's 8-bit RGB values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Base Colors
// =============================================================================

/// Pure black. Simulator window clear color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Light icon tint on low-fill gauges.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Gauge Surfaces
// =============================================================================

/// Gauge track background (dark slate, theme dark.6 ≈ rgb 44,46,51).
pub const TRACK: Rgb565 = Rgb565::new(5, 11, 6);

/// Gauge border (near-black, theme dark.7 ≈ rgb 26,27,30).
pub const BORDER: Rgb565 = Rgb565::new(3, 7, 4);

// =============================================================================
// Gauge Fills
// =============================================================================

/// Engine health fill (soft yellow ≈ rgb 255,224,102).
pub const ENGINE_FILL: Rgb565 = Rgb565::new(31, 55, 12);

/// Fuel fill (soft orange ≈ rgb 255,192,120).
pub const FUEL_FILL: Rgb565 = Rgb565::new(31, 47, 15);

/// Nitrous fill (soft violet ≈ rgb 177,151,252).
pub const NITROUS_FILL: Rgb565 = Rgb565::new(22, 37, 31);

// =============================================================================
// Text & Icon Tints
// =============================================================================

/// Corner label text (light gray ≈ rgb 206,212,218).
pub const TEXT: Rgb565 = Rgb565::new(25, 52, 27);

/// Light icon tint, used when a gauge's fill is at or below its flip
/// threshold and the icon sits over the dark track.
pub const ICON_LIGHT: Rgb565 = WHITE;

/// Dark icon tint, used when the icon sits over the bright fill. Matches the
/// track color, same as the theme does.
pub const ICON_DARK: Rgb565 = TRACK;
