//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so every style the overlay uses is computed at
//! compile time and referenced directly instead of built per frame.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::TEXT;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned from the top. Heading (top-left) and gear (bottom-left).
pub const ANCHOR_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned from the top. Street (top-right) and speed (bottom-right).
pub const ANCHOR_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Navigation labels: heading and street names (10x20 mono).
pub const NAV_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, TEXT);

/// Driving labels: gear and speed (`ProFont` 18pt, reads at a glance).
pub const DRIVE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, TEXT);
