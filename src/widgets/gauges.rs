//! Gauge bar drawing.
//!
//! A gauge bar is a bordered track with a fill rectangle sized by the
//! visual's fill percentage and a small tinted icon slot anchored at the
//! track's left edge. The fill width is intentionally unclamped: a value
//! above 100 paints past the track (the display clips it), a negative value
//! paints nothing. Icon asset rendering itself is out of scope; the slot is
//! drawn as a tinted marker where the icon glyph composites.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BORDER, ICON_DARK, ICON_LIGHT, TRACK};
use crate::config::GAUGE_BORDER_W;
use crate::gauge::{GaugeVisual, IconTint};

/// Horizontal offset of the icon slot inside the track.
const ICON_INSET: i32 = 4;

/// Side length of the square icon slot.
const ICON_SIZE: u32 = 6;

/// Draw one gauge bar at the given position and size (border included).
pub fn draw_gauge_bar<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    visual: &GaugeVisual,
    fill_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if w <= 2 * GAUGE_BORDER_W || h <= 2 * GAUGE_BORDER_W {
        return;
    }

    // Border, then track inset by the border width
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(BORDER))
        .draw(display)
        .ok();

    let track_x = x + GAUGE_BORDER_W as i32;
    let track_y = y + GAUGE_BORDER_W as i32;
    let track_w = w - 2 * GAUGE_BORDER_W;
    let track_h = h - 2 * GAUGE_BORDER_W;
    Rectangle::new(Point::new(track_x, track_y), Size::new(track_w, track_h))
        .into_styled(PrimitiveStyle::with_fill(TRACK))
        .draw(display)
        .ok();

    // Fill: raw percentage of the track width, no clamping. Negative widths
    // draw nothing; overflow past the track is clipped by the display.
    let fill_w = (track_w as f32 * visual.fill_percent / 100.0) as i32;
    if fill_w > 0 {
        Rectangle::new(Point::new(track_x, track_y), Size::new(fill_w as u32, track_h))
            .into_styled(PrimitiveStyle::with_fill(fill_color))
            .draw(display)
            .ok();
    }

    // Icon slot: fixed at the track's left edge, vertically centered, tinted
    // for contrast against whichever surface it overlaps at this fill level
    let tint = match visual.icon_tint {
        IconTint::Light => ICON_LIGHT,
        IconTint::Dark => ICON_DARK,
    };
    let icon_y = track_y + (track_h as i32 - ICON_SIZE as i32) / 2;
    Rectangle::new(Point::new(track_x + ICON_INSET, icon_y), Size::new(ICON_SIZE, ICON_SIZE))
        .into_styled(PrimitiveStyle::with_fill(tint))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
