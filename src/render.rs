//! Overlay rendering: gate, compose, place.
//!
//! [`render_overlay`] is the render path's single entry point: it applies
//! the visibility gate, composes the layout from the current snapshot, and
//! places the five groups at their fixed anchors. The Hidden state draws
//! nothing at all, no frame and no placeholder.
//!
//! Gauge slot widths depend only on whether the nitrous bar is present
//! (two or three equal slots across the full width); both variants are
//! pre-computed in [`crate::config`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{ENGINE_FILL, FUEL_FILL, NITROUS_FILL};
use crate::config::{
    GAUGE_GAP, GAUGE_HEIGHT, GAUGE_ROW_Y, GAUGE_SLOT_W_PAIR, GAUGE_SLOT_W_TRIPLE, GEAR_POS, HEADING_POS, SPEED_POS,
    STREET_POS,
};
use crate::layout::{GaugeRow, OverlayLayout, compose};
use crate::store::DisplayStateStore;
use crate::styles::{ANCHOR_LEFT, ANCHOR_RIGHT, DRIVE_STYLE, NAV_STYLE};
use crate::visibility::overlay_visible;
use crate::widgets::{draw_corner_label, draw_gauge_bar};

/// Render the overlay from the store's current snapshot.
///
/// Returns `true` when the overlay was drawn, `false` when the gate kept it
/// hidden (pre-first-event, or not in a vehicle). Callers clear the surface
/// themselves; this function only paints what the layout contains.
pub fn render_overlay<D>(display: &mut D, store: &DisplayStateStore) -> bool
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(snapshot) = store.current() else {
        return false;
    };
    if !overlay_visible(Some(&snapshot)) {
        return false;
    }
    draw_overlay(display, &compose(&snapshot));
    true
}

/// Place the five composed groups at their fixed anchors.
pub fn draw_overlay<D>(display: &mut D, layout: &OverlayLayout)
where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(row) = &layout.gauges {
        draw_gauge_row(display, row);
    }

    draw_corner_label(display, &layout.heading, HEADING_POS, NAV_STYLE, ANCHOR_LEFT);
    draw_corner_label(display, &layout.street, STREET_POS, NAV_STYLE, ANCHOR_RIGHT);
    draw_corner_label(display, &layout.gear, GEAR_POS, DRIVE_STYLE, ANCHOR_LEFT);
    draw_corner_label(display, &layout.speed, SPEED_POS, DRIVE_STYLE, ANCHOR_RIGHT);
}

/// Draw the gauge bar row: engine, fuel, nitrous left-to-right in equal
/// slots spanning the full surface width.
fn draw_gauge_row<D>(display: &mut D, row: &GaugeRow)
where
    D: DrawTarget<Color = Rgb565>,
{
    let slot_w = if row.nitrous.is_some() {
        GAUGE_SLOT_W_TRIPLE
    } else {
        GAUGE_SLOT_W_PAIR
    };
    let step = (slot_w + GAUGE_GAP) as i32;

    draw_gauge_bar(display, 0, GAUGE_ROW_Y, slot_w, GAUGE_HEIGHT, &row.engine, ENGINE_FILL);
    draw_gauge_bar(display, step, GAUGE_ROW_Y, slot_w, GAUGE_HEIGHT, &row.fuel, FUEL_FILL);
    if let Some(nitrous) = &row.nitrous {
        draw_gauge_bar(display, step * 2, GAUGE_ROW_Y, slot_w, GAUGE_HEIGHT, nitrous, NITROUS_FILL);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
