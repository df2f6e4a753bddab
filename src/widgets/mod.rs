//! Drawing widgets for the HUD overlay.
//!
//! - [`gauges`]: bordered gauge bar with fill and tinted icon slot
//! - [`labels`]: aligned corner text at fixed anchors
//!
//! All widgets draw against generic `DrawTarget<Color = Rgb565>` and follow
//! the guard-and-skip convention: degenerate geometry or empty text draws
//! nothing rather than erroring.

mod gauges;
mod labels;

pub use gauges::draw_gauge_bar;
pub use labels::draw_corner_label;
