//! Corner label drawing.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Text, TextStyle};

/// Draw an aligned text label at a fixed anchor. Empty text draws nothing;
/// suppressed labels are omitted whole, never rendered degraded.
pub fn draw_corner_label<D>(
    display: &mut D,
    text: &str,
    anchor: Point,
    char_style: MonoTextStyle<'static, Rgb565>,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if text.is_empty() {
        return;
    }
    Text::with_text_style(text, anchor, char_style, text_style)
        .draw(display)
        .ok();
}
