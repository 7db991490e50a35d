//! Anchored multi-line text label.
//!
//! Renders the session text block with a fixed monospace font, centered on
//! the screen via anchor-point placement: the label's padded bounding box is
//! measured from the font metrics, and the anchor point (a normalized 0-1
//! coordinate within that box) is mapped onto the anchored screen position.
//! Anchor (0.5, 0.5) at the screen center yields a fully centered block.
//!
//! Horizontal centering of the individual lines is handled by
//! `Alignment::Center`; the anchor math supplies the vertical placement and
//! keeps the box measurement (including padding) in one place.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::{CENTER_X, CENTER_Y, LABEL_PADDING_X};
use crate::styles::{CENTERED_TOP, SESSION_FONT, SESSION_TEXT_STYLE};

/// Anchor point for the session label: the center of its bounding box.
const ANCHOR_CENTER: (f32, f32) = (0.5, 0.5);

/// Measure the padded bounding box of a multi-line text block.
///
/// Width is the longest line's advance width plus `padding_x` on each side;
/// height is the line count times the font's line height. Empty text
/// measures as one empty line (zero width plus padding).
pub fn block_size(
    text: &str,
    font: &MonoFont,
    padding_x: u32,
) -> Size {
    let mut lines = 0u32;
    let mut longest = 0u32;
    for line in text.split('\n') {
        lines += 1;
        longest = longest.max(line.chars().count() as u32);
    }

    let width = longest * font.character_size.width + longest.saturating_sub(1) * font.character_spacing;
    let height = lines * font.character_size.height;
    Size::new(width + 2 * padding_x, height)
}

/// Map an anchor point within a box of the given size onto an anchored
/// screen position, returning the box's top-left corner.
///
/// The anchor is a normalized (0-1, 0-1) coordinate: (0, 0) pins the box's
/// top-left to the position, (1, 1) its bottom-right, (0.5, 0.5) its center.
pub fn anchored_top_left(
    size: Size,
    anchor: (f32, f32),
    position: Point,
) -> Point {
    Point::new(
        position.x - (size.width as f32 * anchor.0) as i32,
        position.y - (size.height as f32 * anchor.1) as i32,
    )
}

/// Draw the session text block centered on the screen.
///
/// The block is anchored at (0.5, 0.5) to the screen center, drawn with the
/// fixed session font and black foreground on top of whatever background is
/// already composed.
pub fn draw_session_label(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &str,
) {
    let size = block_size(text, SESSION_FONT, LABEL_PADDING_X);
    let top_left = anchored_top_left(size, ANCHOR_CENTER, Point::new(CENTER_X, CENTER_Y));

    // Alignment::Center wants the center X; Baseline::Top wants the block's
    // top edge as Y.
    let origin = Point::new(top_left.x + (size.width / 2) as i32, top_left.y);
    Text::with_text_style(text, origin, SESSION_TEXT_STYLE, CENTERED_TOP)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_top_left_is_identity() {
        let pos = Point::new(40, 60);
        assert_eq!(anchored_top_left(Size::new(100, 40), (0.0, 0.0), pos), pos);
    }

    #[test]
    fn test_anchor_center_splits_size_evenly() {
        let top_left = anchored_top_left(Size::new(100, 40), (0.5, 0.5), Point::new(160, 120));
        assert_eq!(top_left, Point::new(110, 100), "center anchor offsets by half the box");
    }

    #[test]
    fn test_anchor_bottom_right_subtracts_full_size() {
        let top_left = anchored_top_left(Size::new(100, 40), (1.0, 1.0), Point::new(160, 120));
        assert_eq!(top_left, Point::new(60, 80));
    }

    #[test]
    fn test_block_size_single_line() {
        let char_w = SESSION_FONT.character_size.width;
        let char_h = SESSION_FONT.character_size.height;
        let spacing = SESSION_FONT.character_spacing;

        let size = block_size("Lap 2 of 5", SESSION_FONT, 0);
        assert_eq!(size.width, 10 * char_w + 9 * spacing);
        assert_eq!(size.height, char_h);
    }

    #[test]
    fn test_block_size_uses_longest_line() {
        let char_w = SESSION_FONT.character_size.width;
        let char_h = SESSION_FONT.character_size.height;
        let spacing = SESSION_FONT.character_spacing;

        let size = block_size("Session: QUALIFYING\nLap 2 of 5", SESSION_FONT, 0);
        assert_eq!(size.width, 19 * char_w + 18 * spacing, "width comes from the longest line");
        assert_eq!(size.height, 2 * char_h, "height comes from the line count");
    }

    #[test]
    fn test_block_size_applies_horizontal_padding() {
        let unpadded = block_size("abc", SESSION_FONT, 0);
        let padded = block_size("abc", SESSION_FONT, 4);
        assert_eq!(padded.width, unpadded.width + 8, "padding applies on both sides");
        assert_eq!(padded.height, unpadded.height, "padding is horizontal only");
    }

    #[test]
    fn test_block_size_empty_text() {
        let size = block_size("", SESSION_FONT, 4);
        assert_eq!(size.width, 8, "empty text is padding only");
        assert_eq!(size.height, SESSION_FONT.character_size.height, "empty text is one empty line");
    }
}
