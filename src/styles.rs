//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are defined as `const` so the compiler
//! computes them at compile time and stores them in the binary's read-only
//! data section. The session screen composes exactly one frame, but the same
//! rule the hardware renderer follows applies here: no per-draw style
//! construction.
//!
//! # Font Choice
//!
//! The session label is a terminal-style monospace at 2x scale (a 12px base
//! doubled to ~24px). Monospace fonts in `embedded-graphics` do not scale at
//! draw time, so the 2x scale is realized by selecting `ProFont` 24pt,
//! double the 12pt base.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::BLACK;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered multi-line text anchored by the top of its bounding box.
///
/// `Alignment::Center` centers every line of a multi-line string around the
/// given X coordinate; `Baseline::Top` makes the given Y coordinate the top
/// edge of the first line, which is what the anchor math in
/// [`crate::widgets::label`] produces.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Session Label Styles
// =============================================================================

/// Fixed monospace font for the session label (`ProFont` 24pt).
/// Exposed so the label widget can measure text from the font metrics.
pub const SESSION_FONT: &MonoFont = &PROFONT_24_POINT;

/// Black session label text on the white background surface.
pub const SESSION_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(SESSION_FONT, BLACK);
