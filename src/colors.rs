//! Color palette constants (Rgb565).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Background fill color (white page behind the session label).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Session label foreground color.
pub const BLACK: Rgb565 = Rgb565::BLACK;
