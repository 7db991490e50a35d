//! Reduced-resolution background surface.
//!
//! The background is a flat color fill, so storing it at full panel
//! resolution would waste RAM (320x240x2 bytes = 150 KB on the hardware
//! target). Instead the surface keeps one palette index byte per logical
//! pixel at 1/8 resolution (40x30 = 1200 bytes) plus a one-entry palette,
//! and presents each logical pixel as an 8x8 block of panel pixels.
//!
//! The trade is addressable resolution for memory: this surface can only
//! show 8x-blocky content, which is exactly right for a flat page behind a
//! text label. The label draws after the background so it composes on top.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::{BG_HEIGHT, BG_PIXEL_COUNT, BG_SCALE, BG_WIDTH};

/// Single-color palettized background bitmap at 1/8 panel resolution.
pub struct Background {
    /// Palette index per logical pixel, row-major.
    indices: [u8; BG_PIXEL_COUNT],

    /// One-entry color palette. All indices are 0.
    palette: [Rgb565; 1],
}

impl Background {
    /// Create a background filled with a single palette color.
    pub const fn new(color: Rgb565) -> Self {
        Self {
            indices: [0; BG_PIXEL_COUNT],
            palette: [color],
        }
    }

    /// Panel-space rectangle covered by the logical pixel at (`lx`, `ly`).
    ///
    /// Each logical pixel maps to a `BG_SCALE` x `BG_SCALE` block; logical
    /// (0, 0) is the panel's top-left corner.
    pub const fn tile_rect(
        lx: u32,
        ly: u32,
    ) -> Rectangle {
        Rectangle::new(
            Point::new((lx * BG_SCALE) as i32, (ly * BG_SCALE) as i32),
            Size::new(BG_SCALE, BG_SCALE),
        )
    }

    /// Draw the scaled background over the full panel.
    ///
    /// Draw this before any foreground content; the session label is
    /// composed on top of it.
    pub fn draw(
        &self,
        display: &mut SimulatorDisplay<Rgb565>,
    ) {
        for ly in 0..BG_HEIGHT {
            for lx in 0..BG_WIDTH {
                let index = self.indices[(ly * BG_WIDTH + lx) as usize];
                let color = self.palette[index as usize];
                Self::tile_rect(lx, ly)
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(display)
                    .ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_new_background_is_single_color() {
        let bg = Background::new(WHITE);
        assert!(bg.indices.iter().all(|&i| i == 0), "all indices reference palette entry 0");
        assert_eq!(bg.palette[0], WHITE);
    }

    #[test]
    fn test_first_tile_at_origin() {
        let rect = Background::tile_rect(0, 0);
        assert_eq!(rect.top_left, Point::zero());
        assert_eq!(rect.size, Size::new(BG_SCALE, BG_SCALE));
    }

    #[test]
    fn test_last_tile_reaches_panel_corner() {
        let rect = Background::tile_rect(BG_WIDTH - 1, BG_HEIGHT - 1);
        assert_eq!(
            rect.top_left.x + rect.size.width as i32,
            SCREEN_WIDTH as i32,
            "tiles must end at the right edge"
        );
        assert_eq!(
            rect.top_left.y + rect.size.height as i32,
            SCREEN_HEIGHT as i32,
            "tiles must end at the bottom edge"
        );
    }

    #[test]
    fn test_adjacent_tiles_do_not_overlap() {
        let a = Background::tile_rect(0, 0);
        let b = Background::tile_rect(1, 0);
        assert_eq!(
            a.top_left.x + BG_SCALE as i32,
            b.top_left.x,
            "horizontal neighbors must abut exactly"
        );
    }
}
