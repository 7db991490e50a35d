//! Application configuration constants.
//!
//! All layout values are computed at compile time as `const`. The background
//! geometry (`BG_WIDTH`, `BG_HEIGHT`) is derived from the panel size and the
//! background scale factor, so a panel size change propagates everywhere
//! without touching the drawing code.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// How long to wait after acquiring the display before the first draw.
///
/// Models the panel's refresh-readiness delay (e-paper style panels report a
/// `time_to_refresh` interval during which drawing is unsafe). This is a
/// one-time settle at startup, not a polling loop.
pub const DISPLAY_SETTLE: Duration = Duration::from_millis(150);

/// Poll interval for the idle tail after the single refresh.
/// The idle loop does no work besides servicing window-close events.
pub const IDLE_POLL: Duration = Duration::from_millis(50);

// =============================================================================
// Background Surface Configuration
// =============================================================================

/// Scale factor between the logical background bitmap and the panel.
/// One logical background pixel covers an 8x8 block of panel pixels.
pub const BG_SCALE: u32 = 8;

/// Logical background width (one byte of palette index per logical pixel).
pub const BG_WIDTH: u32 = SCREEN_WIDTH / BG_SCALE;

/// Logical background height.
pub const BG_HEIGHT: u32 = SCREEN_HEIGHT / BG_SCALE;

/// Total logical background pixels. At 320x240 this is 40x30 = 1200 bytes of
/// index storage instead of a full-resolution framebuffer.
pub const BG_PIXEL_COUNT: usize = (BG_WIDTH * BG_HEIGHT) as usize;

// =============================================================================
// Session Label Configuration
// =============================================================================

/// Horizontal padding applied to the session label's bounding box, in pixels.
pub const LABEL_PADDING_X: u32 = 4;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Screen center X coordinate. The session label is anchored here.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_geometry_divides_evenly() {
        // The scaled background must cover the panel exactly, no remainder.
        assert_eq!(BG_WIDTH * BG_SCALE, SCREEN_WIDTH, "background tiles must span full width");
        assert_eq!(BG_HEIGHT * BG_SCALE, SCREEN_HEIGHT, "background tiles must span full height");
    }

    #[test]
    fn test_background_storage_size() {
        // 40x30 logical pixels for the 320x240 panel
        assert_eq!(BG_PIXEL_COUNT, 1200, "index storage should be 1200 bytes at 320x240");
    }

    #[test]
    fn test_screen_center() {
        assert_eq!(CENTER_X, 160);
        assert_eq!(CENTER_Y, 120);
    }
}
