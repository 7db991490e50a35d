//! Display surface manager.
//!
//! Owns the panel handle for the whole process lifetime: acquire once, wait
//! once for refresh readiness, present exactly once, then idle. There is no
//! re-render loop anywhere in this program.
//!
//! In simulator mode the physical panel is stood in for by
//! `SimulatorDisplay` + `Window`; on hardware the same contract maps onto
//! the panel driver (readiness wait before first draw, one synchronous
//! refresh pushing composed pixels out).
//!
//! Failure semantics: none. Acquisition cannot fail in simulator mode, and
//! any draw failure would be fatal at boot anyway; draw results on the
//! infallible simulator target are discarded at the call sites.

use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::config::{DISPLAY_SETTLE, IDLE_POLL, SCREEN_HEIGHT, SCREEN_WIDTH};

/// The session display: panel plus its presentation window.
///
/// Panel dimensions are the compile-time constants in [`crate::config`];
/// the surface is always created at exactly that size.
pub struct SessionDisplay {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
}

impl SessionDisplay {
    /// Acquire the display surface and its window.
    pub fn new() -> Self {
        let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let output_settings = OutputSettingsBuilder::new().scale(2).build();
        let window = Window::new("Race Session Display", &output_settings);
        Self { display, window }
    }

    /// Block until the panel reports it is safe to draw.
    ///
    /// One-time settle before the first draw, not a polling loop.
    pub fn wait_until_ready(&self) {
        thread::sleep(DISPLAY_SETTLE);
    }

    /// The draw target for composing content before the refresh.
    pub fn target(&mut self) -> &mut SimulatorDisplay<Rgb565> {
        &mut self.display
    }

    /// Push the composed frame to the panel. Called exactly once.
    pub fn refresh(&mut self) {
        self.window.update(&self.display);
    }

    /// Idle forever showing the refreshed frame.
    ///
    /// The hardware equivalent is an empty `loop {}` after the single
    /// refresh; in simulator mode the loop must also service window events
    /// so the OS window stays responsive and can be closed. Returns only
    /// when the window is closed.
    pub fn idle(mut self) {
        loop {
            for ev in self.window.events() {
                if matches!(ev, SimulatorEvent::Quit) {
                    return;
                }
            }
            thread::sleep(IDLE_POLL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BG_SCALE, BG_WIDTH};

    #[test]
    fn test_reported_dimensions_match_panel_constants() {
        // Dimensions are the boundary the formatter/label layer relies on;
        // they must agree with the compile-time layout constants.
        assert_eq!(SCREEN_WIDTH, BG_WIDTH * BG_SCALE);
        assert_eq!(SCREEN_WIDTH, 320);
        assert_eq!(SCREEN_HEIGHT, 240);
    }
}
