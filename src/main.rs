// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in anchor calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Race session status display.
//!
//! A one-shot status board for a small panel: shows which racing-session
//! phase is active (practice, qualifying, race), the lap progress, the time
//! remaining, and whether the driver may be interrupted. The frame is
//! composed once at boot and presented with a single refresh; there is no
//! update loop and no input handling.
//!
//! # Boot Sequence
//!
//! 1. Acquire the display surface
//! 2. Wait once for refresh readiness (panel settle)
//! 3. Compose background + session label
//! 4. Issue exactly one refresh
//! 5. Idle forever
//!
//! # Session Selection
//!
//! There is no telemetry source; the displayed session is one of the three
//! demo literals on [`SessionState`], selected here and passed down
//! explicitly. Swap the constructor to show a different phase.

mod background;
mod colors;
mod config;
mod display;
mod format;
mod screens;
mod session;
mod styles;
mod widgets;

use display::SessionDisplay;
use screens::show_session_screen;
use session::SessionState;

fn main() {
    let mut screen = SessionDisplay::new();

    // Wait until the panel reports it is safe to draw (one-time settle)
    screen.wait_until_ready();

    let session = SessionState::qualifying();
    show_session_screen(&mut screen, &session);

    // Explicit halt: the frame is final, nothing left to do but hold it
    screen.idle();
}
