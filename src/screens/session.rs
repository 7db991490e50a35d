//! Session status screen.
//!
//! Composes the one-shot frame: white reduced-resolution background first,
//! then the centered four-line session label on top, then exactly one
//! refresh. Nothing on this screen updates after the refresh.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │                                    │
//! │        Session: QUALIFYING         │
//! │            Lap 2 of 5              │
//! │          Remaining: 5m3s           │
//! │          Interrupt me? NO          │
//! │                                    │
//! └────────────────────────────────────┘
//! ```

use crate::background::Background;
use crate::colors::WHITE;
use crate::display::SessionDisplay;
use crate::format::session_text;
use crate::session::SessionState;
use crate::widgets::draw_session_label;

/// Compose and present the session status frame.
///
/// Draw order matters: background first so the label composes on top.
/// Issues the program's single refresh; the caller idles afterwards.
pub fn show_session_screen(
    screen: &mut SessionDisplay,
    session: &SessionState,
) {
    let background = Background::new(WHITE);
    background.draw(screen.target());

    let text = session_text(session);
    draw_session_label(screen.target(), &text);

    screen.refresh();
}
