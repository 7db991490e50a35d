//! Session text formatting.
//!
//! Produces the fixed four-line block the session screen renders:
//!
//! ```text
//! Session: QUALIFYING
//! Lap 2 of 5
//! Remaining: 5m3s
//! Interrupt me? NO
//! ```
//!
//! Every field is read from the single [`SessionState`] argument; in
//! particular the `of <N>` lap total is bound to the active session's own
//! `total_laps` field, never to a sibling record.
//!
//! Formatting uses `heapless::String` + `core::fmt::Write`, the same
//! stack-allocated pattern the rest of the rendering code uses for values.

use core::fmt::Write;

use heapless::String;

use crate::session::SessionState;

/// Capacity of the formatted session block. Sized for the worst case of two
/// ten-digit lap counters plus a multi-hour time remaining.
pub const SESSION_TEXT_CAPACITY: usize = 128;

/// Format a session snapshot into the four-line display block.
///
/// Line layout is fixed: phase, lap progress, time remaining, interrupt
/// flag. The phase name is fully uppercased regardless of how the
/// [`SessionType`](crate::session::SessionType) label is cased, and the
/// interrupt flag renders as the literal strings `YES`/`NO`.
pub fn session_text(session: &SessionState) -> String<SESSION_TEXT_CAPACITY> {
    let mut out: String<SESSION_TEXT_CAPACITY> = String::new();

    let _ = out.push_str("Session: ");
    for c in session.session_type.name().chars() {
        let _ = out.push(c.to_ascii_uppercase());
    }

    let total_secs = session.time_remaining.as_secs();
    let _ = write!(
        out,
        "\nLap {} of {}\nRemaining: {}m{}s\nInterrupt me? {}",
        session.current_lap,
        session.total_laps,
        total_secs / 60,
        total_secs % 60,
        if session.interrupt { "YES" } else { "NO" },
    );

    out
}
