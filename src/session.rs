//! Session state model.
//!
//! One record describes the racing-session phase shown on screen. The state
//! is constructed once before the single refresh and never mutated; there is
//! no live telemetry source behind it (explicitly out of scope).
//!
//! Three canned demo sessions (one per phase) are provided as constructors
//! so the binary selects one explicitly instead of reading a module-level
//! global.

use std::time::Duration;

/// Racing event phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionType {
    Practice,
    Qualifying,
    Race,
}

impl SessionType {
    /// Human-readable phase name (mixed case; the formatter uppercases it).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Practice => "Practice",
            Self::Qualifying => "Qualifying",
            Self::Race => "Race",
        }
    }
}

/// A racing-session snapshot: phase, lap context, time remaining.
///
/// # Invariants
/// - `current_lap >= 1` and `current_lap <= total_laps`
/// - `total_laps >= 1` and is fixed for the session
///
/// Debug-asserted in [`SessionState::new`]; the demo literals satisfy them
/// by construction.
#[derive(Clone, Copy, Debug)]
pub struct SessionState {
    pub session_type: SessionType,
    pub current_lap: u32,
    pub total_laps: u32,
    pub time_remaining: Duration,
    pub interrupt: bool,
}

impl SessionState {
    /// Build a session snapshot from live values.
    pub fn new(
        session_type: SessionType,
        current_lap: u32,
        total_laps: u32,
        time_remaining: Duration,
        interrupt: bool,
    ) -> Self {
        debug_assert!(current_lap >= 1, "lap numbering starts at 1");
        debug_assert!(total_laps >= 1, "a session has at least one lap");
        debug_assert!(current_lap <= total_laps, "current lap cannot exceed session total");
        Self {
            session_type,
            current_lap,
            total_laps,
            time_remaining,
            interrupt,
        }
    }

    /// Demo literal: practice session, lap 2 of 5, 5m3s remaining.
    pub const fn practice() -> Self {
        Self {
            session_type: SessionType::Practice,
            current_lap: 2,
            total_laps: 5,
            time_remaining: Duration::from_secs(5 * 60 + 3),
            interrupt: true,
        }
    }

    /// Demo literal: qualifying session, lap 2 of 5, 5m3s remaining.
    pub const fn qualifying() -> Self {
        Self {
            session_type: SessionType::Qualifying,
            current_lap: 2,
            total_laps: 5,
            time_remaining: Duration::from_secs(5 * 60 + 3),
            interrupt: false,
        }
    }

    /// Demo literal: race session, lap 20 of 50, 5m3s remaining.
    pub const fn race() -> Self {
        Self {
            session_type: SessionType::Race,
            current_lap: 20,
            total_laps: 50,
            time_remaining: Duration::from_secs(5 * 60 + 3),
            interrupt: false,
        }
    }
}
