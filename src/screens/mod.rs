//! Screen composition for the session display.

pub mod session;

pub use session::show_session_screen;
