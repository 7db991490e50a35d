//! Widget components for the session display.

pub mod label;

pub use label::draw_session_label;
