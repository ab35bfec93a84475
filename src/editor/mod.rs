//! Editing session and host seams.

/// Clipboard and display-surface traits.
pub mod host;
/// Tick-driven editor state.
pub mod session;
