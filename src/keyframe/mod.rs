//! Keyframe data model.

/// Keyframe values, their editable text view and lenient float parsing.
pub mod key;
/// Ordered, id-addressed keyframe collection.
pub mod set;
