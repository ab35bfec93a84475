//! curveed is the core of an in-game editor for piecewise cubic Hermite animation curves.
//!
//! A user edits keyframes `(time, value, tangent_in, tangent_out)`, sees a rasterized plot of the
//! resulting curve, and can copy the keys out as text or paste them back in.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: mutations on a [`KeyframeSet`] only mark it dirty.
//! 2. **Rebuild** (once per tick): sort if enabled, build a [`HermiteCurve`], rasterize it with a
//!    [`Rasterizer`] into a [`PixelBuffer`], regenerate the text view with [`TextCodec`].
//! 3. **Present**: the host receives the buffer through a [`DisplaySurface`].
//!
//! [`CurveEditor`] wires the steps together. The editing core never fails: unparsable numbers
//! become `0`, unrecognized text lines are skipped, empty and flat curves render a centred line.
//! [`CurveError`] is reserved for configuration, IO and image export.
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod curve;
pub mod editor;
mod foundation;
pub mod keyframe;
pub mod raster;

pub use codec::text::{DEFAULT_KEY_NAME, TextCodec};
pub use config::EditorConfig;
pub use curve::hermite::{HermiteCurve, hermite_segment, smooth_tangents};
pub use editor::host::{Clipboard, DisplaySurface, MemoryClipboard, MemorySurface};
pub use editor::session::CurveEditor;
pub use foundation::core::{KeyId, Rgb8};
pub use foundation::error::{CurveError, CurveResult};
pub use keyframe::key::{EditableKey, Field, KeyText, Keyframe, format_float, parse_float};
pub use keyframe::set::{KeyEntry, KeyframeSet};
pub use raster::pixels::PixelBuffer;
pub use raster::rasterizer::{RasterOutput, RasterStyle, Rasterizer, guide_row, plot_row};
