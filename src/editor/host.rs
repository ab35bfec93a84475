//! Seams to the host application.
//!
//! The editor core never talks to a window system directly. The host supplies a clipboard and a
//! display surface; in-memory versions are provided for headless use and tests.

use crate::{foundation::error::CurveResult, raster::pixels::PixelBuffer};

/// Opaque host clipboard.
pub trait Clipboard {
    /// Current clipboard text, if any.
    fn get_text(&self) -> Option<String>;
    /// Replace the clipboard text.
    fn set_text(&mut self, text: &str);
}

/// Surface that displays the rendered preview.
pub trait DisplaySurface {
    /// Show `pixels`. Called only after a completed rebuild.
    fn submit(&mut self, pixels: &PixelBuffer) -> CurveResult<()>;
}

/// Clipboard backed by a `String`.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// Surface that keeps the last submitted buffer.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    last: Option<PixelBuffer>,
    submits: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&PixelBuffer> {
        self.last.as_ref()
    }

    /// Number of buffers submitted so far.
    pub fn submits(&self) -> usize {
        self.submits
    }
}

impl DisplaySurface for MemorySurface {
    fn submit(&mut self, pixels: &PixelBuffer) -> CurveResult<()> {
        self.last = Some(pixels.clone());
        self.submits += 1;
        Ok(())
    }
}
