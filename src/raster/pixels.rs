use std::path::Path;

use crate::foundation::{
    core::Rgb8,
    error::{CurveError, CurveResult},
};

/// Fixed-size RGB8 pixel grid.
///
/// Storage is row-major from the top edge. Plot rows count from the bottom edge, matching the
/// preview texture the curve is drawn into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Rgb8) -> Self {
        let mut out = Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        };
        out.fill(fill);
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB8 bytes, tightly packed, top row first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn fill(&mut self, color: Rgb8) {
        for px in self.data.chunks_exact_mut(3) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Pixel at `(x, y)` with `y` counted from the top. `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        let i = self.offset(x, y)?;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Write `(x, y)` with `y` counted from the top. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 3].copy_from_slice(&color.to_array());
        }
    }

    /// Pixel at plot row `row` (counted from the bottom).
    pub fn get_plot(&self, x: u32, row: u32) -> Option<Rgb8> {
        let y = self.height.checked_sub(1)?.checked_sub(row)?;
        self.get(x, y)
    }

    /// Write plot row `row` (counted from the bottom).
    pub fn set_plot(&mut self, x: u32, row: u32, color: Rgb8) {
        let Some(y) = self.height.checked_sub(1).and_then(|h| h.checked_sub(row)) else {
            return;
        };
        self.set(x, y, color);
    }

    /// Encode as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> CurveResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CurveError::io(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            CurveError::Other(
                anyhow::Error::new(e).context(format!("write png '{}'", path.display())),
            )
        })
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }
}
