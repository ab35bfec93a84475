use crate::{
    curve::hermite::HermiteCurve,
    foundation::{
        core::Rgb8,
        error::{CurveError, CurveResult},
    },
    raster::pixels::PixelBuffer,
};

/// Colors and guide layout used by [`Rasterizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterStyle {
    pub background: Rgb8,
    pub gridline: Rgb8,
    pub curve: Rgb8,
    /// Number of horizontal guide rows (0 disables them).
    pub graph_labels: u32,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            background: Rgb8::BLACK,
            gridline: Rgb8::new(64, 64, 64),
            curve: Rgb8::GREEN,
            graph_labels: 4,
        }
    }
}

/// Result of one rasterization.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterOutput {
    /// Smallest sampled value (0 when nothing finite was sampled).
    pub min_y: f64,
    /// Largest sampled value (0 when nothing finite was sampled).
    pub max_y: f64,
    /// Plot row per column, counted from the bottom; `None` for non-finite samples.
    pub rows: Vec<Option<u32>>,
}

impl RasterOutput {
    /// Values for the guide rows from bottom (`min_y`) to top (`max_y`).
    pub fn axis_labels(&self, graph_labels: u32) -> Vec<f64> {
        match graph_labels {
            0 => Vec::new(),
            1 => vec![(self.min_y + self.max_y) * 0.5],
            n => {
                let span = self.max_y - self.min_y;
                let last = f64::from(n - 1);
                (0..n)
                    .map(|i| self.min_y + span * f64::from(i) / last)
                    .collect()
            }
        }
    }
}

/// Samples a curve across a fixed pixel grid.
///
/// Every call to [`Rasterizer::rasterize`] clears and fully rewrites the owned buffer.
#[derive(Clone, Debug)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    style: RasterStyle,
    pixels: PixelBuffer,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32, style: RasterStyle) -> CurveResult<Self> {
        if width < 2 {
            return Err(CurveError::raster("raster width must be >= 2"));
        }
        if height == 0 {
            return Err(CurveError::raster("raster height must be >= 1"));
        }
        Ok(Self {
            width,
            height,
            style,
            pixels: PixelBuffer::new(width, height, style.background),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn style(&self) -> &RasterStyle {
        &self.style
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Curve time sampled by column `x`.
    pub fn sample_time(&self, curve: &HermiteCurve, x: u32) -> f64 {
        curve.min_time() + curve.max_time() * f64::from(x) / f64::from(self.width - 1)
    }

    /// Clear, draw guides and plot `curve`.
    #[tracing::instrument(skip_all, fields(width = self.width, height = self.height))]
    pub fn rasterize(&mut self, curve: &HermiteCurve) -> RasterOutput {
        self.pixels.fill(self.style.background);

        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for x in 0..self.width {
            let fy = curve.evaluate(self.sample_time(curve, x));
            if fy.is_finite() {
                min_y = min_y.min(fy);
                max_y = max_y.max(fy);
            }
        }
        if min_y > max_y {
            min_y = 0.0;
            max_y = 0.0;
        }

        for i in 0..self.style.graph_labels {
            let row = guide_row(i, self.style.graph_labels, self.height);
            for x in 0..self.width {
                self.pixels.set_plot(x, row, self.style.gridline);
            }
        }

        let mut rows = Vec::with_capacity(self.width as usize);
        for x in 0..self.width {
            let fy = curve.evaluate(self.sample_time(curve, x));
            let row = plot_row(fy, min_y, max_y, self.height);
            if let Some(row) = row {
                self.pixels.set_plot(x, row, self.style.curve);
            }
            rows.push(row);
        }

        tracing::trace!(min_y, max_y, "rasterized curve");
        RasterOutput { min_y, max_y, rows }
    }
}

/// Map a sample to a plot row in `[0, height - 1]`.
///
/// A flat (or overflowing) range maps to the centre row; non-finite samples are not plotted.
pub fn plot_row(fy: f64, min_y: f64, max_y: f64, height: u32) -> Option<u32> {
    if !fy.is_finite() || height == 0 {
        return None;
    }
    let top = f64::from(height - 1);
    let span = max_y - min_y;
    if !(span > 0.0 && span.is_finite()) {
        return Some((height - 1) / 2);
    }
    let row = ((fy - min_y) / span * top).round().clamp(0.0, top);
    Some(row as u32)
}

/// Row of guide `i` out of `count`, evenly spaced from bottom to top.
pub fn guide_row(i: u32, count: u32, height: u32) -> u32 {
    let top = height.saturating_sub(1);
    if count <= 1 {
        return top / 2;
    }
    let row = (f64::from(i) * f64::from(top) / f64::from(count - 1)).round();
    (row as u32).min(top)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterizer.rs"]
mod tests;
