use crate::{
    codec::text::TextCodec,
    config::EditorConfig,
    curve::hermite::HermiteCurve,
    editor::host::{Clipboard, DisplaySurface},
    foundation::{core::KeyId, error::CurveResult},
    keyframe::{
        key::{Field, Keyframe},
        set::KeyframeSet,
    },
    raster::{
        pixels::PixelBuffer,
        rasterizer::{RasterOutput, Rasterizer},
    },
};

/// Single-curve editing session driven by a host UI tick.
///
/// Edits only mark the keyframe set dirty. [`CurveEditor::tick`] performs at most one rebuild
/// (sort, evaluate, rasterize, regenerate text) per call, so a burst of edits within one frame
/// costs one rebuild.
#[derive(Debug)]
pub struct CurveEditor {
    set: KeyframeSet,
    codec: TextCodec,
    rasterizer: Rasterizer,
    curve: HermiteCurve,
    output: RasterOutput,
    text: String,
    visible: bool,
    pending_present: bool,
    rebuilds: u64,
}

impl CurveEditor {
    /// Build an editor seeded with `config.seed_keys` and render it once.
    pub fn new(config: &EditorConfig) -> CurveResult<Self> {
        Self::with_seed_keys(config, config.seed_keys.iter().copied())
    }

    /// Build an editor seeded with `keys` instead of `config.seed_keys` and render it once.
    pub fn with_seed_keys(
        config: &EditorConfig,
        keys: impl IntoIterator<Item = Keyframe>,
    ) -> CurveResult<Self> {
        config.validate()?;
        let codec = TextCodec::new(config.key_name.as_str())?;
        let rasterizer =
            Rasterizer::new(config.tex_width, config.tex_height, config.raster_style())?;
        let set = KeyframeSet::from_keys(config.sort, keys);

        let mut editor = Self {
            set,
            codec,
            rasterizer,
            curve: HermiteCurve::default(),
            output: RasterOutput {
                min_y: 0.0,
                max_y: 0.0,
                rows: Vec::new(),
            },
            text: String::new(),
            visible: false,
            pending_present: false,
            rebuilds: 0,
        };
        editor.rebuild();
        Ok(editor)
    }

    pub fn keyframes(&self) -> &KeyframeSet {
        &self.set
    }

    pub fn codec(&self) -> &TextCodec {
        &self.codec
    }

    pub fn curve(&self) -> &HermiteCurve {
        &self.curve
    }

    pub fn raster(&self) -> &RasterOutput {
        &self.output
    }

    pub fn pixels(&self) -> &PixelBuffer {
        self.rasterizer.pixels()
    }

    /// Values for the guide rows of the current preview, bottom to top.
    pub fn axis_labels(&self) -> Vec<f64> {
        self.output.axis_labels(self.rasterizer.style().graph_labels)
    }

    /// Sample the curve as of the last rebuild.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.curve.evaluate(t)
    }

    /// Current contents of the text area.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn needs_rebuild(&self) -> bool {
        self.set.is_dirty()
    }

    /// Number of rebuilds performed so far.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn edit_field(&mut self, id: KeyId, field: Field, text: &str) -> bool {
        self.set.edit_field(id, field, text)
    }

    pub fn set_key(&mut self, id: KeyId, key: Keyframe) -> bool {
        self.set.set_key(id, key)
    }

    pub fn insert_key(&mut self, key: Keyframe) -> KeyId {
        self.set.add(key)
    }

    /// "Add Node": flat continuation of the last key.
    pub fn add_key(&mut self) -> KeyId {
        self.set.add_derived_from_last()
    }

    pub fn remove_key(&mut self, id: KeyId) -> Option<Keyframe> {
        self.set.remove(id)
    }

    pub fn clear(&mut self) {
        self.set.clear();
        self.text.clear();
    }

    pub fn smooth_tangents(&mut self) {
        self.set.smooth_tangents();
    }

    pub fn set_sort(&mut self, sort: bool) {
        self.set.set_sort_mode(sort);
    }

    /// Apply text-area contents. Unchanged text is ignored; otherwise the keys are replaced by
    /// whatever records parse out of `text`.
    pub fn set_text(&mut self, text: &str) -> bool {
        if text == self.text {
            return false;
        }
        self.text = text.to_string();
        self.codec.parse_into(text, &mut self.set);
        true
    }

    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) {
        clipboard.set_text(&self.text);
    }

    /// Paste clipboard text into the text area. Returns `false` when nothing changed.
    pub fn paste_from(&mut self, clipboard: &dyn Clipboard) -> bool {
        match clipboard.get_text() {
            Some(text) => self.set_text(&text),
            None => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.pending_present = true;
        }
        self.visible = visible;
    }

    pub fn toggle_visible(&mut self) {
        self.set_visible(!self.visible);
    }

    /// One scheduler step: rebuild if anything changed since the last rebuild.
    pub fn tick(&mut self) -> bool {
        self.rebuild_if_needed()
    }

    pub fn rebuild_if_needed(&mut self) -> bool {
        if !self.set.is_dirty() {
            return false;
        }
        tracing::debug!(keys = self.set.len(), "keyframes dirty, rebuilding");
        self.rebuild();
        true
    }

    /// Sort (if enabled), rebuild the curve, rasterize and regenerate the text area.
    #[tracing::instrument(skip(self), fields(keys = self.set.len()))]
    pub fn rebuild(&mut self) {
        let keys = self.set.prepare_rebuild();
        self.curve = HermiteCurve::new(keys);
        self.output = self.rasterizer.rasterize(&self.curve);
        self.text = self.codec.serialize(self.curve.keys());
        self.set.mark_clean();
        self.pending_present = true;
        self.rebuilds += 1;
    }

    /// Submit the preview if visible and changed since the last submit.
    pub fn present(&mut self, surface: &mut dyn DisplaySurface) -> CurveResult<bool> {
        if !self.visible || !self.pending_present {
            return Ok(false);
        }
        surface.submit(self.rasterizer.pixels())?;
        self.pending_present = false;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
