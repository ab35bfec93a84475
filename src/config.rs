use std::{fs::File, io::BufReader, path::Path};

use crate::{
    codec::text::{DEFAULT_KEY_NAME, TextCodec},
    foundation::{
        core::Rgb8,
        error::{CurveError, CurveResult},
    },
    keyframe::key::Keyframe,
    raster::rasterizer::RasterStyle,
};

/// Editor settings, usually loaded from a JSON file.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub tex_width: u32,
    pub tex_height: u32,
    pub graph_labels: u32,
    pub key_name: String,
    pub sort: bool,
    pub background: Rgb8,
    pub gridline: Rgb8,
    pub curve: Rgb8,
    /// Keys present when the editor starts.
    pub seed_keys: Vec<Keyframe>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let style = RasterStyle::default();
        Self {
            tex_width: 512,
            tex_height: 128,
            graph_labels: style.graph_labels,
            key_name: DEFAULT_KEY_NAME.to_string(),
            sort: true,
            background: style.background,
            gridline: style.gridline,
            curve: style.curve,
            seed_keys: vec![
                Keyframe::new(0.0, 0.0, 0.0, 0.02),
                Keyframe::new(100.0, 1.0, 0.02, 0.0),
            ],
        }
    }
}

impl EditorConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CurveResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CurveError::config(format!("parse editor config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CurveError::io(format!("open editor config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> CurveResult<()> {
        if self.tex_width < 2 {
            return Err(CurveError::config("tex_width must be >= 2"));
        }
        if self.tex_height == 0 {
            return Err(CurveError::config("tex_height must be >= 1"));
        }
        TextCodec::new(self.key_name.as_str())
            .map_err(|e| CurveError::config(format!("invalid key_name: {e}")))?;
        Ok(())
    }

    pub fn raster_style(&self) -> RasterStyle {
        RasterStyle {
            background: self.background,
            gridline: self.gridline,
            curve: self.curve,
            graph_labels: self.graph_labels,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
