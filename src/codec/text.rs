//! Line-oriented keyframe text format.
//!
//! One record per line: `<key_name> = <time> <value> <tangent_in> <tangent_out>`. Tokens are
//! separated by any mix of `=`, spaces and tabs. Lines that do not form a record are skipped, so
//! whole config files can be pasted and only the matching lines are picked up.

use std::fmt::Write as _;

use crate::{
    foundation::error::{CurveError, CurveResult},
    keyframe::{
        key::{Keyframe, format_float, parse_float},
        set::KeyframeSet,
    },
};

/// Record name used when none is configured.
pub const DEFAULT_KEY_NAME: &str = "key";

const SEPARATORS: [char; 3] = ['=', ' ', '\t'];

/// Keyframe text serializer/parser bound to one record name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextCodec {
    key_name: String,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self {
            key_name: DEFAULT_KEY_NAME.to_string(),
        }
    }
}

impl TextCodec {
    /// Build a codec for `key_name`, which must be a single non-empty token.
    pub fn new(key_name: impl Into<String>) -> CurveResult<Self> {
        let key_name = key_name.into();
        validate_key_name(&key_name)?;
        Ok(Self { key_name })
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// One newline-terminated record per key, in iteration order.
    pub fn serialize<'a>(&self, keys: impl IntoIterator<Item = &'a Keyframe>) -> String {
        let mut out = String::new();
        for k in keys {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{} = {} {} {} {}",
                self.key_name,
                format_float(k.time),
                format_float(k.value),
                format_float(k.tangent_in),
                format_float(k.tangent_out),
            );
        }
        out
    }

    /// Extract every record from `text`, in line order. Never fails.
    #[tracing::instrument(skip_all, fields(key_name = %self.key_name))]
    pub fn parse(&self, text: &str) -> Vec<Keyframe> {
        let mut keys = Vec::new();
        let mut skipped = 0usize;
        for line in text.split('\n') {
            match self.parse_line(line) {
                Some(k) => keys.push(k),
                None if line.trim().is_empty() => {}
                None => skipped += 1,
            }
        }
        tracing::debug!(records = keys.len(), skipped, "parsed keyframe text");
        keys
    }

    /// Parse `text` and bulk replace the contents of `set` (marking it dirty).
    pub fn parse_into(&self, text: &str, set: &mut KeyframeSet) {
        set.replace(self.parse(text));
    }

    /// Parse a single line. Records with only time and value get zero tangents.
    pub fn parse_line(&self, line: &str) -> Option<Keyframe> {
        let tokens: Vec<&str> = line
            .trim()
            .split(SEPARATORS)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() < 3 || tokens[0] != self.key_name {
            return None;
        }
        let field = |i: usize| tokens.get(i).map_or(0.0, |t| parse_float(t));
        let key = if tokens.len() >= 5 {
            Keyframe::new(field(1), field(2), field(3), field(4))
        } else {
            Keyframe::new(field(1), field(2), 0.0, 0.0)
        };
        Some(key)
    }
}

fn validate_key_name(name: &str) -> CurveResult<()> {
    if name.is_empty() {
        return Err(CurveError::codec("key name must not be empty"));
    }
    if name.contains(SEPARATORS) || name.contains('\n') || name.contains('\r') {
        return Err(CurveError::codec(format!(
            "key name '{}' must not contain '=', whitespace or newlines",
            name.escape_debug()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/text.rs"]
mod tests;
