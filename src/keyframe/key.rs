use std::cmp::Ordering;

/// One control point of the curve.
///
/// `tangent_in` is the slope arriving at the key from the left segment, `tangent_out` the slope
/// leaving it into the right segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
    pub tangent_in: f64,
    pub tangent_out: f64,
}

impl Keyframe {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(time: f64, value: f64, tangent_in: f64, tangent_out: f64) -> Self {
        Self {
            time,
            value,
            tangent_in,
            tangent_out,
        }
    }

    pub fn field(&self, field: Field) -> f64 {
        match field {
            Field::Time => self.time,
            Field::Value => self.value,
            Field::TangentIn => self.tangent_in,
            Field::TangentOut => self.tangent_out,
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.time, self.value, self.tangent_in, self.tangent_out]
    }

    pub fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Flat continuation one time unit after `self`.
    pub fn successor(&self) -> Self {
        Self {
            time: self.time + 1.0,
            ..*self
        }
    }

    /// Time-ascending total order (NaN sorts last). An absent counterpart sorts first, so `self`
    /// is greater.
    pub fn cmp_by_time(&self, other: Option<&Self>) -> Ordering {
        match other {
            None => Ordering::Greater,
            Some(o) => self.time.total_cmp(&o.time),
        }
    }

    /// Text view of this key using default float formatting.
    pub fn to_text(&self) -> KeyText {
        KeyText(self.to_array().map(format_float))
    }

    /// Reconcile a text view into floats. Each field parses independently.
    pub fn from_text(text: &KeyText) -> Self {
        Self::from_array([
            parse_float(&text.0[0]),
            parse_float(&text.0[1]),
            parse_float(&text.0[2]),
            parse_float(&text.0[3]),
        ])
    }
}

/// Selects one of the four keyframe columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Field {
    Time,
    Value,
    TangentIn,
    TangentOut,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Time,
        Field::Value,
        Field::TangentIn,
        Field::TangentOut,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Time => 0,
            Self::Value => 1,
            Self::TangentIn => 2,
            Self::TangentOut => 3,
        }
    }

    /// Column heading shown by editor front-ends.
    pub fn label(self) -> &'static str {
        match self {
            Self::Time => "X",
            Self::Value => "Y",
            Self::TangentIn => "In Tangent",
            Self::TangentOut => "Out Tangent",
        }
    }
}

/// Four text fields mirroring a [`Keyframe`] while it is being typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyText(pub [String; 4]);

impl KeyText {
    pub fn get(&self, field: Field) -> &str {
        &self.0[field.index()]
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.0[field.index()] = text.into();
    }
}

impl Default for KeyText {
    fn default() -> Self {
        Keyframe::ZERO.to_text()
    }
}

/// A keyframe together with its live-edited text.
///
/// The two views may disagree while a field is being typed; [`EditableKey::update_floats`] must
/// run before the curve is rebuilt and [`EditableKey::update_strings`] before the text is shown
/// after a float mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct EditableKey {
    key: Keyframe,
    text: KeyText,
}

impl EditableKey {
    pub fn new(key: Keyframe) -> Self {
        Self {
            key,
            text: key.to_text(),
        }
    }

    pub fn key(&self) -> &Keyframe {
        &self.key
    }

    pub fn text(&self) -> &KeyText {
        &self.text
    }

    /// Replace the float tuple and refresh the text view.
    pub fn set_key(&mut self, key: Keyframe) {
        self.key = key;
        self.update_strings();
    }

    /// Overwrite one text field. Returns `false` when the text is unchanged.
    ///
    /// Floats are left stale; call [`EditableKey::update_floats`] before rebuilding.
    pub fn set_text(&mut self, field: Field, text: &str) -> bool {
        if self.text.get(field) == text {
            return false;
        }
        self.text.set(field, text);
        true
    }

    pub fn update_floats(&mut self) {
        self.key = Keyframe::from_text(&self.text);
    }

    pub fn update_strings(&mut self) {
        self.text = self.key.to_text();
    }
}

impl From<Keyframe> for EditableKey {
    fn from(key: Keyframe) -> Self {
        Self::new(key)
    }
}

/// Lenient float parse: surrounding whitespace is ignored; anything unparsable or non-finite is 0.
pub fn parse_float(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Default numeric-to-text conversion (shortest round-trip form).
pub fn format_float(v: f64) -> String {
    v.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/key.rs"]
mod tests;
