/// Cubic Hermite evaluation and tangent smoothing.
pub mod hermite;
