//! Piecewise cubic Hermite curve over a keyframe sequence.

use crate::keyframe::key::Keyframe;

/// Continuous function built from keys in evaluator order.
///
/// Between consecutive keys `a`, `b` the curve is the cubic Hermite segment using `a.tangent_out`
/// and `b.tangent_in`. Outside `[min_time, max_time]` (first and last key) it is flat.
#[derive(Clone, Debug, Default)]
pub struct HermiteCurve {
    keys: Vec<Keyframe>,
    monotonic: bool,
}

impl HermiteCurve {
    pub fn new(keys: Vec<Keyframe>) -> Self {
        let monotonic = keys.windows(2).all(|w| w[0].time <= w[1].time);
        Self { keys, monotonic }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the first key, or 0 for an empty curve.
    pub fn min_time(&self) -> f64 {
        self.keys.first().map_or(0.0, |k| k.time)
    }

    /// Time of the last key, or 0 for an empty curve.
    pub fn max_time(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Sample the curve. An empty curve evaluates to 0; a NaN time evaluates to the first key.
    pub fn evaluate(&self, t: f64) -> f64 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if t.is_nan() {
            return first.value;
        }
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        let seg = if self.monotonic {
            let idx = self.keys.partition_point(|k| k.time <= t);
            idx.checked_sub(1)
        } else {
            // Out-of-order keys: first segment whose span covers `t` in either direction.
            self.keys.windows(2).position(|w| {
                let (lo, hi) = if w[0].time <= w[1].time {
                    (w[0].time, w[1].time)
                } else {
                    (w[1].time, w[0].time)
                };
                lo <= t && t <= hi
            })
        };

        match seg {
            Some(i) => hermite_segment(&self.keys[i], &self.keys[i + 1], t),
            None => last.value,
        }
    }
}

/// Evaluate the segment `a -> b` at absolute time `t`.
///
/// Zero-length segments return `a.value`.
pub fn hermite_segment(a: &Keyframe, b: &Keyframe, t: f64) -> f64 {
    let dt = b.time - a.time;
    if dt == 0.0 {
        return a.value;
    }
    let u = (t - a.time) / dt;
    let u2 = u * u;
    let u3 = u2 * u;

    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;

    h00 * a.value + h10 * dt * a.tangent_out + h01 * b.value + h11 * dt * b.tangent_in
}

/// Recompute tangents from `(time, value)` pairs, discarding the existing ones.
///
/// Interior keys take the slope of the chord between their neighbours; the end keys take the slope
/// of their single adjacent segment. In and out tangents are equal. A zero-width chord yields 0.
pub fn smooth_tangents(keys: &[Keyframe]) -> Vec<Keyframe> {
    fn slope(a: &Keyframe, b: &Keyframe) -> f64 {
        let dt = b.time - a.time;
        if dt == 0.0 {
            return 0.0;
        }
        (b.value - a.value) / dt
    }

    let n = keys.len();
    (0..n)
        .map(|i| {
            let k = &keys[i];
            let tangent = match (i.checked_sub(1), (i + 1 < n).then_some(i + 1)) {
                (Some(p), Some(q)) => slope(&keys[p], &keys[q]),
                (None, Some(q)) => slope(k, &keys[q]),
                (Some(p), None) => slope(&keys[p], k),
                (None, None) => 0.0,
            };
            Keyframe::new(k.time, k.value, tangent, tangent)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/curve/hermite.rs"]
mod tests;
