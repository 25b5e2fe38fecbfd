//! Metric primitives
//!
//! All functions assume equal lengths; the engine validates inputs first.
//! Components are rescaled by the largest absolute value before squaring, so
//! finite inputs never overflow to `inf` or underflow to a zero norm.

/// Dot product
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Largest absolute component, `0.0` for an all-zero or empty vector
pub fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
}

/// Euclidean norm
pub fn magnitude(v: &[f64]) -> f64 {
    let scale = max_abs(v);
    if scale == 0.0 {
        return 0.0;
    }
    scale * scaled_norm(v, scale)
}

// Norm of v / scale; lies in [1, sqrt(len)] when scale == max_abs(v)
fn scaled_norm(v: &[f64], scale: f64) -> f64 {
    v.iter()
        .map(|x| {
            let y = x / scale;
            y * y
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity, `None` when either vector has zero magnitude
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    CosineQuery::new(a)?.similarity(b)
}

/// Query side of cosine similarity, prepared once per ranking
pub(crate) struct CosineQuery<'a> {
    vector: &'a [f64],
    scale: f64,
    norm: f64,
}

impl<'a> CosineQuery<'a> {
    /// `None` for a zero-magnitude query
    pub(crate) fn new(vector: &'a [f64]) -> Option<Self> {
        let scale = max_abs(vector);
        if scale == 0.0 {
            return None;
        }
        Some(Self {
            vector,
            scale,
            norm: scaled_norm(vector, scale),
        })
    }

    /// Similarity to `other`, `None` when `other` has zero magnitude
    pub(crate) fn similarity(&self, other: &[f64]) -> Option<f64> {
        let other_scale = max_abs(other);
        if other_scale == 0.0 {
            return None;
        }

        let dot: f64 = self
            .vector
            .iter()
            .zip(other)
            .map(|(x, y)| (x / self.scale) * (y / other_scale))
            .sum();
        let other_norm = scaled_norm(other, other_scale);

        Some((dot / (self.norm * other_norm)).clamp(-1.0, 1.0))
    }
}

/// Weighted Euclidean distance; `None` weights count every dimension once
///
/// Distances beyond `f64::MAX` saturate at `f64::MAX`.
pub fn weighted_euclidean_distance(a: &[f64], b: &[f64], weights: Option<&[f64]>) -> f64 {
    // sqrt(w) * (a - b) / 2; halving first keeps the difference finite
    let term = |j: usize| {
        let w = weights.map_or(1.0, |w| w[j]);
        w.sqrt() * (a[j] * 0.5 - b[j] * 0.5)
    };

    let scale = (0..a.len()).fold(0.0, |m: f64, j| m.max(term(j).abs()));
    if scale == 0.0 {
        return 0.0;
    }
    if !scale.is_finite() {
        return f64::MAX;
    }

    let sum: f64 = (0..a.len())
        .map(|j| {
            let y = term(j) / scale;
            y * y
        })
        .sum();

    (2.0 * scale * sum.sqrt()).min(f64::MAX)
}
