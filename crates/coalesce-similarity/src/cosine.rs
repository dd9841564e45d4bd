//! Cosine similarity over sparse term vectors.

use coalesce_core::models::TermVector;

/// Cosine similarity between two sparse vectors, clamped to [0, 1].
///
/// Returns `None` when either side has no usable mass (empty, all zero,
/// or only non-finite/negative weights), leaving the fallback to the caller.
/// Accumulation follows sorted key order on both sides, so
/// `sparse_cosine(a, b) == sparse_cosine(b, a)` bit for bit.
pub fn sparse_cosine(a: &TermVector, b: &TermVector) -> Option<f64> {
    let mag_a = magnitude_sq(a);
    let mag_b = magnitude_sq(b);
    if mag_a < f64::EPSILON || mag_b < f64::EPSILON {
        return None;
    }
    if a == b {
        return Some(1.0);
    }

    let mut dot = 0.0f64;
    let (mut left, mut right) = (a.iter().peekable(), b.iter().peekable());
    while let (Some(&(ka, wa)), Some(&(kb, wb))) = (left.peek(), right.peek()) {
        match ka.cmp(kb) {
            std::cmp::Ordering::Less => {
                left.next();
            }
            std::cmp::Ordering::Greater => {
                right.next();
            }
            std::cmp::Ordering::Equal => {
                dot += usable(wa) * usable(wb);
                left.next();
                right.next();
            }
        }
    }

    let denom = (mag_a * mag_b).sqrt();
    Some((dot / denom).clamp(0.0, 1.0))
}

fn magnitude_sq(v: &TermVector) -> f64 {
    v.iter().map(|(_, w)| usable(w) * usable(w)).sum()
}

/// Negative and non-finite weights contribute nothing.
fn usable(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}
