//! Similarity metrics for term-weight vectors

/// Compute cosine similarity between two term-weight vectors
///
/// Returns a value in [0.0, 1.0] for non-negative vectors, where 1.0 means
/// identical direction. Defined as 0.0 when either vector has zero
/// magnitude (no terms at all, or no terms shared with the vocabulary).
///
/// Both vectors come out of the same fitted vectorizer, so their
/// dimensions always agree.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    // Accumulate in f64 so summation order cannot split tied scores.
    let dot_product: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();
    let magnitude_a: f64 = a.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt();

    // Handle zero magnitude case
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    (dot_product / (magnitude_a * magnitude_b)) as f32
}
