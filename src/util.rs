/// Sorts a pair of values into nondescending order.
pub(crate) fn sort_pair<K: Ord>(a: K, b: K) -> (K, K) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Returns `true` if `weight` can be stored as an edge weight.  Zero marks an
/// absent edge, so only finite, strictly positive weights qualify.
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}
