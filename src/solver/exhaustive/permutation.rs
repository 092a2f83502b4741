/// Rearrange `positions` into its lexicographic successor in place.
///
/// Returns `false` once `positions` is the last (descending) arrangement,
/// leaving it untouched. Starting from ascending order visits every
/// arrangement exactly once, smallest first.
pub fn next_permutation(positions: &mut [usize]) -> bool {
    let n = positions.len();
    if n < 2 {
        return false;
    }

    // Rightmost ascent.
    let Some(pivot) = (0..n - 1).rev().find(|&i| positions[i] < positions[i + 1]) else {
        return false;
    };

    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| positions[j] > positions[pivot])
        .unwrap_or(pivot + 1);

    positions.swap(pivot, successor);
    positions[pivot + 1..].reverse();
    true
}

/// Number of arrangements of `n` free positions.
pub fn permutation_count(n: usize) -> u64 {
    (1..=n as u64).product()
}
