#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Full-sort reference: the `k` largest values, ascending.
pub fn sorted_top_k(values: &[i64], k: usize) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let start = sorted.len().saturating_sub(k);
    sorted[start..].to_vec()
}

pub fn random_values(seed: u64, len: usize, range: std::ops::Range<i64>) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_rows(seed: u64, rows: usize, cols: usize) -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-50..50)).collect())
        .collect()
}

pub fn matmul(left: &[Vec<i64>], right: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let inner = right.len();
    let cols = right.first().map_or(0, Vec::len);
    left.iter()
        .map(|row| {
            assert_eq!(row.len(), inner);
            (0..cols)
                .map(|j| (0..inner).map(|p| row[p] * right[p][j]).sum())
                .collect()
        })
        .collect()
}

pub fn is_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
