/// Row-major `m x k` times `k x n` product with checked accumulation.
///
/// Returns the coordinates of the first entry whose sum overflows `i64`.
pub fn matmul_kernel(
    a: &[i64],
    b: &[i64],
    m: usize,
    k: usize,
    n: usize,
) -> Result<Vec<i64>, (usize, usize)> {
    let mut out = vec![0i64; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0i64;
            for p in 0..k {
                acc = a[i * k + p]
                    .checked_mul(b[p * n + j])
                    .and_then(|prod| acc.checked_add(prod))
                    .ok_or((i, j))?;
            }
            out[i * n + j] = acc;
        }
    }
    Ok(out)
}
