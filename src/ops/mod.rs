pub mod kernels;

use log::debug;

use crate::error::{AlgoError, Result};
use crate::matrix::Matrix;
use kernels::matmul_kernel;

/// Multiply `a` (m x k) by `b` (k x n).
///
/// Fails with [`AlgoError::DimensionMismatch`] when `a.cols() != b.rows()`
/// and with [`AlgoError::Overflow`] if an entry does not fit in `i64`. An
/// output shape whose element count overflows `usize` is an
/// [`AlgoError::InvalidArgument`].
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let [m, k1] = a.shape();
    let [k2, n] = b.shape();
    if k1 != k2 {
        return Err(AlgoError::DimensionMismatch {
            op: "matmul",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    if m.checked_mul(n).is_none() {
        return Err(AlgoError::InvalidArgument {
            op: "matmul",
            msg: format!("output shape {m}x{n} is too large"),
        });
    }
    debug!("matmul: [{m}, {k1}] x [{k2}, {n}]");

    let data = matmul_kernel(a.as_slice(), b.as_slice(), m, k1, n)
        .map_err(|(row, col)| AlgoError::Overflow {
            op: "matmul",
            row,
            col,
        })?;
    Matrix::try_new(data, m, n)
}
