use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AlgoError, Result};
use crate::ops;

/// Dense row-major integer matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

#[derive(Serialize, Deserialize)]
struct MatrixSerde {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("data", &self.data)
            .finish()
    }
}

/// One row per line, entries separated by single spaces.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let payload = MatrixSerde {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        };
        payload.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = MatrixSerde::deserialize(deserializer)?;
        Matrix::try_new(payload.data, payload.rows, payload.cols)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

impl Matrix {
    pub fn try_new(data: Vec<i64>, rows: usize, cols: usize) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| AlgoError::InvalidArgument {
                op: "matrix.new",
                msg: format!("shape {rows}x{cols} is too large"),
            })?;
        if data.len() != expected {
            return Err(AlgoError::InvalidArgument {
                op: "matrix.new",
                msg: format!(
                    "shape {rows}x{cols} needs {expected} elements, got {}",
                    data.len()
                ),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(AlgoError::InvalidArgument {
                    op: "matrix.from_rows",
                    msg: format!("row {i} has {} columns, expected {cols}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Self::try_new(data, rows.len(), cols)
    }

    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("shape {rows}x{cols} is too large"));
        Self {
            data: vec![0; len],
            rows,
            cols,
        }
    }

    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            out[(i, i)] = 1;
        }
        out
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[i64] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for shape {:?}",
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for shape {:?}",
            self.shape()
        );
        &mut self.data[row * self.cols + col]
    }
}

// Operator form of `ops::matmul`. Panics where `matmul` would return an error.
macro_rules! impl_mul_matrix {
    ($Lhs:ty, $Rhs:ty) => {
        impl Mul<$Rhs> for $Lhs {
            type Output = Matrix;
            fn mul(self, rhs: $Rhs) -> Self::Output {
                match ops::matmul(&self, &rhs) {
                    Ok(out) => out,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    };
}

impl_mul_matrix!(&Matrix, &Matrix);
impl_mul_matrix!(Matrix, &Matrix);
impl_mul_matrix!(&Matrix, Matrix);
impl_mul_matrix!(Matrix, Matrix);
