use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops;
use crate::select::top_k;

/// Inputs for the matrix multiplication demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatmulScenario {
    pub lhs: Vec<Vec<i64>>,
    pub rhs: Vec<Vec<i64>>,
}

impl Default for MatmulScenario {
    fn default() -> Self {
        Self {
            lhs: vec![vec![1, 2, 3], vec![4, 5, 6]],
            rhs: vec![vec![10, 11], vec![20, 21], vec![30, 31]],
        }
    }
}

impl MatmulScenario {
    pub fn run(&self) -> Result<Matrix> {
        let lhs = Matrix::from_rows(&self.lhs)?;
        let rhs = Matrix::from_rows(&self.rhs)?;
        let product = ops::matmul(&lhs, &rhs)?;
        info!(
            "matmul scenario: {:?} x {:?} -> {:?}",
            lhs.shape(),
            rhs.shape(),
            product.shape()
        );
        Ok(product)
    }

    /// Output lines of the demo: the product, one row per line.
    pub fn report(&self) -> Result<Vec<String>> {
        let product = self.run()?;
        Ok(product.to_string().lines().map(String::from).collect())
    }
}

/// Inputs for the top-k demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopKScenario {
    pub values: Vec<i64>,
    pub k: i64,
}

impl Default for TopKScenario {
    fn default() -> Self {
        Self {
            values: vec![4, 1, 7, 3, 9, 2, 6],
            k: 3,
        }
    }
}

impl TopKScenario {
    pub fn run(&self) -> Result<Vec<i64>> {
        let selected = top_k(&self.values, self.k)?;
        info!(
            "top-k scenario: kept {} of {} values",
            selected.len(),
            self.values.len()
        );
        Ok(selected)
    }

    /// Output lines of the demo: a header, then one selected value per line.
    pub fn report(&self) -> Result<Vec<String>> {
        let selected = self.run()?;
        let mut lines = Vec::with_capacity(selected.len() + 1);
        lines.push(format!("Top {} elements are:", self.k));
        lines.extend(selected.iter().map(|value| value.to_string()));
        Ok(lines)
    }
}
