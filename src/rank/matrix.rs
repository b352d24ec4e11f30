// src/rank/matrix.rs
//! Dense row-major matrices and the two operations power iteration needs.

use crate::error::{RankError, Result};
use serde::Serialize;

/// A dense matrix stored as rows. Rank vectors are `n × 1` matrices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    #[must_use]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![0.0; columns]; rows],
        }
    }

    /// Wraps the given rows as-is. Rows of unequal length are kept and
    /// rejected later by [`multiply`] and [`is_equilibrium`].
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// An `n × 1` column vector.
    #[must_use]
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.iter().map(|v| vec![*v]).collect(),
        }
    }

    #[must_use]
    pub fn filled_column(len: usize, value: f64) -> Self {
        Self {
            rows: vec![vec![value]; len],
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, or 0 for an empty matrix.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, value: f64) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = value;
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// First entry of every row; the values of a column vector.
    #[must_use]
    pub fn column_values(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| r.first().copied().unwrap_or(0.0))
            .collect()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.rows.iter().flatten().sum()
    }

    fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|r| r.len() == width)
    }
}

/// Absolute-difference comparison of two floats.
#[must_use]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Standard `A × B` product.
///
/// # Errors
/// Returns `DimensionMismatch` if `A`'s column count differs from `B`'s row
/// count, or `InvalidArgument` if either operand has rows of unequal length.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if !a.is_rectangular() || !b.is_rectangular() {
        return Err(RankError::invalid("matrix rows must all have the same length"));
    }

    let a_columns = a.column_count();
    let b_rows = b.row_count();
    if a_columns != b_rows {
        return Err(RankError::DimensionMismatch {
            left_columns: a_columns,
            right_rows: b_rows,
        });
    }

    let b_columns = b.column_count();
    let mut product = Matrix::zeros(a.row_count(), b_columns);

    for (a_row, out_row) in a.rows.iter().zip(product.rows.iter_mut()) {
        for (j, cell) in out_row.iter_mut().enumerate() {
            for (a_ik, b_row) in a_row.iter().zip(&b.rows) {
                *cell += a_ik * b_row.get(j).copied().unwrap_or(0.0);
            }
        }
    }

    Ok(product)
}

/// Whether two vectors agree entry-wise within `epsilon`.
///
/// # Errors
/// Returns `InvalidArgument` if either side is absent or the shapes differ.
pub fn is_equilibrium(a: Option<&Matrix>, b: Option<&Matrix>, epsilon: f64) -> Result<bool> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(RankError::invalid("matrices cannot be absent"));
    };
    if a.row_count() != b.row_count() {
        return Err(RankError::invalid("matrices must have the same number of rows"));
    }

    for (a_row, b_row) in a.rows.iter().zip(&b.rows) {
        if a_row.len() != b_row.len() {
            return Err(RankError::invalid("matrices must have the same row length"));
        }
        if a_row
            .iter()
            .zip(b_row)
            .any(|(x, y)| !approx_eq(*x, *y, epsilon))
        {
            return Ok(false);
        }
    }
    Ok(true)
}
