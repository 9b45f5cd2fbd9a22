//! Provides [`Matrix`], a small dense matrix of `f64` values.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::ops::Index;


/// A dense matrix of `f64` values with column-major storage.
///
/// Targets, running strong scores, per-round weak scores,
/// and loss gradients are all `samples × outputs` matrices,
/// so the per-output reductions in this crate
/// only ever touch contiguous columns.
/// A [`LutMachine`](crate::LutMachine) also stores its table
/// as an `entries × outputs` matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    cols: Vec<Vec<f64>>,
    n_rows: usize,
}


impl Matrix {
    /// Construct a zero matrix of the given shape.
    #[inline]
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            cols: vec![vec![0.0; n_rows]; n_cols],
            n_rows,
        }
    }


    /// Construct a matrix from column vectors.
    /// All columns must have the same length.
    #[inline]
    pub fn from_columns(cols: Vec<Vec<f64>>) -> Self {
        let n_rows = cols.first().map(Vec::len).unwrap_or(0);
        assert!(
            cols.iter().all(|col| col.len() == n_rows),
            "All columns must have the same number of rows"
        );
        Self { cols, n_rows, }
    }


    /// Construct a matrix from row slices.
    /// All rows must have the same length.
    #[inline]
    pub fn from_rows<T: AsRef<[f64]>>(rows: &[T]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);

        let mut cols = vec![Vec::with_capacity(n_rows); n_cols];
        for row in rows {
            let row = row.as_ref();
            assert!(
                row.len() == n_cols,
                "All rows must have the same number of columns"
            );
            for (col, &x) in cols.iter_mut().zip(row) {
                col.push(x);
            }
        }
        Self { cols, n_rows, }
    }


    /// Construct a single-column matrix from a vector.
    /// This is the way to pass a 1-D target vector
    /// where a `samples × 1` matrix is expected.
    #[inline]
    pub fn from_column(col: Vec<f64>) -> Self {
        let n_rows = col.len();
        Self { cols: vec![col], n_rows, }
    }


    /// Returns the pair of the number of rows and
    /// the number of columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.cols.len())
    }


    /// Returns the number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }


    /// Returns the number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.cols.len()
    }


    /// Returns the `j`-th column as a slice.
    #[inline]
    pub fn col(&self, j: usize) -> &[f64] {
        &self.cols[j][..]
    }


    /// Returns the `j`-th column as a mutable slice.
    #[inline]
    pub fn col_mut(&mut self, j: usize) -> &mut [f64] {
        &mut self.cols[j][..]
    }


    /// Returns an iterator over the columns of `self`.
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        self.cols.iter().map(|col| &col[..])
    }


    /// Returns the `i`-th row as a freshly allocated vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.cols.iter()
            .map(|col| col[i])
            .collect()
    }


    /// Set the entry at row `i`, column `j`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.cols[j][i] = value;
    }


    /// Fill every entry of `self` with `value`.
    #[inline]
    pub fn fill(&mut self, value: f64) {
        self.cols.iter_mut()
            .for_each(|col| col.iter_mut().for_each(|x| { *x = value; }));
    }


    /// Per-column accumulation `self[:, j] += scale[j] * other[:, j]`.
    /// This is the strong-score update of the boosting loop.
    #[inline]
    pub fn scaled_add(&mut self, scale: &[f64], other: &Matrix) {
        assert_eq!(self.shape(), other.shape());
        assert_eq!(scale.len(), self.n_cols());

        self.cols.par_iter_mut()
            .zip(&other.cols[..])
            .zip(scale)
            .for_each(|((col, q), &a)| {
                col.iter_mut()
                    .zip(q)
                    .for_each(|(p, q)| { *p += a * q; });
            });
    }


    /// Returns the vector of column sums.
    #[inline]
    pub fn column_sums(&self) -> Vec<f64> {
        self.cols.iter()
            .map(|col| col.iter().sum::<f64>())
            .collect()
    }
}


impl Index<(usize, usize)> for Matrix {
    type Output = f64;


    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cols[j][i]
    }
}
