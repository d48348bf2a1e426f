
// imports
use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;
use tracing::debug;


pub struct CoOccurrence {}

impl CoOccurrence {

    // one row of the gram matrix M . M^T: the dot products of row i with every row.
    // both the sequential and the threaded paths go through here, so they agree to the bit.
    fn gram_row(matrix: &Array2<f64>, i: usize) -> Array1<f64> {
        let row_i = matrix.row(i);
        matrix.rows().into_iter().map(|row_k| row_i.dot(&row_k)).collect()
    }

    fn gram(matrix: &Array2<f64>) -> Array2<f64> {
        let n = matrix.nrows();
        let mut gram: Array2<f64> = Array2::zeros((n, n));
        for (i, mut row) in gram.axis_iter_mut(Axis(0)).enumerate() {
            row.assign(&Self::gram_row(matrix, i));
        }
        gram
    }

    fn gram_par(matrix: &Array2<f64>) -> Array2<f64> {
        let n = matrix.nrows();
        let rows: Vec<Array1<f64>> = (0..n).into_par_iter().map(|i| Self::gram_row(matrix, i)).collect();

        let mut gram: Array2<f64> = Array2::zeros((n, n));
        for (mut row, computed) in gram.axis_iter_mut(Axis(0)).zip(rows.iter()) {
            row.assign(computed);
        }
        gram
    }

    /// Number of entities each category appears in (nonzero cells per row).
    pub fn degrees(matrix: &Array2<f64>) -> Vec<usize> {
        matrix.rows().into_iter().map(|row| row.iter().filter(|&&x| x != 0.0).count()).collect()
    }

    fn normalize_and_symmetrize(matrix: &Array2<f64>, mut gram: Array2<f64>, self_loops: bool) -> Array2<f64> {

        // divide every gram row by the degree of its category, giving the conditional
        // probability of sharing an entity with k given membership of i.
        // a category without entities has no defined row, it is set to 0.
        let degrees = Self::degrees(matrix);
        for (mut row, &degree) in gram.axis_iter_mut(Axis(0)).zip(degrees.iter()) {
            if degree == 0 {
                row.fill(0.0);
            } else {
                let degree = degree as f64;
                row.mapv_inplace(|x| x / degree);
            }
        }

        // the weaker of the two conditionals bounds the pair
        let n = gram.nrows();
        let mut network = Array2::from_shape_fn((n, n), |(i, k)| gram[[i, k]].min(gram[[k, i]]));

        if !self_loops {
            network.diag_mut().fill(0.0);
        }

        debug!(categories = n, isolated = degrees.iter().filter(|&&d| d == 0).count(), self_loops, "computed co-occurrence");
        network
    }

    /// Symmetric category x category similarity of a category x entity matrix.
    ///
    /// Cell (i, k) is `min(gram[i,k] / degree[i], gram[k,i] / degree[k])` with
    /// `gram = M . M^T`. On a binary matrix the entries lie in [0, 1] and the diagonal
    /// is 1 for every category present in some entity. A raw weighted matrix gives a
    /// weighted similarity instead, which is not bounded by 1.
    pub fn compute(matrix: &Array2<f64>, self_loops: bool) -> Array2<f64> {
        Self::normalize_and_symmetrize(matrix, Self::gram(matrix), self_loops)
    }

    /// Same as [`CoOccurrence::compute`], with the gram rows spread over the rayon pool.
    pub fn compute_par(matrix: &Array2<f64>, self_loops: bool) -> Array2<f64> {
        Self::normalize_and_symmetrize(matrix, Self::gram_par(matrix), self_loops)
    }
}
