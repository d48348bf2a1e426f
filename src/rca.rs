
use ndarray::{Array2, Axis, Zip};
use tracing::debug;


pub struct RcaFilter {}

impl RcaFilter {

    // the revealed comparative advantage of category i in entity j is its share of the entity,
    // divided by its share of everything:
    //
    //      rca[i, j] = (x[i, j] / col_sum[j]) / (row_sum[i] / total)
    //
    // the ratio is undefined when the entity, the category or the whole matrix sums to zero.
    // those cells are `None` here, and count as no advantage (0) downstream.

    fn score_cells<F>(matrix: &Array2<f64>, resolve: F) -> Array2<f64>
    where
        F: Fn(Option<f64>) -> f64 {

        let col_sums = matrix.sum_axis(Axis(0));
        let row_sums = matrix.sum_axis(Axis(1));
        let total = matrix.sum();

        let mut out: Array2<f64> = Array2::zeros(matrix.raw_dim());
        Zip::indexed(&mut out).and(matrix).for_each(|(i, j), cell, &x| {
            let col = col_sums[j];
            let row = row_sums[i];
            let score = if col == 0.0 || row == 0.0 || total == 0.0 {
                None
            } else {
                Some((x / col) / (row / total))
            };
            *cell = resolve(score);
        });

        out
    }

    /// Continuous RCA scores, same shape as `matrix`; undefined ratios are 0.
    pub fn scores(matrix: &Array2<f64>) -> Array2<f64> {
        Self::score_cells(matrix, |score| score.unwrap_or(0.0))
    }

    /// Binarizes `matrix`: 1 where the RCA score reaches `threshold`, 0 elsewhere.
    ///
    /// Cells whose ratio is undefined are always 0, whatever the threshold.
    pub fn filter(matrix: &Array2<f64>, threshold: f64) -> Array2<f64> {

        let filtered = Self::score_cells(matrix, |score| match score {
            Some(s) if s >= threshold => 1.0,
            _ => 0.0,
        });

        debug!(threshold, kept = filtered.sum(), cells = filtered.len(), "rca filter applied");
        filtered
    }
}
