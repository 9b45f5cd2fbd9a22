use crate::{Matrix, Sample};

use rayon::prelude::*;


/// A trait that defines the behavior of a weak machine.
/// Weak machines are confidence-rated:
/// every score is a value in `{-1.0, +1.0}`.
pub trait Hypothesis {
    /// The number of outputs this machine predicts.
    fn n_outputs(&self) -> usize;


    /// The feature indices this machine reads.
    fn feature_indices(&self) -> Vec<usize>;


    /// Computes the score of the `row`-th example of `sample`
    /// for the given `output`.
    fn score(&self, sample: &Sample, row: usize, output: usize) -> f64;


    /// Computes the scores of all examples of `sample`,
    /// writing one column per output into `scores`.
    fn score_all(&self, sample: &Sample, scores: &mut Matrix)
        where Self: Sync,
    {
        let n_sample = sample.shape().0;
        let n_outputs = self.n_outputs();
        assert_eq!(scores.shape(), (n_sample, n_outputs));

        (0..n_outputs).for_each(|output| {
            let col = scores.col_mut(output);
            col.par_iter_mut()
                .enumerate()
                .for_each(|(row, s)| {
                    *s = self.score(sample, row, output);
                });
        });
    }
}
