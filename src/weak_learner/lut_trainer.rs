//! Provides the look-up-table trainer.
use rayon::prelude::*;

use crate::{Matrix, Sample, LutMachine, WeakLearner};
use crate::sample::Feature;
use crate::common::checker;


/// How a multivariate LUT round selects its feature(s).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SelectionType {
    /// Each output selects the feature minimizing its own loss.
    Independent,

    /// All outputs share the single feature minimizing the loss
    /// summed over the outputs.
    Shared,
}


/// The weak learner that returns the best
/// [`LutMachine`](LutMachine) for the current loss gradient.
///
/// The features consumed by this trainer must be non-negative
/// integers below the configured number of table entries
/// (e.g. `256` for LBP-style descriptors).
/// For every feature column and every output the trainer buckets
/// the loss gradient into a weighted histogram;
/// a column separates the gradient mass well when the absolute
/// bucket sums are large, so the column minimizing
/// `-Σ |histogram|` is selected.
///
/// # Example
/// ```no_run
/// use lutboost::prelude::*;
///
/// let rows = vec![vec![3.0, 0.0], vec![250.0, 1.0]];
/// let targets = Matrix::from_column(vec![1.0, -1.0]);
/// let sample = Sample::from_rows(&rows[..], targets);
///
/// let mut booster = GradBoost::init(&sample)
///     .loss(Loss::Logistic)
///     .rounds(50);
/// let trainer = LutTrainer::new(256, 1, SelectionType::Independent);
/// let f: BoostedMachine = booster.run(&trainer);
/// ```
pub struct LutTrainer {
    n_entries: usize,
    n_outputs: usize,
    selection_type: SelectionType,
}


impl LutTrainer {
    /// Construct a new `LutTrainer`.
    ///
    /// * `n_entries` — the number of entries of each table,
    ///   i.e. the exclusive upper bound of the feature values.
    /// * `n_outputs` — the number of outputs of the produced machines.
    /// * `selection_type` — see [`SelectionType`](SelectionType).
    pub fn new(
        n_entries: usize,
        n_outputs: usize,
        selection_type: SelectionType,
    ) -> Self
    {
        assert!(n_entries > 0, "A LUT needs at least one entry");
        assert!(n_outputs > 0, "A LUT machine needs at least one output");
        Self { n_entries, n_outputs, selection_type, }
    }


    /// The number of entries of the produced tables.
    pub fn n_entries(&self) -> usize {
        self.n_entries
    }
}


impl WeakLearner for LutTrainer {
    type Hypothesis = LutMachine;


    fn name(&self) -> &str {
        "Look-Up Table"
    }


    fn produce(&self, sample: &Sample, loss_gradient: &Matrix)
        -> Self::Hypothesis
    {
        checker::check_sample(sample);
        let (n_sample, _) = sample.shape();
        checker::check_gradient_shape(loss_gradient, n_sample, self.n_outputs);
        checker::check_lut_features(sample, self.n_entries);

        // `loss_sums[feature][output] = -Σ |weighted histogram|`.
        // One histogram buffer per worker, reused across columns.
        let loss_sums = sample.features()
            .par_iter()
            .map_init(
                || vec![0.0; self.n_entries],
                |histogram, feature| {
                    (0..self.n_outputs).map(|output| {
                        weighted_histogram(
                            feature,
                            loss_gradient.col(output),
                            &mut histogram[..],
                        );
                        -histogram.iter()
                            .map(|h| h.abs())
                            .sum::<f64>()
                    })
                    .collect::<Vec<_>>()
                },
            )
            .collect::<Vec<_>>();

        let selected_indices = match self.selection_type {
            SelectionType::Independent => {
                (0..self.n_outputs).map(|output| {
                        let column = loss_sums.iter()
                            .map(|row| row[output])
                            .collect::<Vec<_>>();
                        argmin(&column[..])
                    })
                    .collect::<Vec<_>>()
            },
            SelectionType::Shared => {
                let totals = loss_sums.iter()
                    .map(|row| row.iter().sum::<f64>())
                    .collect::<Vec<_>>();
                vec![argmin(&totals[..]); self.n_outputs]
            },
        };

        // Re-bucket the selected feature over the full entry range
        // and turn the histogram signs into the table column.
        let columns = selected_indices.iter()
            .enumerate()
            .map(|(output, &feature_index)| {
                let mut histogram = vec![0.0; self.n_entries];
                weighted_histogram(
                    sample.feature(feature_index),
                    loss_gradient.col(output),
                    &mut histogram[..],
                );
                histogram.into_iter()
                    .map(|h| if h > 0.0 { 1.0 } else { -1.0 })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        LutMachine::new(Matrix::from_columns(columns), selected_indices)
    }
}


/// Accumulates `weights` into `histogram`,
/// bucketed by the integer feature values, in a single pass.
/// The buffer is zeroed first; its length is the number of buckets.
///
/// Equivalent to `numpy.histogram(feature, bins=n, range=(0, n-1),
/// weights=weights)[0]` for integer features within range.
pub fn weighted_histogram(
    feature: &Feature,
    weights: &[f64],
    histogram: &mut [f64],
)
{
    assert_eq!(feature.len(), weights.len());

    histogram.iter_mut().for_each(|h| { *h = 0.0; });
    feature.iter()
        .zip(weights)
        .for_each(|(&value, &weight)| {
            histogram[value as usize] += weight;
        });
}


/// The position of the smallest value;
/// the first occurrence wins on ties.
fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (j, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = j;
        }
    }
    best
}
