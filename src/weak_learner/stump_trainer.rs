//! Provides the decision-stump trainer.
use rayon::prelude::*;

use crate::{Matrix, Sample, StumpMachine, WeakLearner};
use crate::sample::Feature;
use crate::common::checker;


/// The weak learner that returns the best
/// [`StumpMachine`](StumpMachine) for the current loss gradient.
///
/// For every feature column the trainer searches the split point
/// maximizing the magnitude of the correlation (*gain*) between the
/// split and the negated loss gradient,
/// following the weak-learner algorithm of Viola & Jones.
/// Across columns the feature with the largest gain wins;
/// ties keep the earliest feature index.
///
/// This trainer requires a single-output target.
///
/// # Example
/// ```no_run
/// use lutboost::prelude::*;
///
/// let rows = vec![vec![0.5, -1.0], vec![-0.5, 2.0]];
/// let targets = Matrix::from_column(vec![1.0, -1.0]);
/// let sample = Sample::from_rows(&rows[..], targets);
///
/// let mut booster = GradBoost::init(&sample)
///     .loss(Loss::Exponential)
///     .rounds(50);
/// let trainer = StumpTrainer::new();
/// let f: BoostedMachine = booster.run(&trainer);
/// ```
#[derive(Clone, Copy, Default)]
pub struct StumpTrainer;


impl StumpTrainer {
    /// Construct a new `StumpTrainer`.
    pub fn new() -> Self {
        Self
    }
}


impl WeakLearner for StumpTrainer {
    type Hypothesis = StumpMachine;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn produce(&self, sample: &Sample, loss_gradient: &Matrix)
        -> Self::Hypothesis
    {
        checker::check_sample(sample);
        checker::check_univariate_gradient(loss_gradient);
        checker::check_gradient_shape(loss_gradient, sample.shape().0, 1);

        // Stumps maximize the correlation with the *negated* gradient.
        let gradient = loss_gradient.col(0)
            .iter()
            .map(|g| -g)
            .collect::<Vec<_>>();

        let (_, threshold, polarity, feature_index) = sample.features()
            .par_iter()
            .enumerate()
            .map(|(j, feature)| {
                let (polarity, threshold, gain) =
                    compute_threshold(feature, &gradient[..]);
                (gain, threshold, polarity, j)
            })
            .reduce_with(|a, b| {
                // Highest gain wins; on ties, the earliest feature.
                if b.0 > a.0 || (b.0 == a.0 && b.3 < a.3) { b } else { a }
            })
            .expect("The sample has no features");

        StumpMachine::new(threshold, polarity, feature_index)
    }
}


/// Computes the best `(polarity, threshold, gain)` triplet
/// for a single feature column.
///
/// The samples are sorted by feature value and the gain of the
/// split after position `k` is `total - cumsum(k)` of the sorted
/// gradient; the split maximizing `|gain|` is kept.
/// A column with fewer than two distinct values has no
/// discriminative power and reports zero gain.
fn compute_threshold(feature: &Feature, gradient: &[f64])
    -> (f64, f64, f64)
{
    let n_sample = feature.len();

    // Stable sort on the feature value only.
    let mut index = (0..n_sample).collect::<Vec<_>>();
    index.sort_by(|&i, &j| feature[i].partial_cmp(&feature[j]).unwrap());

    if feature[index[0]] == feature[index[n_sample - 1]] {
        return (1.0, 0.0, 0.0);
    }

    let total = gradient.iter().sum::<f64>();

    let mut cumulative = 0.0;
    let mut best_k = 0;
    let mut best_gain = f64::NEG_INFINITY;
    let mut best_abs = f64::NEG_INFINITY;
    for (k, &i) in index.iter().enumerate() {
        cumulative += gradient[i];
        let gain = total - cumulative;
        if gain.abs() > best_abs {
            best_abs = gain.abs();
            best_gain = gain;
            best_k = k;
        }
    }

    let threshold = if best_k == n_sample - 1 {
        feature[index[best_k]]
    } else {
        (feature[index[best_k]] + feature[index[best_k + 1]]) * 0.5
    };

    // Both branches are reachable when the best gain is exactly zero.
    let polarity = if best_gain == best_abs { -1.0 } else { 1.0 };

    (polarity, threshold, best_abs)
}
