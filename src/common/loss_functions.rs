use crate::Matrix;
use crate::common::checker;


/// This trait defines the loss functions.
/// The two batch methods return elementwise values;
/// the two `*_sum` methods are the reductions consumed by the
/// line search and are provided in terms of the former.
pub trait LossFunction {
    /// The name of the loss function.
    fn name(&self) -> &str;


    /// Elementwise loss for the given targets and scores.
    /// The result has one column per output,
    /// except for losses that reduce over outputs per sample
    /// (see [`Loss::Jesorsky`](Loss::Jesorsky)),
    /// which return a single column.
    fn loss(&self, targets: &Matrix, scores: &Matrix) -> Matrix;


    /// Elementwise gradient of the loss with respect to the scores.
    /// The result always has the same shape as `scores`.
    fn loss_gradient(&self, targets: &Matrix, scores: &Matrix) -> Matrix;


    /// The per-output sum over samples of
    /// `loss(targets, previous_scores + alpha ⊙ weak_scores)`.
    /// This is the objective of the line search.
    fn loss_sum(
        &self,
        alpha: &[f64],
        targets: &Matrix,
        previous_scores: &Matrix,
        weak_scores: &Matrix,
    ) -> Vec<f64>
    {
        let scores = combined_scores(previous_scores, alpha, weak_scores);
        self.loss(targets, &scores).column_sums()
    }


    /// The analytic derivative of [`LossFunction::loss_sum`]
    /// with respect to `alpha`:
    /// `Σ_i loss_gradient(targets, prev + alpha ⊙ weak)[i, o] * weak[i, o]`
    /// per output `o`.
    fn loss_gradient_sum(
        &self,
        alpha: &[f64],
        targets: &Matrix,
        previous_scores: &Matrix,
        weak_scores: &Matrix,
    ) -> Vec<f64>
    {
        let scores = combined_scores(previous_scores, alpha, weak_scores);
        let gradient = self.loss_gradient(targets, &scores);

        gradient.columns()
            .zip(weak_scores.columns())
            .map(|(g, w)| {
                g.iter()
                    .zip(w)
                    .map(|(g, w)| g * w)
                    .sum::<f64>()
            })
            .collect()
    }
}


/// The loss functions available to the boosting driver.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    /// Exponential loss `exp(-t s)`.
    /// The classical AdaBoost surrogate,
    /// preferred with the stump trainer.
    Exponential,

    /// Logistic loss `ln(1 + exp(-t s))`,
    /// preferred with the LUT trainer.
    Logistic,

    /// Tangential loss `(2 atan(t s) - 1)^2`.
    Tangential,

    /// Jesorsky loss for regression over 2-D landmark coordinates.
    /// Targets are `(y, x)` pairs and the first two pairs are the
    /// anchor points; each sample's Euclidean errors are scaled by
    /// the inverse distance between the anchors.
    /// The number of outputs must be even and at least `4`.
    Jesorsky,
}


impl LossFunction for Loss {
    fn name(&self) -> &str {
        match self {
            Self::Exponential => "Exponential loss",
            Self::Logistic    => "Logistic loss",
            Self::Tangential  => "Tangential loss",
            Self::Jesorsky    => "Jesorsky loss",
        }
    }


    fn loss(&self, targets: &Matrix, scores: &Matrix) -> Matrix {
        match self {
            Self::Exponential => {
                elementwise(targets, scores, |t, s| (-(t * s)).exp())
            },
            Self::Logistic => {
                elementwise(
                    targets, scores, |t, s| (1.0 + (-(t * s)).exp()).ln()
                )
            },
            Self::Tangential => {
                elementwise(
                    targets, scores,
                    |t, s| (2.0 * (t * s).atan() - 1.0).powi(2)
                )
            },
            Self::Jesorsky => jesorsky_loss(targets, scores),
        }
    }


    fn loss_gradient(&self, targets: &Matrix, scores: &Matrix) -> Matrix {
        match self {
            Self::Exponential => {
                elementwise(targets, scores, |t, s| -t * (-(t * s)).exp())
            },
            Self::Logistic => {
                elementwise(targets, scores, |t, s| {
                    let e = (-(t * s)).exp();
                    -t * e / (1.0 + e)
                })
            },
            Self::Tangential => {
                // Note the missing target factor for `t = -1`.
                elementwise(targets, scores, |t, s| {
                    let m = t * s;
                    4.0 * (2.0 * m.atan() - 1.0) / (1.0 + m.powi(2))
                })
            },
            Self::Jesorsky => jesorsky_gradient(targets, scores),
        }
    }
}


/// Computes `previous_scores + alpha ⊙ weak_scores`.
fn combined_scores(
    previous_scores: &Matrix,
    alpha: &[f64],
    weak_scores: &Matrix,
) -> Matrix
{
    let mut scores = previous_scores.clone();
    scores.scaled_add(alpha, weak_scores);
    scores
}


/// Apply the closure to every `(target, score)` pair.
fn elementwise<F>(targets: &Matrix, scores: &Matrix, f: F) -> Matrix
    where F: Fn(f64, f64) -> f64,
{
    assert_eq!(targets.shape(), scores.shape());

    let cols = targets.columns()
        .zip(scores.columns())
        .map(|(ts, ss)| {
            ts.iter()
                .zip(ss)
                .map(|(&t, &s)| f(t, s))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Matrix::from_columns(cols)
}


/// The distance between the two anchor points of the `i`-th target row.
/// The anchors are stored as the first two `(y, x)` pairs.
fn anchor_distance(targets: &Matrix, i: usize) -> f64 {
    let dy = targets[(i, 0)] - targets[(i, 2)];
    let dx = targets[(i, 1)] - targets[(i, 3)];
    let distance = (dy.powi(2) + dx.powi(2)).sqrt();

    assert!(
        distance != 0.0,
        "The Jesorsky loss requires a non-zero distance \
         between the anchor points"
    );
    distance
}


/// One error per sample: the sum over coordinate pairs of the
/// Euclidean error, scaled by the inverse anchor distance.
fn jesorsky_loss(targets: &Matrix, scores: &Matrix) -> Matrix {
    let (n_sample, n_output) = targets.shape();
    checker::check_jesorsky_outputs(n_output);
    assert_eq!(targets.shape(), scores.shape());

    let mut errors = vec![0.0; n_sample];
    for i in 0..n_sample {
        let scale = 1.0 / anchor_distance(targets, i);
        for j in (0..n_output).step_by(2) {
            let dy = scores[(i, j)] - targets[(i, j)];
            let dx = scores[(i, j + 1)] - targets[(i, j + 1)];
            errors[i] += (dy.powi(2) + dx.powi(2)).sqrt() * scale;
        }
    }

    Matrix::from_column(errors)
}


/// The per-coordinate partial derivatives of the Jesorsky loss.
fn jesorsky_gradient(targets: &Matrix, scores: &Matrix) -> Matrix {
    let (n_sample, n_output) = targets.shape();
    checker::check_jesorsky_outputs(n_output);
    assert_eq!(targets.shape(), scores.shape());

    let mut gradient = Matrix::zeros(n_sample, n_output);
    for i in 0..n_sample {
        let scale = 1.0 / anchor_distance(targets, i);
        for j in (0..n_output).step_by(2) {
            let dy = scores[(i, j)] - targets[(i, j)];
            let dx = scores[(i, j + 1)] - targets[(i, j + 1)];
            let error = scale / (dy.powi(2) + dx.powi(2)).sqrt();
            gradient.set(i, j, dy * error);
            gradient.set(i, j + 1, dx * error);
        }
    }

    gradient
}
