//! Provides the gradient-boosting driver [`GradBoost`].
use crate::{
    Matrix,
    Sample,
    Booster,
    WeakLearner,
    Hypothesis,
    WeakMachine,
    BoostedMachine,

    common::checker,
    common::line_search::LineSearch,
    common::loss_functions::{Loss, LossFunction},
};

use super::observer::{BoostObserver, QuietObserver};

use std::ops::ControlFlow;


/// The boosting driver.
///
/// `GradBoost` assembles a [`BoostedMachine`](BoostedMachine)
/// round by round:
/// it computes the gradient of the configured loss at the current
/// strong scores, asks the weak learner for the best weak machine,
/// scales that machine by an L-BFGS line search over the loss,
/// and appends the scaled machine.
///
/// A hard line-search failure (a warning together with an all-zero
/// scale) terminates training early; the machine accumulated so far
/// is returned and remains fully usable.
///
/// # Example
/// The following code shows a small example
/// for running [`GradBoost`].
/// See also:
/// - [`LutTrainer`]
/// - [`BoostedMachine`]
///
/// [`LutTrainer`]: crate::weak_learner::LutTrainer
///
/// ```no_run
/// use lutboost::prelude::*;
///
/// // Construct the training sample from row-major features and
/// // a `samples × outputs` target matrix with values in {-1, +1}.
/// let rows = vec![
///     vec![ 3.0, 7.0, 0.0],
///     vec![12.0, 2.0, 5.0],
/// ];
/// let targets = Matrix::from_column(vec![1.0, -1.0]);
/// let sample = Sample::from_rows(&rows[..], targets);
///
/// // Initialize `GradBoost`, pick the loss to minimize and
/// // the number of rounds.
/// let mut booster = GradBoost::init(&sample)
///     .loss(Loss::Logistic)
///     .rounds(50);
///
/// // Set the weak learner: 16-entry tables, a single output,
/// // one independently selected feature per output.
/// let trainer = LutTrainer::new(16, 1, SelectionType::Independent);
///
/// // Run `GradBoost` and obtain the resulting strong machine `f`.
/// let f: BoostedMachine = booster.run(&trainer);
///
/// // Get the predictions on the training set.
/// let (scores, labels) = f.predict(&sample);
/// ```
pub struct GradBoost<'a> {
    // Training data
    sample: &'a Sample,

    // The loss to minimize.
    loss: Loss,

    // The number of boosting rounds.
    n_rounds: usize,

    // The strong scores accumulated so far,
    // one column per output.
    scores: Matrix,

    // The machine under construction.
    // `None` until `preprocess` ran.
    machine: Option<BoostedMachine>,

    // A machine to continue training on.
    warm_start: Option<BoostedMachine>,

    // The round training actually reached.
    terminated: usize,

    // Progress/warning sink.
    observer: Box<dyn BoostObserver>,
}


impl<'a> GradBoost<'a> {
    /// Initialize the `GradBoost`.
    /// The default configuration minimizes the logistic loss
    /// for `20` rounds and reports to no one.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            loss: Loss::Logistic,
            n_rounds: 20,
            scores: Matrix::zeros(0, 0),
            machine: None,
            warm_start: None,
            terminated: 0,
            observer: Box::new(QuietObserver),
        }
    }


    /// Set the loss function.
    pub fn loss(mut self, loss: Loss) -> Self {
        self.loss = loss;
        self
    }


    /// Set the number of boosting rounds.
    /// Default number of rounds is `20`.
    pub fn rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }


    /// Continue training on an existing machine.
    /// The strong scores are seeded with the machine's predictions
    /// on the training sample and new weak machines are appended
    /// to it.
    pub fn warm_start(mut self, machine: BoostedMachine) -> Self {
        self.warm_start = Some(machine);
        self
    }


    /// Set the observer that receives progress and warnings.
    /// Default is a silent observer.
    pub fn observer<O>(mut self, observer: O) -> Self
        where O: BoostObserver + 'static,
    {
        self.observer = Box::new(observer);
        self
    }


    /// The round training actually reached.
    /// Smaller than the configured number of rounds
    /// if training terminated early.
    pub fn terminated(&self) -> usize {
        self.terminated
    }
}


impl<H> Booster<H> for GradBoost<'_>
    where H: Hypothesis + Into<WeakMachine> + Sync,
{
    type Output = BoostedMachine;


    fn preprocess<W>(
        &mut self,
        _weak_learner: &W,
    )
        where W: WeakLearner<Hypothesis = H>
    {
        checker::check_sample(self.sample);

        let (n_sample, _) = self.sample.shape();
        let n_outputs = self.sample.n_outputs();

        match self.warm_start.take() {
            Some(machine) => {
                checker::check_output_counts(machine.n_outputs(), n_outputs);
                self.scores = machine.predict(self.sample).0;
                self.machine = Some(machine);
            },
            None => {
                self.scores = Matrix::zeros(n_sample, n_outputs);
                self.machine = Some(BoostedMachine::new(n_outputs));
            },
        }
        self.terminated = self.n_rounds;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        round: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        if round > self.n_rounds {
            return ControlFlow::Break(self.n_rounds);
        }

        let (n_sample, _) = self.sample.shape();
        let n_outputs = self.sample.n_outputs();
        let targets = self.sample.targets();

        // Compute the gradient of the loss at the current scores.
        let loss_gradient = self.loss.loss_gradient(targets, &self.scores);

        // Select the best weak machine for the current round.
        let weak_machine = weak_learner.produce(self.sample, &loss_gradient);
        checker::check_output_counts(n_outputs, weak_machine.n_outputs());

        // Compute its scores on the full training set.
        let mut weak_scores = Matrix::zeros(n_sample, n_outputs);
        weak_machine.score_all(self.sample, &mut weak_scores);

        // Find the scale of the new machine by the line search.
        let line_search = LineSearch::new(
            self.loss, targets, &self.scores, &weak_scores
        );
        let (alpha, warning) = line_search.minimize(n_outputs);

        if let Some(message) = warning {
            if alpha.iter().all(|&a| a == 0.0) {
                // A hard failure: keep what was built so far.
                self.observer.warning(
                    round,
                    &format!(
                        "the line search returned zero weights ({message}); \
                         terminating early"
                    ),
                );
                self.terminated = round - 1;
                return ControlFlow::Break(round);
            }
            self.observer.warning(round, &message);
        }

        // Update the strong scores,
        // `f(x) = f(x) + alpha_r * g_r(x)`,
        // and append the machine.
        self.scores.scaled_add(&alpha[..], &weak_scores);
        self.observer.round_complete(round, self.n_rounds, &alpha[..]);

        self.machine.as_mut()
            .expect("`preprocess` must run before `boost`")
            .add_weak_machine(weak_machine, alpha);

        ControlFlow::Continue(())
    }


    fn postprocess<W>(
        &mut self,
        _weak_learner: &W,
    ) -> Self::Output
        where W: WeakLearner<Hypothesis = H>
    {
        self.machine.take()
            .expect("`preprocess` must run before `postprocess`")
    }
}
