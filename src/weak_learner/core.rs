//! Provides `WeakLearner` trait.

use crate::{Matrix, Sample, Hypothesis, WeakMachine};


/// The trait [`WeakLearner`](WeakLearner) defines
/// the interface between the boosting driver and the per-round
/// search for the best weak machine.
/// Given the training sample and the loss gradient at the current
/// strong scores, a weak learner returns the machine it judges best.
pub trait WeakLearner {
    /// The type of the weak machines this learner produces.
    type Hypothesis: Hypothesis + Into<WeakMachine> + Sync;


    /// The name of this weak learner.
    fn name(&self) -> &str;


    /// Produces the best weak machine for the given sample and
    /// loss-gradient matrix of shape `samples × outputs`.
    fn produce(&self, sample: &Sample, loss_gradient: &Matrix)
        -> Self::Hypothesis;
}
