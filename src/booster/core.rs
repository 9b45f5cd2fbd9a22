//! Provides `Booster` trait.

use crate::WeakLearner;

use std::ops::ControlFlow;


/// The trait [`Booster`](Booster) defines the standard framework
/// of boosting.
///
/// A booster repeats rounds until [`Booster::boost`](Booster::boost)
/// breaks the loop:
/// either because the configured number of rounds is reached or
/// because the round could not be completed
/// (e.g., an unrecoverable line-search failure).
pub trait Booster<H> {
    /// The strong hypothesis this booster returns.
    type Output;


    /// A main function that runs the boosting algorithm.
    fn run<W>(
        &mut self,
        weak_learner: &W,
    ) -> Self::Output
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess(weak_learner);

        let _ = (1..).try_for_each(|round| {
            self.boost(weak_learner, round)
        });

        self.postprocess(weak_learner)
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`](Booster::run),
    /// this method is called before the boosting process.
    fn preprocess<W>(
        &mut self,
        weak_learner: &W,
    )
        where W: WeakLearner<Hypothesis = H>;


    /// Boosting step per round.
    /// This method returns
    /// `ControlFlow::Continue(())` if the round was kept,
    /// `ControlFlow::Break(terminated_round)` otherwise.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        round: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>;


    /// Post-processing.
    /// This method returns the combined hypothesis.
    fn postprocess<W>(
        &mut self,
        weak_learner: &W,
    ) -> Self::Output
        where W: WeakLearner<Hypothesis = H>;
}
