//! The per-round line search.
//!
//! Each boosting round scales its freshly selected weak machine by
//! the vector `alpha` minimizing
//! `Σ_o loss_sum(alpha, targets, previous, weak)[o]`.
//! For the classification losses the per-output sums are separable
//! (each depends only on its own coordinate of `alpha`),
//! so minimizing the total equals minimizing every output;
//! the Jesorsky loss couples the outputs and is minimized jointly.
use argmin::core::{
    CostFunction,
    Error,
    Executor,
    Gradient,
    State,
    TerminationReason,
    TerminationStatus,
};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;

use crate::Matrix;
use crate::common::loss_functions::{Loss, LossFunction};


const MEMORY_SIZE: usize = 10;
const MAX_ITERATIONS: u64 = 100;
// L-BFGS-B-style stopping: gradient and cost-decrease tolerances.
const TOLERANCE_GRAD: f64 = 1e-5;
const TOLERANCE_COST: f64 = 2.2e-9;


/// The objective handed to the L-BFGS solver.
pub(crate) struct LineSearch<'a> {
    loss: Loss,
    targets: &'a Matrix,
    previous_scores: &'a Matrix,
    weak_scores: &'a Matrix,
}


impl<'a> LineSearch<'a> {
    /// Construct the line-search objective of a single round.
    pub(crate) fn new(
        loss: Loss,
        targets: &'a Matrix,
        previous_scores: &'a Matrix,
        weak_scores: &'a Matrix,
    ) -> Self
    {
        Self { loss, targets, previous_scores, weak_scores, }
    }


    /// Minimize the objective over `alpha ∈ ℝ^n_outputs`,
    /// starting from the zero vector.
    ///
    /// Returns the minimizer together with an optional warning.
    /// A warning with an all-zero minimizer signals a hard
    /// optimizer failure; the driver decides the policy.
    pub(crate) fn minimize(self, n_outputs: usize)
        -> (Vec<f64>, Option<String>)
    {
        let init = vec![0.0; n_outputs];

        let linesearch = MoreThuenteLineSearch::new();
        let solver = LBFGS::new(linesearch, MEMORY_SIZE)
            .with_tolerance_grad(TOLERANCE_GRAD)
            .and_then(|solver| solver.with_tolerance_cost(TOLERANCE_COST));
        let solver = match solver {
            Ok(solver) => solver,
            Err(e) => { return (init, Some(e.to_string())); },
        };

        let result = Executor::new(self, solver)
            .configure(|state| {
                state.param(init.clone()).max_iters(MAX_ITERATIONS)
            })
            .run();

        match result {
            Ok(result) => {
                let state = result.state();
                let alpha = state.get_best_param()
                    .cloned()
                    .unwrap_or(init);

                let warning = match state.get_termination_status() {
                    TerminationStatus::Terminated(
                        TerminationReason::SolverConverged
                    )
                    | TerminationStatus::Terminated(
                        TerminationReason::TargetCostReached
                    ) => None,
                    status => Some(format!("{status:?}")),
                };
                (alpha, warning)
            },
            // A failing solver run counts as a hard failure:
            // report the zero vector along with the message.
            Err(e) => (init, Some(e.to_string())),
        }
    }
}


impl CostFunction for LineSearch<'_> {
    type Param = Vec<f64>;
    type Output = f64;


    fn cost(&self, alpha: &Self::Param) -> Result<Self::Output, Error> {
        let total = self.loss
            .loss_sum(
                &alpha[..],
                self.targets,
                self.previous_scores,
                self.weak_scores,
            )
            .into_iter()
            .sum::<f64>();
        Ok(total)
    }
}


impl Gradient for LineSearch<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;


    fn gradient(&self, alpha: &Self::Param)
        -> Result<Self::Gradient, Error>
    {
        let gradient = self.loss.loss_gradient_sum(
            &alpha[..],
            self.targets,
            self.previous_scores,
            self.weak_scores,
        );
        Ok(gradient)
    }
}
