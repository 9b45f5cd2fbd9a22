//! Observers for the events of a boosting run.
use colored::Colorize;


/// The driver reports progress and line-search warnings through
/// this interface instead of a process-wide logger,
/// so callers decide where the output goes.
/// All methods default to doing nothing.
pub trait BoostObserver {
    /// Called after a kept round with the scale the line search
    /// assigned to the new weak machine.
    fn round_complete(
        &self,
        _round: usize,
        _n_rounds: usize,
        _alpha: &[f64],
    )
    {
    }


    /// Called when the line search reports a problem.
    /// A warning may precede an early termination.
    fn warning(&self, _round: usize, _message: &str) {
    }
}


/// The default observer. Ignores every event.
#[derive(Clone, Copy, Default)]
pub struct QuietObserver;


impl BoostObserver for QuietObserver {}


/// An observer that prints every event to the terminal.
#[derive(Clone, Copy, Default)]
pub struct ConsoleObserver;


impl BoostObserver for ConsoleObserver {
    fn round_complete(
        &self,
        round: usize,
        n_rounds: usize,
        alpha: &[f64],
    )
    {
        let header = format!("[round {round: >4} / {n_rounds}]");
        let weights = alpha.iter()
            .map(|a| format!("{a: >9.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} alpha = [{weights}]", header.bold().green());
    }


    fn warning(&self, round: usize, message: &str) {
        let header = format!("[round {round: >4}]");
        eprintln!("{} {message}", header.bold().yellow());
    }
}
