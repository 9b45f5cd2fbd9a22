#![warn(missing_docs)]

//!
//! A crate that provides gradient boosting over simple weak machines.
//!
//! Training alternates three steps for a configured number of rounds:
//!
//! - Compute the gradient of a differentiable loss
//!   ([`Loss`](Loss)) at the current strong scores.
//! - Ask a weak learner for the machine best aligned with that
//!   gradient.
//!   Two weak learners are provided:
//!     [`StumpTrainer`](StumpTrainer) searches a threshold/polarity
//!     pair over continuous features, and
//!     [`LutTrainer`](LutTrainer) searches a `±1` look-up table over
//!     discretized features, for one or many outputs.
//! - Scale the new machine by an L-BFGS line search over the loss
//!   and append it to the strong classifier
//!   ([`BoostedMachine`](BoostedMachine)).
//!
//! The resulting machine predicts by summing the scaled weak scores
//! and serializes through `serde`,
//! with one type-tagged record per weak machine.

pub mod matrix;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod common;
pub mod prelude;


pub use matrix::Matrix;

pub use sample::{
    Feature,
    Sample,
};

pub use hypothesis::{
    Hypothesis,
    StumpMachine,
    LutMachine,
    WeakMachine,
    BoostedMachine,
};

pub use weak_learner::{
    WeakLearner,
    StumpTrainer,
    LutTrainer,
    SelectionType,
    weighted_histogram,
};

pub use booster::{
    Booster,
    GradBoost,
    BoostObserver,
    ConsoleObserver,
    QuietObserver,
};

pub use common::loss_functions::{
    Loss,
    LossFunction,
};
