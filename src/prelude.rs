//! Exports the boosting driver, the weak learners, and the traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // The gradient-boosting driver
    GradBoost,

    // Observers
    BoostObserver,
    ConsoleObserver,
    QuietObserver,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,

    // Continuous features
    StumpTrainer,

    // Discretized features
    LutTrainer,
    SelectionType,
};


pub use crate::hypothesis::{
    Hypothesis,
    StumpMachine,
    LutMachine,
    WeakMachine,
    BoostedMachine,
};


pub use crate::common::loss_functions::{
    Loss,
    LossFunction,
};


pub use crate::matrix::Matrix;
pub use crate::sample::{Feature, Sample};
