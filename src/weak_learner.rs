//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and the weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines the decision-stump trainer.
pub mod stump_trainer;

/// Defines the look-up-table trainer.
pub mod lut_trainer;


pub use self::core::WeakLearner;

pub use self::stump_trainer::StumpTrainer;

pub use self::lut_trainer::{
    LutTrainer,
    SelectionType,
    weighted_histogram,
};
