//! Provides the boosting driver.

mod core;
mod grad_boost;
mod observer;


/// Booster trait
pub use self::core::Booster;

pub use self::grad_boost::GradBoost;

pub use self::observer::{
    BoostObserver,
    ConsoleObserver,
    QuietObserver,
};
