//! The core library for weak machines and the boosted machine.

pub(crate) mod hypothesis_traits;
pub(crate) mod stump_machine;
pub(crate) mod lut_machine;
pub(crate) mod weak_machine;
pub(crate) mod boosted_machine;


pub use hypothesis_traits::Hypothesis;

pub use stump_machine::StumpMachine;
pub use lut_machine::LutMachine;
pub use weak_machine::WeakMachine;
pub use boosted_machine::BoostedMachine;
