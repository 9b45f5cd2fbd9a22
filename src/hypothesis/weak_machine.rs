use serde::{Serialize, Deserialize};

use crate::{Sample, Hypothesis};
use super::stump_machine::StumpMachine;
use super::lut_machine::LutMachine;


/// The weak machines a [`BoostedMachine`](crate::BoostedMachine)
/// can hold.
/// Machines of different kinds can coexist in one boosted machine;
/// the serialized form tags every record with its `machine_type`
/// so that loading reconstructs the right variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "machine_type")]
pub enum WeakMachine {
    /// A decision stump.
    #[serde(rename = "StumpMachine")]
    Stump(StumpMachine),

    /// A look-up-table machine.
    #[serde(rename = "LUTMachine")]
    Lut(LutMachine),
}


impl From<StumpMachine> for WeakMachine {
    fn from(machine: StumpMachine) -> Self {
        Self::Stump(machine)
    }
}


impl From<LutMachine> for WeakMachine {
    fn from(machine: LutMachine) -> Self {
        Self::Lut(machine)
    }
}


impl Hypothesis for WeakMachine {
    fn n_outputs(&self) -> usize {
        match self {
            Self::Stump(machine) => machine.n_outputs(),
            Self::Lut(machine)   => machine.n_outputs(),
        }
    }


    fn feature_indices(&self) -> Vec<usize> {
        match self {
            Self::Stump(machine) => machine.feature_indices(),
            Self::Lut(machine)   => machine.feature_indices(),
        }
    }


    fn score(&self, sample: &Sample, row: usize, output: usize) -> f64 {
        match self {
            Self::Stump(machine) => machine.score(sample, row, output),
            Self::Lut(machine)   => machine.score(sample, row, output),
        }
    }
}
