use serde::{Serialize, Deserialize};

use crate::{Sample, Hypothesis};


/// A decision stump:
/// a one-feature threshold rule with a polarity flip.
/// An example scores `-1.0` if its selected feature value lies
/// below the threshold and `+1.0` otherwise;
/// the result is then multiplied by the polarity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StumpMachine {
    /// The decision threshold.
    pub threshold: f64,
    /// The direction of the decision, `-1.0` or `+1.0`.
    pub polarity: f64,
    /// The index of the feature this stump reads.
    pub feature_index: usize,
}


impl StumpMachine {
    /// Construct a new `StumpMachine`.
    #[inline]
    pub fn new(threshold: f64, polarity: f64, feature_index: usize) -> Self {
        Self { threshold, polarity, feature_index, }
    }
}


impl Hypothesis for StumpMachine {
    fn n_outputs(&self) -> usize {
        1
    }


    fn feature_indices(&self) -> Vec<usize> {
        vec![self.feature_index]
    }


    fn score(&self, sample: &Sample, row: usize, _output: usize) -> f64 {
        let value = sample.feature(self.feature_index)[row];
        let side = if value < self.threshold { -1.0 } else { 1.0 };
        self.polarity * side
    }
}
